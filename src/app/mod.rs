// email-icons - app/mod.rs
//
// Application layer: the two maintenance jobs.
// Dependencies: core, platform, util.

pub mod generate;
pub mod normalize;
