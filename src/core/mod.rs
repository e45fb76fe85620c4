// email-icons - core/mod.rs
//
// Core layer: icon catalog, SVG synthesis, filename canonicalisation.
// Dependencies: util only.
// Must NOT depend on: platform, app, or perform any I/O.

pub mod catalog;
pub mod model;
pub mod naming;
pub mod svg;
