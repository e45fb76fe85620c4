// email-icons - lib.rs
//
// Library entry point shared by the `gen-hero-icons` and
// `normalize-fallback-icons` binaries and the integration tests.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
