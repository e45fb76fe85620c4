// email-icons - platform/mod.rs
//
// Platform layer: filesystem listing and config file loading.
// Must NOT depend on: core, app.

pub mod config;
pub mod fs;
