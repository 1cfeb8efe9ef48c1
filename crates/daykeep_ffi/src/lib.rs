//! FFI crate exposing the daykeep core to the mobile host.

pub mod api;
