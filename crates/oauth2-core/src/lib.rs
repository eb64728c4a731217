//! Framework-agnostic OAuth2 authorization-request types and helpers.
//!
//! The request model keeps the raw inbound parameters and the derived scope in
//! separately owned containers, so changing one never leaks into the other.

pub mod factory;
pub mod models;
pub mod params;

pub use factory::*;
pub use models::*;
pub use params::*;
