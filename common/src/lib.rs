//! # Shared address model
//!
//! Types and arithmetic used by every other crate in the workspace:
//!
//! * **[`network::spec`]**: CIDR network specifications and containment.
//! * **[`network::range`]**: enumeration of usable host addresses.
//! * **[`network::interface`]**: snapshots of the host's interface addresses.
//! * **[`error`]**: the error taxonomy shared by the library crates.

pub mod config;
pub mod error;
pub mod network;
