//! # Local network policies
//!
//! * **[`discovery`]**: which local ranges are worth scanning.
//! * **[`resolver`]**: which local address belongs to which range.
//!
//! Every operation takes a [`NetworkInterfaceProvider`] and reads one fresh
//! snapshot per call; nothing is cached between calls.
//!
//! [`NetworkInterfaceProvider`]: lanrange_common::network::interface::NetworkInterfaceProvider

pub mod discovery;
pub mod resolver;
