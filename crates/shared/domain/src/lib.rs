//! # Domain Models
//!
//! Plain data shared by every Lipi crate: the service configuration tree and
//! API-wide constants. Keep it lean: `serde` only, no I/O, no logic beyond defaults.

pub mod config;
pub mod constants;
