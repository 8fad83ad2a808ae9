//! Core domain types for minewait.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies:
//!
//! - [`TxHash`]: opaque transaction hash
//! - [`PollTarget`]: single hash vs. ordered batch of hashes, with the
//!   synchronous "Invalid Type" validation boundary for dynamic JSON input
//! - [`Mined`]: poll result mirroring the shape of the request

mod hash;
mod mined;
mod target;

pub use hash::TxHash;
pub use mined::Mined;
pub use target::{InvalidTargetError, PollTarget};
