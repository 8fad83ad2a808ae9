//! Async control-flow primitives for blockchain RPC clients.
//!
//! Two building blocks, composed by the caller rather than by each other:
//!
//! - [`sequence`]: runners that execute deferred async tasks strictly one
//!   after another, preserving positional order ([`all_sequential`]) or key
//!   association ([`all_sequential_named`]).
//! - [`mined`]: a poller that re-asks an injected receipt lookup at a fixed
//!   interval until the transaction is mined ([`receipt_mined`]), accepting
//!   a single hash or an ordered batch.
//!
//! Everything runs on the caller's tokio runtime; nothing here spawns tasks
//! or performs IO.

pub mod mined;
pub mod sequence;

pub use mined::{DEFAULT_POLL_INTERVAL, receipt_mined, receipt_mined_value};
pub use sequence::{all_sequential, all_sequential_named};

pub use minewait_types::{InvalidTargetError, Mined, PollTarget, TxHash};
