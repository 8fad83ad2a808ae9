use serde_json::Value;
use thiserror::Error;

use crate::hash::TxHash;

/// What the poller was asked to wait for: one transaction or an ordered
/// batch of transactions.
///
/// This is the tagged form of the single-vs-collection dispatch. Typed
/// callers construct it directly (or via the `From` impls); dynamic callers
/// go through [`PollTarget::try_from`] on a JSON value, which is where the
/// "Invalid Type" validation lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollTarget {
    /// A single transaction hash.
    Single(TxHash),
    /// An ordered batch of hashes, polled one after another.
    Many(Vec<TxHash>),
}

/// The value handed to the poller was neither a hash nor a list of hashes.
///
/// Raised synchronously, before any lookup is issued.
#[derive(Debug, Clone, Error)]
#[error("Invalid Type: expected a transaction hash or an array of hashes, got {got}")]
pub struct InvalidTargetError {
    got: &'static str,
}

impl InvalidTargetError {
    #[must_use]
    pub fn new(got: &'static str) -> Self {
        Self { got }
    }

    /// The JSON type name of the rejected value.
    #[must_use]
    pub fn got(&self) -> &'static str {
        self.got
    }
}

impl From<TxHash> for PollTarget {
    fn from(hash: TxHash) -> Self {
        Self::Single(hash)
    }
}

impl From<&str> for PollTarget {
    fn from(hash: &str) -> Self {
        Self::Single(TxHash::from(hash))
    }
}

impl From<Vec<TxHash>> for PollTarget {
    fn from(hashes: Vec<TxHash>) -> Self {
        Self::Many(hashes)
    }
}

impl FromIterator<TxHash> for PollTarget {
    fn from_iter<I: IntoIterator<Item = TxHash>>(iter: I) -> Self {
        Self::Many(iter.into_iter().collect())
    }
}

impl TryFrom<&Value> for PollTarget {
    type Error = InvalidTargetError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(hash) => Ok(Self::Single(TxHash::new(hash.clone()))),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(hash) => Ok(TxHash::new(hash.clone())),
                    other => Err(InvalidTargetError::new(json_type_name(other))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Many),
            other => Err(InvalidTargetError::new(json_type_name(other))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
