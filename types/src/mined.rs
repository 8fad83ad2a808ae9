/// The poller's terminal value, mirroring the shape of the request.
///
/// A [`PollTarget::Single`](crate::PollTarget::Single) request resolves to
/// `Single`; a [`PollTarget::Many`](crate::PollTarget::Many) request resolves
/// to `Many` with one receipt per hash, in request order.
///
/// This is a sum type so callers cannot confuse the two shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mined<R> {
    /// Receipt for a single-hash request.
    Single(R),
    /// Receipts for a batch request, in the order the hashes were given.
    Many(Vec<R>),
}

impl<R> Mined<R> {
    /// Returns the single receipt, or `None` for a batch result.
    #[must_use]
    pub fn into_single(self) -> Option<R> {
        match self {
            Self::Single(receipt) => Some(receipt),
            Self::Many(_) => None,
        }
    }

    /// Returns the batch of receipts, or `None` for a single result.
    #[must_use]
    pub fn into_many(self) -> Option<Vec<R>> {
        match self {
            Self::Many(receipts) => Some(receipts),
            Self::Single(_) => None,
        }
    }

    /// Number of receipts carried: 1 for `Single`, the batch length for `Many`.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Many(receipts) => receipts.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
