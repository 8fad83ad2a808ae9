//! Polling for mined transaction receipts.
//!
//! The lookup collaborator is injected by the caller; it returns
//! `Ok(Some(receipt))` once the transaction is mined, `Ok(None)` while it is
//! still pending, and `Err(_)` on RPC failure. The poller re-asks at a fixed
//! interval while the lookup keeps answering `Ok(None)`.

use std::future::Future;
use std::time::Duration;

use minewait_types::{InvalidTargetError, Mined, PollTarget, TxHash};
use serde_json::Value;

/// Interval between poll attempts when the caller does not pick one.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Polls `lookup` until every hash in `target` has a receipt.
///
/// The first lookup for a hash is issued immediately; while it answers
/// `Ok(None)` ("not mined yet"), the next attempt is scheduled `interval`
/// after the null answer arrives. There is no attempt cap and no timeout:
/// the loop ends only when the lookup yields a receipt or fails. A lookup
/// failure is returned verbatim, with no retry.
///
/// For [`PollTarget::Many`], hashes are polled strictly one at a time, in
/// input order; hash *i + 1* is not polled until hash *i* has its terminal
/// result, and the first failure aborts the remaining hashes. The result is
/// [`Mined::Many`] with one receipt per hash, in input order.
///
/// Dropping the returned future stops the polling; nothing keeps running in
/// the background.
pub async fn receipt_mined<L, Fut, R, E>(
    lookup: &L,
    target: impl Into<PollTarget>,
    interval: Option<Duration>,
) -> Result<Mined<R>, E>
where
    L: Fn(&TxHash) -> Fut,
    Fut: Future<Output = Result<Option<R>, E>>,
{
    let interval = interval.unwrap_or(DEFAULT_POLL_INTERVAL);
    match target.into() {
        PollTarget::Single(hash) => poll_single(lookup, &hash, interval).await.map(Mined::Single),
        PollTarget::Many(hashes) => {
            let mut receipts = Vec::with_capacity(hashes.len());
            for hash in &hashes {
                receipts.push(poll_single(lookup, hash, interval).await?);
            }
            Ok(Mined::Many(receipts))
        }
    }
}

/// Dynamic-input variant of [`receipt_mined`] for callers holding JSON.
///
/// The value is validated synchronously: a string polls a single hash, an
/// array of strings polls a batch, and anything else is rejected with
/// [`InvalidTargetError`] before any lookup is issued. On success the poll
/// future is returned un-started; awaiting it behaves exactly like
/// [`receipt_mined`].
pub fn receipt_mined_value<'a, L, Fut, R, E>(
    lookup: &'a L,
    value: &Value,
    interval: Option<Duration>,
) -> Result<impl Future<Output = Result<Mined<R>, E>> + use<'a, L, Fut, R, E>, InvalidTargetError>
where
    L: Fn(&TxHash) -> Fut,
    Fut: Future<Output = Result<Option<R>, E>>,
{
    let target = PollTarget::try_from(value)?;
    Ok(receipt_mined(lookup, target, interval))
}

async fn poll_single<L, Fut, R, E>(lookup: &L, hash: &TxHash, interval: Duration) -> Result<R, E>
where
    L: Fn(&TxHash) -> Fut,
    Fut: Future<Output = Result<Option<R>, E>>,
{
    let mut attempt: u32 = 1;
    loop {
        if let Some(receipt) = lookup(hash).await? {
            return Ok(receipt);
        }
        tracing::debug!(%hash, attempt, ?interval, "transaction not yet mined; scheduling next poll");
        tokio::time::sleep(interval).await;
        attempt += 1;
    }
}
