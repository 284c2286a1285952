//! Future racing with a deadline.

use std::future::Future;
use std::pin::pin;

use futures::future::{self, Either};

/// Result of racing a future against a deadline.
#[derive(Debug, PartialEq, Eq)]
pub enum RaceResult<T> {
    /// The future completed before the deadline.
    Completed(T),
    /// The deadline fired first.
    TimedOut,
}

/// Race `future` against `deadline`.
///
/// The work future is polled first, so a future that is ready at the same
/// time as the deadline still counts as completed. The loser is dropped.
pub async fn race_with_deadline<F, D>(future: F, deadline: D) -> RaceResult<F::Output>
where
    F: Future,
    D: Future<Output = ()>,
{
    match future::select(pin!(future), pin!(deadline)).await {
        Either::Left((value, _)) => RaceResult::Completed(value),
        Either::Right(((), _)) => RaceResult::TimedOut,
    }
}
