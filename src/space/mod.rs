//! Read-only collaborators supplied by the negotiation environment.
//!
//! The strategy core only ever talks to [`Space`] and [`Timeline`]. The
//! concrete types here back the simulation driver and the tests.
mod additive;
mod clock;

pub use additive::*;
pub use clock::*;

use crate::*;

/// Utility space over a discrete domain.
///
/// Owns the domain, the per-issue weighting, and the per-value integer
/// evaluations. Aggregation and max-bid search are its business, not the
/// strategy's.
pub trait Space {
    /// The domain this space is defined over.
    fn domain(&self) -> &Domain;
    /// Weighting of an issue. Weights across the domain sum to 1.
    fn weight(&self, issue: &Issue) -> Weight;
    /// Integer evaluation of a value of an issue.
    fn score(&self, issue: &Issue, value: &Value) -> Score;
    /// Aggregate utility of a complete bid, in [0, 1].
    fn utility(&self, bid: &Bid) -> Utility;
    /// Bid with the highest utility. May be unavailable.
    fn best(&self) -> anyhow::Result<Bid>;
}

/// Session clock, normalized to [0, 1] and monotone within a session.
pub trait Timeline {
    fn time(&self) -> Time;
}
