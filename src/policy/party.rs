use crate::*;

/// Capability surface a negotiation driver needs from a participant.
///
/// Construction is left to each implementor, since what a party needs to
/// start (utility space, timeline, randomness) differs between them. The
/// driver guarantees calls are sequential, never concurrent.
pub trait Party {
    /// Choose our next move.
    fn decide(&mut self) -> anyhow::Result<Action>;
    /// Observe a move made by `sender`.
    fn receive(&mut self, sender: &str, action: &Action) -> anyhow::Result<()>;
    /// Static identifier of the strategy.
    fn describe(&self) -> &'static str;
    /// Our own utility for a bid.
    fn utility(&self, bid: &Bid) -> Utility;
    /// End-of-session dump of whatever the party learned.
    fn report(&self) -> String {
        String::new()
    }
}
