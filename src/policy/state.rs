use crate::*;

/// Lifecycle of a strategy within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Running,
    Ended,
}

/// Per-session bookkeeping mutated on every turn.
#[derive(Debug, Clone, Default)]
pub struct Negotiation {
    pub(crate) received: Option<Bid>,
    pub(crate) proposed: Option<Bid>,
    pub(crate) round: usize,
    pub(crate) time: Time,
    pub(crate) phase: Phase,
}

impl Negotiation {
    /// Last bid offered to us by any counterparty.
    pub fn received(&self) -> Option<&Bid> {
        self.received.as_ref()
    }
    /// Last bid we offered.
    pub fn proposed(&self) -> Option<&Bid> {
        self.proposed.as_ref()
    }
    /// Number of turns in which we made a decision before the deadline.
    pub fn round(&self) -> usize {
        self.round
    }
    /// Time observed at our most recent turn.
    pub fn time(&self) -> Time {
        self.time
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
}
