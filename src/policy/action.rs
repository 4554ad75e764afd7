use crate::*;

/// A move in an alternating-offers session, made by us or received from
/// a counterparty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Agree to the offer currently on the table.
    Accept(Bid),
    /// Put a new bid on the table.
    Offer(Bid),
    /// Walk away from the negotiation.
    End,
}

impl Action {
    pub fn bid(&self) -> Option<&Bid> {
        match self {
            Action::Accept(bid) | Action::Offer(bid) => Some(bid),
            Action::End => None,
        }
    }
    pub fn is_end(&self) -> bool {
        matches!(self, Action::End)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Accept(bid) => write!(f, "ACCEPT {}", bid),
            Action::Offer(bid) => write!(f, "OFFER  {}", bid),
            Action::End => write!(f, "END"),
        }
    }
}
