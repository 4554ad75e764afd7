use crate::*;

/// How a session finished.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Every other party accepted `bid` in succession.
    Agreement {
        bid: Bid,
        round: usize,
        utilities: Vec<(String, Utility)>,
    },
    /// A party walked away.
    Breakdown { round: usize, by: String },
    /// The driver ran out of turns with no agreement and nobody leaving.
    Timeout { rounds: usize },
}

impl Outcome {
    pub fn is_agreement(&self) -> bool {
        matches!(self, Outcome::Agreement { .. })
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Agreement {
                bid,
                round,
                utilities,
            } => {
                write!(f, "agreement in round {} on {}", round, bid)?;
                for (name, utility) in utilities {
                    write!(f, "\n  {:<16}{:.3}", name, utility)?;
                }
                Ok(())
            }
            Outcome::Breakdown { round, by } => write!(f, "breakdown in round {} by {}", round, by),
            Outcome::Timeout { rounds } => write!(f, "no agreement after {} rounds", rounds),
        }
    }
}
