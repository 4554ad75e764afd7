use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Example counterparty that offers random bids.
///
/// Accepts any offer on the table worth at least its reservation utility,
/// and walks away at the deadline.
pub struct Fish<S, C, R = SmallRng> {
    space: S,
    timeline: C,
    rng: R,
    reservation: Utility,
    table: Option<Bid>,
}

impl<S, C> Fish<S, C, SmallRng>
where
    S: Space,
    C: Timeline,
{
    pub fn initialize(space: S, timeline: C, reservation: Utility) -> Self {
        Self::seeded(space, timeline, reservation, SmallRng::from_os_rng())
    }
}

impl<S, C, R> Fish<S, C, R>
where
    S: Space,
    C: Timeline,
    R: Rng,
{
    pub fn seeded(space: S, timeline: C, reservation: Utility, rng: R) -> Self {
        Self {
            space,
            timeline,
            rng,
            reservation,
            table: None,
        }
    }
    fn random(&mut self) -> Bid {
        let ref mut rng = self.rng;
        self.space
            .domain()
            .issues()
            .iter()
            .filter_map(|issue| issue.values().choose(rng).map(|v| (issue.id(), v.clone())))
            .collect()
    }
}

impl<S, C, R> Party for Fish<S, C, R>
where
    S: Space,
    C: Timeline,
    R: Rng,
{
    fn decide(&mut self) -> anyhow::Result<Action> {
        if self.timeline.time() >= DEADLINE {
            return Ok(Action::End);
        }
        match self.table.clone() {
            Some(bid) if self.space.utility(&bid) >= self.reservation => Ok(Action::Accept(bid)),
            _ => Ok(Action::Offer(self.random())),
        }
    }
    fn receive(&mut self, _: &str, action: &Action) -> anyhow::Result<()> {
        if let Action::Offer(bid) = action {
            self.table = Some(bid.clone());
        }
        Ok(())
    }
    fn describe(&self) -> &'static str {
        "Fish"
    }
    fn utility(&self, bid: &Bid) -> Utility {
        self.space.utility(bid)
    }
}
