use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Opponent-modelling concession strategy.
///
/// Offers its best bid for the first half of the session, then concedes
/// linearly toward a utility floor of 0.8, sampling concession bids biased
/// toward values its two opponents have been offering.
///
/// Turn rules, in order:
///
/// 1. `t >= 1` — end the negotiation
/// 2. received offer at least as good as our last offer — accept
/// 3. `t < 0.5` — offer our best bid
/// 4. received offer above the concession floor — accept
/// 5. otherwise — offer a generated concession bid
pub struct Agent<S, C, R = SmallRng> {
    space: S,
    timeline: C,
    rng: R,
    preference: Preference,
    opponents: Opponents,
    state: Negotiation,
}

impl<S, C> Agent<S, C, SmallRng>
where
    S: Space,
    C: Timeline,
{
    /// One-time session setup with entropy-seeded randomness.
    pub fn initialize(space: S, timeline: C) -> Self {
        Self::seeded(space, timeline, SmallRng::from_os_rng())
    }
}

impl<S, C, R> Agent<S, C, R>
where
    S: Space,
    C: Timeline,
    R: Rng,
{
    /// One-time session setup with injected randomness.
    pub fn seeded(space: S, timeline: C, rng: R) -> Self {
        let preference = Preference::from(&space);
        let opponents = Opponents::from(space.domain());
        Self {
            space,
            timeline,
            rng,
            preference,
            opponents,
            state: Negotiation::default(),
        }
    }
    pub fn preference(&self) -> &Preference {
        &self.preference
    }
    pub fn opponents(&self) -> &Opponents {
        &self.opponents
    }
    pub fn negotiation(&self) -> &Negotiation {
        &self.state
    }

    fn best(&self) -> Result<Bid, NegotiationError> {
        self.space.best().map_err(|e| {
            log::warn!("maximum utility bid unavailable: {:#}", e);
            NegotiationError::MaxBidUnavailable(format!("{:#}", e))
        })
    }
    fn generate(&mut self, t: Time) -> Result<Bid, NegotiationError> {
        Generator::new(self.space.domain(), &self.preference, &self.opponents)
            .generate(t, &mut self.rng)
            .inspect_err(|e| log::warn!("concession bid unavailable: {}", e))
    }
    fn propose(&mut self, bid: Bid) -> Action {
        self.state.proposed = Some(bid.clone());
        Action::Offer(bid)
    }
    fn choose(&mut self, t: Time) -> Result<Action, NegotiationError> {
        if self.state.phase == Phase::Ended || t >= DEADLINE {
            self.state.phase = Phase::Ended;
            return Ok(Action::End);
        }
        self.state.round += 1;
        if let (Some(received), Some(proposed)) = (&self.state.received, &self.state.proposed) {
            if self.space.utility(received) >= self.space.utility(proposed) {
                return Ok(Action::Accept(received.clone()));
            }
        }
        if t < SELFISH_PHASE {
            let best = self.best()?;
            return Ok(self.propose(best));
        }
        if let Some(received) = &self.state.received {
            if self.space.utility(received) > concession(t) {
                return Ok(Action::Accept(received.clone()));
            }
        }
        let bid = self.generate(t)?;
        Ok(self.propose(bid))
    }
}

impl<S, C, R> Party for Agent<S, C, R>
where
    S: Space,
    C: Timeline,
    R: Rng,
{
    fn decide(&mut self) -> anyhow::Result<Action> {
        let t = self.timeline.time();
        self.state.time = t;
        let action = self.choose(t)?;
        log::debug!("{:<8}{:<8.3}{}", self.state.round, t, action);
        Ok(action)
    }
    fn receive(&mut self, sender: &str, action: &Action) -> anyhow::Result<()> {
        if action.is_end() {
            return Ok(());
        }
        let slot = self.opponents.resolve(sender).inspect_err(|e| log::warn!("{}", e))?;
        if let Action::Offer(bid) = action {
            let t = self.timeline.time();
            self.opponents.get_mut(slot).observe(bid, t);
            self.state.received = Some(bid.clone());
        }
        Ok(())
    }
    fn describe(&self) -> &'static str {
        DESCRIPTION
    }
    fn utility(&self, bid: &Bid) -> Utility {
        self.space.utility(bid)
    }
    fn report(&self) -> String {
        format!("{}\n{}", self.opponents, self.preference)
    }
}
