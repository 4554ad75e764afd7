use crate::*;

/// Multilateral alternating-offers driver.
///
/// Parties move in seating order, once per round. Before every move the
/// shared clock is set to `round / rounds`, and every move is broadcast to
/// all other parties. An offer accepted by every other party in succession
/// closes the session, as does any party walking away.
///
/// With a wall-clock [`Deadline`], the clock follows the deadline instead
/// and `rounds` only caps how many rounds are played.
pub struct Session {
    clock: Clock,
    rounds: usize,
    deadline: Option<Deadline>,
    seats: Vec<(String, Box<dyn Party>)>,
}

impl Session {
    /// Session of `rounds` rounds driving `clock`. Parties should read time
    /// from clones of the same clock.
    pub fn new(clock: Clock, rounds: usize) -> Self {
        Self {
            clock,
            rounds,
            deadline: None,
            seats: Vec::new(),
        }
    }
    /// Drive the clock from wall time rather than the round count.
    pub fn timed(mut self, deadline: Deadline) -> Self {
        self.deadline = Some(deadline);
        self
    }
    pub fn sit<P>(&mut self, name: &str, party: P)
    where
        P: Party + 'static,
    {
        let party: Box<dyn Party> = Box::new(party);
        self.seats.push((name.to_string(), party));
    }
    pub fn party(&self, name: &str) -> Option<&dyn Party> {
        self.seats
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p.as_ref())
    }
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.seats.iter().map(|(n, _)| n.as_str())
    }

    /// Play until agreement, breakdown, or the last round.
    pub fn run(&mut self) -> anyhow::Result<Outcome> {
        let n = self.seats.len();
        if n < 2 {
            return Err(NegotiationError::Scenario(format!("{} parties seated, need at least 2", n)).into());
        }
        let mut table = None::<Bid>;
        let mut accepts = 0;
        for round in 0..=self.rounds {
            for i in 0..n {
                self.tick(round);
                let name = self.seats[i].0.clone();
                let action = self.seats[i].1.decide()?;
                log::debug!("{:<8}{:<16}{}", round, name, action);
                match &action {
                    Action::Offer(bid) => {
                        table = Some(bid.clone());
                        accepts = 0;
                    }
                    Action::Accept(_) => {
                        let bid = table
                            .clone()
                            .ok_or_else(|| NegotiationError::NothingToAccept(name.clone()))?;
                        accepts += 1;
                        if accepts == n - 1 {
                            return Ok(self.agreement(bid, round));
                        }
                    }
                    Action::End => {
                        return Ok(Outcome::Breakdown { round, by: name });
                    }
                }
                for (_, party) in self.seats.iter_mut().filter(|(other, _)| *other != name) {
                    party.receive(&name, &action)?;
                }
            }
        }
        Ok(Outcome::Timeout {
            rounds: self.rounds,
        })
    }

    fn tick(&self, round: usize) {
        match self.deadline.as_ref() {
            Some(deadline) => self.clock.set(deadline.time()),
            None => self.clock.round(round, self.rounds),
        }
    }
    fn agreement(&self, bid: Bid, round: usize) -> Outcome {
        let utilities = self
            .seats
            .iter()
            .map(|(name, party)| (name.clone(), party.utility(&bid)))
            .collect();
        Outcome::Agreement {
            bid,
            round,
            utilities,
        }
    }
}
