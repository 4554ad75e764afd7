use crate::*;

/// Which of the two opponent models an observation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    A,
    B,
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Slot::A => write!(f, "A"),
            Slot::B => write!(f, "B"),
        }
    }
}

/// The two opponent models of a session.
///
/// Senders are bound to slots in order of first appearance. A third
/// distinct sender is rejected rather than folded into A or B.
#[derive(Debug, Clone, Default)]
pub struct Opponents {
    a: Opponent,
    b: Opponent,
}

impl From<&Domain> for Opponents {
    fn from(domain: &Domain) -> Self {
        Self {
            a: Opponent::from(domain),
            b: Opponent::from(domain),
        }
    }
}

impl Opponents {
    pub fn a(&self) -> &Opponent {
        &self.a
    }
    pub fn b(&self) -> &Opponent {
        &self.b
    }
    pub fn get(&self, slot: Slot) -> &Opponent {
        match slot {
            Slot::A => &self.a,
            Slot::B => &self.b,
        }
    }
    pub fn get_mut(&mut self, slot: Slot) -> &mut Opponent {
        match slot {
            Slot::A => &mut self.a,
            Slot::B => &mut self.b,
        }
    }
    /// Slot already bound to `name`, if any.
    pub fn find(&self, name: &str) -> Option<Slot> {
        [Slot::A, Slot::B]
            .into_iter()
            .find(|s| self.get(*s).name() == Some(name))
    }
    /// Slot for `name`, binding the first free slot on first sight.
    pub fn resolve(&mut self, name: &str) -> Result<Slot, NegotiationError> {
        if let Some(slot) = self.find(name) {
            return Ok(slot);
        }
        let slot = [Slot::A, Slot::B]
            .into_iter()
            .find(|s| !self.get(*s).is_bound())
            .ok_or_else(|| NegotiationError::TooManyOpponents(name.to_string()))?;
        self.get_mut(slot).bind(name);
        log::info!("{:<32}{:<32}", format!("opponent slot {}", slot), name);
        Ok(slot)
    }
    /// ω · f_A(v) + (1 - ω) · f_B(v)
    pub fn combined(&self, issue: IssueId, value: &Value) -> Frequency {
        OMEGA * self.a.frequency(issue, value) + (1.0 - OMEGA) * self.b.frequency(issue, value)
    }
}

impl std::fmt::Display for Opponents {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.a, self.b)
    }
}
