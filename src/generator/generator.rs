use crate::*;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::seq::SliceRandom;

/// Samples concession bids.
///
/// A bid is assembled one issue at a time, in a fresh random order on every
/// call. Each issue draws among the values that keep the running disutility
/// within budget, weighted by how often the two opponents have offered them.
///
/// Borrows the models rather than owning them so the policy can keep
/// mutating its opponent models between calls.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    domain: &'a Domain,
    preference: &'a Preference,
    opponents: &'a Opponents,
}

impl<'a> Generator<'a> {
    pub fn new(domain: &'a Domain, preference: &'a Preference, opponents: &'a Opponents) -> Self {
        Self {
            domain,
            preference,
            opponents,
        }
    }

    /// Total disutility tolerated at time `t`, in [-0.2, 0].
    pub fn budget(t: Time) -> Disutility {
        concession(t) - 1.0
    }

    /// Draw a complete bid within the budget for time `t`.
    pub fn generate<R>(&self, t: Time, rng: &mut R) -> Result<Bid, NegotiationError>
    where
        R: Rng,
    {
        self.within(Self::budget(t), rng)
    }

    /// Draw a complete bid whose summed disutility stays at or above `budget`,
    /// unless no value of some issue can satisfy it. Fails on an issue
    /// with no values at all.
    pub fn within<R>(&self, budget: Disutility, rng: &mut R) -> Result<Bid, NegotiationError>
    where
        R: Rng,
    {
        let mut order = self.domain.issues().iter().collect::<Vec<_>>();
        order.shuffle(rng);
        let mut spent = 0.0;
        let mut bid = Bid::default();
        for issue in order {
            let value = self.choose(issue, spent, budget, rng)?;
            spent += self.preference.disutility(issue, &value);
            bid.assign(issue.id(), value);
        }
        Ok(bid)
    }

    /// Values of `issue` that fit the remaining budget. If none do, the
    /// single least painful value.
    pub fn candidates(&self, issue: &Issue, spent: Disutility, budget: Disutility) -> Vec<Value> {
        let costs = issue
            .values()
            .iter()
            .map(|v| (v, self.preference.disutility(issue, v)))
            .collect::<Vec<_>>();
        let affordable = costs
            .iter()
            .filter(|(_, d)| spent + d >= budget)
            .map(|(v, _)| (*v).clone())
            .collect::<Vec<_>>();
        if affordable.is_empty() {
            costs
                .iter()
                .min_by(|(_, x), (_, y)| y.total_cmp(x))
                .map(|(v, _)| (*v).clone())
                .into_iter()
                .collect()
        } else {
            affordable
        }
    }

    /// Roulette-wheel draw over candidates by combined opponent frequency.
    /// Uniform when neither opponent has shown interest in any candidate.
    fn choose<R>(&self, issue: &Issue, spent: Disutility, budget: Disutility, rng: &mut R) -> Result<Value, NegotiationError>
    where
        R: Rng,
    {
        let mut candidates = self.candidates(issue, spent, budget);
        if candidates.is_empty() {
            return Err(NegotiationError::EmptyIssue(issue.name().to_string()));
        }
        let weights = candidates
            .iter()
            .map(|v| self.opponents.combined(issue.id(), v))
            .collect::<Vec<_>>();
        let total = weights.iter().sum::<Frequency>();
        let index = if total > 0.0 {
            WeightedIndex::new(&weights)
                .expect("non-negative weights with positive total")
                .sample(rng)
        } else {
            rng.random_range(0..candidates.len())
        };
        Ok(candidates.swap_remove(index))
    }
}
