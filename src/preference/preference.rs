use crate::*;
use std::collections::BTreeMap;

/// The strategy's own preference model, keyed by issue.
#[derive(Debug, Clone, Default)]
pub struct Preference {
    weights: BTreeMap<IssueId, IssueWeight>,
}

impl Preference {
    /// Register an issue. An issue already registered keeps its weighting.
    pub fn add_issue(&mut self, issue: &Issue, weighting: Weight) {
        self.weights
            .entry(issue.id())
            .or_insert_with(|| IssueWeight::new(issue.name(), weighting));
    }
    /// Store the evaluation of a value of a registered issue.
    pub fn record_score(&mut self, issue: &Issue, value: &Value, score: Score) {
        self.weights
            .get_mut(&issue.id())
            .unwrap_or_else(|| panic!("issue {} was never registered", issue.name()))
            .record(value.clone(), score);
    }
    /// Normalized loss of choosing `value` for `issue`, in [-weighting, 0].
    pub fn disutility(&self, issue: &Issue, value: &Value) -> Disutility {
        self.weight(issue).disutility(value)
    }
    pub fn weight(&self, issue: &Issue) -> &IssueWeight {
        self.weights
            .get(&issue.id())
            .unwrap_or_else(|| panic!("issue {} was never registered", issue.name()))
    }
    /// Summed disutility of every assignment in a bid.
    pub fn cost(&self, domain: &Domain, bid: &Bid) -> Disutility {
        domain
            .issues()
            .iter()
            .filter_map(|issue| bid.get(issue.id()).map(|v| self.disutility(issue, v)))
            .sum()
    }
}

/// Populate the model from the environment's utility space.
impl<S> From<&S> for Preference
where
    S: Space,
{
    fn from(space: &S) -> Self {
        let mut preference = Self::default();
        for issue in space.domain().issues() {
            preference.add_issue(issue, space.weight(issue));
            for value in issue.values() {
                preference.record_score(issue, value, space.score(issue, value));
            }
        }
        preference
    }
}

impl std::fmt::Display for Preference {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for weight in self.weights.values() {
            writeln!(f, "\t{}", weight)?;
        }
        Ok(())
    }
}
