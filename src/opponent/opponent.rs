use crate::*;
use std::collections::BTreeMap;

/// Frequency model of one counterparty.
///
/// Starts unnamed; the name is bound the first time a new sender is routed
/// to this model and never changes afterwards.
#[derive(Debug, Clone, Default)]
pub struct Opponent {
    name: Option<String>,
    issues: BTreeMap<IssueId, IssueStore>,
}

impl Opponent {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    pub fn is_bound(&self) -> bool {
        self.name.is_some()
    }
    pub(crate) fn bind(&mut self, name: &str) {
        self.name = Some(name.to_string());
    }
    /// Register an issue with every value at frequency 0.
    /// Registering the same issue twice keeps the existing store.
    pub fn add_issue(&mut self, issue: &Issue) {
        self.issues
            .entry(issue.id())
            .or_insert_with(|| IssueStore::from(issue));
    }
    pub fn issue(&self, issue: IssueId) -> Option<&IssueStore> {
        self.issues.get(&issue)
    }
    /// Credit `value` of `issue` with an observation made at time `t`.
    pub fn record_observation(&mut self, issue: IssueId, value: &Value, t: Time) {
        if let Some(store) = self.issues.get_mut(&issue) {
            store.observe(value, t);
        }
    }
    /// Record every assignment of an offered bid.
    pub fn observe(&mut self, bid: &Bid, t: Time) {
        for (issue, value) in bid.iter() {
            self.record_observation(*issue, value, t);
        }
    }
    /// Accumulated evidence for `value` of `issue`; 0 if never observed.
    pub fn frequency(&self, issue: IssueId, value: &Value) -> Frequency {
        self.issue(issue).map(|s| s.frequency(value)).unwrap_or(0.0)
    }
}

impl From<&Domain> for Opponent {
    fn from(domain: &Domain) -> Self {
        let mut opponent = Self::default();
        for issue in domain.issues() {
            opponent.add_issue(issue);
        }
        opponent
    }
}

impl std::fmt::Display for Opponent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}", self.name().unwrap_or("<unbound>"))?;
        for store in self.issues.values() {
            writeln!(f, "\t{}", store)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn domain() -> Domain {
        Domain::from(vec![
            Issue::new(IssueId::from(1), "x", vec![Value::from("x1"), Value::from("x2")]),
            Issue::new(IssueId::from(2), "y", vec![Value::from("y1"), Value::from("y2")]),
        ])
    }
    #[test]
    fn observe_credits_every_issue_of_bid() {
        let mut opponent = Opponent::from(&domain());
        let bid = Bid::from_iter([
            (IssueId::from(1), Value::from("x2")),
            (IssueId::from(2), Value::from("y1")),
        ]);
        opponent.observe(&bid, 0.0);
        opponent.observe(&bid, 0.5);
        let expected = 1.0 + decay(0.5);
        assert_eq!(opponent.frequency(IssueId::from(1), &Value::from("x2")), expected);
        assert_eq!(opponent.frequency(IssueId::from(2), &Value::from("y1")), expected);
        assert_eq!(opponent.frequency(IssueId::from(1), &Value::from("x1")), 0.0);
    }
    #[test]
    fn unknown_issue_is_zero() {
        let opponent = Opponent::from(&domain());
        assert_eq!(opponent.frequency(IssueId::from(9), &Value::from("x1")), 0.0);
    }
    #[test]
    fn lookups_are_keyed_by_name() {
        let mut opponent = Opponent::from(&domain());
        opponent.record_observation(IssueId::from(1), &Value::from(String::from("x1")), 0.0);
        assert_eq!(opponent.frequency(IssueId::from(1), &Value::from("x1")), 1.0);
    }
    #[test]
    fn starts_unbound() {
        assert!(!Opponent::default().is_bound());
    }
}
