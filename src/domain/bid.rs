use super::*;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Assignment of one value to every issue of a domain.
///
/// Completeness is an invariant of bids exchanged with the environment;
/// bids received from counterparties are trusted to be complete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Bid(BTreeMap<IssueId, Value>);

impl Bid {
    pub fn get(&self, issue: IssueId) -> Option<&Value> {
        self.0.get(&issue)
    }
    /// Set the value for an issue, replacing any previous assignment.
    pub fn assign(&mut self, issue: IssueId, value: Value) {
        self.0.insert(issue, value);
    }
    pub fn iter(&self) -> impl Iterator<Item = (&IssueId, &Value)> {
        self.0.iter()
    }
    /// True if every issue of the domain carries one of its own values
    /// and nothing else is assigned.
    pub fn complete(&self, domain: &Domain) -> bool {
        self.0.len() == domain.issues().len()
            && domain
                .issues()
                .iter()
                .all(|issue| self.get(issue.id()).is_some_and(|v| issue.admits(v)))
    }
}

impl FromIterator<(IssueId, Value)> for Bid {
    fn from_iter<I: IntoIterator<Item = (IssueId, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Bid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (issue, value)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", issue, value)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn partial_bid_is_incomplete() {
        let domain = Domain::from(vec![
            Issue::new(IssueId::from(1), "x", vec![Value::from("a")]),
            Issue::new(IssueId::from(2), "y", vec![Value::from("b")]),
        ]);
        let mut bid = Bid::default();
        bid.assign(IssueId::from(1), Value::from("a"));
        assert!(!bid.complete(&domain));
        bid.assign(IssueId::from(2), Value::from("b"));
        assert!(bid.complete(&domain));
    }
    #[test]
    fn foreign_value_is_incomplete() {
        let domain = Domain::from(vec![Issue::new(IssueId::from(1), "x", vec![Value::from("a")])]);
        let bid = Bid::from_iter([(IssueId::from(1), Value::from("z"))]);
        assert!(!bid.complete(&domain));
    }
    #[test]
    fn display_lists_assignments() {
        let bid = Bid::from_iter([
            (IssueId::from(2), Value::from("b")),
            (IssueId::from(1), Value::from("a")),
        ]);
        assert_eq!(bid.to_string(), "{#1=a, #2=b}");
    }
}
