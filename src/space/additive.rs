use crate::*;
use std::collections::BTreeMap;

/// Additive utility space over discrete issues.
///
/// u(b) = Σ w(i) · s(i, b(i)) / max s(i, ·)
///
/// Values without an explicit evaluation score 0. Issues whose best score is
/// 0 contribute nothing.
#[derive(Debug, Clone)]
pub struct Additive {
    domain: Domain,
    weights: BTreeMap<IssueId, Weight>,
    scores: BTreeMap<IssueId, BTreeMap<Value, Score>>,
}

impl Additive {
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            weights: BTreeMap::new(),
            scores: BTreeMap::new(),
        }
    }
    /// Set the weighting of an issue.
    pub fn weigh(mut self, issue: IssueId, weight: Weight) -> Self {
        self.weights.insert(issue, weight);
        self
    }
    /// Set the evaluation of one value of an issue.
    pub fn evaluate(mut self, issue: IssueId, value: Value, score: Score) -> Self {
        self.scores.entry(issue).or_default().insert(value, score);
        self
    }
    fn peak(&self, issue: &Issue) -> Score {
        issue
            .values()
            .iter()
            .map(|v| self.score(issue, v))
            .max()
            .unwrap_or(0)
    }
    fn normalized(&self, issue: &Issue, value: &Value) -> Utility {
        match self.peak(issue) {
            0 => 0.0,
            peak => self.score(issue, value) as Utility / peak as Utility,
        }
    }
}

impl Space for Additive {
    fn domain(&self) -> &Domain {
        &self.domain
    }
    fn weight(&self, issue: &Issue) -> Weight {
        self.weights.get(&issue.id()).copied().unwrap_or(0.0)
    }
    fn score(&self, issue: &Issue, value: &Value) -> Score {
        self.scores
            .get(&issue.id())
            .and_then(|s| s.get(value))
            .copied()
            .unwrap_or(0)
    }
    fn utility(&self, bid: &Bid) -> Utility {
        self.domain
            .issues()
            .iter()
            .filter_map(|issue| bid.get(issue.id()).map(|v| (issue, v)))
            .map(|(issue, value)| self.weight(issue) * self.normalized(issue, value))
            .sum()
    }
    fn best(&self) -> anyhow::Result<Bid> {
        if self.domain.issues().is_empty() {
            anyhow::bail!("domain has no issues");
        }
        self.domain
            .issues()
            .iter()
            .map(|issue| {
                issue
                    .values()
                    .iter()
                    .max_by_key(|v| self.score(issue, v))
                    .map(|v| (issue.id(), v.clone()))
                    .ok_or_else(|| anyhow::anyhow!("issue {} has no values", issue.name()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn space() -> Additive {
        let x = IssueId::from(1);
        let y = IssueId::from(2);
        Additive::new(Domain::from(vec![
            Issue::new(x, "x", vec![Value::from("x1"), Value::from("x2")]),
            Issue::new(y, "y", vec![Value::from("y1"), Value::from("y2")]),
        ]))
        .weigh(x, 0.6)
        .weigh(y, 0.4)
        .evaluate(x, Value::from("x1"), 10)
        .evaluate(x, Value::from("x2"), 0)
        .evaluate(y, Value::from("y1"), 5)
        .evaluate(y, Value::from("y2"), 0)
    }
    #[test]
    fn best_bid_has_unit_utility() {
        let space = space();
        let best = space.best().unwrap();
        assert!((space.utility(&best) - 1.0).abs() < 1e-12);
        assert!(space.domain().bids().iter().all(|b| space.utility(b) <= space.utility(&best)));
    }
    #[test]
    fn utility_is_weighted_sum() {
        let space = space();
        let bid = Bid::from_iter([
            (IssueId::from(1), Value::from("x1")),
            (IssueId::from(2), Value::from("y2")),
        ]);
        assert!((space.utility(&bid) - 0.6).abs() < 1e-12);
    }
    #[test]
    fn best_is_unavailable_for_empty_domain() {
        assert!(Additive::new(Domain::default()).best().is_err());
    }
    #[test]
    fn best_is_unavailable_for_empty_issue() {
        let space = Additive::new(Domain::from(vec![Issue::new(IssueId::from(1), "x", vec![])]));
        assert!(space.best().is_err());
    }
    #[test]
    fn unscored_issue_contributes_nothing() {
        let x = IssueId::from(1);
        let space = Additive::new(Domain::from(vec![Issue::new(x, "x", vec![Value::from("a")])])).weigh(x, 1.0);
        let bid = Bid::from_iter([(x, Value::from("a"))]);
        assert_eq!(space.utility(&bid), 0.0);
    }
}
