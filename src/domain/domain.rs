use super::*;

/// Ordered list of discrete issues under negotiation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Domain {
    issues: Vec<Issue>,
}

impl From<Vec<Issue>> for Domain {
    fn from(issues: Vec<Issue>) -> Self {
        Self { issues }
    }
}

impl Domain {
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }
    pub fn issue(&self, id: IssueId) -> Option<&Issue> {
        self.issues.iter().find(|i| i.id() == id)
    }
    /// Number of distinct complete bids.
    pub fn size(&self) -> usize {
        self.issues.iter().map(|i| i.values().len()).product()
    }
    /// Every complete bid in the domain, in lexicographic issue-value order.
    /// Empty if any issue has no values, or if there are no issues at all.
    pub fn bids(&self) -> Vec<Bid> {
        if self.issues.is_empty() {
            return Vec::new();
        }
        self.issues.iter().fold(vec![Bid::default()], |partials, issue| {
            partials
                .iter()
                .flat_map(|partial| {
                    issue.values().iter().map(move |value| {
                        let mut bid = partial.clone();
                        bid.assign(issue.id(), value.clone());
                        bid
                    })
                })
                .collect()
        })
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for issue in self.issues.iter() {
            writeln!(f, "{}", issue)?;
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
            Issue::new(IssueId::from(2), "y", vec![Value::from("y1"), Value::from("y2"), Value::from("y3")]),
        ])
    }
    #[test]
    fn bids_enumerate_cartesian_product() {
        let domain = domain();
        let bids = domain.bids();
        assert_eq!(bids.len(), domain.size());
        assert_eq!(bids.len(), 6);
        assert!(bids.iter().all(|b| b.complete(&domain)));
    }
    #[test]
    fn bids_are_distinct() {
        let bids = domain().bids();
        let unique = bids.iter().collect::<std::collections::BTreeSet<_>>();
        assert_eq!(unique.len(), bids.len());
    }
    #[test]
    fn empty_domain_has_no_bids() {
        assert!(Domain::default().bids().is_empty());
    }
    #[test]
    fn issue_lookup_by_id() {
        let domain = domain();
        assert_eq!(domain.issue(IssueId::from(2)).map(Issue::name), Some("y"));
        assert!(domain.issue(IssueId::from(3)).is_none());
    }
}
