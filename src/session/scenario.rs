use crate::*;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;

/// Tolerance on the sum of a profile's issue weights.
const WEIGHT_TOLERANCE: Weight = 1e-6;

/// One issue as written in a scenario file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueSpec {
    pub name: String,
    pub values: Vec<String>,
}

/// One party's preferences as written in a scenario file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Issue name → weighting.
    pub weights: BTreeMap<String, Weight>,
    /// Issue name → value name → evaluation.
    pub scores: BTreeMap<String, BTreeMap<String, Score>>,
}

/// A negotiation setup: a shared domain and a private profile per party.
///
/// ```json
/// {
///   "issues": [{ "name": "price", "values": ["low", "high"] }],
///   "profiles": {
///     "agent": {
///       "weights": { "price": 1.0 },
///       "scores": { "price": { "low": 1, "high": 9 } }
///     }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub issues: Vec<IssueSpec>,
    pub profiles: BTreeMap<String, Profile>,
}

impl Scenario {
    /// Read and validate a JSON scenario file.
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        use anyhow::Context;
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        let scenario = serde_json::from_str::<Self>(&text)
            .with_context(|| format!("parsing scenario {}", path.display()))?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Random scenario with `issues` issues of `values` values each, and
    /// random normalized weights and scores for every party.
    pub fn random<R>(issues: usize, values: usize, parties: &[&str], rng: &mut R) -> Self
    where
        R: Rng,
    {
        let issues = (0..issues)
            .map(|i| IssueSpec {
                name: format!("issue-{}", i),
                values: (0..values).map(|v| format!("value-{}", v)).collect(),
            })
            .collect::<Vec<_>>();
        let profiles = parties
            .iter()
            .map(|party| {
                let raw = issues
                    .iter()
                    .map(|_| rng.random_range(1..=100) as Weight)
                    .collect::<Vec<_>>();
                let total = raw.iter().sum::<Weight>();
                let weights = issues
                    .iter()
                    .zip(raw)
                    .map(|(issue, w)| (issue.name.clone(), w / total))
                    .collect();
                let scores = issues
                    .iter()
                    .map(|issue| {
                        let evals = issue
                            .values
                            .iter()
                            .map(|v| (v.clone(), rng.random_range(1..=10)))
                            .collect();
                        (issue.name.clone(), evals)
                    })
                    .collect();
                (party.to_string(), Profile { weights, scores })
            })
            .collect();
        Self { issues, profiles }
    }

    /// Check the scenario describes a usable session.
    pub fn validate(&self) -> Result<(), NegotiationError> {
        let invalid = |msg: String| Err(NegotiationError::Scenario(msg));
        if self.issues.is_empty() {
            return invalid("no issues".to_string());
        }
        let mut names = BTreeSet::new();
        for issue in self.issues.iter() {
            if !names.insert(issue.name.as_str()) {
                return invalid(format!("duplicate issue {}", issue.name));
            }
            if issue.values.is_empty() {
                return invalid(format!("issue {} has no values", issue.name));
            }
            if issue.values.iter().collect::<BTreeSet<_>>().len() != issue.values.len() {
                return invalid(format!("issue {} has duplicate values", issue.name));
            }
        }
        for (party, profile) in self.profiles.iter() {
            for issue in self.issues.iter() {
                match profile.weights.get(&issue.name) {
                    None => return invalid(format!("{} has no weight for {}", party, issue.name)),
                    Some(w) if *w < 0.0 => {
                        return invalid(format!("{} has negative weight for {}", party, issue.name));
                    }
                    Some(_) => {}
                }
                for value in issue.values.iter() {
                    if profile.scores.get(&issue.name).and_then(|s| s.get(value)).is_none() {
                        return invalid(format!("{} has no score for {}={}", party, issue.name, value));
                    }
                }
            }
            let total = profile.weights.values().sum::<Weight>();
            if (total - 1.0).abs() > WEIGHT_TOLERANCE {
                return invalid(format!("{} weights sum to {}", party, total));
            }
        }
        Ok(())
    }

    /// Domain shared by every party. Issue ids follow file order, from 1.
    pub fn domain(&self) -> Domain {
        Domain::from(
            self.issues
                .iter()
                .enumerate()
                .map(|(i, entry)| {
                    let values = entry.values.iter().map(|v| Value::from(v.as_str())).collect();
                    Issue::new(IssueId::from(i as u32 + 1), &entry.name, values)
                })
                .collect::<Vec<_>>(),
        )
    }

    /// Utility space of one party.
    pub fn space(&self, party: &str) -> Result<Additive, NegotiationError> {
        let profile = self
            .profiles
            .get(party)
            .ok_or_else(|| NegotiationError::Scenario(format!("no profile for {}", party)))?;
        let domain = self.domain();
        let mut space = Additive::new(domain.clone());
        for issue in domain.issues() {
            let weight = profile.weights.get(issue.name()).copied().unwrap_or(0.0);
            space = space.weigh(issue.id(), weight);
            for value in issue.values() {
                let score = profile
                    .scores
                    .get(issue.name())
                    .and_then(|s| s.get(value.name()))
                    .copied()
                    .unwrap_or(0);
                space = space.evaluate(issue.id(), value.clone(), score);
            }
        }
        Ok(space)
    }
}
