use crate::*;
use std::collections::BTreeMap;

/// Own preference over one issue: its weighting and the integer
/// evaluation of each of its values.
///
/// The best evaluation is cached as scores are recorded, so disutility
/// lookups never rescan the issue.
#[derive(Debug, Clone)]
pub struct IssueWeight {
    name: String,
    weighting: Weight,
    peak: Score,
    scores: BTreeMap<Value, Score>,
}

impl IssueWeight {
    pub fn new(name: &str, weighting: Weight) -> Self {
        Self {
            name: name.to_string(),
            weighting,
            peak: 0,
            scores: BTreeMap::new(),
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn weighting(&self) -> Weight {
        self.weighting
    }
    /// Highest evaluation recorded for this issue.
    pub fn peak(&self) -> Score {
        self.peak
    }
    pub fn score(&self, value: &Value) -> Option<Score> {
        self.scores.get(value).copied()
    }
    pub fn record(&mut self, value: Value, score: Score) {
        self.peak = self.peak.max(score);
        self.scores.insert(value, score);
    }
    /// d(v) = w · (s(v) - max s) / max s
    ///
    /// Zero at the best value and negative elsewhere. An issue whose best
    /// evaluation is 0 expresses no preference, so every value costs 0.
    pub fn disutility(&self, value: &Value) -> Disutility {
        let score = self
            .score(value)
            .unwrap_or_else(|| panic!("value {} of issue {} was never scored", value, self.name));
        match self.peak {
            0 => 0.0,
            peak => self.weighting * (score as f64 - peak as f64) / peak as f64,
        }
    }
}

impl std::fmt::Display for IssueWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}: {{", self.name)?;
        for (i, (value, score)) in self.scores.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", value, score)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn peak_tracks_maximum() {
        let mut weight = IssueWeight::new("x", 0.5);
        weight.record(Value::from("a"), 3);
        weight.record(Value::from("b"), 7);
        weight.record(Value::from("c"), 5);
        assert_eq!(weight.peak(), 7);
    }
    #[test]
    fn disutility_is_zero_at_peak() {
        let mut weight = IssueWeight::new("x", 0.6);
        weight.record(Value::from("x1"), 10);
        weight.record(Value::from("x2"), 0);
        assert_eq!(weight.disutility(&Value::from("x1")), 0.0);
        assert!((weight.disutility(&Value::from("x2")) + 0.6).abs() < 1e-12);
    }
    #[test]
    fn zero_peak_means_no_disutility() {
        let mut weight = IssueWeight::new("x", 0.9);
        weight.record(Value::from("a"), 0);
        weight.record(Value::from("b"), 0);
        assert_eq!(weight.disutility(&Value::from("a")), 0.0);
        assert_eq!(weight.disutility(&Value::from("b")), 0.0);
    }
    #[test]
    #[should_panic]
    fn unscored_value_panics() {
        IssueWeight::new("x", 0.5).disutility(&Value::from("nope"));
    }
}
