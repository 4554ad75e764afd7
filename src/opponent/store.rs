use crate::*;
use std::collections::BTreeMap;

/// Accumulated evidence of one opponent's preference over one issue.
///
/// Every known value starts at 0 and only ever grows, by the decayed
/// weight of the time at which it was observed.
#[derive(Debug, Clone)]
pub struct IssueStore {
    name: String,
    values: BTreeMap<Value, Frequency>,
}

impl From<&Issue> for IssueStore {
    fn from(issue: &Issue) -> Self {
        Self {
            name: issue.name().to_string(),
            values: issue.values().iter().map(|v| (v.clone(), 0.0)).collect(),
        }
    }
}

impl IssueStore {
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Credit `value` with an observation made at time `t`.
    /// Values outside the issue are ignored.
    pub fn observe(&mut self, value: &Value, t: Time) {
        if let Some(frequency) = self.values.get_mut(value) {
            *frequency += decay(t.clamp(0.0, DEADLINE));
        }
    }
    /// Accumulated score of `value`; 0 if never observed.
    pub fn frequency(&self, value: &Value) -> Frequency {
        self.values.get(value).copied().unwrap_or(0.0)
    }
}

impl std::fmt::Display for IssueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}: {{", self.name)?;
        for (i, (value, frequency)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={:.3}", value, frequency)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn store() -> IssueStore {
        IssueStore::from(&Issue::new(
            IssueId::from(1),
            "x",
            vec![Value::from("a"), Value::from("b")],
        ))
    }
    #[test]
    fn values_start_at_zero() {
        let store = store();
        assert_eq!(store.frequency(&Value::from("a")), 0.0);
        assert_eq!(store.frequency(&Value::from("b")), 0.0);
    }
    #[test]
    fn observation_at_start_counts_one() {
        let mut store = store();
        store.observe(&Value::from("a"), 0.0);
        assert_eq!(store.frequency(&Value::from("a")), 1.0);
    }
    #[test]
    fn observation_at_deadline_counts_nothing() {
        let mut store = store();
        store.observe(&Value::from("a"), 1.0);
        assert_eq!(store.frequency(&Value::from("a")), 0.0);
    }
    #[test]
    fn unknown_values_are_zero_and_ignored() {
        let mut store = store();
        store.observe(&Value::from("z"), 0.0);
        assert_eq!(store.frequency(&Value::from("z")), 0.0);
        assert_eq!(store.frequency(&Value::from("a")), 0.0);
        assert_eq!(store.frequency(&Value::from("b")), 0.0);
    }
    #[test]
    fn frequency_never_decreases() {
        let mut store = store();
        let a = Value::from("a");
        let mut last = store.frequency(&a);
        for i in 0..=20 {
            store.observe(&a, i as Time / 20.0);
            let next = store.frequency(&a);
            assert!(next >= last);
            assert!(next >= 0.0);
            last = next;
        }
    }
}
