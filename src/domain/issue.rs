use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Identity of an issue within a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueId(u32);

impl From<u32> for IssueId {
    fn from(n: u32) -> Self {
        Self(n)
    }
}
impl From<IssueId> for u32 {
    fn from(id: IssueId) -> Self {
        id.0
    }
}

impl std::fmt::Display for IssueId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One negotiable dimension with an ordered, enumerable set of values.
///
/// Supplied by the environment and immutable for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    id: IssueId,
    name: String,
    values: Vec<Value>,
}

impl Issue {
    pub fn new(id: IssueId, name: &str, values: Vec<Value>) -> Self {
        Self {
            id,
            name: name.to_string(),
            values,
        }
    }
    pub fn id(&self) -> IssueId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn values(&self) -> &[Value] {
        &self.values
    }
    /// True if `value` is one of this issue's values.
    pub fn admits(&self, value: &Value) -> bool {
        self.values.contains(value)
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} [", self.id, self.name)?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}
