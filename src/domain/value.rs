use serde::Deserialize;
use serde::Serialize;

/// An atomic discrete outcome of one issue.
///
/// Values compare by name. Two values with the same name under the same
/// issue are the same value, regardless of where they were constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(String);

impl Value {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Value {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}
impl From<String> for Value {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
