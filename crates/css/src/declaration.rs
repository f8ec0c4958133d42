use serde::{Deserialize, Serialize};
use std::fmt;

/// A single `property: value` pair from a style string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)
    }
}

impl<P: Into<String>, V: Into<String>> From<(P, V)> for Declaration {
    fn from((property, value): (P, V)) -> Self {
        Self::new(property, value)
    }
}
