use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog entry keyed by its ICAO-style code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Airport {
    pub id: String,
    pub name: String,
}

impl Airport {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Airport{{id='{}', name='{}'}}", self.id, self.name)
    }
}
