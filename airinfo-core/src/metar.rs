use serde::{Deserialize, Serialize};
use std::fmt;

/// Current observation for a station, as reported by the remote METAR service.
///
/// `flight_rules` is passed through untouched (VFR, MVFR, IFR, LIFR, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Metar {
    pub flight_rules: String,
    pub raw: String,
}

impl fmt::Display for Metar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "METAR{{flight_rules='{}', raw='{}'}}", self.flight_rules, self.raw)
    }
}
