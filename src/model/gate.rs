use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Which attendance boundary a swipe at this gate contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GateDirection {
    In,
    Out,
}

impl GateDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            GateDirection::In => "in",
            GateDirection::Out => "out",
        }
    }
}

impl fmt::Display for GateDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GateDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" => Ok(GateDirection::In),
            "out" => Ok(GateDirection::Out),
            other => Err(format!("unknown gate direction: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Gate {
    #[schema(example = 1)]
    pub gate_id: u32,
    #[schema(example = "North Lobby")]
    pub gate_name: String,
    #[schema(example = "in")]
    pub direction: String,
    #[schema(example = "turnstile")]
    pub gate_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!("IN".parse::<GateDirection>(), Ok(GateDirection::In));
        assert_eq!(" out ".parse::<GateDirection>(), Ok(GateDirection::Out));
        assert!("sideways".parse::<GateDirection>().is_err());
    }
}
