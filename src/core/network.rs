//! Network identity
//!
//! Which chain the node is running on. Carried explicitly in configuration
//! and passed into dataset selection, never read from process-wide state.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Network identity selecting which checkpoint dataset is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Production network
    #[default]
    Main,
    /// Test network
    Test,
}

impl Network {
    pub fn is_test(&self) -> bool {
        matches!(self, Network::Test)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Main => write!(f, "main"),
            Network::Test => write!(f, "test"),
        }
    }
}

impl FromStr for Network {
    type Err = Infallible;

    /// Total parse: anything unrecognized is the production network
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "test" | "testnet" => Network::Test,
            _ => Network::Main,
        })
    }
}
