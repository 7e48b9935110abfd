use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Command sent to the watering relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Start,
    Stop,
}

impl Activation {
    /// The string the relay endpoint expects: `"1"` to start, `"0"` to stop.
    pub fn as_payload(&self) -> &'static str {
        match self {
            Activation::Start => "1",
            Activation::Stop => "0",
        }
    }

    pub fn from_on(on: bool) -> Self {
        if on { Activation::Start } else { Activation::Stop }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, Activation::Start)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Activation::Start => Activation::Stop,
            Activation::Stop => Activation::Start,
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_payload())
    }
}

impl FromStr for Activation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "start" | "on" => Ok(Activation::Start),
            "0" | "stop" | "off" => Ok(Activation::Stop),
            other => Err(Error::InvalidActivation(other.to_string())),
        }
    }
}
