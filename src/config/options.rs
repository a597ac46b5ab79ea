//! Enumerated configuration options.
//!
//! This module provides the closed option sets recognized by
//! [`ProviderConfig`](crate::ProviderConfig): the HTTP verb used for update
//! requests and the serialization style for multi-value filters.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// The HTTP verb used for update requests.
///
/// JSON:API servers conventionally accept `PATCH` for partial resource
/// updates; some deployments only accept `PUT`. Applies to both single
/// and batched updates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateMethod {
    /// HTTP PATCH (the default).
    #[default]
    Patch,
    /// HTTP PUT.
    Put,
}

impl fmt::Display for UpdateMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Patch => write!(f, "PATCH"),
            Self::Put => write!(f, "PUT"),
        }
    }
}

impl FromStr for UpdateMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PATCH" => Ok(Self::Patch),
            "PUT" => Ok(Self::Put),
            _ => Err(ConfigError::InvalidUpdateMethod {
                value: s.to_string(),
            }),
        }
    }
}

/// Serialization style for multi-value query parameters.
///
/// Controls how an array-valued filter such as `filter[id]` with values
/// `1, 2, 3` is rendered into query pairs:
///
/// | Format | Rendering |
/// |---|---|
/// | `Repeat` | `filter[id]=1&filter[id]=2&filter[id]=3` |
/// | `Brackets` | `filter[id][]=1&filter[id][]=2&filter[id][]=3` |
/// | `Indices` | `filter[id][0]=1&filter[id][1]=2&filter[id][2]=3` |
/// | `Comma` | `filter[id]=1,2,3` |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArrayFormat {
    /// Repeat the bare key for each value (the default).
    #[default]
    Repeat,
    /// Append `[]` to the key for each value.
    Brackets,
    /// Append `[0]`, `[1]`, ... to the key.
    Indices,
    /// Join all values into a single comma-separated pair.
    Comma,
}

impl fmt::Display for ArrayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Repeat => write!(f, "repeat"),
            Self::Brackets => write!(f, "brackets"),
            Self::Indices => write!(f, "indices"),
            Self::Comma => write!(f, "comma"),
        }
    }
}

impl FromStr for ArrayFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "repeat" => Ok(Self::Repeat),
            "brackets" => Ok(Self::Brackets),
            "indices" => Ok(Self::Indices),
            "comma" => Ok(Self::Comma),
            _ => Err(ConfigError::InvalidArrayFormat {
                value: s.to_string(),
            }),
        }
    }
}
