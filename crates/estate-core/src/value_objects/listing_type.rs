//! Listing type - whether a property is offered for sale or for rent

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Property listing type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    #[default]
    Sale,
    Rent,
}

impl ListingType {
    /// String form as stored in the database
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Rent => "rent",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a ListingType from a stored string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown listing type: {0}")]
pub struct ListingTypeParseError(pub String);

impl FromStr for ListingType {
    type Err = ListingTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sale" => Ok(Self::Sale),
            "rent" => Ok(Self::Rent),
            other => Err(ListingTypeParseError(other.to_string())),
        }
    }
}
