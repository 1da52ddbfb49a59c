//! Region and gender filters for a synthesis request.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DossierError;
use crate::persona::Gender;
use crate::region::GLOBAL_REGIONS;

/// The wildcard filter value.
pub const WILDCARD: &str = "All";

/// Region constraint: the wildcard draws from the region pool, a specific
/// region is pinned and bypasses it.
///
/// Parsing only accepts names from [`GLOBAL_REGIONS`] (case-insensitive) and
/// stores the catalog spelling.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RegionFilter {
    #[default]
    All,
    Only(String),
}

impl RegionFilter {
    /// The pinned region, if any.
    pub fn pinned(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(region) => Some(region.as_str()),
        }
    }
}

impl FromStr for RegionFilter {
    type Err = DossierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DossierError::config("region filter is empty"));
        }
        if s.eq_ignore_ascii_case(WILDCARD) {
            return Ok(Self::All);
        }
        GLOBAL_REGIONS
            .iter()
            .find(|region| region.to_lowercase() == s.to_lowercase())
            .map(|region| Self::Only(region.to_string()))
            .ok_or_else(|| DossierError::config(format!("unknown region '{s}'")))
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(WILDCARD),
            Self::Only(region) => f.write_str(region),
        }
    }
}

/// Gender constraint; the wildcard asks for a balanced choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GenderFilter {
    #[default]
    All,
    Only(Gender),
}

impl GenderFilter {
    /// Gender options offered to the operator.
    pub const OPTIONS: [Gender; 3] = [Gender::Male, Gender::Female, Gender::NonBinary];

    /// How the constraint is phrased in the text prompt.
    pub fn prompt_label(&self) -> String {
        match self {
            Self::All => "Balanced".to_string(),
            Self::Only(gender) => gender.to_string(),
        }
    }
}

impl FromStr for GenderFilter {
    type Err = DossierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(WILDCARD) {
            return Ok(Self::All);
        }
        Gender::from_str(s)
            .ok()
            .filter(|gender| Self::OPTIONS.contains(gender))
            .map(Self::Only)
            .ok_or_else(|| DossierError::config(format!("unknown gender filter '{s}'")))
    }
}

impl fmt::Display for GenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(WILDCARD),
            Self::Only(gender) => write!(f, "{gender}"),
        }
    }
}

/// Filters applied to one synthesis request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SynthesisFilter {
    pub region: RegionFilter,
    pub gender: GenderFilter,
}
