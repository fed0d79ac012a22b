//! Responsible organisational units.

use super::ParseDepartmentError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Department a ticket is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Department {
    /// Roads, bridges and other civil infrastructure.
    PublicWorks,
    /// Water distribution, leaks and pipelines.
    WaterSupply,
    /// Power distribution and street lighting.
    Electricity,
    /// Sanitation, waste collection and pollution.
    Environment,
    /// Fallback for complaints no rule recognises.
    Other,
}

impl Department {
    /// Every department, in display order.
    pub const ALL: [Self; 5] = [
        Self::PublicWorks,
        Self::WaterSupply,
        Self::Electricity,
        Self::Environment,
        Self::Other,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PublicWorks => "PUBLIC_WORKS",
            Self::WaterSupply => "WATER_SUPPLY",
            Self::Electricity => "ELECTRICITY",
            Self::Environment => "ENVIRONMENT",
            Self::Other => "OTHER",
        }
    }

    /// Returns the human-readable department name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PublicWorks => "Public Works",
            Self::WaterSupply => "Water Supply",
            Self::Electricity => "Electricity",
            Self::Environment => "Environment",
            Self::Other => "Other",
        }
    }
}

impl TryFrom<&str> for Department {
    type Error = ParseDepartmentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "PUBLIC_WORKS" => Ok(Self::PublicWorks),
            "WATER_SUPPLY" => Ok(Self::WaterSupply),
            "ELECTRICITY" => Ok(Self::Electricity),
            "ENVIRONMENT" => Ok(Self::Environment),
            "OTHER" => Ok(Self::Other),
            _ => Err(ParseDepartmentError(value.to_owned())),
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
