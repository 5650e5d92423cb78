//! Requirement category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category a posted requirement falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "requirement_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RequirementCategory {
    /// Prepared food.
    Food,
    /// Grocery staples.
    Groceries,
    /// Clothing.
    Clothing,
    /// Books, stationery, fees.
    Education,
    /// Medicine and medical supplies.
    Medical,
    /// Anything else.
    Others,
}

impl RequirementCategory {
    /// Return the category as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Groceries => "groceries",
            Self::Clothing => "clothing",
            Self::Education => "education",
            Self::Medical => "medical",
            Self::Others => "others",
        }
    }
}

impl Default for RequirementCategory {
    fn default() -> Self {
        Self::Others
    }
}

impl fmt::Display for RequirementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RequirementCategory {
    type Err = carebridge_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "groceries" => Ok(Self::Groceries),
            "clothing" => Ok(Self::Clothing),
            "education" => Ok(Self::Education),
            "medical" => Ok(Self::Medical),
            "others" => Ok(Self::Others),
            _ => Err(carebridge_core::AppError::validation(format!(
                "Invalid requirement category: '{s}'"
            ))),
        }
    }
}
