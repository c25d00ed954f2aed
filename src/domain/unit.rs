//! Unit - Real-Estate Unit Record

use std::fmt;
use std::str::FromStr;

use crate::helpers::{format_money, title_case};

/// Occupancy / sale state of a unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnitStatus {
    #[default]
    Available,
    Rented,
    Sold,
}

impl UnitStatus {
    /// Text stored in the `status` column
    pub fn as_str(self) -> &'static str {
        match self {
            UnitStatus::Available => "Available",
            UnitStatus::Rented => "Rented",
            UnitStatus::Sold => "Sold",
        }
    }

    /// Translation key suffix in the "units" namespace
    pub fn i18n_key(self) -> &'static str {
        match self {
            UnitStatus::Available => "status_available",
            UnitStatus::Rented => "status_rented",
            UnitStatus::Sold => "status_sold",
        }
    }

    /// All statuses in dropdown order
    pub fn all() -> &'static [UnitStatus] {
        &[UnitStatus::Available, UnitStatus::Rented, UnitStatus::Sold]
    }
}

impl fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string is not one of the three known values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown unit status '{}'", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for UnitStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(UnitStatus::Available),
            "Rented" => Ok(UnitStatus::Rented),
            "Sold" => Ok(UnitStatus::Sold),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// A trackable property record
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    /// Primary key, case preserved
    pub unit_id: String,
    pub location: String,
    /// Size in square feet, always > 0
    pub size: i64,
    pub status: UnitStatus,
    /// Monthly rent, `None` when not applicable
    pub rent: Option<f64>,
    /// Selling price, `None` when not applicable
    pub selling_price: Option<f64>,
    pub owner_id: String,
}

impl Unit {
    /// Mark the unit as rented
    pub fn mark_rented(&mut self) {
        self.status = UnitStatus::Rented;
    }

    /// Mark the unit as sold
    pub fn mark_sold(&mut self) {
        self.status = UnitStatus::Sold;
    }

    /// Identifier as shown in summaries ("unit101" -> "Unit101")
    pub fn display_id(&self) -> String {
        title_case(&self.unit_id)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {} | {} | {}",
            self.display_id(),
            self.location,
            self.size,
            self.status,
            format_money(self.rent),
            format_money(self.selling_price),
            self.owner_id
        )
    }
}
