//! Unit Form Model
//!
//! Raw field text as typed by the user, decoupled from any widget toolkit.
//! `validate` turns a form into a `Unit` or reports the first offending field.

use std::fmt;

use super::unit::{Unit, UnitStatus};
use crate::helpers::format_plain_number;

/// Input fields of the unit form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    UnitId,
    Location,
    Size,
    Status,
    Rent,
    SellingPrice,
    OwnerId,
}

impl FormField {
    /// Human-readable field name used in validation messages
    pub fn label(self) -> &'static str {
        match self {
            FormField::UnitId => "Unit ID",
            FormField::Location => "Location",
            FormField::Size => "Size",
            FormField::Status => "Status",
            FormField::Rent => "Rent",
            FormField::SellingPrice => "Selling Price",
            FormField::OwnerId => "Owner ID",
        }
    }
}

/// What is wrong with a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Required text field is blank
    Missing,
    /// Required numeric field is blank
    Empty,
    /// Text does not parse as a finite number
    NotANumber { raw: String },
    /// Size is zero or negative
    NotPositive,
    /// Money amount is below zero
    Negative,
}

/// A user-correctable form error, tied to the field that needs focus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: FormField,
    pub issue: ValidationIssue,
}

impl ValidationError {
    fn new(field: FormField, issue: ValidationIssue) -> Self {
        Self { field, issue }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.field.label();
        match &self.issue {
            ValidationIssue::Missing => write!(f, "{name} is required!"),
            ValidationIssue::Empty => write!(f, "{name} cannot be empty!"),
            ValidationIssue::NotANumber { raw } => {
                write!(f, "{name} must be a valid number! You entered: '{raw}'")
            }
            ValidationIssue::NotPositive => write!(f, "{name} must be greater than 0!"),
            ValidationIssue::Negative => write!(f, "{name} cannot be negative!"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Editable state of the unit form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitForm {
    pub unit_id: String,
    pub location: String,
    pub size: String,
    pub status: UnitStatus,
    pub rent: String,
    pub selling_price: String,
    pub owner_id: String,
}

impl UnitForm {
    /// Populate the form from a stored unit (selection sync).
    ///
    /// Absent money becomes an empty string so that the form re-validates
    /// to the same unit.
    pub fn from_unit(unit: &Unit) -> Self {
        Self {
            unit_id: unit.unit_id.clone(),
            location: unit.location.clone(),
            size: unit.size.to_string(),
            status: unit.status,
            rent: unit.rent.map(format_plain_number).unwrap_or_default(),
            selling_price: unit
                .selling_price
                .map(format_plain_number)
                .unwrap_or_default(),
            owner_id: unit.owner_id.clone(),
        }
    }

    /// Read a text field by its identifier (`Status` yields the stored text)
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::UnitId => &self.unit_id,
            FormField::Location => &self.location,
            FormField::Size => &self.size,
            FormField::Status => self.status.as_str(),
            FormField::Rent => &self.rent,
            FormField::SellingPrice => &self.selling_price,
            FormField::OwnerId => &self.owner_id,
        }
    }

    /// Validate every field and build the unit to store.
    ///
    /// Fields are checked in a fixed order and the first failure wins:
    /// unit id, location, owner id, size, rent, selling price.
    pub fn validate(&self) -> Result<Unit, ValidationError> {
        let unit_id = required(FormField::UnitId, &self.unit_id)?;
        let location = required(FormField::Location, &self.location)?;
        let owner_id = required(FormField::OwnerId, &self.owner_id)?;

        let size = parse_size(&self.size)?;
        let rent = parse_money(FormField::Rent, &self.rent)?;
        let selling_price = parse_money(FormField::SellingPrice, &self.selling_price)?;

        Ok(Unit {
            unit_id,
            location,
            size,
            status: self.status,
            rent,
            selling_price,
            owner_id,
        })
    }
}

fn required(field: FormField, raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::new(field, ValidationIssue::Missing));
    }
    Ok(value.to_string())
}

/// Parse a finite number; `Ok(None)` for blank input
fn parse_number(field: FormField, raw: &str) -> Result<Option<f64>, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(Some(number)),
        _ => Err(ValidationError::new(
            field,
            ValidationIssue::NotANumber {
                raw: value.to_string(),
            },
        )),
    }
}

fn parse_size(raw: &str) -> Result<i64, ValidationError> {
    let Some(number) = parse_number(FormField::Size, raw)? else {
        return Err(ValidationError::new(FormField::Size, ValidationIssue::Empty));
    };

    // Truncate toward zero; fractions below one would store a zero size.
    let size = number.trunc();
    if size <= 0.0 {
        return Err(ValidationError::new(
            FormField::Size,
            ValidationIssue::NotPositive,
        ));
    }
    if size > i64::MAX as f64 {
        return Err(ValidationError::new(
            FormField::Size,
            ValidationIssue::NotANumber {
                raw: raw.trim().to_string(),
            },
        ));
    }
    Ok(size as i64)
}

fn parse_money(field: FormField, raw: &str) -> Result<Option<f64>, ValidationError> {
    match parse_number(field, raw)? {
        Some(amount) if amount < 0.0 => Err(ValidationError::new(field, ValidationIssue::Negative)),
        amount => Ok(amount),
    }
}
