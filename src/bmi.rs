// ⚖️ BMI Engine
// Formula, rounding, and weight-status thresholds. Pure computation.

use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Imperial formula multiplier (lb/in² → kg/m²)
pub const IMPERIAL_FACTOR: f64 = 703.0;

// ============================================================================
// UNIT MODE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitMode {
    /// Kilograms and meters
    #[serde(rename = "k")]
    Metric,
    /// Pounds and inches
    #[serde(rename = "p")]
    Imperial,
}

impl UnitMode {
    /// Token stored in the Measurement_Type column
    pub fn token(&self) -> &'static str {
        match self {
            UnitMode::Metric => "k",
            UnitMode::Imperial => "p",
        }
    }

    pub fn from_token(token: &str) -> Result<Self, InputError> {
        match token {
            "k" => Ok(UnitMode::Metric),
            "p" => Ok(UnitMode::Imperial),
            other => Err(InputError::UnknownUnit(other.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UnitMode::Metric => "Kilograms (kg)",
            UnitMode::Imperial => "Pounds (lbs)",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            UnitMode::Metric => UnitMode::Imperial,
            UnitMode::Imperial => UnitMode::Metric,
        }
    }
}

// ============================================================================
// WEIGHT STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightStatus {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Healthy Weight")]
    HealthyWeight,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obesity")]
    Obesity,
}

impl WeightStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WeightStatus::Underweight => "Underweight",
            WeightStatus::HealthyWeight => "Healthy Weight",
            WeightStatus::Overweight => "Overweight",
            WeightStatus::Obesity => "Obesity",
        }
    }

    /// Map a rounded BMI onto a status.
    ///
    /// The comparison operators are kept exactly as published: values in
    /// (24.9, 25.0) and exactly 29.9 match neither the healthy nor the
    /// overweight band and fall through to `Obesity`.
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            WeightStatus::Underweight
        } else if (18.5..=24.9).contains(&bmi) {
            WeightStatus::HealthyWeight
        } else if (25.0..29.9).contains(&bmi) {
            WeightStatus::Overweight
        } else {
            WeightStatus::Obesity
        }
    }
}

impl fmt::Display for WeightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// One stored calculation. Column names match the CSV header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiRecord {
    #[serde(rename = "Weight")]
    pub weight: f64,

    #[serde(rename = "Height")]
    pub height: f64,

    #[serde(rename = "Measurement_Type")]
    pub unit: UnitMode,

    #[serde(rename = "BMI")]
    pub bmi: f64,

    #[serde(rename = "Weight_Status")]
    pub status: WeightStatus,
}

impl BmiRecord {
    /// Text shown in the result area after a successful calculation
    pub fn summary(&self) -> String {
        format!("Your BMI is: {}\nWeight Status: {}", self.bmi, self.status)
    }
}

// ============================================================================
// ENGINE
// ============================================================================

/// Round to two decimal places. Exact ties go to the even digit, since the
/// formatter rounds the exact binary value.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Unrounded BMI for the given unit system
pub fn raw_bmi(weight: f64, height: f64, unit: UnitMode) -> f64 {
    let base = weight / (height * height);
    match unit {
        UnitMode::Metric => base,
        UnitMode::Imperial => base * IMPERIAL_FACTOR,
    }
}

/// Validate inputs and build the record. Positivity is checked before the
/// unit token.
pub fn calculate(weight: f64, height: f64, unit_token: &str) -> Result<BmiRecord, InputError> {
    if !(weight > 0.0) || !(height > 0.0) {
        return Err(InputError::NonPositive);
    }
    let unit = UnitMode::from_token(unit_token)?;

    let raw = raw_bmi(weight, height, unit);
    if !raw.is_finite() {
        return Err(InputError::OutOfRange);
    }
    let bmi = round2(raw);
    if !bmi.is_finite() {
        return Err(InputError::OutOfRange);
    }

    Ok(BmiRecord {
        weight,
        height,
        unit,
        bmi,
        status: WeightStatus::classify(bmi),
    })
}

/// Parse one text field of the form
pub fn parse_measurement(field: &'static str, text: &str) -> Result<f64, InputError> {
    let invalid = || InputError::InvalidNumber {
        field,
        input: text.to_string(),
    };

    let value: f64 = text.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

/// Full calculate path from raw form text. `None` means no unit was picked.
pub fn calculate_from_input(
    weight_text: &str,
    height_text: &str,
    unit: Option<UnitMode>,
) -> Result<BmiRecord, InputError> {
    let weight = parse_measurement("weight", weight_text)?;
    let height = parse_measurement("height", height_text)?;
    calculate(weight, height, unit.map(|u| u.token()).unwrap_or(""))
}
