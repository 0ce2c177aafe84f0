//! # Health Calculators
//!
//! This module contains every calculator and the shared types they are
//! described with. Each calculator follows the pattern:
//!
//! - `*Input` - Typed input parameters (JSON-serializable)
//! - `*Result` - Typed results (JSON-serializable)
//! - `calculate(&input) -> *Result` - Pure, infallible calculation
//! - `compute(&Inputs) -> GaugeResult<CalculatorResult>` - Form-facing adapter
//! - `format(&CalculatorResult) -> FormattedResult` - Display projection
//! - `definition() -> CalculatorDefinition` - Static registry entry
//!
//! ## Available Calculators
//!
//! - [`bmi`] - Body Mass Index with WHO bands and ideal weight range
//! - [`tdee`] - Mifflin-St Jeor BMR and total daily energy expenditure
//! - [`macros`] - Protein/fat/carb split in grams
//! - [`water`] - Daily water intake from body weight and activity
//!
//! ## Example
//!
//! ```rust
//! use gauge_core::calculators::{registry, RawSubmission};
//!
//! let bmi = registry::find_by_slug("bmi").unwrap();
//! let mut raw = RawSubmission::new();
//! raw.insert("weight".to_string(), "70".to_string());
//! raw.insert("height".to_string(), "175".to_string());
//!
//! let evaluation = bmi.evaluate(&raw).unwrap();
//! assert_eq!(evaluation.formatted.title, "22.9 BMI");
//! ```

pub mod bmi;
pub mod macros;
pub mod registry;
pub mod tdee;
pub mod validation;
pub mod water;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{FieldError, GaugeError, GaugeResult};

pub use registry::{all, filter, find_by_slug, related};
pub use validation::{validate, RawSubmission};

/// Placeholder shown by formatters when a result key is absent
pub const MISSING_VALUE: &str = "—";

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

// ============================================================================
// Tags
// ============================================================================

/// Catalog tag used to group calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Health,
    Fitness,
    Everyday,
}

impl Tag {
    /// All tags in catalog order
    pub const ALL: [Tag; 3] = [Tag::Health, Tag::Fitness, Tag::Everyday];

    /// Display name for the tag
    pub fn display_name(&self) -> &'static str {
        match self {
            Tag::Health => "Health",
            Tag::Fitness => "Fitness",
            Tag::Everyday => "Everyday",
        }
    }

    /// Parse a tag name, case-insensitively
    pub fn parse(name: &str) -> Option<Tag> {
        Tag::ALL
            .into_iter()
            .find(|tag| tag.display_name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Input Schema
// ============================================================================

/// Kind of form control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Free numeric entry, optionally bounded by min/max
    Numeric,
    /// One of an enumerated set of option values
    Choice,
}

/// One selectable option of a choice field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Describes one form field and its validation constraints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputField {
    /// Key under which the value is submitted
    pub name: &'static str,
    /// Label shown next to the control, also used in error messages
    pub label: &'static str,
    pub kind: InputKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Step hint for the control (not enforced by validation)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(skip_serializing_if = "has_no_options")]
    pub options: &'static [ChoiceOption],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<&'static str>,
}

fn has_no_options(options: &&'static [ChoiceOption]) -> bool {
    options.is_empty()
}

impl InputField {
    /// A numeric field bounded by `min..=max` with a UI step.
    pub const fn numeric(name: &'static str, label: &'static str, min: f64, max: f64, step: f64) -> Self {
        InputField {
            name,
            label,
            kind: InputKind::Numeric,
            min: Some(min),
            max: Some(max),
            step: Some(step),
            options: &[],
            helper_text: None,
        }
    }

    /// A choice field restricted to `options`.
    pub const fn choice(name: &'static str, label: &'static str, options: &'static [ChoiceOption]) -> Self {
        InputField {
            name,
            label,
            kind: InputKind::Choice,
            min: None,
            max: None,
            step: None,
            options,
            helper_text: None,
        }
    }

    pub const fn with_helper_text(mut self, text: &'static str) -> Self {
        self.helper_text = Some(text);
        self
    }

    /// Label of the option carrying `value`, if any
    pub fn option_label(&self, value: &str) -> Option<&'static str> {
        self.options.iter().find(|o| o.value == value).map(|o| o.label)
    }
}

/// Question/answer pair shown under a calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

// ============================================================================
// Input Values
// ============================================================================

/// A single submitted value: numeric fields carry numbers, choice fields text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// Validated inputs keyed by field name.
///
/// Produced by [`validate`]; compute functions read from it and trust the
/// ranges declared by the calculator's fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inputs(BTreeMap<String, FieldValue>);

impl Inputs {
    pub fn new() -> Self {
        Inputs(BTreeMap::new())
    }

    pub fn with_number(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, FieldValue::Number(value));
        self
    }

    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, FieldValue::Text(value.into()));
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Numeric value of a field. Text values holding a number (choice
    /// fields such as the activity factor) are parsed.
    pub fn number(&self, name: &str) -> GaugeResult<f64> {
        match self.0.get(name) {
            Some(FieldValue::Number(n)) => Ok(*n),
            Some(FieldValue::Text(s)) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| GaugeError::invalid_input(name, s.clone(), "Expected a number")),
            None => Err(GaugeError::missing_field(name)),
        }
    }

    /// Text value of a field.
    pub fn text(&self, name: &str) -> GaugeResult<&str> {
        match self.0.get(name) {
            Some(FieldValue::Text(s)) => Ok(s),
            Some(FieldValue::Number(n)) => Err(GaugeError::invalid_input(name, n.to_string(), "Expected text")),
            None => Err(GaugeError::missing_field(name)),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// Results
// ============================================================================

/// A single output value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultValue::Number(n) => write!(f, "{}", n),
            ResultValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for ResultValue {
    fn from(value: f64) -> Self {
        ResultValue::Number(value)
    }
}

impl From<String> for ResultValue {
    fn from(value: String) -> Self {
        ResultValue::Text(value)
    }
}

impl From<&str> for ResultValue {
    fn from(value: &str) -> Self {
        ResultValue::Text(value.to_string())
    }
}

/// Named outputs of one computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculatorResult(BTreeMap<String, ResultValue>);

impl CalculatorResult {
    pub fn new() -> Self {
        CalculatorResult(BTreeMap::new())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<ResultValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&ResultValue> {
        self.0.get(key)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.0.get(key) {
            Some(ResultValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// Display string for a key, or [`MISSING_VALUE`] when absent
    pub fn display(&self, key: &str) -> String {
        self.0
            .get(key)
            .map(ToString::to_string)
            .unwrap_or_else(|| MISSING_VALUE.to_string())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// A labeled row of a formatted result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    pub label: String,
    pub value: String,
}

impl ResultItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        ResultItem {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Display projection of a [`CalculatorResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedResult {
    pub title: String,
    pub items: Vec<ResultItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub insights: Vec<String>,
}

// ============================================================================
// Calculator Definition
// ============================================================================

/// Compute operation of a calculator
pub type ComputeFn = fn(&Inputs) -> GaugeResult<CalculatorResult>;

/// Format operation of a calculator
pub type FormatFn = fn(&CalculatorResult) -> FormattedResult;

/// Cross-field rule run after per-field validation
pub type CrossCheckFn = fn(&Inputs) -> Vec<FieldError>;

/// Static description of one calculator: metadata, input schema and
/// behavior.
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorDefinition {
    /// Unique key, used in URLs (e.g., "bmi")
    pub slug: &'static str,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<&'static str>,
    pub description: &'static str,
    pub tags: &'static [Tag],
    pub inputs: &'static [InputField],
    #[serde(skip)]
    pub compute: ComputeFn,
    #[serde(skip)]
    pub format: FormatFn,
    #[serde(skip)]
    pub cross_check: Option<CrossCheckFn>,
    pub explanation: &'static str,
    pub formula: &'static str,
    pub faq: &'static [FaqItem],
}

/// Everything produced by one validated run of a calculator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub slug: &'static str,
    pub inputs: Inputs,
    pub result: CalculatorResult,
    pub formatted: FormattedResult,
}

impl CalculatorDefinition {
    /// Name to show in compact places (cards, menus)
    pub fn display_name(&self) -> &'static str {
        self.short_name.unwrap_or(self.name)
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn field(&self, name: &str) -> Option<&InputField> {
        self.inputs.iter().find(|f| f.name == name)
    }

    /// Run the compute operation on already-validated inputs.
    pub fn compute(&self, inputs: &Inputs) -> GaugeResult<CalculatorResult> {
        (self.compute)(inputs)
    }

    /// Run the format operation.
    pub fn format(&self, result: &CalculatorResult) -> FormattedResult {
        (self.format)(result)
    }

    /// Validate a raw submission, compute, then format.
    ///
    /// # Errors
    ///
    /// * `GaugeError::Validation` - one or more fields failed their constraints
    pub fn evaluate(&self, raw: &RawSubmission) -> GaugeResult<Evaluation> {
        let inputs = validate(self, raw).map_err(|errors| GaugeError::Validation { errors })?;
        let result = self.compute(&inputs)?;
        let formatted = self.format(&result);
        debug!(slug = self.slug, title = %formatted.title, "calculator evaluated");
        Ok(Evaluation {
            slug: self.slug,
            inputs,
            result,
            formatted,
        })
    }
}
