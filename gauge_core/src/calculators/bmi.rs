//! # Body Mass Index
//!
//! Relates weight to the square of height and classifies the value into the
//! six WHO adult bands. Also reports the weight range that keeps BMI inside
//! the normal band at the given height.
//!
//! ## Example
//!
//! ```rust
//! use gauge_core::calculators::bmi::{calculate, BmiCategory, BmiInput};
//!
//! let result = calculate(&BmiInput { weight_kg: 70.0, height_cm: 175.0 });
//! assert_eq!(result.bmi, 22.9);
//! assert_eq!(result.category, BmiCategory::Normal);
//! ```

use serde::{Deserialize, Serialize};

use super::{
    round_to, CalculatorDefinition, CalculatorResult, FaqItem, FormattedResult, InputField, Inputs,
    ResultItem, Tag,
};
use crate::errors::GaugeResult;
use crate::units::{Centimeters, Meters};

pub const SLUG: &str = "bmi";

/// Lower bound of the normal band (kg/m²)
pub const NORMAL_MIN: f64 = 18.5;
/// Upper bound of the normal band (kg/m²)
pub const NORMAL_MAX: f64 = 24.9;

/// Input parameters for a BMI calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiInput {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Standing height in centimeters
    pub height_cm: f64,
}

impl BmiInput {
    pub fn from_inputs(inputs: &Inputs) -> GaugeResult<Self> {
        Ok(BmiInput {
            weight_kg: inputs.number("weight")?,
            height_cm: inputs.number("height")?,
        })
    }

    pub fn height_m(&self) -> Meters {
        Centimeters(self.height_cm).into()
    }
}

/// WHO adult BMI classification.
///
/// Each band's upper bound is exclusive, so a value sitting exactly on a
/// boundary belongs to the higher band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    ObesityI,
    ObesityII,
    ObesityIII,
}

impl BmiCategory {
    /// Classify a BMI value. Total over all f64 values (NaN lands in the
    /// highest band).
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < NORMAL_MIN {
            BmiCategory::Underweight
        } else if bmi < NORMAL_MAX {
            BmiCategory::Normal
        } else if bmi < 29.9 {
            BmiCategory::Overweight
        } else if bmi < 34.9 {
            BmiCategory::ObesityI
        } else if bmi < 39.9 {
            BmiCategory::ObesityII
        } else {
            BmiCategory::ObesityIII
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObesityI => "Obesity class I",
            BmiCategory::ObesityII => "Obesity class II",
            BmiCategory::ObesityIII => "Obesity class III",
        }
    }
}

/// Results from a BMI calculation (rounded to 1 decimal).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
    /// Lowest weight with BMI in the normal band (kg)
    pub ideal_min_kg: f64,
    /// Highest weight with BMI in the normal band (kg)
    pub ideal_max_kg: f64,
}

impl BmiResult {
    pub fn ideal_range(&self) -> String {
        format!("{} – {} kg", self.ideal_min_kg, self.ideal_max_kg)
    }
}

/// Calculate BMI, its category and the ideal weight range.
pub fn calculate(input: &BmiInput) -> BmiResult {
    let height_sq = input.height_m().squared();
    let bmi = input.weight_kg / height_sq;

    BmiResult {
        bmi: round_to(bmi, 1),
        category: BmiCategory::from_bmi(bmi),
        ideal_min_kg: round_to(NORMAL_MIN * height_sq, 1),
        ideal_max_kg: round_to(NORMAL_MAX * height_sq, 1),
    }
}

impl From<&BmiResult> for CalculatorResult {
    fn from(result: &BmiResult) -> Self {
        CalculatorResult::new()
            .with("bmi", result.bmi)
            .with("category", result.category.label())
            .with("idealMinKg", result.ideal_min_kg)
            .with("idealMaxKg", result.ideal_max_kg)
            .with("idealRange", result.ideal_range())
    }
}

pub fn compute(inputs: &Inputs) -> GaugeResult<CalculatorResult> {
    let input = BmiInput::from_inputs(inputs)?;
    Ok(CalculatorResult::from(&calculate(&input)))
}

pub fn format(result: &CalculatorResult) -> FormattedResult {
    FormattedResult {
        title: format!("{} BMI", result.display("bmi")),
        items: vec![
            ResultItem::new("Category", result.display("category")),
            ResultItem::new("Ideal weight range", result.display("idealRange")),
        ],
        insights: vec![
            "BMI is a screening tool and does not diagnose the body fatness or health of an individual.".to_string(),
            "Pair BMI with waist circumference and body composition for a fuller picture.".to_string(),
        ],
    }
}

const INPUTS: &[InputField] = &[
    InputField::numeric("weight", "Weight (kg)", 20.0, 250.0, 0.1),
    InputField::numeric("height", "Height (cm)", 100.0, 230.0, 0.5),
];

const FAQ: &[FaqItem] = &[
    FaqItem {
        question: "Is BMI accurate for athletes?",
        answer: "Highly muscular individuals may register higher BMI despite low body fat. Use body composition tests alongside BMI.",
    },
    FaqItem {
        question: "What is a healthy BMI range?",
        answer: "Most adults aim for 18.5 to 24.9, but individual targets vary with age, ethnicity, and health history.",
    },
];

pub fn definition() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: SLUG,
        name: "Body Mass Index",
        short_name: Some("BMI"),
        description: "Estimate body fat by relating weight to height using the WHO BMI classification.",
        tags: &[Tag::Health, Tag::Everyday],
        inputs: INPUTS,
        compute,
        format,
        cross_check: None,
        explanation: "BMI compares a person's weight to the square of their height to estimate relative body fatness.",
        formula: "BMI = weight (kg) ÷ [height (m)]²",
        faq: FAQ,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bmi_of(weight_kg: f64, height_cm: f64) -> f64 {
        calculate(&BmiInput { weight_kg, height_cm }).bmi
    }

    #[test]
    fn test_reference_adult() {
        let result = calculate(&BmiInput {
            weight_kg: 70.0,
            height_cm: 175.0,
        });
        assert_eq!(result.bmi, 22.9);
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(result.category.label(), "Normal weight");
        assert_eq!(result.ideal_min_kg, 56.7);
        assert_eq!(result.ideal_max_kg, 76.3);
        assert_eq!(result.ideal_range(), "56.7 – 76.3 kg");
    }

    #[test]
    fn test_monotonic_in_weight_and_height() {
        let mut weight = 40.0;
        while weight < 150.0 {
            assert!(bmi_of(weight + 5.0, 170.0) > bmi_of(weight, 170.0));
            weight += 5.0;
        }

        let mut height = 140.0;
        while height < 210.0 {
            assert!(bmi_of(80.0, height + 5.0) < bmi_of(80.0, height));
            height += 5.0;
        }
    }

    #[test]
    fn test_bands_are_contiguous() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.89), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.9), BmiCategory::ObesityI);
        assert_eq!(BmiCategory::from_bmi(34.9), BmiCategory::ObesityII);
        assert_eq!(BmiCategory::from_bmi(39.9), BmiCategory::ObesityIII);
        assert_eq!(BmiCategory::from_bmi(0.0), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(80.0), BmiCategory::ObesityIII);
    }

    #[test]
    fn test_bands_are_ordered() {
        let mut previous = BmiCategory::from_bmi(10.0);
        let mut value = 10.0;
        while value < 50.0 {
            let current = BmiCategory::from_bmi(value);
            assert!(current >= previous, "band went backwards at {}", value);
            previous = current;
            value += 0.05;
        }
        assert_eq!(previous, BmiCategory::ObesityIII);
    }

    #[test]
    fn test_compute_and_format() {
        let inputs = Inputs::new().with_number("weight", 70.0).with_number("height", 175.0);
        let result = compute(&inputs).unwrap();
        assert_eq!(result.number("bmi"), Some(22.9));
        let keys: Vec<&str> = result.keys().collect();
        assert_eq!(keys, vec!["bmi", "category", "idealMaxKg", "idealMinKg", "idealRange"]);

        let formatted = format(&result);
        assert_eq!(formatted.title, "22.9 BMI");
        assert_eq!(
            formatted.items,
            vec![
                ResultItem::new("Category", "Normal weight"),
                ResultItem::new("Ideal weight range", "56.7 – 76.3 kg"),
            ]
        );
        assert_eq!(formatted.insights.len(), 2);
    }

    #[test]
    fn test_compute_missing_field() {
        let inputs = Inputs::new().with_number("weight", 70.0);
        let err = compute(&inputs).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_format_does_not_fail_on_empty_result() {
        let formatted = format(&CalculatorResult::new());
        assert_eq!(formatted.title, "— BMI");
    }
}
