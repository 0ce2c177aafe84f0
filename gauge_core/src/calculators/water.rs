//! # Daily Water Intake
//!
//! Day-to-day hydration heuristic: a per-kilogram baseline plus a fixed
//! amount for every half hour of activity.

use serde::{Deserialize, Serialize};

use super::{
    round_to, CalculatorDefinition, CalculatorResult, FaqItem, FormattedResult, InputField, Inputs,
    ResultItem, Tag,
};
use crate::errors::GaugeResult;
use crate::units::{Liters, Milliliters};

pub const SLUG: &str = "water-intake";

/// Baseline per kilogram of body weight (ml/kg)
pub const BASELINE_ML_PER_KG: f64 = 35.0;
/// Extra water per block of activity (ml)
pub const ACTIVITY_ML_PER_BLOCK: f64 = 350.0;
/// Length of one activity block (minutes)
pub const ACTIVITY_BLOCK_MINUTES: f64 = 30.0;
/// Volume of one glass (ml)
pub const GLASS_ML: f64 = 250.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterInput {
    pub weight_kg: f64,
    pub activity_minutes: f64,
}

impl WaterInput {
    pub fn from_inputs(inputs: &Inputs) -> GaugeResult<Self> {
        Ok(WaterInput {
            weight_kg: inputs.number("weight")?,
            activity_minutes: inputs.number("activityMinutes")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterResult {
    /// Whole milliliters
    pub total_ml: f64,
    /// Liters, 2 decimals
    pub total_liters: f64,
    /// Approximate 250 ml glasses
    pub glasses: f64,
}

/// Unrounded daily total.
pub fn total_ml(weight_kg: f64, activity_minutes: f64) -> Milliliters {
    let baseline = Milliliters(weight_kg * BASELINE_ML_PER_KG);
    let activity = Milliliters(activity_minutes / ACTIVITY_BLOCK_MINUTES * ACTIVITY_ML_PER_BLOCK);
    baseline + activity
}

pub fn calculate(input: &WaterInput) -> WaterResult {
    let total = total_ml(input.weight_kg, input.activity_minutes);
    let liters: Liters = total.into();
    // Glasses follow the displayed whole-ml total
    let whole_ml = round_to(total.value(), 0);

    WaterResult {
        total_ml: whole_ml,
        total_liters: round_to(liters.value(), 2),
        glasses: round_to(whole_ml / GLASS_ML, 0),
    }
}

impl From<&WaterResult> for CalculatorResult {
    fn from(result: &WaterResult) -> Self {
        CalculatorResult::new()
            .with("totalMl", result.total_ml)
            .with("totalLiters", result.total_liters)
            .with("glasses", result.glasses)
    }
}

pub fn compute(inputs: &Inputs) -> GaugeResult<CalculatorResult> {
    let input = WaterInput::from_inputs(inputs)?;
    Ok(CalculatorResult::from(&calculate(&input)))
}

pub fn format(result: &CalculatorResult) -> FormattedResult {
    FormattedResult {
        title: format!("{} L / day", result.display("totalLiters")),
        items: vec![
            ResultItem::new("Total water", format!("{} ml", result.display("totalMl"))),
            ResultItem::new("Approx. glasses", format!("{} glasses", result.display("glasses"))),
        ],
        insights: vec!["Hydration needs rise with hot weather, altitude, and breastfeeding.".to_string()],
    }
}

const INPUTS: &[InputField] = &[
    InputField::numeric("weight", "Weight (kg)", 30.0, 200.0, 0.1),
    InputField::numeric("activityMinutes", "Active minutes", 0.0, 300.0, 5.0)
        .with_helper_text("Add training or outdoor activity minutes."),
];

const FAQ: &[FaqItem] = &[
    FaqItem {
        question: "Can I count coffee or tea?",
        answer: "Most non-alcoholic beverages contribute to hydration. Prioritize water and electrolyte drinks in hot climates.",
    },
    FaqItem {
        question: "How do I know if I drink enough?",
        answer: "Check urine color (pale straw is ideal) and ensure weight is stable around hard workouts.",
    },
];

pub fn definition() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: SLUG,
        name: "Daily Water Intake",
        short_name: None,
        description: "Estimate optimal fluid intake based on body weight and activity time.",
        tags: &[Tag::Health, Tag::Everyday],
        inputs: INPUTS,
        compute,
        format,
        cross_check: None,
        explanation: "Hydration guidelines scale with body mass and sweat losses during activity. This heuristic covers day-to-day hydration.",
        formula: "Daily water (ml) = weight (kg) × 35 + 350 ml for every 30 minutes of activity.",
        faq: FAQ,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::RawSubmission;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_baseline_only() {
        assert_eq!(total_ml(70.0, 0.0).value(), 2450.0);
        let result = calculate(&WaterInput {
            weight_kg: 70.0,
            activity_minutes: 0.0,
        });
        assert_eq!(
            result,
            WaterResult {
                total_ml: 2450.0,
                total_liters: 2.45,
                glasses: 10.0,
            }
        );
    }

    #[test]
    fn test_activity_adds_per_half_hour() {
        let result = calculate(&WaterInput {
            weight_kg: 70.0,
            activity_minutes: 60.0,
        });
        assert_eq!(result.total_ml, 3150.0);
        assert_eq!(result.total_liters, 3.15);
        assert_eq!(result.glasses, 13.0);
    }

    #[test]
    fn test_linear_in_weight_and_activity() {
        let base = total_ml(60.0, 30.0).value();
        assert_eq!(total_ml(70.0, 30.0).value() - base, 10.0 * BASELINE_ML_PER_KG);
        assert_eq!(total_ml(80.0, 30.0).value() - total_ml(70.0, 30.0).value(), 350.0);
        assert_eq!(total_ml(60.0, 90.0).value() - base, 2.0 * ACTIVITY_ML_PER_BLOCK);
        assert_eq!(total_ml(60.0, 150.0).value() - total_ml(60.0, 90.0).value(), 700.0);
    }

    #[test]
    fn test_format() {
        let inputs = Inputs::new().with_number("weight", 70.0).with_number("activityMinutes", 0.0);
        let formatted = format(&compute(&inputs).unwrap());
        assert_eq!(formatted.title, "2.45 L / day");
        assert_eq!(formatted.items[0], ResultItem::new("Total water", "2450 ml"));
        assert_eq!(formatted.items[1], ResultItem::new("Approx. glasses", "10 glasses"));
    }

    #[test]
    fn test_glasses_agree_with_rounded_total() {
        // 74.99 kg gives 2624.65 ml, shown as 2625 ml = 10.5 glasses
        let raw: RawSubmission = [("weight", "74.99"), ("activityMinutes", "0")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let evaluation = definition().evaluate(&raw).unwrap();
        assert_eq!(evaluation.result.number("totalMl"), Some(2625.0));
        assert_eq!(evaluation.result.number("glasses"), Some(11.0));
        assert_eq!(evaluation.formatted.items[1], ResultItem::new("Approx. glasses", "11 glasses"));
    }
}
