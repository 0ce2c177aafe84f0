//! # Daily Calories (TDEE)
//!
//! Basal metabolic rate from the Mifflin-St Jeor equation, scaled by an
//! activity factor to total daily energy expenditure. Four calorie targets
//! (mild/aggressive cut and bulk) are derived from maintenance.
//!
//! ## Formula
//!
//! ```text
//! BMR  = 10 × weight(kg) + 6.25 × height(cm) − 5 × age(y) + s
//!        s = +5 (male), −161 (female)
//! TDEE = BMR × activity factor
//! ```

use serde::{Deserialize, Serialize};

use super::{
    round_to, CalculatorDefinition, CalculatorResult, ChoiceOption, FaqItem, FormattedResult, InputField,
    Inputs, ResultItem, Tag,
};
use crate::errors::{GaugeError, GaugeResult};
use crate::units::Kilocalories;

pub const SLUG: &str = "calories-tdee";

/// Offset for the mild cut/bulk targets (kcal)
pub const MILD_OFFSET: Kilocalories = Kilocalories(250.0);
/// Offset for the aggressive cut/bulk targets (kcal)
pub const AGGRESSIVE_OFFSET: Kilocalories = Kilocalories(500.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub fn parse(value: &str) -> Option<Sex> {
        match value.trim().to_ascii_lowercase().as_str() {
            "female" => Some(Sex::Female),
            "male" => Some(Sex::Male),
            _ => None,
        }
    }

    /// Sex-specific constant of the Mifflin-St Jeor equation
    pub fn mifflin_constant(&self) -> f64 {
        match self {
            Sex::Female => -161.0,
            Sex::Male => 5.0,
        }
    }
}

/// Activity multipliers applied to BMR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    Athlete,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::Athlete,
    ];

    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::Athlete => 1.9,
        }
    }

    /// Match a submitted factor to a level (tolerates float noise)
    pub fn from_factor(factor: f64) -> Option<ActivityLevel> {
        ActivityLevel::ALL
            .into_iter()
            .find(|level| (level.factor() - factor).abs() < 1e-9)
    }
}

/// Input parameters for a TDEE calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TdeeInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: f64,
    pub sex: Sex,
    pub activity: ActivityLevel,
}

impl TdeeInput {
    pub fn from_inputs(inputs: &Inputs) -> GaugeResult<Self> {
        let sex_text = inputs.text("sex")?;
        let sex = Sex::parse(sex_text)
            .ok_or_else(|| GaugeError::invalid_input("sex", sex_text, "Expected 'female' or 'male'"))?;

        let factor = inputs.number("activity")?;
        let activity = ActivityLevel::from_factor(factor).ok_or_else(|| {
            GaugeError::invalid_input("activity", factor.to_string(), "Unknown activity factor")
        })?;

        Ok(TdeeInput {
            weight_kg: inputs.number("weight")?,
            height_cm: inputs.number("height")?,
            age_years: inputs.number("age")?,
            sex,
            activity,
        })
    }
}

/// Results from a TDEE calculation (whole kcal).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TdeeResult {
    pub bmr: f64,
    pub tdee: f64,
    pub mild_cut: f64,
    pub aggressive_cut: f64,
    pub mild_bulk: f64,
    pub aggressive_bulk: f64,
}

/// Mifflin-St Jeor basal metabolic rate, unrounded.
pub fn basal_metabolic_rate(input: &TdeeInput) -> Kilocalories {
    Kilocalories(
        10.0 * input.weight_kg + 6.25 * input.height_cm - 5.0 * input.age_years + input.sex.mifflin_constant(),
    )
}

pub fn calculate(input: &TdeeInput) -> TdeeResult {
    let bmr = basal_metabolic_rate(input);
    let tdee = bmr * input.activity.factor();

    TdeeResult {
        bmr: round_to(bmr.value(), 0),
        tdee: round_to(tdee.value(), 0),
        mild_cut: round_to((tdee - MILD_OFFSET).value(), 0),
        aggressive_cut: round_to((tdee - AGGRESSIVE_OFFSET).value(), 0),
        mild_bulk: round_to((tdee + MILD_OFFSET).value(), 0),
        aggressive_bulk: round_to((tdee + AGGRESSIVE_OFFSET).value(), 0),
    }
}

impl From<&TdeeResult> for CalculatorResult {
    fn from(result: &TdeeResult) -> Self {
        CalculatorResult::new()
            .with("bmr", result.bmr)
            .with("tdee", result.tdee)
            .with("mildCut", result.mild_cut)
            .with("aggressiveCut", result.aggressive_cut)
            .with("mildBulk", result.mild_bulk)
            .with("aggressiveBulk", result.aggressive_bulk)
    }
}

pub fn compute(inputs: &Inputs) -> GaugeResult<CalculatorResult> {
    let input = TdeeInput::from_inputs(inputs)?;
    Ok(CalculatorResult::from(&calculate(&input)))
}

pub fn format(result: &CalculatorResult) -> FormattedResult {
    let kcal = |key: &str| format!("{} kcal", result.display(key));
    FormattedResult {
        title: format!("{} kcal/day", result.display("tdee")),
        items: vec![
            ResultItem::new("BMR", kcal("bmr")),
            ResultItem::new("Maintenance calories", kcal("tdee")),
            ResultItem::new("Mild cut", kcal("mildCut")),
            ResultItem::new("Aggressive cut", kcal("aggressiveCut")),
            ResultItem::new("Mild bulk", kcal("mildBulk")),
            ResultItem::new("Aggressive bulk", kcal("aggressiveBulk")),
        ],
        insights: vec![
            "Adjust intake if weight changes differ from expectations for 2 consecutive weeks.".to_string(),
            "Combine calorie targets with high-protein meals and resistance training for body recomposition."
                .to_string(),
        ],
    }
}

const SEX_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { value: "female", label: "Female" },
    ChoiceOption { value: "male", label: "Male" },
];

const ACTIVITY_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { value: "1.2", label: "Sedentary (desk job, little exercise)" },
    ChoiceOption { value: "1.375", label: "Lightly active (1-3 workouts/week)" },
    ChoiceOption { value: "1.55", label: "Moderately active (3-5 workouts/week)" },
    ChoiceOption { value: "1.725", label: "Very active (6-7 workouts/week)" },
    ChoiceOption { value: "1.9", label: "Athlete (physical job + daily training)" },
];

const INPUTS: &[InputField] = &[
    InputField::numeric("weight", "Weight (kg)", 30.0, 250.0, 0.1),
    InputField::numeric("height", "Height (cm)", 120.0, 230.0, 0.5),
    InputField::numeric("age", "Age (years)", 15.0, 90.0, 1.0),
    InputField::choice("sex", "Sex", SEX_OPTIONS),
    InputField::choice("activity", "Activity level", ACTIVITY_OPTIONS),
];

const FAQ: &[FaqItem] = &[
    FaqItem {
        question: "How often should I recalculate TDEE?",
        answer: "Retest every 4–6 weeks or after body weight changes by more than 3% to keep targets accurate.",
    },
    FaqItem {
        question: "Should I eat below my BMR?",
        answer: "Regular intake below BMR is not advised. Aim for sustainable deficits of 10–20% below TDEE instead.",
    },
];

pub fn definition() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: SLUG,
        name: "Daily Calorie & TDEE Calculator",
        short_name: Some("TDEE"),
        description: "Estimate basal metabolic rate and total daily energy expenditure using the Mifflin-St Jeor equation.",
        tags: &[Tag::Health, Tag::Fitness],
        inputs: INPUTS,
        compute,
        format,
        cross_check: None,
        explanation: "The Mifflin-St Jeor equation estimates basal metabolic rate, which is then scaled by an activity multiplier to reach total daily energy expenditure (TDEE).",
        formula: "BMR = 10×weight (kg) + 6.25×height (cm) − 5×age (y) + s (s = +5 for males, −161 for females). TDEE = BMR × activity factor.",
        faq: FAQ,
    }
}
