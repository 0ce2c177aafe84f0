//! # Macro Split
//!
//! Splits a daily calorie goal between protein, fat and carbohydrates. Carbs
//! take whatever percentage protein and fat leave over; grams follow from
//! the energy density of each macronutrient.

use serde::{Deserialize, Serialize};

use super::{
    round_to, CalculatorDefinition, CalculatorResult, FaqItem, FormattedResult, InputField, Inputs,
    ResultItem, Tag,
};
use crate::errors::{FieldError, GaugeResult};
use crate::units::{Grams, Kilocalories};

pub const SLUG: &str = "macro-calculator";

/// Energy density of protein (kcal/g)
pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
/// Energy density of carbohydrates (kcal/g)
pub const CARB_KCAL_PER_G: f64 = 4.0;
/// Energy density of fat (kcal/g)
pub const FAT_KCAL_PER_G: f64 = 9.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroInput {
    pub calories: f64,
    /// Share of calories from protein (%)
    pub protein_pct: f64,
    /// Share of calories from fat (%)
    pub fat_pct: f64,
}

impl MacroInput {
    pub fn from_inputs(inputs: &Inputs) -> GaugeResult<Self> {
        Ok(MacroInput {
            calories: inputs.number("calories")?,
            protein_pct: inputs.number("proteinRatio")?,
            fat_pct: inputs.number("fatRatio")?,
        })
    }

    /// Remainder left for carbohydrates (%)
    pub fn carb_pct(&self) -> f64 {
        100.0 - self.protein_pct - self.fat_pct
    }
}

/// Results from a macro split (whole grams).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroResult {
    pub protein_pct: f64,
    pub fat_pct: f64,
    pub carb_pct: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carb_g: f64,
}

fn grams_for(calories: Kilocalories, pct: f64, kcal_per_g: f64) -> Grams {
    Grams((calories * (pct / 100.0)).value() / kcal_per_g)
}

pub fn calculate(input: &MacroInput) -> MacroResult {
    let calories = Kilocalories(input.calories);
    let carb_pct = input.carb_pct();

    MacroResult {
        protein_pct: input.protein_pct,
        fat_pct: input.fat_pct,
        carb_pct,
        protein_g: round_to(grams_for(calories, input.protein_pct, PROTEIN_KCAL_PER_G).value(), 0),
        fat_g: round_to(grams_for(calories, input.fat_pct, FAT_KCAL_PER_G).value(), 0),
        carb_g: round_to(grams_for(calories, carb_pct, CARB_KCAL_PER_G).value(), 0),
    }
}

/// Protein and fat shares must leave a non-negative remainder for carbs.
pub fn check_ratio_sum(inputs: &Inputs) -> Vec<FieldError> {
    match (inputs.number("proteinRatio"), inputs.number("fatRatio")) {
        (Ok(protein), Ok(fat)) if protein + fat > 100.0 => vec![FieldError::new(
            "fatRatio",
            "Protein % and Fat % together must be at most 100",
        )],
        _ => Vec::new(),
    }
}

impl From<&MacroResult> for CalculatorResult {
    fn from(result: &MacroResult) -> Self {
        CalculatorResult::new()
            .with("proteinRatio", result.protein_pct)
            .with("fatRatio", result.fat_pct)
            .with("carbRatio", result.carb_pct)
            .with("proteinGrams", result.protein_g)
            .with("fatGrams", result.fat_g)
            .with("carbGrams", result.carb_g)
    }
}

pub fn compute(inputs: &Inputs) -> GaugeResult<CalculatorResult> {
    let input = MacroInput::from_inputs(inputs)?;
    Ok(CalculatorResult::from(&calculate(&input)))
}

pub fn format(result: &CalculatorResult) -> FormattedResult {
    let row = |name: &str, ratio: &str, grams: &str| {
        ResultItem::new(
            format!("{} ({}%)", name, result.display(ratio)),
            format!("{} g", result.display(grams)),
        )
    };
    FormattedResult {
        title: "Daily macro targets".to_string(),
        items: vec![
            row("Protein", "proteinRatio", "proteinGrams"),
            row("Fat", "fatRatio", "fatGrams"),
            row("Carbs", "carbRatio", "carbGrams"),
        ],
        insights: vec!["Adjust ratios if energy levels dip or training volume increases.".to_string()],
    }
}

const INPUTS: &[InputField] = &[
    InputField::numeric("calories", "Calories per day", 800.0, 6000.0, 1.0),
    InputField::numeric("proteinRatio", "Protein %", 10.0, 60.0, 1.0),
    InputField::numeric("fatRatio", "Fat %", 10.0, 60.0, 1.0),
];

const FAQ: &[FaqItem] = &[
    FaqItem {
        question: "What macro ratios are popular?",
        answer: "Balanced plans hover around 30/30/40 for protein/fat/carbs, while high-protein cuts often hit 40/30/30.",
    },
    FaqItem {
        question: "How do I change macros on rest days?",
        answer: "Keep protein high, lower carbs slightly, and monitor recovery. The calculator recalculates quickly for new targets.",
    },
];

pub fn definition() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: SLUG,
        name: "Macro Split Calculator",
        short_name: None,
        description: "Derive daily grams of protein, fats, and carbohydrates based on calorie goals and macro ratios.",
        tags: &[Tag::Fitness, Tag::Everyday],
        inputs: INPUTS,
        compute,
        format,
        cross_check: Some(check_ratio_sum),
        explanation: "Macros split total calories between protein, fat, and carbohydrates using the energy density of each macronutrient.",
        formula: "Protein & carbs provide 4 kcal/g, fats provide 9 kcal/g. Macro grams = (calories × ratio) ÷ kcal/g.",
        faq: FAQ,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_balanced_split() {
        let result = calculate(&MacroInput {
            calories: 2000.0,
            protein_pct: 30.0,
            fat_pct: 30.0,
        });
        assert_eq!(result.carb_pct, 40.0);
        assert_eq!(result.protein_g, 150.0);
        assert_eq!(result.fat_g, 67.0);
        assert_eq!(result.carb_g, 200.0);
    }

    #[test]
    fn test_grams_reconstruct_calories() {
        // Worst-case rounding error: half a gram of each macro
        let tolerance = 0.5 * (PROTEIN_KCAL_PER_G + FAT_KCAL_PER_G + CARB_KCAL_PER_G);
        let mut calories = 800.0;
        while calories <= 6000.0 {
            for protein_pct in [10.0, 25.0, 40.0, 60.0] {
                for fat_pct in [10.0, 20.0, 35.0] {
                    let result = calculate(&MacroInput {
                        calories,
                        protein_pct,
                        fat_pct,
                    });
                    let rebuilt = result.protein_g * PROTEIN_KCAL_PER_G
                        + result.fat_g * FAT_KCAL_PER_G
                        + result.carb_g * CARB_KCAL_PER_G;
                    assert!(
                        (rebuilt - calories).abs() <= tolerance,
                        "{} kcal at {}/{}: rebuilt {}",
                        calories,
                        protein_pct,
                        fat_pct,
                        rebuilt
                    );
                }
            }
            calories += 350.0;
        }
    }

    #[test]
    fn test_ratio_sum_check() {
        let ok = Inputs::new().with_number("proteinRatio", 40.0).with_number("fatRatio", 60.0);
        assert!(check_ratio_sum(&ok).is_empty());

        let over = Inputs::new().with_number("proteinRatio", 60.0).with_number("fatRatio", 50.0);
        let errors = check_ratio_sum(&over);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "fatRatio");
    }

    #[test]
    fn test_format_labels() {
        let inputs = Inputs::new()
            .with_number("calories", 2000.0)
            .with_number("proteinRatio", 30.0)
            .with_number("fatRatio", 30.0);
        let formatted = format(&compute(&inputs).unwrap());
        assert_eq!(formatted.title, "Daily macro targets");
        assert_eq!(
            formatted.items,
            vec![
                ResultItem::new("Protein (30%)", "150 g"),
                ResultItem::new("Fat (30%)", "67 g"),
                ResultItem::new("Carbs (40%)", "200 g"),
            ]
        );
    }
}
