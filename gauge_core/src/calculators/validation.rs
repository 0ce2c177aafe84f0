//! # Form Validation
//!
//! Turns a raw submission (field name → submitted string) into [`Inputs`]
//! using the calculator's field descriptors. Every failing field is reported,
//! not just the first, so a form can annotate all of them at once.
//!
//! Rules per field kind:
//! - numeric: required, must parse as a finite number, must lie in `min..=max`
//! - choice: required, must equal one of the option values
//!
//! The `step` hint is not enforced. A calculator may add a cross-field rule
//! which only runs once every field passed on its own.

use std::collections::BTreeMap;

use super::{CalculatorDefinition, FieldValue, InputField, InputKind, Inputs};
use crate::errors::FieldError;

/// Raw form submission, as strings keyed by field name
pub type RawSubmission = BTreeMap<String, String>;

/// Validate a raw submission against a calculator's input schema.
///
/// Keys that do not belong to the schema are ignored.
///
/// # Example
///
/// ```rust
/// use gauge_core::calculators::{find_by_slug, validate, RawSubmission};
///
/// let water = find_by_slug("water-intake").unwrap();
/// let mut raw = RawSubmission::new();
/// raw.insert("weight".into(), "500".into());
///
/// let errors = validate(water, &raw).unwrap_err();
/// assert_eq!(errors.len(), 2); // weight too high, activity missing
/// ```
pub fn validate(definition: &CalculatorDefinition, raw: &RawSubmission) -> Result<Inputs, Vec<FieldError>> {
    let mut inputs = Inputs::new();
    let mut errors = Vec::new();

    for field in definition.inputs {
        match validate_field(field, raw.get(field.name).map(String::as_str)) {
            Ok(value) => inputs.insert(field.name, value),
            Err(error) => errors.push(error),
        }
    }

    if errors.is_empty() {
        if let Some(check) = definition.cross_check {
            errors = check(&inputs);
        }
    }

    if errors.is_empty() {
        Ok(inputs)
    } else {
        Err(errors)
    }
}

/// Validate one submitted value against its descriptor.
pub fn validate_field(field: &InputField, raw: Option<&str>) -> Result<FieldValue, FieldError> {
    let value = match raw.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return Err(FieldError::new(field.name, format!("{} is required", field.label))),
    };

    match field.kind {
        InputKind::Numeric => {
            let number = value
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| FieldError::new(field.name, format!("{} must be a number", field.label)))?;

            if let Some(min) = field.min {
                if number < min {
                    return Err(FieldError::new(
                        field.name,
                        format!("{} must be at least {}", field.label, min),
                    ));
                }
            }
            if let Some(max) = field.max {
                if number > max {
                    return Err(FieldError::new(
                        field.name,
                        format!("{} must be at most {}", field.label, max),
                    ));
                }
            }
            Ok(FieldValue::Number(number))
        }
        InputKind::Choice => {
            if field.options.iter().any(|o| o.value == value) {
                Ok(FieldValue::Text(value.to_string()))
            } else {
                let allowed: Vec<&str> = field.options.iter().map(|o| o.value).collect();
                Err(FieldError::new(
                    field.name,
                    format!("{} must be one of: {}", field.label, allowed.join(", ")),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::{find_by_slug, macros, tdee};
    use pretty_assertions::assert_eq;

    fn raw(pairs: &[(&str, &str)]) -> RawSubmission {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_valid_numeric_submission() {
        let bmi = find_by_slug("bmi").unwrap();
        let inputs = validate(bmi, &raw(&[("weight", " 70.5 "), ("height", "175"), ("extra", "x")])).unwrap();
        assert_eq!(inputs.get("weight"), Some(&FieldValue::Number(70.5)));
        assert_eq!(inputs.len(), 2);
    }

    #[test]
    fn test_reports_every_failing_field() {
        let bmi = find_by_slug("bmi").unwrap();
        let errors = validate(bmi, &raw(&[("weight", "10"), ("height", "tall")])).unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::new("weight", "Weight (kg) must be at least 20"),
                FieldError::new("height", "Height (cm) must be a number"),
            ]
        );
    }

    #[test]
    fn test_missing_and_blank_are_required() {
        let bmi = find_by_slug("bmi").unwrap();
        let errors = validate(bmi, &raw(&[("weight", "   ")])).unwrap_err();
        assert_eq!(errors[0].message, "Weight (kg) is required");
        assert_eq!(errors[1].message, "Height (cm) is required");
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let field = InputField::numeric("age", "Age (years)", 15.0, 90.0, 1.0);
        assert!(validate_field(&field, Some("15")).is_ok());
        assert!(validate_field(&field, Some("90")).is_ok());
        assert_eq!(
            validate_field(&field, Some("90.5")).unwrap_err().message,
            "Age (years) must be at most 90"
        );
        assert!(validate_field(&field, Some("NaN")).is_err());
        assert!(validate_field(&field, Some("inf")).is_err());
    }

    #[test]
    fn test_choice_must_match_option() {
        let definition = tdee::definition();
        let sex = definition.field("sex").unwrap();
        assert_eq!(validate_field(sex, Some("male")).unwrap(), FieldValue::Text("male".into()));
        assert_eq!(
            validate_field(sex, Some("Male")).unwrap_err().message,
            "Sex must be one of: female, male"
        );
    }

    #[test]
    fn test_cross_check_runs_after_fields_pass() {
        let definition = macros::definition();
        let errors = validate(
            &definition,
            &raw(&[("calories", "2000"), ("proteinRatio", "60"), ("fatRatio", "45")]),
        )
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "fatRatio");

        // A per-field failure suppresses the cross-field rule
        let errors = validate(
            &definition,
            &raw(&[("calories", "100"), ("proteinRatio", "60"), ("fatRatio", "45")]),
        )
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "calories");
    }
}
