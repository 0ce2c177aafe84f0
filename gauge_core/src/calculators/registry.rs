//! # Calculator Registry
//!
//! The fixed, ordered list of calculators the site offers. Definitions are
//! built once on first access and live for the rest of the process.
//!
//! ## Usage
//!
//! ```rust
//! use gauge_core::calculators::{registry, Tag};
//!
//! assert_eq!(registry::all().len(), 4);
//! assert!(registry::find_by_slug("water-intake").is_some());
//! assert!(registry::find_by_slug("body-fat").is_none());
//!
//! let fitness = registry::filter(Some(Tag::Fitness), "");
//! assert_eq!(fitness.len(), 2);
//! ```

use once_cell::sync::Lazy;

use super::{bmi, macros, tdee, water, CalculatorDefinition, Tag};

/// Default number of related calculators shown next to a calculator
pub const DEFAULT_RELATED_LIMIT: usize = 3;

static REGISTRY: Lazy<Vec<CalculatorDefinition>> = Lazy::new(|| {
    vec![
        bmi::definition(),
        tdee::definition(),
        macros::definition(),
        water::definition(),
    ]
});

/// All calculators in catalog order.
pub fn all() -> &'static [CalculatorDefinition] {
    &REGISTRY
}

/// Look up a calculator by slug.
pub fn find_by_slug(slug: &str) -> Option<&'static CalculatorDefinition> {
    REGISTRY.iter().find(|c| c.slug == slug)
}

/// Catalog filter: optional tag plus a case-insensitive free-text query
/// matched against name, description and tag names.
pub fn filter(tag: Option<Tag>, query: &str) -> Vec<&'static CalculatorDefinition> {
    let needle = query.trim().to_lowercase();
    REGISTRY
        .iter()
        .filter(|c| tag.map_or(true, |t| c.has_tag(t)))
        .filter(|c| needle.is_empty() || matches_query(c, &needle))
        .collect()
}

fn matches_query(calculator: &CalculatorDefinition, needle: &str) -> bool {
    let tags = calculator
        .tags
        .iter()
        .map(Tag::display_name)
        .collect::<Vec<_>>()
        .join(" ");
    [calculator.name, calculator.description, tags.as_str()]
        .iter()
        .any(|haystack| haystack.to_lowercase().contains(needle))
}

/// Calculators sharing at least one tag with `slug`, excluding itself.
///
/// Unknown slugs yield an empty list.
pub fn related(slug: &str, limit: usize) -> Vec<&'static CalculatorDefinition> {
    let Some(current) = find_by_slug(slug) else {
        return Vec::new();
    };
    REGISTRY
        .iter()
        .filter(|c| c.slug != current.slug && c.tags.iter().any(|t| current.has_tag(*t)))
        .take(limit)
        .collect()
}
