//! # gauge_core - Health Calculators and Newsroom Engine
//!
//! `gauge_core` holds the domain of Health Gauge: a fixed catalog of health
//! calculators (BMI, TDEE, macros, water intake) with their input schemas and
//! formatting, plus a read-only newsroom of markdown articles. Every public
//! type is JSON-serializable, so any renderer (the bundled CLI, a web layer,
//! an API) can sit on top.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure compute functions; the registry and bundled posts are
//!   immutable statics built once
//! - **JSON-First**: All types implement Serialize
//! - **Rich Errors**: Structured error types, with per-field validation errors
//!
//! ## Quick Start
//!
//! ```rust
//! use gauge_core::calculators::{find_by_slug, RawSubmission};
//!
//! let bmi = find_by_slug("bmi").unwrap();
//! let mut raw = RawSubmission::new();
//! raw.insert("weight".into(), "70".into());
//! raw.insert("height".into(), "175".into());
//!
//! let evaluation = bmi.evaluate(&raw).unwrap();
//! assert_eq!(evaluation.formatted.title, "22.9 BMI");
//! ```
//!
//! ## Modules
//!
//! - [`calculators`] - Calculator registry, compute functions, validation
//! - [`content`] - Newsroom posts, filtering, pagination, table of contents
//! - [`seo`] - Page metadata and JSON-LD documents
//! - [`i18n`] - Language, theme and UI dictionaries
//! - [`config`] - Site configuration file
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculators;
pub mod config;
pub mod content;
pub mod errors;
pub mod i18n;
pub mod seo;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculators::{CalculatorDefinition, CalculatorResult, FormattedResult, Inputs, Tag};
pub use config::SiteConfig;
pub use content::{ContentStore, PostEntry, PostFilter};
pub use errors::{FieldError, GaugeError, GaugeResult};
pub use i18n::{Language, Preferences, Theme};
pub use seo::PageMeta;
