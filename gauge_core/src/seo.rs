//! # Search Metadata
//!
//! Page-level metadata (title, description, canonical URL, keywords,
//! robots directive) and schema.org JSON-LD documents for calculator pages,
//! articles, FAQs, breadcrumbs and the site itself.
//!
//! ## Example
//!
//! ```rust
//! use gauge_core::config::SiteConfig;
//! use gauge_core::seo::{PageInput, PageMeta};
//!
//! let config = SiteConfig::default();
//! let meta = PageMeta::build(&config, &PageInput::new("BMI Calculator").with_path("/calculators/bmi"));
//!
//! assert_eq!(meta.title, "BMI Calculator | Health Gauge");
//! assert_eq!(meta.canonical_url, "https://www.healthgauge.com/calculators/bmi");
//! assert_eq!(meta.robots, "index, follow");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::calculators::{CalculatorDefinition, FaqItem};
use crate::config::SiteConfig;
use crate::content::PostEntry;
use crate::i18n::Language;

/// Keywords every page carries ahead of its own
pub const BASE_KEYWORDS: [&str; 8] = [
    "health calculator",
    "BMI calculator",
    "macro calculator",
    "TDEE calculator",
    "fitness tools",
    "nutrition planning",
    "wellness calculator",
    "health tracking",
];

pub const DEFAULT_AUTHOR: &str = "Health Gauge Team";

const SCHEMA_CONTEXT: &str = "https://schema.org";

// ============================================================================
// Page Metadata
// ============================================================================

/// Whether the page is a plain page or an article
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    #[default]
    Website,
    Article,
}

/// What a page knows about itself before site defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageInput {
    pub title: String,
    pub description: Option<String>,
    /// Site-relative path; `None` is the site root
    pub path: Option<String>,
    pub keywords: Vec<String>,
    pub author: Option<String>,
    pub kind: PageKind,
    pub language: Language,
    pub noindex: bool,
    pub nofollow: bool,
}

impl PageInput {
    pub fn new(title: impl Into<String>) -> Self {
        PageInput {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Mark the page as an article by `author`
    pub fn as_article(mut self, author: impl Into<String>) -> Self {
        self.kind = PageKind::Article;
        self.author = Some(author.into());
        self
    }

    pub fn noindex(mut self) -> Self {
        self.noindex = true;
        self
    }

    pub fn nofollow(mut self) -> Self {
        self.nofollow = true;
        self
    }
}

/// Resolved head metadata for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    /// Comma-separated, base keywords first
    pub keywords: String,
    pub author: String,
    pub robots: String,
    pub locale: String,
    pub kind: PageKind,
}

impl PageMeta {
    pub fn build(config: &SiteConfig, input: &PageInput) -> Self {
        let title = if input.title.contains(&config.site_name) {
            input.title.clone()
        } else {
            format!("{} | {}", input.title, config.site_name)
        };

        let keywords = BASE_KEYWORDS
            .iter()
            .map(|k| k.to_string())
            .chain(input.keywords.iter().cloned())
            .collect::<Vec<_>>()
            .join(", ");

        PageMeta {
            title,
            description: input
                .description
                .clone()
                .unwrap_or_else(|| config.site_description.clone()),
            canonical_url: config.absolute_url(input.path.as_deref().unwrap_or("")),
            keywords,
            author: input.author.clone().unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            robots: robots(input.noindex, input.nofollow),
            locale: input.language.locale().to_string(),
            kind: input.kind,
        }
    }

    /// Metadata for a calculator detail page
    pub fn for_calculator(config: &SiteConfig, calculator: &CalculatorDefinition, language: Language) -> Self {
        let input = PageInput::new(calculator.name)
            .with_description(calculator.description)
            .with_path(calculator_path(calculator.slug))
            .with_keywords(calculator.tags.iter().map(|t| t.display_name().to_lowercase()))
            .with_language(language);
        Self::build(config, &input)
    }

    /// Metadata for an article page
    pub fn for_post(config: &SiteConfig, post: &PostEntry, language: Language) -> Self {
        let input = PageInput::new(&post.meta.title)
            .with_description(&post.meta.excerpt)
            .with_path(post.url_path())
            .with_keywords(post.meta.tags.iter().cloned())
            .with_language(language)
            .as_article(&post.meta.author);
        Self::build(config, &input)
    }
}

/// Robots directive for the two crawl flags
pub fn robots(noindex: bool, nofollow: bool) -> String {
    format!(
        "{}, {}",
        if noindex { "noindex" } else { "index" },
        if nofollow { "nofollow" } else { "follow" }
    )
}

/// Site-relative path of a calculator page
pub fn calculator_path(slug: &str) -> String {
    format!("/calculators/{}", slug)
}

// ============================================================================
// JSON-LD
// ============================================================================

fn logo(config: &SiteConfig) -> Value {
    json!({
        "@type": "ImageObject",
        "url": config.absolute_url("/logo.png"),
    })
}

fn publisher(config: &SiteConfig) -> Value {
    json!({
        "@type": "Organization",
        "name": config.site_name,
        "url": config.site_url,
        "logo": logo(config),
    })
}

/// `WebApplication` document for a calculator page.
pub fn calculator_schema(config: &SiteConfig, calculator: &CalculatorDefinition) -> Value {
    let url = config.absolute_url(&calculator_path(calculator.slug));
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebApplication",
        "name": calculator.name,
        "description": calculator.description,
        "url": url,
        "applicationCategory": "HealthApplication",
        "operatingSystem": "Web Browser",
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "USD",
        },
        "author": {
            "@type": "Organization",
            "name": config.site_name,
            "url": config.site_url,
        },
        "publisher": publisher(config),
        "potentialAction": {
            "@type": "UseAction",
            "target": url,
        },
    })
}

/// `Article` document for a newsroom post.
pub fn article_schema(config: &SiteConfig, post: &PostEntry) -> Value {
    let published = post.meta.date.format("%Y-%m-%d").to_string();
    let mut keywords = vec![
        "health".to_string(),
        "fitness".to_string(),
        "nutrition".to_string(),
        "wellness".to_string(),
    ];
    keywords.push(post.meta.category.to_lowercase());

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Article",
        "headline": post.meta.title,
        "description": post.meta.excerpt,
        "image": config.absolute_url("/og-image.jpg"),
        "author": {
            "@type": "Person",
            "name": post.meta.author,
        },
        "publisher": {
            "@type": "Organization",
            "name": config.site_name,
            "logo": logo(config),
        },
        "datePublished": published,
        "dateModified": published,
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": config.absolute_url(&post.url_path()),
        },
        "articleSection": post.meta.category,
        "keywords": keywords,
    })
}

/// `FAQPage` document.
pub fn faq_schema(faq: &[FaqItem]) -> Value {
    let questions: Vec<Value> = faq
        .iter()
        .map(|item| {
            json!({
                "@type": "Question",
                "name": item.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": item.answer,
                },
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub name: String,
    /// Site-relative path
    pub path: String,
}

impl Breadcrumb {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Breadcrumb {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// `BreadcrumbList` document; positions start at 1.
pub fn breadcrumb_schema(config: &SiteConfig, trail: &[Breadcrumb]) -> Value {
    let items: Vec<Value> = trail
        .iter()
        .enumerate()
        .map(|(index, crumb)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": crumb.name,
                "item": config.absolute_url(&crumb.path),
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

pub fn organization_schema(config: &SiteConfig) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Organization",
        "name": config.site_name,
        "url": config.site_url,
        "logo": config.absolute_url("/logo.png"),
        "description": config.site_description,
    })
}

/// `WebSite` document with a catalog search action.
pub fn website_schema(config: &SiteConfig) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebSite",
        "name": config.site_name,
        "url": config.site_url,
        "description": config.site_description,
        "publisher": publisher(config),
        "potentialAction": {
            "@type": "SearchAction",
            "target": config.absolute_url("/calculators?search={search_term_string}"),
            "query-input": "required name=search_term_string",
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::find_by_slug;
    use crate::content::tests::post;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_title_suffix() {
        let config = SiteConfig::default();
        let plain = PageMeta::build(&config, &PageInput::new("Newsroom"));
        assert_eq!(plain.title, "Newsroom | Health Gauge");

        let branded = PageMeta::build(&config, &PageInput::new("Health Gauge - Home"));
        assert_eq!(branded.title, "Health Gauge - Home");
    }

    #[test]
    fn test_defaults_from_config() {
        let config = SiteConfig::default();
        let meta = PageMeta::build(&config, &PageInput::new("About"));
        assert_eq!(meta.description, config.site_description);
        assert_eq!(meta.canonical_url, "https://www.healthgauge.com");
        assert_eq!(meta.author, DEFAULT_AUTHOR);
        assert_eq!(meta.locale, "en_US");
        assert_eq!(meta.kind, PageKind::Website);
    }

    #[test]
    fn test_keywords_base_first() {
        let config = SiteConfig::default();
        let meta = PageMeta::build(&config, &PageInput::new("Water").with_keywords(["hydration"]));
        assert!(meta.keywords.starts_with("health calculator, BMI calculator, "));
        assert!(meta.keywords.ends_with(", health tracking, hydration"));
    }

    #[test]
    fn test_robots() {
        assert_eq!(robots(false, false), "index, follow");
        assert_eq!(robots(true, false), "noindex, follow");
        assert_eq!(robots(true, true), "noindex, nofollow");

        let config = SiteConfig::default();
        let meta = PageMeta::build(&config, &PageInput::new("404").noindex());
        assert_eq!(meta.robots, "noindex, follow");
    }

    #[test]
    fn test_post_meta_is_article() {
        let config = SiteConfig::default();
        let entry = post("zone-2", "Fitness", "2024-05-10");
        let meta = PageMeta::for_post(&config, &entry, Language::Ro);
        assert_eq!(meta.kind, PageKind::Article);
        assert_eq!(meta.canonical_url, "https://www.healthgauge.com/news/zone-2");
        assert_eq!(meta.description, "Excerpt for zone-2");
        assert_eq!(meta.locale, "ro_RO");
    }

    #[test]
    fn test_calculator_schema() {
        let config = SiteConfig::default();
        let bmi = find_by_slug("bmi").unwrap();
        let doc = calculator_schema(&config, bmi);
        assert_eq!(doc["@type"], "WebApplication");
        assert_eq!(doc["url"], "https://www.healthgauge.com/calculators/bmi");
        assert_eq!(doc["offers"]["price"], "0");
    }

    #[test]
    fn test_article_schema() {
        let config = SiteConfig::default();
        let doc = article_schema(&config, &post("zone-2", "Fitness", "2024-05-10"));
        assert_eq!(doc["datePublished"], "2024-05-10");
        assert_eq!(doc["articleSection"], "Fitness");
        assert_eq!(doc["mainEntityOfPage"]["@id"], "https://www.healthgauge.com/news/zone-2");
        assert_eq!(doc["keywords"][4], "fitness");
    }

    #[test]
    fn test_faq_schema() {
        let bmi = find_by_slug("bmi").unwrap();
        let doc = faq_schema(bmi.faq);
        assert_eq!(doc["mainEntity"].as_array().unwrap().len(), bmi.faq.len());
        assert_eq!(doc["mainEntity"][0]["acceptedAnswer"]["@type"], "Answer");
    }

    #[test]
    fn test_breadcrumb_positions_start_at_one() {
        let config = SiteConfig::default();
        let trail = [
            Breadcrumb::new("Home", "/"),
            Breadcrumb::new("News", "/news"),
            Breadcrumb::new("Zone 2", "/news/zone-2"),
        ];
        let doc = breadcrumb_schema(&config, &trail);
        let positions: Vec<u64> = doc["itemListElement"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["position"].as_u64().unwrap())
            .collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(doc["itemListElement"][1]["item"], "https://www.healthgauge.com/news");
    }

    #[test]
    fn test_website_search_action() {
        let config = SiteConfig::default();
        let doc = website_schema(&config);
        assert_eq!(
            doc["potentialAction"]["target"],
            "https://www.healthgauge.com/calculators?search={search_term_string}"
        );
        assert_eq!(organization_schema(&config)["name"], "Health Gauge");
    }
}
