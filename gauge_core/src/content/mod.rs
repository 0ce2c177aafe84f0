//! # Content Lookup
//!
//! The newsroom: posts loaded once at startup, ordered newest first, and the
//! read-only queries listing and article pages need.
//!
//! ## Structure
//!
//! ```text
//! ContentStore
//! └── posts: Vec<PostEntry>   (descending date, then slug)
//!     ├── slug                (unique)
//!     ├── meta: PostMeta      (title, excerpt, category, date, author, tags, reading time)
//!     └── body                (markdown)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use gauge_core::content::ContentStore;
//!
//! let store = ContentStore::bundled();
//! let newest = &store.latest(1)[0];
//! let related = store.related(&newest.slug, &newest.meta.category, 3);
//! assert!(related.iter().all(|p| p.slug != newest.slug));
//! assert!(store.by_slug("nonexistent").is_none());
//! ```

pub mod loader;
pub mod toc;

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::{GaugeError, GaugeResult};

pub use toc::{slugify, table_of_contents, Heading};

/// Reading time used when a post does not declare one
pub const DEFAULT_READING_TIME: &str = "4 min";

/// Category label meaning "no category filter"
pub const ALL_CATEGORIES: &str = "All";

/// Post metadata from the document's front matter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMeta {
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub date: NaiveDate,
    pub author: String,
    pub tags: Vec<String>,
    pub reading_time: String,
}

/// One newsroom article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostEntry {
    pub slug: String,
    pub meta: PostMeta,
    /// Markdown body, without the front matter
    pub body: String,
}

impl PostEntry {
    /// Site-relative URL of the article page
    pub fn url_path(&self) -> String {
        format!("/news/{}", self.slug)
    }

    pub fn table_of_contents(&self) -> Vec<Heading> {
        table_of_contents(&self.body)
    }

    fn matches(&self, needle: &str) -> bool {
        let target = format!("{} {} {}", self.meta.title, self.meta.excerpt, self.meta.tags.join(" "));
        target.to_lowercase().contains(needle)
    }
}

/// Listing filter for the newsroom index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFilter {
    /// Exact category; `None` means every category
    pub category: Option<String>,
    /// Case-insensitive search over title, excerpt and tags
    pub query: String,
}

impl PostFilter {
    /// Build a filter from UI values, where the category label "All" (any
    /// case) or an empty label means no category restriction.
    pub fn new(category: Option<&str>, query: impl Into<String>) -> Self {
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case(ALL_CATEGORIES))
            .map(str::to_string);
        PostFilter {
            category,
            query: query.into(),
        }
    }
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number, after clamping
    pub page: usize,
    /// Always at least 1
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Slice `items` into pages of `page_size` and return page `page`.
///
/// The page number is clamped into `1..=total_pages`; a zero page size is
/// treated as 1.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());

    Page {
        items: items[start..end].to_vec(),
        page,
        total_pages,
        total_items: items.len(),
    }
}

static BUNDLED: Lazy<ContentStore> = Lazy::new(|| {
    loader::load_bundled().unwrap_or_else(|err| {
        error!(error = %err, "bundled posts failed to load; newsroom will be empty");
        ContentStore::default()
    })
});

/// In-memory, read-only post collection.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    posts: Vec<PostEntry>,
}

impl ContentStore {
    /// Build a store, enforcing unique slugs and ordering newest first.
    ///
    /// # Errors
    ///
    /// * `GaugeError::DuplicateSlug` - two posts share a slug
    pub fn from_posts(mut posts: Vec<PostEntry>) -> GaugeResult<Self> {
        let mut seen = HashSet::new();
        for post in &posts {
            if !seen.insert(post.slug.as_str()) {
                return Err(GaugeError::DuplicateSlug {
                    slug: post.slug.clone(),
                });
            }
        }

        posts.sort_by(|a, b| b.meta.date.cmp(&a.meta.date).then_with(|| a.slug.cmp(&b.slug)));
        Ok(ContentStore { posts })
    }

    /// The posts embedded in the binary, parsed on first use.
    pub fn bundled() -> &'static ContentStore {
        &BUNDLED
    }

    /// Load every `.md` document in `dir`.
    pub fn load_dir(dir: &Path) -> GaugeResult<Self> {
        loader::load_dir(dir)
    }

    /// All posts, newest first
    pub fn all(&self) -> &[PostEntry] {
        &self.posts
    }

    pub fn by_slug(&self, slug: &str) -> Option<&PostEntry> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// The `count` newest posts
    pub fn latest(&self, count: usize) -> &[PostEntry] {
        &self.posts[..count.min(self.posts.len())]
    }

    /// Up to `limit` other posts in `category`, newest first.
    pub fn related(&self, slug: &str, category: &str, limit: usize) -> Vec<&PostEntry> {
        self.posts
            .iter()
            .filter(|p| p.slug != slug && p.meta.category == category)
            .take(limit)
            .collect()
    }

    /// Distinct categories in order of first appearance
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.posts
            .iter()
            .map(|p| p.meta.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    pub fn filter(&self, filter: &PostFilter) -> Vec<&PostEntry> {
        let needle = filter.query.trim().to_lowercase();
        self.posts
            .iter()
            .filter(|p| filter.category.as_deref().map_or(true, |c| p.meta.category == c))
            .filter(|p| needle.is_empty() || p.matches(&needle))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    pub(crate) fn post(slug: &str, category: &str, date: &str) -> PostEntry {
        PostEntry {
            slug: slug.to_string(),
            meta: PostMeta {
                title: format!("Title of {}", slug),
                excerpt: format!("Excerpt for {}", slug),
                category: category.to_string(),
                date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                author: "Health Gauge Team".to_string(),
                tags: vec!["health".to_string()],
                reading_time: DEFAULT_READING_TIME.to_string(),
            },
            body: "## Intro\n\nHello.".to_string(),
        }
    }

    fn sample_store() -> ContentStore {
        ContentStore::from_posts(vec![
            post("protein-myths", "Nutrition", "2024-03-01"),
            post("sleep-basics", "Wellness", "2024-05-10"),
            post("hydration-101", "Nutrition", "2024-04-02"),
            post("zone-2", "Fitness", "2024-05-10"),
            post("fiber-facts", "Nutrition", "2024-01-15"),
            post("carb-timing", "Nutrition", "2024-02-20"),
        ])
        .unwrap()
    }

    fn slugs(posts: &[&PostEntry]) -> Vec<String> {
        posts.iter().map(|p| p.slug.clone()).collect()
    }

    #[test]
    fn test_all_is_newest_first_with_slug_tiebreak() {
        let store = sample_store();
        let order: Vec<&str> = store.all().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(
            order,
            vec!["sleep-basics", "zone-2", "hydration-101", "protein-myths", "carb-timing", "fiber-facts"]
        );
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let err = ContentStore::from_posts(vec![
            post("same", "Nutrition", "2024-01-01"),
            post("same", "Fitness", "2024-02-01"),
        ])
        .unwrap_err();
        assert_eq!(err, GaugeError::DuplicateSlug { slug: "same".into() });
    }

    #[test]
    fn test_by_slug() {
        let store = sample_store();
        assert_eq!(store.by_slug("zone-2").map(|p| p.meta.category.as_str()), Some("Fitness"));
        assert!(store.by_slug("nonexistent").is_none());
    }

    #[test]
    fn test_latest() {
        let store = sample_store();
        assert_eq!(store.latest(2).len(), 2);
        assert_eq!(store.latest(2)[0].slug, "sleep-basics");
        assert_eq!(store.latest(100).len(), 6);
        assert!(store.latest(0).is_empty());
    }

    #[test]
    fn test_related_excludes_self_and_respects_limit() {
        let store = sample_store();
        let related = store.related("hydration-101", "Nutrition", 3);
        assert_eq!(slugs(&related), vec!["protein-myths", "carb-timing", "fiber-facts"]);
        assert!(related.iter().all(|p| p.meta.category == "Nutrition"));

        let limited = store.related("hydration-101", "Nutrition", 1);
        assert_eq!(slugs(&limited), vec!["protein-myths"]);

        assert!(store.related("zone-2", "Fitness", 3).is_empty());
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        assert_eq!(sample_store().categories(), vec!["Wellness", "Fitness", "Nutrition"]);
    }

    #[test]
    fn test_filter_by_category_and_query() {
        let store = sample_store();
        assert_eq!(store.filter(&PostFilter::default()).len(), 6);
        assert_eq!(store.filter(&PostFilter::new(Some("All"), "")).len(), 6);
        assert_eq!(store.filter(&PostFilter::new(Some("Nutrition"), "")).len(), 4);

        let found = store.filter(&PostFilter::new(Some("Nutrition"), "FIBER"));
        assert_eq!(slugs(&found), vec!["fiber-facts"]);

        // Tags are part of the search target
        assert_eq!(store.filter(&PostFilter::new(None, "health")).len(), 6);
        assert!(store.filter(&PostFilter::new(Some("Fitness"), "sleep")).is_empty());
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=14).collect();

        let first = paginate(&items, 1, 6);
        assert_eq!(first.items, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(first.total_pages, 3);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = paginate(&items, 3, 6);
        assert_eq!(last.items, vec![13, 14]);
        assert!(!last.has_next());

        assert_eq!(paginate(&items, 99, 6).page, 3);
        assert_eq!(paginate(&items, 0, 6).page, 1);
    }

    #[test]
    fn test_paginate_empty_has_one_page() {
        let page = paginate::<u32>(&[], 5, 6);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_bundled_store_is_populated() {
        let store = ContentStore::bundled();
        assert!(!store.is_empty());
        let dates: Vec<NaiveDate> = store.all().iter().map(|p| p.meta.date).collect();
        assert!(dates.windows(2).all(|w| w[0] >= w[1]));
    }
}
