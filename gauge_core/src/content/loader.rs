//! # Post Loading
//!
//! Post documents are markdown files that open with a TOML front matter
//! block fenced by `+++` lines:
//!
//! ```text
//! +++
//! title = "Protein myths, debunked"
//! slug = "protein-myths"          # optional, defaults to the file stem
//! excerpt = "What the research actually says."
//! category = "Nutrition"
//! date = "2024-03-01"             # quoted ISO date
//! author = "Health Gauge Team"
//! tags = ["protein", "nutrition"]
//! reading_time = "5 min"          # optional, defaults to "4 min"
//! +++
//!
//! ## Markdown body...
//! ```
//!
//! Two sources exist: the posts embedded in the binary at build time, and a
//! directory of `.md` files chosen at runtime.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rust_embed::RustEmbed;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{ContentStore, PostEntry, PostMeta, DEFAULT_READING_TIME};
use crate::errors::{GaugeError, GaugeResult};

const FENCE: &str = "+++";

#[derive(RustEmbed)]
#[folder = "content/posts/"]
struct BundledPosts;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FrontMatter {
    title: String,
    slug: Option<String>,
    excerpt: String,
    category: String,
    date: NaiveDate,
    author: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(alias = "readingTime")]
    reading_time: Option<String>,
}

/// Split a document into its front matter and body.
///
/// Returns `None` when the document does not open with a fence, or the
/// fence is never closed.
fn split_front_matter(source: &str) -> Option<(&str, &str)> {
    let source = source.trim_start_matches('\u{feff}');
    let rest = source.strip_prefix(FENCE)?;
    let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            let body = &rest[offset + line.len()..];
            return Some((&rest[..offset], body.trim_start_matches(|c| c == '\r' || c == '\n')));
        }
        offset += line.len();
    }
    None
}

/// Parse one post document.
///
/// `origin` names the document in errors; `stem` is the slug used when the
/// front matter has none.
pub fn parse_post(origin: &str, stem: &str, source: &str) -> GaugeResult<PostEntry> {
    let (front, body) = split_front_matter(source)
        .ok_or_else(|| GaugeError::content_parse(origin, "missing or unterminated +++ front matter"))?;

    let fm: FrontMatter = toml::from_str(front).map_err(|e| GaugeError::content_parse(origin, e.to_string()))?;

    let slug = fm.slug.unwrap_or_else(|| stem.to_string());
    if slug.trim().is_empty() {
        return Err(GaugeError::content_parse(origin, "empty slug"));
    }

    Ok(PostEntry {
        slug,
        meta: PostMeta {
            title: fm.title,
            excerpt: fm.excerpt,
            category: fm.category,
            date: fm.date,
            author: fm.author,
            tags: fm.tags,
            reading_time: fm.reading_time.unwrap_or_else(|| DEFAULT_READING_TIME.to_string()),
        },
        body: body.to_string(),
    })
}

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Load every `.md` document directly inside `dir`.
///
/// Any unreadable or malformed document fails the whole load.
pub fn load_dir(dir: &Path) -> GaugeResult<ContentStore> {
    let entries = fs::read_dir(dir)
        .map_err(|e| GaugeError::file_error("read_dir", dir.display().to_string(), e.to_string()))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_markdown(path))
        .collect();
    paths.sort();

    let mut posts = Vec::with_capacity(paths.len());
    for path in &paths {
        let origin = path.display().to_string();
        let source = fs::read_to_string(path).map_err(|e| GaugeError::file_error("read", &origin, e.to_string()))?;
        posts.push(parse_post(&origin, &file_stem(path), &source)?);
    }

    debug!(dir = %dir.display(), count = posts.len(), "loaded posts from directory");
    ContentStore::from_posts(posts)
}

/// Load the posts embedded in the binary.
///
/// Non-markdown and non-UTF-8 files are skipped with a warning; a malformed
/// markdown document fails the load.
pub fn load_bundled() -> GaugeResult<ContentStore> {
    let mut names: Vec<String> = BundledPosts::iter().map(|name| name.into_owned()).collect();
    names.sort();

    let mut posts = Vec::with_capacity(names.len());
    for name in &names {
        let path = Path::new(name);
        if !is_markdown(path) {
            warn!(file = %name, "skipping non-markdown bundled file");
            continue;
        }
        let Some(file) = BundledPosts::get(name) else {
            continue;
        };
        let Ok(source) = std::str::from_utf8(&file.data) else {
            warn!(file = %name, "skipping bundled post that is not valid UTF-8");
            continue;
        };
        posts.push(parse_post(name, &file_stem(path), source)?);
    }

    debug!(count = posts.len(), "loaded bundled posts");
    ContentStore::from_posts(posts)
}
