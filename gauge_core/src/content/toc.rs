//! Table of contents for article pages: level-2 and level-3 markdown
//! headings, each with an anchor id.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// 2 or 3
    pub level: u8,
    /// Anchor id, unique within the document
    pub id: String,
    pub text: String,
}

/// Anchor id for a heading: lowercase, characters outside `[a-z0-9]` and
/// whitespace dropped, whitespace runs collapsed to `-`.
pub fn slugify(value: &str) -> String {
    let kept: String = value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join("-")
}

fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if !(2..=3).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(|c: char| c == ' ' || c == '\t') {
        return None;
    }
    let text = rest.trim().trim_end_matches('#').trim_end();
    if text.is_empty() {
        None
    } else {
        Some((hashes as u8, text))
    }
}

/// Extract `##`/`###` headings from a markdown body, skipping fenced code.
///
/// Repeated ids get a numeric suffix (`-2`, `-3`, ...).
pub fn table_of_contents(body: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut in_fence = false;

    for line in body.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        let Some((level, text)) = parse_heading(trimmed) else {
            continue;
        };

        let base = slugify(text);
        let count = seen.entry(base.clone()).or_insert(0);
        *count += 1;
        let id = if *count == 1 { base } else { format!("{}-{}", base, count) };

        headings.push(Heading {
            level,
            id,
            text: text.to_string(),
        });
    }
    headings
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Why Zone 2 Works!"), "why-zone-2-works");
        assert_eq!(slugify("  Sleep,   then   train  "), "sleep-then-train");
        assert_eq!(slugify("Café & más"), "caf-ms");
    }

    #[test]
    fn test_table_of_contents() {
        let body = "# Title\n\
\n\
## Getting started\n\
text\n\
### The basics ###\n\
```\n\
## not a heading\n\
```\n\
####Too deep\n\
##No space\n\
## Getting started\n";
        let toc = table_of_contents(body);
        assert_eq!(
            toc,
            vec![
                Heading { level: 2, id: "getting-started".into(), text: "Getting started".into() },
                Heading { level: 3, id: "the-basics".into(), text: "The basics".into() },
                Heading { level: 2, id: "getting-started-2".into(), text: "Getting started".into() },
            ]
        );
    }
}
