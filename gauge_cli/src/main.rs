//! Health Gauge CLI - calculators and newsroom from the terminal
//!
//! Commands:
//! - list: Browse the calculator catalog
//! - show: Describe one calculator and its inputs
//! - calc: Run a calculator on `name=value` inputs
//! - posts: Browse newsroom articles, paginated
//! - post: Read one article with its table of contents
//! - latest: Show the newest articles
//! - schema: Print JSON-LD for a page

use std::borrow::Cow;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

use gauge_core::calculators::{registry, CalculatorDefinition, InputKind, RawSubmission, Tag};
use gauge_core::content::{paginate, ContentStore, PostEntry, PostFilter};
use gauge_core::seo::{self, Breadcrumb, PageMeta};
use gauge_core::i18n::Dictionary;
use gauge_core::{GaugeError, Language, Preferences, SiteConfig};

/// Health Gauge - health calculators and newsroom
#[derive(Parser)]
#[command(name = "gauge")]
#[command(version)]
#[command(about = "Health calculators and newsroom articles", long_about = None)]
struct Cli {
    /// Site config file (missing file means defaults)
    #[arg(long, global = true, default_value = "gauge.toml")]
    config: PathBuf,

    /// Read articles from this directory instead of the bundled set
    #[arg(long, global = true)]
    content_dir: Option<PathBuf>,

    /// UI language (en, ro); defaults to the config value
    #[arg(long, global = true, value_parser = parse_language)]
    lang: Option<Language>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the calculator catalog
    List {
        /// Only calculators with this tag (health, fitness, everyday)
        #[arg(long, value_parser = parse_tag)]
        tag: Option<Tag>,

        /// Free-text search over name, description and tags
        #[arg(long, default_value = "")]
        search: String,
    },

    /// Describe one calculator
    Show {
        slug: String,
    },

    /// Run a calculator, e.g. `gauge calc bmi weight=70 height=175`
    Calc {
        slug: String,

        /// Inputs as name=value pairs
        #[arg(value_parser = parse_assignment)]
        inputs: Vec<(String, String)>,
    },

    /// Browse newsroom articles
    Posts {
        /// Only this category ("All" means every category)
        #[arg(long)]
        category: Option<String>,

        /// Search title, excerpt and tags
        #[arg(long, default_value = "")]
        search: String,

        /// 1-based page number
        #[arg(long, default_value = "1")]
        page: usize,
    },

    /// Read one article
    Post {
        slug: String,
    },

    /// Show the newest articles
    Latest {
        /// How many; defaults to the config value
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Print JSON-LD structured data
    Schema {
        #[arg(value_enum)]
        kind: SchemaKind,

        /// Calculator or article slug, for those kinds
        slug: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemaKind {
    /// WebApplication, FAQPage and BreadcrumbList for a calculator
    Calculator,
    /// Article and BreadcrumbList for a post
    Post,
    /// WebSite with search action
    Website,
    /// Organization
    Organization,
}

fn parse_language(value: &str) -> Result<Language, String> {
    Language::parse(value).ok_or_else(|| format!("unsupported language '{}' (expected en or ro)", value))
}

fn parse_tag(value: &str) -> Result<Tag, String> {
    Tag::parse(value).ok_or_else(|| format!("unknown tag '{}' (expected health, fitness or everyday)", value))
}

fn parse_assignment(value: &str) -> Result<(String, String), String> {
    value
        .split_once('=')
        .map(|(name, raw)| (name.trim().to_string(), raw.to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected name=value, got '{}'", value))
}

// ============================================================================
// Entry
// ============================================================================

/// Resolved settings shared by every command.
struct Context<'a> {
    config: SiteConfig,
    prefs: Preferences,
    store: Cow<'a, ContentStore>,
    json: bool,
}

impl Context<'_> {
    fn dict(&self) -> &'static Dictionary {
        self.prefs.dictionary()
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.into()))
        .with_writer(std::io::stderr)
        .init();

    let json = cli.json;
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let report = CliErrorReport::from(e);
            if json {
                eprintln!(
                    "{}",
                    serde_json::to_string(&report).unwrap_or_else(|_| "Unknown error".to_string())
                );
            } else {
                eprintln!("error: {}", report.message);
                for detail in &report.details {
                    eprintln!("  - {}", detail);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = SiteConfig::load_or_default(&cli.config)?;
    if let Some(dir) = cli.content_dir {
        config.content_dir = Some(dir);
    }

    let store = match &config.content_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "loading articles from directory");
            Cow::Owned(ContentStore::load_dir(dir)?)
        }
        None => Cow::Borrowed(ContentStore::bundled()),
    };
    debug!(posts = store.len(), "content ready");

    let language = cli.lang.unwrap_or(config.default_language);
    let ctx = Context {
        prefs: Preferences::new(language, config.default_theme),
        config,
        store,
        json: cli.json,
    };

    match cli.command {
        Commands::List { tag, search } => cmd_list(&ctx, tag, &search),
        Commands::Show { slug } => cmd_show(&ctx, &slug),
        Commands::Calc { slug, inputs } => cmd_calc(&ctx, &slug, inputs),
        Commands::Posts { category, search, page } => cmd_posts(&ctx, category.as_deref(), &search, page),
        Commands::Post { slug } => cmd_post(&ctx, &slug),
        Commands::Latest { count } => cmd_latest(&ctx, count),
        Commands::Schema { kind, slug } => cmd_schema(&ctx, kind, slug.as_deref()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn find_calculator(slug: &str) -> Result<&'static CalculatorDefinition, CliError> {
    registry::find_by_slug(slug).ok_or_else(|| CliError::NotFound {
        kind: "calculator",
        slug: slug.to_string(),
    })
}

fn find_post<'s>(store: &'s ContentStore, slug: &str) -> Result<&'s PostEntry, CliError> {
    store.by_slug(slug).ok_or_else(|| CliError::NotFound {
        kind: "post",
        slug: slug.to_string(),
    })
}

// ============================================================================
// Calculator commands
// ============================================================================

fn cmd_list(ctx: &Context, tag: Option<Tag>, search: &str) -> Result<(), CliError> {
    let found = registry::filter(tag, search);
    if ctx.json {
        return print_json(&found);
    }

    let dict = ctx.dict();
    println!("{}", dict.catalog_title);
    println!(
        "{}: {} ({})",
        dict.catalog_results,
        found.len(),
        tag.map_or(dict.catalog_all, |t| t.display_name())
    );
    println!();
    if found.is_empty() {
        println!("{}", dict.catalog_empty);
        return Ok(());
    }
    for calculator in found {
        let tags: Vec<&str> = calculator.tags.iter().map(Tag::display_name).collect();
        println!("  {:<18} {} [{}]", calculator.slug, calculator.display_name(), tags.join(", "));
        println!("  {:<18} {}", "", calculator.description);
    }
    Ok(())
}

fn cmd_show(ctx: &Context, slug: &str) -> Result<(), CliError> {
    let calculator = find_calculator(slug)?;
    let related = registry::related(slug, ctx.config.related_limit);
    let meta = PageMeta::for_calculator(&ctx.config, calculator, ctx.prefs.language);

    if ctx.json {
        let related: Vec<&str> = related.iter().map(|c| c.slug).collect();
        return print_json(&json!({
            "calculator": calculator,
            "related": related,
            "meta": meta,
        }));
    }

    println!("{}", calculator.name);
    println!("{}", calculator.description);
    println!("{}", meta.canonical_url);
    println!();
    println!("Inputs:");
    for field in calculator.inputs {
        match field.kind {
            InputKind::Numeric => {
                let min = field.min.map_or(String::new(), |v| v.to_string());
                let max = field.max.map_or(String::new(), |v| v.to_string());
                println!("  {:<16} {} [{}..{}]", field.name, field.label, min, max);
            }
            InputKind::Choice => {
                let values: Vec<&str> = field.options.iter().map(|o| o.value).collect();
                println!("  {:<16} {} ({})", field.name, field.label, values.join(" | "));
            }
        }
        if let Some(help) = field.helper_text {
            println!("  {:<16} {}", "", help);
        }
    }
    println!();
    println!("{}", calculator.explanation);
    println!("Formula: {}", calculator.formula);

    if !calculator.faq.is_empty() {
        println!();
        println!("FAQ:");
        for item in calculator.faq {
            println!("  Q: {}", item.question);
            println!("  A: {}", item.answer);
        }
    }

    if !related.is_empty() {
        println!();
        println!("{}:", ctx.dict().related_calculators);
        for other in related {
            println!("  {:<18} {}", other.slug, other.display_name());
        }
    }
    Ok(())
}

fn cmd_calc(ctx: &Context, slug: &str, inputs: Vec<(String, String)>) -> Result<(), CliError> {
    let calculator = find_calculator(slug)?;
    let raw: RawSubmission = inputs.into_iter().collect();
    let evaluation = calculator.evaluate(&raw)?;

    if ctx.json {
        return print_json(&evaluation);
    }

    let formatted = &evaluation.formatted;
    println!("{}", calculator.name);
    println!("{}", formatted.title);
    println!();
    let width = formatted.items.iter().map(|i| i.label.len()).max().unwrap_or(0);
    for item in &formatted.items {
        println!("  {:<width$}  {}", item.label, item.value, width = width);
    }
    if !formatted.insights.is_empty() {
        println!();
        for insight in &formatted.insights {
            println!("  * {}", insight);
        }
    }
    Ok(())
}

// ============================================================================
// Newsroom commands
// ============================================================================

fn print_post_line(post: &PostEntry) {
    println!(
        "  {}  {:<12} {} ({})",
        post.meta.date, post.meta.category, post.meta.title, post.meta.reading_time
    );
    println!("  {:<10}  {:<12} {}", "", "", post.slug);
}

fn cmd_posts(ctx: &Context, category: Option<&str>, search: &str, page: usize) -> Result<(), CliError> {
    let filter = PostFilter::new(category, search);
    let matching: Vec<PostEntry> = ctx.store.filter(&filter).into_iter().cloned().collect();
    let page = paginate(&matching, page, ctx.config.news_page_size);

    if ctx.json {
        return print_json(&json!({
            "categories": ctx.store.categories(),
            "filter": filter,
            "page": page,
        }));
    }

    let dict = ctx.dict();
    println!("{}", dict.news_title);
    let categories = ctx.store.categories();
    println!("[{}] {}", dict.catalog_all, categories.join(" | "));
    println!();
    if page.items.is_empty() {
        println!("{}", dict.news_empty);
        return Ok(());
    }
    for post in &page.items {
        print_post_line(post);
    }
    println!();
    println!(
        "{} {}/{} ({} {})",
        dict.news_page,
        page.page,
        page.total_pages,
        page.total_items,
        dict.catalog_results.to_lowercase()
    );
    Ok(())
}

fn cmd_post(ctx: &Context, slug: &str) -> Result<(), CliError> {
    let post = find_post(&ctx.store, slug)?;
    let toc = post.table_of_contents();
    let related = ctx.store.related(&post.slug, &post.meta.category, ctx.config.related_limit);
    let meta = PageMeta::for_post(&ctx.config, post, ctx.prefs.language);

    if ctx.json {
        let related: Vec<&str> = related.iter().map(|p| p.slug.as_str()).collect();
        return print_json(&json!({
            "post": post,
            "toc": toc,
            "related": related,
            "meta": meta,
        }));
    }

    let dict = ctx.dict();
    println!("{}", post.meta.title);
    println!(
        "{} | {} | {} | {}",
        post.meta.date, post.meta.author, post.meta.category, post.meta.reading_time
    );
    println!("{}", meta.canonical_url);
    println!();

    if !toc.is_empty() {
        println!("{}:", dict.news_contents);
        for heading in &toc {
            let indent = if heading.level == 3 { "    " } else { "  " };
            println!("{}{} (#{})", indent, heading.text, heading.id);
        }
        println!();
    }

    println!("{}", post.body.trim_end());

    if !related.is_empty() {
        println!();
        println!("{}:", dict.news_related);
        for other in related {
            print_post_line(other);
        }
    }
    Ok(())
}

fn cmd_latest(ctx: &Context, count: Option<usize>) -> Result<(), CliError> {
    let latest = ctx.store.latest(count.unwrap_or(ctx.config.latest_posts));
    if ctx.json {
        return print_json(latest);
    }

    println!("{}", ctx.dict().news_latest);
    println!();
    for post in latest {
        print_post_line(post);
    }
    Ok(())
}

// ============================================================================
// Structured data
// ============================================================================

fn cmd_schema(ctx: &Context, kind: SchemaKind, slug: Option<&str>) -> Result<(), CliError> {
    let config = &ctx.config;
    let dict = ctx.dict();
    let require_slug = || slug.ok_or_else(|| CliError::BadArgument("this schema kind needs a slug".to_string()));

    let documents = match kind {
        SchemaKind::Calculator => {
            let calculator = find_calculator(require_slug()?)?;
            let trail = [
                Breadcrumb::new(dict.nav_home, "/"),
                Breadcrumb::new(dict.nav_calculators, "/calculators"),
                Breadcrumb::new(calculator.name, seo::calculator_path(calculator.slug)),
            ];
            vec![
                seo::calculator_schema(config, calculator),
                seo::faq_schema(calculator.faq),
                seo::breadcrumb_schema(config, &trail),
            ]
        }
        SchemaKind::Post => {
            let post = find_post(&ctx.store, require_slug()?)?;
            let trail = [
                Breadcrumb::new(dict.nav_home, "/"),
                Breadcrumb::new(dict.nav_news, "/news"),
                Breadcrumb::new(&post.meta.title, post.url_path()),
            ];
            vec![seo::article_schema(config, post), seo::breadcrumb_schema(config, &trail)]
        }
        SchemaKind::Website => vec![seo::website_schema(config)],
        SchemaKind::Organization => vec![seo::organization_schema(config)],
    };

    print_json(&documents)
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug)]
enum CliError {
    Gauge(GaugeError),
    Json(serde_json::Error),
    NotFound { kind: &'static str, slug: String },
    BadArgument(String),
}

impl From<GaugeError> for CliError {
    fn from(e: GaugeError) -> Self {
        CliError::Gauge(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

#[derive(Serialize)]
struct CliErrorReport {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<String>,
}

impl From<CliError> for CliErrorReport {
    fn from(e: CliError) -> Self {
        match e {
            CliError::Gauge(e) => CliErrorReport {
                code: e.error_code().to_string(),
                message: e.to_string(),
                details: e
                    .field_errors()
                    .iter()
                    .map(|f| format!("{}: {}", f.field, f.message))
                    .collect(),
            },
            CliError::Json(e) => CliErrorReport {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                details: Vec::new(),
            },
            CliError::NotFound { kind, slug } => CliErrorReport {
                code: "NOT_FOUND".to_string(),
                message: format!("no {} with slug '{}'", kind, slug),
                details: match kind {
                    "calculator" => registry::all().iter().map(|c| c.slug.to_string()).collect(),
                    _ => Vec::new(),
                },
            },
            CliError::BadArgument(message) => CliErrorReport {
                code: "BAD_ARGUMENT".to_string(),
                message,
                details: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(parse_assignment("weight=70").unwrap(), ("weight".to_string(), "70".to_string()));
        assert_eq!(parse_assignment("sex=").unwrap(), ("sex".to_string(), String::new()));
        assert!(parse_assignment("weight").is_err());
        assert!(parse_assignment("=70").is_err());
    }

    #[test]
    fn test_parse_language_and_tag() {
        assert_eq!(parse_language("ro").unwrap(), Language::Ro);
        assert!(parse_language("de").is_err());
        assert_eq!(parse_tag("fitness").unwrap(), Tag::Fitness);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_validation_report_lists_fields() {
        let calculator = find_calculator("bmi").unwrap();
        let err = calculator.evaluate(&RawSubmission::new()).unwrap_err();
        let report = CliErrorReport::from(CliError::from(err));
        assert_eq!(report.code, "VALIDATION_FAILED");
        assert_eq!(report.details.len(), 2);
        assert!(report.details[0].starts_with("weight: "));
    }

    #[test]
    fn test_unknown_calculator_lists_slugs() {
        let report = CliErrorReport::from(find_calculator("body-fat").unwrap_err());
        assert_eq!(report.code, "NOT_FOUND");
        assert_eq!(report.details.len(), registry::all().len());
    }
}
