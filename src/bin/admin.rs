//! CLI administration tool for rango.
//!
//! Populates and inspects the catalog directly in PostgreSQL, including
//! counters that the web forms never set.
//!
//! # Usage
//!
//! ```bash
//! # Populate the sample catalog
//! cargo run --bin admin -- seed
//!
//! # Add a category with an initial number of likes
//! cargo run --bin admin -- category add "Other Frameworks" --likes 16
//!
//! # Add a page
//! cargo run --bin admin -- page add --category Python --title "Python Docs" --url https://docs.python.org/
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection string

use rango::application::services::CatalogService;
use rango::config::Config;
use rango::domain::entities::{NewCategory, NewPage};
use rango::domain::repositories::{CategoryRepository, PageRepository};
use rango::infrastructure::persistence::{PgCategoryRepository, PgPageRepository};
use rango::utils::slug;
use rango::utils::url_normalizer::normalize_page_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// Sample catalog: (category, likes, [(title, url, views)]).
const SEED_CATALOG: &[(&str, i32, &[(&str, &str, i32)])] = &[
    (
        "Python",
        64,
        &[
            (
                "Official Python Tutorial",
                "http://docs.python.org/2/tutorial/",
                128,
            ),
            (
                "How to Think like a Computer Scientist",
                "http://www.greenteapress.com/thinkpython/",
                64,
            ),
            (
                "Learn Python in 10 Minutes",
                "http://www.korokithakis.net/tutorials/python/",
                32,
            ),
        ],
    ),
    (
        "Django",
        32,
        &[
            (
                "Official Django Tutorial",
                "https://docs.djangoproject.com/en/1.5/intro/tutorial01/",
                96,
            ),
            ("Django Rocks", "http://www.djangorocks.com/", 16),
            (
                "How to Tango with Django",
                "http://www.tangowithdjango.com/",
                48,
            ),
        ],
    ),
    (
        "Other Frameworks",
        16,
        &[
            ("Bottle", "http://bottlepy.org/docs/dev/", 8),
            ("Flask", "http://flask.pocoo.org", 24),
        ],
    ),
];

/// CLI tool for managing rango.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Populate the sample catalog
    Seed {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Manage pages
    Page {
        #[command(subcommand)]
        action: PageAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Category management subcommands.
#[derive(Subcommand)]
enum CategoryAction {
    /// Add a category
    Add {
        /// Category name (may contain spaces)
        name: String,

        /// Initial number of likes
        #[arg(short, long, default_value_t = 0)]
        likes: i32,
    },

    /// List all categories
    List,
}

/// Page management subcommands.
#[derive(Subcommand)]
enum PageAction {
    /// Add a page to an existing category
    Add {
        /// Category name (exact, with spaces)
        #[arg(short, long)]
        category: String,

        /// Page title
        #[arg(short, long)]
        title: String,

        /// Page URL (`http://` is prepended when missing)
        #[arg(short, long)]
        url: String,

        /// Initial number of views
        #[arg(short, long, default_value_t = 0)]
        views: i32,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

struct Repositories {
    categories: PgCategoryRepository,
    pages: PgPageRepository,
    catalog: CatalogService,
}

impl Repositories {
    fn new(pool: &PgPool) -> Self {
        let pool = Arc::new(pool.clone());
        Self {
            categories: PgCategoryRepository::new(pool.clone()),
            pages: PgPageRepository::new(pool.clone()),
            catalog: CatalogService::new(
                Arc::new(PgCategoryRepository::new(pool.clone())),
                Arc::new(PgPageRepository::new(pool)),
            ),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?
        .context("DATABASE_URL (or DB_USER, DB_PASSWORD, DB_NAME) must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let repos = Repositories::new(&pool);

    match cli.command {
        Commands::Seed { yes } => seed(&repos, yes).await?,
        Commands::Category { action } => handle_category_action(action, &repos).await?,
        Commands::Page { action } => handle_page_action(action, &repos).await?,
        Commands::Stats => handle_stats(&repos).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Populates the sample catalog.
///
/// Existing categories are left untouched together with their pages, so
/// running the command twice does not create duplicates.
async fn seed(repos: &Repositories, skip_confirm: bool) -> Result<()> {
    println!("{}", "🌱 Seed Catalog".bright_blue().bold());
    println!();

    for (name, likes, pages) in SEED_CATALOG {
        println!(
            "  {:<20} {} likes, {} pages",
            name.cyan(),
            likes.to_string().bright_white(),
            pages.len().to_string().bright_white()
        );
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Populate these categories?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    for (name, likes, pages) in SEED_CATALOG {
        if repos
            .categories
            .find_by_name(name)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
            .is_some()
        {
            println!("  {} {} (already present)", "•".bright_black(), name);
            continue;
        }

        let category = repos
            .categories
            .create(NewCategory {
                name: name.to_string(),
                likes: *likes,
            })
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create category '{}': {}", name, e))?;

        for (title, url, views) in pages.iter() {
            repos
                .pages
                .create(NewPage {
                    category_id: category.id,
                    title: title.to_string(),
                    url: url.to_string(),
                    views: *views,
                })
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create page '{}': {}", title, e))?;
        }

        println!(
            "  {} {} ({} pages)",
            "✓".green(),
            name.cyan(),
            pages.len()
        );
    }

    println!();
    println!("{}", "✅ Catalog seeded".green().bold());
    println!();

    Ok(())
}

/// Dispatches category management commands.
async fn handle_category_action(action: CategoryAction, repos: &Repositories) -> Result<()> {
    match action {
        CategoryAction::Add { name, likes } => {
            let name = name.trim().to_string();
            anyhow::ensure!(!name.is_empty(), "Category name must not be empty");
            anyhow::ensure!(likes >= 0, "Likes must not be negative");

            let category = repos
                .categories
                .create(NewCategory { name, likes })
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create category: {}", e))?;

            println!(
                "{} Category {} created (/category/{})",
                "✅".green(),
                category.name.cyan(),
                category.slug().bright_white()
            );
        }
        CategoryAction::List => list_categories(repos).await?,
    }

    Ok(())
}

/// Lists all categories with their slugs.
///
/// # Output Format
///
/// ```text
/// 📋 Categories
///
///   ID  Name                           Slug                           Likes
///   ───────────────────────────────────────────────────────────────────────
///   1   Other Frameworks               Other_Frameworks               16
/// ```
async fn list_categories(repos: &Repositories) -> Result<()> {
    println!("{}", "📋 Categories".bright_blue().bold());
    println!();

    let categories = repos
        .categories
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list categories: {}", e))?;

    if categories.is_empty() {
        println!("{}", "  No categories found".yellow());
        println!();
        println!(
            "  Create some with: {} admin seed",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<30} {:<30} {:<6}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Slug".bright_white().bold(),
        "Likes".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for category in &categories {
        println!(
            "  {:<3} {:<30} {:<30} {}",
            category.id.to_string().bright_black(),
            category.name.cyan(),
            slug::encode(&category.name).bright_black(),
            category.likes.to_string().bright_green()
        );
    }

    println!();
    println!(
        "  Total: {}",
        categories.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Dispatches page management commands.
async fn handle_page_action(action: PageAction, repos: &Repositories) -> Result<()> {
    match action {
        PageAction::Add {
            category,
            title,
            url,
            views,
        } => {
            let title = title.trim().to_string();
            anyhow::ensure!(!title.is_empty(), "Page title must not be empty");
            anyhow::ensure!(views >= 0, "Views must not be negative");
            let url = normalize_page_url(&url).context("Invalid page URL")?;

            let owner = repos
                .categories
                .find_by_name(&category)
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
                .with_context(|| format!("Category '{}' not found", category))?;

            let page = repos
                .pages
                .create(NewPage {
                    category_id: owner.id,
                    title,
                    url,
                    views,
                })
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create page: {}", e))?;

            println!(
                "{} Page {} added to {}",
                "✅".green(),
                page.title.cyan(),
                owner.name.cyan()
            );
        }
    }

    Ok(())
}

/// Displays catalog statistics.
async fn handle_stats(repos: &Repositories) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let (categories_count, pages_count) = repos
        .catalog
        .totals()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!(
        "  Categories: {}",
        categories_count.to_string().bright_green().bold()
    );
    println!(
        "  Pages:      {}",
        pages_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
