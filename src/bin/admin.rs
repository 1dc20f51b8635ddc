//! CLI administration tool for product-api.
//!
//! Provides commands for managing users, browsing products, and checking
//! the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Register a user (prompts for missing fields)
//! cargo run --bin admin -- user create --name John --email j@j.com
//!
//! # Register a user non-interactively
//! cargo run --bin admin -- user create --name John --email j@j.com --password 123456 -y
//!
//! # Register a user with a generated password
//! cargo run --bin admin -- user create --name John --email j@j.com --generate-password
//!
//! # List users
//! cargo run --bin admin -- user list
//!
//! # Show the second page of products, ten per page, newest names first
//! cargo run --bin admin -- product list --page 2 --limit 10 --sort desc
//!
//! # Apply migrations and report row counts
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_NAME`: SQLite database (default `sqlite://products.db`)

use product_api::application::services::{ProductService, UserService};
use product_api::domain::repositories::{ProductQuery, SortOrder};
use product_api::infrastructure::persistence::{
    self, SqliteProductRepository, SqliteUserRepository,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for managing product-api.
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
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Browse products
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Register a new user
    Create {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        /// Password (prompted for when omitted)
        #[arg(short, long, conflicts_with = "generate_password")]
        password: Option<String>,

        /// Generate a random password instead of prompting for one
        #[arg(short, long)]
        generate_password: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all users
    List,
}

/// Product subcommands.
#[derive(Subcommand)]
enum ProductAction {
    /// List products ordered by name
    List {
        #[arg(short, long, default_value_t = 1)]
        page: i64,

        /// Page size; 0 lists everything
        #[arg(short, long, default_value_t = 0)]
        limit: i64,

        /// `asc` or `desc`
        #[arg(short, long, default_value = "asc")]
        sort: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check the connection, apply migrations and print row counts
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        let name = std::env::var("DB_NAME").unwrap_or_else(|_| "products.db".to_string());
        format!("sqlite://{}", name)
    });

    let pool = persistence::connect(&database_url, 1, Duration::from_secs(30))
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Product { action } => handle_product_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &SqlitePool) -> Result<()> {
    let repo = Arc::new(SqliteUserRepository::new(Arc::new(pool.clone())));
    let service = UserService::new(repo);

    match action {
        UserAction::Create {
            name,
            email,
            password,
            generate_password,
            yes,
        } => create_user(&service, name, email, password, generate_password, yes).await?,
        UserAction::List => list_users(&service).await?,
    }

    Ok(())
}

/// Registers a user with interactive prompts.
///
/// A generated password is printed once; only its Argon2 hash is stored.
async fn create_user(
    service: &UserService<SqliteUserRepository>,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    generate_password: bool,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let password = match password {
        Some(p) => p,
        None if generate_password => {
            let generated = random_password();
            println!("{}", "✨ Generated password".green());
            generated
        }
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Repeat password", "Passwords do not match")
            .interact()?,
    };

    println!();
    println!("{}", "User details:".bright_white().bold());
    println!("  Name:  {}", name.cyan());
    println!("  Email: {}", email.cyan());
    if generate_password {
        println!("  Password: {}", password.bright_yellow().bold());
        println!();
        println!(
            "{}",
            "⚠️  Save this password now! It is not stored in plain text."
                .red()
                .bold()
        );
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let user = service
        .create_user(name, email, &password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!("{}", "✅ User created successfully!".green().bold());
    println!("  ID: {}", user.id.to_string().bright_black());
    println!();
    println!("{}", "Get a token with:".bright_white());
    println!(
        "  curl -X POST http://localhost:8000/users/generate_token -d '{{\"email\":\"{}\",\"password\":\"...\"}}'",
        user.email.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all users.
///
/// # Output Format
///
/// ```text
/// 📋 Users
///
///   ID                                    Name                 Email
///   ─────────────────────────────────────────────────────────────────────────────
///   5b0c...                               John                 j@j.com
/// ```
async fn list_users(service: &UserService<SqliteUserRepository>) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = service
        .list_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<37} {:<20} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold()
    );
    println!("  {}", "─".repeat(80).bright_black());

    for user in &users {
        println!(
            "  {:<37} {:<20} {}",
            user.id.to_string().bright_black(),
            user.name.cyan(),
            user.email
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Dispatches product commands.
async fn handle_product_action(action: ProductAction, pool: &SqlitePool) -> Result<()> {
    let repo = Arc::new(SqliteProductRepository::new(Arc::new(pool.clone())));
    let service = ProductService::new(repo);

    match action {
        ProductAction::List { page, limit, sort } => {
            let sort: SortOrder = sort.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            list_products(&service, ProductQuery::new(page, limit, sort)).await?;
        }
    }

    Ok(())
}

/// Prints one page of products.
async fn list_products(
    service: &ProductService<SqliteProductRepository>,
    query: ProductQuery,
) -> Result<()> {
    println!("{}", "📦 Products".bright_blue().bold());
    println!();

    let page = service
        .list_products(query)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list products: {}", e))?;

    if page.products.is_empty() {
        println!("{}", "  No products on this page".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<37} {:<30} {:>10} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Price".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(95).bright_black());

    for product in &page.products {
        println!(
            "  {:<37} {:<30} {:>10.2} {}",
            product.id.to_string().bright_black(),
            product.name.cyan(),
            product.price,
            product
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    if page.limit > 0 {
        println!(
            "  Page {} ({} per page, {}), total: {}",
            page.page,
            page.limit,
            page.sort,
            page.total.to_string().bright_white().bold()
        );
    } else {
        println!(
            "  Total: {} ({})",
            page.total.to_string().bright_white().bold(),
            page.sort
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;
            println!("{}", "✅ Database connection OK".green().bold());

            persistence::migrate(pool)
                .await
                .context("Failed to migrate")?;
            println!("{}", "✅ Migrations applied".green().bold());

            let products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
                .fetch_one(pool)
                .await?;
            let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await?;

            println!();
            println!(
                "  Products: {}",
                products.to_string().bright_green().bold()
            );
            println!("  Users:    {}", users.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}

/// Generates a random alphanumeric password of 20 characters.
fn random_password() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const PASSWORD_LEN: usize = 20;

    let mut rng = rand::rng();

    (0..PASSWORD_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
