//! CLI administration tool for barbershop-booking.
//!
//! Provides commands for managing admin accounts, seeding the catalog,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create (or promote) an admin
//! cargo run --bin admin -- user create-admin --email owner@example.com
//!
//! # Reset a password
//! cargo run --bin admin -- user set-password owner@example.com
//!
//! # Ensure default categories and backfill uncategorized services
//! cargo run --bin admin -- seed categories
//!
//! # Remove expired admin sessions
//! cargo run --bin admin -- session purge
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use barbershop_booking::application::services::CategoryService;
use barbershop_booking::domain::repositories::{
    AppointmentRepository, SessionRepository, UserRepository,
};
use barbershop_booking::infrastructure::cache::NullCache;
use barbershop_booking::infrastructure::persistence::{
    PgAppointmentRepository, PgCategoryRepository, PgServiceRepository, PgSessionRepository,
    PgUserRepository,
};
use barbershop_booking::utils::password::hash_password;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

const MIN_PASSWORD_LEN: usize = 8;

/// CLI tool for managing barbershop-booking.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Seed reference data
    Seed {
        #[command(subcommand)]
        action: SeedAction,
    },

    /// Manage admin sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create an admin, or promote an existing user to admin
    CreateAdmin {
        /// Admin email
        #[arg(short, long)]
        email: Option<String>,

        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all users
    List,

    /// Replace a user's password
    SetPassword {
        /// Email of the user
        email: String,
    },
}

#[derive(Subcommand)]
enum SeedAction {
    /// Ensure default categories exist and categorize orphan services
    Categories,
}

#[derive(Subcommand)]
enum SessionAction {
    /// Delete expired sessions
    Purge,
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Seed { action } => handle_seed_action(action, &pool).await?,
        Commands::Session { action } => handle_session_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));

    match action {
        UserAction::CreateAdmin {
            email,
            password,
            yes,
        } => create_admin(&repo, email, password, yes).await,
        UserAction::List => list_users(&repo).await,
        UserAction::SetPassword { email } => set_password(&repo, email).await,
    }
}

/// Creates or promotes an admin with interactive prompts.
///
/// Only the Argon2id hash of the password is stored.
async fn create_admin(
    repo: &PgUserRepository,
    email: Option<String>,
    password: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create Admin".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let email = email.trim().to_lowercase();
    if !email.contains('@') {
        bail!("Invalid email: {email}");
    }

    let password = match password {
        Some(p) => p,
        None => prompt_password()?,
    };
    check_password(&password)?;

    let existing = repo
        .find_by_email(&email)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!("  Email: {}", email.cyan());
    match &existing {
        Some(user) => println!(
            "  {} existing {} user will be promoted to ADMIN",
            "⚠️ ".yellow(),
            user.role.as_str().yellow()
        ),
        None => println!("  A new ADMIN user will be created"),
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Continue?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let hash = hash_password(&password).map_err(|e| anyhow::anyhow!("{}", e))?;

    let user = repo
        .upsert_admin(&email, &hash)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to save admin: {}", e))?;

    println!("{}", "✅ Admin saved".green().bold());
    println!("  ID: {}", user.id.bright_black());
    println!();

    Ok(())
}

async fn list_users(repo: &PgUserRepository) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create-admin",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<36} {:<32} {:<8} {:<8}",
        "ID".bright_white().bold(),
        "Email".bright_white().bold(),
        "Role".bright_white().bold(),
        "Password".bright_white().bold()
    );
    println!("  {}", "─".repeat(88).bright_black());

    for user in &users {
        let password = if user.password_hash.is_some() {
            "set".green()
        } else {
            "none".red()
        };

        println!(
            "  {:<36} {:<32} {:<8} {}",
            user.id.bright_black(),
            user.email.cyan(),
            user.role.as_str(),
            password
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn set_password(repo: &PgUserRepository, email: String) -> Result<()> {
    println!("{}", "🔒 Set Password".bright_blue().bold());
    println!();

    let password = prompt_password()?;
    check_password(&password)?;

    let hash = hash_password(&password).map_err(|e| anyhow::anyhow!("{}", e))?;

    let updated = repo
        .set_password(&email, &hash)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to update password: {}", e))?;

    if !updated {
        bail!("User not found: {email}");
    }

    println!("{}", "✅ Password updated".green().bold());
    println!();

    Ok(())
}

fn prompt_password() -> Result<String> {
    Ok(Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?)
}

fn check_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        bail!("Password must be at least {MIN_PASSWORD_LEN} characters");
    }
    Ok(())
}

async fn handle_seed_action(action: SeedAction, pool: &PgPool) -> Result<()> {
    match action {
        SeedAction::Categories => {
            println!("{}", "🌱 Seeding categories".bright_blue().bold());
            println!();

            let pool = Arc::new(pool.clone());
            let service = CategoryService::new(
                Arc::new(PgCategoryRepository::new(pool.clone())),
                Arc::new(PgServiceRepository::new(pool)),
                Arc::new(NullCache::new()),
            );

            let report = service
                .seed_defaults()
                .await
                .map_err(|e| anyhow::anyhow!("Seeding failed: {}", e))?;

            println!(
                "  Categories ensured: {}",
                report.categories.to_string().bright_green().bold()
            );
            println!(
                "  Services backfilled: {}",
                report.backfilled.to_string().bright_green().bold()
            );
            println!();
            println!(
                "{}",
                "ℹ️  Restart the server or wait for the cache TTL to see changes".bright_black()
            );
            println!();
        }
    }

    Ok(())
}

async fn handle_session_action(action: SessionAction, pool: &PgPool) -> Result<()> {
    match action {
        SessionAction::Purge => {
            let repo = PgSessionRepository::new(Arc::new(pool.clone()));
            let removed = repo
                .delete_expired()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to purge sessions: {}", e))?;

            println!(
                "{} {} expired session(s) removed",
                "✅".green(),
                removed.to_string().bright_white().bold()
            );
        }
    }

    Ok(())
}

/// Displays catalog and booking counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let services_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM services")
        .fetch_one(pool)
        .await?;

    let barbers_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM barbers")
        .fetch_one(pool)
        .await?;

    let slots_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM time_slots")
        .fetch_one(pool)
        .await?;

    println!(
        "  Services:     {}",
        services_count.to_string().bright_green().bold()
    );
    println!(
        "  Barbers:      {}",
        barbers_count.to_string().bright_green().bold()
    );
    println!(
        "  Time slots:   {}",
        slots_count.to_string().bright_green().bold()
    );
    println!();

    let appointments = PgAppointmentRepository::new(Arc::new(pool.clone()));
    let by_status = appointments
        .count_by_status()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count appointments: {}", e))?;

    println!("{}", "  Appointments".bright_white().bold());
    for (status, count) in by_status {
        println!(
            "    {:<12} {}",
            status.as_str(),
            count.to_string().bright_green().bold()
        );
    }
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

            let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations applied: {}", applied.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
