//! CLI administration tool for flight-booking.
//!
//! Issues development tokens, shows record counts and performs database
//! checks without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Issue a token for a user
//! cargo run --bin admin -- token issue --subject alice --role USER
//!
//! # Issue an administrator token valid for two hours
//! cargo run --bin admin -- token issue -s ops -r ADMIN --ttl-minutes 120 -y
//!
//! # View record counts
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `JWT_SECRET` (required for `token`): HS256 signing secret
//! - `JWT_ISSUER` / `JWT_AUDIENCE` (optional): copied into issued tokens
//! - `DATABASE_URL` (required for `stats` and `db`): PostgreSQL connection string

use flight_booking::application::services::auth_service::{Claims, StringOrList, sign_token};
use flight_booking::application::services::{
    AirplaneService, BookingService, FlightService, PassengerService,
};
use flight_booking::state::Repositories;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing flight-booking.
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
    /// Issue development tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Show record counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Token subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Sign an HS256 token with JWT_SECRET
    Issue {
        /// Principal name written to `sub` (prompted if omitted)
        #[arg(short, long)]
        subject: Option<String>,

        /// Realm role, repeatable (e.g. ADMIN, USER)
        #[arg(short, long = "role", default_values_t = vec!["USER".to_string()])]
        roles: Vec<String>,

        /// Token lifetime in minutes
        #[arg(short, long, default_value_t = 60)]
        ttl_minutes: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show server version and applied migrations
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Token { action } => handle_token_action(action)?,
        Commands::Stats => handle_stats(&connect().await?).await?,
        Commands::Db { action } => handle_db_action(action, &connect().await?).await?,
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

/// Dispatches token commands.
fn handle_token_action(action: TokenAction) -> Result<()> {
    match action {
        TokenAction::Issue {
            subject,
            roles,
            ttl_minutes,
            yes,
        } => issue_token(subject, roles, ttl_minutes, yes),
    }
}

/// Signs a token for local testing against a server sharing `JWT_SECRET`.
///
/// # Flow
///
/// 1. Prompt for the subject (or use provided)
/// 2. Display claims
/// 3. Confirm (unless `--yes` flag)
/// 4. Sign and print the token with a usage example
fn issue_token(
    subject: Option<String>,
    roles: Vec<String>,
    ttl_minutes: i64,
    skip_confirm: bool,
) -> Result<()> {
    let secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?;

    if ttl_minutes <= 0 {
        anyhow::bail!("--ttl-minutes must be positive");
    }

    println!("{}", "🔑 Issue Token".bright_blue().bold());
    println!();

    let subject = match subject {
        Some(s) => s,
        None => Input::new()
            .with_prompt("Subject")
            .with_initial_text("alice")
            .interact_text()?,
    };

    let roles: Vec<String> = roles.iter().map(|r| r.trim().to_uppercase()).collect();

    let mut claims = Claims::for_subject(
        subject.clone(),
        roles.clone(),
        chrono::Duration::minutes(ttl_minutes),
    );
    claims.iss = std::env::var("JWT_ISSUER").ok().filter(|v| !v.is_empty());
    claims.aud = std::env::var("JWT_AUDIENCE")
        .ok()
        .filter(|v| !v.is_empty())
        .map(StringOrList::One);

    println!("{}", "Token claims:".bright_white().bold());
    println!("  Subject: {}", subject.cyan());
    println!("  Roles:   {}", roles.join(", ").cyan());
    println!("  Expires: {} minutes", ttl_minutes.to_string().cyan());
    if let Some(ref iss) = claims.iss {
        println!("  Issuer:  {}", iss.cyan());
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Sign this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let token = sign_token(&claims, &secret).context("Failed to sign token")?;

    println!();
    println!("{}", "✅ Token issued".green().bold());
    println!();
    println!("{}", token.bright_yellow());
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" http://localhost:8080/api/flight",
        token.bright_yellow()
    );
    println!();

    Ok(())
}

/// Displays record counts per resource.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let repos = Repositories::postgres(Arc::new(pool.clone()));

    let airplanes = AirplaneService::new(repos.airplanes).count_airplanes().await?;
    let flights = FlightService::new(repos.flights).count_flights().await?;
    let passengers = PassengerService::new(repos.passengers)
        .count_passengers()
        .await?;
    let bookings = BookingService::new(repos.bookings).count_bookings().await?;

    for (label, count) in [
        ("Airplanes", airplanes),
        ("Flights", flights),
        ("Passengers", passengers),
        ("Bookings", bookings),
    ] {
        println!(
            "  {:<12} {}",
            format!("{label}:"),
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

            println!("  PostgreSQL: {}", version.bright_white());
            println!();

            let migrations: Vec<(i64, String)> = sqlx::query_as(
                "SELECT version, description FROM _sqlx_migrations WHERE success ORDER BY version",
            )
            .fetch_all(pool)
            .await
            .context("Failed to read applied migrations")?;

            println!("{}", "  Applied migrations:".bright_white());
            if migrations.is_empty() {
                println!("{}", "    none".yellow());
            }
            for (version, description) in migrations {
                println!(
                    "    {} {}",
                    version.to_string().bright_black(),
                    description.cyan()
                );
            }
            println!();
        }
    }

    Ok(())
}
