//! Command-line companion for astro-gateway.
//!
//! Runs the local scorers and filters without starting the server, and
//! probes the configured backend and geocoder.
//!
//! # Usage
//!
//! ```bash
//! # Score two people offline
//! cargo run --bin astro -- score asha.json ravi.json
//!
//! # Templated advice (prompts for the question when omitted)
//! cargo run --bin astro -- advice asha.json ravi.json -q "Should we marry?"
//!
//! # Check a question against the safety filter
//! cargo run --bin astro -- safety "is my partner going to hit me"
//!
//! # Show where the gateway would send backend calls
//! cargo run --bin astro -- backend-url
//!
//! # Probe the backend health endpoint
//! cargo run --bin astro -- health
//!
//! # Interactive place search, one query per line
//! cargo run --bin astro -- geocode
//! ```
//!
//! Birth files hold one JSON object:
//!
//! ```json
//! { "name": "Asha", "date": "1990-05-15", "time": "14:30", "lat": 19.076, "lon": 72.8777, "city": "Mumbai" }
//! ```
//!
//! # Environment Variables
//!
//! Reads the same variables as the server (`PYTHON_API_URL`, `VERCEL_URL`,
//! `GEOCODER_URL`, `GEOCODE_DEBOUNCE_MS`, ...), `.env` included.

use astro_gateway::application::services::{GeocodingService, ProxyService};
use astro_gateway::config::Config;
use astro_gateway::domain::advice::{DISCLAIMERS, SAFETY_DISCLAIMER, generate_advice};
use astro_gateway::domain::birth::BirthInput;
use astro_gateway::domain::safety::{check_safety, matched_keyword};
use astro_gateway::domain::scoring::{BreakdownItem, calculate_compatibility};
use astro_gateway::infrastructure::backend::HttpBackend;
use astro_gateway::infrastructure::cache::GeocodeCache;
use astro_gateway::infrastructure::geocoding::PhotonGeocoder;
use astro_gateway::utils::backend_url::{DeploymentEnv, is_loopback, resolve_backend_url};
use astro_gateway::utils::debounce::Debouncer;

use anyhow::{Context, Result};
use axum::http::HeaderMap;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use url::Url;
use validator::Validate;

/// CLI tool for astro-gateway.
#[derive(Parser)]
#[command(name = "astro")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score two birth files with the offline scorer
    Score {
        partner_a: PathBuf,
        partner_b: PathBuf,
    },

    /// Templated advice for two birth files
    Advice {
        partner_a: PathBuf,
        partner_b: PathBuf,

        /// Question to answer (prompted when omitted)
        #[arg(short, long)]
        question: Option<String>,
    },

    /// Check text against the safety filter
    Safety { text: String },

    /// Print the resolved backend base URL
    BackendUrl,

    /// Probe the backend health endpoint
    Health {
        /// Backend base URL (defaults to the resolved one)
        #[arg(long)]
        url: Option<String>,
    },

    /// Search places, one query per stdin line
    Geocode {
        /// Run a single query and exit
        #[arg(short, long)]
        query: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            partner_a,
            partner_b,
        } => handle_score(&partner_a, &partner_b)?,
        Commands::Advice {
            partner_a,
            partner_b,
            question,
        } => handle_advice(&partner_a, &partner_b, question)?,
        Commands::Safety { text } => handle_safety(&text),
        Commands::BackendUrl => handle_backend_url(),
        Commands::Health { url } => handle_health(url).await?,
        Commands::Geocode { query } => handle_geocode(query).await?,
    }

    Ok(())
}

/// Reads and validates one birth file.
fn load_birth(path: &Path) -> Result<BirthInput> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let input: BirthInput = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid birth record", path.display()))?;

    input
        .validate()
        .with_context(|| format!("{} has invalid fields", path.display()))?;

    if !input.is_complete() {
        println!(
            "{} {} is incomplete (name, date, time and a non-zero location are expected)",
            "⚠️ ".yellow(),
            path.display()
        );
    }

    Ok(input)
}

fn print_dimension(item: &BreakdownItem) {
    println!(
        "  {:<24} {:>2}/{:<2}  {}",
        item.label.bright_white(),
        item.score,
        item.max_score,
        item.insight.bright_black()
    );
}

/// Prints the offline compatibility report.
///
/// ```text
/// 💫 Compatibility
///
///   Asha & Ravi: 30/36 Excellent Match
///
///   Mental Rapport           10/12  Excellent emotional and intellectual connection. ...
/// ```
fn handle_score(a: &Path, b: &Path) -> Result<()> {
    let partner_a = load_birth(a)?;
    let partner_b = load_birth(b)?;

    let result = calculate_compatibility(&partner_a, &partner_b);

    println!("{}", "💫 Compatibility".bright_blue().bold());
    println!();

    let score = format!("{}/36", result.overall.score36);
    let score = match result.overall.score36 {
        28.. => score.green().bold(),
        17..=27 => score.yellow().bold(),
        _ => score.red().bold(),
    };
    println!(
        "  {} & {}: {} {}",
        partner_a.name.cyan(),
        partner_b.name.cyan(),
        score,
        result.overall.label
    );
    println!();

    print_dimension(&result.breakdown.mental);
    print_dimension(&result.breakdown.commitment);
    print_dimension(&result.breakdown.physical);

    println!();
    println!("{}", "Remedies:".bright_white().bold());
    for remedy in &result.remedies {
        println!("  • {remedy}");
    }
    println!();

    Ok(())
}

fn handle_advice(a: &Path, b: &Path, question: Option<String>) -> Result<()> {
    let partner_a = load_birth(a)?;
    let partner_b = load_birth(b)?;

    let question = match question {
        Some(q) => q,
        None => Input::<String>::new()
            .with_prompt("Your question")
            .interact_text()?,
    };

    println!();

    let safety = check_safety(&question);
    if let Some(response) = safety.response {
        println!("{}", response.message.yellow());
        println!();
        for resource in &response.resources {
            println!("  • {}", resource.bright_white());
        }
        println!();
        println!("{}", SAFETY_DISCLAIMER.bright_black());
        return Ok(());
    }

    println!("{}", generate_advice(&partner_a, &partner_b, &question));
    println!();
    for disclaimer in DISCLAIMERS {
        println!("{}", disclaimer.bright_black());
    }

    Ok(())
}

fn handle_safety(text: &str) {
    match matched_keyword(text) {
        Some(keyword) => {
            println!(
                "{} matched keyword '{}'",
                "FLAGGED".red().bold(),
                keyword.yellow()
            );
        }
        None => println!("{}", "SAFE".green().bold()),
    }
}

fn handle_backend_url() {
    let env = DeploymentEnv::from_env();
    let url = resolve_backend_url(&env);

    println!("{}", url.bright_white().bold());

    match env.platform_host.as_deref() {
        Some(host) => println!("  platform host: {}", host.cyan()),
        None => println!("  {}", "local execution".bright_black()),
    }

    if let Some(explicit) = env.python_api_url.as_deref() {
        let note = if env.platform_host.is_some() && is_loopback(explicit) {
            " (ignored: loopback on platform)".yellow()
        } else {
            "".normal()
        };
        println!("  PYTHON_API_URL: {}{}", explicit.cyan(), note);
    }
}

async fn handle_health(url: Option<String>) -> Result<()> {
    let url = url.unwrap_or_else(|| resolve_backend_url(&DeploymentEnv::from_env()));

    let backend = HttpBackend::new(&url).context("Failed to build backend client")?;
    let service = ProxyService::new(Arc::new(backend));

    println!("{} {}", "🩺 Probing".bright_blue().bold(), url.cyan());
    println!();

    let health = service.backend_health(&HeaderMap::new()).await;

    if health.connected {
        println!("{}", "✅ Backend connected".green().bold());
    } else {
        println!("{}", "❌ Backend unavailable".red().bold());
    }

    for (key, value) in &health.details {
        println!("  {}: {}", key.bright_white(), value);
    }
    println!();

    Ok(())
}

fn print_places(query: &str, results: &[astro_gateway::domain::geocoding::GeocodingResult]) {
    if results.is_empty() {
        println!("{} {}", "No places for".yellow(), query.cyan());
        return;
    }

    println!("{} {}", "Places for".bright_white().bold(), query.cyan());
    for place in results {
        println!(
            "  {:<48} {:>9.4} {:>9.4}  {}",
            place.display_name,
            place.lat,
            place.lon,
            place.tz.as_deref().unwrap_or("-").bright_black()
        );
    }
}

/// Place search, debounced like the form's city field.
///
/// Each new stdin line supersedes a lookup still waiting out the delay.
async fn handle_geocode(query: Option<String>) -> Result<()> {
    let config = Config::from_env()?;

    let endpoint = Url::parse(&config.geocoder_url).context("Invalid GEOCODER_URL")?;
    let service = Arc::new(GeocodingService::new(
        Arc::new(PhotonGeocoder::new(endpoint)),
        Arc::new(GeocodeCache::new(config.geocode_cache_capacity.max(1))),
    ));

    if let Some(query) = query {
        let results = service.search(&query).await;
        print_places(&query, &results);
        return Ok(());
    }

    println!(
        "{}",
        "🔍 Type a place, one per line (Ctrl-D to quit)"
            .bright_blue()
            .bold()
    );

    let debouncer = Arc::new(Debouncer::new(config.geocode_debounce));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending = None;

    while let Some(line) = lines.next_line().await? {
        let debouncer = Arc::clone(&debouncer);
        let service = Arc::clone(&service);

        pending = Some(tokio::spawn(async move {
            let query = line.clone();
            let results = debouncer
                .run(move || async move { service.search(&query).await })
                .await;

            if let Some(results) = results {
                print_places(&line, &results);
            }
        }));
    }

    if let Some(last) = pending {
        last.await.context("Lookup task failed")?;
    }

    Ok(())
}
