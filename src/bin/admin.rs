//! CLI administration tool for snaplink.
//!
//! Operates directly on the JSON mapping file, without going through the
//! HTTP API. Writes use the same atomic replacement as the server, but the
//! server's in-process write lock does not cover this tool; avoid mutating
//! from both at the same moment.
//!
//! # Usage
//!
//! ```bash
//! # List all mappings
//! cargo run --bin admin -- list
//!
//! # Shorten a URL, optionally with a custom code
//! cargo run --bin admin -- add https://www.google.com --code google
//!
//! # Look up a code
//! cargo run --bin admin -- resolve google
//!
//! # Delete a code
//! cargo run --bin admin -- remove google
//!
//! # Verify the file parses
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! - `DB_FILE` (optional): mapping file path, overridden by `--file` (default: `urls.json`)

use snaplink::application::services::LinkService;
use snaplink::domain::errors::AssignError;
use snaplink::domain::repositories::MappingRepository;
use snaplink::infrastructure::persistence::JsonFileMappingRepository;
use snaplink::utils::code_generator::validate_custom_code;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing snaplink mappings.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Mapping file to operate on
    #[arg(short, long, env = "DB_FILE", default_value = "urls.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all mappings
    List,

    /// Shorten a URL
    Add {
        /// Target URL
        url: String,

        /// Custom short code (generated if omitted)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Show the URL a code points to
    Resolve { code: String },

    /// Delete a mapping
    Remove {
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check that the mapping file is readable
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let repository = Arc::new(JsonFileMappingRepository::new(&cli.file));
    let service = LinkService::new(repository.clone());

    match cli.command {
        Commands::List => list(&service).await?,
        Commands::Add { url, code } => add(&service, &url, code.as_deref()).await?,
        Commands::Resolve { code } => resolve(&service, &code).await?,
        Commands::Remove { code, yes } => remove(&service, &code, yes).await?,
        Commands::Check => check(repository.as_ref()).await?,
    }

    Ok(())
}

/// Prints every mapping in creation order.
///
/// # Output Format
///
/// ```text
/// 📋 Mappings
///
///   Code       Target
///   ──────────────────────────────────────────────
///   c327bc     https://www.google.com
/// ```
async fn list(service: &LinkService<JsonFileMappingRepository>) -> Result<()> {
    println!("{}", "📋 Mappings".bright_blue().bold());
    println!();

    let mappings = service
        .list()
        .await
        .context("Failed to load mappings")?;

    if mappings.is_empty() {
        println!("{}", "  No mappings found".yellow());
        println!();
        println!(
            "  Create one with: {} admin add <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<10} {}",
        "Code".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for mapping in mappings.iter() {
        println!("  {:<10} {}", mapping.code.cyan(), mapping.target);
    }

    println!();
    println!(
        "  Total: {}",
        mappings.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Shortens `url`, reporting when an existing code was reused.
async fn add(
    service: &LinkService<JsonFileMappingRepository>,
    url: &str,
    code: Option<&str>,
) -> Result<()> {
    let parsed = url::Url::parse(url).with_context(|| format!("Invalid URL: {}", url))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!("URL scheme must be http or https");
    }

    let requested = code.map(str::trim).filter(|c| !c.is_empty());
    if let Some(requested) = requested {
        validate_custom_code(requested).map_err(|e| anyhow::anyhow!("{}", e))?;
    }

    let assigned = match service.assign(url, requested).await {
        Ok(code) => code,
        Err(AssignError::CodeAlreadyTaken(code)) => {
            println!("{}", format!("❌ Code '{}' is already taken", code).red());
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to shorten URL"),
    };

    if let Some(requested) = requested
        && requested != assigned
    {
        println!(
            "{}",
            format!(
                "⚠️  URL was already shortened; keeping existing code instead of '{}'",
                requested
            )
            .yellow()
        );
    }

    println!("{}", "✅ Short code ready".green().bold());
    println!("  Code:   {}", assigned.bright_yellow().bold());
    println!("  Target: {}", url.cyan());

    Ok(())
}

async fn resolve(service: &LinkService<JsonFileMappingRepository>, code: &str) -> Result<()> {
    match service
        .resolve(code)
        .await
        .context("Failed to load mappings")?
    {
        Some(target) => println!("{}", target),
        None => {
            println!("{}", format!("❌ Code '{}' not found", code).red());
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Deletes a mapping after confirmation (default: No).
async fn remove(
    service: &LinkService<JsonFileMappingRepository>,
    code: &str,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑️  Remove Mapping".bright_blue().bold());
    println!();

    let Some(target) = service
        .resolve(code)
        .await
        .context("Failed to load mappings")?
    else {
        println!("{}", format!("⚠️  Code '{}' not found", code).yellow());
        return Ok(());
    };

    println!("  Code:   {}", code.cyan());
    println!("  Target: {}", target.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Remove this mapping?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    if service
        .remove(code)
        .await
        .context("Failed to remove mapping")?
    {
        println!("{}", "✅ Mapping removed".green().bold());
    } else {
        println!("{}", "⚠️  Mapping was already gone".yellow());
    }

    Ok(())
}

/// Loads the file and reports whether it is a valid mapping set.
async fn check(repository: &JsonFileMappingRepository) -> Result<()> {
    println!(
        "{}",
        format!("🔍 Checking {}...", repository.path().display()).bright_blue()
    );

    let mappings = repository
        .load()
        .await
        .context("Mapping file check failed")?;

    println!(
        "{}",
        format!("✅ Mapping file OK ({} mappings)", mappings.len())
            .green()
            .bold()
    );

    Ok(())
}
