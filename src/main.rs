//! LexisComply - role-gated compliance document workspace.
//!
//! The binary drives the orchestration core from the command line: a
//! scripted end-to-end walkthrough, catalog inspection, and config
//! inspection.

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lexiscomply::{App, Config, FileHandle, PageId, ReviewStage};

/// Role-gated compliance document workspace
#[derive(Parser)]
#[command(name = "lexiscomply")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scripted end-to-end walkthrough (default)
    Demo {
        /// Email to log in with
        #[arg(long, default_value = "priya.sharma@lexiscomply.ai")]
        email: String,

        /// Password to log in with
        #[arg(long, default_value = "admin123")]
        password: String,

        /// Skip the simulated AI latency
        #[arg(long)]
        fast: bool,
    },

    /// Inspect the built-in reference catalogs
    Catalog {
        #[command(subcommand)]
        what: CatalogCommands,
    },

    /// Show the resolved configuration
    Config {
        /// Print the config directory path instead
        #[arg(long)]
        path: bool,
    },
}

#[derive(Subcommand)]
enum CatalogCommands {
    /// List document templates
    Templates,

    /// List compliance rules
    Rules {
        /// Restrict to one industry key (finance, healthcare, ...)
        #[arg(short, long)]
        industry: Option<String>,
    },

    /// List industries
    Industries,

    /// Show the dashboard fixture
    Dashboard,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("warn") };
    tracing_subscriber::registry().with(fmt::layer().with_target(false)).with(filter).init();

    match cli.command {
        Some(Commands::Demo { email, password, fast }) => run_demo(&email, &password, fast).await,
        Some(Commands::Catalog { what }) => run_catalog(&what),
        Some(Commands::Config { path }) => run_config(path),
        None => run_demo("priya.sharma@lexiscomply.ai", "admin123", false).await,
    }
}

fn run_catalog(what: &CatalogCommands) -> Result<()> {
    let catalog = lexiscomply::ReferenceCatalog::builtin();

    match what {
        CatalogCommands::Templates => {
            for template in catalog.templates() {
                println!(
                    "{:<24} {:<36} {:<14} {:<20} v{:<5} {}",
                    template.id,
                    template.name,
                    template.industry,
                    template.category,
                    template.version,
                    template.last_updated
                );
            }
        }
        CatalogCommands::Rules { industry } => {
            for entry in catalog.industries() {
                if industry.as_deref().is_some_and(|wanted| wanted != entry.id) {
                    continue;
                }
                println!("{} ({})", entry.name, entry.id);
                for rule in catalog.rules_for(&entry.id) {
                    println!("  [{:<8}] {:<22} {}", rule.id, rule.category, rule.text);
                }
            }
        }
        CatalogCommands::Industries => {
            for entry in catalog.industries() {
                println!("{:<16} {}", entry.id, entry.name);
            }
        }
        CatalogCommands::Dashboard => {
            println!("{}", serde_json::to_string_pretty(catalog.dashboard())?);
        }
    }
    Ok(())
}

fn run_config(path_only: bool) -> Result<()> {
    if path_only {
        match Config::config_dir() {
            Some(dir) => println!("{}", dir.join("config.toml").display()),
            None => println!("(no config directory available)"),
        }
        return Ok(());
    }

    let config = Config::load()?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

async fn run_demo(email: &str, password: &str, fast: bool) -> Result<()> {
    let mut config = Config::load()?;
    if fast {
        config.simulation.analysis_delay_ms = 0;
        config.simulation.drafting_delay_ms = 0;
    }

    let mut app = App::from_parts(
        config,
        std::sync::Arc::new(lexiscomply::StaticDirectory::builtin()),
        std::sync::Arc::new(lexiscomply::ScriptedCounsel::new()),
    );

    println!("=> login as {email}");
    let identity = app.login(email, password)?;
    println!("   signed in: {} ({})", identity.name, identity.role);
    println!("   menu: {:?}", app.visible_pages().iter().map(PageId::slug).collect::<Vec<_>>());

    // Document review
    println!("\n=> review: AML Policy Update.pdf");
    app.navigate(PageId::Review);
    app.select_file(FileHandle::new("AML Policy Update.pdf", 1_204_224));
    app.analyze();
    wait_until(&app, |app| app.review().stage() == ReviewStage::Reviewed).await;

    if let Some(findings) = app.review().findings() {
        println!("   compliance score: {}", findings.score);
        for issue in &findings.issues {
            println!("   [{:<6}] {}: {}", issue.severity, issue.kind, issue.suggestion);
        }
    }
    app.reset_review();

    // Document drafting
    println!("\n=> draft: GDPR Data Processing Agreement");
    app.navigate(PageId::Draft);
    app.generate_draft("gdpr-dpa", "tech", "Processor is a cloud hosting provider.");
    wait_until(&app, |app| app.drafting().text().is_some()).await;

    if let Some(text) = app.drafting().text() {
        println!("{text}");
        println!("   placeholders to fill: {:?}", app.drafting().placeholders());
    }

    // Integrations
    let ack = app.export_pdf().await?;
    println!("\n=> export: {}", ack.message);
    let ack = app.connect_webhook("https://hooks.example.com/compliance").await?;
    println!("=> webhook connected: {} (ack {})", ack.url, ack.id);

    println!("\n=> final snapshot");
    println!("{}", serde_json::to_string_pretty(&app.snapshot())?);

    app.logout();
    Ok(())
}

/// Poll the app until `done` holds. The simulated work settles on its own;
/// this just yields until it has.
async fn wait_until<F>(app: &App, done: F)
where
    F: Fn(&App) -> bool,
{
    while !done(app) {
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
}
