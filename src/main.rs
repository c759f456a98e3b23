use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cyrex::Cyrex;
use cyrex::config::{Cli, Command, Config};
use cyrex::i18n::{Text, tr};
use cyrex::models::AgeGroup;
use cyrex::store::{IdentityProvider, ResultStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    match cli.command() {
        Command::Run => {
            init_file_logging(&config.log_path)?;
            run(config).await
        }
        Command::History { limit } => {
            init_stderr_logging();
            history(config, limit).await
        }
        Command::Validate => {
            init_stderr_logging();
            validate(config).await
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cyrex=info"))
}

/// The terminal UI owns stdout, so the interactive session logs to a file.
fn init_file_logging(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

async fn run(config: Config) -> anyhow::Result<()> {
    let stores = config.stores();
    let user = stores
        .identity
        .sign_in(&config.user)
        .await
        .with_context(|| format!("failed to sign in as {}", config.user))?;

    Cyrex::new(stores, user, config.locale)
        .run()
        .await
        .context("assessment session failed")
}

async fn history(config: Config, limit: usize) -> anyhow::Result<()> {
    let stores = config.stores();
    let user = stores.identity.sign_in(&config.user).await?;
    let locale = config.locale.unwrap_or(user.locale);

    let results = stores
        .results
        .history(user.id)
        .await
        .context("failed to load assessment history")?;

    println!("{} ({})", tr(locale, Text::AssessmentHistory), user.username);
    if results.is_empty() {
        println!("  {}", tr(locale, Text::NoAssessmentsYet));
        return Ok(());
    }

    for result in results.iter().take(limit) {
        println!(
            "  {}  {:<6} {:>3}/{:<3} {:>5.1}%  {}",
            result.completed_at.format("%Y-%m-%d %H:%M"),
            result.age_group.key(),
            result.correct_answers,
            result.total_questions,
            result.score_percentage,
            tr(locale, result.risk_level.label()),
        );
    }
    Ok(())
}

async fn validate(config: Config) -> anyhow::Result<()> {
    let store = config.question_store();
    let report = store
        .load()
        .await
        .with_context(|| format!("failed to load {}", store.path().display()))?;

    info!(
        accepted = report.accepted.len(),
        rejected = report.rejected.len(),
        "validated question bank"
    );

    println!("{}", store.path().display());
    for group in AgeGroup::ALL {
        println!("  {:<6} {:>4} questions", group.key(), report.count_for(group));
    }

    if report.rejected.is_empty() {
        println!("  all records valid");
        return Ok(());
    }

    for err in &report.rejected {
        println!("  rejected: {err}");
    }
    bail!("{} question records rejected", report.rejected.len())
}
