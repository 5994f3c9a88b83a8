mod cli;
mod config;
mod logging;
mod render;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use job_search_core::RequestStatus;
use job_search_engine::{RequestOrchestrator, ReqwestCatalogClient, StaticTokenProvider};
use search_logging::{search_info, search_warn};

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let (mut settings, source) = config::load(args.config.as_deref())?;
    if let Some(base_url) = &args.base_url {
        settings.base_url = base_url.clone();
    }
    if let Some(level) = &args.log_level {
        settings.log_level = level.clone();
    }

    let level = search_logging::parse_level(&settings.log_level)
        .unwrap_or_else(search_logging::default_level);
    logging::initialize(level, settings.log_file.as_deref());
    match &source {
        Some(path) => search_info!("Loaded settings from {:?}", path),
        None => search_info!("No settings file found, using defaults"),
    }

    let token = args
        .token
        .clone()
        .or_else(|| settings.token.clone())
        .context("no bearer token: pass --token, set JOB_SEARCH_TOKEN, or add `token` to the settings file")?;

    let catalog = ReqwestCatalogClient::new(settings.catalog())
        .with_context(|| format!("invalid catalog settings for {}", settings.base_url))?;
    let mut orchestrator = RequestOrchestrator::new(
        Arc::new(catalog),
        Arc::new(StaticTokenProvider::new(token)),
    );

    run_search(&mut orchestrator, &args).await;

    let view = orchestrator.view();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&render::render_json(&view))?);
    } else {
        print!("{}", render::render_text(&view));
    }

    if orchestrator.status() == RequestStatus::Failure {
        std::process::exit(1);
    }
    Ok(())
}

/// Opens the search view, applies the requested filters the way a user would,
/// and waits for the newest fetch to land.
async fn run_search(orchestrator: &mut RequestOrchestrator, args: &Args) {
    orchestrator.start();
    for token in &args.employment_types {
        orchestrator.toggle_employment_type(token.clone(), true);
    }
    if let Some(salary) = &args.salary_range {
        orchestrator.set_salary_range(Some(salary.clone()));
    }
    if let Some(search) = &args.search {
        orchestrator.set_search_text(search.clone());
        orchestrator.submit_search();
    }
    orchestrator.settle().await;

    let mut attempts = 0;
    while orchestrator.status() == RequestStatus::Failure && attempts < args.retries {
        attempts += 1;
        search_warn!("Retrying search (attempt {} of {})", attempts, args.retries);
        orchestrator.retry();
        orchestrator.settle().await;
    }

    search_info!(
        "Search finished with status {} after {} fetches",
        render::status_label(orchestrator.status()),
        orchestrator.generation()
    );
}
