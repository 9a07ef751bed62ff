use clap::Parser;
use colored::Colorize;
use daybook::api::{ConfigAction, DaybookApi};
use daybook::config::{DaybookConfig, CONFIG_KEYS};
use daybook::error::Result;
use daybook::store::fs::FileStore;
use daybook::workflow::WebhookTrigger;
use directories::ProjectDirs;
use std::path::PathBuf;

mod args;
mod cli;

use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: DaybookApi<FileStore, WebhookTrigger>,
    config: DaybookConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    if cli.verbose {
        let line = format!("Data dir: {}", ctx.api.data_dir().display());
        println!("{}", line.dimmed());
    }

    match cli.command {
        Some(Commands::Open) | None => handle_open(&mut ctx),
        Some(Commands::Note { words }) => handle_note(&mut ctx, &words),
        Some(Commands::Results) => handle_results(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

/// Everything lives in one per-user data directory: notes, the metadata
/// index, and config.json. `DAYBOOK_DATA_DIR` overrides it wholesale.
fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("DAYBOOK_DATA_DIR") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    let proj_dirs =
        ProjectDirs::from("com", "daybook", "daybook").expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir();
    let config = DaybookConfig::load(&dir).unwrap_or_default();

    let store = FileStore::new(dir.clone());
    let trigger = WebhookTrigger::new(config.webhook_url.clone(), config.timeout())?;
    let api = DaybookApi::new(store, trigger, dir);

    Ok(AppContext { api, config })
}

fn handle_open(ctx: &mut AppContext) -> Result<()> {
    cli::session::run(&mut ctx.api, ctx.config.geometry())
}

fn handle_note(ctx: &mut AppContext, words: &[String]) -> Result<()> {
    let result = ctx.api.save_page(&words.join(" "))?;
    cli::print::print_messages(&result.messages);
    Ok(())
}

fn handle_results(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.results()?;
    if let Some(report) = &result.report {
        cli::print::print_report(report);
        if !result.listed_notes.is_empty() {
            println!();
        }
    }
    cli::print::print_notes(&result.listed_notes);
    cli::print::print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in CONFIG_KEYS {
                if let Some(value) = config.get(key) {
                    println!("{} = {}", key, value);
                }
            }
        }
    }
    cli::print::print_messages(&result.messages);
    Ok(())
}
