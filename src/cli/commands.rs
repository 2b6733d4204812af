//! Command dispatch: thin handlers over the application services

use std::io;
use std::sync::Arc;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, DashboardService, ExportService};
use crate::cli::args::{Cli, Commands, ConfigCommands, FilterArgs, SourceArgs};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::DerivedView;
use crate::infrastructure::{JsonFileSource, RecordSource, SyntheticSource};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    debug!("settings: {:?}", settings);

    match &cli.command {
        Some(Commands::List {
            source,
            filter,
            limit,
        }) => _list(&settings, source, filter, *limit),
        Some(Commands::Summary {
            source,
            filter,
            top,
        }) => _summary(&settings, source, filter, *top),
        Some(Commands::Goal {
            goal,
            source,
            filter,
        }) => _goal(&settings, goal, source, filter),
        Some(Commands::Export {
            output,
            expanded,
            source,
            filter,
        }) => _export(&settings, output, *expanded, source, filter),
        Some(Commands::Config { command }) => _config(&settings, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "treedash", &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// Build the dashboard from the selected record source.
fn build_dashboard(settings: &Settings, source: &SourceArgs) -> CliResult<DashboardService> {
    let record_source: Arc<dyn RecordSource> = match &source.input {
        Some(path) => Arc::new(JsonFileSource::new(path.clone())),
        None => Arc::new(SyntheticSource::new(
            source.count.unwrap_or(settings.sample_size),
            source.seed.or(settings.seed),
        )),
    };
    Ok(DashboardService::from_source(
        record_source,
        settings.fallback_absorption_tonnes,
    )?)
}

fn evaluate(
    settings: &Settings,
    source: &SourceArgs,
    filter: &FilterArgs,
) -> CliResult<(DashboardService, DerivedView)> {
    let dashboard = build_dashboard(settings, source)?;
    let view = dashboard.evaluate(&filter.to_criteria());
    Ok((dashboard, view))
}

#[instrument(skip(settings))]
fn _list(
    settings: &Settings,
    source: &SourceArgs,
    filter: &FilterArgs,
    limit: Option<usize>,
) -> CliResult<()> {
    let (_, view) = evaluate(settings, source, filter)?;
    let total = view.filtered.len();
    let shown = limit.unwrap_or(total).min(total);

    for tree in &view.filtered[..shown] {
        output::info(&format!("🌳 {}", tree.name));
        output::detail(&format!(
            "{} – {} – CO₂: {}kg",
            tree.species, tree.health, tree.co2_absorption_kg
        ));
        output::detail(&format!("📍 {}", tree.address));
    }
    output::info(&format!("{shown} of {total} matching trees shown"));
    Ok(())
}

#[instrument(skip(settings))]
fn _summary(
    settings: &Settings,
    source: &SourceArgs,
    filter: &FilterArgs,
    top: usize,
) -> CliResult<()> {
    let (dashboard, view) = evaluate(settings, source, filter)?;

    output::header("Species Distribution");
    for entry in &view.species_distribution {
        output::detail(&format!("{}: {}", entry.species, entry.count));
    }

    output::header("CO₂ Absorption by District");
    for entry in &view.district_co2_totals {
        output::detail(&format!("{}: {} kg", entry.district, entry.total_kg));
    }

    output::header(&format!("Top {top} Districts"));
    for entry in dashboard.top_districts(&view, top) {
        output::detail(&format!("{}: {} kg", entry.district, entry.total_kg));
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _goal(
    settings: &Settings,
    goal: &str,
    source: &SourceArgs,
    filter: &FilterArgs,
) -> CliResult<()> {
    let (dashboard, view) = evaluate(settings, source, filter)?;
    match dashboard.estimate_goal(goal, &view) {
        Some(estimate) => output::info(&estimate.sentence()),
        // Invalid input is a normal outcome, not an error
        None => output::detail("no estimate: enter a goal greater than 0"),
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _export(
    settings: &Settings,
    path: &std::path::Path,
    expanded: bool,
    source: &SourceArgs,
    filter: &FilterArgs,
) -> CliResult<()> {
    let (_, view) = evaluate(settings, source, filter)?;

    let export = match source.seed.or(settings.seed) {
        Some(seed) => ExportService::with_seed(seed),
        None => ExportService::new(),
    };
    let written = if expanded {
        export.write_expanded_csv(path, &view.filtered)?
    } else {
        export.write_csv(path, &view.filtered)?
    };
    output::success(&format!("Exported {written} trees to {}", path.display()));
    Ok(())
}

fn _config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::info(&path.display()),
                None => output::detail("no config directory available"),
            }
            Ok(())
        }
        ConfigCommands::Init => {
            let path = global_config_path().ok_or_else(|| ApplicationError::Config {
                message: "no config directory available".to_string(),
            })?;
            if path.exists() {
                output::detail(&format!("config already exists: {}", path.display()));
                return Ok(());
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| ApplicationError::Config {
                    message: format!("create {}: {}", parent.display(), e),
                })?;
            }
            std::fs::write(&path, Settings::template()).map_err(|e| {
                ApplicationError::Config {
                    message: format!("write {}: {}", path.display(), e),
                }
            })?;
            output::success(&format!("created {}", path.display()));
            Ok(())
        }
    }
}
