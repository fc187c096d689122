//! Command-line surface for the sheetwatch services.
//!
//! Usage:
//!
//! ```text
//! sheetwatch <operation> <config-path> [args]
//! ```
//!
//! The `operation` must be one of:
//!
//! - `refresh` — trigger the scraping workflow and watch for fresh data
//! - `status` — summarize the worksheet's processing state
//! - `toggle-auto-refresh` — flip the persisted auto-refresh toggle
//! - `edit <row> <column> <value>` — handle one host edit notification
//!   (invoked by the host's edit trigger; row is 1-based, column 0-based)
//! - `help` — show usage (no config path needed)
//!
//! Configuration is the JSON file documented in [`sheetwatch::config`]. The
//! dispatch credential may also come from the `GITHUB_TOKEN` environment
//! variable. Status reports and notices are rendered as log records; set
//! `RUST_LOG` to adjust verbosity.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use mockable::DefaultClock;
use sheetwatch::config::{ConfigError, SheetwatchConfig};
use sheetwatch::dispatch::{
    adapters::github::GithubWorkflowDispatcher, domain::TriggerSource, services::DispatchService,
};
use sheetwatch::refresh::{
    adapters::{file::FileStateStore, log::{LogNotifier, LogStatusSink}},
    domain::EditEvent,
    services::{
        AutoRefreshError, AutoRefreshService, RefreshService, RefreshServiceError, RefreshSettings,
    },
};
use sheetwatch::sheet::adapters::google::GoogleSheetsReader;
use sheetwatch::watch::services::WatchService;
use thiserror::Error;
use tokio::runtime::Builder;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

type CliRefresh = RefreshService<
    GithubWorkflowDispatcher,
    GoogleSheetsReader,
    DefaultClock,
    LogStatusSink,
    LogNotifier,
>;

type CliAutoRefresh = AutoRefreshService<
    GithubWorkflowDispatcher,
    GoogleSheetsReader,
    DefaultClock,
    LogStatusSink,
    LogNotifier,
    FileStateStore,
    FileStateStore,
>;

/// Errors that can occur while running a CLI operation.
#[derive(Debug, Error)]
enum CliError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Refresh(#[from] RefreshServiceError),
    #[error(transparent)]
    AutoRefresh(#[from] AutoRefreshError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] std::io::Error),
    #[error("failed to write help text: {0}")]
    Help(#[source] std::io::Error),
}

#[derive(Debug)]
enum Operation {
    Refresh,
    Status,
    ToggleAutoRefresh,
    Edit(EditEvent),
}

#[derive(Debug)]
enum Command {
    Help,
    Run {
        operation: Operation,
        config_path: PathBuf,
    },
}

const USAGE: &str = "expected: sheetwatch <refresh|status|toggle-auto-refresh|edit|help> <config-path> [args]";

fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let operation_name = args
        .get(1)
        .ok_or_else(|| CliError::InvalidArgs(USAGE.to_owned()))?;
    if operation_name == "help" {
        return Ok(Command::Help);
    }

    let config_path = args
        .get(2)
        .map(PathBuf::from)
        .ok_or_else(|| CliError::InvalidArgs(USAGE.to_owned()))?;
    let operation = match operation_name.as_str() {
        "refresh" => Operation::Refresh,
        "status" => Operation::Status,
        "toggle-auto-refresh" => Operation::ToggleAutoRefresh,
        "edit" => Operation::Edit(parse_edit(args)?),
        other => {
            return Err(CliError::InvalidArgs(format!(
                "unknown operation '{other}'; {USAGE}"
            )));
        }
    };
    Ok(Command::Run {
        operation,
        config_path,
    })
}

fn parse_edit(args: &[String]) -> Result<EditEvent, CliError> {
    let (row_arg, column_arg, value) = match (args.get(3), args.get(4), args.get(5)) {
        (Some(row), Some(column), Some(value)) => (row, column, value),
        _ => {
            return Err(CliError::InvalidArgs(
                "edit requires <row> <column> <value>".to_owned(),
            ));
        }
    };
    let row = row_arg
        .parse::<u32>()
        .map_err(|_| CliError::InvalidArgs(format!("invalid row '{row_arg}'")))?;
    let column = column_arg
        .parse::<usize>()
        .map_err(|_| CliError::InvalidArgs(format!("invalid column '{column_arg}'")))?;
    Ok(EditEvent::new(row, column, value.clone()))
}

/// Wires the service graph from configuration.
fn build_services(config: &SheetwatchConfig) -> Result<(Arc<CliRefresh>, CliAutoRefresh), CliError> {
    let client = reqwest::Client::new();
    let target = config.dispatch_target()?;
    let dispatch = match config.resolved_token() {
        Some(token) => DispatchService::new(
            Arc::new(GithubWorkflowDispatcher::new(
                client.clone(),
                config.github.api_base.clone(),
                token,
            )),
            target,
        ),
        None => DispatchService::untriggered(target),
    };

    let reader = Arc::new(GoogleSheetsReader::new(
        client,
        config.sheet.api_base.clone(),
        config.sheet.spreadsheet_id.clone(),
        config.sheet.range.clone(),
        config.sheet.api_key.clone(),
    ));
    let layout = config.column_layout()?;
    let markers = config.markers()?;
    let watch = WatchService::new(
        Arc::clone(&reader),
        Arc::new(DefaultClock),
        layout,
        config.freshness_window()?,
    );
    let refresh = Arc::new(RefreshService::new(
        dispatch,
        watch,
        reader,
        Arc::new(LogStatusSink),
        Arc::new(LogNotifier),
        RefreshSettings {
            layout,
            markers: markers.clone(),
            budget: config.poll_budget()?,
        },
    ));

    let state = Arc::new(FileStateStore::new(config.state_path.clone()));
    let auto_refresh = AutoRefreshService::new(
        Arc::clone(&refresh),
        Arc::clone(&state),
        state,
        layout,
        markers,
        config.trigger_delay(),
    );
    Ok((refresh, auto_refresh))
}

/// Cancellation token that trips on Ctrl-C.
fn interruptible_token() -> CancellationToken {
    let cancel = CancellationToken::new();
    let guard = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received, cancelling");
            guard.cancel();
        }
    });
    cancel
}

async fn run(operation: Operation, config: &SheetwatchConfig) -> Result<(), CliError> {
    let (refresh, auto_refresh) = build_services(config)?;
    match operation {
        Operation::Refresh => {
            let cancel = interruptible_token();
            let report = refresh.refresh(TriggerSource::Manual, &cancel).await?;
            tracing::info!(
                run_id = %report.run_id(),
                dispatch = %report.dispatch(),
                watch = %report.watch(),
                "refresh finished"
            );
        }
        Operation::Status => {
            let summary = refresh.check_status().await?;
            tracing::info!(
                total = summary.total,
                processed = summary.processed,
                pending = summary.pending,
                "status checked"
            );
        }
        Operation::ToggleAutoRefresh => {
            let state = auto_refresh.toggle().await?;
            tracing::info!(auto_refresh = %state, "toggle applied");
        }
        Operation::Edit(event) => {
            let cancel = interruptible_token();
            match auto_refresh.handle_edit(&event, &cancel).await? {
                Some(report) => {
                    tracing::info!(run_id = %report.run_id(), watch = %report.watch(), "edit triggered a refresh");
                }
                None => tracing::info!("edit ignored"),
            }
        }
    }
    Ok(())
}

fn print_help() -> std::io::Result<()> {
    use std::io::Write;

    let mut out = std::io::stdout();
    writeln!(out, "sheetwatch <operation> <config-path> [args]")?;
    writeln!(out)?;
    writeln!(out, "operations:")?;
    writeln!(out, "  refresh                    trigger the scraping workflow and watch for fresh data")?;
    writeln!(out, "  status                     summarize the worksheet's processing state")?;
    writeln!(out, "  toggle-auto-refresh        flip the persisted auto-refresh toggle")?;
    writeln!(out, "  edit <row> <column> <val>  handle one host edit notification")?;
    writeln!(out, "  help                       show this text")?;
    writeln!(out)?;
    writeln!(out, "set GITHUB_TOKEN to override the configured dispatch credential")?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), BoxError> {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();
    match parse_args(&args)? {
        Command::Help => print_help().map_err(CliError::Help)?,
        Command::Run {
            operation,
            config_path,
        } => {
            let config = SheetwatchConfig::from_path(Path::new(&config_path))?;
            let runtime = Builder::new_multi_thread()
                .enable_all()
                .build()
                .map_err(CliError::RuntimeInit)?;
            runtime.block_on(run(operation, &config))?;
        }
    }
    Ok(())
}
