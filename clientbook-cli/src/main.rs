//! `clientbook`: browse client records in the terminal with a persisted,
//! multi-criterion sort.

mod config;
mod table;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use clientbook_core::{BrowserAction, ClientBrowser, RecordStore};
use clientbook_model::{ClientFilter, CriterionId, SortDirection, SortField};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::CliConfig;

const DEFAULT_LOG_FILTER: &str = "clientbook=info";

#[derive(Debug, Parser)]
#[command(
    name = "clientbook",
    version,
    about = "Browse client records with a persisted multi-criterion sort"
)]
struct Cli {
    /// JSON file of client records (defaults to the demo clients)
    #[arg(long, global = true, value_name = "FILE")]
    records: Option<PathBuf>,
    /// Directory holding persisted sort preferences
    #[arg(long, global = true, value_name = "DIR")]
    state_dir: Option<PathBuf>,
    /// Keep sort edits in memory only
    #[arg(long, global = true)]
    no_storage: bool,
    /// Log filter, e.g. `debug` or `clientbook_core=trace` (overrides RUST_LOG)
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the client table, filtered and sorted
    List {
        /// all, individual or company
        #[arg(long, short, default_value = "all")]
        filter: ClientFilter,
    },
    /// Inspect or edit the sort criteria (shows them when no action is given)
    Sort {
        #[command(subcommand)]
        action: Option<SortAction>,
    },
    /// List the sortable fields
    Fields,
}

/// Criteria are addressed by id or by their 1-based position.
#[derive(Debug, Subcommand)]
enum SortAction {
    /// Show the active criteria, highest priority first
    Show,
    /// Append a criterion on the first unused field
    Add,
    /// Remove a criterion
    Remove { criterion: String },
    /// Move the criterion at one position to another
    Reorder { from: usize, to: usize },
    /// Move a criterion to where another one sits
    Move { criterion: String, over: String },
    /// Change the field of a criterion
    Field { criterion: String, field: SortField },
    /// Change the direction of a criterion (asc or desc)
    Direction {
        criterion: String,
        direction: SortDirection,
    },
    /// Reset to the default criterion
    Clear,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    let mut config = CliConfig::load();
    config.apply_flags(cli.state_dir, cli.records, cli.no_storage);
    debug!(?config, "resolved configuration");

    let records = config.record_store()?;
    let mut browser =
        ClientBrowser::open(records, Arc::new(config.criteria_store()));

    let output = match cli.command {
        Command::List { filter } => {
            browser.apply(BrowserAction::SetFilter(filter))?;
            table::render_view(&browser.view())
        }
        Command::Sort { action } => {
            let action = action.unwrap_or(SortAction::Show);
            if let Some(action) = resolve_sort_action(&browser, action)? {
                browser.apply(action).context("sort criteria unchanged")?;
            }
            table::render_criteria(browser.criteria().criteria())
        }
        Command::Fields => {
            table::render_fields(browser.criteria().available_fields())
        }
    };

    print!("{output}");
    Ok(())
}

fn init_tracing(log_level: Option<&str>) -> Result<()> {
    let filter = match log_level {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid log filter `{directives}`"))?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    Ok(())
}

/// Translate a command-line edit into a browser action. `None` means
/// nothing to change.
fn resolve_sort_action(
    browser: &ClientBrowser<RecordStore>,
    action: SortAction,
) -> Result<Option<BrowserAction>> {
    let action = match action {
        SortAction::Show => return Ok(None),
        SortAction::Add => {
            if !browser.criteria().can_add() {
                bail!("every field is already used by a sort criterion");
            }
            BrowserAction::AddCriterion
        }
        SortAction::Remove { criterion } => {
            BrowserAction::RemoveCriterion(resolve_criterion(browser, &criterion)?)
        }
        SortAction::Reorder { from, to } => BrowserAction::Reorder {
            from: to_index(from)?,
            to: to_index(to)?,
        },
        SortAction::Move { criterion, over } => BrowserAction::MoveCriterion {
            active: resolve_criterion(browser, &criterion)?,
            over: resolve_criterion(browser, &over)?,
        },
        SortAction::Field { criterion, field } => BrowserAction::SetField {
            id: resolve_criterion(browser, &criterion)?,
            field,
        },
        SortAction::Direction {
            criterion,
            direction,
        } => BrowserAction::SetDirection {
            id: resolve_criterion(browser, &criterion)?,
            direction,
        },
        SortAction::Clear => BrowserAction::ClearCriteria,
    };
    Ok(Some(action))
}

fn resolve_criterion(
    browser: &ClientBrowser<RecordStore>,
    reference: &str,
) -> Result<CriterionId> {
    let criteria = browser.criteria().criteria();
    let id = CriterionId::from(reference);
    if criteria.get_by_id(&id).is_some() {
        return Ok(id);
    }

    reference
        .parse::<usize>()
        .ok()
        .and_then(|position| position.checked_sub(1))
        .and_then(|index| criteria.get(index))
        .map(|criterion| criterion.id.clone())
        .with_context(|| format!("no sort criterion matches `{reference}`"))
}

fn to_index(position: usize) -> Result<usize> {
    position
        .checked_sub(1)
        .context("positions start at 1")
}
