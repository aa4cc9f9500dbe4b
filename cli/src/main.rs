//! acrodb — command-line manager for a personal acronym database.
//!
//! One SQLite file (named by the `ACRODB` environment variable, or
//! `acronyms.db` beside the executable) holds the acronym table.
//! Actions are mutually exclusive; a bare argument is treated as an
//! implicit search term. Interactive insert, update, and delete run
//! through readline-style prompts with recall history.

mod report;

use clap::{ArgGroup, CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use acrodb_editor::{
    ReadlineEditor, delete_interactive, insert_interactive, update_interactive,
};
use acrodb_store::{Session, StoreLocation};

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Search and maintain a personal SQLite database of acronym
/// definitions.
#[derive(Debug, Parser)]
#[command(name = "acrodb")]
#[command(about = "Search and maintain a personal acronym database")]
#[command(disable_version_flag = true)]
#[command(group(
    ArgGroup::new("action").args(["search", "new", "delete", "update", "version", "pattern"])
))]
struct Cli {
    /// Search for acronyms matching a pattern ('%' and '_' are wildcards).
    #[arg(short, long, value_name = "PATTERN")]
    search: Option<String>,

    /// Add a new acronym record through interactive prompts.
    #[arg(short, long)]
    new: bool,

    /// Delete the record with the given id (find ids with --search).
    #[arg(short, long, value_name = "ID")]
    delete: Option<i64>,

    /// Update the record with the given id (find ids with --search).
    #[arg(short, long, value_name = "ID")]
    update: Option<i64>,

    /// Print version details, including the embedded SQLite version.
    #[arg(short = 'v', long)]
    version: bool,

    /// Bare pattern, treated as an implicit search term.
    #[arg(value_name = "PATTERN")]
    pattern: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    if cli.version {
        print_version();
        return;
    }

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_version() {
    println!("acrodb {PACKAGE_VERSION} (SQLite {})", rusqlite::version());
}

/// Locates and opens the store, runs the requested action, and closes
/// the session before the exit decision. Error paths that return
/// before the explicit close release the handle through `Drop`.
fn run(cli: Cli) -> Result<(), String> {
    let location = StoreLocation::locate().map_err(|err| err.to_string())?;
    let mut session = Session::open(location).map_err(|err| err.to_string())?;

    let outcome = dispatch(&mut session, cli);

    if let Err(err) = session.close() {
        eprintln!("warning: failed to close the database cleanly: {err}");
    }
    outcome
}

fn dispatch(session: &mut Session, cli: Cli) -> Result<(), String> {
    if let Some(pattern) = cli.search.or(cli.pattern) {
        return run_search(session, &pattern);
    }
    if cli.new {
        let mut editor = ReadlineEditor::new().map_err(|err| err.to_string())?;
        insert_interactive(session, &mut editor).map_err(|err| err.to_string())?;
        return Ok(());
    }
    if let Some(id) = cli.delete {
        let id = validate_record_id(session, id)?;
        let mut editor = ReadlineEditor::new().map_err(|err| err.to_string())?;
        delete_interactive(session, &mut editor, id).map_err(|err| err.to_string())?;
        return Ok(());
    }
    if let Some(id) = cli.update {
        let id = validate_record_id(session, id)?;
        let mut editor = ReadlineEditor::new().map_err(|err| err.to_string())?;
        update_interactive(session, &mut editor, id).map_err(|err| err.to_string())?;
        return Ok(());
    }

    run_summary(session)
}

fn run_search(session: &Session, pattern: &str) -> Result<(), String> {
    println!("\nSearching for: '{pattern}' in database...\n");
    let matches = session.search(pattern).map_err(|err| err.to_string())?;
    report::print_search_results(&matches);
    Ok(())
}

/// The no-action path: version, store summary, and usage, then a
/// failure exit so scripts notice the missing action.
fn run_summary(session: &Session) -> Result<(), String> {
    print_version();
    println!();
    report::print_db_summary(session).map_err(|err| err.to_string())?;
    println!();
    let mut command = Cli::command();
    command.print_help().map_err(|err| err.to_string())?;
    println!();
    Err("no action requested".to_string())
}

/// Record ids accepted for update and delete must fall within
/// 1..=MAX(rowid) of the open store.
fn validate_record_id(session: &Session, id: i64) -> Result<i64, String> {
    let max = session.max_record_id();
    if id < 1 || id > max {
        return Err(format!(
            "invalid record ID '{id}' - out of range (highest record ID is {max})"
        ));
    }
    Ok(id)
}
