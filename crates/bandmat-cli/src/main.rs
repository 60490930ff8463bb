//! Banded-matrix packing CLI.
//!
//! Provides the `bandmat` binary with subcommands for working on edge-list
//! files. Each run ingests the file into an in-memory session through the
//! same [`PackingService`] pipeline a long-lived host would use, applies the
//! requested operation, and prints the result as JSON to stdout.
//!
//! Exit codes: 0 = success, 1 = engine error, 2 = usage or parse error,
//! 3 = I/O error.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};

use bandmat_core::{BandPolicy, CoreError};
use bandmat_store::{InMemoryStore, PackingService, SessionId, StoreError};

mod input;

use input::EdgeListFile;

/// Banded symmetric-matrix packing tools.
#[derive(Parser)]
#[command(name = "bandmat", about = "Banded symmetric-matrix packing tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Arguments shared by every subcommand.
#[derive(Args)]
struct InputArgs {
    /// Path to the edge-list file.
    #[arg(short, long)]
    input: PathBuf,

    /// Profile with a single global bandwidth instead of tight per-row
    /// bandwidths.
    #[arg(long)]
    uniform: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Ingest an edge-list file and print the packed form.
    Pack {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Ingest, apply one cell update in packed form, and print the result.
    Update {
        #[command(flatten)]
        input: InputArgs,

        /// Row index of the cell to update.
        #[arg(short, long)]
        row: usize,

        /// Column index of the cell to update.
        #[arg(short, long)]
        col: usize,

        /// New value for the cell.
        #[arg(short, long)]
        value: f64,
    },

    /// Ingest, pack, unpack, and print the dense matrix.
    Show {
        #[command(flatten)]
        input: InputArgs,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let exit_code = match cli.command {
        Commands::Pack { input } => run_pack(&input),
        Commands::Update {
            input,
            row,
            col,
            value,
        } => run_update(&input, row, col, value),
        Commands::Show { input } => run_show(&input),
    };
    process::exit(exit_code);
}

/// Reads and parses the edge-list file, printing any failure.
///
/// Returns the parsed file or the exit code to bail out with.
fn load_edge_list(path: &Path) -> Result<EdgeListFile, i32> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: failed to read '{}': {}", path.display(), e);
            return Err(3);
        }
    };
    input::parse_edge_list(&text).map_err(|msg| {
        eprintln!("Error: {}", msg);
        2
    })
}

/// Ingests the parsed file into a fresh in-memory session.
fn ingest(
    service: &mut PackingService<InMemoryStore>,
    parsed: &EdgeListFile,
) -> Result<SessionId, i32> {
    service
        .ingest(&parsed.labels, &parsed.edges)
        .map_err(|e| report(&e))
}

/// Prints a store error and maps it to an exit code.
fn report(err: &StoreError) -> i32 {
    eprintln!("Error: {}", err);
    match err {
        StoreError::Core(CoreError::ParseError { .. }) => 2,
        _ => 1,
    }
}

fn service_for(uniform: bool) -> PackingService<InMemoryStore> {
    let policy = if uniform {
        BandPolicy::Uniform
    } else {
        BandPolicy::Variable
    };
    PackingService::with_policy(InMemoryStore::new(), policy)
}

/// Execute the pack subcommand.
fn run_pack(args: &InputArgs) -> i32 {
    let parsed = match load_edge_list(&args.input) {
        Ok(parsed) => parsed,
        Err(code) => return code,
    };
    let mut service = service_for(args.uniform);
    let id = match ingest(&mut service, &parsed) {
        Ok(id) => id,
        Err(code) => return code,
    };

    match service.export(id) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => report(&e),
    }
}

/// Execute the update subcommand.
fn run_update(args: &InputArgs, row: usize, col: usize, value: f64) -> i32 {
    let parsed = match load_edge_list(&args.input) {
        Ok(parsed) => parsed,
        Err(code) => return code,
    };
    let mut service = service_for(args.uniform);
    let id = match ingest(&mut service, &parsed) {
        Ok(id) => id,
        Err(code) => return code,
    };

    if let Err(e) = service.update(id, row, col, value) {
        return report(&e);
    }
    match service.export(id) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => report(&e),
    }
}

/// Execute the show subcommand.
fn run_show(args: &InputArgs) -> i32 {
    let parsed = match load_edge_list(&args.input) {
        Ok(parsed) => parsed,
        Err(code) => return code,
    };
    let mut service = service_for(args.uniform);
    let id = match ingest(&mut service, &parsed) {
        Ok(id) => id,
        Err(code) => return code,
    };

    let dense = match service.render(id) {
        Ok(dense) => dense,
        Err(e) => return report(&e),
    };
    match serde_json::to_string_pretty(&dense) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: failed to serialize matrix: {}", e);
            1
        }
    }
}
