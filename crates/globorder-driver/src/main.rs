use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

use globorder_annot::extract_requirements;
use globorder_driver::{load_sources, render_graph, report_cycle, DriverError};
use globorder_graph::{build_graph, topological_order_with, TieBreak};

/// Exit status when the inputs contain a dependency cycle
const EXIT_CYCLE: u8 = 1;
/// Exit status when an input file cannot be read
const EXIT_READ: u8 = 2;

#[derive(Parser)]
#[command(
    name = "globorder",
    version = "0.1.0",
    about = "Orders JavaScript files by their /*global*/ declarations",
    long_about = "Reads the /*global ... */ block of each file, finds which of the other\nfiles define those identifiers, and prints a load order that puts every\nfile after the files it depends on."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log more detail to stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a load order for the given files
    Order {
        /// Input files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Break ties by name so the output is the same on every run
        #[arg(long)]
        stable: bool,
    },

    /// Print the dependency graph (debug)
    Graph {
        /// Input files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print the identifiers a file requires (debug)
    Requires {
        /// Input file
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Order { files, stable } => order_command(&files, stable),
        Commands::Graph { files } => graph_command(&files),
        Commands::Requires { file } => requires_command(file),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn order_command(files: &[PathBuf], stable: bool) -> ExitCode {
    let sources = match load_sources(files) {
        Ok(sources) => sources,
        Err(e) => return report_driver_error(&e),
    };

    let tie_break = if stable { TieBreak::Lexical } else { TieBreak::Arbitrary };
    let graph = build_graph(&sources);

    match topological_order_with(&graph, tie_break) {
        Ok(order) => {
            println!("{}", order.join(" "));
            ExitCode::SUCCESS
        }
        Err(cycle) => {
            if let Err(e) = report_cycle(&cycle, &graph, &sources, std::io::stderr(), true) {
                tracing::warn!("failed to render cycle report: {}", e);
            }
            report_driver_error(&DriverError::from(cycle))
        }
    }
}

fn graph_command(files: &[PathBuf]) -> ExitCode {
    match load_sources(files) {
        Ok(sources) => {
            print!("{}", render_graph(&build_graph(&sources)));
            ExitCode::SUCCESS
        }
        Err(e) => report_driver_error(&e),
    }
}

fn requires_command(file: PathBuf) -> ExitCode {
    match load_sources(&[file]) {
        Ok(sources) => {
            for source in &sources {
                for name in extract_requirements(source.text()) {
                    println!("{}", name);
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => report_driver_error(&e),
    }
}

fn report_driver_error(err: &DriverError) -> ExitCode {
    eprintln!("Error: {}", err);
    match err {
        DriverError::Read { .. } => ExitCode::from(EXIT_READ),
        DriverError::Cycle(_) => ExitCode::from(EXIT_CYCLE),
    }
}
