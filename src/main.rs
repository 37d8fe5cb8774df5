//! CLI entry point for dirtree

use std::ffi::OsString;
use std::io::{self, BufWriter, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use dirtree::{TreeError, dir_tree};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const FILES_FLAG: &str = "-f";

/// Every argument is positional: `--help`, `--` and the like are paths or an
/// ignored second argument, and only the count can be wrong.
#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Render a directory subtree as a tree diagram")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Directory to display
    path: PathBuf,

    /// Pass -f to include files with their sizes
    #[arg(value_name = "-f")]
    mode: Option<String>,
}

impl Args {
    /// Parse the raw arguments behind an escape so clap never reads them as flags.
    fn parse_raw<I>(raw: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = OsString>,
    {
        let argv = [OsString::from("dirtree"), OsString::from("--")]
            .into_iter()
            .chain(raw);
        Self::try_parse_from(argv)
    }
}

/// Logs go to stderr so the tree on stdout is never interleaved with them.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Name the binary was invoked as, for messages.
fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dirtree".to_string())
}

fn fail(err: TreeError) -> ! {
    match err {
        TreeError::Usage { .. } => eprintln!("{}", err),
        _ => eprintln!("{}: {}", program_name(), err),
    }
    process::exit(1);
}

fn main() {
    init_logging();

    let args = Args::parse_raw(std::env::args_os().skip(1)).unwrap_or_else(|e| {
        debug!(error = %e, "argument parsing failed");
        fail(TreeError::Usage {
            program: program_name(),
        })
    });

    let include_files = match args.mode.as_deref() {
        Some(FILES_FLAG) => true,
        Some(other) => {
            warn!("ignoring unrecognized argument '{}'", other);
            false
        }
        None => false,
    };

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    if let Err(e) = dir_tree(out, &args.path, include_files) {
        fail(e);
    }
}
