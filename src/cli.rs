use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "srcviz",
    version,
    about = "Crawl a source tree and emit a nested hierarchy snapshot",
    after_help = "Examples:\n  srcviz . -e \".rs .toml\"\n  srcviz ~/src/app -e .go -o dirdata.json --pretty\n  srcviz . --watch -o dirdata.json"
)]
pub struct Args {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Space-separated extensions to keep, e.g. ".go .rs"; "*" keeps everything
    #[arg(short = 'e', long = "exts", default_value = "*")]
    pub exts: String,

    /// Glob patterns to exclude, relative to the root (repeatable)
    #[arg(short = 'I', long = "ignore", action = clap::ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Follow symbolic links
    #[arg(short = 'f', long = "follow-symlinks")]
    pub follow_symlinks: bool,

    /// Write the snapshot to FILE instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON snapshot
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Re-scan whenever the tree changes, until interrupted
    #[arg(short = 'w', long = "watch")]
    pub watch: bool,

    /// Debounce interval for --watch in milliseconds (minimum 50)
    #[arg(long = "debounce", default_value = "200")]
    pub debounce_ms: u64,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.debounce_ms < 50 {
            self.debounce_ms = 50;
        }
        if self.quiet {
            self.verbose = 0;
        }
        self
    }

    /// Default log directive derived from -v/-q.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
