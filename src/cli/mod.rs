//! CLI command definitions and handlers

mod analyze;
mod categories;
mod cluster;
mod explore;
mod init;

use crate::config::{load_config_file, load_project_config, ProjectConfig};
use crate::corpus::Corpus;
use crate::dictionary::RadicalTable;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Parse and validate workers count (1-64)
fn parse_workers(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("workers must be at least 1".to_string())
    } else if n > 64 {
        Err("workers cannot exceed 64".to_string())
    } else {
        Ok(n)
    }
}

/// Parse a single character argument
fn parse_char(s: &str) -> Result<char, String> {
    let mut chars = s.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("'{}' must be exactly one character", s)),
    }
}

/// bushou - radical co-occurrence analysis for classical Chinese texts
#[derive(Parser, Debug)]
#[command(name = "bushou")]
#[command(
    version,
    about = "Radical co-occurrence and enrichment analysis for classical Chinese texts",
    long_about = "bushou breaks every character of a text into its radicals, counts which \
radicals appear near each other, and scores each pair against the count expected if \
radicals were placed independently.\n\n\
The corpus is a CSV with one row per line of text:\n  \
chapter, char_1, pronunciation_1, char_2, pronunciation_2, ...",
    after_help = "\
Examples:
  bushou analyze daodejing.csv                    Full report in the terminal
  bushou analyze daodejing.csv --export-dir out   Also write every CSV artifact
  bushou neighbors daodejing.csv 氵               Radicals found near 氵
  bushou character daodejing.csv 無               Radical context of 無
  bushou sequence daodejing.csv motion boundary   motion followed by boundary
  bushou dictionary                               Built-in dictionary coverage"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(
        long,
        global = true,
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    pub log_level: String,

    /// Number of parallel workers for the pair scan (1-64, default: all cores)
    #[arg(long, global = true, value_parser = parse_workers)]
    pub workers: Option<usize>,

    /// Config file (default: bushou.toml or .bushourc.json in the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Radical dictionary layered over the built-in tables
    #[arg(long, global = true)]
    pub dictionary: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full analysis: pair counts, significance, avoidance, category clustering
    #[command(after_help = "\
Examples:
  bushou analyze text.csv                            Text report
  bushou analyze text.csv --window 3 --top 30        Tighter window, longer tables
  bushou analyze text.csv --format json -o r.json    JSON for scripting
  bushou analyze text.csv --format md -o report.md   Markdown report
  bushou analyze text.csv --export-dir output        Write CSV matrices and tables")]
    Analyze {
        /// Corpus CSV file
        corpus: PathBuf,

        #[command(flatten)]
        window: WindowArg,

        /// Minimum observed count for a pair to be scored
        #[arg(long)]
        min_observed: Option<u32>,

        /// Rows shown per table
        #[arg(long)]
        top: Option<usize>,

        /// Chi-square threshold for significance
        #[arg(long)]
        threshold: Option<f64>,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Directory for CSV artifacts
        #[arg(long)]
        export_dir: Option<PathBuf>,
    },

    /// Most frequent radical pairs
    Pairs {
        /// Corpus CSV file
        corpus: PathBuf,

        #[command(flatten)]
        window: WindowArg,

        /// Number of pairs to show
        #[arg(long)]
        top: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Radicals that co-occur most with one radical
    Neighbors {
        /// Corpus CSV file
        corpus: PathBuf,

        /// Radical to inspect
        radical: String,

        #[command(flatten)]
        window: WindowArg,

        /// Number of neighbors to show
        #[arg(long, default_value = "10")]
        top: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Radicals surrounding every occurrence of one character
    Character {
        /// Corpus CSV file
        corpus: PathBuf,

        /// Character to profile
        #[arg(value_parser = parse_char)]
        character: char,

        #[command(flatten)]
        window: WindowArg,

        /// Number of radicals to show
        #[arg(long, default_value = "10")]
        top: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find radicals whose categories follow a given order
    #[command(after_help = "\
Examples:
  bushou sequence text.csv motion boundary           motion, then boundary within the window
  bushou sequence text.csv fluid fluid --window 2    two fluid radicals at most 2 apart")]
    Sequence {
        /// Corpus CSV file
        corpus: PathBuf,

        /// Category names, in order
        #[arg(required = true, num_args = 1..)]
        categories: Vec<String>,

        #[command(flatten)]
        window: WindowArg,

        /// Maximum matches to print (0 = all)
        #[arg(long, default_value = "20")]
        limit: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Radical frequencies by category, optionally against a proposed dictionary
    Categories {
        /// Corpus CSV file
        corpus: PathBuf,

        /// Dictionary file with proposed categories
        #[arg(long)]
        proposed: Option<PathBuf>,

        /// Write the per-radical table as CSV
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Uncategorized radicals to list
        #[arg(long, default_value = "30")]
        top: usize,
    },

    /// Hierarchical clustering of radicals by co-occurrence profile
    Cluster {
        /// Corpus CSV file
        corpus: PathBuf,

        #[command(flatten)]
        window: WindowArg,

        /// Write the linkage table as CSV
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Coverage statistics of the radical dictionary
    Dictionary {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write an example bushou.toml in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show version information
    Version,
}

/// Proximity window shared by the corpus commands
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct WindowArg {
    /// Co-occurrence window in characters (default: from config, else 5)
    #[arg(long, short = 'w')]
    pub window: Option<usize>,
}

impl WindowArg {
    fn resolve(&self, config: &ProjectConfig) -> usize {
        self.window.unwrap_or(config.analysis.window_size)
    }
}

/// Config and dictionary resolved from the global flags
pub(crate) struct Session {
    pub config: ProjectConfig,
    pub table: RadicalTable,
    pub workers: usize,
}

impl Session {
    fn open(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => load_config_file(path)?,
            None => load_project_config(Path::new(".")),
        };

        let dictionary = cli
            .dictionary
            .as_ref()
            .or(config.analysis.dictionary.as_ref());
        let table = match dictionary {
            Some(path) => RadicalTable::load(path)
                .with_context(|| format!("Failed to load dictionary {}", path.display()))?,
            None => RadicalTable::builtin(),
        };

        let workers = cli.workers.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get().min(64))
                .unwrap_or(1)
        });
        debug!("Using {} worker(s)", workers);

        Ok(Self {
            config,
            table,
            workers,
        })
    }

    fn load_corpus(&self, path: &Path) -> Result<Corpus> {
        Corpus::load(path).with_context(|| format!("Failed to load corpus {}", path.display()))
    }
}

/// Run the CLI command
pub fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Init { force } => return init::run(Path::new("."), *force),
        Commands::Version => {
            println!("bushou {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        _ => {}
    }

    let session = Session::open(&cli)?;

    match cli.command {
        Commands::Analyze {
            corpus,
            window,
            min_observed,
            top,
            threshold,
            format,
            output,
            export_dir,
        } => analyze::run(
            &session,
            &corpus,
            analyze::AnalyzeArgs {
                window: window.window,
                min_observed,
                top,
                threshold,
                format,
                output,
                export_dir,
            },
        ),

        Commands::Pairs {
            corpus,
            window,
            top,
            json,
        } => {
            let top = top.unwrap_or(session.config.analysis.top_n);
            explore::pairs(&session, &corpus, window.resolve(&session.config), top, json)
        }

        Commands::Neighbors {
            corpus,
            radical,
            window,
            top,
            json,
        } => explore::neighbors(
            &session,
            &corpus,
            &radical,
            window.resolve(&session.config),
            top,
            json,
        ),

        Commands::Character {
            corpus,
            character,
            window,
            top,
            json,
        } => explore::character(
            &session,
            &corpus,
            character,
            window.resolve(&session.config),
            top,
            json,
        ),

        Commands::Sequence {
            corpus,
            categories,
            window,
            limit,
            json,
        } => explore::sequence(
            &session,
            &corpus,
            &categories,
            window.resolve(&session.config),
            limit,
            json,
        ),

        Commands::Categories {
            corpus,
            proposed,
            output,
            top,
        } => categories::run(&session, &corpus, proposed.as_deref(), output.as_deref(), top),

        Commands::Cluster {
            corpus,
            window,
            output,
        } => cluster::run(
            &session,
            &corpus,
            window.resolve(&session.config),
            output.as_deref(),
        ),

        Commands::Dictionary { json } => categories::dictionary(&session, json),

        Commands::Init { .. } | Commands::Version => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_workers() {
        assert_eq!(parse_workers("4"), Ok(4));
        assert!(parse_workers("0").is_err());
        assert!(parse_workers("65").is_err());
        assert!(parse_workers("many").is_err());
    }

    #[test]
    fn test_parse_char() {
        assert_eq!(parse_char("無"), Ok('無'));
        assert_eq!(parse_char(" 為 "), Ok('為'));
        assert!(parse_char("無為").is_err());
        assert!(parse_char("").is_err());
    }

    #[test]
    fn test_cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "bushou",
            "analyze",
            "text.csv",
            "--window",
            "3",
            "--workers",
            "2",
            "--log-level",
            "debug",
        ])
        .expect("parse");
        assert_eq!(cli.workers, Some(2));
        assert_eq!(cli.log_level, "debug");
        match cli.command {
            Commands::Analyze { corpus, window, .. } => {
                assert_eq!(corpus, PathBuf::from("text.csv"));
                assert_eq!(window.window, Some(3));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_sequence_requires_categories() {
        assert!(Cli::try_parse_from(["bushou", "sequence", "text.csv"]).is_err());
        let cli = Cli::try_parse_from(["bushou", "sequence", "text.csv", "motion", "fluid"])
            .expect("parse");
        match cli.command {
            Commands::Sequence { categories, .. } => assert_eq!(categories, ["motion", "fluid"]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_window_falls_back_to_config() {
        let mut config = ProjectConfig::default();
        config.analysis.window_size = 7;
        assert_eq!(WindowArg { window: None }.resolve(&config), 7);
        assert_eq!(WindowArg { window: Some(2) }.resolve(&config), 2);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
