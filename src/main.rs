use anyhow::{Context, Result};
use autocomplete::index::stats::show_stats;
use autocomplete::index::DirectoryCorpus;
use autocomplete::logging::init_logger;
use autocomplete::output::{print_json, print_suggestions};
use autocomplete::query::CompletionCoordinator;
use autocomplete::repl::{SessionTokens, run_session};
use autocomplete::utils::{AppConfig, get_config_path};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use termcolor::{ColorChoice, StandardStream};

#[derive(Parser)]
#[command(name = "autocomplete")]
#[command(about = "Typo-tolerant sentence completion over a directory of text files")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to the app data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Maximum number of suggestions per prompt
    #[arg(short = 'n', long, global = true)]
    max_matches: Option<usize>,

    /// Log filter, e.g. "debug" or "autocomplete=trace" (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index and start an interactive session
    Repl {
        /// Dataset directory (defaults to the configured one)
        path: Option<PathBuf>,
    },
    /// Complete a single prompt
    Query {
        /// Prompt words
        #[arg(required = true, trailing_var_arg = true)]
        prompt: Vec<String>,

        /// Dataset directory (defaults to the configured one)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Print suggestions as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build the index and show statistics
    Stats {
        /// Dataset directory (defaults to the configured one)
        path: Option<PathBuf>,
    },
    /// Show the config file location and effective settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level.as_deref(), cli.no_color)?;

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(max_matches) = cli.max_matches {
        config.max_matches = max_matches;
    }

    let color = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    match cli.command {
        None => run_repl(&config, None, color)?,
        Some(Commands::Repl { path }) => run_repl(&config, path, color)?,
        Some(Commands::Query { prompt, path, json }) => {
            let coordinator = open_coordinator(&config, path, true)?;
            let suggestions = coordinator.get_suggestions(&prompt.join(" "));
            if json {
                print_json(&mut io::stdout().lock(), &suggestions)?;
            } else {
                print_suggestions(&mut StandardStream::stdout(color), &suggestions)?;
            }
        }
        Some(Commands::Stats { path }) => {
            let coordinator = open_coordinator(&config, path, false)?;
            show_stats(
                &mut io::stdout().lock(),
                coordinator.source().root(),
                coordinator.trie(),
                coordinator.report(),
            )?;
        }
        Some(Commands::Config) => {
            let location = match cli.config {
                Some(path) => path,
                None => get_config_path()?,
            };
            println!("Config file: {}", location.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn open_coordinator(
    config: &AppConfig,
    path: Option<PathBuf>,
    silent: bool,
) -> Result<CompletionCoordinator<DirectoryCorpus>> {
    let root = path.unwrap_or_else(|| config.dataset_dir.clone());
    let corpus = DirectoryCorpus::open(&root, config.directory_options())
        .with_context(|| format!("Cannot index {}", root.display()))?;
    let coordinator =
        CompletionCoordinator::build_with_progress(corpus, config.index_config(), silent)?;

    let skipped = coordinator.report().skipped;
    if skipped > 0 && !silent {
        eprintln!("({} files could not be read)", skipped);
    }

    Ok(coordinator)
}

fn run_repl(config: &AppConfig, path: Option<PathBuf>, color: ColorChoice) -> Result<()> {
    println!("System is booting. Please wait...\n");
    let coordinator = open_coordinator(config, path, false)?;

    let tokens = SessionTokens {
        reset: config.reset_token.clone(),
        exit: config.exit_token.clone(),
    };
    println!(
        "System is ready! Start entering your prompt. Press Enter for suggestions, '{}' to reset or '{}' to quit.",
        tokens.reset, tokens.exit
    );

    let mut stdout = StandardStream::stdout(color);
    run_session(&coordinator, io::stdin().lock(), &mut stdout, tokens)
}
