use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use buyerbook::command::HELP_MESSAGE;
use buyerbook::config::{Config, UserPrefs, DEFAULT_CONFIG_FILE};
use buyerbook::logic::LogicManager;
use buyerbook::record::Record;
use buyerbook::storage::StorageManager;

#[derive(Parser, Debug)]
#[command(author, version, about = "Track buyers, sellers and meet-ups from the terminal")]
struct Args {
    /// Configuration file (created with defaults if missing)
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Keep both data files in this directory instead of the preferences' paths
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Run a single command and exit
    #[arg(long)]
    command: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load_or_init(&args.config)
        .with_context(|| format!("load config {}", args.config.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&config.log_level))
                .context("build log filter")?,
        )
        .with_writer(io::stderr)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "starting buyerbook");

    let storage = StorageManager::new(&config.user_prefs_file_path);
    if let Some(dir) = &args.data_dir {
        storage
            .save_user_prefs(&UserPrefs::in_dir(dir))
            .context("save preferences")?;
    }
    let mut logic = LogicManager::new(storage.load_model(), storage);

    match args.command {
        Some(line) => run_once(&mut logic, &line),
        None => run_repl(&mut logic),
    }
}

fn run_once(logic: &mut LogicManager, line: &str) -> Result<()> {
    let result = logic.execute(line)?;
    println!("{}", result.feedback);
    print_lists(logic);
    Ok(())
}

fn run_repl(logic: &mut LogicManager) -> Result<()> {
    println!("{HELP_MESSAGE}");
    print_lists(logic);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match logic.execute(&line) {
            Ok(result) => {
                println!("{}", result.feedback);
                if result.exit {
                    break;
                }
                if !result.show_help {
                    print_lists(logic);
                }
            }
            Err(err) => {
                warn!(error = %err, "command failed");
                println!("{err}");
            }
        }
    }

    info!("shutting down");
    Ok(())
}

fn print_lists(logic: &LogicManager) {
    print_list(logic.filtered_buyers());
    print_list(logic.filtered_meet_ups());
}

fn print_list<R: Record>(records: Vec<&R>) {
    println!("-- {}s ({}) --", R::KIND, records.len());
    for (i, record) in records.iter().enumerate() {
        println!("{:>3}. {}", i + 1, record.describe());
    }
}
