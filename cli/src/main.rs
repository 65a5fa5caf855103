use anyhow::{Context, anyhow};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use fogsweeper_core::{FlagAccounting, Seed};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;

mod render;
mod session;
mod settings;

use session::Session;
use settings::Settings;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed file: `rows cols mines` followed by a `row col` pair for every mine
    seed: PathBuf,

    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity,

    /// TOML file with default settings
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// How flagged mines are counted for the win check (`cumulative` or `current`)
    #[arg(long)]
    flag_accounting: Option<FlagAccounting>,

    /// Skip the ASCII art banners
    #[arg(long)]
    no_banners: bool,

    /// Print a JSON summary line once the game ends
    #[arg(long)]
    summary: bool,
}

fn init_logging(verbose: &Verbosity) -> anyhow::Result<()> {
    let level = match verbose.log_level_filter() {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| anyhow!(error))
}

fn resolve_settings(args: &Args) -> anyhow::Result<Settings> {
    let mut settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(flag_accounting) = args.flag_accounting {
        settings.flag_accounting = flag_accounting;
    }
    if args.no_banners {
        settings.banners = false;
    }
    Ok(settings)
}

fn run(args: Args) -> anyhow::Result<()> {
    let settings = resolve_settings(&args)?;

    let text = fs::read_to_string(&args.seed)
        .with_context(|| format!("Could not read seed file {}", args.seed.display()))?;
    let model = Seed::parse(&text)
        .context("Seed File Malformed Error")?
        .into_model(settings.model_options())
        .context("Seed File Malformed Error")?;
    log::debug!("seed: {}", args.seed.display());

    let mut session = Session::new(model, &settings);
    let stdin = io::stdin();
    let end = session.run(stdin.lock(), &mut io::stdout(), &mut io::stderr())?;

    if args.summary {
        println!("{}", serde_json::to_string(&session.summary(end))?);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(error) = init_logging(&args.verbose) {
        eprintln!("Error initializing logger: {error:#}");
        return ExitCode::FAILURE;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::debug!("{error:?}");
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}
