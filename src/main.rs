use clap::{Parser, Subcommand};
use pacecalc::consts::ALERT_TITLE;
use pacecalc::screen::Mode;
use pacecalc::PaceCalcError;
use std::io;
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Running pace calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pace (min/km) from distance and elapsed time.
    Pace(cmd::pace::PaceArgs),
    /// Finish time from distance and pace (not available yet).
    Time(cmd::placeholder::PlaceholderArgs),
    /// Kilometer-by-kilometer race plan (not available yet).
    Table(cmd::placeholder::PlaceholderArgs),
    /// List the feedback tiers.
    Tiers(cmd::tiers::TiersArgs),
    /// Interactive screen driven from stdin.
    Session(cmd::session::SessionArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let outcome = match cli.command {
        Commands::Pace(args) => cmd::pace::run(args),
        Commands::Time(args) => cmd::placeholder::run(Mode::Time, args),
        Commands::Table(args) => cmd::placeholder::run(Mode::Table, args),
        Commands::Tiers(args) => cmd::tiers::run(args),
        Commands::Session(args) => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            cmd::session::run(args, stdin.lock(), stdout.lock())
        }
    };

    match outcome {
        Ok(()) => {}
        Err(PaceCalcError::Pace(e)) => {
            eprintln!("{}: {}", ALERT_TITLE, e);
            process::exit(1);
        }
        Err(e) => {
            error!("{}", e);
            process::exit(2);
        }
    }
}

