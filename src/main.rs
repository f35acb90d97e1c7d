use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rps::config::Config;
use rps::game_loop::GameLoop;
use rps::opponent::RandomOpponent;
use rps::prompt::StdinPrompter;

/// Play rock, paper, scissors against the computer
#[derive(Parser, Debug)]
#[command(name = "rps")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Seed the computer's moves for a reproducible game
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Enable verbose logging (stderr)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn setup_logging(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_filter()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let mut config = Config::default();
    config.merge_cli_args(cli.seed, cli.verbose);

    setup_logging(&config);
    debug!("Starting with {:?}", config);

    let prompter = match StdinPrompter::new() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{} {}", "ERROR:".red().bold(), e);
            std::process::exit(1);
        }
    };

    let mut game = GameLoop::new(
        prompter,
        RandomOpponent::new(config.seed),
        std::io::stdout(),
    );

    // Exit explicitly: the blocking stdin reader may still be parked on a read
    match game.run().await {
        Ok(result) => {
            debug!("Exited with {:?}", result.exit_reason);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("{} {}", "ERROR:".red().bold(), e);
            std::process::exit(1);
        }
    }
}
