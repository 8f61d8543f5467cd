//! Shika CLI - extract collision incidents from railway bulletins.

use clap::Parser;
use shika_cli::commands;
use shika_cli::{Cli, Command, Config, Formatter};
use shika_extractor::Extractor;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; RUST_LOG wins over -v.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> shika_cli::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);
    let extractor = Extractor::new(config.extractor)?;

    match cli.command {
        Command::Extract(args) => commands::execute_extract(args, &extractor, &formatter),
        Command::Summary(args) => commands::execute_summary(args, &extractor, &formatter),
        Command::Check(args) => commands::execute_check(args, &extractor, &formatter),
    }
}
