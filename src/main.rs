use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use crate::cli_bin::args::{Cli, Commands};
use crate::cli_bin::commands;

mod cli_bin {
    pub mod args;
    pub mod commands;
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Show(args) => commands::show_command(args, cli.format),
        Commands::Render(args) => commands::render_command(args, cli.format),
        Commands::Prepend(args) => commands::prepend_command(args, cli.format),
        Commands::Overwrite(args) => commands::overwrite_command(args, cli.format),
        Commands::New(args) => commands::new_command(args, cli.format),
        Commands::Scan(args) => commands::scan_command(args),
    }
}

/// Map repeated `-v` flags onto a log filter, RUST_LOG still winning.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .init();
}
