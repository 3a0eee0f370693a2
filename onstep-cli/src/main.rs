mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, RemoteAction};
use log::LevelFilter;
use onstep_host::HostSettings;

fn init_log(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_log(cli.verbose);

    match cli.command {
        Command::Options { section } => {
            commands::options(section);
            Ok(())
        }
        Command::Render { edits, output } => commands::render(&edits, output.as_deref()),
        Command::Export { edits, output } => commands::export(&edits, &output),
        Command::Remote { action } => {
            let settings = HostSettings::load(cli.settings.as_deref())?;
            match action {
                RemoteAction::List => commands::remote_list(&settings),
                RemoteAction::Fetch {
                    name,
                    sets,
                    output,
                    save,
                } => commands::remote_fetch(&settings, &name, &sets, output.as_deref(), save.as_deref()),
            }
        }
        Command::Settings => {
            let settings = HostSettings::load(cli.settings.as_deref())?;
            commands::settings(&settings)
        }
    }
}
