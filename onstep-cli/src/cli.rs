use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use onstep_config::Section;

#[derive(Parser, Debug)]
#[command(name = "onstep-configurator")]
#[command(about = "Generate OnStepX Config.h blocks and manage presets")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Host settings file overriding the built-in defaults
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the known options with their defaults
    Options {
        /// Only list one section (controller, mount, rotator, focusers, auxiliary)
        #[arg(long)]
        section: Option<Section>,
    },
    /// Print the Config.h block for the defaults plus presets and edits
    Render {
        #[command(flatten)]
        edits: Edits,

        /// Write the block to a file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Save the defaults plus presets and edits as a preset (.json or .csv)
    Export {
        #[command(flatten)]
        edits: Edits,

        #[arg(long, short, value_name = "FILE")]
        output: PathBuf,
    },
    /// Browse presets published in the preset repository
    Remote {
        #[command(subcommand)]
        action: RemoteAction,
    },
    /// Print the effective host settings
    Settings,
}

#[derive(Subcommand, Debug)]
pub enum RemoteAction {
    /// List the offered presets
    List,
    /// Load a preset over the defaults and render it
    Fetch {
        /// Preset file name as listed, e.g. MaxPCB2.json
        name: String,

        /// Option writes applied after the preset
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
        sets: Vec<(String, String)>,

        /// Write the block to a file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Save the merged options as a local preset instead of rendering
        #[arg(long, value_name = "FILE")]
        save: Option<PathBuf>,
    },
}

/// Presets and single writes applied over the defaults, in that order
#[derive(Args, Debug)]
pub struct Edits {
    /// Preset file to load (.json or .csv), may be repeated
    #[arg(long = "preset", value_name = "FILE")]
    pub presets: Vec<PathBuf>,

    /// Set one option, may be repeated
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub sets: Vec<(String, String)>,
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing option name in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}
