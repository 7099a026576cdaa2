//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-19
// Version : 0.1.0
// License : Mulan PSL v2
//
// Command line definition

use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

use crate::commands::password_gen::GenOptions;
use crate::passgen::IndexSampling;
use crate::shell::{MAX_LENGTH, MIN_LENGTH};

#[derive(Debug, Parser)]
#[command(name = "rpawogen")]
#[command(about = "Generate random passwords from selected character classes", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new random password
    Gen(GenArgs),

    /// Show or change the saved defaults
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Parser)]
pub struct GenArgs {
    /// Length of the password
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(MIN_LENGTH as i64..=MAX_LENGTH as i64))]
    pub length: Option<u16>,

    /// Include numbers
    #[arg(short, long, default_value_t = false)]
    pub numbers: bool,

    /// Include uppercase letters
    #[arg(short, long, default_value_t = false)]
    pub uppercase: bool,

    /// Include lowercase letters
    #[arg(short = 'w', long, default_value_t = false)]
    pub lowercase: bool,

    /// Include symbols
    #[arg(short, long, default_value_t = false)]
    pub symbols: bool,

    /// Use only URL-safe symbols
    #[arg(long, default_value_t = false)]
    pub url_safe: bool,

    /// How random draws are mapped to characters
    #[arg(long, value_enum)]
    pub sampling: Option<IndexSampling>,

    /// Copy the password to the clipboard
    #[arg(short, long, default_value_t = false)]
    pub copy: bool,

    /// Seconds before the clipboard is cleared (0 keeps it)
    #[arg(long, requires = "copy")]
    pub clear_after: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the current defaults
    Show,
    /// Change one default, e.g. `config set length 16`
    Set { key: String, value: String },
    /// Restore the built-in defaults
    Reset,
    /// Print the location of the config file
    Path,
}

impl From<GenArgs> for GenOptions {
    fn from(args: GenArgs) -> Self {
        Self {
            length: args.length.map(usize::from),
            numbers: args.numbers,
            uppercase: args.uppercase,
            lowercase: args.lowercase,
            symbols: args.symbols,
            url_safe: args.url_safe,
            sampling: args.sampling,
            copy: args.copy,
            clear_after: args.clear_after,
        }
    }
}

/// Map the `-v` count to a log level. Zero still shows warnings, which is
/// also what the clipboard helper runs with.
pub fn log_level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
