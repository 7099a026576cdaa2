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
// A random password generator written in Rust.

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use rpawogen::cli::{Cli, Commands, ConfigCommand, log_level};
use rpawogen::commands::{config, password_gen};
use rpawogen::setclip;

fn init_tracing(verbosity: u8) -> Result<()> {
    let level = log_level(verbosity);
    let filter = EnvFilter::from_default_env().add_directive(format!("rpawogen={}", level).parse()?);
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    // The helper inherits stderr, so its warnings still reach the terminal.
    if setclip::is_clipboard_daemon() {
        init_tracing(0)?;
        return setclip::run_clipboard_daemon().map_err(|e| anyhow!("{}", e));
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Gen(args) => password_gen::generate_random(args.into()),
        Commands::Config(cmd) => match cmd {
            ConfigCommand::Show => config::show_config(),
            ConfigCommand::Set { key, value } => config::set_config(&key, &value),
            ConfigCommand::Reset => config::reset_config(),
            ConfigCommand::Path => config::print_config_path(),
        },
    }
}
