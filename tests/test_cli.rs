use clap::Parser;
use rpawogen::cli::*;
use rpawogen::commands::password_gen::GenOptions;
use rpawogen::passgen::IndexSampling;
use tracing::Level;

fn gen_args(args: &[&str]) -> Result<GenArgs, clap::Error> {
    let cli = Cli::try_parse_from(std::iter::once("rpawogen").chain(args.iter().copied()))?;
    match cli.command {
        Commands::Gen(args) => Ok(args),
        other => panic!("expected gen, got {:?}", other),
    }
}

#[test]
fn test_length_bounds() {
    assert!(gen_args(&["gen", "-l", "8"]).is_ok());
    assert!(gen_args(&["gen", "--length", "26"]).is_ok());
    assert!(gen_args(&["gen", "-l", "7"]).is_err());
    assert!(gen_args(&["gen", "-l", "27"]).is_err());
}

#[test]
fn test_clear_after_requires_copy() {
    assert!(gen_args(&["gen", "--clear-after", "10"]).is_err());
    let args = gen_args(&["gen", "--copy", "--clear-after", "10"]).unwrap();
    assert_eq!(args.clear_after, Some(10));
}

#[test]
fn test_gen_args_into_options() {
    let args = gen_args(&["gen", "-l", "12", "-n", "-w", "--url-safe", "--sampling", "modulo", "-c"]).unwrap();
    let options = GenOptions::from(args);
    assert_eq!(options.length, Some(12));
    assert!(options.numbers && options.lowercase);
    assert!(!options.uppercase && !options.symbols);
    assert!(options.url_safe && options.copy);
    assert_eq!(options.sampling, Some(IndexSampling::Modulo));
    assert_eq!(options.clear_after, None);
}

#[test]
fn test_config_subcommands() {
    let cli = Cli::try_parse_from(["rpawogen", "-v", "config", "set", "length", "16"]).unwrap();
    assert_eq!(cli.verbose, 1);
    match cli.command {
        Commands::Config(ConfigCommand::Set { key, value }) => {
            assert_eq!(key, "length");
            assert_eq!(value, "16");
        }
        other => panic!("expected config set, got {:?}", other),
    }
}

#[test]
fn test_log_level_keeps_warnings_by_default() {
    assert_eq!(log_level(0), Level::WARN);
    assert_eq!(log_level(2), Level::DEBUG);
    assert_eq!(log_level(9), Level::TRACE);
}
