//! Command-line interface for dumpgrammar.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Grammar-annotated source file (`-` for stdin)
    pub input: Option<PathBuf>,

    /// Characters stripped from the start of each rule line
    pub prefix_width: Option<usize>,

    /// Config file path
    pub config: Option<PathBuf>,

    /// Enable debug output
    pub debug: bool,
}

impl CliArgs {
    /// Whether the source document should be read from stdin
    #[must_use]
    pub fn use_stdin(&self) -> bool {
        self.input.as_ref().is_some_and(|p| p.as_os_str() == "-")
    }
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("dumpgrammar")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print the BNF grammar embedded in source comments, aligned on ::=")
        .arg(
            Arg::new("input")
                .help("Grammar-annotated source file, or - for stdin [default: grammar.c]")
                .value_name("FILE")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("prefix-width")
                .short('p')
                .long("prefix-width")
                .help("Characters stripped from the start of each rule line [default: 3]")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Config file path (overrides auto-discovery)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from command line
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        input: matches.get_one::<PathBuf>("input").cloned(),
        prefix_width: matches.get_one::<usize>("prefix-width").copied(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        debug: matches.get_flag("debug"),
    }
}
