use crate::naming::Naming;
use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for workshop-pack. Running without any of them
/// packages the current directory.
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Directory the manifest entries are relative to
    pub path: PathBuf,

    /// Config file to use instead of `workshop.toml`
    pub config: Option<PathBuf>,

    /// Override of the configured naming style
    pub naming: Option<Naming>,
}

impl Args {
    pub fn parse() -> Self {
        Self::from_matches(Self::command().get_matches())
    }

    fn command() -> Command {
        Command::new("workshop-pack")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Package mod assets into a versioned workshop archive")
            .arg(
                Arg::new("path")
                    .short('p')
                    .long("path")
                    .value_name("DIR")
                    .default_value(".")
                    .help("Directory containing the mod files"),
            )
            .arg(
                Arg::new("config")
                    .short('c')
                    .long("config")
                    .value_name("FILE")
                    .help("Alternative config file (default: workshop.toml, or the built-in profile)"),
            )
            .arg(
                Arg::new("naming")
                    .short('n')
                    .long("naming")
                    .value_name("STYLE")
                    .value_parser(PossibleValuesParser::new(["authored", "hyphenated"]))
                    .help("Archive naming style"),
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Enable verbose output"),
            )
    }

    fn from_matches(matches: clap::ArgMatches) -> Self {
        Self {
            verbose: matches.get_flag("verbose"),
            path: matches
                .get_one::<String>("path")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            config: matches.get_one::<String>("config").map(PathBuf::from),
            naming: matches
                .get_one::<String>("naming")
                .and_then(|n| Naming::from_name(n)),
        }
    }
}
