//! Parsing command-line arguments.

use crate::error::ConfigError;
use clap::{Arg, ArgAction, ArgMatches, Command, builder::PossibleValuesParser, command, value_parser};
use conway::{GameSettings, Pattern, find_pattern, patterns::PATTERNS};
use std::fs;
use std::path::{Path, PathBuf};

/// What the window starts with.
pub struct Args {
    pub settings: GameSettings,
    pub pattern: Option<&'static Pattern>,
}

fn cli() -> Command {
    command!()
        .long_about(
            "Conway's Game of Life on a fixed-size grid.\n\
             \n\
             Settings are read from the TOML file given with --config, if any, \n\
             and then overridden by the other flags. Cells outside the grid \n\
             are always dead; there is no wrap-around.\n",
        )
        .arg(
            Arg::new("CONFIG")
                .help("TOML file with rows, cols, speed, alive_threshold, halt_on_cycle")
                .short('c')
                .long("config")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("ROWS")
                .help("Number of rows")
                .short('r')
                .long("rows")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("COLS")
                .help("Number of columns")
                .short('w')
                .long("cols")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("SPEED")
                .help("Milliseconds between generations")
                .short('s')
                .long("speed")
                .value_parser(value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("THRESHOLD")
                .help("Random fills make a cell alive when a uniform draw exceeds this")
                .short('d')
                .long("density")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("HALT_ON_CYCLE")
                .help("Stop once a generation repeats one of the last ten")
                .long("halt-on-cycle")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("PATTERN")
                .help("Pattern to start with")
                .short('p')
                .long("pattern")
                .ignore_case(true)
                .value_parser(PossibleValuesParser::new(PATTERNS.iter().map(|p| p.name))),
        )
}

fn parse_settings(path: &Path, text: &str) -> Result<GameSettings, ConfigError> {
    toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.to_owned(),
        source,
    })
}

fn load_settings(path: &Path) -> Result<GameSettings, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_owned(),
        source,
    })?;
    parse_settings(path, &text)
}

impl Args {
    /// Parses the command-line arguments, exiting on usage errors.
    pub fn parse() -> Result<Self, ConfigError> {
        Args::from_matches(&cli().get_matches())
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self, ConfigError> {
        let mut settings = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => load_settings(path)?,
            None => GameSettings::default(),
        };

        if let Some(&rows) = matches.get_one::<usize>("ROWS") {
            settings.rows = rows;
        }
        if let Some(&cols) = matches.get_one::<usize>("COLS") {
            settings.cols = cols;
        }
        if let Some(&speed) = matches.get_one::<u64>("SPEED") {
            settings.speed = speed;
        }
        if let Some(&threshold) = matches.get_one::<f64>("THRESHOLD") {
            settings.alive_threshold = threshold;
        }
        if matches.get_flag("HALT_ON_CYCLE") {
            settings.halt_on_cycle = true;
        }
        settings.validate()?;

        let pattern = matches
            .get_one::<String>("PATTERN")
            .and_then(|name| find_pattern(name));

        Ok(Args { settings, pattern })
    }
}
