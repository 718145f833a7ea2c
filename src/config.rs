use std::{error::Error, fmt::Display, path::PathBuf};

use crate::counter::IndexKind;

pub const DEFAULT_INPUT: &str = "input.txt";
pub const DEFAULT_OUTPUT: &str = "output.txt";

pub const USAGE: &str = "\
usage: rect_count [INPUT] [OUTPUT] [--index axis|ordered] [--verbose]

Counts axis-aligned rectangles whose corners are all among the points in
INPUT (default: input.txt) and writes the count to OUTPUT (default:
output.txt).

  --index KIND   how points are looked up: `axis` (hashed rows and
                 columns, default) or `ordered` (one ordered set)
  --ordered      same as `--index ordered`
  -v, --verbose  trace every rectangle diagonal found
  -h, --help     print this message";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigErr {
    /// `--help` was given.
    Help,
    UnknownArg(String),
    /// A flag that takes a value was last on the command line.
    MissingValue(String),
    BadValue { flag: String, reason: String },
}

impl Display for ConfigErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigErr::Help => f.write_str(USAGE),
            ConfigErr::UnknownArg(arg) => {
                write!(f, "unexpected argument {arg:?}\n\n{USAGE}")
            }
            ConfigErr::MissingValue(flag) => {
                write!(f, "{flag} needs a value\n\n{USAGE}")
            }
            ConfigErr::BadValue { flag, reason } => {
                write!(f, "bad value for {flag}: {reason}")
            }
        }
    }
}

impl Error for ConfigErr {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub index: IndexKind,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.into(),
            output: DEFAULT_OUTPUT.into(),
            index: IndexKind::default(),
            verbose: false,
        }
    }
}

impl Config {
    /// Builds a config from command-line arguments, program name excluded.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigErr>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        let mut positionals = 0;

        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Err(ConfigErr::Help),
                "-v" | "--verbose" => config.verbose = true,
                "--ordered" => config.index = IndexKind::Ordered,
                "--index" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ConfigErr::MissingValue(arg.clone()))?;
                    config.index = value.parse().map_err(|reason| {
                        ConfigErr::BadValue { flag: arg.clone(), reason }
                    })?;
                }
                flag if flag.starts_with('-') && flag != "-" => {
                    return Err(ConfigErr::UnknownArg(arg));
                }
                _ => {
                    match positionals {
                        0 => config.input = arg.into(),
                        1 => config.output = arg.into(),
                        _ => return Err(ConfigErr::UnknownArg(arg)),
                    }
                    positionals += 1;
                }
            }
        }

        Ok(config)
    }

    pub fn max_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::TRACE
        } else {
            tracing::Level::INFO
        }
    }
}
