use std::{env, fmt, path::PathBuf};

use common::{Strategy, maze::MAX_RADIUS};

pub const DEFAULT_MAZE_PATH: &str = "resources/maze3.txt";
pub const MAZE_PATH_VAR: &str = "MAZE_PATH";
pub const MAZE_STRATEGIES_VAR: &str = "MAZE_STRATEGIES";

pub const USAGE: &str = "\
Usage:
  MazeSolver [PATH]
  MazeSolver generate ROWS COLS [SEED]

Environment:
  MAZE_PATH        maze file used when PATH is omitted (default resources/maze3.txt)
  MAZE_STRATEGIES  comma-separated strategies to run in order (default dfs,bfs)
  RUST_LOG         log filter, e.g. debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Solve {
        path: PathBuf,
    },
    // Sizes are in rooms, so the grid is `2 * n + 1` cells per side.
    Generate {
        rows: usize,
        cols: usize,
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub command: Command,
    pub strategies: Vec<Strategy>,
}

impl Config {
    /// Reads `.env` if present, then the process arguments and environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::parse(env::args().skip(1), |key| env::var(key).ok())
    }

    pub fn parse<I>(args: I, var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();

        let command = match args.first().map(String::as_str) {
            Some("generate") => parse_generate(&args[1..])?,
            Some(path) => {
                if let Some(extra) = args.get(1) {
                    return Err(ConfigError::UnexpectedArgument(extra.clone()));
                }
                Command::Solve {
                    path: PathBuf::from(path),
                }
            }
            None => Command::Solve {
                path: var(MAZE_PATH_VAR)
                    .filter(|path| !path.trim().is_empty())
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_MAZE_PATH)),
            },
        };

        let strategies = match var(MAZE_STRATEGIES_VAR) {
            Some(list) => parse_strategies(&list)?,
            None => vec![Strategy::Dfs, Strategy::Bfs],
        };

        Ok(Self {
            command,
            strategies,
        })
    }
}

fn parse_generate(args: &[String]) -> Result<Command, ConfigError> {
    let rows = parse_size("ROWS", args.first())?;
    let cols = parse_size("COLS", args.get(1))?;

    let seed = match args.get(2) {
        Some(_) => Some(parse_number("SEED", args.get(2))?),
        None => None,
    };

    if let Some(extra) = args.get(3) {
        return Err(ConfigError::UnexpectedArgument(extra.clone()));
    }

    Ok(Command::Generate { rows, cols, seed })
}

fn parse_size(name: &'static str, value: Option<&String>) -> Result<usize, ConfigError> {
    let size = parse_number(name, value)?;
    if size > MAX_RADIUS {
        return Err(ConfigError::TooLarge {
            name,
            max: MAX_RADIUS,
        });
    }
    Ok(size)
}

fn parse_number<T: std::str::FromStr>(
    name: &'static str,
    value: Option<&String>,
) -> Result<T, ConfigError> {
    let value = value.ok_or(ConfigError::MissingArgument(name))?;
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        name,
        value: value.clone(),
    })
}

fn parse_strategies(list: &str) -> Result<Vec<Strategy>, ConfigError> {
    let strategies = list
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            name.parse()
                .map_err(|_| ConfigError::UnknownStrategy(name.to_string()))
        })
        .collect::<Result<Vec<Strategy>, ConfigError>>()?;

    if strategies.is_empty() {
        return Err(ConfigError::NoStrategies);
    }

    Ok(strategies)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingArgument(&'static str),
    UnexpectedArgument(String),
    InvalidNumber { name: &'static str, value: String },
    TooLarge { name: &'static str, max: usize },
    UnknownStrategy(String),
    NoStrategies,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingArgument(name) => write!(f, "missing argument {}", name),
            ConfigError::UnexpectedArgument(arg) => write!(f, "unexpected argument '{}'", arg),
            ConfigError::InvalidNumber { name, value } => {
                write!(f, "{} must be a non-negative integer, got '{}'", name, value)
            }
            ConfigError::TooLarge { name, max } => write!(f, "{} must be at most {}", name, max),
            ConfigError::UnknownStrategy(name) => {
                write!(f, "unknown strategy '{}' in {}", name, MAZE_STRATEGIES_VAR)
            }
            ConfigError::NoStrategies => write!(f, "{} lists no strategies", MAZE_STRATEGIES_VAR),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn parse_with(args: &[&str], vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::parse(args.iter().copied(), |key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_the_bundled_maze_and_both_strategies() {
        let config = parse_with(&[], &[]).unwrap();
        assert_eq!(
            config.command,
            Command::Solve {
                path: PathBuf::from(DEFAULT_MAZE_PATH)
            }
        );
        assert_eq!(config.strategies, vec![Strategy::Dfs, Strategy::Bfs]);
    }

    #[test]
    fn argument_beats_environment() {
        let vars = [(MAZE_PATH_VAR, "from-env.txt")];

        let config = parse_with(&[], &vars).unwrap();
        assert_eq!(
            config.command,
            Command::Solve {
                path: PathBuf::from("from-env.txt")
            }
        );

        let config = parse_with(&["from-arg.txt"], &vars).unwrap();
        assert_eq!(
            config.command,
            Command::Solve {
                path: PathBuf::from("from-arg.txt")
            }
        );
    }

    #[test]
    fn strategies_come_from_the_environment() {
        let config = parse_with(&[], &[(MAZE_STRATEGIES_VAR, " BFS, dfs ,bfs")]).unwrap();
        assert_eq!(
            config.strategies,
            vec![Strategy::Bfs, Strategy::Dfs, Strategy::Bfs]
        );
    }

    #[test]
    fn rejects_bad_strategies() {
        assert_eq!(
            parse_with(&[], &[(MAZE_STRATEGIES_VAR, "dfs,astar")]),
            Err(ConfigError::UnknownStrategy("astar".to_string()))
        );
        assert_eq!(
            parse_with(&[], &[(MAZE_STRATEGIES_VAR, " , ")]),
            Err(ConfigError::NoStrategies)
        );
    }

    #[test]
    fn parses_generate() {
        let config = parse_with(&["generate", "4", "7"], &[]).unwrap();
        assert_eq!(
            config.command,
            Command::Generate {
                rows: 4,
                cols: 7,
                seed: None
            }
        );

        let config = parse_with(&["generate", "4", "7", "99"], &[]).unwrap();
        assert_eq!(
            config.command,
            Command::Generate {
                rows: 4,
                cols: 7,
                seed: Some(99)
            }
        );
    }

    #[test]
    fn rejects_bad_generate_arguments() {
        assert_eq!(
            parse_with(&["generate", "4"], &[]),
            Err(ConfigError::MissingArgument("COLS"))
        );
        assert_eq!(
            parse_with(&["generate", "four", "4"], &[]),
            Err(ConfigError::InvalidNumber {
                name: "ROWS",
                value: "four".to_string()
            })
        );
        assert_eq!(
            parse_with(&["generate", "4", "4", "seven"], &[]),
            Err(ConfigError::InvalidNumber {
                name: "SEED",
                value: "seven".to_string()
            })
        );
        assert_eq!(
            parse_with(&["generate", "4", "4", "1", "2"], &[]),
            Err(ConfigError::UnexpectedArgument("2".to_string()))
        );
    }

    #[test]
    fn rejects_oversized_generate_arguments() {
        assert_eq!(
            parse_with(&["generate", "99999999999999999999", "1"], &[]),
            Err(ConfigError::InvalidNumber {
                name: "ROWS",
                value: "99999999999999999999".to_string()
            })
        );
        assert_eq!(
            parse_with(&["generate", "1", "1000000"], &[]),
            Err(ConfigError::TooLarge {
                name: "COLS",
                max: MAX_RADIUS
            })
        );

        let max = MAX_RADIUS.to_string();
        assert!(parse_with(&["generate", &max, &max], &[]).is_ok());
    }

    #[test]
    fn rejects_extra_solve_arguments() {
        assert_eq!(
            parse_with(&["a.txt", "b.txt"], &[]),
            Err(ConfigError::UnexpectedArgument("b.txt".to_string()))
        );
    }
}
