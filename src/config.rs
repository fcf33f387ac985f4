use std::path::PathBuf;

use crate::maze::Coord;
use crate::solvers::{CostMetric, Solver};

pub const DEFAULT_ROWS: usize = 30;
pub const DEFAULT_COLS: usize = 30;
/// Largest dimension the command line accepts.
pub const MAX_DIMENSION: usize = 2500;

pub const USAGE: &str = "\
Usage: wilson-maze [ROWS COLS] [OPTIONS]

Options:
  --seed N            seed the generator for a reproducible maze
  --solver NAME       bfs, dfs or astar (default: bfs)
  --metric NAME       A* metric: manhattan, euclidean, uniform or 0-2 (default: manhattan)
  --start X,Y         start cell (default: 0,0)
  --goal X,Y          goal cell (default: bottom-right corner)
  --break N           knock down N random internal walls after generating
  --draw              print the maze with the path overlaid
  --log FILE          write debug logs to FILE
  -h, --help          show this message";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: String, value: String },
    #[error("unknown argument {0:?}")]
    UnknownArgument(String),
    #[error("maze dimensions must be between 1 and {max}, got {rows}x{cols}")]
    DimensionOutOfRange { rows: usize, cols: usize, max: usize },
}

/// Settings for one run of the command-line front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub seed: Option<u64>,
    pub solver: Solver,
    pub start: Option<Coord>,
    pub goal: Option<Coord>,
    pub break_walls: usize,
    pub draw: bool,
    pub log_file: Option<PathBuf>,
    pub help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: None,
            solver: Solver::Bfs,
            start: None,
            goal: None,
            break_walls: 0,
            draw: false,
            log_file: None,
            help: false,
        }
    }
}

impl Config {
    /// Parses command-line arguments, without the executable name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut solver_name = String::from("bfs");
        let mut metric = CostMetric::default();
        let mut dims = Vec::new();

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => config.help = true,
                "--draw" => config.draw = true,
                "--seed" => config.seed = Some(parse_number(&arg, next_value(&arg, &mut args)?)?),
                "--break" => config.break_walls = parse_number(&arg, next_value(&arg, &mut args)?)?,
                "--start" => config.start = Some(parse_coord(&arg, next_value(&arg, &mut args)?)?),
                "--goal" => config.goal = Some(parse_coord(&arg, next_value(&arg, &mut args)?)?),
                "--log" => config.log_file = Some(PathBuf::from(next_value(&arg, &mut args)?)),
                "--solver" => solver_name = next_value(&arg, &mut args)?.to_lowercase(),
                "--metric" => metric = parse_metric(&arg, next_value(&arg, &mut args)?)?,
                // Checked before flags so a negative size is a bad value, not an unknown flag
                _ if dims.len() < 2 && (!arg.starts_with('-') || arg.parse::<i64>().is_ok()) => {
                    dims.push(parse_number::<usize>("dimensions", arg)?)
                }
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        match dims.as_slice() {
            [] => {}
            &[rows, cols] => {
                if !(1..=MAX_DIMENSION).contains(&rows) || !(1..=MAX_DIMENSION).contains(&cols) {
                    return Err(ConfigError::DimensionOutOfRange {
                        rows,
                        cols,
                        max: MAX_DIMENSION,
                    });
                }
                config.rows = rows;
                config.cols = cols;
            }
            _ => return Err(ConfigError::MissingValue("COLS".to_string())),
        }

        config.solver = match solver_name.as_str() {
            "bfs" => Solver::Bfs,
            "dfs" => Solver::Dfs,
            "astar" | "a*" => Solver::AStar(metric),
            _ => {
                return Err(ConfigError::InvalidValue {
                    flag: "--solver".to_string(),
                    value: solver_name,
                });
            }
        };

        Ok(config)
    }
}

fn next_value(flag: &str, args: &mut impl Iterator<Item = String>) -> Result<String, ConfigError> {
    args.next()
        .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: String) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value,
    })
}

fn parse_coord(flag: &str, value: String) -> Result<Coord, ConfigError> {
    let parsed = value
        .split_once(',')
        .and_then(|(x, y)| Some(Coord::new(x.trim().parse().ok()?, y.trim().parse().ok()?)));
    parsed.ok_or_else(|| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value,
    })
}

fn parse_metric(flag: &str, value: String) -> Result<CostMetric, ConfigError> {
    match value.to_lowercase().as_str() {
        "manhattan" | "man" => Ok(CostMetric::Manhattan),
        "euclidean" | "euc" => Ok(CostMetric::Euclidean),
        "uniform" | "dij" | "dijkstra" => Ok(CostMetric::UniformCost),
        other => other
            .parse::<usize>()
            .ok()
            .and_then(|index| CostMetric::try_from(index).ok())
            .ok_or_else(|| ConfigError::InvalidValue {
                flag: flag.to_string(),
                value,
            }),
    }
}
