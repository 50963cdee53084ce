//! Parsing command-line arguments.

use clap::{error::Result as ClapResult, value_parser, Arg, ArgAction, Command};
use std::{
    error::Error,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};
use tilelife_lib::{rules::Life, Config, Soup, Viewport};

/// How to print the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    Plain,
    Json,
    Yaml,
}

fn parse_rule(s: &str) -> Result<String, String> {
    s.parse::<Life>().map(|_| s.to_owned()).map_err(|e| e.to_string())
}

fn parse_cell(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| String::from("expected X,Y"))?;
    let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok((x, y))
}

fn parse_dims(s: &str) -> Result<(i64, i64), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| String::from("expected WIDTHxHEIGHT"))?;
    let w = w.parse::<i64>().map_err(|e| e.to_string())?;
    let h = h.parse::<i64>().map_err(|e| e.to_string())?;
    if w > 0 && h > 0 {
        Ok((w, h))
    } else {
        Err(String::from("width and height must be positive"))
    }
}

fn parse_density(s: &str) -> Result<f64, String> {
    let d = s.parse::<f64>().map_err(|e| e.to_string())?;
    if (0.0..=1.0).contains(&d) {
        Ok(d)
    } else {
        Err(String::from("density must be between 0 and 1"))
    }
}

fn parse_viewport(s: &str) -> Result<Viewport, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<i64>().map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    match parts[..] {
        [x, y, width, height] if width > 0 && height > 0 => Ok(Viewport {
            x,
            y,
            width,
            height,
        }),
        [_, _, _, _] => Err(String::from("width and height must be positive")),
        _ => Err(String::from("expected X,Y,WIDTH,HEIGHT")),
    }
}

fn command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .long_about(
            "Runs Conway's Game of Life on an unbounded lattice.\n\
             \n\
             Only living tiles are stored, so patterns may grow in any direction.\n\
             The result is printed in Plaintext format by default:\n\
             * Dead tiles are represented by `.`;\n\
             * Living tiles are represented by `o`;\n\
             * The `#P` line gives the column and row of the lower left tile.\n",
        )
        .allow_negative_numbers(true)
        .arg(
            Arg::new("CONFIG")
                .help("Reads the configuration from a TOML, YAML or JSON file")
                .short('c')
                .long("config")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("RULE")
                .help("Rule of the cellular automaton")
                .long_help(
                    "Rule of the cellular automaton\n\
                     Supports Life-like rules without B0, e.g., B3/S23 or 23/3.\n",
                )
                .short('r')
                .long("rule")
                .value_parser(parse_rule),
        )
        .arg(
            Arg::new("SIZE")
                .help("Edge length of a tile")
                .short('s')
                .long("size")
                .value_parser(value_parser!(i64).range(1..)),
        )
        .arg(
            Arg::new("PATTERN")
                .help("A built-in pattern, placed at column 0, row 0")
                .long_help(
                    "A built-in pattern, placed at column 0, row 0\n\
                     One of: block, beehive, blinker, toad, beacon, glider, lwss, \
                     r-pentomino, pulsar, gosper-glider-gun.\n",
                )
                .short('p')
                .long("pattern"),
        )
        .arg(
            Arg::new("CELL")
                .help("Makes the tile containing the point X,Y alive")
                .long("cell")
                .action(ArgAction::Append)
                .allow_hyphen_values(true)
                .value_parser(parse_cell),
        )
        .arg(
            Arg::new("SOUP")
                .help("Fills a WIDTHxHEIGHT rectangle of tiles randomly")
                .long("soup")
                .value_parser(parse_dims),
        )
        .arg(
            Arg::new("DENSITY")
                .help("Density of the soup")
                .long("density")
                .requires("SOUP")
                .value_parser(parse_density),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed of the soup")
                .long("seed")
                .requires("SOUP")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("GENERATIONS")
                .help("Number of generations to run")
                .short('g')
                .long("generations")
                .default_value("1")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("FORMAT")
                .help("Output format")
                .short('f')
                .long("format")
                .value_parser(["plain", "json", "yaml"])
                .default_value("plain"),
        )
        .arg(
            Arg::new("VIEWPORT")
                .help("Only prints tiles inside the region X,Y,WIDTH,HEIGHT")
                .long("viewport")
                .allow_hyphen_values(true)
                .value_parser(parse_viewport),
        )
        .arg(
            Arg::new("VERBOSE")
                .help("Prints more logs; can be repeated")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count),
        )
}

/// A struct to store the parse results.
#[derive(Debug)]
pub(crate) struct Args {
    pub(crate) config_file: Option<PathBuf>,
    pub(crate) rule: Option<String>,
    pub(crate) size: Option<i64>,
    pub(crate) pattern: Option<String>,
    pub(crate) cells: Vec<(f64, f64)>,
    pub(crate) soup: Option<Soup>,
    pub(crate) generations: u64,
    pub(crate) format: Format,
    pub(crate) viewport: Option<Viewport>,
    pub(crate) verbose: u8,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> ClapResult<Self> {
        Self::parse_from(std::env::args_os())
    }

    pub(crate) fn parse_from<I, T>(args: I) -> ClapResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;

        let soup = matches.get_one::<(i64, i64)>("SOUP").map(|&(w, h)| {
            let mut soup = Soup::new(w, h).set_seed(matches.get_one::<u64>("SEED").copied());
            if let Some(&density) = matches.get_one::<f64>("DENSITY") {
                soup = soup.set_density(density);
            }
            soup
        });
        let format = match matches.get_one::<String>("FORMAT").map(String::as_str) {
            Some("json") => Format::Json,
            Some("yaml") => Format::Yaml,
            _ => Format::Plain,
        };

        Ok(Args {
            config_file: matches.get_one::<PathBuf>("CONFIG").cloned(),
            rule: matches.get_one::<String>("RULE").cloned(),
            size: matches.get_one::<i64>("SIZE").copied(),
            pattern: matches.get_one::<String>("PATTERN").cloned(),
            cells: matches
                .get_many::<(f64, f64)>("CELL")
                .map(|cells| cells.copied().collect())
                .unwrap_or_default(),
            soup,
            generations: matches.get_one::<u64>("GENERATIONS").copied().unwrap_or(1),
            format,
            viewport: matches.get_one::<Viewport>("VIEWPORT").copied(),
            verbose: matches.get_count("VERBOSE"),
        })
    }

    /// Reads the configuration file, if any, and applies the overrides
    /// given on the command line.
    pub(crate) fn config(&self) -> Result<Config, Box<dyn Error>> {
        let mut config = match &self.config_file {
            Some(path) => read_config(path)?,
            None => Config::default(),
        };
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(rule) = &self.rule {
            config.rule_string = rule.clone();
        }
        if let Some(pattern) = &self.pattern {
            config.pattern = Some(pattern.clone());
        }
        if let Some(soup) = &self.soup {
            config.soup = Some(soup.clone());
        }
        Ok(config)
    }
}

/// Reads a configuration file. The format is chosen by the extension.
fn read_config(path: &Path) -> Result<Config, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let config: Config = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&text)?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text)?,
        Some("json") => serde_json::from_str(&text)?,
        _ => {
            return Err(format!(
                "unknown configuration format: {}; expected .toml, .yaml or .json",
                path.display()
            )
            .into())
        }
    };
    Ok(config)
}
