mod args;

use args::{Args, Format};
use log::{info, LevelFilter};
use serde::Serialize;
use std::{error::Error, process};
use tilelife_lib::{Coord, LiveSet, World};

/// What is printed for the json and yaml formats.
#[derive(Serialize)]
struct Report<'a> {
    rule: String,
    size: i64,
    generation: u64,
    population: usize,
    cells: &'a [Coord],
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn render(world: &World, args: &Args) -> Result<String, Box<dyn Error>> {
    let cells = match &args.viewport {
        Some(viewport) => world.snapshot_within(viewport),
        None => world.snapshot(),
    };
    let report = Report {
        rule: world.rule().to_string(),
        size: world.live().lattice().size(),
        generation: world.generation(),
        population: world.population(),
        cells: &cells,
    };
    let output = match args.format {
        Format::Json => serde_json::to_string_pretty(&report)? + "\n",
        Format::Yaml => serde_yaml::to_string(&report)?,
        Format::Plain => {
            let shown = LiveSet::from_coords(world.live().lattice(), cells.iter().copied())?;
            format!(
                "#N generation {}, population {}\n#R {}\n{}",
                report.generation,
                report.population,
                report.rule,
                shown.display()
            )
        }
    };
    Ok(output)
}

fn run(args: &Args) -> Result<String, Box<dyn Error>> {
    let config = args.config()?;
    let mut world = config.world()?;
    for &(x, y) in &args.cells {
        let (coord, _) = world.place_point(x, y)?;
        info!("placed tile at {}", coord);
    }
    world.step_n(args.generations);
    info!(
        "stopped at generation {} with {} living tiles",
        world.generation(),
        world.population()
    );
    render(&world, args)
}

fn main() {
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    init_logger(args.verbose);
    match run(&args) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blinker_plain() -> Result<(), Box<dyn Error>> {
        let args = Args::parse_from(["tilelife", "-p", "blinker"])?;
        assert_eq!(
            run(&args)?,
            "#N generation 1, population 3\n#R B3/S23\n#P 1 -1\no\no\no\n"
        );
        Ok(())
    }

    #[test]
    fn cells_from_points() -> Result<(), Box<dyn Error>> {
        let args = Args::parse_from([
            "tilelife", "--cell", "1,1", "--cell", "17,2", "--cell", "40.5,15.9", "-g", "2",
        ])?;
        assert_eq!(
            run(&args)?,
            "#N generation 2, population 3\n#R B3/S23\n#P 0 0\nooo\n"
        );
        Ok(())
    }

    #[test]
    fn cells_out_of_range() -> Result<(), Box<dyn Error>> {
        let args = Args::parse_from(["tilelife", "--cell", "1e20,0"])?;
        let err = run(&args).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Point is not finite or lies outside the range of the lattice."
        );
        let args = Args::parse_from(["tilelife", "-s", "1", "--cell", "4e18,0", "-g", "0"])?;
        assert!(run(&args).is_err());
        Ok(())
    }

    #[test]
    fn far_apart_cells_are_listed() -> Result<(), Box<dyn Error>> {
        let args = Args::parse_from(["tilelife", "--cell", "0,0", "--cell", "1e15,0", "-g", "0"])?;
        assert_eq!(
            run(&args)?,
            "#N generation 0, population 2\n#R B3/S23\n\
             #C 2 living tiles, too sparse to draw\n0 0\n62500000000000 0\n"
        );
        Ok(())
    }

    #[test]
    fn json_with_viewport() -> Result<(), Box<dyn Error>> {
        let args = Args::parse_from([
            "tilelife", "-p", "blinker", "-s", "1", "-f", "json", "--viewport", "0,0,5,5",
        ])?;
        let value: serde_json::Value = serde_json::from_str(&run(&args)?)?;
        assert_eq!(value["generation"], 1);
        assert_eq!(value["population"], 3);
        assert_eq!(value["size"], 1);
        assert_eq!(
            value["cells"],
            serde_json::json!([{ "x": 1, "y": 0 }, { "x": 1, "y": 1 }])
        );
        Ok(())
    }

    #[test]
    fn yaml() -> Result<(), Box<dyn Error>> {
        let args = Args::parse_from(["tilelife", "-f", "yaml", "-g", "0"])?;
        let output = run(&args)?;
        assert!(output.contains("rule: B3/S23"));
        assert!(output.contains("population: 0"));
        Ok(())
    }
}
