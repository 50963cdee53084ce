use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use std::error::Error;
use tilelife_lib::{step, Config, Coord, Lattice, LiveSet, Pattern, Tile};

const S: i64 = 16;

fn live(coords: &[(i64, i64)]) -> Result<LiveSet, Box<dyn Error>> {
    let lattice = Lattice::new(S)?;
    Ok(LiveSet::from_coords(
        lattice,
        coords.iter().map(|&(x, y)| Coord::new(x, y)),
    )?)
}

#[test]
fn empty() -> Result<(), Box<dyn Error>> {
    let empty = live(&[])?;
    assert!(empty.next().is_empty());
    Ok(())
}

#[test]
fn neighbor_symmetry() -> Result<(), Box<dyn Error>> {
    let lattice = Lattice::new(S)?;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..100 {
        let c = lattice.tile_at(rng.gen_range(-1000..1000), rng.gen_range(-1000..1000))?;
        for n in lattice.neighbors(c) {
            assert!(lattice.neighbors(n).contains(&c));
        }
        assert_eq!(Tile::new(c).neighbors(lattice), lattice.neighbors(c));
    }
    Ok(())
}

#[test]
fn block() -> Result<(), Box<dyn Error>> {
    let block = live(&[(0, 0), (0, S), (S, 0), (S, S)])?;
    assert_eq!(block.next(), block);
    Ok(())
}

#[test]
fn blinker() -> Result<(), Box<dyn Error>> {
    let horizontal = live(&[(0, 0), (S, 0), (2 * S, 0)])?;
    let vertical = live(&[(S, -S), (S, 0), (S, S)])?;
    assert_eq!(horizontal.next(), vertical);
    assert_eq!(vertical.next(), horizontal);
    Ok(())
}

#[test]
fn birth() -> Result<(), Box<dyn Error>> {
    let corner = live(&[(0, 0), (S, 0), (0, S)])?;
    let next = corner.next();
    assert!(next.contains(Coord::new(S, S)));
    assert_eq!(next, live(&[(0, 0), (S, 0), (0, S), (S, S)])?);
    Ok(())
}

#[test]
fn death() -> Result<(), Box<dyn Error>> {
    // No neighbor.
    assert!(live(&[(0, 0)])?.next().is_empty());
    // One neighbor.
    assert!(live(&[(0, 0), (S, S)])?.next().is_empty());
    // Four neighbors.
    let plus = live(&[(0, 0), (S, 0), (-S, 0), (0, S), (0, -S)])?;
    assert!(!plus.next().contains(Coord::new(0, 0)));
    Ok(())
}

#[test]
fn placement_is_idempotent() -> Result<(), Box<dyn Error>> {
    let mut once = live(&[(0, 0), (S, 0)])?;
    once.place(Coord::new(-S, 2 * S))?;
    let mut twice = once.clone();
    twice.place(Coord::new(-S, 2 * S))?;
    assert_eq!(once, twice);
    Ok(())
}

#[test]
fn deterministic() -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(2);
    let mut coords: Vec<(i64, i64)> = (0..300)
        .map(|_| (rng.gen_range(-20..20) * S, rng.gen_range(-20..20) * S))
        .collect();
    let a = live(&coords)?;
    coords.reverse();
    let b = live(&coords)?;
    coords.shuffle(&mut rng);
    let c = live(&coords)?;
    let rule = Config::default().rule()?;
    let next = step(&a, &rule);
    assert_eq!(next, step(&b, &rule));
    assert_eq!(next, step(&c, &rule));
    assert_eq!(next.snapshot(), step(&c, &rule).snapshot());
    Ok(())
}

#[test]
fn glider() -> Result<(), Box<dyn Error>> {
    let mut world = Config::new(S).set_pattern(String::from("glider")).world()?;
    let start = world.snapshot();
    world.step_n(4);
    let moved: Vec<Coord> = start
        .iter()
        .map(|c| Coord::new(c.x + S, c.y - S))
        .collect();
    assert_eq!(world.snapshot(), moved);
    Ok(())
}

#[test]
fn grows_without_bound() -> Result<(), Box<dyn Error>> {
    let mut world = Config::new(S)
        .set_pattern(String::from("gosper glider gun"))
        .world()?;
    let population = world.population();
    world.step_n(120);
    assert!(world.population() > population);
    let bbox = world.live().bounding_box().ok_or("empty world")?;
    assert!(bbox.x + bbox.width > 36 * S);
    assert!(bbox.y < 0);
    Ok(())
}

#[test]
fn other_rules() -> Result<(), Box<dyn Error>> {
    let mut world = Config::new(1)
        .set_rule_string("B36/S23")
        .set_cells([(0, 0), (1, 0), (2, 0)])
        .world()?;
    assert_eq!(world.rule().to_string(), "B36/S23");
    world.step();
    assert_eq!(world.population(), 3);

    // Seeds: nothing survives.
    let mut world = Config::default()
        .set_rule_string("B2/S")
        .set_pattern(String::from("block"))
        .world()?;
    world.step();
    let block = Pattern::find("block")?;
    assert!(block
        .cells
        .iter()
        .all(|&(c, r)| !world.live().contains(Coord::new(c * S, r * S))));
    assert_eq!(world.population(), 8);
    Ok(())
}
