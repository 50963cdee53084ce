//! World configuration.

use crate::{
    cells::Lattice, error::Error, live_set::LiveSet, patterns::Pattern, rules::Life, world::World,
};
use educe::Educe;
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A random fill of a rectangle of tiles.
#[derive(Clone, Debug, Educe, PartialEq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Soup {
    /// Width in tiles.
    #[educe(Default = 16)]
    pub width: i64,

    /// Height in tiles.
    #[educe(Default = 16)]
    pub height: i64,

    /// The probability for each tile to be alive.
    #[educe(Default = 0.5)]
    pub density: f64,

    /// Seed of the random number generator.
    ///
    /// `None` means a different soup every time.
    pub seed: Option<u64>,
}

impl Soup {
    /// Sets up a soup with the given size in tiles.
    pub fn new(width: i64, height: i64) -> Self {
        Soup {
            width,
            height,
            ..Soup::default()
        }
    }

    /// Sets the density.
    pub fn set_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Sets the seed.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// Fills the rectangle whose lower left tile is `(0, 0)`.
    pub fn fill(&self, live: &mut LiveSet) -> Result<(), Error> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(Error::DensityError);
        }
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let lattice = live.lattice();
        for row in 0..self.height {
            for col in 0..self.width {
                if rng.gen_bool(self.density) {
                    live.insert_aligned(lattice.tile_at(col, row)?);
                }
            }
        }
        Ok(())
    }
}

/// World configuration.
///
/// The world will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Edge length of a tile.
    #[educe(Default = 16)]
    pub size: i64,

    /// The rule string of the cellular automaton.
    #[educe(Default = "B3/S23")]
    pub rule_string: String,

    /// Tiles which are alive at the beginning, as `(column, row)`.
    pub cells: Vec<(i64, i64)>,

    /// Name of a built-in pattern to place at `(0, 0)`.
    pub pattern: Option<String>,

    /// A random soup to place at `(0, 0)`.
    pub soup: Option<Soup>,
}

impl Config {
    /// Sets up a new configuration with given tile size.
    pub fn new(size: i64) -> Self {
        Config {
            size,
            ..Config::default()
        }
    }

    /// Sets the rule string.
    pub fn set_rule_string<S: Into<String>>(mut self, rule_string: S) -> Self {
        self.rule_string = rule_string.into();
        self
    }

    /// Sets the initial living tiles, as `(column, row)`.
    pub fn set_cells<I: IntoIterator<Item = (i64, i64)>>(mut self, cells: I) -> Self {
        self.cells = cells.into_iter().collect();
        self
    }

    /// Sets the pattern.
    pub fn set_pattern<T: Into<Option<String>>>(mut self, pattern: T) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Sets the soup.
    pub fn set_soup<T: Into<Option<Soup>>>(mut self, soup: T) -> Self {
        self.soup = soup.into();
        self
    }

    /// Parses the rule string.
    pub fn rule(&self) -> Result<Life, Error> {
        self.rule_string.parse()
    }

    /// The initial living tiles.
    pub fn live_set(&self) -> Result<LiveSet, Error> {
        let lattice = Lattice::new(self.size)?;
        let mut live = LiveSet::new(lattice);
        for &(col, row) in &self.cells {
            live.insert_aligned(lattice.tile_at(col, row)?);
        }
        if let Some(name) = &self.pattern {
            Pattern::find(name)?.place_into(&mut live, 0, 0)?;
        }
        if let Some(soup) = &self.soup {
            soup.fill(&mut live)?;
        }
        Ok(live)
    }

    /// Creates a new world from the configuration.
    ///
    /// Returns an error if the tile size is not positive, if the rule string
    /// is invalid, or if the pattern or the soup cannot be placed.
    pub fn world(&self) -> Result<World, Error> {
        let rule = self.rule()?;
        let live = self.live_set()?;
        info!("new world: rule {}, {} living tiles", rule, live.len());
        Ok(World::new(self.clone(), rule, live))
    }
}
