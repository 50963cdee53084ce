//! __Tilelife__ is a sparse Game of Life engine on an unbounded lattice.
//!
//! Only the coordinates of living tiles are stored. Each generation is
//! computed from these coordinates and their neighbors, so patterns can
//! grow in any direction, up to the range given by [`Lattice::limit`].
//!
//! # Example
//!
//! ```rust
//! use tilelife_lib::{Config, Coord};
//!
//! // A blinker, on a lattice of 16x16 tiles.
//! let mut world = Config::new(16)
//!     .set_cells([(0, 0), (1, 0), (2, 0)])
//!     .world()
//!     .unwrap();
//!
//! world.step();
//! assert_eq!(
//!     world.snapshot(),
//!     vec![Coord::new(16, -16), Coord::new(16, 0), Coord::new(16, 16)]
//! );
//! ```

mod cells;
mod config;
mod error;
pub mod generation;
mod live_set;
pub mod patterns;
pub mod rules;
mod world;

pub use cells::{Coord, Lattice, Tile};
pub use config::{Config, Soup};
pub use error::Error;
pub use generation::step;
pub use live_set::{LiveSet, Viewport, MAX_DISPLAY_TILES};
pub use patterns::Pattern;
pub use world::World;
