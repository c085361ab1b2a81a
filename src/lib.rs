//! # Marga-Nav: grid path search
//!
//! Routes an agent across an n×n grid from a start cell to a goal cell
//! using two heuristic search strategies with deliberately different
//! obstacle semantics:
//!
//! - [`beam`]: adaptive beam search. Layer-by-layer expansion keeping
//!   only the best K successors per layer, with K derived from board size
//!   and obstacle density. Obstacles are *soft*: passable at triple cost.
//! - [`weighted`]: dynamic weighting search. A weighted-A* variant whose
//!   heuristic weight decays with depth. Obstacles are *hard*: blocked.
//!
//! Both engines are pure, synchronous functions of
//! (grid, start, goal): no shared state, no I/O, safe to call from any
//! number of threads at once. "No path" is a normal `Ok(None)` result;
//! errors are reserved for contract violations such as out-of-bounds
//! endpoints.
//!
//! ## Quick start
//!
//! ```rust
//! use marga_nav::core::{Cell, Grid};
//! use marga_nav::{beam, weighted};
//!
//! let obstacles = [(1, 1), (2, 0), (2, 3), (3, 1), (4, 2)]
//!     .into_iter()
//!     .map(|(r, c)| Cell::new(r, c))
//!     .collect();
//! let grid = Grid::new(5, obstacles);
//!
//! let path = beam::find_path(&grid, Cell::new(0, 0), Cell::new(4, 4))?;
//! assert!(path.is_some());
//!
//! let path = weighted::find_path(&grid, Cell::new(0, 0), Cell::new(4, 4))?;
//! assert!(path.is_some());
//! # Ok::<(), marga_nav::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`core`]: cells, the grid model, and the Manhattan heuristic
//! - [`beam`]: the beam search engine
//! - [`weighted`]: the dynamic weighting engine
//! - [`io`]: the map description file format (collaborator layer)
//! - [`config`]: CLI configuration (collaborator layer)

pub mod beam;
pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod weighted;

pub use beam::BeamPlanner;
pub use core::{Cell, Grid};
pub use error::{Error, Result};
pub use weighted::{DynamicWeightingConfig, DynamicWeightingPlanner};
