//! Grid path planning over image-derived occupancy maps
//!
//! The core is an A* search ([`find_path`]) over an immutable occupancy
//! [`Grid`] with 8-directional movement and true diagonal costs. Around it
//! sit small adapters: building a grid from an obstacle mask image, reading
//! named endpoints from a text file, and persisting the resulting path.

mod collections;

pub mod config;
pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod grid;
pub mod io;

pub use config::PlannerConfig;
pub use errors::{PlannerError, Result};
pub use geometry::Coordinate;
pub use graph_algos::find_path;
pub use grid::Grid;
