use thiserror::Error;

use crate::geometry::Coordinate;

/// Planner error type
#[derive(Error, Debug)]
pub enum PlannerError {
    /// The frontier was exhausted before reaching the goal
    /// A normal outcome when the endpoints are disconnected, not a fault
    #[error("no path found between the requested endpoints")]
    NoPathFound,

    /// Start or end coordinate is out of grid bounds or on a blocked cell
    #[error("endpoint {0} is out of bounds or blocked")]
    InvalidEndpoint(Coordinate),

    /// Requested endpoint name has no entry in the endpoint file
    #[error("unknown endpoint name: {0}")]
    UnknownEndpoint(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("resource unavailable: {0}")]
    Resource(#[from] std::io::Error),

    #[error("image decode failed: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
