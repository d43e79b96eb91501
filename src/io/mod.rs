
mod endpoints;
mod image_grid;
mod path_writer;

pub use endpoints::{EndpointMap, parse_endpoints, read_endpoints, resolve};
pub use image_grid::grid_from_image;
pub use path_writer::{format_path, write_path};
