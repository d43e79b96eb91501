use std::path::Path;

use crate::errors::Result;
use crate::geometry::Coordinate;


/// Render a path as `row,col` lines in start-to-end order
pub fn format_path(path: &[Coordinate]) -> String {
    let mut out = String::new();
    for coord in path {
        out.push_str(&format!("{},{}\n", coord.row, coord.col));
    }
    out
}

/// Persist a path to a text file, one coordinate per line
pub fn write_path(path: &[Coordinate], destination: &Path) -> Result<()> {
    std::fs::write(destination, format_path(path))?;
    Ok(())
}
