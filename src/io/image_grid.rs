use std::path::Path;

use image::GrayImage;
use image::imageops::FilterType;
use log::info;

use crate::errors::Result;
use crate::grid::Grid;


/// Build an occupancy grid from an obstacle mask image
///
/// The image is decoded, converted to grayscale, resized to
/// `resolution` x `resolution` cells and thresholded: pixels with luma at
/// or above `threshold` become obstacles. One pixel maps to one cell,
/// row-major, so pixel (x, y) lands at coordinate (row=y, col=x).
pub fn grid_from_image(path: &Path, resolution: u32, threshold: u8) -> Result<Grid> {
    let img = image::open(path)?;
    let gray = img
        .resize_exact(resolution, resolution, FilterType::Nearest)
        .to_luma8();
    let grid = binarize(&gray, threshold)?;
    info!(
        "built {}x{} occupancy grid from {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );
    Ok(grid)
}

fn binarize(gray: &GrayImage, threshold: u8) -> Result<Grid> {
    let (width, height) = gray.dimensions();
    let mut blocked = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            let luma = gray.get_pixel(x, y)[0];
            blocked.push(luma >= threshold);
        }
    }
    Grid::from_cells(height as usize, width as usize, blocked)
}
