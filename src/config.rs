use std::path::PathBuf;


/// Resource locations and grid parameters for one planning run
/// Every path is supplied by the caller - nothing here defaults to a
/// machine-specific location
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    /// Obstacle mask image to derive the grid from
    pub image: PathBuf,
    /// Text file mapping endpoint names to coordinates
    pub endpoints: PathBuf,
    /// Destination for the computed path
    pub output: PathBuf,
    /// Side length of the square grid the image is resized to
    pub resolution: u32,
    /// Grayscale cutoff: pixels at or above it become obstacles
    pub threshold: u8,
}
