use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use gridpath::{PlannerConfig, PlannerError, find_path, io as planner_io};


/// Plan a shortest path between two named points on an image-derived grid
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Obstacle mask image
    #[arg(short, long)]
    image: PathBuf,

    /// Endpoint file, one `<name> (row, col)` entry per line
    #[arg(short, long)]
    endpoints: PathBuf,

    /// Output file for the computed path
    #[arg(short, long, default_value = "path.txt")]
    output: PathBuf,

    /// Side length of the square grid the image is resized to
    #[arg(long, default_value_t = 100)]
    resolution: u32,

    /// Grayscale cutoff; pixels at or above it become obstacles
    #[arg(long, default_value_t = 200)]
    threshold: u8,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> gridpath::Result<()> {
    let config = PlannerConfig {
        image: args.image,
        endpoints: args.endpoints,
        output: args.output,
        resolution: args.resolution,
        threshold: args.threshold,
    };

    let grid = planner_io::grid_from_image(&config.image, config.resolution, config.threshold)?;
    println!("Initial grid:");
    print!("{grid}");

    let endpoints = planner_io::read_endpoints(&config.endpoints)?;

    let start_name = prompt("Enter start endpoint name: ")?;
    let end_name = prompt("Enter end endpoint name: ")?;

    let plan = planner_io::resolve(&endpoints, &start_name).and_then(|start| {
        let end = planner_io::resolve(&endpoints, &end_name)?;
        find_path(&grid, start, end)
    });

    match plan {
        Ok(path) => {
            planner_io::write_path(&path, &config.output)?;
            println!("Path found. Saved to {}.", config.output.display());
        }
        // expected outcomes, report them without a process failure
        Err(
            e @ (PlannerError::NoPathFound
            | PlannerError::InvalidEndpoint(_)
            | PlannerError::UnknownEndpoint(_)),
        ) => {
            println!("{e}");
        }
        Err(e) => return Err(e),
    }

    Ok(())
}

fn prompt(message: &str) -> gridpath::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
