use std::path::PathBuf;

use argh::FromArgs;
use vecmat::projection::{projection, write_matrix_txt};

#[derive(FromArgs, Debug)]
/// Build a perspective projection matrix and write it to a text file.
struct Args {
    /// vertical field of view in degrees
    #[argh(option, default = "90.0")]
    fov: f64,

    /// aspect ratio, width over height
    #[argh(option, default = "16.0 / 9.0")]
    ratio: f64,

    /// distance to the near clipping plane
    #[argh(option, default = "0.1")]
    near: f64,

    /// distance to the far clipping plane
    #[argh(option, default = "100.0")]
    far: f64,

    /// path of the output file
    #[argh(option, short = 'o', default = "PathBuf::from(\"proj\")")]
    output: PathBuf,

    /// print the matrix and debug logs
    #[argh(switch, short = 'v')]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new().filter_level(level).init();

    let p = projection(args.fov.to_radians(), args.ratio, args.near, args.far)?;
    if args.verbose {
        println!("{p}");
    }

    write_matrix_txt(&args.output, &p)?;
    println!("Projection matrix written to {}", args.output.display());

    Ok(())
}
