//! Reads a WKT collection of multi line strings, simplifies it and prints the vertices as `vec2` records in radians.
//!
//! ```shell
//! linework < coastline.wkt > coastline.glsl
//! ```
//!
//! Point counts before and after simplification are printed to stderr, one per line.

use std::io::{self, BufWriter, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use linework::emit::write_vec2;
use linework::settings::{load_settings, CliArgs};
use linework::{GeometryParser, Pipeline, PipelineOptions, WktParser};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();
    let settings = load_settings(&args)?;

    let input = match &settings.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {path:?}"))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read standard input")?;
            buf
        }
    };

    let geom = WktParser.parse(&input)?;
    let output = Pipeline::new(PipelineOptions::from(&settings)).run(&geom)?;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{}", output.points_before)?;
    writeln!(stderr, "{}", output.points_after)?;

    let mut stdout = BufWriter::new(io::stdout().lock());
    write_vec2(&mut stdout, &output.lines)?;
    stdout.flush()?;

    Ok(())
}
