mod config;
mod data;
mod error;
mod pipeline;
mod transform;
mod viewer;

use anyhow::Result;
use clap::Parser;

use config::{Cli, RunConfig};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = RunConfig::resolve(&cli)?;

    let input = match cli.input.clone().or_else(viewer::pick_input_file) {
        Some(path) => path,
        None => {
            log::info!("No input file selected");
            if config.view {
                viewer::run(config, None)?;
            }
            return Ok(());
        }
    };
    println!("{}", input.display());

    let outcome = pipeline::run(&input, &config)?;
    println!(
        "nDFT was successful. elapsed time: {:.3}s",
        outcome.elapsed.as_secs_f64()
    );

    if config.view {
        viewer::run(config, Some(outcome))?;
    }
    Ok(())
}
