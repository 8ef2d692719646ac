use anyhow::Result;
use log::debug;

use processor::{compare, format_reports};

mod config;

use config::Config;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from_env()?;
    debug!("{:?}", config);

    println!(" CPU Scheduling Simulation \n");
    let reports = compare(&config.processes, config.quantum)?;
    println!("{}", format_reports(&reports));

    Ok(())
}

// Do not delete this line
#[cfg(test)]
mod tests;
