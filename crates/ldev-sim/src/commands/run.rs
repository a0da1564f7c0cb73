use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Args;
use ldev_mcmc::{prompt, RunSpec, Simulation};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// YAML run description; when omitted the parameters are read from
    /// stdin in the classic token order.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &RunArgs) -> Result<(), Box<dyn Error>> {
    let spec = match &args.config {
        Some(path) => load_spec(path)?,
        None => {
            let mut input = io::stdin().lock();
            prompt::read_run_spec(&mut input)?
        }
    };
    let mut simulation = Simulation::new(spec)?;
    simulation.run()?;
    Ok(())
}

fn load_spec(path: &Path) -> Result<RunSpec, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let spec: RunSpec = serde_yaml::from_str(&text)?;
    Ok(spec)
}
