use std::error::Error;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;
use ldev_core::RngHandle;
use ldev_graph::{write_graphviz, GraphState, SbmPolicy};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Directory receiving the Graphviz file.
    #[arg(long)]
    pub dir: PathBuf,
    /// File name without the `.gv` extension.
    #[arg(long)]
    pub file: String,
    /// Number of vertices.
    #[arg(long)]
    pub n: usize,
    /// Number of blocks.
    #[arg(long)]
    pub blocks: usize,
    /// Inter-block connectivity.
    #[arg(long)]
    pub c_inter: f64,
    /// Intra-block connectivity.
    #[arg(long)]
    pub c_intra: f64,
    /// Seed for the random number generator.
    #[arg(long)]
    pub seed: u16,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let mut rng = RngHandle::from_seed(u64::from(args.seed));
    let policy = SbmPolicy::new(args.c_inter, args.c_intra, args.blocks, args.n, &mut rng)?;
    let mut graph = GraphState::new(args.n, false, false)?;
    graph.generate_random(&policy, &mut rng);

    fs::create_dir_all(&args.dir)?;
    let path = args.dir.join(format!("{}.gv", args.file));
    let mut writer = BufWriter::new(File::create(&path)?);
    write_graphviz(&graph, Some(policy.labeling()), &mut writer)?;
    writer.flush()?;

    println!("{}", graph.largest_component_size());
    Ok(())
}
