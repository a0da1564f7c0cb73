//! Output sink: run directory, data-file naming and the run manifest.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use ldev_core::errors::ErrorInfo;
use ldev_core::LdevError;
use serde::{Deserialize, Serialize};

use crate::config::RunSpec;

/// Owns the directory every data file of a run lands in.
#[derive(Debug)]
pub struct RunSink {
    directory: PathBuf,
}

impl RunSink {
    /// Opens (and creates, if needed) the output directory.
    pub fn new(directory: &Path) -> Result<Self, LdevError> {
        fs::create_dir_all(directory)
            .map_err(|err| sink_error("create-output-directory", directory, &err))?;
        Ok(Self {
            directory: directory.to_path_buf(),
        })
    }

    /// Absolute path for a data file of this run.
    pub fn path(&self, file_name: &str) -> PathBuf {
        self.directory.join(file_name)
    }

    /// Creates a buffered writer for a fresh data file.
    pub fn create(&self, file_name: &str) -> Result<BufWriter<File>, LdevError> {
        let path = self.path(file_name);
        let file = File::create(&path).map_err(|err| sink_error("create-data-file", &path, &err))?;
        Ok(BufWriter::new(file))
    }

    /// Writes the `run.json` manifest describing the run and its artefacts.
    pub fn write_manifest(&self, manifest: &RunManifest) -> Result<(), LdevError> {
        let path = self.path("run.json");
        let rendered = serde_json::to_string_pretty(manifest)
            .map_err(|err| sink_error("render-manifest", &path, &err))?;
        fs::write(&path, rendered).map_err(|err| sink_error("write-manifest", &path, &err))
    }
}

/// Flushes a data-file writer, mapping the failure into the sink error
/// family.
pub fn finish<W: Write>(mut writer: W, file_name: &str) -> Result<(), LdevError> {
    writer
        .flush()
        .map_err(|err| sink_error("flush-data-file", Path::new(file_name), &err))
}

/// Reproducibility record written next to the data files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    /// The configuration the run executed.
    pub config: RunSpec,
    /// Names of the data files the run produced, in creation order.
    pub data_files: Vec<String>,
}

pub(crate) fn sink_error(
    code: &str,
    path: &Path,
    err: &dyn std::fmt::Display,
) -> LdevError {
    LdevError::Io(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}

/// Data-file names of the individual actions; kept in one place so tests
/// and the manifest agree with the writers.
pub mod names {
    /// Per-sample record of a simple-sampling run.
    pub fn simple_sampling(n: usize, samples: usize) -> String {
        format!("ss_{n}_{samples}.dat")
    }

    /// Histogram of a simple-sampling run.
    pub fn simple_sampling_histogram(n: usize, samples: usize) -> String {
        format!("hist_ss_{n}_{samples}.dat")
    }

    /// Per-sweep record of a Metropolis run.
    pub fn metropolis(n: usize, sweeps: usize, temperature: f64) -> String {
        format!("is_{n}_{sweeps}_{temperature}.dat")
    }

    /// Histogram of a Metropolis run.
    pub fn metropolis_histogram(n: usize, sweeps: usize, temperature: f64) -> String {
        format!("hist_is_{n}_{sweeps}_{temperature}.dat")
    }

    /// Four-chain trace of the equilibration probe.
    pub fn equilibration(n: usize, sweeps: usize, temperature: f64) -> String {
        format!("equiExperiment_{n}_{sweeps}_{temperature}.dat")
    }

    /// Progress log of a Wang–Landau run.
    pub fn wang_landau_progress(
        n: usize,
        lower: usize,
        upper: usize,
        sweeps_to_evaluate: usize,
        final_factor: f64,
    ) -> String {
        format!("wl_{n}_{lower}_{upper}_{sweeps_to_evaluate}_{final_factor}.dat")
    }

    /// Histogram of a Wang–Landau run.
    pub fn wang_landau_histogram(n: usize, lower: usize, upper: usize) -> String {
        format!("hist_wl_{n}_{lower}_{upper}.dat")
    }

    /// Normalized density of states of a Wang–Landau run.
    pub fn density(n: usize, lower: usize, upper: usize) -> String {
        format!("density_{n}_{lower}_{upper}.dat")
    }
}
