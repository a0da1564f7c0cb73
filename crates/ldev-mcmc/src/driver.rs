//! Sampling drivers and the orchestrator owning a run's state.

use std::io::Write;

use ldev_core::{LdevError, RngHandle};
use ldev_graph::{EnsemblePolicy, ErPolicy, GraphState, SbmPolicy};

use crate::config::{ActionConfig, EnsembleConfig, RunSpec};
use crate::histogram::Histogram;
use crate::observable::{LargestComponent, Observable};
use crate::output::{self, names, RunManifest, RunSink};

/// Canonical initial states of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartCondition {
    /// Fully connected graph, no loops.
    Complete,
    /// All vertices aligned on one line.
    Line,
    /// A fresh draw from the ensemble.
    Random,
    /// No edges at all.
    Empty,
}

/// Owns everything a sampling run touches: configuration, RNG, histogram,
/// observable and the output sink. Built once in `main` and passed by
/// reference; there is no process-wide state.
pub struct Simulation {
    pub(crate) spec: RunSpec,
    pub(crate) rng: RngHandle,
    pub(crate) histogram: Histogram,
    pub(crate) observable: Box<dyn Observable>,
    pub(crate) sink: RunSink,
    pub(crate) data_files: Vec<String>,
}

impl Simulation {
    /// Validates the configuration and sets up the run state.
    pub fn new(spec: RunSpec) -> Result<Self, LdevError> {
        spec.validate()?;
        let sink = RunSink::new(&spec.output_directory)?;
        let rng = RngHandle::from_seed(spec.graph.seed);
        let histogram = Histogram::new(spec.graph.vertices);
        Ok(Self {
            spec,
            rng,
            histogram,
            observable: Box::new(LargestComponent),
            sink,
            data_files: Vec::new(),
        })
    }

    /// Executes the configured action and writes the run manifest.
    pub fn run(&mut self) -> Result<(), LdevError> {
        match self.spec.action.clone() {
            ActionConfig::SimpleSampling { samples } => self.simple_sampling(samples)?,
            ActionConfig::Metropolis {
                temperature,
                sweeps,
                equilibration_sweeps,
            } => self.metropolis(temperature, sweeps, equilibration_sweeps)?,
            ActionConfig::Equilibration {
                temperature,
                sweeps,
            } => self.equilibration(temperature, sweeps)?,
            ActionConfig::WangLandau {
                lower,
                upper,
                sweeps_to_evaluate,
                final_factor,
                canonical_acceptance,
            } => self.wang_landau(
                lower,
                upper,
                sweeps_to_evaluate,
                final_factor,
                canonical_acceptance,
            )?,
        }
        let manifest = RunManifest {
            config: self.spec.clone(),
            data_files: self.data_files.clone(),
        };
        self.sink.write_manifest(&manifest)
    }

    /// Draws independent graphs and histograms the observable.
    fn simple_sampling(&mut self, samples: usize) -> Result<(), LdevError> {
        let n = self.spec.graph.vertices;
        let (mut graph, policy) = self.build_graph(StartCondition::Empty)?;
        let name = names::simple_sampling(n, samples);
        let mut out = self.sink.create(&name)?;
        for i in 0..samples {
            graph.generate_random(policy.as_ref(), &mut self.rng);
            let value = self.observable.value(&mut graph);
            let stats = self.observable.statistics(&mut graph);
            writeln!(
                out,
                "{} {} {} {}",
                i, value, stats.component_count, stats.edge_count
            )
            .map_err(|err| self.record_error(&name, err))?;
            self.histogram.increment(value as usize)?;
        }
        output::finish(out, &name)?;
        self.data_files.push(name);
        self.save_histogram(names::simple_sampling_histogram(n, samples))
    }

    /// Metropolis importance sampling: equilibrate silently, then record the
    /// observable once per sweep.
    fn metropolis(
        &mut self,
        temperature: f64,
        sweeps: usize,
        equilibration_sweeps: usize,
    ) -> Result<(), LdevError> {
        let n = self.spec.graph.vertices;
        let (mut graph, policy) = self.build_graph(StartCondition::Random)?;
        for _ in 0..n * equilibration_sweeps {
            self.metropolis_step(&mut graph, policy.as_ref(), temperature);
        }
        let name = names::metropolis(n, sweeps, temperature);
        let mut out = self.sink.create(&name)?;
        for i in 0..n * sweeps {
            self.metropolis_step(&mut graph, policy.as_ref(), temperature);
            if i % n == 0 {
                let value = self.observable.value(&mut graph);
                let stats = self.observable.statistics(&mut graph);
                writeln!(
                    out,
                    "{} {} {} {}",
                    (i + 1) / n,
                    value,
                    stats.component_count,
                    stats.edge_count
                )
                .map_err(|err| self.record_error(&name, err))?;
                self.histogram.increment(value as usize)?;
            }
        }
        output::finish(out, &name)?;
        self.data_files.push(name);
        self.save_histogram(names::metropolis_histogram(n, sweeps, temperature))
    }

    /// Runs four chains from the canonical start states in lock-step and
    /// traces their observables once per sweep. No convergence decision is
    /// computed; the trace is the output.
    fn equilibration(&mut self, temperature: f64, sweeps: usize) -> Result<(), LdevError> {
        let n = self.spec.graph.vertices;
        let mut chains = [
            self.build_graph(StartCondition::Complete)?,
            self.build_graph(StartCondition::Line)?,
            self.build_graph(StartCondition::Random)?,
            self.build_graph(StartCondition::Empty)?,
        ];
        let mut values = [0.0f64; 4];
        for (slot, (graph, _)) in chains.iter_mut().enumerate() {
            values[slot] = self.observable.value(graph);
        }

        let name = names::equilibration(n, sweeps, temperature);
        let mut out = self.sink.create(&name)?;
        writeln!(
            out,
            "0 {} {} {} {}",
            values[0], values[1], values[2], values[3]
        )
        .map_err(|err| self.record_error(&name, err))?;

        let mut steps = 0usize;
        while steps < n * sweeps {
            for (slot, (graph, policy)) in chains.iter_mut().enumerate() {
                self.metropolis_step(graph, policy.as_ref(), temperature);
                values[slot] = self.observable.value(graph);
            }
            steps += 1;
            if steps % n == 0 {
                writeln!(
                    out,
                    "{} {} {} {} {}",
                    steps / n,
                    values[0],
                    values[1],
                    values[2],
                    values[3]
                )
                .map_err(|err| self.record_error(&name, err))?;
            }
        }
        output::finish(out, &name)?;
        self.data_files.push(name);
        Ok(())
    }

    /// One elementary Metropolis step: propose, then accept with probability
    /// `min(1, exp(-(x' - x)/T))` or roll back.
    ///
    /// The acceptance noise is drawn strictly after the proposal has
    /// consumed its draws, so runs are reproducible from the seed alone.
    pub(crate) fn metropolis_step(
        &mut self,
        graph: &mut GraphState,
        policy: &dyn EnsemblePolicy,
        temperature: f64,
    ) {
        let current = self.observable.value(graph);
        let (vertex, undo) = graph.candidate(policy, &mut self.rng);
        let candidate = self.observable.value(graph);
        let exponent = (candidate - current) / temperature;
        let acceptance = (-exponent).exp().min(1.0);
        if !(self.rng.uniform() <= acceptance) {
            graph.revert(vertex, undo);
        }
    }

    /// Builds the configured ensemble policy, consuming the labeling draws
    /// for a block model.
    pub(crate) fn build_policy(&mut self) -> Result<Box<dyn EnsemblePolicy>, LdevError> {
        let n = self.spec.graph.vertices;
        match self.spec.graph.ensemble {
            EnsembleConfig::Er { connectivity } => Ok(Box::new(ErPolicy::new(connectivity, n))),
            EnsembleConfig::Sbm {
                inter_connectivity,
                intra_connectivity,
                blocks,
            } => Ok(Box::new(SbmPolicy::new(
                inter_connectivity,
                intra_connectivity,
                blocks,
                n,
                &mut self.rng,
            )?)),
        }
    }

    /// Builds a `(state, policy)` pair in the requested start condition.
    pub(crate) fn build_graph(
        &mut self,
        start: StartCondition,
    ) -> Result<(GraphState, Box<dyn EnsemblePolicy>), LdevError> {
        let policy = self.build_policy()?;
        let mut graph = GraphState::new(
            self.spec.graph.vertices,
            self.spec.graph.directed,
            self.spec.graph.loops_allowed,
        )?;
        match start {
            StartCondition::Complete => graph.generate_complete(),
            StartCondition::Line => graph.generate_line(),
            StartCondition::Random => graph.generate_random(policy.as_ref(), &mut self.rng),
            StartCondition::Empty => {}
        }
        Ok((graph, policy))
    }

    /// Writes the histogram under the given file name and records it in the
    /// manifest list.
    pub(crate) fn save_histogram(&mut self, name: String) -> Result<(), LdevError> {
        let mut out = self.sink.create(&name)?;
        self.histogram
            .write_dat(&mut out)
            .map_err(|err| self.record_error(&name, err))?;
        output::finish(out, &name)?;
        self.data_files.push(name);
        Ok(())
    }

    pub(crate) fn record_error(&self, name: &str, err: std::io::Error) -> LdevError {
        output::sink_error("write-record", &self.sink.path(name), &err)
    }
}
