//! Wang–Landau flat-histogram sampling with the `1/t` saturation rule.

use std::io::Write;

use ldev_core::LdevError;
use ldev_graph::{EnsemblePolicy, GraphState};

use crate::density::LogDensity;
use crate::driver::{Simulation, StartCondition};
use crate::output::{self, names};

impl Simulation {
    /// Flat-histogram estimation of the observable's density of states over
    /// the window `[lower, upper]`.
    ///
    /// The modification factor starts at `1` in log space (`f_0 = e`), is
    /// halved whenever the evaluation sweep finds every window bin
    /// populated, and is clamped to `1/t` once it first drops below it so
    /// the statistical error keeps shrinking instead of saturating. The run
    /// stops when the factor falls below `final_factor`.
    pub(crate) fn wang_landau(
        &mut self,
        lower: usize,
        upper: usize,
        sweeps_to_evaluate: usize,
        final_factor: f64,
        canonical_acceptance: bool,
    ) -> Result<(), LdevError> {
        let n = self.spec.graph.vertices;
        let mut density = LogDensity::new(n);
        let mut factor = 1.0f64;
        let (mut graph, policy) = self.build_graph(StartCondition::Empty)?;
        // Walk the empty graph into the window before the chain starts.
        while !((lower as f64) < self.observable.value(&mut graph)) {
            graph.add_random_edge(&mut self.rng);
        }

        let eval_steps = (n * sweeps_to_evaluate) as u64;
        let sweep_steps = n as u64;
        let mut saturated = false;

        let name = names::wang_landau_progress(n, lower, upper, sweeps_to_evaluate, final_factor);
        let mut progress = self.sink.create(&name)?;

        let mut step: u64 = 0;
        while factor >= final_factor {
            step += 1;
            self.wang_landau_step(
                &mut graph,
                policy.as_ref(),
                &density,
                lower,
                upper,
                canonical_acceptance,
            );
            let value = self.observable.value(&mut graph);
            density.bump(value as usize, factor);
            self.histogram.increment(value as usize)?;
            if step % (100 * sweep_steps) == 0 {
                let stats = self.observable.statistics(&mut graph);
                writeln!(
                    progress,
                    "{} {} {} {}",
                    (step + 1) / sweep_steps,
                    value,
                    stats.component_count,
                    stats.edge_count
                )
                .map_err(|err| self.record_error(&name, err))?;
            }

            let is_eval_sweep = step % eval_steps == 0;
            let is_sweep = step % sweep_steps == 0;
            // The 1/t clamp compares against t measured in sweeps.
            let inverse_time = n as f64 / step as f64;
            let factor_below_time = factor <= inverse_time;
            if is_eval_sweep
                && !factor_below_time
                && !saturated
                && self.histogram.all_bins_nonzero(lower, upper)
            {
                factor /= 2.0;
                if factor >= final_factor {
                    self.histogram.reset();
                }
            } else if is_sweep && (saturated || factor_below_time) {
                saturated = true;
                factor = inverse_time;
            }
        }
        output::finish(progress, &name)?;
        self.data_files.push(name);

        self.save_histogram(names::wang_landau_histogram(n, lower, upper))?;

        let density_name = names::density(n, lower, upper);
        let mut out = self.sink.create(&density_name)?;
        density
            .write_dat(lower, upper, step, &mut out)
            .map_err(|err| self.record_error(&density_name, err))?;
        output::finish(out, &density_name)?;
        self.data_files.push(density_name);
        Ok(())
    }

    /// One Wang–Landau step: propose, then accept with
    /// `min(1, exp(g[x]/g[x']))` (or the textbook `exp(g[x]-g[x'])` in
    /// canonical mode) and only while the candidate stays inside the window.
    ///
    /// The acceptance noise is drawn before the window test, so the draw
    /// count per step does not depend on the candidate value.
    fn wang_landau_step(
        &mut self,
        graph: &mut GraphState,
        policy: &dyn EnsemblePolicy,
        density: &LogDensity,
        lower: usize,
        upper: usize,
        canonical_acceptance: bool,
    ) {
        let current = self.observable.value(graph);
        let (vertex, undo) = graph.candidate(policy, &mut self.rng);
        let candidate = self.observable.value(graph);
        let current_log = density.get(current as usize);
        let candidate_log = density.get(candidate as usize);
        let exponent = if canonical_acceptance {
            current_log - candidate_log
        } else {
            current_log / candidate_log
        };
        let acceptance = exponent.exp().min(1.0);
        let draw = self.rng.uniform();
        let accepted = draw <= acceptance
            && candidate >= lower as f64
            && candidate <= upper as f64;
        if !accepted {
            graph.revert(vertex, undo);
        }
    }
}
