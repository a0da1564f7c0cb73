//! Interactive parameter prompt.
//!
//! Reads the classic token sequence from an input stream in strict order:
//! directedness, loops, output directory, vertex count, generator id, seed,
//! value id, graph id with its connectivities, then the action id and its
//! parameters. Any malformed or unsupported token is a fatal argument error.

use std::collections::VecDeque;
use std::io::BufRead;
use std::path::PathBuf;
use std::str::FromStr;

use ldev_core::errors::ErrorInfo;
use ldev_core::LdevError;

use crate::config::{ActionConfig, EnsembleConfig, GraphConfig, RunSpec};

/// Reads a full [`RunSpec`] from the token stream.
pub fn read_run_spec<R: BufRead>(input: &mut R) -> Result<RunSpec, LdevError> {
    let mut tokens = TokenReader::new(input);

    let directed = tokens.yes_no("is the graph directed")?;
    let loops_allowed = tokens.yes_no("are loops allowed")?;
    let output_directory = PathBuf::from(tokens.next("output directory")?);
    let vertices: usize = tokens.parse("number of vertices")?;

    let generator: u32 = tokens.parse("generator id")?;
    if generator != 0 {
        return Err(unsupported("unsupported-generator", "generator", generator));
    }
    let seed: u16 = tokens.parse("seed")?;

    let value: u32 = tokens.parse("value id")?;
    if value != 0 {
        return Err(unsupported("unsupported-value", "value", value));
    }

    let graph_id: u32 = tokens.parse("graph id")?;
    let ensemble = match graph_id {
        0 => EnsembleConfig::Er {
            connectivity: tokens.parse("connectivity")?,
        },
        1 => EnsembleConfig::Sbm {
            inter_connectivity: tokens.parse("inter-block connectivity")?,
            intra_connectivity: tokens.parse("intra-block connectivity")?,
            blocks: tokens.parse("number of blocks")?,
        },
        other => return Err(unsupported("unsupported-graph", "graph", other)),
    };

    let action_id: u32 = tokens.parse("action id")?;
    let action = match action_id {
        0 => ActionConfig::SimpleSampling {
            samples: tokens.parse("number of samples")?,
        },
        1 => ActionConfig::Metropolis {
            temperature: tokens.parse("temperature")?,
            sweeps: tokens.parse("number of sweeps")?,
            equilibration_sweeps: tokens.parse("equilibration sweeps")?,
        },
        2 => ActionConfig::Equilibration {
            temperature: tokens.parse("temperature")?,
            sweeps: tokens.parse("number of sweeps")?,
        },
        3 => ActionConfig::WangLandau {
            lower: tokens.parse("lower bound")?,
            upper: tokens.parse("upper bound")?,
            sweeps_to_evaluate: tokens.parse("sweeps per evaluation")?,
            final_factor: tokens.parse("final modification factor")?,
            canonical_acceptance: false,
        },
        other => return Err(unsupported("unsupported-action", "action", other)),
    };

    Ok(RunSpec {
        graph: GraphConfig {
            directed,
            loops_allowed,
            vertices,
            seed: u64::from(seed),
            ensemble,
        },
        output_directory,
        action,
    })
}

fn unsupported(code: &str, field: &str, value: u32) -> LdevError {
    LdevError::Argument(
        ErrorInfo::new(code, format!("unsupported {field} selector"))
            .with_context(field, value.to_string()),
    )
}

/// Whitespace token scanner over a buffered reader.
struct TokenReader<'a, R: BufRead> {
    input: &'a mut R,
    pending: VecDeque<String>,
}

impl<'a, R: BufRead> TokenReader<'a, R> {
    fn new(input: &'a mut R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next(&mut self, what: &str) -> Result<String, LdevError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            let read = self.input.read_line(&mut line).map_err(|err| {
                LdevError::Io(
                    ErrorInfo::new("prompt-read", err.to_string()).with_context("field", what),
                )
            })?;
            if read == 0 {
                return Err(LdevError::Argument(
                    ErrorInfo::new("missing-token", "ran out of input")
                        .with_context("field", what),
                ));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn parse<T>(&mut self, what: &str) -> Result<T, LdevError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let token = self.next(what)?;
        token.parse().map_err(|err: T::Err| {
            LdevError::Argument(
                ErrorInfo::new("invalid-number", err.to_string())
                    .with_context("field", what)
                    .with_context("token", token),
            )
        })
    }

    fn yes_no(&mut self, what: &str) -> Result<bool, LdevError> {
        let token = self.next(what)?;
        match token.as_str() {
            "y" => Ok(true),
            "n" => Ok(false),
            _ => Err(LdevError::Argument(
                ErrorInfo::new("invalid-answer", "expected y or n")
                    .with_context("field", what)
                    .with_context("token", token),
            )),
        }
    }
}
