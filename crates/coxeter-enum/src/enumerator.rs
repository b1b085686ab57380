//! The enumeration driver.
//!
//! The driver alternates two moves until neither applies:
//! - **Propagation**: scan every line at every coset, adding forced edges
//!   and resolving coincidences, until a full pass changes nothing. After
//!   any merge the pass restarts from the base coset.
//! - **Definition**: create one new coset for the first undefined edge.
//!
//! When propagation is quiet and no edge is undefined the table is closed.

use std::time::{Duration, Instant};

use coxeter_words::Presentation;
use tracing::{debug, trace};

use crate::coset::CosetId;
use crate::error::EnumerationError;
use crate::table::CosetTable;

/// Configuration for coset enumeration.
///
/// Enumeration of a subgroup of infinite index never closes, so callers
/// should keep at least one bound in place.
#[derive(Clone, Debug)]
pub struct EnumerationConfig {
    /// Maximum number of live cosets (0 = no limit).
    pub max_cosets: usize,
    /// Maximum number of driver steps (0 = no limit).
    pub max_steps: usize,
    /// Wall-clock limit, checked between steps.
    pub time_limit: Option<Duration>,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            max_cosets: 1_000_000,
            max_steps: 0,
            time_limit: None,
        }
    }
}

/// Driver state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Undefined edges or unresolved scan lines may remain.
    Open,
    /// Every edge is defined and every scan line resolved.
    Closed,
}

/// Work done by one propagation to fixpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Propagation {
    /// Edges forced by scan lines.
    pub deductions: usize,
    /// Cosets removed by coincidences.
    pub coincidences: usize,
}

impl Propagation {
    /// Returns true if nothing changed.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.deductions == 0 && self.coincidences == 0
    }
}

/// One transition of the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Forced edges and coincidences were processed; no coset was created.
    Propagated(Propagation),
    /// A new coset was defined as the target of `coset --column-->`.
    Definition {
        /// Coset whose edge was undefined.
        coset: CosetId,
        /// Column of the undefined edge.
        column: usize,
        /// The new coset.
        new: CosetId,
    },
    /// Nothing left to do.
    Closed,
}

/// Counters accumulated over an enumeration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnumerationStats {
    /// Cosets created.
    pub definitions: usize,
    /// Edges forced by scan lines.
    pub deductions: usize,
    /// Cosets removed by coincidences.
    pub coincidences: usize,
    /// Driver steps taken.
    pub steps: usize,
    /// Largest number of live cosets at any point.
    pub peak_cosets: usize,
}

/// Todd–Coxeter coset enumerator.
///
/// ```
/// use coxeter_enum::{EnumerationConfig, Enumerator};
/// use coxeter_words::Presentation;
///
/// let s3 = Presentation::parse(&["aa", "bbb", "abab"], &["1"]).unwrap();
/// let mut enumerator = Enumerator::new(&s3, EnumerationConfig::default());
/// enumerator.run().unwrap();
/// assert_eq!(enumerator.table().len(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct Enumerator {
    table: CosetTable,
    config: EnumerationConfig,
    state: State,
    stats: EnumerationStats,
}

impl Enumerator {
    /// Creates an enumerator holding only the base coset.
    #[must_use]
    pub fn new(presentation: &Presentation, config: EnumerationConfig) -> Self {
        Self::from_table(CosetTable::new(presentation), config)
    }

    /// Resumes enumeration on an existing table.
    #[must_use]
    pub fn from_table(table: CosetTable, config: EnumerationConfig) -> Self {
        let state = if table.is_closed() { State::Closed } else { State::Open };
        let stats = EnumerationStats {
            peak_cosets: table.len(),
            ..EnumerationStats::default()
        };
        Self {
            table,
            config,
            state,
            stats,
        }
    }

    /// Returns the current table.
    #[must_use]
    pub fn table(&self) -> &CosetTable {
        &self.table
    }

    /// Consumes the enumerator, returning its table.
    #[must_use]
    pub fn into_table(self) -> CosetTable {
        self.table
    }

    /// Returns the driver state.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the counters so far.
    #[must_use]
    pub fn stats(&self) -> EnumerationStats {
        self.stats
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &EnumerationConfig {
        &self.config
    }

    /// Takes one driver step.
    ///
    /// Propagates to a fixpoint first; only when that changes nothing is a
    /// new coset defined. A closed table stays closed and steps on it do
    /// no work.
    ///
    /// # Errors
    ///
    /// Returns `CosetLimit` when a definition would exceed `max_cosets`,
    /// or `EdgeConflict` on an internal inconsistency.
    pub fn step(&mut self) -> Result<Step, EnumerationError> {
        self.stats.steps += 1;

        let propagation = self.propagate()?;
        if !propagation.is_quiet() {
            self.state = State::Open;
            return Ok(Step::Propagated(propagation));
        }

        match self.table.find_definition_candidate() {
            Some((coset, column)) => {
                if self.config.max_cosets > 0 && self.table.len() >= self.config.max_cosets {
                    return Err(EnumerationError::CosetLimit {
                        limit: self.config.max_cosets,
                    });
                }
                let new = self.table.define(coset, column)?;
                self.stats.definitions += 1;
                self.stats.peak_cosets = self.stats.peak_cosets.max(self.table.len());
                self.state = State::Open;
                Ok(Step::Definition { coset, column, new })
            }
            None => {
                if self.state == State::Open {
                    debug!(index = self.table.len(), stats = ?self.stats, "coset table closed");
                }
                self.state = State::Closed;
                Ok(Step::Closed)
            }
        }
    }

    /// Runs until the table closes.
    ///
    /// Running again on a closed table performs no definitions and no
    /// coincidences.
    ///
    /// # Errors
    ///
    /// Returns a limit error when a configured bound is hit; the partial
    /// table stays available through [`Enumerator::table`].
    #[tracing::instrument(skip(self))]
    pub fn run(&mut self) -> Result<EnumerationStats, EnumerationError> {
        let started = Instant::now();
        let first_step = self.stats.steps;

        loop {
            if self.config.max_steps > 0 && self.stats.steps - first_step >= self.config.max_steps {
                return Err(EnumerationError::StepLimit {
                    limit: self.config.max_steps,
                });
            }
            if let Some(limit) = self.config.time_limit {
                if started.elapsed() > limit {
                    return Err(EnumerationError::TimeLimit { limit });
                }
            }

            if self.step()? == Step::Closed {
                return Ok(self.stats);
            }
        }
    }

    /// Scans all lines at all cosets until a full pass changes nothing.
    fn propagate(&mut self) -> Result<Propagation, EnumerationError> {
        let mut report = Propagation::default();

        'rescan: loop {
            let mut changed = false;
            let mut index = 0;

            while index < self.table.len() {
                let coset = CosetId::from_index(index);
                let scan = self.table.scan_class(coset)?;
                if scan.deductions > 0 {
                    changed = true;
                    report.deductions += scan.deductions;
                }
                if let Some((a, b)) = scan.coincidence {
                    let merged = self.table.merge(a, b);
                    trace!(%a, %b, merged, "coincidence");
                    report.coincidences += merged;
                    continue 'rescan;
                }
                index += 1;
            }

            if !changed {
                break;
            }
        }

        self.stats.deductions += report.deductions;
        self.stats.coincidences += report.coincidences;
        Ok(report)
    }
}

/// Enumerates the cosets of a presentation's subgroup to completion.
///
/// # Errors
///
/// Returns a limit error if the table does not close within `config`.
pub fn enumerate(presentation: &Presentation, config: EnumerationConfig) -> Result<CosetTable, EnumerationError> {
    let mut enumerator = Enumerator::new(presentation, config);
    enumerator.run()?;
    Ok(enumerator.into_table())
}
