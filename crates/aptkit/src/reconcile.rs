//! Cross-checks the summary line against the per-package lines.
//!
//! apt-get prints both, and they can disagree (truncated output, a line
//! shape the parser does not know, a translated summary). Disagreement is
//! recorded on the report; it never turns into an error.

use crate::parser;
use crate::types::{PackageTransition, SimulationReport, Summary, SummaryCounts, TransitionKind};
use indexmap::IndexMap;
use std::fmt;

/// Number of detail lines per [`TransitionKind`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Lines with no version info
    pub unversioned: u32,
    /// First-time installs
    pub new_installs: u32,
    /// Removals
    pub removals: u32,
    /// Upgrades
    pub upgrades: u32,
}

impl Tally {
    /// Count the transitions of each kind.
    pub fn of<'a>(transitions: impl IntoIterator<Item = &'a PackageTransition>) -> Self {
        let mut tally = Tally::default();
        for transition in transitions {
            *tally.slot(transition.kind()) += 1;
        }
        tally
    }

    /// Count for one kind.
    pub fn get(&self, kind: TransitionKind) -> u32 {
        match kind {
            TransitionKind::Unversioned => self.unversioned,
            TransitionKind::NewInstall => self.new_installs,
            TransitionKind::Removal => self.removals,
            TransitionKind::Upgrade => self.upgrades,
        }
    }

    fn slot(&mut self, kind: TransitionKind) -> &mut u32 {
        match kind {
            TransitionKind::Unversioned => &mut self.unversioned,
            TransitionKind::NewInstall => &mut self.new_installs,
            TransitionKind::Removal => &mut self.removals,
            TransitionKind::Upgrade => &mut self.upgrades,
        }
    }
}

/// One disagreement between the summary and the detail lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    /// Detail lines that carried no version at all
    NoVersionInfo {
        /// Number of such lines
        count: u32,
    },
    /// New installs found vs. `newly installed` in the summary
    NewPackages {
        /// Detail lines of this kind
        found: u32,
        /// Count from the summary line
        expected: u32,
    },
    /// Removals found vs. `to remove` in the summary
    Removals {
        /// Detail lines of this kind
        found: u32,
        /// Count from the summary line
        expected: u32,
    },
    /// Upgrades found vs. `upgraded` in the summary
    Upgrades {
        /// Detail lines of this kind
        found: u32,
        /// Count from the summary line
        expected: u32,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::NoVersionInfo { count } => write!(f, "{count} packages with no version info"),
            Mismatch::NewPackages { found, expected } => {
                write!(f, "found {found}/{expected} new packages")
            }
            Mismatch::Removals { found, expected } => {
                write!(f, "found {found}/{expected} packages to remove")
            }
            Mismatch::Upgrades { found, expected } => {
                write!(f, "found {found}/{expected} packages to upgrade")
            }
        }
    }
}

/// Compare detail lines against summary counts.
///
/// `kept_back` is not checked: apt-get prints no detail line for a package
/// it leaves alone.
pub fn reconcile(
    counts: &SummaryCounts,
    packages: &IndexMap<String, PackageTransition>,
) -> Vec<Mismatch> {
    let tally = Tally::of(packages.values());
    let mut mismatches = Vec::new();

    if tally.unversioned > 0 {
        mismatches.push(Mismatch::NoVersionInfo {
            count: tally.unversioned,
        });
    }
    if tally.new_installs != counts.newly_installed {
        mismatches.push(Mismatch::NewPackages {
            found: tally.new_installs,
            expected: counts.newly_installed,
        });
    }
    if tally.removals != counts.removed {
        mismatches.push(Mismatch::Removals {
            found: tally.removals,
            expected: counts.removed,
        });
    }
    if tally.upgrades != counts.upgraded {
        mismatches.push(Mismatch::Upgrades {
            found: tally.upgrades,
            expected: counts.upgraded,
        });
    }

    mismatches
}

/// Parse apt-get output and reconcile it into a report.
///
/// Pure: the same text always yields an equal report.
pub fn analyze(output: &str) -> SimulationReport {
    let summary = parser::parse_summary(output);
    let packages = parser::parse_transitions(output);

    let diagnostics = match &summary {
        Summary::Counts(counts) => {
            let mismatches = reconcile(counts, &packages);
            if mismatches.is_empty() {
                None
            } else {
                log::warn!(
                    "apt-get summary disagrees with {} detail lines: {} problem(s)",
                    packages.len(),
                    mismatches.len()
                );
                Some(
                    mismatches
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("\n"),
                )
            }
        }
        Summary::Unparsed { diagnostic } => {
            log::warn!("no summary line in apt-get output ({} bytes)", output.len());
            Some(diagnostic.clone())
        }
    };

    let raw_output = diagnostics.as_ref().map(|_| output.to_string());

    SimulationReport {
        summary,
        packages,
        diagnostics,
        raw_output,
    }
}
