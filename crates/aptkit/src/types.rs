//! Core types for simulated apt operations.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Package counts from apt-get's summary line.
///
/// `18 upgraded, 20 newly installed, 1 to remove and 3 not upgraded.`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCounts {
    /// Packages that will be upgraded in place
    pub upgraded: u32,
    /// Packages that will be installed for the first time
    pub newly_installed: u32,
    /// Packages that will be removed
    pub removed: u32,
    /// Packages with an available upgrade that apt-get is holding back
    pub kept_back: u32,
}

/// The summary section of a report: either the four counts, or why they
/// could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Summary {
    /// The summary line was found
    Counts(SummaryCounts),
    /// No summary line matched
    Unparsed {
        /// Human-readable explanation
        diagnostic: String,
    },
}

impl Summary {
    /// The parsed counts, if the summary line was found.
    pub fn counts(&self) -> Option<&SummaryCounts> {
        match self {
            Summary::Counts(counts) => Some(counts),
            Summary::Unparsed { .. } => None,
        }
    }

    /// The diagnostic, if the summary line was not found.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Summary::Counts(_) => None,
            Summary::Unparsed { diagnostic } => Some(diagnostic),
        }
    }
}

/// What will happen to one package, as reported by a `Inst`/`Remv` line.
///
/// Values are the raw substrings apt-get printed; no version semantics are
/// applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageTransition {
    /// Version currently installed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_version: Option<String>,
    /// Version installed after the operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_version: Option<String>,
    /// Trailing annotation, e.g. `Debian:12.5/stable [amd64]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub misc: Option<String>,
}

impl PackageTransition {
    /// Classify this transition by which versions are known.
    pub fn kind(&self) -> TransitionKind {
        TransitionKind::from_presence(self.old_version.is_some(), self.new_version.is_some())
    }
}

/// Category of a package transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// Neither version was recovered
    Unversioned,
    /// Only a new version: first-time install
    NewInstall,
    /// Only an old version: removal
    Removal,
    /// Both versions: upgrade (or downgrade)
    Upgrade,
}

impl TransitionKind {
    /// All kinds, in display order.
    pub const ALL: [TransitionKind; 4] = [
        TransitionKind::Upgrade,
        TransitionKind::NewInstall,
        TransitionKind::Removal,
        TransitionKind::Unversioned,
    ];

    /// Derive the kind from whether the old and new versions are present.
    pub fn from_presence(has_old: bool, has_new: bool) -> Self {
        match (has_old, has_new) {
            (false, false) => TransitionKind::Unversioned,
            (false, true) => TransitionKind::NewInstall,
            (true, false) => TransitionKind::Removal,
            (true, true) => TransitionKind::Upgrade,
        }
    }

    /// Short label used in listings.
    pub fn label(&self) -> &'static str {
        match self {
            TransitionKind::Unversioned => "unknown",
            TransitionKind::NewInstall => "new",
            TransitionKind::Removal => "remove",
            TransitionKind::Upgrade => "upgrade",
        }
    }
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Structured result of one simulated operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Aggregate counts, or why they are missing
    pub summary: Summary,
    /// Per-package transitions, in order of first appearance
    pub packages: IndexMap<String, PackageTransition>,
    /// Newline-separated reconciliation problems
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<String>,
    /// apt-get output the report was built from, kept only when
    /// `diagnostics` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_output: Option<String>,
}

impl SimulationReport {
    /// Whether the summary and the detail lines disagreed or the summary was
    /// missing.
    pub fn has_diagnostics(&self) -> bool {
        self.diagnostics.is_some()
    }

    /// Packages of one kind, in report order.
    pub fn packages_of_kind(&self, kind: TransitionKind) -> Vec<(&str, &PackageTransition)> {
        self.packages
            .iter()
            .filter(|(_, t)| t.kind() == kind)
            .map(|(name, t)| (name.as_str(), t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(old: Option<&str>, new: Option<&str>) -> PackageTransition {
        PackageTransition {
            old_version: old.map(String::from),
            new_version: new.map(String::from),
            misc: None,
        }
    }

    #[test]
    fn test_kind_from_versions() {
        assert_eq!(transition(None, None).kind(), TransitionKind::Unversioned);
        assert_eq!(transition(None, Some("2.0")).kind(), TransitionKind::NewInstall);
        assert_eq!(transition(Some("1.0"), None).kind(), TransitionKind::Removal);
        assert_eq!(transition(Some("1.0"), Some("2.0")).kind(), TransitionKind::Upgrade);
    }

    #[test]
    fn test_summary_accessors() {
        let counts = Summary::Counts(SummaryCounts {
            upgraded: 1,
            ..Default::default()
        });
        assert_eq!(counts.counts().map(|c| c.upgraded), Some(1));
        assert!(counts.diagnostic().is_none());

        let unparsed = Summary::Unparsed {
            diagnostic: "nope".to_string(),
        };
        assert!(unparsed.counts().is_none());
        assert_eq!(unparsed.diagnostic(), Some("nope"));
    }

    #[test]
    fn test_packages_of_kind_keeps_order() {
        let mut packages = IndexMap::new();
        packages.insert("zlib1g".to_string(), transition(Some("1"), Some("2")));
        packages.insert("curl".to_string(), transition(None, Some("8")));
        packages.insert("apt".to_string(), transition(Some("2.6"), Some("2.7")));

        let report = SimulationReport {
            summary: Summary::Counts(SummaryCounts::default()),
            packages,
            diagnostics: None,
            raw_output: None,
        };

        let upgrades: Vec<&str> = report
            .packages_of_kind(TransitionKind::Upgrade)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(upgrades, vec!["zlib1g", "apt"]);
        assert!(!report.has_diagnostics());
    }

    #[test]
    fn test_report_json_omits_missing_fields() {
        let mut packages = IndexMap::new();
        packages.insert("nginx".to_string(), transition(Some("1.2.1"), None));
        let report = SimulationReport {
            summary: Summary::Unparsed {
                diagnostic: "Could not figure out what happened".to_string(),
            },
            packages,
            diagnostics: None,
            raw_output: None,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json["summary"]["unparsed"]["diagnostic"],
            "Could not figure out what happened"
        );
        assert_eq!(json["packages"]["nginx"]["old_version"], "1.2.1");
        assert!(json["packages"]["nginx"].get("new_version").is_none());
        assert!(json.get("diagnostics").is_none());
    }
}
