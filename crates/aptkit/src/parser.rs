//! Parser for `apt-get --just-print` output.
//!
//! Two independent things are read from the text:
//! ```text
//! Inst gnupg2 (2.0.19-2+deb7u2 Debian:7.6/stable [amd64])
//! Inst qemu-user [1.1.2+dfsg-6a+deb7u4] (2.1+dfsg-5~bpo70+1 Debian Backports:/wheezy-backports [amd64])
//! Remv nginx-naxsi [1.2.1-2.2+wheezy3]
//! 18 upgraded, 20 newly installed, 1 to remove and 3 not upgraded.
//! ```
//! the per-package `Inst`/`Remv` lines and the summary line. They are not
//! checked against each other here; see [`crate::reconcile`].

use crate::types::{PackageTransition, Summary, SummaryCounts};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

/// Diagnostic recorded when no summary line is found.
pub const UNPARSED_SUMMARY: &str = "Could not figure out what happened";

static SUMMARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)([0-9]+) upgraded, ([0-9]+) newly installed, ([0-9]+) to remove and ([0-9]+) not upgrade.",
    )
    .expect("summary pattern is valid")
});

// name, [old], (new misc), and a trailing bracket apt-get uses for
// breaks/arch annotations that is matched but not captured.
static DETAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:Remv|Inst) ([^ ]+)(?: \[([^\]]+)\])?(?: \(([^ ]+) (.*)\))?(?: \[.*\])?$")
        .expect("detail pattern is valid")
});

/// Extract the summary counts.
///
/// The first matching line wins. Counts are bound positionally:
/// upgraded, newly installed, to remove, not upgraded.
pub fn parse_summary(output: &str) -> Summary {
    let counts = SUMMARY_RE.captures(output).and_then(|caps| {
        let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
        Some(SummaryCounts {
            upgraded: field(1)?,
            newly_installed: field(2)?,
            removed: field(3)?,
            kept_back: field(4)?,
        })
    });

    match counts {
        Some(counts) => Summary::Counts(counts),
        None => Summary::Unparsed {
            diagnostic: UNPARSED_SUMMARY.to_string(),
        },
    }
}

/// Parse a single `Inst`/`Remv` line.
///
/// Returns `None` for anything that is not a package transition line.
pub fn parse_line(line: &str) -> Option<(String, PackageTransition)> {
    let caps = DETAIL_RE.captures(line)?;
    let capture = |i: usize| {
        caps.get(i)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .map(String::from)
    };

    let name = capture(1)?;
    Some((
        name,
        PackageTransition {
            old_version: capture(2),
            new_version: capture(3),
            misc: capture(4),
        },
    ))
}

/// Collect every package transition, keyed by package name.
///
/// A name seen twice keeps its first position but takes the fields of the
/// later line.
pub fn parse_transitions(output: &str) -> IndexMap<String, PackageTransition> {
    let mut packages = IndexMap::new();
    for (name, transition) in output.lines().filter_map(parse_line) {
        packages.insert(name, transition);
    }
    packages
}
