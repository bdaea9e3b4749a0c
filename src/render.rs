//! Human and JSON rendering of simulation reports.

use anyhow::Result;
use aptkit::{PackageTransition, SimulationReport, SummaryCounts, TransitionKind};
use colored::Colorize;

use crate::ui;

/// Print the report as pretty JSON.
pub fn print_json(report: &SimulationReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Print the report for a terminal.
pub fn print_report(report: &SimulationReport, show_raw: bool) {
    match report.summary.counts() {
        Some(counts) => println!("  {}", summary_line(counts)),
        None => ui::warn(report.summary.diagnostic().unwrap_or_default()),
    }

    if report.packages.is_empty() {
        println!();
        ui::success("Nothing to do");
    }

    for kind in TransitionKind::ALL {
        let packages = report.packages_of_kind(kind);
        if packages.is_empty() {
            continue;
        }
        ui::section(&format!("{} ({})", section_title(kind), packages.len()));
        let width = packages.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        for (name, transition) in packages {
            println!("  {:<width$}  {}", name, describe(transition));
        }
    }

    if let Some(diagnostics) = &report.diagnostics {
        ui::section("Diagnostics");
        for line in diagnostics.lines() {
            println!("  {}", line.yellow());
        }
        if !show_raw {
            ui::dim("Re-run with --raw to see apt-get's output");
        }
    }

    if show_raw && let Some(raw) = &report.raw_output {
        ui::section("apt-get output");
        for line in raw.lines() {
            println!("  {}", line.dimmed());
        }
    }
}

/// Colored one-line summary of the counts.
fn summary_line(counts: &SummaryCounts) -> String {
    format!(
        "{} upgraded, {} newly installed, {} to remove, {} not upgraded",
        counts.upgraded.to_string().green(),
        counts.newly_installed.to_string().blue(),
        counts.removed.to_string().red(),
        counts.kept_back.to_string().yellow()
    )
}

fn section_title(kind: TransitionKind) -> &'static str {
    match kind {
        TransitionKind::Upgrade => "Upgrade",
        TransitionKind::NewInstall => "New",
        TransitionKind::Removal => "Remove",
        TransitionKind::Unversioned => "No version info",
    }
}

/// `old -> new  misc` with absent versions shown as `-`.
fn describe(transition: &PackageTransition) -> String {
    let versions = format!(
        "{} -> {}",
        transition.old_version.as_deref().unwrap_or("-"),
        transition.new_version.as_deref().unwrap_or("-")
    );
    match &transition.misc {
        Some(misc) => format!("{versions}  {}", misc.dimmed()),
        None => versions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_removal() {
        colored::control::set_override(false);
        let t = PackageTransition {
            old_version: Some("1.21.3-1+b2".to_string()),
            new_version: None,
            misc: None,
        };
        assert_eq!(describe(&t), "1.21.3-1+b2 -> -");
    }

    #[test]
    fn test_describe_with_misc() {
        colored::control::set_override(false);
        let t = PackageTransition {
            old_version: None,
            new_version: Some("8.0".to_string()),
            misc: Some("Debian:13/testing [amd64]".to_string()),
        };
        assert_eq!(describe(&t), "- -> 8.0  Debian:13/testing [amd64]");
    }

    #[test]
    fn test_summary_line_plain() {
        colored::control::set_override(false);
        let counts = SummaryCounts {
            upgraded: 2,
            newly_installed: 1,
            removed: 1,
            kept_back: 0,
        };
        assert_eq!(
            summary_line(&counts),
            "2 upgraded, 1 newly installed, 1 to remove, 0 not upgraded"
        );
    }
}
