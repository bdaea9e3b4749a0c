//! Example: Show what a dist-upgrade would do
//!
//! Run with: cargo run -p aptkit --example upgrades

use aptkit::{Client, TransitionKind};

fn main() -> aptkit::Result<()> {
    let client = Client::new()?;

    // No refresh: apt-get update needs root
    let report = client.list_upgrades(false)?;

    if let Some(counts) = report.summary.counts() {
        println!(
            "{} upgraded, {} new, {} to remove, {} kept back",
            counts.upgraded, counts.newly_installed, counts.removed, counts.kept_back
        );
    }
    println!("{:-<60}", "");

    for kind in TransitionKind::ALL {
        for (name, t) in report.packages_of_kind(kind) {
            println!(
                "{:<8} {:<32} {} -> {}",
                kind.label(),
                name,
                t.old_version.as_deref().unwrap_or("-"),
                t.new_version.as_deref().unwrap_or("-")
            );
        }
    }

    if let Some(diagnostics) = &report.diagnostics {
        eprintln!("\n{diagnostics}");
    }

    Ok(())
}
