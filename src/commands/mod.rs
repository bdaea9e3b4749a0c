pub mod check;
pub mod install;
pub mod parse;
pub mod upgrades;

use anyhow::{Result, anyhow};
use aptkit::SimulationReport;

use crate::Context as AppContext;
use crate::cli::OutputArgs;
use crate::render;

/// Create an aptkit client, with better error handling.
pub fn create_client(ctx: &AppContext) -> Result<aptkit::Client> {
    let result = match &ctx.apt_get {
        Some(path) => aptkit::Client::with_apt_get(path),
        None => aptkit::Client::new(),
    };

    result.map_err(|e| match e {
        aptkit::Error::AptNotFound => anyhow!(
            "apt-get was not found.\n\n  aptsim needs a Debian-family system (Debian, Ubuntu, Mint, ...).\n  Point it at apt-get with --apt-get <PATH> or `apt_get` in config.toml"
        ),
        e => anyhow!("Failed to initialize apt-get client: {e}"),
    })
}

/// Print a report in the requested format.
pub fn emit(ctx: &AppContext, report: &SimulationReport, output: OutputArgs) -> Result<()> {
    if output.json {
        return render::print_json(report);
    }
    render::print_report(report, output.raw || ctx.config.show_raw);
    Ok(())
}

/// Turn a fatal aptkit error into a message with advice.
pub fn explain(err: aptkit::Error) -> anyhow::Error {
    let category = err.category();
    anyhow!(
        "{}: {err}\n\n  {}",
        category.description(),
        category.advice()
    )
}
