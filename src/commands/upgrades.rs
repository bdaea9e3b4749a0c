//! `aptsim upgrades`: what would a dist-upgrade change.

use anyhow::Result;

use crate::Context as AppContext;
use crate::cli::UpgradesArgs;
use crate::commands::{create_client, emit, explain};
use crate::progress;
use crate::ui;

pub fn run(ctx: &AppContext, args: UpgradesArgs) -> Result<()> {
    let client = create_client(ctx)?;
    let refresh = args.refresh.resolve(ctx.config.refresh_upgrades);

    let quiet = ctx.quiet || args.output.json;
    if !quiet {
        ui::header("Simulating dist-upgrade");
        if refresh {
            ui::dim("Refreshing the package index first (needs root)");
        }
    }

    let message = if refresh {
        "Running apt-get update and dist-upgrade --just-print..."
    } else {
        "Running apt-get dist-upgrade --just-print..."
    };
    let pb = progress::spinner(message, quiet);
    let result = client.list_upgrades(refresh);
    progress::finish_clear(&pb);

    let report = result.map_err(explain)?;
    emit(ctx, &report, args.output)
}
