//! `aptsim install`: what would installing some packages change.

use anyhow::Result;

use crate::Context as AppContext;
use crate::cli::InstallArgs;
use crate::commands::{create_client, emit, explain};
use crate::progress;
use crate::ui;

pub fn run(ctx: &AppContext, args: InstallArgs) -> Result<()> {
    let client = create_client(ctx)?;
    let refresh = args.refresh.resolve(ctx.config.refresh_install);

    let quiet = ctx.quiet || args.output.json;
    if !quiet {
        ui::header(&format!("Simulating install of {}", args.packages.join(", ")));
    }

    let pb = progress::spinner("Running apt-get install --just-print...", quiet);
    let result = client.list_install(None, refresh, Some(args.packages.as_slice()));
    progress::finish_clear(&pb);

    let report = result.map_err(explain)?;
    emit(ctx, &report, args.output)
}
