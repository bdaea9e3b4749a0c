//! `aptsim parse`: analyze output captured earlier, without apt-get.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use crate::Context as AppContext;
use crate::cli::ParseArgs;
use crate::commands::emit;
use crate::ui;

pub fn run(ctx: &AppContext, args: ParseArgs) -> Result<()> {
    let output = read_input(&args.file)?;
    let report = aptkit::analyze(&output);

    if !ctx.quiet && !args.output.json {
        ui::header(&format!("Simulation report for {}", args.file.display()));
    }
    emit(ctx, &report, args.output)
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Could not read apt-get output from stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display()))
}
