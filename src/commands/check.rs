//! `aptsim check`: can this host run simulations at all.

use anyhow::Result;
use aptkit::platform;

use crate::Context as AppContext;
use crate::commands::create_client;
use crate::paths;
use crate::ui;

pub fn run(ctx: &AppContext) -> Result<()> {
    ui::header("aptsim check");

    let mut ok = true;

    match platform::detect() {
        Some(release) => {
            let name = release.pretty_name.clone().unwrap_or_else(|| release.id.clone());
            if release.is_debian_family() {
                ui::success(&format!("Debian-family system: {name}"));
            } else {
                ui::warn(&format!("Not a Debian-family system: {name}"));
                ok = false;
            }
        }
        None => {
            ui::warn("No os-release file found");
            ok = false;
        }
    }

    match create_client(ctx) {
        Ok(client) if client.is_available() => ui::success("apt-get is available"),
        Ok(_) => {
            ui::error("apt-get was found but does not run");
            ok = false;
        }
        Err(e) => {
            ui::error(&e.to_string());
            ok = false;
        }
    }

    if let Ok(path) = paths::config_file() {
        let state = if path.exists() { "found" } else { "not present, using defaults" };
        ui::kv("Config", &format!("{} ({state})", path.display()));
    }

    println!();
    if ok {
        ui::info("Ready to simulate");
    } else {
        anyhow::bail!("This host cannot run apt-get simulations");
    }
    Ok(())
}
