use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aptsim")]
#[command(author = "Alberto Cavalcante")]
#[command(version)]
#[command(about = "Preview what apt-get would change, without changing anything", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to apt-get (overrides the config file)
    #[arg(long, global = true, env = "APTSIM_APT_GET", value_name = "PATH")]
    pub apt_get: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show what a dist-upgrade would change
    Upgrades(UpgradesArgs),

    /// Show what installing packages would change
    Install(InstallArgs),

    /// Analyze saved `apt-get --just-print` output
    Parse(ParseArgs),

    /// Check that this host can run simulations
    Check,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

// ============================================================================
// Shared flags
// ============================================================================

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct RefreshArgs {
    /// Run `apt-get update` first
    #[arg(long, overrides_with = "no_refresh")]
    pub refresh: bool,

    /// Skip `apt-get update`
    #[arg(long, overrides_with = "refresh")]
    pub no_refresh: bool,
}

impl RefreshArgs {
    /// Resolve the flags against a configured default.
    pub fn resolve(&self, default: bool) -> bool {
        if self.refresh {
            true
        } else if self.no_refresh {
            false
        } else {
            default
        }
    }
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Print apt-get's raw output when the report has diagnostics
    #[arg(long)]
    pub raw: bool,
}

// ============================================================================
// Subcommand arguments
// ============================================================================

#[derive(Args)]
pub struct UpgradesArgs {
    #[command(flatten)]
    pub refresh: RefreshArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct InstallArgs {
    /// Packages to install or upgrade
    #[arg(required = true, num_args = 1..)]
    pub packages: Vec<String>,

    #[command(flatten)]
    pub refresh: RefreshArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct ParseArgs {
    /// File holding apt-get output, or `-` for stdin
    pub file: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_refresh_resolution() {
        let none = RefreshArgs::default();
        assert!(none.resolve(true));
        assert!(!none.resolve(false));

        let on = RefreshArgs {
            refresh: true,
            no_refresh: false,
        };
        assert!(on.resolve(false));

        let off = RefreshArgs {
            refresh: false,
            no_refresh: true,
        };
        assert!(!off.resolve(true));
    }

    #[test]
    fn test_last_refresh_flag_wins() {
        let cli = Cli::parse_from(["aptsim", "upgrades", "--refresh", "--no-refresh"]);
        match cli.command {
            Command::Upgrades(args) => assert!(!args.refresh.resolve(true)),
            _ => panic!("expected upgrades"),
        }
    }

    #[test]
    fn test_install_requires_packages() {
        assert!(Cli::try_parse_from(["aptsim", "install"]).is_err());

        let cli = Cli::parse_from(["aptsim", "install", "bash", "apt", "--json"]);
        match cli.command {
            Command::Install(args) => {
                assert_eq!(args.packages, vec!["bash", "apt"]);
                assert!(args.output.json);
            }
            _ => panic!("expected install"),
        }
    }
}
