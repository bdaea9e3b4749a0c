//! Builds the apt-get argument list for a simulated operation.

use crate::error::{Error, Result};

/// Flag that makes apt-get report instead of act.
pub const SIMULATE_FLAG: &str = "--just-print";

/// A simulated operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Upgrade everything (`dist-upgrade`)
    DistUpgrade,
    /// Install or upgrade the named packages, in caller order
    Install(Vec<String>),
}

impl Operation {
    /// Build an install operation from a single name and/or a list.
    ///
    /// `pkgs` takes precedence over `name` when both are given. Fails with
    /// [`Error::InvalidArgument`] when no package is identified, or when a
    /// name could be mistaken for an apt-get option.
    pub fn from_request(name: Option<&str>, pkgs: Option<&[String]>) -> Result<Self> {
        let names: Vec<String> = match (pkgs, name) {
            (Some(pkgs), _) if !pkgs.is_empty() => pkgs.to_vec(),
            (_, Some(name)) => vec![name.to_string()],
            _ => {
                return Err(Error::InvalidArgument(
                    "list_install: need a package name".to_string(),
                ));
            }
        };

        for name in &names {
            validate_name(name)?;
        }

        Ok(Operation::Install(names))
    }

    /// Arguments to pass to apt-get.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![SIMULATE_FLAG.to_string()];
        match self {
            Operation::DistUpgrade => args.push("dist-upgrade".to_string()),
            Operation::Install(names) => {
                args.push("install".to_string());
                args.extend(names.iter().cloned());
            }
        }
        args
    }

    /// Short description for logs and headers.
    pub fn describe(&self) -> String {
        match self {
            Operation::DistUpgrade => "dist-upgrade".to_string(),
            Operation::Install(names) => format!("install {}", names.join(" ")),
        }
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidArgument("empty package name".to_string()));
    }
    if name.starts_with('-') {
        return Err(Error::InvalidArgument(format!(
            "package name looks like an option: {name}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dist_upgrade_args() {
        assert_eq!(
            Operation::DistUpgrade.args(),
            vec!["--just-print", "dist-upgrade"]
        );
    }

    #[test]
    fn test_install_args_keep_order() {
        let pkgs = vec!["bash".to_string(), "apt".to_string()];
        let op = Operation::from_request(None, Some(pkgs.as_slice())).unwrap();
        assert_eq!(op.args(), vec!["--just-print", "install", "bash", "apt"]);
    }

    #[test]
    fn test_single_name() {
        let op = Operation::from_request(Some("salt-minion"), None).unwrap();
        assert_eq!(op, Operation::Install(vec!["salt-minion".to_string()]));
        assert_eq!(op.describe(), "install salt-minion");
    }

    #[test]
    fn test_pkgs_win_over_name() {
        let pkgs = vec!["curl".to_string()];
        let op = Operation::from_request(Some("wget"), Some(pkgs.as_slice())).unwrap();
        assert_eq!(op, Operation::Install(vec!["curl".to_string()]));
    }

    #[test]
    fn test_empty_pkgs_fall_back_to_name() {
        let op = Operation::from_request(Some("wget"), Some(&[][..])).unwrap();
        assert_eq!(op, Operation::Install(vec!["wget".to_string()]));
    }

    #[test]
    fn test_nothing_requested() {
        assert!(matches!(
            Operation::from_request(None, None),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Operation::from_request(None, Some(&[][..])),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_option_like_name_rejected() {
        let err = Operation::from_request(Some("--purge"), None).unwrap_err();
        assert!(err.to_string().contains("--purge"));
        assert!(Operation::from_request(Some("  "), None).is_err());
    }
}
