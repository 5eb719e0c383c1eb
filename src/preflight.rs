// src/preflight.rs

//! Pre-run environment checks.
//!
//! A linear sequence of filesystem checks run before anything else touches
//! the network or the data files. Each failure carries a human-readable
//! remediation hint; the CLI prints them and exits non-zero.

use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::Config;

/// One environment check result.
#[derive(Debug, Clone)]
pub struct Check {
    /// Short check name
    pub name: &'static str,
    /// Whether the check passed
    pub ok: bool,
    /// Remediation hint shown when the check failed
    pub hint: String,
}

impl Check {
    fn pass(name: &'static str) -> Self {
        Self {
            name,
            ok: true,
            hint: String::new(),
        }
    }

    fn fail(name: &'static str, hint: impl Into<String>) -> Self {
        Self {
            name,
            ok: false,
            hint: hint.into(),
        }
    }
}

/// Outcome of a full preflight run.
#[derive(Debug, Clone)]
pub struct PreflightReport {
    pub checks: Vec<Check>,
}

impl PreflightReport {
    /// Whether every check passed.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.ok)
    }

    /// Remediation hints for the failed checks.
    pub fn hints(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|c| !c.ok)
            .map(|c| c.hint.as_str())
            .collect()
    }
}

/// Run all environment checks against a data directory.
pub fn run(data_dir: &Path, config: &Config) -> PreflightReport {
    let mut checks = Vec::new();

    // Config file
    let config_path = data_dir.join("config.toml");
    checks.push(if config_path.exists() {
        Check::pass("config")
    } else {
        Check::fail(
            "config",
            format!(
                "Missing {}. Copy data/config.toml from the repository or run with defaults.",
                config_path.display()
            ),
        )
    });

    // Catalog file: must exist and hold at least one record
    let catalog_path = config.paths.catalog_path(data_dir);
    checks.push(match Catalog::load(&catalog_path) {
        Ok(catalog) if !catalog.is_empty() => Check::pass("catalog"),
        Ok(_) => Check::fail(
            "catalog",
            format!("{} contains no schools.", catalog_path.display()),
        ),
        Err(e) => Check::fail(
            "catalog",
            format!(
                "Cannot load catalog from {}: {}. Restore data/schools.json.",
                catalog_path.display(),
                e
            ),
        ),
    });

    // Environment file, when the config asks for one
    if !config.paths.env_file.is_empty() {
        let env_path = data_dir.join(&config.paths.env_file);
        checks.push(if env_path.exists() {
            Check::pass("env")
        } else {
            Check::fail(
                "env",
                format!(
                    "Missing {}. Create it with the endpoint credentials before running.",
                    env_path.display()
                ),
            )
        });
    }

    // Data directory must be writable for session/lead files
    checks.push(match check_writable(data_dir) {
        Ok(()) => Check::pass("writable"),
        Err(e) => Check::fail(
            "writable",
            format!("Data directory {} is not writable: {}", data_dir.display(), e),
        ),
    });

    PreflightReport { checks }
}

fn check_writable(data_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;
    let probe: PathBuf = data_dir.join(".preflight-probe");
    std::fs::write(&probe, b"ok")?;
    std::fs::remove_file(&probe)?;
    Ok(())
}

/// Run a passed-through command, returning its exit code.
pub async fn exec_passthrough(command: &[String]) -> Result<i32> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| crate::error::AppError::config("No command given"))?;

    let status = tokio::process::Command::new(program)
        .args(args)
        .status()
        .await?;
    Ok(status.code().unwrap_or(1))
}
