//! Open-with seam — resolves the fixed viewer id to an external command.
//!
//! New documents are handed to the Threat Composer viewer rather than a plain
//! text editor. The viewer registry lives in user config; without an entry
//! for the id the platform opener is used.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

use crate::config::Config;

/// Registered identifier of the Threat Composer viewer.
pub const VIEWER_ID: &str = "threat-composer";

/// Resolved open-with target.
#[derive(Debug, Clone)]
pub struct Viewer {
    command: String,
    args: Vec<String>,
}

impl Viewer {
    /// Resolve the fixed viewer id through user config, falling back to the
    /// platform opener.
    pub fn resolve(config: &Config) -> Viewer {
        match config.viewers.get(VIEWER_ID) {
            Some(entry) => Viewer {
                command: entry.command.clone(),
                args: entry.args.clone(),
            },
            None => Viewer {
                command: platform_opener().to_string(),
                args: Vec::new(),
            },
        }
    }

    /// Build a viewer from an explicit command line.
    pub fn from_command(command: &str, args: &[String]) -> Viewer {
        Viewer {
            command: command.to_string(),
            args: args.to_vec(),
        }
    }

    /// Open the file with this viewer.
    ///
    /// The document already exists on disk at this point; a failure here does
    /// not undo the write.
    pub fn open(&self, file: &Path) -> Result<()> {
        let status = Command::new(&self.command)
            .args(&self.args)
            .arg(file)
            .status()
            .with_context(|| format!("failed to spawn viewer `{}`", self.command))?;
        if !status.success() {
            anyhow::bail!("viewer `{}` exited with {}", self.command, status);
        }
        Ok(())
    }
}

fn platform_opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ViewerConfig};
    use tempfile::TempDir;

    #[test]
    fn resolve_prefers_configured_entry() {
        let mut config = Config::default();
        config.viewers.insert(
            VIEWER_ID.to_string(),
            ViewerConfig {
                command: "code".to_string(),
                args: vec!["--reuse-window".to_string()],
            },
        );
        let viewer = Viewer::resolve(&config);
        assert_eq!(viewer.command, "code");
        assert_eq!(viewer.args, vec!["--reuse-window".to_string()]);
    }

    #[test]
    fn resolve_falls_back_to_platform_opener() {
        let viewer = Viewer::resolve(&Config::default());
        assert_eq!(viewer.command, platform_opener());
        assert!(viewer.args.is_empty());
    }

    #[test]
    fn open_succeeds_with_passing_command() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("model.tc.json");
        std::fs::write(&file, "").unwrap();

        let viewer = Viewer::from_command("true", &[]);
        viewer.open(&file).unwrap();
    }

    #[test]
    fn open_reports_nonzero_exit() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("model.tc.json");
        std::fs::write(&file, "").unwrap();

        let viewer = Viewer::from_command("false", &[]);
        let err = viewer.open(&file).unwrap_err();
        assert!(err.to_string().contains("exited with"));
    }

    #[test]
    fn open_reports_missing_command() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("model.tc.json");
        std::fs::write(&file, "").unwrap();

        let viewer = Viewer::from_command("tc-doc-no-such-viewer", &[]);
        let err = viewer.open(&file).unwrap_err();
        assert!(err.to_string().contains("failed to spawn viewer"));
    }
}
