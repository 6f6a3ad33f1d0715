//! `tc-doc new` — Create an empty Threat Composer document and open it.
//!
//! Usage: tc-doc new [NAME]
//!
//! 1. Resolves the workspace root (`--root` or auto-detected)
//! 2. Asks for a base name, rejecting names that already exist
//! 3. Writes `<root>/<name>.tc.json` with empty content
//! 4. Hands the file to the registered viewer

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::prompt::{self, Answer};
use crate::viewer::Viewer;
use crate::workspace;

/// Fixed suffix of Threat Composer documents.
pub const FILE_SUFFIX: &str = ".tc.json";

/// Destination path for a document base name under the workspace root.
pub fn destination(root: &Path, name: &str) -> PathBuf {
    root.join(format!("{name}{FILE_SUFFIX}"))
}

pub fn run(name: Option<&str>, root_override: Option<&Path>, config: &Config) -> Result<()> {
    let Some(root) = workspace::find_root(root_override) else {
        anyhow::bail!("workspace folder not defined");
    };
    run_at(&root, name, &Viewer::resolve(config))
}

/// Core of the command with a resolved root and viewer.
pub fn run_at(root: &Path, name: Option<&str>, viewer: &Viewer) -> Result<()> {
    let name = match name {
        // Non-interactive: the argument goes through the same validator, but
        // there is no prompt loop to recover into.
        Some(given) => {
            let given = given.trim();
            if given.is_empty() {
                anyhow::bail!("file name must not be empty");
            }
            if let Some(message) = prompt::validate(given, root) {
                anyhow::bail!("{}: {}", message, destination(root, given).display());
            }
            given.to_string()
        }
        None => match prompt::ask(root)? {
            Answer::Accepted(accepted) => accepted,
            Answer::Cancelled => return Ok(()),
        },
    };

    let path = destination(root, &name);
    // Written empty; the viewer fills in the default structure on first open.
    std::fs::write(&path, "")
        .with_context(|| format!("failed to write {}", path.display()))?;
    eprintln!("Created {}", path.display());

    viewer.open(&path)
}
