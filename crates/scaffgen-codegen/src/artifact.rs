//! Generated artifact representation and disk materialization.
//!
//! Generators only build in-memory artifacts; writing happens in a separate
//! step once the complete set exists, so a failed generation never leaves a
//! partially-written scaffold behind.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// A single generated file, addressed relative to the scaffold root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    /// Scaffold-relative path, e.g. `cdk/bin/cdk.ts`.
    pub path: String,
    pub content: String,
    /// Tracked in version control (as opposed to generated-and-ignored).
    pub committed: bool,
    /// Unix executable bit is set on materialization.
    pub executable: bool,
}

impl GeneratedArtifact {
    /// A committed, non-executable artifact.
    pub fn committed(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            committed: true,
            executable: false,
        }
    }

    /// A committed, executable artifact (scripts).
    pub fn executable(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            committed: true,
            executable: true,
        }
    }
}

/// Write artifacts under `output_dir`, creating parent directories as needed.
///
/// Returns the paths of the written files.
pub fn write_artifacts(artifacts: &[GeneratedArtifact], output_dir: &Path) -> Result<Vec<String>> {
    let mut written = Vec::new();

    for artifact in artifacts {
        let path = output_dir.join(&artifact.path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, &artifact.content)?;

        #[cfg(unix)]
        if artifact.executable {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(perms.mode() | 0o755);
            std::fs::set_permissions(&path, perms)?;
        }

        tracing::debug!(path = %path.display(), "materialized artifact");
        written.push(path.display().to_string());
    }

    Ok(written)
}
