//! Scaffold assembly.
//!
//! Resolves the options record, then builds the profile's complete artifact
//! list in one synchronous pass. Any failure aborts with zero artifacts, so
//! a scaffold either exists in full or not at all.

use anyhow::Result;
use std::path::Path;

use scaffgen_core::options::{Profile, ResolvedOptions, ScaffoldOptions};

use crate::artifact::{write_artifacts, GeneratedArtifact};
use crate::{cdk_json, ci, entrypoint, package_json, project_manifest, riff_raff, tsconfig};

/// A fully generated scaffold: resolved options plus every artifact.
#[derive(Debug, Clone)]
pub struct Scaffold {
    pub options: ResolvedOptions,
    pub artifacts: Vec<GeneratedArtifact>,
}

impl Scaffold {
    /// Generate all artifacts for the options' profile.
    pub fn generate(options: &ScaffoldOptions) -> Result<Scaffold> {
        let resolved = options.resolve()?;

        let mut artifacts = vec![
            riff_raff::generate_riff_raff(&resolved)?,
            cdk_json::generate_cdk_json()?,
            tsconfig::generate_tsconfig()?,
        ];

        if resolved.profile == Profile::ApiLambda {
            artifacts.push(project_manifest::generate_project_manifest(&resolved)?);
            artifacts.push(package_json::generate_package_json()?);
            artifacts.push(entrypoint::generate_entrypoint(&resolved)?);
            artifacts.push(ci::generate_ci_script()?);
            artifacts.push(ci::generate_ci_workflow()?);
        }

        tracing::debug!(
            name = %resolved.name,
            profile = ?resolved.profile,
            artifacts = artifacts.len(),
            "generated scaffold"
        );

        Ok(Scaffold {
            options: resolved,
            artifacts,
        })
    }

    /// Materialize every artifact under `output_dir`.
    ///
    /// Returns the paths of the written files.
    pub fn write(&self, output_dir: &Path) -> Result<Vec<String>> {
        write_artifacts(&self.artifacts, output_dir)
    }
}
