//! Generates `riff-raff.yaml`, the deployment descriptor.
//!
//! The descriptor lists the stack(s) and region(s) the deployment tooling
//! targets. Both come straight from the resolved options, so an omitted
//! region shows up here as the profile's default list.

use anyhow::Result;
use serde::Serialize;

use scaffgen_core::options::ResolvedOptions;

use crate::artifact::GeneratedArtifact;

#[derive(Debug, Serialize)]
struct DeploymentDescriptor<'a> {
    stacks: &'a [String],
    regions: &'a [String],
}

/// Generate the riff-raff deployment descriptor.
pub fn generate_riff_raff(options: &ResolvedOptions) -> Result<GeneratedArtifact> {
    let descriptor = DeploymentDescriptor {
        stacks: &options.stacks,
        regions: &options.regions,
    };

    let content = serde_yaml::to_string(&descriptor)?;

    Ok(GeneratedArtifact::committed("riff-raff.yaml", content))
}
