//! Generates `cdk/cdk.json`, the CDK tool configuration.
//!
//! Fixed content: the entry-point command, a deliberately invalid profile so
//! the CDK CLI never picks up ambient credentials, and the feature-flag
//! context. Never varies with the options.

use anyhow::Result;

use crate::artifact::GeneratedArtifact;

/// Generate the CDK tool configuration.
pub fn generate_cdk_json() -> Result<GeneratedArtifact> {
    let config = serde_json::json!({
        "app": "npx ts-node bin/cdk.ts",
        "profile": "does-not-exist",
        "context": {
            "@aws-cdk/core:enableStackNameDuplicates": "true",
            "aws-cdk:enableDiffNoFail": "true",
            "@aws-cdk/core:stackRelativeExports": "true",
        },
    });

    let content = serde_json::to_string_pretty(&config)?;

    Ok(GeneratedArtifact::committed("cdk/cdk.json", content))
}
