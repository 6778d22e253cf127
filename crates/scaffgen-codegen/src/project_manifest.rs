//! Generates the scaffold-root `package.json`.
//!
//! This is the base-project step: the generic project metadata from the
//! options record is forwarded into the manifest unchanged.

use anyhow::Result;

use scaffgen_core::options::ResolvedOptions;

use crate::artifact::GeneratedArtifact;

/// Generate the root project manifest from the forwarded project metadata.
pub fn generate_project_manifest(options: &ResolvedOptions) -> Result<GeneratedArtifact> {
    let project = &options.project;

    let manifest = serde_json::json!({
        "name": options.name,
        "version": "0.0.0",
        "license": project.license,
        "author": {
            "name": project.author_name,
            "email": project.author_email,
            "organization": project.author_organization,
        },
        "stability": project.stability,
        "devDependencies": {
            "typescript": project.typescript_version,
        },
    });

    let content = serde_json::to_string_pretty(&manifest)?;

    Ok(GeneratedArtifact::committed("package.json", content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaffgen_core::options::ScaffoldOptions;

    #[test]
    fn test_project_metadata_forwarded_unchanged() {
        let mut options = ScaffoldOptions::new("reports", "data");
        options.project.author_name = "Example News".to_string();
        options.project.license = "MIT".to_string();

        let artifact = generate_project_manifest(&options.resolve().unwrap()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&artifact.content).unwrap();

        assert_eq!(artifact.path, "package.json");
        assert_eq!(parsed["name"], "reports");
        assert_eq!(parsed["author"]["name"], "Example News");
        assert_eq!(parsed["license"], "MIT");
        assert_eq!(parsed["stability"], "experimental");
        assert_eq!(parsed["devDependencies"]["typescript"], "4.2.0");
    }
}
