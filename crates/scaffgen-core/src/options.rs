//! Scaffold options model.
//!
//! The options record is supplied once, at generation time. Validation and
//! defaulting happen together in [`ScaffoldOptions::resolve`], which produces a
//! fully-populated [`ResolvedOptions`] before any artifact is generated. The
//! defaults live in an explicit table per [`Profile`] rather than being merged
//! in at use sites, so every generator sees the same resolved values.

use serde::{Deserialize, Serialize};

use crate::error::{ScaffoldError, ScaffoldResult};

/// Default Lambda runtime embedded in the infrastructure entry point when the
/// options omit one.
pub const DEFAULT_RUNTIME: &str = "NODEJS_14_X";

/// Generator profile.
///
/// The two profiles carry distinct default region lists and distinct artifact
/// sets. They are selected explicitly per invocation and never merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    /// Single API Lambda behind a gateway. Emits the full artifact set:
    /// deployment descriptor, CDK config, tsconfig, package manifests,
    /// infrastructure entry point, CI script, and CI workflow.
    #[default]
    ApiLambda,

    /// Multi-stack deployment unit. Emits only the deployment descriptor,
    /// CDK config, and tsconfig.
    MultiStack,
}

impl Profile {
    /// Default deployment regions applied when the options omit regions.
    pub fn default_regions(&self) -> Vec<String> {
        match self {
            Profile::ApiLambda => vec!["eu-west-1".to_string()],
            Profile::MultiStack => vec!["eu-west-hackday".to_string()],
        }
    }
}

/// Generic project metadata forwarded unchanged into the base project
/// manifest. These fields are never transformed by the generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectOptions {
    pub author_name: String,
    pub author_email: String,
    pub author_organization: bool,
    pub copyright_period: String,
    pub license: String,
    pub stability: String,
    pub typescript_version: String,
    pub strict: bool,
    pub docgen: bool,
    pub code_cov: bool,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            author_name: "The Guardian".to_string(),
            author_email: "devx@theguardian.com".to_string(),
            author_organization: true,
            copyright_period: "2021".to_string(),
            license: "Apache-2.0".to_string(),
            stability: "experimental".to_string(),
            typescript_version: "4.2.0".to_string(),
            strict: true,
            docgen: true,
            code_cov: true,
        }
    }
}

/// The options record for one scaffold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaffoldOptions {
    /// Logical application name. Required; embedded verbatim into generated
    /// identifiers and the deployed artifact filename.
    pub name: String,

    /// Stack identifier(s) grouping the deployment target. Required, at least
    /// one, none empty. The first stack parameterizes the entry point.
    pub stacks: Vec<String>,

    /// Deployment region(s). Optional; the profile's default list applies.
    #[serde(default)]
    pub regions: Option<Vec<String>>,

    /// Lambda runtime identifier. Optional; defaults to [`DEFAULT_RUNTIME`].
    #[serde(default)]
    pub runtime: Option<String>,

    #[serde(default)]
    pub profile: Profile,

    #[serde(default)]
    pub project: ProjectOptions,
}

impl ScaffoldOptions {
    /// Convenience constructor for the common single-stack case.
    pub fn new(name: impl Into<String>, stack: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stacks: vec![stack.into()],
            regions: None,
            runtime: None,
            profile: Profile::default(),
            project: ProjectOptions::default(),
        }
    }

    /// Validate the record and apply the defaults table.
    ///
    /// Fails fast on missing required fields so that no artifact is ever
    /// generated from an invalid record.
    pub fn resolve(&self) -> ScaffoldResult<ResolvedOptions> {
        if self.name.trim().is_empty() {
            return Err(ScaffoldError::MissingField("name"));
        }
        if self.stacks.is_empty() || self.stacks.iter().any(|s| s.trim().is_empty()) {
            return Err(ScaffoldError::MissingField("stacks"));
        }

        let regions = match &self.regions {
            Some(regions) => {
                if regions.is_empty() || regions.iter().any(|r| r.trim().is_empty()) {
                    return Err(ScaffoldError::config(
                        "regions, when supplied, must be a non-empty list of non-empty identifiers",
                    ));
                }
                regions.clone()
            }
            None => self.profile.default_regions(),
        };

        let runtime = match &self.runtime {
            Some(runtime) => {
                if runtime.trim().is_empty() {
                    return Err(ScaffoldError::config(
                        "runtime, when supplied, must be non-empty",
                    ));
                }
                runtime.clone()
            }
            None => DEFAULT_RUNTIME.to_string(),
        };

        tracing::debug!(
            name = %self.name,
            profile = ?self.profile,
            stacks = self.stacks.len(),
            "resolved scaffold options"
        );

        Ok(ResolvedOptions {
            name: self.name.clone(),
            stacks: self.stacks.clone(),
            regions,
            runtime,
            profile: self.profile,
            project: self.project.clone(),
        })
    }
}

/// A validated options record with every default applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedOptions {
    pub name: String,
    pub stacks: Vec<String>,
    pub regions: Vec<String>,
    pub runtime: String,
    pub profile: Profile,
    pub project: ProjectOptions,
}

impl ResolvedOptions {
    /// The stack identifier used for entry-point parameterization.
    pub fn stack(&self) -> &str {
        &self.stacks[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let resolved = ScaffoldOptions::new("reports", "data").resolve().unwrap();
        assert_eq!(resolved.regions, vec!["eu-west-1".to_string()]);
        assert_eq!(resolved.runtime, "NODEJS_14_X");
        assert_eq!(resolved.stack(), "data");
    }

    #[test]
    fn test_multi_stack_default_region() {
        let options = ScaffoldOptions {
            stacks: vec!["a".to_string(), "b".to_string()],
            profile: Profile::MultiStack,
            ..ScaffoldOptions::new("reports", "ignored")
        };
        let resolved = options.resolve().unwrap();
        assert_eq!(resolved.stacks, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(resolved.regions, vec!["eu-west-hackday".to_string()]);
    }

    #[test]
    fn test_explicit_values_win_over_defaults() {
        let options = ScaffoldOptions {
            regions: Some(vec!["us-east-1".to_string()]),
            runtime: Some("NODEJS_16_X".to_string()),
            ..ScaffoldOptions::new("reports", "data")
        };
        let resolved = options.resolve().unwrap();
        assert_eq!(resolved.regions, vec!["us-east-1".to_string()]);
        assert_eq!(resolved.runtime, "NODEJS_16_X");
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = ScaffoldOptions::new("  ", "data").resolve().unwrap_err();
        assert!(matches!(err, ScaffoldError::MissingField("name")));
    }

    #[test]
    fn test_missing_stacks_rejected() {
        let options = ScaffoldOptions {
            stacks: Vec::new(),
            ..ScaffoldOptions::new("reports", "data")
        };
        let err = options.resolve().unwrap_err();
        assert!(matches!(err, ScaffoldError::MissingField("stacks")));
    }

    #[test]
    fn test_blank_stack_element_rejected() {
        let options = ScaffoldOptions {
            stacks: vec!["data".to_string(), "".to_string()],
            ..ScaffoldOptions::new("reports", "data")
        };
        assert!(options.resolve().is_err());
    }

    #[test]
    fn test_empty_region_list_rejected() {
        let options = ScaffoldOptions {
            regions: Some(Vec::new()),
            ..ScaffoldOptions::new("reports", "data")
        };
        assert!(matches!(
            options.resolve().unwrap_err(),
            ScaffoldError::Config(_)
        ));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let options = ScaffoldOptions::new("reports", "data");
        assert_eq!(options.resolve().unwrap(), options.resolve().unwrap());
    }
}
