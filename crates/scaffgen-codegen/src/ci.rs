//! Generates the CI invocation script and the CI workflow descriptor.
//!
//! Both are fixed: the script locates the scaffold root relative to itself,
//! moves into the generated `cdk` directory and runs the build steps; the
//! workflow runs that script on pull requests and manual dispatch with a
//! pinned node version.

use anyhow::Result;
use serde::Serialize;

use crate::artifact::GeneratedArtifact;

const CI_SCRIPT: &str = r#"#!/usr/bin/env bash
set -e

DIR=$( cd "$( dirname "${BASH_SOURCE[0]}" )" && pwd )
ROOT_DIR=$DIR/../..

cd $ROOT_DIR/cdk

npm install -g yarn

yarn install --frozen-lockfile
yarn build
yarn generate
"#;

const NODE_VERSION: &str = "14.15.5";

/// Generate the executable CI invocation script.
pub fn generate_ci_script() -> Result<GeneratedArtifact> {
    Ok(GeneratedArtifact::executable("cdk/script/ci", CI_SCRIPT))
}

#[derive(Debug, Serialize)]
struct Workflow {
    name: &'static str,
    #[serde(rename = "on")]
    triggers: Triggers,
    jobs: Jobs,
}

#[derive(Debug, Serialize)]
struct Triggers {
    pull_request: serde_yaml::Mapping,
    workflow_dispatch: serde_yaml::Mapping,
}

#[derive(Debug, Serialize)]
struct Jobs {
    #[serde(rename = "CI")]
    ci: Job,
}

#[derive(Debug, Serialize)]
struct Job {
    #[serde(rename = "runs-on")]
    runs_on: &'static str,
    steps: Vec<Step>,
}

#[derive(Debug, Serialize)]
struct Step {
    #[serde(skip_serializing_if = "Option::is_none")]
    uses: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    with: Option<NodeSetup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    run: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct NodeSetup {
    #[serde(rename = "node-version")]
    node_version: &'static str,
}

impl Step {
    fn uses(action: &'static str) -> Self {
        Self {
            uses: Some(action),
            with: None,
            run: None,
        }
    }

    fn run(command: &'static str) -> Self {
        Self {
            uses: None,
            with: None,
            run: Some(command),
        }
    }
}

/// Generate the CI workflow descriptor.
pub fn generate_ci_workflow() -> Result<GeneratedArtifact> {
    let workflow = Workflow {
        name: "CI",
        triggers: Triggers {
            pull_request: serde_yaml::Mapping::new(),
            workflow_dispatch: serde_yaml::Mapping::new(),
        },
        jobs: Jobs {
            ci: Job {
                runs_on: "ubuntu-latest",
                steps: vec![
                    Step::uses("actions/checkout@v2"),
                    Step {
                        uses: Some("actions/setup-node@v2.1.5"),
                        with: Some(NodeSetup {
                            node_version: NODE_VERSION,
                        }),
                        run: None,
                    },
                    Step::run("./cdk/script/ci"),
                ],
            },
        },
    };

    let content = serde_yaml::to_string(&workflow)?;

    Ok(GeneratedArtifact::committed(
        ".github/workflows/ci.yml",
        content,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_is_executable_and_fixed() {
        let artifact = generate_ci_script().unwrap();

        assert_eq!(artifact.path, "cdk/script/ci");
        assert!(artifact.executable);
        assert!(artifact.content.starts_with("#!/usr/bin/env bash"));
        assert!(artifact.content.contains("yarn install --frozen-lockfile"));
        assert!(artifact.content.contains("yarn build"));
        assert!(artifact.content.contains("yarn generate"));
        assert!(artifact.content.contains("cd $ROOT_DIR/cdk"));
    }

    #[test]
    fn test_workflow_steps_ordered() {
        let artifact = generate_ci_workflow().unwrap();
        let parsed: serde_yaml::Value = serde_yaml::from_str(&artifact.content).unwrap();

        let steps = &parsed["jobs"]["CI"]["steps"];
        assert_eq!(steps[0]["uses"], "actions/checkout@v2");
        assert_eq!(steps[1]["uses"], "actions/setup-node@v2.1.5");
        assert_eq!(steps[1]["with"]["node-version"], "14.15.5");
        assert_eq!(steps[2]["run"], "./cdk/script/ci");
        assert_eq!(parsed["jobs"]["CI"]["runs-on"], "ubuntu-latest");
    }

    #[test]
    fn test_workflow_triggers() {
        let artifact = generate_ci_workflow().unwrap();
        let parsed: serde_yaml::Value = serde_yaml::from_str(&artifact.content).unwrap();

        assert!(parsed["on"]["pull_request"].is_mapping());
        assert!(parsed["on"]["workflow_dispatch"].is_mapping());
    }
}
