//! # Scaffgen Codegen
//!
//! Generates the scaffold artifacts for a serverless deployment unit.
//!
//! Produces the riff-raff deployment descriptor, CDK tool configuration,
//! TypeScript compiler configuration, package manifests, the parameterized
//! infrastructure entry point, and the CI script and workflow, all derived
//! from one resolved options record.

pub mod artifact;
pub mod cdk_json;
pub mod ci;
pub mod entrypoint;
pub mod package_json;
pub mod project_manifest;
pub mod riff_raff;
pub mod scaffold;
pub mod tsconfig;

pub use artifact::{write_artifacts, GeneratedArtifact};
pub use cdk_json::generate_cdk_json;
pub use ci::{generate_ci_script, generate_ci_workflow};
pub use entrypoint::generate_entrypoint;
pub use package_json::generate_package_json;
pub use project_manifest::generate_project_manifest;
pub use riff_raff::generate_riff_raff;
pub use scaffold::Scaffold;
pub use tsconfig::generate_tsconfig;
