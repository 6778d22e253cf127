//! Generates `cdk/package.json`, the infrastructure package manifest.
//!
//! Fixed content with pinned dependency versions. The CDK library versions
//! are pinned exactly so that every scaffold synthesizes with the same
//! toolchain until deliberately upgraded.

use anyhow::Result;

use crate::artifact::GeneratedArtifact;

/// Generate the infrastructure package manifest.
pub fn generate_package_json() -> Result<GeneratedArtifact> {
    let manifest = serde_json::json!({
        "name": "cdk",
        "version": "0.1.0",
        "bin": {
            "cdk": "bin/cdk.js",
        },
        "scripts": {
            "build": "tsc --noEmit",
            "watch": "tsc -w",
            "test": "jest --runInBand --detectOpenHandles",
            "test:dev": "jest --runInBand --detectOpenHandles --watch",
            "format": "prettier --write \"{lib,bin}/**/*.ts\"",
            "cdk": "cdk",
            "lint": "eslint lib/** bin/** --ext .ts --no-error-on-unmatched-pattern",
            "generate": "cdk synth --path-metadata false --version-reporting false",
        },
        "devDependencies": {
            "@aws-cdk/assert": "1.98.0",
            "@guardian/eslint-config-typescript": "^0.5.0",
            "@types/jest": "^26.0.22",
            "@types/node": "14.14.41",
            "@typescript-eslint/eslint-plugin": "^4.22.0",
            "@typescript-eslint/parser": "^4.22.0",
            "aws-cdk": "1.98.0",
            "eslint": "^7.24.0",
            "eslint-config-prettier": "^8.2.0",
            "eslint-plugin-eslint-comments": "^3.2.0",
            "eslint-plugin-import": "^2.22.1",
            "eslint-plugin-prettier": "^3.4.0",
            "jest": "^26.6.3",
            "prettier": "^2.2.0",
            "ts-jest": "^26.5.5",
            "ts-node": "^9.0.0",
            "typescript": "~4.2.4",
        },
        "dependencies": {
            "@aws-cdk/core": "1.98.0",
            "@guardian/cdk": "12.0.0",
            "source-map-support": "^0.5.16",
        },
    });

    let content = serde_json::to_string_pretty(&manifest)?;

    Ok(GeneratedArtifact::committed("cdk/package.json", content))
}
