//! Generates `cdk/tsconfig.json`, the TypeScript compiler configuration for
//! the infrastructure directory. Fixed content.

use anyhow::Result;

use crate::artifact::GeneratedArtifact;

/// Generate the infrastructure tsconfig.
pub fn generate_tsconfig() -> Result<GeneratedArtifact> {
    let config = serde_json::json!({
        "ts-node": {
            "compilerOptions": {
                "module": "CommonJS",
            },
        },
        "compilerOptions": {
            "target": "ES2020",
            "module": "ES2020",
            "moduleResolution": "node",
            "lib": ["ES2020"],
            "declaration": true,
            "strict": true,
            "noImplicitAny": true,
            "strictNullChecks": true,
            "esModuleInterop": true,
            "noImplicitThis": true,
            "alwaysStrict": true,
            "noUnusedLocals": false,
            "noUnusedParameters": false,
            "noImplicitReturns": true,
            "noFallthroughCasesInSwitch": false,
            "inlineSourceMap": true,
            "inlineSources": true,
            "experimentalDecorators": true,
            "strictPropertyInitialization": false,
            "typeRoots": ["./node_modules/@types"],
            "outDir": "dist",
        },
        "include": ["lib/**/*", "bin/**/*"],
        "exclude": [
            "node_modules",
            "cdk.out",
            "lib/**/*.test.ts",
            "lib/**/__snapshots__/**",
        ],
    });

    let content = serde_json::to_string_pretty(&config)?;

    Ok(GeneratedArtifact::committed("cdk/tsconfig.json", content))
}
