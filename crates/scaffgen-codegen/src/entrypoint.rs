//! Generates `cdk/bin/cdk.ts`, the parameterized infrastructure entry point.
//!
//! The program skeleton is fixed; the options are substituted at exactly four
//! points: the stack construct id, the API construct id, the deployed
//! artifact filename, and the runtime version string. The first stack
//! identifier parameterizes the template.

use anyhow::Result;

use scaffgen_core::options::ResolvedOptions;

use crate::artifact::GeneratedArtifact;

/// Generate the infrastructure entry-point source.
pub fn generate_entrypoint(options: &ResolvedOptions) -> Result<GeneratedArtifact> {
    let content = format!(
        r#"#!/usr/bin/env node
import "source-map-support/register";
import {{ App }} from "@aws-cdk/core";
import {{GuStack}} from "@guardian/cdk/lib/constructs/core";
import {{GuApiLambda}} from "@guardian/cdk/lib/patterns/api-lambda";
import {{Runtime}} from "@aws-cdk/aws-lambda";

const app = new App();

const stack = new GuStack(app, "{stack}-{name}", {{
    stack: "{stack}",
}});

const api = new GuApiLambda(stack, "{stack}-{name}-api", {{
    fileName: "{name}.zip",
    handler: "index.handler",
    runtime: new Runtime("{runtime}"),
    monitoringConfiguration: {{noMonitoring: true}},
    app: "{name}",
    apis: [{{
        id: "api"
    }}],
}});
"#,
        stack = options.stack(),
        name = options.name,
        runtime = options.runtime,
    );

    Ok(GeneratedArtifact::committed("cdk/bin/cdk.ts", content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaffgen_core::options::ScaffoldOptions;

    fn reports_options() -> ResolvedOptions {
        ScaffoldOptions {
            runtime: Some("NODEJS_16_X".to_string()),
            ..ScaffoldOptions::new("reports", "data")
        }
        .resolve()
        .unwrap()
    }

    #[test]
    fn test_substitution_points() {
        let artifact = generate_entrypoint(&reports_options()).unwrap();

        assert_eq!(artifact.path, "cdk/bin/cdk.ts");
        assert!(artifact.content.contains(r#"new GuStack(app, "data-reports", {"#));
        assert!(artifact
            .content
            .contains(r#"new GuApiLambda(stack, "data-reports-api", {"#));
        assert!(artifact.content.contains(r#"fileName: "reports.zip","#));
        assert!(artifact.content.contains(r#"new Runtime("NODEJS_16_X")"#));
        assert!(artifact.content.contains(r#"stack: "data","#));
        assert!(artifact.content.contains(r#"app: "reports","#));
    }

    #[test]
    fn test_default_runtime_embedded() {
        let options = ScaffoldOptions::new("reports", "data").resolve().unwrap();
        let artifact = generate_entrypoint(&options).unwrap();

        assert!(artifact.content.contains(r#"new Runtime("NODEJS_14_X")"#));
    }

    #[test]
    fn test_first_stack_parameterizes_template() {
        let options = ScaffoldOptions {
            stacks: vec!["data".to_string(), "media".to_string()],
            ..ScaffoldOptions::new("reports", "ignored")
        }
        .resolve()
        .unwrap();

        let artifact = generate_entrypoint(&options).unwrap();
        assert!(artifact.content.contains(r#""data-reports""#));
        assert!(!artifact.content.contains("media-reports"));
    }
}
