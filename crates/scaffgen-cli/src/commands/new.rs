//! Scaffold generation command.

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

use scaffgen_codegen::Scaffold;
use scaffgen_core::options::{Profile, ScaffoldOptions};

#[derive(Args)]
pub struct NewArgs {
    /// Application name, embedded into generated identifiers
    pub name: String,

    /// Stack identifier (repeatable)
    #[arg(long = "stack", required = true)]
    pub stacks: Vec<String>,

    /// Deployment region (repeatable; profile default when omitted)
    #[arg(long = "region")]
    pub regions: Vec<String>,

    /// Lambda runtime identifier (default NODEJS_14_X)
    #[arg(long)]
    pub runtime: Option<String>,

    /// Generator profile
    #[arg(long, value_enum, default_value_t = ProfileArg::ApiLambda)]
    pub profile: ProfileArg,

    /// Target directory (defaults to ./<name>)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Preview without writing files
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProfileArg {
    /// Single API Lambda; full artifact set
    ApiLambda,
    /// Multi-stack unit; deployment descriptor and CDK config only
    MultiStack,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::ApiLambda => Profile::ApiLambda,
            ProfileArg::MultiStack => Profile::MultiStack,
        }
    }
}

pub fn execute(args: NewArgs) -> Result<()> {
    let target_dir = args
        .directory
        .unwrap_or_else(|| PathBuf::from(&args.name));

    let options = ScaffoldOptions {
        name: args.name.clone(),
        stacks: args.stacks,
        regions: if args.regions.is_empty() {
            None
        } else {
            Some(args.regions)
        },
        runtime: args.runtime,
        profile: args.profile.into(),
        project: Default::default(),
    };

    let scaffold = Scaffold::generate(&options)?;

    if args.dry_run {
        println!(
            "{} Would generate {} artifacts:",
            "→".blue().bold(),
            scaffold.artifacts.len()
        );
        for artifact in &scaffold.artifacts {
            println!("{}", "─".repeat(40));
            println!("{}", artifact.path.cyan());
            println!("{}", artifact.content);
        }
        println!("{}", "(dry run - no files written)".dimmed());
        return Ok(());
    }

    let written = scaffold.write(&target_dir)?;
    tracing::debug!(artifacts = written.len(), dir = %target_dir.display(), "scaffold materialized");

    println!(
        "{} Scaffold created: {}",
        "✓".green().bold(),
        args.name.cyan()
    );
    println!("  Directory: {}", target_dir.display());
    for path in &written {
        println!("  {}", path);
    }
    println!();
    println!("{}", "Next steps:".bold());
    println!("  cd {}/cdk", target_dir.display());
    println!("  yarn install              # Install pinned CDK toolchain");
    println!("  yarn generate             # Synthesize the CloudFormation output");

    Ok(())
}
