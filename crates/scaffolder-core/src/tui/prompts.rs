//! Charm-style CLI prompts using cliclack

use crate::product::ProductConfig;
use crate::prompt::{resolve_project_name, CliclackPrompt};
use crate::scaffold::{CreateArgs, ScaffoldReport, Scaffolder};
use crate::templates;
use anyhow::{Context, Result};
use std::path::Path;

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;
    cliclack::log::remark(config.tagline())?;

    // Step 1: Project name
    let mut prompt = CliclackPrompt {
        placeholder: format!("my-{}", config.name().trim_start_matches("create-")),
    };
    let project_name = resolve_project_name(args.name, &mut prompt, config.name_prompt())?;

    // Step 2: Template source
    let template_dir = templates::resolve_template_dir(config, args.template_dir.as_deref());
    if args.template_dir.is_some() {
        cliclack::log::info(format!(
            "Using local template from {}",
            template_dir.display()
        ))?;
    }

    // Step 3: Create project
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let report = create_project(&project_name, &template_dir, &cwd).await?;

    // Step 4: Show next steps
    print_next_steps(config, &project_name, &report)?;

    Ok(())
}

async fn create_project(
    project_name: &str,
    template_dir: &Path,
    cwd: &Path,
) -> Result<ScaffoldReport> {
    let spinner = cliclack::spinner();
    spinner.start(format!("Creating project in \"{}\"...", project_name));

    match Scaffolder::default()
        .scaffold(project_name, template_dir, cwd)
        .await
    {
        Ok(report) => {
            spinner.stop(format!(
                "Created {} files and {} folders in {}",
                report.copied.len(),
                report.directories,
                report.project_dir.display()
            ));
            Ok(report)
        }
        Err(e) => {
            spinner.stop("Project creation failed");
            Err(e.into())
        }
    }
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    project_name: &str,
    report: &ScaffoldReport,
) -> Result<()> {
    if !report.skipped.is_empty() {
        cliclack::log::info(format!(
            "Left out {} development artifact(s) from the template",
            report.skipped.len()
        ))?;
    }
    cliclack::log::success("Project created successfully!")?;

    let steps = config.next_steps(project_name);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
