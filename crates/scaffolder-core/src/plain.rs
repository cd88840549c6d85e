//! Plain line-based front-end for non-interactive terminals and scripts

use crate::product::ProductConfig;
use crate::prompt::{resolve_project_name, LinePrompt, NamePrompt};
use crate::scaffold::{CreateArgs, Scaffolder};
use crate::templates;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

/// Run the CLI reading the project name from stdin when needed
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let mut out = std::io::stdout();
    run_with(config, args, &mut LinePrompt::stdio(), &cwd, &mut out).await
}

/// Same as [`run`] with every side-effecting boundary supplied by the caller
pub async fn run_with<C, P, W>(
    config: &C,
    args: CreateArgs,
    prompt: &mut P,
    cwd: &Path,
    out: &mut W,
) -> Result<()>
where
    C: ProductConfig,
    P: NamePrompt + ?Sized,
    W: Write,
{
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        format!("Welcome to {}!", config.display_name()).cyan().bold()
    )?;
    writeln!(out, "   {}", config.tagline())?;
    writeln!(out)?;

    let project_name = resolve_project_name(args.name, prompt, config.name_prompt())?;
    let template_dir = templates::resolve_template_dir(config, args.template_dir.as_deref());

    writeln!(out, "{} Creating project in \"{}\"...", "->".blue(), project_name)?;

    let report = Scaffolder::default()
        .scaffold(&project_name, &template_dir, cwd)
        .await?;

    writeln!(
        out,
        "{} {} file(s) and {} folder(s) in {}",
        "Created".green().bold(),
        report.copied.len(),
        report.directories,
        report.project_dir.display()
    )?;
    writeln!(out)?;
    writeln!(out, "{}", "Project created successfully!".green())?;
    writeln!(out)?;
    writeln!(out, "Next steps:")?;
    for step in config.next_steps(&project_name) {
        writeln!(out, "   {}", step)?;
    }
    writeln!(out)?;

    Ok(())
}
