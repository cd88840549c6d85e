//! create-x402-app - Project scaffolding for x402 Hono servers

use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;
use scaffolder_core::{CreateArgs, ProductConfig, ScaffoldError};
use std::path::PathBuf;

/// x402 product configuration
#[derive(Clone)]
pub struct X402Config;

impl ProductConfig for X402Config {
    fn name(&self) -> &'static str {
        "create-x402-app"
    }

    fn display_name(&self) -> &'static str {
        "create-x402-app"
    }

    fn tagline(&self) -> &'static str {
        "Create a new Hono server application"
    }

    fn template_dir_env(&self) -> &'static str {
        "CREATE_X402_APP_TEMPLATE_DIR"
    }

    fn bundled_template_dir(&self) -> PathBuf {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/template"))
    }

    fn next_steps(&self, project_name: &str) -> Vec<String> {
        vec![
            format!("cd {}", project_name),
            "bun install".to_string(),
            "bun run dev".to_string(),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-x402-app")]
#[command(about = "Create a new x402 Hono server application")]
#[command(version)]
pub struct Args {
    /// Name of the project directory to create
    pub name: Option<String>,

    /// Local directory to use as the template instead of the installed one
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Use plain line-based output instead of interactive prompts
    #[arg(long)]
    pub plain: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl From<&Args> for CreateArgs {
    fn from(args: &Args) -> Self {
        CreateArgs {
            name: args.name.clone(),
            template_dir: args.template_dir.clone(),
        }
    }
}

fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose > 0 {
        builder.filter_level(log_level(verbose));
    }
    builder.init();
}

/// Run the scaffold with the front-end suited to the terminal
async fn run(args: &Args) -> Result<()> {
    let config = X402Config;
    let interactive = !args.plain && console::Term::stdout().is_term();

    if interactive {
        scaffolder_core::run(&config, CreateArgs::from(args)).await
    } else {
        scaffolder_core::plain::run(&config, CreateArgs::from(args)).await
    }
}

/// Print a failure and leave with status 1
fn report_error(err: &anyhow::Error) -> ! {
    eprintln!();
    eprintln!("{} {}", "Error:".red().bold(), err);
    if let Some(cause) = err.chain().nth(1) {
        log::debug!("Caused by: {}", cause);
    }
    if let Some(scaffold_err) = err.downcast_ref::<ScaffoldError>() {
        if !scaffold_err.is_pre_write() {
            eprintln!("   Files written before the failure were left in place.");
        }
    }
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_logging(args.verbose);

    let result = run(&args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        report_error(&err);
    }
}
