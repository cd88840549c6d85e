//! Scaffolder Core - Shared library for project scaffolding CLIs
//!
//! This library materializes a new project directory from a local template
//! tree, leaving out development artifacts such as dependency caches, build
//! output, VCS metadata, logs and local secrets.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Name validation, artifact exclusion, tree copying
//! - **Layer 2: Workflow Orchestration** - `Scaffolder` and the `ProductConfig` trait
//! - **Layer 3: CLI/TUI Interface** - cliclack prompts (feature-gated) or plain output
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::scaffold;
//!
//! let cwd = std::env::current_dir()?;
//! let report = scaffold("my-app", Path::new("template"), &cwd).await?;
//! println!("Created {} files", report.copied.len());
//! ```

pub mod error;
pub mod name;
pub mod plain;
pub mod product;
pub mod prompt;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{CopyError, ScaffoldError};
pub use name::is_valid_project_name;
pub use product::ProductConfig;
pub use prompt::{resolve_project_name, LinePrompt, NamePrompt};
pub use scaffold::{scaffold, CreateArgs, ScaffoldReport, Scaffolder};
pub use templates::{copy_tree, CopyReport, ExclusionPatterns, DEFAULT_EXCLUDE_PATTERNS};

#[cfg(feature = "tui")]
pub use tui::run;
