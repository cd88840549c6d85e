//! Product configuration trait for CLI binaries
//!
//! Each scaffolding binary implements this trait to describe its identity,
//! where its template tree lives and what to tell the user afterwards.

use std::path::PathBuf;

/// Configuration trait for different CLI products
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// One-line description shown under the welcome banner
    fn tagline(&self) -> &'static str;

    /// Environment variable name for overriding the template directory
    fn template_dir_env(&self) -> &'static str;

    /// Template tree shipped with the product sources, used as last resort
    fn bundled_template_dir(&self) -> PathBuf;

    /// Question asked when no project name was given on the command line
    fn name_prompt(&self) -> &'static str {
        "What is your project named?"
    }

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, project_name: &str) -> Vec<String>;
}
