//! Scaffold orchestration: validate, check, create, copy
//!
//! Every check that can fail without touching the filesystem runs before the
//! project directory is created. A failure during the copy itself leaves the
//! partially written project directory behind.

use crate::error::{Result, ScaffoldError};
use crate::name::is_valid_project_name;
use crate::templates::{copy_tree, ExclusionPatterns};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use tokio::fs;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name; prompted for when absent
    pub name: Option<String>,

    /// Template directory to use instead of the installed one
    pub template_dir: Option<PathBuf>,
}

/// Result of a successful scaffold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Absolute path of the created project
    pub project_dir: PathBuf,
    /// Files copied, relative to the project directory
    pub copied: Vec<PathBuf>,
    /// Directories created below the project directory
    pub directories: usize,
    /// Template entries left out as development artifacts
    pub skipped: Vec<PathBuf>,
}

/// Materializes new projects from a template tree
#[derive(Debug, Clone, Default)]
pub struct Scaffolder {
    exclusions: ExclusionPatterns,
}

impl Scaffolder {
    /// Create a scaffolder with a custom exclusion set
    pub fn new(exclusions: ExclusionPatterns) -> Self {
        Self { exclusions }
    }

    /// Create `<cwd>/<raw_name>` and fill it from `template_root`
    pub async fn scaffold(
        &self,
        raw_name: &str,
        template_root: &Path,
        cwd: &Path,
    ) -> Result<ScaffoldReport> {
        let project_dir =
            std::path::absolute(cwd.join(raw_name)).unwrap_or_else(|_| cwd.join(raw_name));

        if !is_valid_project_name(raw_name) {
            return Err(ScaffoldError::InvalidName {
                name: raw_name.to_string(),
            });
        }

        if has_content(&project_dir).await {
            return Err(ScaffoldError::DestinationNotEmpty { path: project_dir });
        }

        if !fs::try_exists(template_root).await.unwrap_or(false) {
            return Err(ScaffoldError::TemplateMissing {
                path: template_root.to_path_buf(),
            });
        }

        if nests_in_template(template_root, cwd, raw_name).await {
            return Err(ScaffoldError::DestinationInsideTemplate {
                path: project_dir,
                template: template_root.to_path_buf(),
            });
        }

        debug!("Creating project directory {}", project_dir.display());
        fs::create_dir_all(&project_dir)
            .await
            .map_err(|source| ScaffoldError::DirectoryCreateFailed {
                path: project_dir.clone(),
                source,
            })?;

        let report = match copy_tree(template_root, &project_dir, &self.exclusions).await {
            Ok(report) => report,
            Err(e) => {
                warn!(
                    "Copy aborted, {} may be partially populated",
                    project_dir.display()
                );
                return Err(e.into());
            }
        };

        info!(
            "Copied {} files into {} ({} entries skipped)",
            report.copied.len(),
            project_dir.display(),
            report.skipped.len()
        );

        Ok(ScaffoldReport {
            project_dir,
            copied: report.copied,
            directories: report.directories,
            skipped: report.skipped,
        })
    }
}

/// Scaffold with the default exclusion patterns
pub async fn scaffold(raw_name: &str, template_root: &Path, cwd: &Path) -> Result<ScaffoldReport> {
    Scaffolder::default()
        .scaffold(raw_name, template_root, cwd)
        .await
}

/// True if `path` is an existing non-directory or a directory with entries.
///
/// Anything that cannot be inspected is reported as absent; creating the
/// directory then fails with the real cause.
async fn has_content(path: &Path) -> bool {
    match fs::metadata(path).await {
        Ok(metadata) if !metadata.is_dir() => true,
        Ok(_) => match fs::read_dir(path).await {
            Ok(mut entries) => matches!(entries.next_entry().await, Ok(Some(_))),
            Err(_) => false,
        },
        Err(_) => false,
    }
}

/// True if `<cwd>/<name>` would end up inside the template tree being copied
async fn nests_in_template(template_root: &Path, cwd: &Path, name: &str) -> bool {
    let (Ok(template), Ok(cwd)) = (
        fs::canonicalize(template_root).await,
        fs::canonicalize(cwd).await,
    ) else {
        return false;
    };
    cwd.join(name).starts_with(template)
}
