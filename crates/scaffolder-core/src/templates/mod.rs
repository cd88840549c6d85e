//! Template location, exclusion and copying
//!
//! This module provides:
//! - Template directory resolution (flag, environment, install dir, bundled)
//! - Segment-based exclusion of development artifacts
//! - Recursive tree copying

pub mod copier;
pub mod exclude;

use crate::product::ProductConfig;
use log::debug;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub use copier::{copy_tree, CopyReport};
pub use exclude::{ExclusionPatterns, DEFAULT_EXCLUDE_PATTERNS};

/// Name of the template directory expected beside the executable
pub const TEMPLATE_DIR_NAME: &str = "template";

/// Locate the template tree for a product.
///
/// An explicit `--template-dir` or the product's environment variable is
/// returned as-is, even if it does not exist, so that the caller reports it as
/// missing instead of silently falling back.
pub fn resolve_template_dir<C: ProductConfig>(config: &C, explicit: Option<&Path>) -> PathBuf {
    let install_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    resolve_template_dir_from(
        explicit,
        std::env::var_os(config.template_dir_env()),
        install_dir.as_deref(),
        config.bundled_template_dir(),
    )
}

fn resolve_template_dir_from(
    explicit: Option<&Path>,
    env_value: Option<OsString>,
    install_dir: Option<&Path>,
    bundled: PathBuf,
) -> PathBuf {
    if let Some(path) = explicit {
        debug!("Using template directory from --template-dir: {}", path.display());
        return path.to_path_buf();
    }

    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        let path = PathBuf::from(value);
        debug!("Using template directory from environment: {}", path.display());
        return path;
    }

    if let Some(dir) = install_dir {
        let beside = dir.join(TEMPLATE_DIR_NAME);
        if beside.is_dir() {
            debug!("Using template directory beside executable: {}", beside.display());
            return beside;
        }
    }

    debug!("Using bundled template directory: {}", bundled.display());
    bundled
}
