//! Recursive template tree copying with artifact exclusion

use crate::error::CopyError;
use crate::templates::exclude::ExclusionPatterns;
use log::{debug, trace};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// What a copy did, as paths relative to the template root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Files written to the destination
    pub copied: Vec<PathBuf>,
    /// Excluded entries; descendants of an excluded directory are not listed
    pub skipped: Vec<PathBuf>,
    /// Directories created below the destination root
    pub directories: usize,
}

/// Copy the tree at `source_root` into `dest_root`, skipping excluded entries.
///
/// Entries are visited depth-first in pre-order, one filesystem operation at a
/// time, so a directory always exists before its children are written. Any
/// error aborts the copy; files already written are left in place.
pub async fn copy_tree(
    source_root: &Path,
    dest_root: &Path,
    exclusions: &ExclusionPatterns,
) -> Result<CopyReport, CopyError> {
    let mut report = CopyReport::default();
    let mut pending: Vec<(PathBuf, PathBuf)> =
        vec![(source_root.to_path_buf(), dest_root.to_path_buf())];

    while let Some((src, dest)) = pending.pop() {
        let relative = src.strip_prefix(source_root).unwrap_or(&src).to_path_buf();

        if exclusions.should_exclude(&src, source_root) {
            debug!("Skipping excluded entry: {}", relative.display());
            report.skipped.push(relative);
            continue;
        }

        let metadata = fs::metadata(&src)
            .await
            .map_err(|e| CopyError::new(&src, e))?;

        if metadata.is_dir() {
            fs::create_dir_all(&dest)
                .await
                .map_err(|e| CopyError::new(&src, e))?;
            if !relative.as_os_str().is_empty() {
                report.directories += 1;
            }

            let mut children = Vec::new();
            let mut entries = fs::read_dir(&src)
                .await
                .map_err(|e| CopyError::new(&src, e))?;
            while let Some(entry) = entries
                .next_entry()
                .await
                .map_err(|e| CopyError::new(&src, e))?
            {
                let name = entry.file_name();
                children.push((src.join(&name), dest.join(&name)));
            }

            // Reversed so the stack pops children in listing order
            pending.extend(children.into_iter().rev());
        } else if metadata.is_file() {
            copy_file(&src, &dest).await?;
            trace!("Copied {}", relative.display());
            report.copied.push(relative);
        } else {
            debug!("Ignoring special file: {}", relative.display());
        }
    }

    Ok(report)
}

/// Copy file contents only; the destination must not exist yet
async fn copy_file(src: &Path, dest: &Path) -> Result<(), CopyError> {
    let mut reader = fs::File::open(src)
        .await
        .map_err(|e| CopyError::new(src, e))?;
    let mut writer = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest)
        .await
        .map_err(|e| CopyError::new(src, e))?;

    tokio::io::copy(&mut reader, &mut writer)
        .await
        .map_err(|e| CopyError::new(src, e))?;
    writer.flush().await.map_err(|e| CopyError::new(src, e))?;

    Ok(())
}
