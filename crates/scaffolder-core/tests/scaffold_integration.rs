//! End-to-end scaffolding against real temporary directories

use scaffolder_core::{copy_tree, scaffold, ExclusionPatterns, ScaffoldError};
use std::collections::BTreeMap;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

/// Build a template tree from (relative path, contents) pairs
fn template(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (rel, content) in files {
        let path = dir.path().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }
    dir
}

/// Snapshot a tree as relative path -> file contents (directories map to None)
fn snapshot(root: &Path) -> BTreeMap<String, Option<Vec<u8>>> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| entry.unwrap())
        .map(|entry| {
            let rel = entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            let content = if entry.file_type().is_file() {
                Some(std::fs::read(entry.path()).unwrap())
            } else {
                None
            };
            (rel, content)
        })
        .collect()
}

fn file_list(root: &Path) -> Vec<String> {
    snapshot(root)
        .into_iter()
        .filter(|(_, content)| content.is_some())
        .map(|(rel, _)| rel)
        .collect()
}

#[tokio::test]
async fn test_scaffold_creates_clean_project() {
    let template = template(&[
        ("README.md", "# Starter"),
        ("src/index.ts", "export default app;"),
        ("node_modules/x.js", "junk"),
    ]);
    let cwd = tempfile::tempdir().unwrap();

    let report = scaffold("my-app", template.path(), cwd.path())
        .await
        .unwrap();

    assert_eq!(report.project_dir, cwd.path().join("my-app"));
    assert_eq!(
        file_list(&cwd.path().join("my-app")),
        vec!["README.md".to_string(), "src/index.ts".to_string()]
    );
    assert_eq!(report.copied.len(), 2);
}

#[tokio::test]
async fn test_all_default_artifacts_are_left_out() {
    let template = template(&[
        ("src/app.ts", "app"),
        ("node_modules/pkg/index.js", "pkg"),
        (".git/HEAD", "ref"),
        ("build.log", "log"),
        (".DS_Store", ""),
        ("dist/index.js", "built"),
        ("out/index.js", "built"),
        (".cache/entry", "cached"),
        ("coverage/lcov.info", "cov"),
        (".env", "SECRET=1"),
        (".env.local", "SECRET=2"),
        (".env.development.local", "SECRET=3"),
        (".eslintcache", "[]"),
        ("tsconfig.tsbuildinfo", "{}"),
        (".idea/workspace.xml", "<xml/>"),
        ("packages/api/node_modules/dep.js", "dep"),
        ("packages/api/src/server.ts", "server"),
        (".env.example", "SECRET="),
        (".gitignore", "node_modules"),
    ]);
    let cwd = tempfile::tempdir().unwrap();

    scaffold("my-app", template.path(), cwd.path())
        .await
        .unwrap();

    assert_eq!(
        file_list(&cwd.path().join("my-app")),
        vec![
            ".env.example".to_string(),
            ".gitignore".to_string(),
            "packages/api/src/server.ts".to_string(),
            "src/app.ts".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_copy_without_artifacts_is_identical() {
    let template = template(&[
        ("package.json", "{\"name\":\"starter\"}"),
        ("src/index.ts", "console.log('hi');"),
        ("src/routes/paid.ts", "export const price = '$0.01';"),
        ("examples/client.py", "print('client')"),
    ]);
    std::fs::create_dir_all(template.path().join("public")).unwrap();
    let dest = tempfile::tempdir().unwrap();

    copy_tree(template.path(), dest.path(), &ExclusionPatterns::default())
        .await
        .unwrap();

    assert_eq!(snapshot(template.path()), snapshot(dest.path()));
}

#[tokio::test]
async fn test_invalid_name_creates_nothing() {
    let template = template(&[("README.md", "# Starter")]);
    let cwd = tempfile::tempdir().unwrap();

    let err = scaffold("my:app", template.path(), cwd.path())
        .await
        .unwrap_err();

    assert!(matches!(err, ScaffoldError::InvalidName { .. }));
    assert!(snapshot(cwd.path()).is_empty());
}

#[tokio::test]
async fn test_non_empty_destination_is_untouched() {
    let template = template(&[("README.md", "# Starter")]);
    let cwd = tempfile::tempdir().unwrap();
    let existing = cwd.path().join("my-app");
    std::fs::create_dir(&existing).unwrap();
    std::fs::write(existing.join("notes.txt"), "keep me").unwrap();

    let err = scaffold("my-app", template.path(), cwd.path())
        .await
        .unwrap_err();

    assert!(matches!(err, ScaffoldError::DestinationNotEmpty { .. }));
    assert_eq!(
        snapshot(&existing),
        BTreeMap::from([("notes.txt".to_string(), Some(b"keep me".to_vec()))])
    );
}

#[tokio::test]
async fn test_reserved_device_name_is_rejected() {
    let template = template(&[("README.md", "# Starter")]);
    let cwd = tempfile::tempdir().unwrap();

    for name in ["con", "Aux", "COM1", "lpt9"] {
        let err = scaffold(name, template.path(), cwd.path())
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidName { .. }), "{}", name);
    }
    assert!(snapshot(cwd.path()).is_empty());
}

#[cfg(unix)]
#[tokio::test]
async fn test_unreadable_entry_fails_copy() {
    use std::os::unix::fs::PermissionsExt;

    let template = template(&[("README.md", "# Starter"), ("secret/data.txt", "x")]);
    let locked = template.path().join("secret");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

    // Root ignores permission bits; nothing to assert in that case.
    if std::fs::read_dir(&locked).is_ok() {
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let cwd = tempfile::tempdir().unwrap();
    let err = scaffold("my-app", template.path(), cwd.path())
        .await
        .unwrap_err();
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

    match err {
        ScaffoldError::CopyFailed(copy) => assert_eq!(copy.path, locked),
        other => panic!("unexpected error: {}", other),
    }
    // No rollback: the project directory stays behind
    assert!(cwd.path().join("my-app").is_dir());
}
