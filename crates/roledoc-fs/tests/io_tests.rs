use pretty_assertions::assert_eq;
use roledoc_fs::{Error, io};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("roles.md");

    io::write_atomic(&path, b"| API Groups |\n").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "| API Groups |\n");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("roles.md");
    fs::write(&path, "original").unwrap();

    io::write_atomic(&path, b"updated").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
}

#[test]
fn test_write_atomic_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("docs").join("rbac").join("roles.md");

    io::write_atomic(&path, b"deep content").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "deep content");
}

#[test]
fn test_write_atomic_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    io::write_atomic(&temp.path().join("roles.md"), b"content").unwrap();

    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();

    assert!(
        leftovers.is_empty(),
        "No temp files should remain after a successful write, found: {:?}",
        leftovers.iter().map(|e| e.file_name()).collect::<Vec<_>>()
    );
}

#[test]
fn test_write_atomic_preserves_bytes_exactly() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("roles.md");
    let content = b"no trailing newline\r\n\x00binary\xff";

    io::write_atomic(&path, content).unwrap();

    assert_eq!(fs::read(&path).unwrap(), content.to_vec());
}

#[test]
fn test_read_text_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("role.yaml");
    fs::write(&path, "rules: []\n").unwrap();

    assert_eq!(io::read_text(&path).unwrap(), "rules: []\n");
}

#[test]
fn test_read_text_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.yaml");

    let err = io::read_text(&path).unwrap_err();

    match err {
        Error::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_read_text_rejects_invalid_utf8() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("role.yaml");
    fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

    assert!(matches!(io::read_text(&path), Err(Error::Io { .. })));
}

#[test]
fn test_read_optional_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("README.md");
    fs::write(&path, "# Title\n").unwrap();

    assert_eq!(
        io::read_optional(&path).unwrap(),
        Some(b"# Title\n".to_vec())
    );
}

#[cfg(unix)]
mod unix_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::os::unix::fs::PermissionsExt;

    fn running_as_root() -> bool {
        // Root ignores permission bits, so these checks are meaningless there.
        std::process::Command::new("id")
            .arg("-u")
            .output()
            .map(|o| String::from_utf8_lossy(&o.stdout).trim() == "0")
            .unwrap_or(false)
    }

    #[test]
    fn test_read_optional_unreadable_file_is_error() {
        if running_as_root() {
            return;
        }
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("README.md");
        fs::write(&path, "secret").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();

        let result = io::read_optional(&path);

        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    fn mode(path: &std::path::Path) -> u32 {
        fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[test]
    fn test_write_atomic_keeps_destination_mode() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("README.md");
        fs::write(&path, "original").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).unwrap();

        io::write_atomic(&path, b"updated").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
        assert_eq!(mode(&path), 0o600);
    }

    #[test]
    fn test_write_atomic_follows_symlinked_destination() {
        let temp = TempDir::new().unwrap();
        let real = temp.path().join("real.md");
        let link = temp.path().join("README.md");
        fs::write(&real, "original").unwrap();
        fs::set_permissions(&real, fs::Permissions::from_mode(0o600)).unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        io::write_atomic(&link, b"updated").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "updated");
        assert_eq!(fs::read_to_string(&link).unwrap(), "updated");
        assert_eq!(mode(&real), 0o600);
    }

    #[test]
    fn test_write_atomic_into_readonly_dir_keeps_original() {
        if running_as_root() {
            return;
        }
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("locked");
        fs::create_dir(&dir).unwrap();
        let path = dir.join("README.md");
        fs::write(&path, "original").unwrap();
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).unwrap();

        let result = io::write_atomic(&path, b"replacement");

        fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }
}
