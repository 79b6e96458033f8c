use std::process::{Command, Output};

fn lsdep() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lsdep"));
    cmd.env_remove("LSDEP_TOOL")
        .env_remove("LSDEP_DUPLICATES")
        .env_remove("RUST_LOG");
    cmd
}

fn assert_usage_error(output: &Output) {
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_no_arguments_is_usage_error() {
    let output = lsdep().output().unwrap();
    assert_usage_error(&output);
}

#[test]
fn test_two_arguments_is_usage_error() {
    let output = lsdep().args(["/bin/ls", "/bin/cat"]).output().unwrap();
    assert_usage_error(&output);
}

#[test]
fn test_missing_tool_fails_without_output() {
    let output = lsdep()
        .arg("/bin/ls")
        .env("LSDEP_TOOL", "/nonexistent/lsdep-test-tool")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_duplicate_policy() {
    let output = lsdep()
        .arg("/bin/ls")
        .env("LSDEP_DUPLICATES", "merge")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[cfg(unix)]
mod shim {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::lsdep;

    const TREE: &str = "\
prog => /opt/prog (/lib64/ld-linux-x86-64.so.2)
    liba.so => /lib/liba.so
        libc.so.6 => /lib/libc.so.6
    libb.so => /lib/libb.so
        liba.so => /lib/liba.so
            libhidden.so => /lib/libhidden.so
";

    fn write_tool(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("fake-lddtree");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn tree_tool(dir: &TempDir) -> PathBuf {
        let fixture = dir.path().join("tree.txt");
        fs::write(&fixture, TREE).unwrap();
        write_tool(dir, &format!("cat '{}'", fixture.display()))
    }

    #[test]
    fn test_prints_breadth_first_names() {
        let dir = TempDir::new().unwrap();
        let tool = tree_tool(&dir);

        let output = lsdep()
            .arg("/opt/prog")
            .env("LSDEP_TOOL", &tool)
            .output()
            .unwrap();

        assert!(output.status.success());
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            "liba.so libb.so libc.so.6\n"
        );
    }

    #[test]
    fn test_reparent_policy_from_env() {
        let dir = TempDir::new().unwrap();
        let tool = tree_tool(&dir);

        let output = lsdep()
            .arg("/opt/prog")
            .env("LSDEP_TOOL", &tool)
            .env("LSDEP_DUPLICATES", "reparent")
            .output()
            .unwrap();

        assert!(output.status.success());
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            "liba.so libb.so libc.so.6 libhidden.so\n"
        );
    }

    #[test]
    fn test_tool_failure_reports_stderr() {
        let dir = TempDir::new().unwrap();
        let tool = write_tool(&dir, "echo 'not a dynamic ELF' >&2\nexit 1");

        let output = lsdep()
            .arg("/opt/prog")
            .env("LSDEP_TOOL", &tool)
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("not a dynamic ELF"));
    }

    #[test]
    fn test_tool_failure_reported_with_logging_off() {
        let dir = TempDir::new().unwrap();
        let tool = write_tool(&dir, "echo 'not a dynamic ELF' >&2\nexit 1");

        let output = lsdep()
            .arg("/opt/prog")
            .env("LSDEP_TOOL", &tool)
            .env("RUST_LOG", "off")
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("not a dynamic ELF"));
    }

    #[test]
    fn test_hyphen_leading_path_is_resolved() {
        let dir = TempDir::new().unwrap();
        let tool = tree_tool(&dir);

        let output = lsdep()
            .arg("-weird")
            .env("LSDEP_TOOL", &tool)
            .output()
            .unwrap();

        assert!(output.status.success());
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            "liba.so libb.so libc.so.6\n"
        );
    }

    #[test]
    fn test_malformed_output_fails() {
        let dir = TempDir::new().unwrap();
        let tool = write_tool(&dir, "echo 'prog'");

        let output = lsdep()
            .arg("/opt/prog")
            .env("LSDEP_TOOL", &tool)
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
    }
}
