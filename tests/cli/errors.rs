use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_missing_file_creates_no_output() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["-o", "out.txt", "nofile.ext"])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "error: nofile.ext: no such file\n");
    assert!(!test.root().join("out.txt").exists());
    Ok(())
}

#[test]
fn test_every_failing_file_is_reported() -> Result<()> {
    let test = CliTest::with_file("ok.py", "x = 1\n")?;
    test.write_file("dir/inner.py", "")?;

    let output = test.run(&["missing.py", "ok.py", "dir"])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert_eq!(
        stderr(&output),
        "error: missing.py: no such file\nerror: dir: is a directory\n"
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unreadable_file() -> Result<()> {
    use std::{fs, os::unix::fs::PermissionsExt};

    let test = CliTest::with_file("secret.sh", "echo hi\n")?;
    let path = test.root().join("secret.sh");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o000))?;

    // Permission bits do not stop root, so only assert when the open really fails.
    if fs::File::open(&path).is_err() {
        let output = test.run(&["secret.sh"])?;
        assert_eq!(output.status.code(), Some(1));
        assert_eq!(stderr(&output), "error: secret.sh: permission denied\n");
    }
    Ok(())
}

#[test]
fn test_output_in_missing_directory() -> Result<()> {
    let test = CliTest::with_file("a.py", "x = 1\n")?;

    let output = test.run(&["-o", "missing/out.txt", "a.py"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: cannot create output file missing/out.txt"));
    Ok(())
}

#[test]
fn test_output_same_as_input_is_refused() -> Result<()> {
    let test = CliTest::with_file("a.py", "# keep me\nx = 1\n")?;

    let output = test.run(&["-o", "a.py", "a.py"])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "error: output file a.py is also an input file\n");
    assert_eq!(test.read_file("a.py")?, "# keep me\nx = 1\n");
    Ok(())
}

#[test]
fn test_invalid_config_file() -> Result<()> {
    let test = CliTest::with_file("a.py", "x = 1\n")?;
    test.write_file(".neatfilerc.json", "{ not json")?;

    let output = test.run(&["a.py"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("failed to parse config file"));
    Ok(())
}
