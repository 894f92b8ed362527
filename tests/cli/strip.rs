use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const PYTHON: &str = "  # comment
x = 1

y = 2  # trailing
";

#[test]
fn test_python_comments_and_blanks_removed() -> Result<()> {
    let test = CliTest::with_file("foo.py", PYTHON)?;

    let output = test.run(&["foo.py"])?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @r"
    x = 1
    y = 2  # trailing
    ");
    assert_eq!(stderr(&output), "");
    Ok(())
}

#[test]
fn test_keep_empty_flag_variants() -> Result<()> {
    let test = CliTest::with_file("foo.py", PYTHON)?;

    for flag in ["-k", "--keep-empty", "-keep-empty"] {
        let output = test.run(&[flag, "foo.py"])?;
        assert!(output.status.success(), "{}", flag);
        assert_eq!(stdout(&output), "x = 1\n\ny = 2  # trailing\n", "{}", flag);
    }
    Ok(())
}

#[test]
fn test_keep_empty_from_environment() -> Result<()> {
    let test = CliTest::with_file("foo.py", PYTHON)?;

    let output = test
        .command()
        .env("NEATFILE_KEEP_EMPTY", "true")
        .arg("foo.py")
        .output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "x = 1\n\ny = 2  # trailing\n");
    Ok(())
}

#[test]
fn test_keep_empty_from_config_file() -> Result<()> {
    let test = CliTest::with_file("foo.py", PYTHON)?;
    test.write_file(".neatfilerc.json", r#"{ "keepEmpty": true }"#)?;

    let output = test.run(&["foo.py"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "x = 1\n\ny = 2  # trailing\n");
    Ok(())
}

#[test]
fn test_sql_block_comments() -> Result<()> {
    let test = CliTest::with_file(
        "a.sql",
        "/* block */
-- line comment
SELECT *
/* start
FROM t
end */
WHERE id = 1; /* inline */
",
    )?;

    let output = test.run(&["a.sql"])?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @r"
    SELECT *
    /* start
    FROM t
    end */
    ");
    Ok(())
}

#[test]
fn test_unknown_extension_only_drops_blank_lines() -> Result<()> {
    let test = CliTest::with_file("notes.xyz", "# heading\n\n// note\n   \n-- item\n")?;

    let output = test.run(&["notes.xyz"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "# heading\n// note\n-- item\n");

    let output = test.run(&["-k", "notes.xyz"])?;
    assert_eq!(stdout(&output), "# heading\n\n// note\n   \n-- item\n");
    Ok(())
}

#[test]
fn test_output_file() -> Result<()> {
    let test = CliTest::with_file("main.go", "// Package main\npackage main\n\nfunc main() {}\n")?;

    let output = test.run(&["-o", "out.txt", "main.go"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
    assert_eq!(test.read_file("out.txt")?, "package main\nfunc main() {}\n");
    Ok(())
}

#[test]
fn test_multiple_files_in_argument_order() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("b.hs", "-- b\nmain = pure ()\n{- note -}\n")?;
    test.write_file("a.erl", "% a\n-module(a).\n")?;
    test.write_file("c.ml", "(* c *)\nlet c = 1 (* kept *)\n")?;

    let output = test.run(&["b.hs", "a.erl", "c.ml"])?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @r"
    main = pure ()
    -module(a).
    let c = 1 (* kept *)
    ");
    Ok(())
}

#[test]
fn test_crlf_input_is_normalized() -> Result<()> {
    let test = CliTest::with_file("app.ts", "// header\r\nconst a = 1;\r\n\r\n")?;

    let output = test.run(&["app.ts"])?;

    assert_eq!(stdout(&output), "const a = 1;\n");
    Ok(())
}

#[test]
fn test_output_is_idempotent() -> Result<()> {
    let test = CliTest::with_file(
        "lib.rs",
        "//! crate docs\n\nfn main() {\n    /* x */\n    let a = 1; // keep\n}\n",
    )?;

    test.run(&["-o", "once.rs", "lib.rs"])?;
    test.run(&["-o", "twice.rs", "once.rs"])?;

    assert_eq!(test.read_file("once.rs")?, test.read_file("twice.rs")?);
    Ok(())
}

#[test]
fn test_stats_summary() -> Result<()> {
    let test = CliTest::with_file("foo.py", PYTHON)?;

    let output = test.run(&["--stats", "foo.py"])?;

    assert!(output.status.success());
    assert_snapshot!(stderr(&output), @r"
    ✓ foo.py (hash+triple-quote): 4 lines read, 1 comment line and 1 blank line removed, 2 lines written
    Processed 1 file: 1 comment line and 1 blank line removed
    ");
    Ok(())
}
