use anyhow::Result;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

struct CommandOutput {
    stderr: String,
    exit_code: i32,
}

fn run_retag(args: &[&str]) -> Result<CommandOutput> {
    let output = Command::new(env!("CARGO_BIN_EXE_retag")).args(args).output()?;

    Ok(CommandOutput {
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(-1),
    })
}

#[test]
fn test_relabel_annotation_file() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("RM-P001.CHORUS.TXT");
    let output = dir.path().join("rwc01.txt");

    fs::write(
        &input,
        "0\t1500\tintro\n1500\t4200\tverse\n4200\t6900\tchorus\n6900\t9000\tverse\n",
    )?;

    let result = run_retag(&[input.to_str().unwrap(), output.to_str().unwrap()])?;
    assert_eq!(result.exit_code, 0, "retag failed: {}", result.stderr);

    let content = fs::read_to_string(&output)?;
    assert_eq!(
        content,
        "0.000000\t15.000000\tA\n15.000000\t42.000000\tB\n42.000000\t69.000000\tC\n69.000000\t90.000000\tB\n"
    );

    Ok(())
}

#[test]
fn test_malformed_input_fails_with_line_number() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("broken.txt");
    let output = dir.path().join("out.txt");

    fs::write(&input, "0\t1500\tintro\n1500\tnope\tverse\n")?;

    let result = run_retag(&[input.to_str().unwrap(), output.to_str().unwrap()])?;
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("line 2"), "stderr: {}", result.stderr);
    assert!(!output.exists());

    Ok(())
}

#[test]
fn test_missing_input_file_fails() -> Result<()> {
    let dir = TempDir::new()?;
    let output = dir.path().join("out.txt");

    let result = run_retag(&["/nonexistent/annotations.txt", output.to_str().unwrap()])?;
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("Failed to open input file"));

    Ok(())
}

#[test]
fn test_more_than_26_tags_warns_but_succeeds() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("many.txt");
    let output = dir.path().join("out.txt");

    let lines: String = (0..27)
        .map(|i| format!("{}\t{}\tsection{}\n", i * 100, (i + 1) * 100, i))
        .collect();
    fs::write(&input, &lines)?;

    let result = run_retag(&[input.to_str().unwrap(), output.to_str().unwrap()])?;
    assert_eq!(result.exit_code, 0, "retag failed: {}", result.stderr);
    assert!(
        result.stderr.contains("27 unique tags"),
        "stderr: {}",
        result.stderr
    );

    let content = fs::read_to_string(&output)?;
    let last = content.lines().last().unwrap();
    assert!(last.ends_with("\t["));

    Ok(())
}
