use std::error::Error;
use std::process::{Command, Output};

#[test]
pub fn defaults() -> Result<(), Box<dyn Error>> {
    let output = iter_power(&[])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "10000\n");
    Ok(())
}

#[test]
pub fn base_and_exponent() -> Result<(), Box<dyn Error>> {
    let output = iter_power(&["2", "10"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1024\n");
    Ok(())
}

#[test]
pub fn base_only() -> Result<(), Box<dyn Error>> {
    let output = iter_power(&["5"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "625\n");
    Ok(())
}

#[test]
pub fn extra_arguments_are_ignored() -> Result<(), Box<dyn Error>> {
    let output = iter_power(&["3", "3", "99", "100"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "27\n");
    Ok(())
}

#[test]
pub fn flag_like_extra_arguments_are_ignored() -> Result<(), Box<dyn Error>> {
    let output = iter_power(&["2", "3", "--bogus"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "8\n");

    let output = iter_power(&["2", "3", "-x", "--steps"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "8\n");
    Ok(())
}

#[test]
pub fn hyphenated_non_numeric_base() -> Result<(), Box<dyn Error>> {
    let output = iter_power(&["--color", "never", "-abc"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("invalid argument"));
    Ok(())
}

#[test]
pub fn large_step_table_streams() -> Result<(), Box<dyn Error>> {
    let output = iter_power(&["--steps", "--color", "never", "1", "100000"])?;
    assert!(output.status.success());
    let text = stdout(&output);
    assert_eq!(text.lines().count(), 100_003);
    assert_eq!(text.lines().last(), Some("1"));
    Ok(())
}

#[test]
pub fn negative_operands() -> Result<(), Box<dyn Error>> {
    let output = iter_power(&["-2", "3"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "-8\n");

    let output = iter_power(&["7", "-1"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1\n");
    Ok(())
}

#[test]
pub fn overflow_wraps() -> Result<(), Box<dyn Error>> {
    let output = iter_power(&["2", "31"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "-2147483648\n");
    Ok(())
}

#[test]
pub fn invalid_argument() -> Result<(), Box<dyn Error>> {
    let output = iter_power(&["--color", "never", "abc"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("base `abc` is not a valid integer"));
    assert!(stderr.contains("caused by invalid digit found in string"));

    let output = iter_power(&["2", "ten"])?;
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
pub fn strict_rejects_negative_exponent() -> Result<(), Box<dyn Error>> {
    let output = iter_power(&["--strict", "2", "-1"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let output = iter_power(&["--strict", "2", "0"])?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1\n");
    Ok(())
}

#[test]
pub fn steps_table() -> Result<(), Box<dyn Error>> {
    let output = iter_power(&["--steps", "--color", "never", "3", "2"])?;
    assert!(output.status.success());
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.first(), Some(&"pow(3, 2):"));
    assert_eq!(lines.len(), 5);
    assert_eq!(lines.last(), Some(&"9"));
    Ok(())
}

#[test]
pub fn quiet_suppresses_diagnostics() -> Result<(), Box<dyn Error>> {
    let output = iter_power(&["-q", "abc"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.is_empty());
    Ok(())
}

fn iter_power(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    let mut command = Command::new(env!("CARGO_BIN_EXE_iter-power"));
    command.args(args);
    command.output().map_err(|err| err.into())
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
