//! Integration tests driving the binary over piped stdin.

use std::fs;
use std::path::Path;
use std::time::Duration;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// One answer per prompt, in collection order.
const VALID_ANSWERS: &str = "Jane Doe\n21A51A0501\n3\n2\n01/10/2023\nCSE\nJohn Doe\n2023-24\n";

/// Every prompt, back to back, as a clean run prints them on stdout.
const PROMPT_SEQUENCE: &str = "Enter student's name: Enter student's roll number: \
     Enter year (1-4): Enter semester (1 or 2): Enter date (dd/mm/yyyy, e.g., 23/09/2023): \
     Enter branch (CSE-AIML / CSE / CSE-DS / CSE-CS): Enter father's name: \
     Enter academic year (yyyy-yy, e.g., 2022-23): ";

fn bonafide() -> Command {
    let mut cmd = Command::cargo_bin("bonafide").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd.timeout(Duration::from_secs(30));
    cmd
}

fn write_logo(dir: &Path) {
    let logo = image::RgbImage::from_pixel(60, 60, image::Rgb([128, 0, 32]));
    logo.save(dir.join("logo.png")).unwrap();
}

/// Test that all eight prompts appear in order and a missing logo is the
/// failure, not the input handling.
#[test]
fn collects_every_field_in_order() {
    let temp_dir = TempDir::new().unwrap();

    bonafide()
        .current_dir(temp_dir.path())
        .write_stdin(VALID_ANSWERS)
        .assert()
        .failure()
        .stdout(predicate::str::contains(PROMPT_SEQUENCE))
        .stdout(predicate::str::contains("has been generated").not())
        .stderr(predicate::str::contains("logo.png"));
}

/// Test that a rejected answer prints the retry line and the field is asked
/// again.
#[test]
fn rejected_answer_prints_the_retry_line() {
    let temp_dir = TempDir::new().unwrap();
    let answers = "Jane Doe\n21A51A0501\n9\n3\n2\n01/10/2023\nCSE\nJohn Doe\n2023-24\n";

    bonafide()
        .current_dir(temp_dir.path())
        .write_stdin(answers)
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Invalid input for Enter year (1-4): . Please try again.",
        ));
}

/// Test that a date before the cutoff is rejected and a later one accepted.
#[test]
fn date_before_the_cutoff_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let answers = "Jane Doe\n21A51A0501\n3\n2\n22/09/2023\n01/10/2023\nCSE\nJohn Doe\n2023-24\n";

    bonafide()
        .current_dir(temp_dir.path())
        .write_stdin(answers)
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Invalid input for Enter date (dd/mm/yyyy, e.g., 23/09/2023): . Please try again.",
        ));
}

/// Test that the roll number is taken verbatim, with no validation pass.
#[test]
fn roll_number_is_accepted_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let answers = "Jane Doe\n!!##??\n3\n2\n01/10/2023\nCSE\nJohn Doe\n2023-24\n";

    bonafide()
        .current_dir(temp_dir.path())
        .write_stdin(answers)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid input for").not());
}

/// Test that a closed stdin aborts the run instead of spinning on the
/// current prompt.
#[test]
fn closed_stdin_fails_fast() {
    let temp_dir = TempDir::new().unwrap();

    bonafide()
        .current_dir(temp_dir.path())
        .write_stdin("Jane Doe\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("stdin closed"));
}

/// Test a full run with the logo in place. On hosts without any of the
/// searched TTF families the run fails with a diagnostic naming the font
/// search instead of producing a PDF.
#[test]
fn renders_a_pdf_when_assets_are_in_place() {
    let temp_dir = TempDir::new().unwrap();
    write_logo(temp_dir.path());

    let output = bonafide()
        .current_dir(temp_dir.path())
        .write_stdin(VALID_ANSWERS)
        .output()
        .unwrap();

    if output.status.success() {
        let pdf_path = temp_dir.path().join("bonafide_certificate.pdf");
        let bytes = fs::read(&pdf_path).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "output is not a PDF");
        assert!(!pdf_path.with_extension("pdf.tmp").exists());

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains(
            "Bonafide certificate has been generated as 'bonafide_certificate.pdf'"
        ));
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("font"), "unexpected failure: {stderr}");
    }
}
