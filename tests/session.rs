//! E2E tests for the interactive session and the non-interactive commands

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn taxsave(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_taxsave"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for command")
}

/// Income 600000, age 45, explore Section 80D
#[test]
fn session_health_insurance_details() {
    let output = taxsave(&[], "600000\nyes\n45\n2\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("Welcome to the Tax Saving Assistant!"));
    assert!(stdout.contains("you fall under the '20% Tax Bracket'"));
    assert!(stdout.contains("1. Section: Section 80C"));
    assert!(stdout.contains("2. Section: Section 80D"));
    assert!(stdout.contains("3. Section: Section 80E"));
    assert!(stdout.contains("Detailed Information about Section 80D:"));
    assert!(stdout.contains("Investment: Health Insurance"));
    assert!(!stdout.contains("Investment: PPF"));
    assert!(stdout.contains("- Purchase a health insurance policy from an insurance company."));
    assert!(stdout.contains("- Ensure the policy is in the name of the insured person."));
    assert!(stdout.contains("- Keep the premium receipts for claiming deductions."));
}

/// Senior citizens are not offered Section 80D
#[test]
fn session_senior_citizen() {
    let output = taxsave(&["advise"], "1500000\nyup\n70\nno\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("'30% Tax Bracket'"));
    assert!(stdout.contains("1. Section: Section 80C"));
    assert!(stdout.contains("2. Section: Section 80E"));
    assert!(!stdout.contains("Section 80D"));
    assert!(!stdout.contains("Detailed Information"));
}

#[test]
fn session_declined() {
    let output = taxsave(&[], "200000\nnope\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("you fall under the 'No Tax'"));
    assert!(stdout.contains("Thank you for using the Tax Saving Assistant!"));
}

#[test]
fn session_retries_income() {
    let output = taxsave(&[], "ten lakh\n1000000\nno\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Invalid input. Please enter a numeric value."));
    assert!(stdout.contains("you fall under the '20% Tax Bracket'"));
}

#[test]
fn session_out_of_range_choice() {
    let output = taxsave(&[], "600000\nyes\n45\n99\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Invalid choice. Please run the program again."));
}

#[test]
fn session_invalid_age_fails() {
    let output = taxsave(&[], "600000\nyes\nold\n");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("invalid age"));
}

#[test]
fn bracket_json() {
    let output = taxsave(&["bracket", "--income", "500000", "--json"], "");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(json["bracket"], "5% Tax Bracket");
    assert_eq!(json["rate_pct"], "5");
}

#[test]
fn schemes_table() {
    let output = taxsave(&["schemes", "--age", "30"], "");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Section 80C"));
    assert!(stdout.contains("Section 80D"));
    assert!(stdout.contains("Section 80E"));
    assert!(stdout.contains("PPF, ELSS, NPS"));
}

#[test]
fn schemes_section_details() {
    let output = taxsave(&["schemes", "--age", "45", "--section", "1"], "");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("Investment: PPF"));
    assert!(stdout.contains("Investment: ELSS"));
    assert!(stdout.contains("Investment: NPS"));
}

#[test]
fn schemes_invalid_section() {
    let output = taxsave(&["schemes", "--age", "45", "--section", "99"], "");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Invalid choice"));
}

#[test]
fn schemes_json_excludes_80d_for_seniors() {
    let output = taxsave(&["schemes", "--age", "61", "--json"], "");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    let keys: Vec<_> = json["schemes"]
        .as_array()
        .expect("schemes array")
        .iter()
        .map(|s| s["section"]["key"].as_str().expect("key").to_string())
        .collect();
    assert_eq!(keys, vec!["Section 80C", "Section 80E"]);
}

#[test]
fn schema_is_json() {
    let output = taxsave(&["schema"], "");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(json["title"], "Catalog");
}

#[test]
fn catalog_single_section_json() {
    let output = taxsave(&["catalog", "--section", "Section 80D", "--json"], "");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(json[0]["section"]["key"], "Section 80D");
    assert_eq!(json[0]["eligibility"]["max_age"]["value"], 60);
}

#[test]
fn catalog_unknown_section() {
    let output = taxsave(&["catalog", "--section", "Section 99Z"], "");
    assert!(!output.status.success());
}

#[test]
fn schemes_section_rejects_output_modes() {
    for mode in ["--json", "--csv"] {
        let output = taxsave(&["schemes", "--age", "45", "--section", "1", mode], "");
        let stderr = String::from_utf8_lossy(&output.stderr);

        assert!(!output.status.success(), "{} accepted with --section", mode);
        assert!(stderr.contains("cannot be used with"));
    }
}
