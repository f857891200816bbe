//! End-to-end tests driving the interactive menu with scripted input.
//!
//! Each test feeds a full console session through the loop and asserts
//! on the exact messages the user would see.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use scholar::menu;
use scholar_core::Roster;
use std::io::Cursor;

/// Run a scripted session; returns the final roster and everything
/// written to the console.
fn run_script(script: &str) -> (Roster, String) {
    let mut roster = Roster::new();
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    menu::run(&mut roster, &mut input, &mut output).unwrap();
    (roster, String::from_utf8(output).unwrap())
}

/// Assert that `earlier` appears before `later` in `haystack`.
fn assert_ordered(haystack: &str, earlier: &str, later: &str) {
    let a = haystack.find(earlier).unwrap_or_else(|| panic!("missing: {earlier}"));
    let b = haystack.find(later).unwrap_or_else(|| panic!("missing: {later}"));
    assert!(a < b, "expected '{earlier}' before '{later}'");
}

// =============================================================================
// MENU BASICS
// =============================================================================

#[test]
fn exit_prints_goodbye() {
    let (roster, output) = run_script("5\n");
    assert!(roster.is_empty());
    assert!(output.contains("--- Student Grade Analyzer ---"));
    assert!(output.contains("1. Add a new student"));
    assert!(output.contains("5. Exit program"));
    assert!(output.contains("Enter your choice: "));
    assert!(output.contains("Exiting program."));
}

#[test]
fn menu_redrawn_each_iteration() {
    let (_, output) = run_script("3\n5\n");
    assert_eq!(output.matches("--- Student Grade Analyzer ---").count(), 2);
}

#[test]
fn non_integer_choice_reprompts() {
    let (_, output) = run_script("abc\n5\n");
    assert!(output.contains("Please enter a number from 1 to 5."));
    assert!(output.contains("Exiting program."));
}

#[test]
fn out_of_range_choice_reprompts() {
    let (_, output) = run_script("9\n0\n5\n");
    assert_eq!(output.matches("Invalid choice. Please select 1-5.").count(), 2);
}

#[test]
fn eof_ends_loop_without_exit_message() {
    let (roster, output) = run_script("1\nalice\n");
    assert_eq!(roster.len(), 1);
    assert!(!output.contains("Exiting program."));
}

// =============================================================================
// ADD STUDENT
// =============================================================================

#[test]
fn add_student_normalizes_name() {
    let (roster, output) = run_script("1\n  alice smith \n5\n");
    assert!(output.contains("Enter student name: "));
    assert!(output.contains("Student 'Alice Smith' added."));
    assert!(roster.find("Alice Smith").is_some());
}

#[test]
fn duplicate_student_reported_and_unchanged() {
    let (roster, output) = run_script("1\nalice\n1\nALICE\n5\n");
    assert!(output.contains("Student 'Alice' added."));
    assert!(output.contains("Student 'Alice' already exists."));
    assert_eq!(roster.len(), 1);
}

#[test]
fn empty_name_aborts_operation() {
    let (roster, output) = run_script("1\n   \n5\n");
    assert!(output.contains("Name cannot be empty."));
    assert!(roster.is_empty());
}

// =============================================================================
// GRADE ENTRY
// =============================================================================

#[test]
fn grades_recorded_until_done() {
    let (roster, output) = run_script("1\nalice\n2\nalice\n70\n80\n90\nDONE\n5\n");
    assert!(output.contains("Enter a grade (or 'done' to finish): "));
    let grades: Vec<u8> = roster
        .find("alice")
        .unwrap()
        .grades()
        .iter()
        .map(|g| g.value())
        .collect();
    assert_eq!(grades, vec![70, 80, 90]);
}

#[test]
fn invalid_grades_reported_and_skipped() {
    let (roster, output) = run_script("1\nalice\n2\nalice\nabc\n150\n-5\n90\ndone\n5\n");
    assert!(output.contains("Invalid number. Please enter a number."));
    assert_eq!(output.matches("Grade must be between 0 and 100.").count(), 2);
    let grades: Vec<u8> = roster
        .find("alice")
        .unwrap()
        .grades()
        .iter()
        .map(|g| g.value())
        .collect();
    assert_eq!(grades, vec![90]);
}

#[test]
fn grades_for_unknown_student_rejected() {
    let (_, output) = run_script("2\nghost\n5\n");
    assert!(output.contains("Student 'Ghost' not found."));
}

#[test]
fn empty_name_aborts_grade_entry() {
    let (_, output) = run_script("2\n\n5\n");
    assert!(output.contains("Name cannot be empty."));
    assert!(!output.contains("Enter a grade"));
}

// =============================================================================
// REPORT AND TOP STUDENT
// =============================================================================

#[test]
fn empty_roster_report() {
    let (_, output) = run_script("3\n5\n");
    assert_ordered(&output, "--- Student Report ---", "No students to report on.");
}

#[test]
fn top_student_before_any_student() {
    let (_, output) = run_script("4\n5\n");
    assert!(output.contains("No students have been added yet."));
}

#[test]
fn top_student_without_grades() {
    let (_, output) = run_script("1\nalice\n4\n5\n");
    assert!(output.contains("No students have grades yet."));
}

#[test]
fn full_session_report_and_top_student() {
    let script = "1\nalice\n2\nalice\n70\n80\n90\ndone\n1\nbob\n2\nbob\n100\n100\ndone\n3\n4\n5\n";
    let (roster, output) = run_script(script);
    assert_eq!(roster.len(), 2);

    // Report: bob (100.0) sorted before alice (80.0), then the summary.
    assert_ordered(
        &output,
        "Bob's average grade is 100.0.",
        "Alice's average grade is 80.0.",
    );
    assert_ordered(&output, "Alice's average grade is 80.0.", "--------------------");
    assert!(output.contains("Max Average: 100.0"));
    assert!(output.contains("Min Average: 80.0"));
    assert!(output.contains("Overall Average: 90.0"));

    assert!(output.contains(
        "The student with the highest average is Bob with a grade of 100.0."
    ));
}

#[test]
fn ungraded_students_listed_after_graded() {
    let (_, output) = run_script("1\nalice\n2\nalice\n80\n90\ndone\n1\nbob\n3\n5\n");
    assert_ordered(
        &output,
        "Alice's average grade is 85.0.",
        "Bob's average grade is N/A.",
    );
    assert!(output.contains("Max Average: 85.0"));
    assert!(output.contains("Min Average: 85.0"));
    assert!(output.contains("Overall Average: 85.0"));
}
