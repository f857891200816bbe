//! # Interactive Menu
//!
//! The menu dispatcher of the grade analyzer: a single-threaded loop
//! that redraws five fixed options, reads a choice, and dispatches to
//! the roster operations in scholar-core.
//!
//! The loop is generic over `BufRead`/`Write`, so `main` passes the
//! locked console handles and tests pass `Cursor`/`Vec<u8>`. The roster
//! is owned by the caller and mutated in place.

use scholar_core::{
    Grade, Roster, ScholarError, find_top_student, normalize_name, render_report,
};
use std::io::{BufRead, Write};

// =============================================================================
// MENU CHOICES
// =============================================================================

/// The five menu operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add a new student to the roster.
    AddStudent,
    /// Record grades for an existing student.
    RecordGrades,
    /// Print the full report.
    Report,
    /// Print the student with the highest average.
    TopStudent,
    /// Leave the loop.
    Exit,
}

/// Why a console line could not be mapped to a menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceError {
    /// The input was not an integer.
    NotANumber,
    /// The integer was outside `1..=5`.
    OutOfRange,
}

impl MenuChoice {
    /// Parse a menu choice from a console line.
    pub fn parse(input: &str) -> Result<Self, ChoiceError> {
        let value: i64 = input.trim().parse().map_err(|_| ChoiceError::NotANumber)?;
        match value {
            1 => Ok(MenuChoice::AddStudent),
            2 => Ok(MenuChoice::RecordGrades),
            3 => Ok(MenuChoice::Report),
            4 => Ok(MenuChoice::TopStudent),
            5 => Ok(MenuChoice::Exit),
            _ => Err(ChoiceError::OutOfRange),
        }
    }
}

// =============================================================================
// MENU LOOP
// =============================================================================

/// Run the interactive menu loop until the user exits or input ends.
///
/// Validation failures are reported on `output` and the loop continues;
/// only I/O errors propagate.
pub fn run<R: BufRead, W: Write>(
    roster: &mut Roster,
    input: &mut R,
    output: &mut W,
) -> Result<(), ScholarError> {
    loop {
        write_menu(output)?;
        let Some(line) = prompt(input, output, "Enter your choice: ")? else {
            break;
        };

        let choice = match MenuChoice::parse(&line) {
            Ok(choice) => choice,
            Err(ChoiceError::NotANumber) => {
                writeln!(output, "Please enter a number from 1 to 5.")?;
                continue;
            }
            Err(ChoiceError::OutOfRange) => {
                writeln!(output, "Invalid choice. Please select 1-5.")?;
                continue;
            }
        };

        match choice {
            MenuChoice::AddStudent => add_student(roster, input, output)?,
            MenuChoice::RecordGrades => record_grades(roster, input, output)?,
            MenuChoice::Report => report(roster, output)?,
            MenuChoice::TopStudent => top_student(roster, output)?,
            MenuChoice::Exit => {
                writeln!(output, "Exiting program.")?;
                break;
            }
        }
    }

    Ok(())
}

/// Redraw the menu block.
fn write_menu<W: Write>(output: &mut W) -> Result<(), ScholarError> {
    writeln!(output)?;
    writeln!(output, "--- Student Grade Analyzer ---")?;
    writeln!(output, "1. Add a new student")?;
    writeln!(output, "2. Add grades for a student")?;
    writeln!(output, "3. Generate a full report")?;
    writeln!(output, "4. Find the top student")?;
    writeln!(output, "5. Exit program")?;
    Ok(())
}

// =============================================================================
// MENU OPERATIONS
// =============================================================================

/// Menu option 1: add a new student.
fn add_student<R: BufRead, W: Write>(
    roster: &mut Roster,
    input: &mut R,
    output: &mut W,
) -> Result<(), ScholarError> {
    let Some(raw) = prompt_name(input, output)? else {
        return Ok(());
    };

    match roster.add(&raw) {
        Ok(name) => {
            tracing::debug!(student = %name, "student added");
            writeln!(output, "Student '{}' added.", name)?;
        }
        Err(ScholarError::DuplicateStudent(name)) => {
            writeln!(output, "Student '{}' already exists.", name)?;
        }
        Err(ScholarError::EmptyName) => {
            writeln!(output, "Name cannot be empty.")?;
        }
        Err(other) => return Err(other),
    }

    Ok(())
}

/// Menu option 2: record grades for an existing student.
///
/// Reads lines until the literal "done" (case-insensitive, untrimmed, so
/// " done" is treated as a failed number, matching the parse path).
fn record_grades<R: BufRead, W: Write>(
    roster: &mut Roster,
    input: &mut R,
    output: &mut W,
) -> Result<(), ScholarError> {
    let Some(raw) = prompt_name(input, output)? else {
        return Ok(());
    };

    let display_name = normalize_name(&raw);
    let Some(student) = roster.find_mut(&raw) else {
        writeln!(output, "Student '{}' not found.", display_name)?;
        return Ok(());
    };

    loop {
        let Some(line) = prompt(input, output, "Enter a grade (or 'done' to finish): ")? else {
            break;
        };
        if line.eq_ignore_ascii_case("done") {
            break;
        }
        match Grade::parse(&line) {
            Ok(grade) => student.record(grade),
            Err(ScholarError::GradeOutOfRange(_)) => {
                writeln!(output, "Grade must be between 0 and 100.")?;
            }
            Err(ScholarError::InvalidGrade(_)) => {
                writeln!(output, "Invalid number. Please enter a number.")?;
            }
            Err(other) => return Err(other),
        }
    }

    tracing::debug!(student = %display_name, grades = student.grades().len(), "grade entry finished");
    Ok(())
}

/// Menu option 3: print the full report.
fn report<W: Write>(roster: &Roster, output: &mut W) -> Result<(), ScholarError> {
    writeln!(output, "--- Student Report ---")?;
    for line in render_report(roster) {
        writeln!(output, "{}", line)?;
    }
    tracing::debug!(students = roster.len(), "report generated");
    Ok(())
}

/// Menu option 4: print the student with the highest average.
fn top_student<W: Write>(roster: &Roster, output: &mut W) -> Result<(), ScholarError> {
    match find_top_student(roster) {
        Some(top) => {
            writeln!(
                output,
                "The student with the highest average is {} with a grade of {:.1}.",
                top.name, top.average
            )?;
        }
        None if roster.is_empty() => {
            writeln!(output, "No students have been added yet.")?;
        }
        None => {
            writeln!(output, "No students have grades yet.")?;
        }
    }
    Ok(())
}

// =============================================================================
// PROMPT HELPERS
// =============================================================================

/// Write a prompt, flush, and read one line (newline stripped).
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<String>, ScholarError> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

/// Prompt for a student name. Reports empty (post-trim) names and maps
/// them to `None`, so the calling operation aborts without state change.
fn prompt_name<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<String>, ScholarError> {
    let Some(line) = prompt(input, output, "Enter student name: ")? else {
        return Ok(None);
    };
    let raw = line.trim();
    if raw.is_empty() {
        writeln!(output, "Name cannot be empty.")?;
        return Ok(None);
    }
    Ok(Some(raw.to_string()))
}

// =============================================================================
// TESTS
// =============================================================================
