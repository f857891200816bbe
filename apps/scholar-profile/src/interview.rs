//! # Profile Interview
//!
//! The interactive flow of the Profile Builder: full name, birth year,
//! hobbies until the sentinel, then a [`UserProfile`].
//!
//! Hobby lines are collected verbatim - no trimming, no deduplication,
//! empty lines included - and only a line that is exactly the sentinel
//! (case-insensitively) ends the list.

use scholar_core::{ScholarError, UserProfile, age_in};
use std::io::{BufRead, Write};

/// Line that ends hobby collection (matched case-insensitively).
const HOBBY_SENTINEL: &str = "stop";

// =============================================================================
// INTERVIEW FLOW
// =============================================================================

/// Run the interview and build a profile.
///
/// The birth year re-prompts until it parses as an integer; the age is
/// derived from `reference_year`. End of input before the name or the
/// birth year is `ScholarError::UnexpectedEof`; during hobby collection
/// it simply ends the list.
pub fn run<R: BufRead, W: Write>(
    reference_year: i64,
    input: &mut R,
    output: &mut W,
) -> Result<UserProfile, ScholarError> {
    let name = prompt(input, output, "Enter your full name: ")?.ok_or(ScholarError::UnexpectedEof)?;

    let birth_year = loop {
        let Some(line) = prompt(input, output, "Enter your birth year: ")? else {
            return Err(ScholarError::UnexpectedEof);
        };
        match line.trim().parse::<i64>() {
            Ok(year) => break year,
            Err(_) => writeln!(output, "Invalid year. Please enter a number.")?,
        }
    };

    let mut hobbies = Vec::new();
    loop {
        let Some(line) = prompt(
            input,
            output,
            "Enter a favorite hobby or type 'stop' to finish: ",
        )?
        else {
            break;
        };
        if line.eq_ignore_ascii_case(HOBBY_SENTINEL) {
            break;
        }
        hobbies.push(line);
    }

    Ok(UserProfile::new(
        name,
        age_in(reference_year, birth_year),
        hobbies,
    ))
}

/// Write the summary block for a finished interview, preceded by a
/// blank line.
pub fn write_summary<W: Write>(profile: &UserProfile, output: &mut W) -> Result<(), ScholarError> {
    writeln!(output)?;
    for line in profile.summary_lines() {
        writeln!(output, "{}", line)?;
    }
    Ok(())
}

// =============================================================================
// PROMPT HELPER
// =============================================================================

/// Write a prompt, flush, and read one line (newline stripped, otherwise
/// verbatim). Returns `None` at end of input.
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
