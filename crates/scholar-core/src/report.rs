//! # Reporting Engine
//!
//! Report generation and the top-student query for the grade analyzer.
//!
//! Reports are rendered as lines rather than printed, so the app layer
//! owns the console and tests can assert on exact output.

use crate::roster::{Roster, Student};
use serde::{Deserialize, Serialize};

/// Width of the separator line between per-student lines and the summary.
const SEPARATOR_WIDTH: usize = 20;

// =============================================================================
// REPORT RENDERING
// =============================================================================

/// Render the full report for a roster.
///
/// Students with grades come first, sorted by descending average; the
/// sort is stable, so ties keep insertion order. Students without grades
/// follow in insertion order with an `N/A` average. When at least one
/// student has grades, a separator and the max / min / overall summary
/// (mean of the per-student means) close the report.
///
/// An empty roster renders as a single "no students" line.
#[must_use]
pub fn render_report(roster: &Roster) -> Vec<String> {
    if roster.is_empty() {
        return vec!["No students to report on.".to_string()];
    }

    let mut graded: Vec<(&Student, f64)> = Vec::new();
    let mut ungraded: Vec<&Student> = Vec::new();
    for student in roster.students() {
        match student.average() {
            Some(average) => graded.push((student, average)),
            None => ungraded.push(student),
        }
    }

    // Stable sort: equal averages keep insertion order.
    graded.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut lines = Vec::with_capacity(roster.len() + 4);
    for (student, average) in &graded {
        lines.push(format!(
            "{}'s average grade is {:.1}.",
            student.name(),
            average
        ));
    }
    for student in &ungraded {
        lines.push(format!("{}'s average grade is N/A.", student.name()));
    }

    if let (Some((_, max)), Some((_, min))) = (graded.first(), graded.last()) {
        let overall: f64 =
            graded.iter().map(|(_, average)| average).sum::<f64>() / graded.len() as f64;
        lines.push("-".repeat(SEPARATOR_WIDTH));
        lines.push(format!("Max Average: {:.1}", max));
        lines.push(format!("Min Average: {:.1}", min));
        lines.push(format!("Overall Average: {:.1}", overall));
    }

    lines
}

// =============================================================================
// TOP-STUDENT QUERY
// =============================================================================

/// The student with the highest average and that average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopStudent {
    /// Normalized student name.
    pub name: String,
    /// Arithmetic mean of the student's grades.
    pub average: f64,
}

/// Find the student with the highest average grade.
///
/// Students without grades are ignored. On an exact tie the
/// first-encountered student wins, so replacement only happens on a
/// strictly higher average. Returns `None` when no student has grades.
#[must_use]
pub fn find_top_student(roster: &Roster) -> Option<TopStudent> {
    let mut best: Option<(&Student, f64)> = None;
    for student in roster.students() {
        let Some(average) = student.average() else {
            continue;
        };
        let replace = match best {
            Some((_, best_average)) => average > best_average,
            None => true,
        };
        if replace {
            best = Some((student, average));
        }
    }

    best.map(|(student, average)| TopStudent {
        name: student.name().to_string(),
        average,
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Grade;

    fn roster_with(entries: &[(&str, &[i64])]) -> Roster {
        let mut roster = Roster::new();
        for (name, grades) in entries {
            roster.add(name).expect("add");
            let student = roster.find_mut(name).expect("found");
            for &value in *grades {
                student.record(Grade::new(value).expect("in range"));
            }
        }
        roster
    }

    #[test]
    fn empty_roster_reports_single_line() {
        let roster = Roster::new();
        assert_eq!(render_report(&roster), vec!["No students to report on."]);
    }

    #[test]
    fn graded_before_ungraded_with_summary() {
        let roster = roster_with(&[("alice", &[80, 90]), ("bob", &[])]);
        assert_eq!(
            render_report(&roster),
            vec![
                "Alice's average grade is 85.0.",
                "Bob's average grade is N/A.",
                "--------------------",
                "Max Average: 85.0",
                "Min Average: 85.0",
                "Overall Average: 85.0",
            ]
        );
    }

    #[test]
    fn sorted_descending_by_average() {
        let roster = roster_with(&[("alice", &[70, 80, 90]), ("bob", &[100, 100])]);
        let lines = render_report(&roster);
        assert_eq!(lines[0], "Bob's average grade is 100.0.");
        assert_eq!(lines[1], "Alice's average grade is 80.0.");
        assert_eq!(lines[2], "--------------------");
        assert_eq!(lines[3], "Max Average: 100.0");
        assert_eq!(lines[4], "Min Average: 80.0");
        assert_eq!(lines[5], "Overall Average: 90.0");
    }

    #[test]
    fn ties_keep_insertion_order() {
        let roster = roster_with(&[("carol", &[90]), ("dave", &[90])]);
        let lines = render_report(&roster);
        assert_eq!(lines[0], "Carol's average grade is 90.0.");
        assert_eq!(lines[1], "Dave's average grade is 90.0.");
    }

    #[test]
    fn no_summary_when_nobody_has_grades() {
        let roster = roster_with(&[("erin", &[]), ("frank", &[])]);
        assert_eq!(
            render_report(&roster),
            vec![
                "Erin's average grade is N/A.",
                "Frank's average grade is N/A.",
            ]
        );
    }

    #[test]
    fn overall_is_mean_of_means() {
        // Overall averages the per-student means, not the raw grades:
        // (100.0 + 50.0) / 2, not (100 + 40 + 60) / 3.
        let roster = roster_with(&[("gina", &[100]), ("hank", &[40, 60])]);
        let lines = render_report(&roster);
        assert_eq!(lines.last().map(String::as_str), Some("Overall Average: 75.0"));
    }

    #[test]
    fn top_student_none_without_grades() {
        let roster = roster_with(&[("ivan", &[])]);
        assert_eq!(find_top_student(&roster), None);
        assert_eq!(find_top_student(&Roster::new()), None);
    }

    #[test]
    fn top_student_highest_average() {
        let roster = roster_with(&[("alice", &[70, 80, 90]), ("bob", &[100, 100])]);
        let top = find_top_student(&roster).expect("top");
        assert_eq!(top.name, "Bob");
        assert_eq!(top.average, 100.0);
    }

    #[test]
    fn top_student_first_wins_on_tie() {
        let roster = roster_with(&[("carol", &[90]), ("dave", &[80, 100])]);
        let top = find_top_student(&roster).expect("top");
        assert_eq!(top.name, "Carol");
        assert_eq!(top.average, 90.0);
    }
}
