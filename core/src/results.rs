//! Grading result model.
//!
//! The structured document the grading service produces and the results
//! view consumes:
//!
//! - [`GradingResult`] - paper-level totals and grade
//! - [`QuestionResult`] - per-question marks and feedback
//! - [`QuestionStatus`] - correct / partial / incorrect
//! - [`ExpandedQuestions`] - which feedback panels are open

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// =============================================================================
// Question Results
// =============================================================================

/// Marking outcome of one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStatus {
    Correct,
    Partial,
    Incorrect,
}

impl QuestionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionStatus::Correct => "Correct",
            QuestionStatus::Partial => "Partial",
            QuestionStatus::Incorrect => "Incorrect",
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            QuestionStatus::Correct => "status-correct",
            QuestionStatus::Partial => "status-partial",
            QuestionStatus::Incorrect => "status-incorrect",
        }
    }
}

/// Marks and feedback for a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    /// Question identifier as printed on the paper, e.g. "3(a)".
    pub question_number: String,
    pub max_marks: u32,
    pub achieved_marks: u32,
    pub feedback: String,
    pub status: QuestionStatus,
}

// =============================================================================
// Paper Result
// =============================================================================

/// Number of questions per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub correct: usize,
    pub partial: usize,
    pub incorrect: usize,
}

/// Styling band for a letter grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl GradeBand {
    pub fn for_grade(grade: &str) -> Self {
        match grade {
            "A*" | "A" => GradeBand::Excellent,
            "B" => GradeBand::Good,
            "C" => GradeBand::Fair,
            _ => GradeBand::Poor,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            GradeBand::Excellent => "grade-excellent",
            GradeBand::Good => "grade-good",
            GradeBand::Fair => "grade-fair",
            GradeBand::Poor => "grade-poor",
        }
    }
}

/// Complete grading result for one paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingResult {
    pub paper_title: String,
    pub subject: String,
    pub total_marks: u32,
    pub achieved_marks: u32,
    pub percentage: u32,
    pub grade: String,
    pub submitted_at: NaiveDateTime,
    pub questions: Vec<QuestionResult>,
}

impl GradingResult {
    pub fn status_counts(&self) -> StatusCounts {
        self.questions
            .iter()
            .fold(StatusCounts::default(), |mut counts, q| {
                match q.status {
                    QuestionStatus::Correct => counts.correct += 1,
                    QuestionStatus::Partial => counts.partial += 1,
                    QuestionStatus::Incorrect => counts.incorrect += 1,
                }
                counts
            })
    }

    pub fn grade_band(&self) -> GradeBand {
        GradeBand::for_grade(&self.grade)
    }

    pub fn question(&self, number: &str) -> Option<&QuestionResult> {
        self.questions.iter().find(|q| q.question_number == number)
    }

    /// The built-in sample result shown by the demo.
    pub fn sample() -> Self {
        fn q(number: &str, max: u32, achieved: u32, status: QuestionStatus, feedback: &str) -> QuestionResult {
            QuestionResult {
                question_number: number.to_string(),
                max_marks: max,
                achieved_marks: achieved,
                feedback: feedback.to_string(),
                status,
            }
        }

        use QuestionStatus::*;

        Self {
            paper_title: "Mathematics Paper 1 - O Level".to_string(),
            subject: "Mathematics".to_string(),
            total_marks: 100,
            achieved_marks: 78,
            percentage: 78,
            grade: "A".to_string(),
            submitted_at: chrono::NaiveDate::from_ymd_opt(2024, 1, 15)
                .and_then(|d| d.and_hms_opt(10, 30, 0))
                .unwrap_or_default(),
            questions: vec![
                q("1(a)", 4, 4, Correct, "Excellent work! All steps shown correctly with proper working."),
                q("1(b)", 6, 4, Partial, "Good attempt, but missing the final simplification step. Remember to always simplify your final answer."),
                q("2", 8, 8, Correct, "Perfect solution with clear methodology and correct units."),
                q("3(a)", 5, 2, Partial, "Correct approach but calculation error in step 3. Check your arithmetic."),
                q("3(b)", 7, 7, Correct, "Excellent! All working clearly shown with correct final answer."),
                q("4", 10, 6, Partial, "Good understanding of the concept. Part (i) correct, but part (ii) needs more detailed working. Show all intermediate steps."),
                q("5", 12, 12, Correct, "Outstanding work! Complex problem solved with excellent methodology."),
                q("6(a)", 4, 0, Incorrect, "Incorrect approach. Review the formula for calculating compound interest."),
                q("6(b)", 6, 5, Partial, "Almost perfect! Small rounding error in the final step."),
            ],
        }
    }
}

// =============================================================================
// Expand/Collapse State
// =============================================================================

/// Question ids whose feedback panel is open.
///
/// Each question toggles independently; any number may be open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedQuestions(BTreeSet<String>);

impl ExpandedQuestions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one question. Returns whether it is now expanded.
    pub fn toggle(&mut self, question: &str) -> bool {
        if self.0.remove(question) {
            false
        } else {
            self.0.insert(question.to_string());
            true
        }
    }

    pub fn is_expanded(&self, question: &str) -> bool {
        self.0.contains(question)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
