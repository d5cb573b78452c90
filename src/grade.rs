//! Final-score grading
//!
//! The run is scored as a 200-item exam: the final score maps to a
//! percentage, the percentage to a transcript grade on the 1.00-5.00
//! scale (1.00 best, 3.00 the passing floor, 5.00 a fail). The game-over
//! presentation and audio pick their reaction off [`Grade::is_passing`].

use crate::consts::EXAM_TOTAL_ITEMS;

/// A transcript grade with its display value and remark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grade {
    /// Transcript value, e.g. "1.25"
    pub value: &'static str,
    /// Short remark shown on the game-over screen
    pub remark: &'static str,
}

impl Grade {
    /// Passing means 3.00 or better
    pub fn is_passing(&self) -> bool {
        self.value != "4.00" && self.value != "5.00"
    }
}

/// Percentage thresholds, best grade first
const GRADE_TABLE: &[(f32, Grade)] = &[
    (95.2, Grade { value: "1.00", remark: "Summa cum laude!" }),
    (90.8, Grade { value: "1.25", remark: "So close to a flat uno!" }),
    (86.4, Grade { value: "1.50", remark: "Excellent work!" }),
    (82.0, Grade { value: "1.75", remark: "College scholar!" }),
    (77.6, Grade { value: "2.00", remark: "Solid. Very solid." }),
    (73.2, Grade { value: "2.25", remark: "Almost a flat two!" }),
    (68.8, Grade { value: "2.50", remark: "Respectable." }),
    (64.4, Grade { value: "2.75", remark: "Not a tres!" }),
    (60.0, Grade { value: "3.00", remark: "Passed. That's what matters." }),
    (55.0, Grade { value: "4.00", remark: "Conditional. Removal exam time." }),
];

const FAILING: Grade = Grade {
    value: "5.00",
    remark: "Retake the course.",
};

/// Score as a percentage of the exam's total items
pub fn percentage(score: u32) -> f32 {
    score as f32 / EXAM_TOTAL_ITEMS as f32 * 100.0
}

/// Grade for a percentage
pub fn grade_for(percentage: f32) -> Grade {
    for &(threshold, grade) in GRADE_TABLE {
        if percentage >= threshold {
            return grade;
        }
    }
    FAILING
}

/// Grade for a final score
pub fn grade_for_score(score: u32) -> Grade {
    grade_for(percentage(score))
}
