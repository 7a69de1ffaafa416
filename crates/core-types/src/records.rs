use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// A single row of the `students` table.
///
/// The shape is owned by the database schema; this struct mirrors it so rows
/// can be mapped, serialized, and printed, but performs no validation or
/// transformation of its own.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Student {
    pub student_id: i32,
    pub name: String,
    pub email: String,
    pub enrollment_date: NaiveDateTime,
}

impl fmt::Display for Student {
    /// The one-line report form of a record.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} <{}> | enrolled {}",
            self.student_id, self.name, self.email, self.enrollment_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Student {
        Student {
            student_id: 101,
            name: "Ada Lovelace".to_string(),
            email: "ada@example.edu".to_string(),
            enrollment_date: NaiveDate::from_ymd_opt(2024, 9, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn display_form_is_a_single_line() {
        let line = sample().to_string();
        assert!(!line.contains('\n'));
        assert_eq!(
            line,
            "101 | Ada Lovelace <ada@example.edu> | enrolled 2024-09-01 09:30:00"
        );
    }
}
