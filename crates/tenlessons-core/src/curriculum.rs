//! The curriculum returned by one completion call.
//!
//! A curriculum is just the raw text blob from the model; its structure is
//! recovered by label lookup, never validated. Keeping all label knowledge
//! behind this type means a future structured-output mode only has to
//! replace this module, not the session flow.

use crate::section::extract_section;

/// Number of micro-lessons per curriculum.
pub const LESSON_COUNT: usize = 3;

/// Understanding-check questions per lesson.
pub const QUESTIONS_PER_LESSON: usize = 2;

/// One generated lesson plan, decomposed on demand by label lookup.
///
/// Any section the model omitted or mislabeled reads back as an empty
/// string.
#[derive(Debug, Clone)]
pub struct Curriculum {
    raw: String,
}

impl Curriculum {
    pub fn new(raw: String) -> Self {
        Self { raw }
    }

    /// The raw model output, unparsed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn title(&self) -> String {
        extract_section(&self.raw, "TITLE")
    }

    pub fn goals(&self) -> String {
        extract_section(&self.raw, "GOALS")
    }

    /// Lesson text for `lesson` in `1..=LESSON_COUNT`.
    pub fn lesson(&self, lesson: usize) -> String {
        extract_section(&self.raw, &format!("LESSON{lesson}"))
    }

    /// Question `question` of `lesson`, both 1-based.
    pub fn question(&self, lesson: usize, question: usize) -> String {
        extract_section(&self.raw, &format!("QUESTION{lesson}.{question}"))
    }

    pub fn summary(&self) -> String {
        extract_section(&self.raw, "SUMMARY")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_recover_sections() {
        let raw = "\
[TITLE]: Gravity
[GOALS]: Know what falls.
[LESSON1]: Things fall down.
[QUESTION1.1]: Which way do things fall?
[QUESTION1.2]: Name a falling thing.
[LESSON2]: Mass attracts mass.
[QUESTION2.1]: What attracts mass?
[QUESTION2.2]: Does the moon count?
[LESSON3]: Orbits are falling sideways.
[QUESTION3.1]: What is an orbit?
[QUESTION3.2]: Why do satellites stay up?
[SUMMARY]: Everything falls."
            .to_string();

        let curriculum = Curriculum::new(raw);
        assert_eq!(curriculum.title(), "Gravity");
        assert_eq!(curriculum.goals(), "Know what falls.");
        assert_eq!(curriculum.lesson(2), "Mass attracts mass.");
        assert_eq!(curriculum.question(3, 1), "What is an orbit?");
        assert_eq!(curriculum.summary(), "Everything falls.");
    }

    #[test]
    fn missing_sections_read_back_empty() {
        let curriculum = Curriculum::new("[TITLE]: Only a title".to_string());
        assert_eq!(curriculum.title(), "Only a title");
        assert_eq!(curriculum.goals(), "");
        assert_eq!(curriculum.lesson(1), "");
        assert_eq!(curriculum.question(1, 1), "");
        assert_eq!(curriculum.summary(), "");
    }
}
