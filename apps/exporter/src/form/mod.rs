//! The fixed DMP form definition and the submission model.
//!
//! The form has exactly ten slots. Five essay sections carry a 150-word
//! limit, four reflection sections carry a 50-word limit, and the topic
//! ranking is unconstrained. Slot order is significant: it is the order the
//! sections appear in the rendered document.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Static description of one form slot.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Section title, unique within the form. Doubles as the heading in the
    /// rendered document and as the key of the word-limit mapping.
    pub title: &'static str,
    /// The question shown to the student by the form UI.
    pub prompt: &'static str,
    /// Maximum permitted word count; `None` means unconstrained.
    pub word_limit: Option<u32>,
}

/// The ten fixed slots of the DMP form, in document order.
pub const DMP_FIELDS: [FieldSpec; 10] = [
    FieldSpec {
        title: "Data Description",
        prompt: "Data Description (max 150 words)",
        word_limit: Some(150),
    },
    FieldSpec {
        title: "Storage and Backup",
        prompt: "Storage and Backup (max 150 words)",
        word_limit: Some(150),
    },
    FieldSpec {
        title: "Access and Security",
        prompt: "Access and Security (max 150 words)",
        word_limit: Some(150),
    },
    FieldSpec {
        title: "Long-term Preservation",
        prompt: "Long-term Preservation (max 150 words)",
        word_limit: Some(150),
    },
    FieldSpec {
        title: "Roles and Responsibilities",
        prompt: "Roles and Responsibilities (max 150 words)",
        word_limit: Some(150),
    },
    FieldSpec {
        title: "Topic Ranking",
        prompt: "Write the topics in order: easiest to hardest",
        word_limit: None,
    },
    FieldSpec {
        title: "Hardest Topic Reflection",
        prompt: "What was the hardest topic to plan for, and why? (max 50 words)",
        word_limit: Some(50),
    },
    FieldSpec {
        title: "Easiest Topic Reflection",
        prompt: "What was the easiest topic to plan for, and why? (max 50 words)",
        word_limit: Some(50),
    },
    FieldSpec {
        title: "Peer Review Question",
        prompt: "What would you ask a peer reviewer advice on, and why? (max 50 words)",
        word_limit: Some(50),
    },
    FieldSpec {
        title: "LLM Acknowledgement",
        prompt: "Have you used generative AI or LLM tools for this assignment? If so, how? (max 50 words)",
        word_limit: Some(50),
    },
];

/// One titled field of a submission. Order within [`Submission`] equals the
/// order in the rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    /// Free-form text, possibly empty.
    pub body: String,
}

/// An ordered sequence of sections, alive for one evaluation cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    sections: Vec<Section>,
}

impl Submission {
    pub fn new(sections: Vec<Section>) -> Self {
        Submission { sections }
    }

    /// Builds a submission for the fixed DMP form from the ten raw answers,
    /// in slot order.
    pub fn dmp(answers: [&str; 10]) -> Self {
        let sections = DMP_FIELDS
            .iter()
            .zip(answers)
            .map(|(field, body)| Section {
                title: field.title.to_string(),
                body: body.to_string(),
            })
            .collect();
        Submission { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

/// Word-limit mapping for the fixed DMP form, keyed by section title.
pub fn dmp_word_limits() -> HashMap<String, Option<u32>> {
    DMP_FIELDS
        .iter()
        .map(|field| (field.title.to_string(), field.word_limit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_has_ten_slots_with_expected_limits() {
        assert_eq!(DMP_FIELDS.len(), 10);
        let essays = DMP_FIELDS
            .iter()
            .filter(|f| f.word_limit == Some(150))
            .count();
        let reflections = DMP_FIELDS
            .iter()
            .filter(|f| f.word_limit == Some(50))
            .count();
        let unconstrained = DMP_FIELDS.iter().filter(|f| f.word_limit.is_none()).count();
        assert_eq!(essays, 5, "five essay sections at 150 words");
        assert_eq!(reflections, 4, "four reflection sections at 50 words");
        assert_eq!(unconstrained, 1, "only the ranking field is unconstrained");
        assert_eq!(
            DMP_FIELDS[5].title, "Topic Ranking",
            "the unconstrained slot is the ranking field"
        );
    }

    #[test]
    fn test_titles_are_unique() {
        let mut titles: Vec<&str> = DMP_FIELDS.iter().map(|f| f.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), DMP_FIELDS.len(), "section titles must be unique");
    }

    #[test]
    fn test_dmp_submission_preserves_slot_order() {
        let submission = Submission::dmp(["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
        let titles: Vec<&str> = submission
            .sections()
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        let expected: Vec<&str> = DMP_FIELDS.iter().map(|f| f.title).collect();
        assert_eq!(titles, expected);
        assert_eq!(submission.sections()[2].body, "c");
    }

    #[test]
    fn test_word_limits_match_field_specs() {
        let limits = dmp_word_limits();
        assert_eq!(limits.len(), 10);
        assert_eq!(limits["Data Description"], Some(150));
        assert_eq!(limits["Topic Ranking"], None);
        assert_eq!(limits["LLM Acknowledgement"], Some(50));
    }
}
