use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question needs at least {min} options, got {len}")]
    TooFewOptions { min: usize, len: usize },

    #[error("option {index} has an empty label")]
    EmptyOption { index: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionBankError {
    #[error("question bank cannot be empty")]
    Empty,

    #[error("duplicate question id: {0}")]
    DuplicateId(QuestionId),
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// Grouping a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionCategory {
    WorkStyle,
    Skills,
    Goals,
    Interests,
    Values,
}

impl QuestionCategory {
    /// Stable kebab-case identifier, e.g. `work-style`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            QuestionCategory::WorkStyle => "work-style",
            QuestionCategory::Skills => "skills",
            QuestionCategory::Goals => "goals",
            QuestionCategory::Interests => "interests",
            QuestionCategory::Values => "values",
        }
    }

    /// Uppercase label shown under a question, e.g. `WORK STYLE`.
    #[must_use]
    pub fn label(self) -> String {
        self.slug().replace('-', " ").to_uppercase()
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question. The index of an option is its choice id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRaw")]
pub struct Question {
    id: QuestionId,
    category: QuestionCategory,
    prompt: String,
    options: Vec<String>,
}

impl Question {
    pub const MIN_OPTIONS: usize = 2;

    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is blank, fewer than two options are
    /// given, or any option label is blank.
    pub fn new(
        id: impl Into<QuestionId>,
        category: QuestionCategory,
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into().trim().to_string();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        let options: Vec<String> = options
            .into_iter()
            .map(|label| label.into().trim().to_string())
            .collect();
        if options.len() < Self::MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions {
                min: Self::MIN_OPTIONS,
                len: options.len(),
            });
        }
        if let Some(index) = options.iter().position(String::is_empty) {
            return Err(QuestionError::EmptyOption { index });
        }

        Ok(Self {
            id: id.into(),
            category,
            prompt,
            options,
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn category(&self) -> QuestionCategory {
        self.category
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }
}

#[derive(Deserialize)]
struct QuestionRaw {
    id: QuestionId,
    category: QuestionCategory,
    prompt: String,
    options: Vec<String>,
}

impl TryFrom<QuestionRaw> for Question {
    type Error = QuestionError;

    fn try_from(raw: QuestionRaw) -> Result<Self, Self::Error> {
        Question::new(raw.id, raw.category, raw.prompt, raw.options)
    }
}

//
// ─── BANK ──────────────────────────────────────────────────────────────────────
//

/// Ordered, immutable list of questions making up one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionBankRaw")]
pub struct QuestionBank {
    questions: Vec<Question>,
}

#[derive(Deserialize)]
struct QuestionBankRaw {
    questions: Vec<Question>,
}

impl TryFrom<QuestionBankRaw> for QuestionBank {
    type Error = QuestionBankError;

    fn try_from(raw: QuestionBankRaw) -> Result<Self, Self::Error> {
        QuestionBank::new(raw.questions)
    }
}

impl QuestionBank {
    /// # Errors
    ///
    /// Returns `QuestionBankError::Empty` for an empty list and
    /// `QuestionBankError::DuplicateId` if two questions share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        if questions.is_empty() {
            return Err(QuestionBankError::Empty);
        }
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(QuestionBankError::DuplicateId(question.id().clone()));
            }
        }
        Ok(Self { questions })
    }

    /// The five-question career self-assessment.
    ///
    /// Every row is checked by the `career_rows_all_validate` test.
    #[must_use]
    pub fn career() -> Self {
        let questions = career_questions()
            .into_iter()
            .filter_map(|(id, category, prompt, options)| {
                let question = Question::new(id, category, prompt, options);
                debug_assert!(question.is_ok(), "invalid career question {id}");
                question.ok()
            })
            .collect();
        Self { questions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

type QuestionRow = (&'static str, QuestionCategory, &'static str, [&'static str; 4]);

fn career_questions() -> [QuestionRow; 5] {
    [
        (
            "1",
            QuestionCategory::WorkStyle,
            "What work environment motivates you most?",
            [
                "Collaborative team settings",
                "Independent remote work",
                "Fast-paced startup culture",
                "Structured corporate environment",
            ],
        ),
        (
            "2",
            QuestionCategory::Skills,
            "Which skill do you want to develop most?",
            [
                "Technical/Programming",
                "Leadership & Management",
                "Creative & Design",
                "Data & Analytics",
            ],
        ),
        (
            "3",
            QuestionCategory::Goals,
            "What is your primary career goal for the next 2 years?",
            [
                "Get promoted to senior role",
                "Switch to new industry",
                "Start own business",
                "Achieve work-life balance",
            ],
        ),
        (
            "4",
            QuestionCategory::Interests,
            "What type of problems do you enjoy solving?",
            [
                "Complex technical challenges",
                "People & relationship issues",
                "Business strategy problems",
                "Creative & design challenges",
            ],
        ),
        (
            "5",
            QuestionCategory::Values,
            "What matters most to you in your career?",
            [
                "High salary & benefits",
                "Making social impact",
                "Continuous learning",
                "Recognition & prestige",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn career_bank_has_five_ordered_questions() {
        let bank = QuestionBank::career();
        assert_eq!(bank.len(), 5);
        let ids: Vec<_> = bank.iter().map(|q| q.id().as_str().to_string()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        assert!(bank.iter().all(|q| q.option_count() == 4));
        assert_eq!(bank.get(0).unwrap().category(), QuestionCategory::WorkStyle);
        assert_eq!(bank.get(4).unwrap().option(2), Some("Continuous learning"));
    }

    #[test]
    fn career_rows_all_validate() {
        let rows = career_questions();
        let questions = rows
            .into_iter()
            .map(|(id, category, prompt, options)| Question::new(id, category, prompt, options))
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(questions.len(), rows.len());
        assert_eq!(QuestionBank::new(questions).unwrap(), QuestionBank::career());
    }

    #[test]
    fn deserializing_runs_bank_and_question_validation() {
        let err = serde_json::from_str::<QuestionBank>(r#"{"questions":[]}"#).unwrap_err();
        assert!(err.to_string().contains("question bank cannot be empty"));

        let dup = r#"{"questions":[
            {"id":"dup","category":"skills","prompt":"Pick","options":["a","b"]},
            {"id":"dup","category":"goals","prompt":"Again","options":["c","d"]}
        ]}"#;
        let err = serde_json::from_str::<QuestionBank>(dup).unwrap_err();
        assert!(err.to_string().contains("duplicate question id: dup"));

        let blank = r#"{"id":"x","category":"goals","prompt":" ","options":["a","b"]}"#;
        let err = serde_json::from_str::<Question>(blank).unwrap_err();
        assert!(err.to_string().contains("question prompt cannot be empty"));
    }

    #[test]
    fn career_bank_survives_json_round_trip() {
        let bank = QuestionBank::career();
        let json = serde_json::to_string(&bank).unwrap();
        assert_eq!(serde_json::from_str::<QuestionBank>(&json).unwrap(), bank);
    }

    #[test]
    fn category_label_uppercases_slug() {
        assert_eq!(QuestionCategory::WorkStyle.label(), "WORK STYLE");
        assert_eq!(QuestionCategory::Values.label(), "VALUES");
    }

    #[test]
    fn question_rejects_blank_prompt_and_options() {
        let err = Question::new("x", QuestionCategory::Goals, "  ", ["a", "b"]).unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);

        let err = Question::new("x", QuestionCategory::Goals, "Why?", ["only"]).unwrap_err();
        assert_eq!(err, QuestionError::TooFewOptions { min: 2, len: 1 });

        let err = Question::new("x", QuestionCategory::Goals, "Why?", ["a", " "]).unwrap_err();
        assert_eq!(err, QuestionError::EmptyOption { index: 1 });
    }

    #[test]
    fn bank_rejects_empty_and_duplicates() {
        assert_eq!(QuestionBank::new(Vec::new()).unwrap_err(), QuestionBankError::Empty);

        let q = Question::new("dup", QuestionCategory::Skills, "Pick", ["a", "b"]).unwrap();
        let err = QuestionBank::new(vec![q.clone(), q]).unwrap_err();
        assert_eq!(err, QuestionBankError::DuplicateId(QuestionId::new("dup")));
    }
}
