use std::io::Read;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Built-in question set, embedded from `resources/vocational.json`.
pub static QUESTIONS: Lazy<QuestionSet> = Lazy::new(|| {
    serde_json::from_str(include_str!("../resources/vocational.json"))
        .expect("embedded question set is valid JSON")
});

/// One response level on the fixed four-step scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ordinal {
    Never = 0,
    Sometimes = 1,
    Usually = 2,
    Always = 3,
}

/// All options in display order.
pub const OPTIONS: [Ordinal; 4] = [
    Ordinal::Never,
    Ordinal::Sometimes,
    Ordinal::Usually,
    Ordinal::Always,
];

impl Ordinal {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Ordinal::Never => "No me pasa",
            Ordinal::Sometimes => "A veces me pasa",
            Ordinal::Usually => "Habitualmente me pasa",
            Ordinal::Always => "Siempre me pasa",
        }
    }
}

impl TryFrom<u8> for Ordinal {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Ordinal::Never),
            1 => Ok(Ordinal::Sometimes),
            2 => Ok(Ordinal::Usually),
            3 => Ok(Ordinal::Always),
            _ => Err(Error::IllegalAnswer(value.to_string())),
        }
    }
}

impl std::str::FromStr for Ordinal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| Error::IllegalAnswer(s.to_string()))
            .and_then(Ordinal::try_from)
    }
}

/// Ordered, fixed-length list of question texts.
///
/// The index of a question is its identity: answers are stored at the same
/// position in the answer vector.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawQuestionSet")]
pub struct QuestionSet {
    pub title: String,
    questions: Vec<String>,
}

#[derive(Deserialize)]
struct RawQuestionSet {
    title: String,
    questions: Vec<String>,
}

impl TryFrom<RawQuestionSet> for QuestionSet {
    type Error = Error;

    fn try_from(raw: RawQuestionSet) -> Result<Self> {
        QuestionSet::new(raw.title, raw.questions)
    }
}

impl QuestionSet {
    pub fn new(title: impl Into<String>, questions: Vec<String>) -> Result<Self> {
        if questions.is_empty() {
            return Err(Error::EmptyQuestionSet);
        }
        Ok(Self {
            title: title.into(),
            questions,
        })
    }

    /// Loads a question set from JSON, rejecting an empty list.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawQuestionSet = serde_json::from_reader(reader)?;
        raw.try_into()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.questions.get(index).map(String::as_str)
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Highest reachable score: every question answered with the top option.
    pub fn max_score(&self) -> u32 {
        self.len() as u32 * u32::from(Ordinal::Always.value())
    }
}
