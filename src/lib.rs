//! Vocational self-assessment: answer tracking, scoring and result feedback.

pub mod answer;
pub mod bulk;
pub mod error;
pub mod question;
pub mod scorer;
pub mod session;

pub use answer::AnswerStore;
pub use bulk::{read_bulk, score_bulk, BulkOutcome, BulkRecord, BulkRow};
pub use error::{Error, Result};
pub use question::{Ordinal, QuestionSet, OPTIONS, QUESTIONS};
pub use scorer::{classify, Classification, Tier};
pub use session::{Event, Overlay, Phase, Session, View};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Question set from `path`, or the built-in one when no path is given.
pub fn load_questions(path: Option<&Path>) -> Result<QuestionSet> {
    match path {
        Some(path) => QuestionSet::from_reader(BufReader::new(File::open(path)?)),
        None => Ok(QUESTIONS.clone()),
    }
}

/// Installs the stderr log subscriber used by the binaries.
///
/// `RUST_LOG` overrides the default `vocational_test=warn`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vocational_test=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
