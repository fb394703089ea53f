//! Submission state machine for one questionnaire run.
//!
//! A [`Session`] is a plain value. [`Session::apply`] takes an [`Event`] and
//! returns the next session, leaving the receiver unchanged, so a surface can
//! keep the previous value around and compare with `==` to decide whether to
//! redraw.

use tracing::{debug, warn};

use crate::answer::AnswerStore;
use crate::error::Result;
use crate::question::Ordinal;
use crate::scorer::{classify, Classification};

pub const WARNING_TITLE: &str = "¡Atención!";
pub const WARNING_TEXT: &str = "Por favor, responde todas las preguntas antes de continuar.";
pub const RESULT_TITLE: &str = "Resultado";

/// Input forwarded by a presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Select { index: usize, value: Ordinal },
    Submit,
    DismissWarning,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Editing { warning: bool },
    /// Holds the classification computed at submission time.
    ShowingResult(Classification),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    answers: AnswerStore,
    phase: Phase,
}

/// What a surface should draw on top of the question list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    IncompleteWarning {
        title: &'static str,
        text: &'static str,
    },
    Result {
        title: &'static str,
        classification: Classification,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View<'a> {
    pub answers: &'a [Option<Ordinal>],
    pub overlay: Overlay,
}

impl Session {
    /// Fresh session for a question set of `len` questions.
    pub fn new(len: usize) -> Self {
        Self {
            answers: AnswerStore::new(len),
            phase: Phase::Editing { warning: false },
        }
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn result(&self) -> Option<&Classification> {
        match &self.phase {
            Phase::ShowingResult(classification) => Some(classification),
            Phase::Editing { .. } => None,
        }
    }

    pub fn has_warning(&self) -> bool {
        matches!(self.phase, Phase::Editing { warning: true })
    }

    /// Computes the next session. Only an out-of-range `Select` fails.
    pub fn apply(&self, event: Event) -> Result<Self> {
        match event {
            Event::Select { index, value } => {
                debug!(index, value = value.value(), "answer selected");
                Ok(Self {
                    answers: self.answers.set_answer(index, value)?,
                    phase: self.phase.clone(),
                })
            }
            Event::Submit => Ok(self.submit()),
            Event::DismissWarning => Ok(Self {
                answers: self.answers.clone(),
                phase: match &self.phase {
                    Phase::Editing { .. } => Phase::Editing { warning: false },
                    showing => showing.clone(),
                },
            }),
            Event::Reset => match self.phase {
                Phase::ShowingResult(_) => {
                    debug!("session reset");
                    Ok(Self {
                        answers: self.answers.reset(),
                        phase: Phase::Editing { warning: false },
                    })
                }
                Phase::Editing { .. } => {
                    warn!("reset ignored while editing");
                    Ok(self.clone())
                }
            },
        }
    }

    fn submit(&self) -> Self {
        let phase = match self.answers.sum() {
            Ok(score) => {
                let classification = classify(score);
                debug!(score, tier = %classification.tier, "submission scored");
                Phase::ShowingResult(classification)
            }
            Err(_) => {
                debug!(
                    missing = self.answers.len() - self.answers.answered(),
                    "incomplete submission"
                );
                Phase::Editing { warning: true }
            }
        };
        Self {
            answers: self.answers.clone(),
            phase,
        }
    }

    pub fn view(&self) -> View<'_> {
        let overlay = match &self.phase {
            Phase::Editing { warning: false } => Overlay::None,
            Phase::Editing { warning: true } => Overlay::IncompleteWarning {
                title: WARNING_TITLE,
                text: WARNING_TEXT,
            },
            Phase::ShowingResult(classification) => Overlay::Result {
                title: RESULT_TITLE,
                classification: *classification,
            },
        };
        View {
            answers: self.answers.values(),
            overlay,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;
    use crate::scorer::Tier;

    fn select(index: usize, value: u8) -> Event {
        Event::Select {
            index,
            value: Ordinal::try_from(value).unwrap(),
        }
    }

    fn run(session: Session, events: &[Event]) -> Session {
        events
            .iter()
            .fold(session, |session, event| session.apply(*event).unwrap())
    }

    #[test]
    fn test_initial_state() {
        let session = Session::new(3);
        assert_eq!(session.phase(), &Phase::Editing { warning: false });
        assert!(!session.answers().is_complete());
        assert_eq!(session.view().overlay, Overlay::None);
    }

    #[test]
    fn test_submit_complete_low() {
        let session = run(
            Session::new(3),
            &[select(0, 3), select(1, 3), select(2, 3), Event::Submit],
        );
        let result = session.result().unwrap();
        assert_eq!(result.score, 9);
        assert_eq!(result.tier, Tier::Low);
        assert_eq!(result.message, Tier::Low.message());
        assert!(matches!(
            session.view().overlay,
            Overlay::Result { title: RESULT_TITLE, .. }
        ));
    }

    #[test]
    fn test_submit_incomplete() {
        let before = run(Session::new(3), &[select(0, 0), select(2, 2)]);
        let after = before.apply(Event::Submit).unwrap();
        assert!(after.has_warning());
        assert!(after.result().is_none());
        assert_eq!(after.answers(), before.answers());
        assert_eq!(
            after.view().overlay,
            Overlay::IncompleteWarning {
                title: WARNING_TITLE,
                text: WARNING_TEXT,
            }
        );
    }

    #[test]
    fn test_dismiss_warning() {
        let session = run(
            Session::new(2),
            &[select(0, 1), Event::Submit, Event::DismissWarning],
        );
        assert_eq!(session.phase(), &Phase::Editing { warning: false });
        assert_eq!(session.answers().get(0), Some(Ordinal::Sometimes));
    }

    #[test]
    fn test_dismiss_without_warning_is_noop() {
        let session = run(Session::new(2), &[select(1, 2)]);
        assert_eq!(session.apply(Event::DismissWarning).unwrap(), session);
    }

    #[test]
    fn test_warning_then_complete() {
        let session = run(
            Session::new(2),
            &[select(0, 1), Event::Submit, select(1, 1), Event::Submit],
        );
        assert_eq!(session.result().map(|r| r.score), Some(2));
        assert!(!session.has_warning());
    }

    #[test]
    fn test_full_size_mid() {
        let events = (0..24)
            .map(|index| select(index, 2))
            .chain(std::iter::once(Event::Submit))
            .collect::<Vec<Event>>();
        let session = run(Session::new(24), &events);
        let result = session.result().unwrap();
        assert_eq!(result.score, 48);
        assert_eq!(result.tier, Tier::Mid);
    }

    #[test]
    fn test_result_is_snapshot() {
        let session = run(
            Session::new(2),
            &[select(0, 3), select(1, 3), Event::Submit, select(0, 0)],
        );
        assert_eq!(session.answers().get(0), Some(Ordinal::Never));
        assert_eq!(session.result().map(|r| r.score), Some(6));

        let resubmitted = session.apply(Event::Submit).unwrap();
        assert_eq!(resubmitted.result().map(|r| r.score), Some(3));
    }

    #[test]
    fn test_reset_from_result() {
        let session = run(
            Session::new(3),
            &[select(0, 1), select(1, 2), select(2, 3), Event::Submit, Event::Reset],
        );
        assert_eq!(session, Session::new(3));
        assert!(!session.answers().is_complete());
        assert!(!session.has_warning());
        assert_eq!(session.view().answers, &[None, None, None]);
    }

    #[test]
    fn test_reset_while_editing_is_ignored() {
        let session = run(Session::new(2), &[select(0, 2)]);
        assert_eq!(session.apply(Event::Reset).unwrap(), session);
    }

    #[test]
    fn test_select_out_of_range() {
        let session = Session::new(2);
        assert!(matches!(
            session.apply(select(2, 0)),
            Err(Error::IllegalQuestion { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_restartable() {
        let round = [select(0, 3), Event::Submit, Event::Reset];
        let session = run(run(Session::new(1), &round), &round);
        assert_eq!(session, Session::new(1));
    }
}
