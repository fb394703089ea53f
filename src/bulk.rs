use std::io::Read;

use serde::Serialize;
use tracing::warn;

use crate::answer::AnswerStore;
use crate::error::{Error, Result};
use crate::question::Ordinal;
use crate::scorer::{classify, Classification};

/// One parsed CSV row. A rejected row keeps its respondent id when the record
/// itself could be read.
pub type BulkRecord = std::result::Result<(String, AnswerStore), (Option<String>, Error)>;

/// Reads recorded answers from CSV.
///
/// The first row is a header. Each record is a respondent id followed by one
/// cell per question; a cell holds 0-3, or is empty when the question was
/// left unanswered.
pub fn read_bulk<R: Read>(reader: R, questions: usize) -> impl Iterator<Item = BulkRecord> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
        .into_records()
        .map(move |record| match record {
            Ok(record) => {
                let id = record.get(0).unwrap_or_default().to_string();
                match parse_answers(&record, questions) {
                    Ok(store) => Ok((id, store)),
                    Err(e) => Err((Some(id), e)),
                }
            }
            Err(e) => Err((None, e.into())),
        })
}

fn parse_answers(record: &csv::StringRecord, questions: usize) -> Result<AnswerStore> {
    let found = record.len().saturating_sub(1);
    if found != questions {
        return Err(Error::RowLength {
            expected: questions,
            found,
        });
    }
    let values = record
        .iter()
        .skip(1)
        .map(|field| match field {
            "" => Ok(None),
            value => value.parse::<Ordinal>().map(Some),
        })
        .collect::<Result<Vec<Option<Ordinal>>>>()?;
    Ok(AnswerStore::from_values(values))
}

/// Outcome of scoring one CSV row.
#[derive(Debug, Serialize)]
pub struct BulkRow {
    pub id: String,
    #[serde(flatten)]
    pub outcome: BulkOutcome,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BulkOutcome {
    Scored(Classification),
    Incomplete { unanswered: Vec<usize> },
    Rejected { error: String },
}

/// Scores every row, turning per-row failures into outcomes so one bad row
/// does not stop the batch.
pub fn score_bulk<R: Read>(reader: R, questions: usize) -> Vec<BulkRow> {
    read_bulk(reader, questions)
        .enumerate()
        .map(|(line, row)| match row {
            Ok((id, store)) => match store.sum() {
                Ok(score) => BulkRow {
                    id,
                    outcome: BulkOutcome::Scored(classify(score)),
                },
                Err(_) => {
                    warn!(%id, "row has unanswered questions");
                    BulkRow {
                        id,
                        outcome: BulkOutcome::Incomplete {
                            unanswered: store.unanswered(),
                        },
                    }
                }
            },
            Err((id, e)) => {
                let id = id.unwrap_or_else(|| format!("#{}", line + 1));
                warn!(row = line + 1, %id, error = %e, "row rejected");
                BulkRow {
                    id,
                    outcome: BulkOutcome::Rejected {
                        error: e.to_string(),
                    },
                }
            }
        })
        .collect()
}
