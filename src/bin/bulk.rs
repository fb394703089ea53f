use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use vocational_test::{init_tracing, load_questions, score_bulk, BulkOutcome, Error};

/// Scores recorded answers from a CSV file, one respondent per row.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    path: PathBuf,
    /// JSON question set the rows were answered against
    #[arg(long)]
    questions: Option<PathBuf>,
    /// Print one JSON object per row
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Error> {
    init_tracing();
    let args = Args::parse();
    let questions = load_questions(args.questions.as_deref())?;
    let reader = BufReader::new(File::open(&args.path)?);
    for row in score_bulk(reader, questions.len()) {
        if args.json {
            println!("{}", serde_json::to_string(&row)?);
            continue;
        }
        match row.outcome {
            BulkOutcome::Scored(result) => {
                println!("id = {}, score = {}, tier = {}", row.id, result.score, result.tier)
            }
            BulkOutcome::Incomplete { unanswered } => {
                let numbers = unanswered.iter().map(|index| index + 1).collect::<Vec<usize>>();
                println!("id = {}, incomplete, unanswered = {:?}", row.id, numbers)
            }
            BulkOutcome::Rejected { error } => println!("id = {}, error = {}", row.id, error),
        }
    }
    Ok(())
}
