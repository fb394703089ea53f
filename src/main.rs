use std::io::{stdin, stdout, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use vocational_test::{
    init_tracing, load_questions, Error, Event, Ordinal, Overlay, QuestionSet, Session, OPTIONS,
};

/// Interactive vocational self-assessment.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// JSON question set to use instead of the built-in one
    #[arg(long)]
    questions: Option<PathBuf>,
}

enum Reply {
    Answer(Ordinal),
    Skip,
    Quit,
}

fn main() -> Result<(), Error> {
    init_tracing();
    let args = Args::parse();
    let questions = load_questions(args.questions.as_deref())?;
    run(&questions, &mut stdin().lock(), &mut stdout().lock())
}

fn run<R: BufRead, W: Write>(
    questions: &QuestionSet,
    input: &mut R,
    out: &mut W,
) -> Result<(), Error> {
    let mut session = Session::new(questions.len());
    let mut pending = (0..questions.len()).collect::<Vec<usize>>();

    writeln!(out, "{}", questions.title)?;
    loop {
        for index in pending {
            match ask(questions, index, input, out)? {
                Reply::Answer(value) => session = session.apply(Event::Select { index, value })?,
                Reply::Skip => {}
                Reply::Quit => return Ok(()),
            }
        }

        session = session.apply(Event::Submit)?;
        let overlay = session.view().overlay;
        match overlay {
            Overlay::IncompleteWarning { title, text } => {
                writeln!(out, "{}", title)?;
                writeln!(out, "{}", text)?;
                writeln!(out, "(Enter para continuar)")?;
                if read_line(input)?.is_none() {
                    return Ok(());
                }
                session = session.apply(Event::DismissWarning)?;
                pending = session.answers().unanswered();
            }
            Overlay::Result {
                title,
                classification,
            } => {
                writeln!(out, "{}", title)?;
                writeln!(
                    out,
                    "Puntaje total: {} / {}",
                    classification.score,
                    questions.max_score()
                )?;
                writeln!(out, "{}", classification.message)?;
                writeln!(out, "¿Reiniciar test? (s/n)")?;
                match read_line(input)? {
                    Some(line) if line.eq_ignore_ascii_case("s") => {
                        session = session.apply(Event::Reset)?;
                        pending = session.answers().unanswered();
                    }
                    _ => return Ok(()),
                }
            }
            Overlay::None => pending = session.answers().unanswered(),
        }
    }
}

fn ask<R: BufRead, W: Write>(
    questions: &QuestionSet,
    index: usize,
    input: &mut R,
    out: &mut W,
) -> Result<Reply, Error> {
    writeln!(out, "{}. {}", index + 1, questions.get(index).unwrap_or_default())?;
    for option in OPTIONS {
        writeln!(out, "  {} => {}", option.value(), option.label())?;
    }
    loop {
        let line = match read_line(input)? {
            Some(line) => line,
            None => return Ok(Reply::Quit),
        };
        if line.is_empty() {
            return Ok(Reply::Skip);
        }
        match line.parse::<Ordinal>() {
            Ok(value) => return Ok(Reply::Answer(value)),
            Err(_) => {
                writeln!(out, "Respondé con un número del 0 al 3, o Enter para saltearla.")?
            }
        }
    }
}

/// Next trimmed line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, Error> {
    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}
