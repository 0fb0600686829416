//! Interactive console surface
//!
//! Terminal rendition of the original single-window form: one question per
//! line, a read-only answer pane, a clear action, and a download action
//! that writes the current question and answer to a text file, either
//! overwriting or appending. The pipeline call is awaited before the next
//! prompt is shown, so at most one request is ever in flight.

use crate::error::{Error, Result};
use crate::pipeline::QaPipeline;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::warn;

/// State of one console session
struct Session {
    last_question: Option<String>,
    last_answer: Option<String>,
    append: bool,
}

/// Run the interactive loop until `:quit` or end of input
pub async fn run(pipeline: Arc<QaPipeline>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    let mut session = Session {
        last_question: None,
        last_answer: None,
        append: false,
    };

    stdout
        .write_all(
            b"Consulta RAG. Escribe una pregunta y pulsa Enter.\n\
              Comandos: :clear  :save <archivo>  :append on|off  :quit\n\n",
        )
        .await?;

    loop {
        stdout.write_all(b"Pregunta> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Clear) => {
                session.last_question = None;
                session.last_answer = None;
                stdout.write_all(b"(limpiado)\n\n").await?;
            }
            Some(Command::Append(enabled)) => {
                session.append = enabled;
                let msg = if enabled {
                    b"(guardado en modo append)\n\n".as_slice()
                } else {
                    b"(guardado en modo sobrescribir)\n\n".as_slice()
                };
                stdout.write_all(msg).await?;
            }
            Some(Command::Save(path)) => {
                match (&session.last_question, &session.last_answer) {
                    (Some(question), Some(answer)) => {
                        save_exchange(Path::new(&path), question, answer, session.append)?;
                        stdout
                            .write_all(format!("Archivo guardado en: {}\n\n", path).as_bytes())
                            .await?;
                    }
                    _ => {
                        stdout
                            .write_all(b"No hay pregunta ni respuesta para guardar.\n\n")
                            .await?;
                    }
                }
            }
            None => {
                let question = line.trim();
                match pipeline.answer(question).await {
                    Ok(answer) => {
                        stdout
                            .write_all(format!("\nRespuesta:\n{}\n", answer.answer).as_bytes())
                            .await?;
                        if let Some(sources) = &answer.sources {
                            stdout
                                .write_all(
                                    format!("Fuentes: {}\n", sources.join(", ")).as_bytes(),
                                )
                                .await?;
                        }
                        stdout.write_all(b"\n").await?;
                        session.last_question = Some(question.to_string());
                        session.last_answer = Some(answer.answer);
                    }
                    Err(err @ Error::Validation(_)) => {
                        stdout
                            .write_all(format!("Advertencia: {}\n\n", err).as_bytes())
                            .await?;
                    }
                    Err(err) => {
                        warn!("Console request failed: {}", err);
                        stdout
                            .write_all(format!("Error: {}\n\n", err).as_bytes())
                            .await?;
                    }
                }
            }
        }
    }

    Ok(())
}

enum Command {
    Quit,
    Clear,
    Append(bool),
    Save(String),
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line {
        ":quit" | ":exit" => return Some(Command::Quit),
        ":clear" => return Some(Command::Clear),
        ":append on" => return Some(Command::Append(true)),
        ":append off" => return Some(Command::Append(false)),
        _ => {}
    }
    if let Some(path) = line.strip_prefix(":save ") {
        let path = path.trim();
        if !path.is_empty() {
            return Some(Command::Save(path.to_string()));
        }
    }
    None
}

/// Write a question/answer pair to `path`.
///
/// Overwrites by default; in append mode the pair is added to the end of
/// the file with a separating blank line.
pub fn save_exchange(path: &Path, question: &str, answer: &str, append: bool) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)?;

    let entry = format!("Pregunta:\n{}\n\nRespuesta:\n{}", question, answer);
    if append {
        writeln!(file, "{}\n", entry)?;
    } else {
        write!(file, "{}", entry)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_commands() {
        assert!(matches!(parse_command(":quit"), Some(Command::Quit)));
        assert!(matches!(parse_command(" :clear "), Some(Command::Clear)));
        assert!(matches!(
            parse_command(":append on"),
            Some(Command::Append(true))
        ));
        assert!(matches!(
            parse_command(":append off"),
            Some(Command::Append(false))
        ));
        assert!(
            matches!(parse_command(":save out.txt"), Some(Command::Save(p)) if p == "out.txt")
        );
        assert!(parse_command(":save   ").is_none());
        assert!(parse_command("¿Qué es RAG?").is_none());
    }

    #[test]
    fn test_save_overwrites_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qa.txt");

        save_exchange(&path, "p1", "r1", false).unwrap();
        save_exchange(&path, "p2", "r2", false).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Pregunta:\np2\n\nRespuesta:\nr2");
    }

    #[test]
    fn test_save_append_accumulates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qa.txt");

        save_exchange(&path, "p1", "r1", true).unwrap();
        save_exchange(&path, "p2", "r2", true).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Pregunta:\np1\n\nRespuesta:\nr1\n\nPregunta:\np2\n\nRespuesta:\nr2\n\n"
        );
    }
}
