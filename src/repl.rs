use rustyline::{error::ReadlineError, DefaultEditor};

use crate::Session;

const PROMPT: &str = "lispy >> ";

pub fn run(session: &Session) -> anyhow::Result<()> {
    println!("Lispy version {}", env!("CARGO_PKG_VERSION"));
    println!("Press Ctrl-C to exit");
    println!("Example expression: * 2 2 or * (+ 1 5) (* 1 3 7)");

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line == "exit" || line == "quit" {
                    break;
                }
                editor.add_history_entry(line)?;
                session.line(line);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
