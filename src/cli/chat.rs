use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::chat::{ChatSession, HttpRelay, Submission};
use crate::core::AppConfig;

pub async fn run() -> Result<()> {
    let mut rl = DefaultEditor::new().expect("Editor failed");

    let config = AppConfig::default();
    let relay = HttpRelay::new(&config.relay_api_url);

    let mut session = ChatSession::new();
    session.open();

    // Print the greeting that seeds the transcript
    println!("{}", session.transcript().last().unwrap().content);

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                session.set_input(&line);
                if session.submit(&relay).await == Submission::Ignored {
                    continue;
                }
                println!("{}", session.transcript().last().unwrap().content);
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
