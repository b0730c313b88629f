use std::io::{self, BufRead, Write};

use anyhow::Result;
use holonet::config::{Settings, APP_NAME, APP_VERSION};
use holonet::qa::StarWarsQa;

use super::Session;

const HELP: &str = "\
Exemplos de perguntas:
  - Quem é Luke Skywalker?
  - Quantas naves Han Solo pilota?
  - Listar citações de Darth Vader
  - Qual a espécie de Yoda?
  - Listar personagens
Digite 'sair' para encerrar.";

/// What a line typed at the prompt asks for
#[derive(Debug, PartialEq, Eq)]
enum ChatCommand<'a> {
    Exit,
    Help,
    Empty,
    Question(&'a str),
}

impl<'a> ChatCommand<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "" => ChatCommand::Empty,
            "sair" | "exit" | "quit" | "q" => ChatCommand::Exit,
            "ajuda" | "help" | "h" => ChatCommand::Help,
            _ => ChatCommand::Question(line),
        }
    }
}

/// Interactive chat on stdin/stdout
pub async fn run(settings: &Settings) -> Result<()> {
    let session = Session::open(settings).await?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    chat_loop(&session.qa, stdin.lock(), stdout.lock()).await?;

    session.close();
    Ok(())
}

/// Read questions line by line until an exit word or end of input
pub async fn chat_loop<R: BufRead, W: Write>(qa: &StarWarsQa, mut input: R, mut output: W) -> Result<()> {
    writeln!(output, "{} v{}", APP_NAME, APP_VERSION)?;
    writeln!(output, "Digite 'ajuda' para ver exemplos ou 'sair' para encerrar.")?;

    let mut line = String::new();
    loop {
        write!(output, "\n> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        match ChatCommand::parse(&line) {
            ChatCommand::Exit => break,
            ChatCommand::Help => writeln!(output, "{}", HELP)?,
            ChatCommand::Empty => continue,
            ChatCommand::Question(question) => {
                let answer = qa.ask(question).await;
                writeln!(output, "{}", answer)?;
            }
        }
    }

    writeln!(output, "Até logo! Que a Força esteja com você.")?;
    Ok(())
}
