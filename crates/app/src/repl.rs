//! Interactive terminal surface.
//!
//! Line-oriented loop: `load`, `count`, `list`, `clear` and `quit` are
//! commands; any other non-empty input is treated as an EAN code and
//! scanned against the catalog.

use std::io::Write;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use coletor_core::DomainError;

use crate::controller::AppController;

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Import a catalog file; the path may be supplied inline or prompted.
    Load(Option<String>),
    /// Print the catalog record count.
    Count,
    /// Print the session's selection list.
    List,
    /// Clear the persisted and in-memory catalog.
    Clear,
    /// Exit the loop.
    Quit,
    /// Anything else: treat the input as an EAN code.
    Scan(String),
}

/// Map one input line to a command. Blank lines map to `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "load" => Command::Load((!rest.is_empty()).then(|| rest.to_string())),
        "count" if rest.is_empty() => Command::Count,
        "list" if rest.is_empty() => Command::List,
        "clear" if rest.is_empty() => Command::Clear,
        "quit" | "exit" if rest.is_empty() => Command::Quit,
        _ => Command::Scan(line.to_string()),
    };

    Some(command)
}

/// Run the interactive loop until `quit` or end of input.
///
/// A lookup miss prints a notice and re-prompts. Import errors other than
/// a cancelled path prompt propagate out and end the run.
pub async fn run(controller: &mut AppController) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt("> ")?;

        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            break;
        };
        let Some(command) = parse_command(&line) else {
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Load(path) => {
                let path = match path {
                    Some(path) => Some(path),
                    None => prompt_for_path(&mut lines).await?,
                };
                // An empty reply at the prompt is the cancel signal.
                let Some(path) = path else { continue };

                let count = controller.import_file(&path).await?;
                println!("products loaded: {count}");
            }
            Command::Count => println!("products loaded: {}", controller.catalog_len()),
            Command::List => {
                println!("products scanned: {}", controller.selected().len());
                for product in controller.selected() {
                    println!("{}  {}", product.ean, product.description);
                }
            }
            Command::Clear => {
                controller.clear_catalog().await?;
                println!("catalog cleared");
            }
            Command::Scan(code) => match controller.scan(&code) {
                Ok(product) => println!("{}", product.description),
                Err(DomainError::NotFound) => println!("product not found"),
            },
        }
    }

    Ok(())
}

fn prompt(text: &str) -> anyhow::Result<()> {
    let mut out = std::io::stdout();
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .context("failed to write prompt")
}

async fn prompt_for_path(lines: &mut Lines<BufReader<Stdin>>) -> anyhow::Result<Option<String>> {
    prompt("file path (empty to cancel): ")?;

    let Some(reply) = lines.next_line().await.context("failed to read input")? else {
        return Ok(None);
    };
    let reply = reply.trim();

    Ok((!reply.is_empty()).then(|| reply.to_string()))
}
