//! The question-answering flow: scrape or extract, clean, hold the result
//! in the session slot, then answer questions from stdin until the user
//! is done.

use std::io::Write;
use std::path::PathBuf;

use crate::config::Config;
use crate::extractor::{RawDocument, chunk};
use crate::fetcher;
use crate::generation::{GeminiClient, Generator, question_prompt};
use crate::pdf;
use crate::session::Session;
use crate::shell::{generate_over_chunks, render};

pub async fn run(
    config: &Config,
    url: Option<String>,
    pdf_path: Option<PathBuf>,
    show_content: bool,
) -> anyhow::Result<()> {
    let (document, origin) = match (url, pdf_path) {
        (Some(url), None) => {
            println!("Scraping {url}...");
            match fetcher::fetch(&url).await {
                Ok(page) => {
                    let origin = page.url_final.to_string();
                    (RawDocument::html(page.body), origin)
                }
                Err(err) => {
                    eprintln!("warning: {}", render::fetch_failure(&err));
                    return Ok(());
                }
            }
        }
        (None, Some(path)) => {
            println!("Extracting text from {}...", path.display());
            let bytes = match std::fs::read(&path) {
                Ok(bytes) => bytes,
                Err(err) => {
                    eprintln!("warning: could not read {}: {err}", path.display());
                    return Ok(());
                }
            };
            match pdf::extract_text(&bytes) {
                Ok(text) => (RawDocument::pdf_text(text), path.display().to_string()),
                Err(err) => {
                    eprintln!("warning: {}", render::pdf_failure(&err));
                    return Ok(());
                }
            }
        }
        _ => {
            eprintln!("error: provide exactly one of --url or --pdf");
            return Ok(());
        }
    };

    let cleaned = document.clean();
    if cleaned.is_empty() {
        eprintln!("warning: nothing extracted from {origin}");
        return Ok(());
    }

    println!(
        "Extracted {} characters from {origin}",
        cleaned.chars().count()
    );
    if show_content {
        println!("\n--- content ---\n{cleaned}\n--- end of content ---");
    }

    let mut session = Session::new();
    session.replace(document.kind(), origin, cleaned);

    let generator = match GeminiClient::new(config) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("warning: {}", render::generation_failure(&err));
            return Ok(());
        }
    };

    question_loop(&generator, &session, config.max_chunk_chars()).await
}

async fn question_loop(
    generator: &dyn Generator,
    session: &Session,
    max_chunk_chars: usize,
) -> anyhow::Result<()> {
    let Some(content) = session.content() else {
        return Ok(());
    };

    // Chunked once; the content slot does not change inside the loop
    let chunks = chunk(&content.text, max_chunk_chars)?;

    println!(
        "Ask questions about the {} (blank line or Ctrl-D to exit).",
        content.source.label()
    );

    loop {
        print!("question> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let question = line.trim();
        if question.is_empty() {
            break;
        }

        match generate_over_chunks(generator, &question_prompt(question), &chunks).await {
            Ok(answer) => println!("\n{answer}\n"),
            Err(err) => eprintln!("warning: {}", render::generation_failure(&err)),
        }
    }

    Ok(())
}
