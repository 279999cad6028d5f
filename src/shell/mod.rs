//! Interactive shell: argument parsing, user-facing flow for each
//! subcommand, and the policy decisions the core stays out of.
//!
//! Adapter failures are all absorbed here: matched by kind, rendered as a
//! one-line message, never allowed to take the process down.

pub mod ask;
pub mod render;
pub mod summarize;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::config::Config;
use crate::generation::{GenerationError, Generator};

#[derive(Parser, Debug)]
#[command(name = "condense", version, about = "Summarize YouTube videos and ask questions about scraped websites and PDFs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize a YouTube video's transcript
    Summarize {
        /// Video URL or 11-character video id
        video: String,

        /// Caption language code; skips the interactive selection
        #[arg(long)]
        language: Option<String>,

        /// Write the summary to a file as well as printing it
        #[arg(long, num_args = 0..=1, default_missing_value = "youtube_summary.txt")]
        output: Option<PathBuf>,
    },

    /// Scrape a website or extract a PDF, then answer questions about it
    Ask {
        /// Website URL to scrape
        #[arg(long, conflicts_with = "pdf")]
        url: Option<String>,

        /// PDF file to extract text from
        #[arg(long)]
        pdf: Option<PathBuf>,

        /// Print the cleaned content before the question loop
        #[arg(long)]
        show_content: bool,
    },
}

pub async fn run(cli: Cli, config: &Config) -> anyhow::Result<()> {
    match cli.command {
        Command::Summarize {
            video,
            language,
            output,
        } => summarize::run(config, &video, language.as_deref(), output).await,
        Command::Ask {
            url,
            pdf,
            show_content,
        } => ask::run(config, url, pdf, show_content).await,
    }
}

/// Fan-out policy for multi-chunk documents: invoke the generator once per
/// chunk with the same prompt prefix and join the outputs with blank
/// lines. No single call ever carries more than one chunk of content.
pub(crate) async fn generate_over_chunks(
    generator: &dyn Generator,
    prompt_prefix: &str,
    chunks: &[String],
) -> Result<String, GenerationError> {
    let mut pieces = Vec::with_capacity(chunks.len());

    for (i, chunk) in chunks.iter().enumerate() {
        debug!(chunk = i + 1, total = chunks.len(), "requesting generation");
        let output = generator.generate(prompt_prefix, chunk).await?;
        let output = output.trim();
        if !output.is_empty() {
            pieces.push(output.to_string());
        }
    }

    if pieces.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    Ok(pieces.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingGenerator {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Generator for RecordingGenerator {
        async fn generate(
            &self,
            _prompt_prefix: &str,
            content: &str,
        ) -> Result<String, GenerationError> {
            self.calls.lock().unwrap().push(content.to_string());
            Ok(format!("answer({content})"))
        }
    }

    struct EmptyGenerator;

    #[async_trait]
    impl Generator for EmptyGenerator {
        async fn generate(&self, _p: &str, _c: &str) -> Result<String, GenerationError> {
            Ok("   ".to_string())
        }
    }

    #[tokio::test]
    async fn test_fan_out_one_call_per_chunk() {
        let generator = RecordingGenerator {
            calls: Mutex::new(Vec::new()),
        };
        let chunks = vec!["abc".to_string(), "def".to_string()];

        let result = generate_over_chunks(&generator, "prompt", &chunks)
            .await
            .unwrap();

        assert_eq!(result, "answer(abc)\n\nanswer(def)");
        assert_eq!(*generator.calls.lock().unwrap(), vec!["abc", "def"]);
    }

    #[tokio::test]
    async fn test_fan_out_all_blank_is_empty_response() {
        let chunks = vec!["abc".to_string()];
        let result = generate_over_chunks(&EmptyGenerator, "prompt", &chunks).await;
        assert!(matches!(result, Err(GenerationError::EmptyResponse)));
    }

    #[test]
    fn test_cli_parses_summarize() {
        let cli = Cli::try_parse_from([
            "condense",
            "summarize",
            "https://youtu.be/dQw4w9WgXcQ",
            "--language",
            "en",
            "--output",
        ])
        .unwrap();
        match cli.command {
            Command::Summarize {
                video,
                language,
                output,
            } => {
                assert_eq!(video, "https://youtu.be/dQw4w9WgXcQ");
                assert_eq!(language.as_deref(), Some("en"));
                assert_eq!(output, Some(PathBuf::from("youtube_summary.txt")));
            }
            _ => panic!("expected summarize"),
        }
    }

    #[test]
    fn test_cli_rejects_url_and_pdf_together() {
        let result = Cli::try_parse_from([
            "condense", "ask", "--url", "https://a.example", "--pdf", "x.pdf",
        ]);
        assert!(result.is_err());
    }
}
