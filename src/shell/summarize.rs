//! The YouTube summary flow: resolve the video, pick a caption language,
//! fetch the transcript, generate and optionally save the summary.

use std::io::Write;
use std::path::PathBuf;

use crate::config::Config;
use crate::extractor::chunk;
use crate::generation::{GeminiClient, SUMMARY_PROMPT};
use crate::shell::{generate_over_chunks, render};
use crate::transcript::{CaptionTrack, TranscriptClient, parse_video_id};

pub async fn run(
    config: &Config,
    video: &str,
    language: Option<&str>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let Some(video_id) = parse_video_id(video) else {
        eprintln!("warning: '{video}' does not look like a YouTube video URL or id");
        return Ok(());
    };

    let client = TranscriptClient::new();
    let tracks = match client.list_languages(&video_id).await {
        Ok(tracks) => tracks,
        Err(err) => {
            eprintln!("warning: {}", render::transcript_failure(&err));
            return Ok(());
        }
    };

    let Some(language_code) = select_language(&tracks, language)? else {
        return Ok(());
    };

    // Fail on a missing key before spending time on the transcript fetch
    let generator = match GeminiClient::new(config) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("warning: {}", render::generation_failure(&err));
            return Ok(());
        }
    };

    println!("Fetching transcript ({language_code})...");
    let transcript_text = match client.fetch_transcript(&video_id, &language_code).await {
        Ok(text) => text,
        Err(err) => {
            eprintln!("warning: {}", render::transcript_failure(&err));
            return Ok(());
        }
    };

    let chunks = chunk(&transcript_text, config.max_chunk_chars())?;
    if chunks.is_empty() {
        eprintln!("warning: the transcript was empty; nothing to summarize");
        return Ok(());
    }

    println!("Generating summary...");
    let summary = match generate_over_chunks(&generator, SUMMARY_PROMPT, &chunks).await {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("warning: {}", render::generation_failure(&err));
            return Ok(());
        }
    };

    println!("\n{summary}");

    if let Some(path) = output {
        std::fs::write(&path, &summary)?;
        println!("\nSaved summary to {}", path.display());
    }

    Ok(())
}

/// Resolve the caption language: validate an explicit `--language`, take a
/// lone track directly, otherwise show the tracks and read a selection.
fn select_language(
    tracks: &[CaptionTrack],
    requested: Option<&str>,
) -> anyhow::Result<Option<String>> {
    if let Some(code) = requested {
        if tracks.iter().any(|t| t.language_code == code) {
            return Ok(Some(code.to_string()));
        }
        let available: Vec<&str> = tracks.iter().map(|t| t.language_code.as_str()).collect();
        eprintln!(
            "warning: no '{code}' captions for this video (available: {})",
            available.join(", ")
        );
        return Ok(None);
    }

    if let [only] = tracks {
        println!(
            "Using the only caption track: {} ({})",
            only.display_name(),
            only.language_code
        );
        return Ok(Some(only.language_code.clone()));
    }

    println!("Available caption languages:");
    for (i, track) in tracks.iter().enumerate() {
        println!(
            "  {}. {} ({})",
            i + 1,
            track.display_name(),
            track.language_code
        );
    }
    print!("Select a language (number or code): ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let choice = line.trim();

    if let Ok(index) = choice.parse::<usize>()
        && index >= 1
        && let Some(track) = tracks.get(index - 1)
    {
        return Ok(Some(track.language_code.clone()));
    }
    if let Some(track) = tracks.iter().find(|t| t.language_code == choice) {
        return Ok(Some(track.language_code.clone()));
    }

    eprintln!("warning: '{choice}' is not one of the listed languages");
    Ok(None)
}
