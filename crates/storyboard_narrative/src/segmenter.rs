//! Cutting source text into scene-sized chunks.

use crate::synthesize_arc;
use regex::Regex;
use std::sync::LazyLock;
use storyboard_core::SplitMode;

/// Inputs shorter than this (in characters) with a single sentence are
/// treated as a creative prompt rather than a story.
pub const ARC_PROMPT_MAX_CHARS: usize = 200;

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("Valid paragraph regex"));

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("Valid line break regex"));

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("Valid sentence regex"));

/// Whether `text` should be expanded into a narrative arc.
///
/// True when splitting the trimmed text on `.`, `!` and `?` yields exactly one
/// piece and the untrimmed text is under [`ARC_PROMPT_MAX_CHARS`] characters.
/// A trailing terminator counts as a split, so `"Hello."` is not a prompt.
pub fn is_single_prompt(text: &str) -> bool {
    text.trim().split(['.', '!', '?']).count() == 1
        && text.chars().count() < ARC_PROMPT_MAX_CHARS
}

/// Cuts `text` into ordered, trimmed, non-empty chunks.
///
/// Blank input yields no chunks. A short single-sentence prompt is expanded
/// with [`synthesize_arc`]; anything else is split literally by `mode`.
///
/// # Examples
///
/// ```
/// use storyboard_narrative::segment;
/// use storyboard_core::SplitMode;
///
/// let chunks = segment("It rained. We stayed in!", SplitMode::Sentence);
/// assert_eq!(chunks, vec!["It rained.", "We stayed in!"]);
///
/// assert_eq!(segment("Hello", SplitMode::Sentence).len(), 8);
/// assert!(segment("   ", SplitMode::Paragraph).is_empty());
/// ```
#[tracing::instrument(level = "debug", skip(text), fields(len = text.len()))]
pub fn segment(text: &str, mode: SplitMode) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let chunks = if is_single_prompt(text) {
        tracing::debug!("Single prompt detected, synthesizing narrative arc");
        synthesize_arc(text)
    } else {
        match mode {
            SplitMode::Paragraph => split_paragraphs(text),
            SplitMode::Sentence => split_sentences(text),
        }
    };

    tracing::debug!(chunk_count = chunks.len(), "Segmented text");
    chunks
}

/// Splits on runs of two or more newlines.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(String::from)
        .collect()
}

/// Joins lines with spaces, then splits after `.`, `!` or `?` followed by
/// whitespace. The terminator stays with its sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let flattened = LINE_BREAKS.replace_all(text, " ");
    let flattened = flattened.as_ref();

    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_END.find_iter(flattened) {
        // Terminators are single-byte ASCII.
        sentences.push(&flattened[start..boundary.start() + 1]);
        start = boundary.end();
    }
    sentences.push(&flattened[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(String::from)
        .collect()
}
