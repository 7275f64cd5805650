use storyboard_core::SplitMode;
use storyboard_narrative::{is_single_prompt, segment, split_paragraphs, split_sentences};

#[test]
fn blank_input_yields_no_chunks() {
    assert!(segment("", SplitMode::Sentence).is_empty());
    assert!(segment(" \n\t ", SplitMode::Sentence).is_empty());
    assert!(segment("\n\n\n", SplitMode::Paragraph).is_empty());
}

#[test]
fn short_single_sentence_is_a_prompt() {
    assert!(is_single_prompt("Hello"));
    assert!(is_single_prompt("a knight without a horse"));
    assert!(!is_single_prompt("Hello."));
    assert!(!is_single_prompt("Wait! What"));
}

#[test]
fn long_single_sentence_is_not_a_prompt() {
    let long = "word ".repeat(40);
    assert_eq!(long.chars().count(), 200);
    assert!(!is_single_prompt(&long));

    let chunks = segment(&long, SplitMode::Sentence);
    assert_eq!(chunks, vec![long.trim().to_string()]);
}

#[test]
fn sentences_keep_their_terminators() {
    let chunks = split_sentences("Alex wakes up. Alex finds a letter! Is it for Alex? Yes.");
    assert_eq!(
        chunks,
        vec![
            "Alex wakes up.",
            "Alex finds a letter!",
            "Is it for Alex?",
            "Yes.",
        ]
    );
}

#[test]
fn sentence_mode_flattens_newlines() {
    let chunks = split_sentences("The night was\ncold.\nShe waited.\n\nNobody came.");
    assert_eq!(chunks, vec!["The night was cold.", "She waited.", "Nobody came."]);
}

#[test]
fn terminators_without_whitespace_do_not_split() {
    let chunks = split_sentences("Version 1.5 shipped. It was fine...really.");
    assert_eq!(chunks, vec!["Version 1.5 shipped.", "It was fine...really."]);
}

#[test]
fn paragraphs_split_on_blank_lines_only() {
    let text = "First line.\nStill first.\n\n\nSecond paragraph.\n\n   \n\nThird.";
    let chunks = split_paragraphs(text);
    assert_eq!(
        chunks,
        vec!["First line.\nStill first.", "Second paragraph.", "Third."]
    );
}

#[test]
fn paragraph_mode_on_two_paragraphs() {
    let text = "The ship left port. The crew cheered.\n\nA storm rose at night. The mast broke.";
    assert_eq!(segment(text, SplitMode::Paragraph).len(), 2);
    assert_eq!(segment(text, SplitMode::Sentence).len(), 4);
}

#[test]
fn prompts_ignore_split_mode() {
    assert_eq!(
        segment("Hello", SplitMode::Paragraph),
        segment("Hello", SplitMode::Sentence)
    );
}
