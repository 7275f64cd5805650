//! End-to-end storyboard generation scenarios.

use storyboard_core::{SplitMode, StoryTemplate};
use storyboard_narrative::{export_prompts, generate_storyboard, split_sentences, StoryboardGenerator};

const SAMPLES: &[&str] = &[
    "",
    "Hello",
    "Alex wakes up. Alex finds a letter. Alex opens it.",
    "A long journey home",
    "It was a dark and stormy night in the city.\n\nThe detective lit a cigarette!\nWho had done it?",
    "The first paragraph.\n\nThe second paragraph.\n\nThe third paragraph.",
];

#[test]
fn three_sentence_story() {
    let scenes = generate_storyboard(
        "Alex wakes up. Alex finds a letter. Alex opens it.",
        SplitMode::Sentence,
    );

    let titles: Vec<&str> = scenes.iter().map(|scene| scene.title().as_str()).collect();
    assert_eq!(
        titles,
        vec!["1. Opening", "2. Rising Action", "3. Falling Action"]
    );
    assert_eq!(scenes[1].summary(), "Alex finds a letter.");
    assert_eq!(
        scenes[0].emotion(),
        "Contemplative mood progressing through the narrative arc"
    );
    assert!(scenes[2].camera().starts_with("Pulling back to wide shot"));
}

#[test]
fn single_word_expands_to_drama_arc() {
    let scenes = generate_storyboard("Hello", SplitMode::Sentence);
    assert_eq!(scenes.len(), StoryTemplate::BEAT_COUNT);

    let summaries: Vec<&str> = scenes.iter().map(|scene| scene.summary().as_str()).collect();
    assert_eq!(summaries, StoryTemplate::Drama.beats().to_vec());
    assert_eq!(scenes[7].title(), "8. Resolution");
}

#[test]
fn journey_prompt_expands_to_adventure_arc() {
    let scenes = generate_storyboard("A long journey home", SplitMode::Sentence);
    assert_eq!(scenes.len(), 8);
    assert_eq!(
        scenes[0].summary(),
        StoryTemplate::Adventure.beats()[0]
    );
    assert_eq!(
        scenes[0].emotion(),
        "Adventurous mood progressing through the narrative arc"
    );
}

#[test]
fn empty_input_yields_no_scenes() {
    assert!(generate_storyboard("", SplitMode::Sentence).is_empty());
    assert!(generate_storyboard("", SplitMode::Paragraph).is_empty());
}

#[test]
fn two_paragraphs_yield_two_scenes() {
    let text = "Mara packed her bags. She left at dawn.\n\nThe train was late. She missed it.";
    let scenes = generate_storyboard(text, SplitMode::Paragraph);
    assert_eq!(scenes.len(), 2);
    assert_eq!(scenes[0].summary(), "Mara packed her bags. She left at dawn.");
}

#[test]
fn sentence_count_matches_scene_count() {
    let text = "One. Two! Three? Four.\nFive.";
    let scenes = generate_storyboard(text, SplitMode::Sentence);
    assert_eq!(scenes.len(), split_sentences(text).len());
    assert_eq!(scenes.len(), 5);
}

#[test]
fn numbers_are_contiguous_from_one() {
    for sample in SAMPLES {
        for mode in [SplitMode::Sentence, SplitMode::Paragraph] {
            let scenes = generate_storyboard(sample, mode);
            let numbers: Vec<usize> = scenes.iter().map(|scene| *scene.number()).collect();
            let expected: Vec<usize> = (1..=scenes.len()).collect();
            assert_eq!(numbers, expected, "sample {sample:?}");
        }
    }
}

#[test]
fn captions_fit_and_prompts_are_present() {
    let long = format!("{} ends here. Short one.", "A very long sentence ".repeat(10));
    let mut samples: Vec<&str> = SAMPLES.to_vec();
    samples.push(&long);

    for sample in samples {
        for scene in generate_storyboard(sample, SplitMode::Sentence) {
            assert!(scene.caption().chars().count() <= 83);
            if scene.summary().chars().count() <= 80 {
                assert_eq!(scene.caption(), scene.summary());
            }
            if !scene.summary().is_empty() {
                assert!(!scene.ai_prompt().is_empty());
            }
        }
    }
}

#[test]
fn generation_is_deterministic() {
    for sample in SAMPLES {
        assert_eq!(
            generate_storyboard(sample, SplitMode::Sentence),
            generate_storyboard(sample, SplitMode::Sentence)
        );
    }
}

#[test]
fn analysis_uses_full_source_for_literal_splits() {
    let text = "The kitchen was quiet. Then she laughed.";
    let scenes = generate_storyboard(text, SplitMode::Sentence);
    // The setting is only named in the first sentence.
    assert!(scenes[1].ai_prompt().contains("interior architecture"));
}

#[test]
fn generator_applies_default_and_override() {
    let text = "One. Two.\n\nThree.";
    let generator = StoryboardGenerator::new(SplitMode::Paragraph);
    assert_eq!(generator.generate(text, None).len(), 2);
    assert_eq!(generator.generate(text, Some(SplitMode::Sentence)).len(), 3);
    assert_eq!(StoryboardGenerator::default().default_split(), SplitMode::Sentence);
}

#[test]
fn exported_prompts_are_blank_line_separated() {
    let scenes = generate_storyboard("Hello", SplitMode::Sentence);
    let exported = export_prompts(&scenes);
    let prompts: Vec<&str> = exported.split("\n\n").collect();
    assert_eq!(prompts.len(), 8);
    for (prompt, scene) in prompts.iter().zip(&scenes) {
        assert_eq!(*prompt, scene.ai_prompt());
    }
    assert_eq!(export_prompts(&[]), "");
}
