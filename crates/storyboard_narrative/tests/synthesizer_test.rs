use storyboard_core::{Emotion, Environment, ProgressLabel, StoryStage, TextAnalysis, TimeOfDay};
use storyboard_narrative::{
    art_prompt, camera_direction, caption, progress_label, story_stage, synthesize_scene,
    visual_description,
};

fn urban_happy() -> TextAnalysis {
    TextAnalysis::new(Emotion::Happy, Environment::Urban, TimeOfDay::Day)
}

#[test]
fn progress_labels_for_three_scenes() {
    assert_eq!(progress_label(0, 3), ProgressLabel::Opening);
    assert_eq!(progress_label(1, 3), ProgressLabel::RisingAction);
    assert_eq!(progress_label(2, 3), ProgressLabel::FallingAction);
}

#[test]
fn progress_labels_for_eight_scenes() {
    let labels: Vec<ProgressLabel> = (0..8).map(|index| progress_label(index, 8)).collect();
    assert_eq!(
        labels,
        vec![
            ProgressLabel::Opening,
            ProgressLabel::Opening,
            ProgressLabel::Development,
            ProgressLabel::RisingAction,
            ProgressLabel::Climax,
            ProgressLabel::Climax,
            ProgressLabel::FallingAction,
            ProgressLabel::Resolution,
        ]
    );
}

#[test]
fn single_scene_opens_and_uses_wide_shot() {
    assert_eq!(progress_label(0, 1), ProgressLabel::Opening);
    assert_eq!(
        camera_direction(1, 1),
        "Wide establishing shot introducing the world and characters"
    );
}

#[test]
fn camera_ladder_over_eight_scenes() {
    assert!(camera_direction(1, 8).starts_with("Wide establishing"));
    assert!(camera_direction(2, 8).starts_with("Medium shots"));
    assert!(camera_direction(3, 8).starts_with("Dynamic camera"));
    assert!(camera_direction(5, 8).starts_with("Dynamic camera"));
    assert!(camera_direction(6, 8).starts_with("Close-ups"));
    assert!(camera_direction(7, 8).starts_with("Close-ups"));
    assert!(camera_direction(8, 8).starts_with("Pulling back"));
}

#[test]
fn story_stage_never_reaches_resolution() {
    for total in 1..=40 {
        for scene_number in 1..=total {
            assert_ne!(story_stage(scene_number, total), StoryStage::Resolution);
        }
    }
    assert_eq!(story_stage(1, 8), StoryStage::Beginning);
    assert_eq!(story_stage(3, 8), StoryStage::Rising);
    assert_eq!(story_stage(5, 8), StoryStage::Climax);
    assert_eq!(story_stage(8, 8), StoryStage::Climax);
}

#[test]
fn visual_walks_time_of_day_forward() {
    let analysis = urban_happy();
    assert_eq!(
        visual_description(&analysis, 1, 4),
        "bustling city awakening, morning commute, clean streets, establishing atmosphere"
    );
    assert_eq!(
        visual_description(&analysis, 2, 4),
        "busy urban environment, modern architecture, city energy, establishing atmosphere"
    );
    assert_eq!(
        visual_description(&analysis, 3, 4),
        "city lights beginning to glow, rush hour atmosphere, dramatic intensity"
    );
    assert_eq!(
        visual_description(&analysis, 4, 4),
        "neon lights, urban nightlife, dramatic city shadows, resolution atmosphere"
    );
}

#[test]
fn visual_progression_cues_over_ten_scenes() {
    let analysis = TextAnalysis::default();
    let cue = |n| visual_description(&analysis, n, 10);
    assert!(cue(2).ends_with("establishing atmosphere"));
    assert!(cue(5).ends_with("building tension"));
    assert!(cue(8).ends_with("dramatic intensity"));
    assert!(cue(9).ends_with("resolution atmosphere"));
    assert!(cue(1).starts_with("atmospheric setting with natural lighting"));
}

#[test]
fn art_prompt_drops_missing_environment_detail() {
    let prompt = art_prompt("Alex wakes up.", &TextAnalysis::default(), 1, 1);
    assert_eq!(
        prompt,
        "Scene 1: Alex wakes up., \
         dramatic lighting, high contrast, intense atmosphere, \
         contemplative emotional tone, \
         cinematic composition, professional digital art, storyboard illustration"
    );
}

#[test]
fn art_prompt_includes_environment_detail_and_excerpt() {
    let chunk = "x".repeat(100);
    let prompt = art_prompt(&chunk, &urban_happy(), 1, 10);
    let expected_header = format!("Scene 1: {}, ", "x".repeat(80));
    assert!(prompt.starts_with(&expected_header));
    assert!(prompt.contains("modern cityscape, architectural elements, human civilization"));
    assert!(prompt.contains("establishing shot style"));
    assert!(prompt.contains("happy emotional tone"));
}

#[test]
fn caption_truncates_long_chunks() {
    assert_eq!(caption("short"), "short");

    let exact = "a".repeat(80);
    assert_eq!(caption(&exact), exact);

    let long = "b".repeat(81);
    let truncated = caption(&long);
    assert_eq!(truncated.chars().count(), 80);
    assert_eq!(truncated, format!("{}...", "b".repeat(77)));
}

#[test]
fn caption_counts_characters_not_bytes() {
    let long = "é".repeat(90);
    let truncated = caption(&long);
    assert_eq!(truncated, format!("{}...", "é".repeat(77)));
}

#[test]
fn scene_fields_for_five_scene_story() {
    let scene = synthesize_scene("The storm breaks.", 2, 5, &urban_happy());
    assert_eq!(*scene.number(), 3);
    assert_eq!(scene.title(), "3. Rising Action");
    assert_eq!(scene.summary(), "The storm breaks.");
    assert_eq!(scene.emotion(), "Happy mood progressing through the narrative arc");
    assert_eq!(
        scene.characters(),
        "Evolving main characters with developing relationships and growing stakes"
    );
    assert_eq!(
        scene.lighting(),
        "Lighting that supports scene 3 of 5 in the story progression"
    );
    assert!(scene.ai_prompt().starts_with("Scene 3: The storm breaks., "));
    assert_eq!(scene.caption(), "The storm breaks.");
}

#[test]
fn small_storyboards_use_main_characters() {
    let scene = synthesize_scene("Hi.", 0, 4, &TextAnalysis::default());
    assert_eq!(
        scene.characters(),
        "Main story characters as they appear in the narrative"
    );
}
