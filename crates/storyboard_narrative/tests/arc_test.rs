use storyboard_core::{Emotion, Environment, KeyElement, StoryTemplate, TextAnalysis, TimeOfDay};
use storyboard_narrative::{analyze, extract_key_elements, select_template, synthesize_arc};

#[test]
fn plain_prompt_uses_drama_verbatim() {
    let beats = synthesize_arc("Hello");
    let expected: Vec<String> = StoryTemplate::Drama
        .beats()
        .iter()
        .map(|beat| beat.to_string())
        .collect();
    assert_eq!(beats, expected);
}

#[test]
fn journey_selects_adventure() {
    let prompt = "A long journey home";
    assert_eq!(select_template(prompt, &analyze(prompt)), StoryTemplate::Adventure);
}

#[test]
fn substring_cues_are_case_sensitive() {
    let neutral = TextAnalysis::default();
    assert_eq!(select_template("secretive neighbours", &neutral), StoryTemplate::Mystery);
    assert_eq!(select_template("Secret neighbours", &neutral), StoryTemplate::Drama);
    assert_eq!(select_template("beloved town", &neutral), StoryTemplate::Romance);
}

#[test]
fn emotion_can_select_template_without_cue_words() {
    let mysterious =
        TextAnalysis::new(Emotion::Mysterious, Environment::Neutral, TimeOfDay::Day);
    assert_eq!(select_template("a hidden door", &mysterious), StoryTemplate::Mystery);
}

#[test]
fn adventure_rule_is_checked_before_romance() {
    let prompt = "a love quest";
    assert_eq!(select_template(prompt, &analyze(prompt)), StoryTemplate::Adventure);
}

#[test]
fn key_elements_follow_scan_order_and_cap_at_three() {
    let elements = extract_key_elements("Danger! A friend drives through the forest in the rain");
    assert_eq!(
        elements,
        vec![
            KeyElement::VehicleJourney,
            KeyElement::StormyWeather,
            KeyElement::NaturalEnvironment,
        ]
    );
}

#[test]
fn key_elements_match_substrings() {
    // "scared" contains "car".
    assert_eq!(extract_key_elements("scared"), vec![KeyElement::VehicleJourney]);
    assert!(extract_key_elements("quiet afternoon").is_empty());
}

#[test]
fn elements_and_environment_are_woven_into_beats() {
    let beats = synthesize_arc("my friend and I drive to the city in the rain");
    assert_eq!(beats.len(), 8);
    assert_eq!(
        beats[0],
        "The protagonist faces a difficult situation involving vehicle journey in a urban"
    );
    assert_eq!(beats[3], "A crucial decision must be made in a urban");
    assert_eq!(
        beats[4],
        "The consequences of their choice unfold in the context of stormy weather"
    );
    assert_eq!(beats[6], "A moment of clarity or revelation occurs in a urban");
    assert_eq!(
        beats[7],
        "Resolution brings growth and understanding with urban setting playing a crucial role"
    );
}

#[test]
fn neutral_environment_adds_no_clause() {
    let beats = synthesize_arc("a lonely robot");
    assert!(beats.iter().all(|beat| !beat.contains(" in a ")));
}
