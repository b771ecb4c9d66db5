use uisu_core::catalog::seed::document_archive;
use uisu_core::narration::{NarrationToggle, Utterance, Voice, NARRATION_RATE};
use uisu_core::{NarrationController, SpeechSynthesizer};

#[derive(Default)]
struct RecordingSynth {
    voices: Vec<Voice>,
    spoken: Vec<Utterance>,
    cancels: usize,
}

impl SpeechSynthesizer for RecordingSynth {
    fn voices(&self) -> Vec<Voice> {
        self.voices.clone()
    }

    fn speak(&mut self, utterance: Utterance) {
        self.spoken.push(utterance);
    }

    fn cancel(&mut self) {
        self.cancels += 1;
    }
}

fn english_synth() -> RecordingSynth {
    RecordingSynth {
        voices: vec![
            Voice {
                name: "Yoruba".to_string(),
                lang: "yo-NG".to_string(),
            },
            Voice {
                name: "Samantha".to_string(),
                lang: "en-US".to_string(),
            },
        ],
        ..RecordingSynth::default()
    }
}

#[test]
fn toggling_same_document_stops_narration() {
    let mut controller = NarrationController::new(english_synth());
    assert_eq!(controller.toggle("5", "Ali Must Go"), NarrationToggle::Started);
    assert!(controller.is_playing("5"));
    assert_eq!(controller.toggle("5", "Ali Must Go"), NarrationToggle::Stopped);
    assert_eq!(controller.playing(), None);

    let synth = controller.shutdown();
    assert_eq!(synth.spoken.len(), 1);
}

#[test]
fn new_document_replaces_previous_utterance() {
    let mut controller = NarrationController::new(english_synth());
    controller.toggle("1", "first");
    controller.toggle("2", "second");
    assert_eq!(controller.playing(), Some("2"));

    // The superseded utterance reports its end after the switch.
    controller.on_end("1");
    assert_eq!(controller.playing(), Some("2"));
    controller.on_error("2");
    assert_eq!(controller.playing(), None);

    let synth = controller.shutdown();
    let ids: Vec<&str> = synth.spoken.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert!(synth.cancels >= 2);
}

#[test]
fn document_narration_uses_rate_voice_and_summary_text() {
    let archive = document_archive();
    let document = archive.get("1").unwrap();
    let mut controller = NarrationController::new(english_synth());
    controller.toggle_document(document);
    controller.on_end("1");
    assert_eq!(controller.playing(), None);

    let synth = controller.shutdown();
    let utterance = &synth.spoken[0];
    assert_eq!(utterance.rate, NARRATION_RATE);
    assert_eq!(utterance.voice.as_ref().map(|v| v.name.as_str()), Some("Samantha"));
    assert_eq!(
        utterance.text,
        "Title: The 1952 Students Union Constitution. Description: The founding legal document of the Union."
    );
}

#[test]
fn narration_without_english_voice_uses_platform_default() {
    let mut controller = NarrationController::new(RecordingSynth::default());
    controller.toggle("3", "memo");
    let synth = controller.shutdown();
    assert_eq!(synth.spoken[0].voice, None);
    assert_eq!(synth.cancels, 2);
}
