//! Document narration over a platform speech synthesizer.
//!
//! # Responsibility
//! - Keep at most one utterance active across the document library.
//! - Pick a voice and rate for every utterance.
//!
//! # Invariants
//! - `playing` names the document whose utterance was started last and has
//!   not ended, errored or been stopped.
//! - End and error callbacks for a superseded utterance never clear the
//!   flag of the current one.

use crate::model::document::ArchiveDocument;
use log::{debug, warn};

pub const NARRATION_RATE: f32 = 0.9;
pub const PREFERRED_VOICE_NAME: &str = "Google US English";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    /// BCP 47 language tag, e.g. `en-US`.
    pub lang: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    /// Document id used to correlate end/error callbacks.
    pub id: String,
    pub text: String,
    pub rate: f32,
    pub voice: Option<Voice>,
}

/// Platform speech engine.
pub trait SpeechSynthesizer {
    fn voices(&self) -> Vec<Voice>;
    /// Queues `utterance`; completion is reported through
    /// [`NarrationController::on_end`] or [`NarrationController::on_error`].
    fn speak(&mut self, utterance: Utterance);
    /// Stops any queued or playing speech.
    fn cancel(&mut self);
}

/// Preferred voice: the named Google voice, else the first English voice.
pub fn pick_voice(voices: &[Voice]) -> Option<Voice> {
    voices
        .iter()
        .find(|voice| voice.name.contains(PREFERRED_VOICE_NAME))
        .or_else(|| voices.iter().find(|voice| voice.lang.starts_with("en")))
        .cloned()
}

/// Whether narration started or stopped after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrationToggle {
    Started,
    Stopped,
}

pub struct NarrationController<S> {
    synth: S,
    playing: Option<String>,
}

impl<S: SpeechSynthesizer> NarrationController<S> {
    pub fn new(synth: S) -> Self {
        Self {
            synth,
            playing: None,
        }
    }

    pub fn playing(&self) -> Option<&str> {
        self.playing.as_deref()
    }

    pub fn is_playing(&self, id: &str) -> bool {
        self.playing.as_deref() == Some(id)
    }

    /// Stops narration of `id` if it is playing, else narrates `text`
    /// in place of whatever was playing.
    pub fn toggle(&mut self, id: &str, text: &str) -> NarrationToggle {
        if self.is_playing(id) {
            self.synth.cancel();
            self.playing = None;
            debug!("event=narration_stop module=narration status=ok");
            return NarrationToggle::Stopped;
        }

        self.synth.cancel();
        let voice = pick_voice(&self.synth.voices());
        self.synth.speak(Utterance {
            id: id.to_string(),
            text: text.to_string(),
            rate: NARRATION_RATE,
            voice,
        });
        self.playing = Some(id.to_string());
        debug!("event=narration_start module=narration status=ok");
        NarrationToggle::Started
    }

    /// Toggles narration of an archive document's title and description.
    pub fn toggle_document(&mut self, document: &ArchiveDocument) -> NarrationToggle {
        self.toggle(&document.id, &document.narration_text())
    }

    pub fn on_end(&mut self, id: &str) {
        if self.is_playing(id) {
            self.playing = None;
        }
    }

    pub fn on_error(&mut self, id: &str) {
        if self.is_playing(id) {
            warn!("event=narration_error module=narration status=error");
            self.playing = None;
        }
    }

    /// Cancels playback and releases the synthesizer.
    pub fn shutdown(mut self) -> S {
        self.synth.cancel();
        self.playing = None;
        self.synth
    }
}

#[cfg(test)]
mod tests {
    use super::{pick_voice, Voice};

    fn voice(name: &str, lang: &str) -> Voice {
        Voice {
            name: name.to_string(),
            lang: lang.to_string(),
        }
    }

    #[test]
    fn pick_voice_prefers_google_then_english() {
        let voices = vec![
            voice("Amelie", "fr-FR"),
            voice("Daniel", "en-GB"),
            voice("Google US English", "en-US"),
        ];
        assert_eq!(pick_voice(&voices).unwrap().name, "Google US English");
        assert_eq!(pick_voice(&voices[..2]).unwrap().name, "Daniel");
        assert_eq!(pick_voice(&voices[..1]), None);
    }
}
