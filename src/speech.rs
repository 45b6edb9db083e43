//! Text-to-speech boundary
//!
//! The platform voice service lives outside this crate; the core only needs
//! fire-and-forget `speak`/`stop`. `speak` always cancels the in-flight
//! utterance first so a quick second tap never queues behind the first.

use serde::{Deserialize, Serialize};

/// Voice parameters, tuned for toddlers: slow, slightly high-pitched Japanese
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// BCP 47 voice language tag
    pub language: String,
    /// Utterance rate, 0.0..=1.0 of the platform's range
    pub rate: f32,
    /// Pitch multiplier
    pub pitch: f32,
    /// Volume, 0.0..=1.0
    pub volume: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            language: "ja-JP".to_string(),
            rate: 0.4,
            pitch: 1.1,
            volume: 1.0,
        }
    }
}

/// Platform speech synthesizer surface
pub trait SpeechSynthesizer {
    /// Cancel any in-flight utterance, then render `text` as audio
    fn speak(&mut self, text: &str);
    /// Stop the in-flight utterance, if any
    fn stop(&mut self);
}

/// Log-only synthesizer for hosts without a voice service (and for the demo
/// binary). Tracks the in-flight utterance so the cancel contract holds.
#[derive(Debug, Default)]
pub struct LoggingSpeech {
    config: SpeechConfig,
    current: Option<String>,
}

impl LoggingSpeech {
    pub fn new(config: SpeechConfig) -> Self {
        Self {
            config,
            current: None,
        }
    }

    /// The utterance currently "playing", if any
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

impl SpeechSynthesizer for LoggingSpeech {
    fn speak(&mut self, text: &str) {
        if let Some(prev) = self.current.take() {
            log::debug!("cancelling utterance {prev:?}");
        }
        log::info!(
            "speak {:?} ({}, rate {}, pitch {})",
            text,
            self.config.language,
            self.config.rate,
            self.config.pitch
        );
        self.current = Some(text.to_string());
    }

    fn stop(&mut self) {
        if let Some(prev) = self.current.take() {
            log::debug!("stopping utterance {prev:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speak_replaces_in_flight_utterance() {
        let mut speech = LoggingSpeech::default();
        speech.speak("いぬ");
        assert_eq!(speech.current(), Some("いぬ"));

        speech.speak("ねこ");
        assert_eq!(speech.current(), Some("ねこ"));
    }

    #[test]
    fn test_stop_clears_utterance() {
        let mut speech = LoggingSpeech::default();
        speech.speak("りんご");
        speech.stop();
        assert_eq!(speech.current(), None);

        // Stop with nothing playing is fine
        speech.stop();
        assert_eq!(speech.current(), None);
    }

    #[test]
    fn test_default_config_is_japanese_toddler_voice() {
        let config = SpeechConfig::default();
        assert_eq!(config.language, "ja-JP");
        assert!(config.rate < 0.5);
        assert!(config.pitch > 1.0);
    }
}
