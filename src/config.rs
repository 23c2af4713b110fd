use crate::error::Error;
use alloc::format;
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Voice used when none has been chosen
pub const DEFAULT_VOICE: &str = "Sadaltager";
/// Style prompt used when none has been chosen
pub const DEFAULT_STYLE_INSTRUCTIONS: &str = "Read aloud in a warm and friendly tone: ";

/// Settings handed to the speech pipeline by its host, see
/// [`SpeechFile::from_chunks`](crate::SpeechFile::from_chunks).
///
/// Persisted settings are merged over the defaults, so a partial or older
/// document still loads:
///
/// ```
/// use pcmwav::Settings;
///
/// let settings: Settings = serde_json::from_str(r#"{ "apiKey": "secret" }"#).unwrap();
///
/// assert_eq!(settings.api_key, "secret");
/// assert_eq!(settings.voice, "Sadaltager");
/// assert!(settings.save_folder.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// key for the speech provider
    pub api_key: String,
    /// prebuilt voice name
    pub voice: String,
    /// style prompt prepended to the text
    pub style_instructions: String,
    /// folder receiving generated files, empty for the root
    pub save_folder: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_key: String::new(),
            voice: String::from(DEFAULT_VOICE),
            style_instructions: String::from(DEFAULT_STYLE_INSTRUCTIONS),
            save_folder: String::new(),
        }
    }
}

impl Settings {
    /// Check that a request can be made with these settings
    pub fn validate(&self) -> Result<(), Error> {
        if self.api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }
        if self.voice.is_empty() {
            return Err(Error::MissingVoice);
        }
        Ok(())
    }

    /// Path of the file generated at `timestamp_ms` (milliseconds since the epoch).
    ///
    /// ```
    /// use pcmwav::Settings;
    ///
    /// let settings = Settings { save_folder: "audio/tts//".into(), ..Settings::default() };
    /// assert_eq!(settings.output_path(1_700_000_000_000), "audio/tts/tts-1700000000000.wav");
    /// ```
    pub fn output_path(&self, timestamp_ms: u64) -> String {
        let file_name = format!("tts-{timestamp_ms}.wav");

        if self.save_folder.trim().is_empty() {
            return file_name;
        }

        format!("{}/{}", self.save_folder.trim_end_matches('/'), file_name)
    }
}
