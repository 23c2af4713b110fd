use crate::config::Settings;
use crate::error::Error;
use crate::mime::needs_container;
use crate::wav::to_wav;
use alloc::string::String;
use alloc::vec::Vec;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// One fragment of a streamed speech response
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AudioChunk {
    /// base64 encoded audio bytes, absent for chunks that carry no audio
    pub data: Option<String>,
    /// mime type describing `data`
    pub mime_type: Option<String>,
}

impl AudioChunk {
    /// Chunk carrying an encoded audio fragment
    pub fn audio(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        AudioChunk {
            data: Some(data.into()),
            mime_type: Some(mime_type.into()),
        }
    }
}

/// Accumulates the audio fragments of a response into one playable buffer.
///
/// ```
/// use pcmwav::{AudioChunk, SpeechBuffer};
///
/// let mut buffer = SpeechBuffer::new();
/// buffer.push(AudioChunk::audio("AAAAAA==", "audio/L16;codec=pcm;rate=24000")).unwrap();
/// buffer.push(AudioChunk::default()).unwrap();
/// buffer.push(AudioChunk::audio("AQEBAQ==", "audio/L16;codec=pcm;rate=24000")).unwrap();
///
/// let wav = buffer.finish().unwrap();
/// assert_eq!(wav.len(), 44 + 8);
/// assert_eq!(&wav[0..4], b"RIFF");
/// ```
#[derive(Debug, Default)]
pub struct SpeechBuffer {
    payload: Vec<u8>,
    mime_type: Option<String>,
    fragments: usize,
}

impl SpeechBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode and append the fragment carried by `chunk`, if any.
    pub fn push(&mut self, chunk: AudioChunk) -> Result<(), Error> {
        let Some(data) = chunk.data.filter(|d| !d.is_empty()) else {
            return Ok(());
        };

        let bytes = STANDARD
            .decode(data.as_bytes())
            .map_err(|_| Error::InvalidBase64)?;
        self.payload.extend_from_slice(&bytes);
        self.fragments += 1;

        let mime_type = chunk.mime_type.unwrap_or_default();
        if let Some(first) = &self.mime_type {
            if *first != mime_type {
                log::warn!(
                    "fragment {} declares {:?}, keeping {:?}",
                    self.fragments,
                    mime_type,
                    first
                );
            }
        } else {
            self.mime_type = Some(mime_type);
        }

        log::trace!(
            "fragment {}: {} bytes accumulated",
            self.fragments,
            self.payload.len()
        );

        Ok(())
    }

    /// Number of audio fragments accumulated so far
    pub fn fragments(&self) -> usize {
        self.fragments
    }

    /// Whether no audio has been accumulated
    pub fn is_empty(&self) -> bool {
        self.fragments == 0
    }

    /// Produce the finished buffer.
    ///
    /// Raw pcm is wrapped once in a wav container covering every fragment;
    /// payloads already in a playable format are returned as received.
    pub fn finish(self) -> Result<Vec<u8>, Error> {
        if self.is_empty() {
            return Err(Error::NoAudio);
        }

        let mime_type = self.mime_type.unwrap_or_default();
        if needs_container(&mime_type) {
            log::debug!(
                "wrapping {} bytes of {:?} in a wav container",
                self.payload.len(),
                mime_type
            );
            to_wav(&self.payload, &mime_type)
        } else {
            Ok(self.payload)
        }
    }

    /// Accumulate every chunk of `chunks` and finish.
    pub fn collect<I>(chunks: I) -> Result<Vec<u8>, Error>
    where
        I: IntoIterator<Item = AudioChunk>,
    {
        let mut buffer = SpeechBuffer::new();
        for chunk in chunks {
            buffer.push(chunk)?;
        }
        buffer.finish()
    }
}

/// A finished speech response and the path it is stored under
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechFile {
    /// path derived from [`Settings::output_path`]
    pub path: String,
    /// playable audio, wrapped in a wav container when it arrived as raw pcm
    pub bytes: Vec<u8>,
}

impl SpeechFile {
    /// Turn the chunks of one response into a file named after `timestamp_ms`.
    ///
    /// Settings are checked before any chunk is consumed.
    ///
    /// ```
    /// use pcmwav::{AudioChunk, Settings, SpeechFile};
    ///
    /// let settings = Settings {
    ///     api_key: "key".into(),
    ///     save_folder: "speech/".into(),
    ///     ..Settings::default()
    /// };
    /// let chunks = vec![AudioChunk::audio("AAAAAA==", "audio/L16;codec=pcm;rate=24000")];
    ///
    /// let file = SpeechFile::from_chunks(&settings, chunks, 1_700_000_000_000).unwrap();
    /// assert_eq!(file.path, "speech/tts-1700000000000.wav");
    /// assert_eq!(file.bytes.len(), 44 + 4);
    /// ```
    pub fn from_chunks<I>(settings: &Settings, chunks: I, timestamp_ms: u64) -> Result<Self, Error>
    where
        I: IntoIterator<Item = AudioChunk>,
    {
        settings.validate()?;

        let bytes = SpeechBuffer::collect(chunks)?;
        let path = settings.output_path(timestamp_ms);
        log::debug!("speech file {} holds {} bytes", path, bytes.len());

        Ok(SpeechFile { path, bytes })
    }
}

/// Collection of chunks produced by an async source
#[cfg(feature = "std")]
pub mod asynch {
    use super::{AudioChunk, SpeechBuffer};
    use crate::error::Error;
    use alloc::vec::Vec;
    use tokio::sync::mpsc::Receiver;

    /// Drain `chunks` until every sender is dropped, then finish the buffer.
    ///
    /// Dropping the returned future cancels collection; nothing accumulated
    /// so far is kept.
    pub async fn collect_chunks(mut chunks: Receiver<AudioChunk>) -> Result<Vec<u8>, Error> {
        let mut buffer = SpeechBuffer::new();
        while let Some(chunk) = chunks.recv().await {
            buffer.push(chunk)?;
        }
        buffer.finish()
    }
}
