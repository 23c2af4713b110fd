use thiserror::Error;

/// Error type for encoding, decoding and accumulation failures
#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// A length or format parameter is outside what the header can express
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    /// Fewer bytes than a canonical header
    #[error("expected at least {expected} header bytes, got {actual}")]
    TooShort {
        /// required number of bytes
        expected: usize,
        /// number of bytes supplied
        actual: usize,
    },
    /// No riff chunk found
    #[error("no RIFF chunk found")]
    NoRiffChunkFound,
    /// No WAVE tag found
    #[error("no WAVE tag found")]
    NoWaveTagFound,
    /// No fmt chunk found
    #[error("no fmt chunk found")]
    NoFmtChunkFound,
    /// No data chunk found
    #[error("no data chunk found")]
    NoDataChunkFound,
    /// Unsupported audio format code
    #[error("unsupported audio format {0}")]
    UnsupportedFormat(u16),
    /// Audio fragment was not valid base64
    #[error("audio fragment is not valid base64")]
    InvalidBase64,
    /// The stream ended without producing any audio
    #[error("no audio was generated")]
    NoAudio,
    /// Settings carry no API key
    #[error("no API key configured")]
    MissingApiKey,
    /// Settings carry no voice name
    #[error("no voice configured")]
    MissingVoice,
}

/// Error raised while writing a wav buffer into a sink
#[cfg(feature = "io")]
#[derive(Debug, PartialEq)]
pub enum WriteError<E> {
    /// Error from the underlying writer
    Writer(E),
    /// Error while building the wav buffer
    Wav(Error),
}

#[cfg(feature = "io")]
impl<E> From<Error> for WriteError<E> {
    fn from(e: Error) -> Self {
        WriteError::Wav(e)
    }
}
