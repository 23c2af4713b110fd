//! Basic `no_std` library for turning raw streamed PCM into WAV files.
//!
//! Speech APIs often return headerless linear PCM together with a mime type
//! such as `audio/L16;codec=pcm;rate=24000`. This crate reads the format out of
//! that string and prepends the canonical 44 byte RIFF/WAVE header.
//!
//! Wrapping a single payload:
//! ```
//! use pcmwav::to_wav;
//!
//! let pcm = vec![0u8; 480];
//! let wav = to_wav(&pcm, "audio/l16;rate=24000").unwrap();
//!
//! assert_eq!(wav.len(), 44 + 480);
//! assert_eq!(&wav[0..4], b"RIFF");
//! ```
//!
//! Accumulating a streamed response of base64 fragments:
//! ```
//! use pcmwav::{AudioChunk, SpeechBuffer};
//!
//! let chunks = vec![
//!     AudioChunk::audio("AAAAAA==", "audio/L16;codec=pcm;rate=24000"),
//!     AudioChunk::default(),
//!     AudioChunk::audio("AAAAAA==", "audio/L16;codec=pcm;rate=24000"),
//! ];
//!
//! let wav = SpeechBuffer::collect(chunks).unwrap();
//! assert_eq!(wav.len(), 44 + 8);
//! ```
//!
//! Encoding a header for a payload the caller already holds:
//! ```
//! use pcmwav::{encode_header, PcmFormat};
//!
//! let fmt = PcmFormat::new(2, 16_000, 8).unwrap();
//! let header = encode_header(1_000usize, &fmt).unwrap();
//!
//! assert_eq!(&header[36..40], b"data");
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod chunk;
mod config;
mod error;
mod fmt;
mod header;
mod mime;
mod stream;
mod wav;

pub use chunk::ChunkTag;
pub use config::{DEFAULT_STYLE_INSTRUCTIONS, DEFAULT_VOICE, Settings};
pub use error::Error;
pub use fmt::{
    AudioFormat, DEFAULT_BIT_DEPTH, DEFAULT_NUM_CHANNELS, DEFAULT_SAMPLE_RATE, PcmFormat,
};
pub use header::{HEADER_LEN, WavHeader, encode_header};
pub use mime::{extension_for, needs_container, parse_mime_type};
pub use stream::{AudioChunk, SpeechBuffer, SpeechFile};
pub use wav::to_wav;

#[cfg(feature = "io")]
pub use error::WriteError;
#[cfg(feature = "io")]
pub use wav::{write_wav, write_wav_async};

#[cfg(feature = "std")]
pub use stream::asynch;
