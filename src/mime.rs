//! Interpretation of the loosely structured mime type strings attached to
//! streamed audio fragments, e.g. `audio/L16;codec=pcm;rate=24000`.

use crate::fmt::PcmFormat;
use alloc::string::String;

const RATE_PARAM: &str = "rate=";

/// Resolve the pcm parameters described by a mime type.
///
/// Never fails: anything missing or malformed keeps its default
/// (1 channel, 24 kHz, 16 bit). Bit depth checks run `l8` before `l16`, so a
/// string mentioning both resolves to 16 bit.
///
/// ```
/// use pcmwav::{parse_mime_type, PcmFormat};
///
/// assert_eq!(parse_mime_type(""), PcmFormat::default());
///
/// let fmt = parse_mime_type("audio/l8;rate=16000;stereo");
/// assert_eq!(fmt.num_channels, 2);
/// assert_eq!(fmt.sample_rate, 16_000);
/// assert_eq!(fmt.bit_depth, 8);
/// ```
pub fn parse_mime_type(mime_type: &str) -> PcmFormat {
    let mut fmt = PcmFormat::default();

    if mime_type.is_empty() {
        return fmt;
    }

    let lower = mime_type.to_ascii_lowercase();

    match find_rate(&lower) {
        Some(digits) => match digits.parse::<u32>() {
            Ok(rate) if rate > 0 => fmt.sample_rate = rate,
            _ => log::debug!(
                "unusable rate {:?} in mime type {:?}, keeping {} Hz",
                digits,
                mime_type,
                fmt.sample_rate
            ),
        },
        None => log::debug!(
            "no rate in mime type {:?}, assuming {} Hz",
            mime_type,
            fmt.sample_rate
        ),
    }

    if lower.contains("stereo") {
        fmt.num_channels = 2;
    }
    if lower.contains("l8") {
        fmt.bit_depth = 8;
    }
    if lower.contains("l16") {
        fmt.bit_depth = 16;
    }

    fmt
}

/// First `rate=` occurrence followed by at least one digit
fn find_rate(lower: &str) -> Option<&str> {
    lower.match_indices(RATE_PARAM).find_map(|(idx, _)| {
        let rest = &lower[idx + RATE_PARAM.len()..];
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        (end > 0).then(|| &rest[..end])
    })
}

/// File extension of a known audio mime type, parameters ignored.
///
/// Raw linear pcm (`audio/l16`) has an extension but no playable container.
pub fn extension_for(mime_type: &str) -> Option<&'static str> {
    let essence: String = mime_type
        .split(';')
        .next()
        .unwrap_or(mime_type)
        .trim()
        .to_ascii_lowercase();

    match essence.as_str() {
        "audio/wav" | "audio/wave" | "audio/x-wav" | "audio/vnd.wave" => Some("wav"),
        "audio/mpeg" | "audio/mp3" => Some("mp3"),
        "audio/ogg" => Some("ogg"),
        "audio/opus" => Some("opus"),
        "audio/flac" | "audio/x-flac" => Some("flac"),
        "audio/mp4" | "audio/m4a" | "audio/x-m4a" => Some("m4a"),
        "audio/webm" => Some("webm"),
        "audio/aac" => Some("aac"),
        "audio/l16" => Some("l16"),
        _ => None,
    }
}

/// Whether a payload of this mime type must be wrapped in a wav container
/// before it can be stored or played.
///
/// ```
/// use pcmwav::needs_container;
///
/// assert!(needs_container("audio/L16;codec=pcm;rate=24000"));
/// assert!(needs_container("application/octet-stream"));
/// assert!(!needs_container("audio/mpeg"));
/// ```
pub fn needs_container(mime_type: &str) -> bool {
    !matches!(extension_for(mime_type), Some(ext) if ext != "l16")
}
