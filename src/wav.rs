use crate::error::Error;
use crate::header::{HEADER_LEN, encode_header};
use crate::mime::parse_mime_type;
use alloc::vec::Vec;

#[cfg(feature = "io")]
use crate::error::WriteError;

/// Wrap a raw payload in a wav container described by its mime type.
///
/// The header is computed for the full payload length, so the result is a
/// complete file ready to store or play:
///
/// ```
/// use pcmwav::to_wav;
///
/// let wav = to_wav(&[0; 100], "audio/l16;rate=24000").unwrap();
///
/// assert_eq!(wav.len(), 144);
/// assert_eq!(&wav[0..4], b"RIFF");
/// assert_eq!(&wav[8..12], b"WAVE");
/// assert_eq!(u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]), 100);
/// ```
pub fn to_wav(raw: &[u8], mime_type: &str) -> Result<Vec<u8>, Error> {
    let fmt = parse_mime_type(mime_type);
    let header = encode_header(raw.len(), &fmt)?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + raw.len());
    bytes.extend_from_slice(&header);
    bytes.extend_from_slice(raw);

    Ok(bytes)
}

/// Write a raw payload into `writer` as a complete wav file.
///
/// Nothing is written when the header cannot be encoded.
#[cfg(feature = "io")]
pub fn write_wav<W: embedded_io::Write>(
    writer: &mut W,
    raw: &[u8],
    mime_type: &str,
) -> Result<(), WriteError<W::Error>> {
    let header = encode_header(raw.len(), &parse_mime_type(mime_type))?;

    writer.write_all(&header).map_err(WriteError::Writer)?;
    writer.write_all(raw).map_err(WriteError::Writer)?;
    writer.flush().map_err(WriteError::Writer)
}

/// Async twin of [`write_wav`]
#[cfg(feature = "io")]
pub async fn write_wav_async<W: embedded_io_async::Write>(
    writer: &mut W,
    raw: &[u8],
    mime_type: &str,
) -> Result<(), WriteError<W::Error>> {
    let header = encode_header(raw.len(), &parse_mime_type(mime_type))?;

    writer.write_all(&header).await.map_err(WriteError::Writer)?;
    writer.write_all(raw).await.map_err(WriteError::Writer)?;
    writer.flush().await.map_err(WriteError::Writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fmt::PcmFormat;
    use crate::header::WavHeader;
    use alloc::vec;

    #[test]
    fn header_followed_by_payload() {
        let raw: Vec<u8> = (0..100).collect();
        let wav = to_wav(&raw, "audio/l16;rate=24000").unwrap();

        assert_eq!(wav.len(), 144);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]), 100);
        assert_eq!(&wav[44..], &raw[..]);
    }

    #[test]
    fn format_follows_mime_type() {
        let wav = to_wav(&[0x80; 64], "audio/l8;rate=16000;stereo").unwrap();
        let header = WavHeader::from_bytes(&wav).unwrap();

        assert_eq!(header.fmt(), PcmFormat::new(2, 16_000, 8).unwrap());
        assert_eq!(header.data_len(), 64);
    }

    #[test]
    fn empty_payload_is_bare_header() {
        let wav = to_wav(&[], "").unwrap();
        let header = WavHeader::from_bytes(&wav).unwrap();

        assert_eq!(wav.len(), 44);
        assert_eq!(header.fmt(), PcmFormat::default());
        assert_eq!(header.data_len(), 0);
    }

    #[test]
    fn matches_hand_written_file() {
        let wav = to_wav(&[0x01, 0x00, 0xff, 0xff], "audio/L16;codec=pcm;rate=22050").unwrap();

        let bytes = vec![
            0x52, 0x49, 0x46, 0x46, // RIFF
            0x28, 0x00, 0x00, 0x00, // chunk size
            0x57, 0x41, 0x56, 0x45, // WAVE
            0x66, 0x6d, 0x74, 0x20, // fmt_
            0x10, 0x00, 0x00, 0x00, // chunk size
            0x01, 0x00, // audio format
            0x01, 0x00, // num channels
            0x22, 0x56, 0x00, 0x00, // sample rate
            0x44, 0xac, 0x00, 0x00, // byte rate
            0x02, 0x00, // block align
            0x10, 0x00, // bits per sample
            0x64, 0x61, 0x74, 0x61, // data
            0x04, 0x00, 0x00, 0x00, // chunk size
            0x01, 0x00, 0xff, 0xff, // samples
        ];

        assert_eq!(wav, bytes);
    }

    #[cfg(feature = "io")]
    #[test]
    fn write_into_sink() {
        let mut sink: Vec<u8> = vec![];
        write_wav(&mut sink, &[1, 2, 3, 4], "audio/l16;rate=24000").unwrap();

        assert_eq!(sink, to_wav(&[1, 2, 3, 4], "audio/l16;rate=24000").unwrap());
    }

    #[cfg(feature = "io")]
    #[tokio::test]
    async fn write_into_async_sink() {
        let mut sink: Vec<u8> = vec![];
        write_wav_async(&mut sink, &[1, 2, 3, 4], "audio/l8;rate=8000")
            .await
            .unwrap();

        assert_eq!(sink.len(), 48);
        assert_eq!(WavHeader::from_bytes(&sink).unwrap().fmt().bit_depth, 8);
    }
}
