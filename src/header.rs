use crate::chunk::ChunkTag;
use crate::error::Error;
use crate::fmt::{FMT_CHUNK_SIZE, PcmFormat};

/// Size in bytes of the canonical header
pub const HEADER_LEN: usize = 44;

/// Bytes counted by the riff size on top of the data length
const RIFF_OVERHEAD: u32 = 36;

/// The canonical 44 byte RIFF/WAVE header for a single `fmt ` and `data` chunk
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct WavHeader {
    fmt: PcmFormat,
    data_len: u32,
}

impl WavHeader {
    /// Create a header for a payload of `data_len` bytes.
    ///
    /// Fails with [`Error::InvalidParameter`] when the length is negative or
    /// too large for the 32 bit size fields, or when a pcm parameter is zero.
    pub fn new<L: TryInto<u32>>(data_len: L, fmt: PcmFormat) -> Result<Self, Error> {
        let data_len: u32 = data_len
            .try_into()
            .map_err(|_| Error::InvalidParameter("data length outside the 32 bit range"))?;

        if data_len.checked_add(RIFF_OVERHEAD).is_none() {
            return Err(Error::InvalidParameter("riff size exceeds 32 bits"));
        }

        fmt.validate()?;
        fmt.byte_rate()?;
        fmt.block_align()?;

        Ok(WavHeader { fmt, data_len })
    }

    /// pcm parameters written to the `fmt ` chunk
    pub fn fmt(&self) -> PcmFormat {
        self.fmt
    }

    /// length of the payload following the header
    pub fn data_len(&self) -> u32 {
        self.data_len
    }

    /// Value of the riff `ChunkSize` field
    pub fn chunk_size(&self) -> u32 {
        RIFF_OVERHEAD + self.data_len
    }

    /// Serialize the header.
    ///
    /// ```
    /// use pcmwav::{PcmFormat, WavHeader};
    ///
    /// let header = WavHeader::new(8u32, PcmFormat::new(2, 48_000, 16).unwrap()).unwrap();
    ///
    /// let bytes: [u8; 44] = [
    ///     0x52, 0x49, 0x46, 0x46, // RIFF
    ///     0x2c, 0x00, 0x00, 0x00, // chunk size
    ///     0x57, 0x41, 0x56, 0x45, // WAVE
    ///     0x66, 0x6d, 0x74, 0x20, // fmt_
    ///     0x10, 0x00, 0x00, 0x00, // chunk size
    ///     0x01, 0x00, // audio format
    ///     0x02, 0x00, // num channels
    ///     0x80, 0xbb, 0x00, 0x00, // sample rate
    ///     0x00, 0xee, 0x02, 0x00, // byte rate
    ///     0x04, 0x00, // block align
    ///     0x10, 0x00, // bits per sample
    ///     0x64, 0x61, 0x74, 0x61, // data
    ///     0x08, 0x00, 0x00, 0x00, // chunk size
    /// ];
    ///
    /// assert_eq!(header.to_bytes(), Ok(bytes));
    /// ```
    pub fn to_bytes(&self) -> Result<[u8; HEADER_LEN], Error> {
        let mut bytes = [0; HEADER_LEN];

        bytes[0..4].copy_from_slice(&ChunkTag::Riff.to_bytes());
        bytes[4..8].copy_from_slice(&self.chunk_size().to_le_bytes());
        bytes[8..12].copy_from_slice(&ChunkTag::Wave.to_bytes());
        bytes[12..16].copy_from_slice(&ChunkTag::Fmt.to_bytes());
        bytes[16..20].copy_from_slice(&FMT_CHUNK_SIZE.to_le_bytes());
        bytes[20..36].copy_from_slice(&self.fmt.to_chunk_bytes()?);
        bytes[36..40].copy_from_slice(&ChunkTag::Data.to_bytes());
        bytes[40..44].copy_from_slice(&self.data_len.to_le_bytes());

        Ok(bytes)
    }

    /// Read a canonical header back from the start of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() < HEADER_LEN {
            return Err(Error::TooShort {
                expected: HEADER_LEN,
                actual: bytes.len(),
            });
        }

        if !ChunkTag::Riff.matches(&bytes[0..4]) {
            return Err(Error::NoRiffChunkFound);
        }
        if !ChunkTag::Wave.matches(&bytes[8..12]) {
            return Err(Error::NoWaveTagFound);
        }
        if !ChunkTag::Fmt.matches(&bytes[12..16]) || read_u32(&bytes[16..20]) != FMT_CHUNK_SIZE
        {
            return Err(Error::NoFmtChunkFound);
        }
        if !ChunkTag::Data.matches(&bytes[36..40]) {
            return Err(Error::NoDataChunkFound);
        }

        let fmt_bytes: &[u8; 16] = bytes[20..36]
            .try_into()
            .map_err(|_| Error::NoFmtChunkFound)?;

        let fmt = PcmFormat::from_chunk_bytes(fmt_bytes)?;

        WavHeader::new(read_u32(&bytes[40..44]), fmt)
    }
}

fn read_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Encode the 44 byte header for a payload of `data_len` bytes.
///
/// ```
/// use pcmwav::{encode_header, Error, PcmFormat};
///
/// let header = encode_header(100usize, &PcmFormat::default()).unwrap();
/// assert_eq!(&header[0..4], b"RIFF");
/// assert_eq!(u32::from_le_bytes([header[4], header[5], header[6], header[7]]), 136);
///
/// assert!(matches!(
///     encode_header(-1i64, &PcmFormat::default()),
///     Err(Error::InvalidParameter(_))
/// ));
/// ```
pub fn encode_header<L: TryInto<u32>>(
    data_len: L,
    fmt: &PcmFormat,
) -> Result<[u8; HEADER_LEN], Error> {
    WavHeader::new(data_len, *fmt)?.to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u16_at(bytes: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
    }

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        read_u32(&bytes[offset..offset + 4])
    }

    #[test]
    fn fields_at_documented_offsets() {
        let fmt = PcmFormat::new(2, 16_000, 8).unwrap();
        let bytes = encode_header(1000u32, &fmt).unwrap();

        assert_eq!(bytes.len(), 44);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(u32_at(&bytes, 4), 1036);
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[12..16], b"fmt ");
        assert_eq!(u32_at(&bytes, 16), 16);
        assert_eq!(u16_at(&bytes, 20), 1);
        assert_eq!(u16_at(&bytes, 22), 2);
        assert_eq!(u32_at(&bytes, 24), 16_000);
        assert_eq!(u32_at(&bytes, 28), 32_000);
        assert_eq!(u16_at(&bytes, 32), 2);
        assert_eq!(u16_at(&bytes, 34), 8);
        assert_eq!(&bytes[36..40], b"data");
        assert_eq!(u32_at(&bytes, 40), 1000);
    }

    #[test]
    fn read_back_reproduces_inputs() {
        let cases = [
            (0u32, PcmFormat::default()),
            (100, PcmFormat::new(1, 24_000, 16).unwrap()),
            (4_800, PcmFormat::new(2, 48_000, 16).unwrap()),
            (u32::MAX - 36, PcmFormat::new(2, 8_000, 8).unwrap()),
        ];

        for (data_len, fmt) in cases {
            let bytes = encode_header(data_len, &fmt).unwrap();
            let header = WavHeader::from_bytes(&bytes).unwrap();

            assert_eq!(header.fmt(), fmt);
            assert_eq!(header.data_len(), data_len);
            assert_eq!(u32_at(&bytes, 4), u32_at(&bytes, 40) + 36);
            assert_eq!(
                u32_at(&bytes, 28),
                fmt.sample_rate * fmt.num_channels as u32 * fmt.bit_depth as u32 / 8
            );
        }
    }

    #[test]
    fn empty_payload() {
        let bytes = encode_header(0usize, &PcmFormat::default()).unwrap();

        assert_eq!(u32_at(&bytes, 4), 36);
        assert_eq!(u32_at(&bytes, 40), 0);
    }

    #[test]
    fn negative_length_is_invalid() {
        assert!(matches!(
            encode_header(-1i64, &PcmFormat::default()),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            encode_header(i32::MIN, &PcmFormat::default()),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn oversized_length_is_invalid() {
        assert!(matches!(
            encode_header(u32::MAX as u64 + 1, &PcmFormat::default()),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            encode_header(u32::MAX - 35, &PcmFormat::default()),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn zero_parameters_are_invalid() {
        let zeroed = [
            PcmFormat {
                num_channels: 0,
                ..PcmFormat::default()
            },
            PcmFormat {
                sample_rate: 0,
                ..PcmFormat::default()
            },
            PcmFormat {
                bit_depth: 0,
                ..PcmFormat::default()
            },
        ];

        for fmt in zeroed {
            assert!(matches!(
                encode_header(10u32, &fmt),
                Err(Error::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn from_bytes_rejects_foreign_data() {
        let mut bytes = encode_header(4u32, &PcmFormat::default()).unwrap();

        assert_eq!(
            WavHeader::from_bytes(&bytes[..43]),
            Err(Error::TooShort {
                expected: 44,
                actual: 43
            })
        );

        bytes[8..12].copy_from_slice(b"AVI ");
        assert_eq!(WavHeader::from_bytes(&bytes), Err(Error::NoWaveTagFound));

        bytes[0..4].copy_from_slice(b"RIFX");
        assert_eq!(WavHeader::from_bytes(&bytes), Err(Error::NoRiffChunkFound));
    }

    #[test]
    fn from_bytes_rejects_extensible_fmt() {
        let mut bytes = encode_header(4u32, &PcmFormat::default()).unwrap();
        bytes[16] = 40;

        assert_eq!(WavHeader::from_bytes(&bytes), Err(Error::NoFmtChunkFound));
    }

    #[test]
    fn from_bytes_rejects_unknown_length_marker() {
        let mut bytes = encode_header(4u32, &PcmFormat::default()).unwrap();
        bytes[40..44].copy_from_slice(&u32::MAX.to_le_bytes());

        assert!(matches!(
            WavHeader::from_bytes(&bytes),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn from_bytes_accepts_largest_length() {
        let mut bytes = encode_header(4u32, &PcmFormat::default()).unwrap();
        bytes[40..44].copy_from_slice(&(u32::MAX - 36).to_le_bytes());

        let header = WavHeader::from_bytes(&bytes).unwrap();
        assert_eq!(header.chunk_size(), u32::MAX);
        assert_eq!(header.to_bytes().unwrap()[4..8], u32::MAX.to_le_bytes());
    }

    #[test]
    fn from_bytes_rejects_zero_fields() {
        // num channels, sample rate, bits per sample
        for range in [22..24, 24..28, 34..36] {
            let mut bytes = encode_header(4u32, &PcmFormat::default()).unwrap();
            bytes[range].fill(0);

            assert!(matches!(
                WavHeader::from_bytes(&bytes),
                Err(Error::InvalidParameter(_))
            ));
        }
    }
}
