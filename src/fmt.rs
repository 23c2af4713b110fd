use crate::error::Error;

/// Default channel count when the mime type does not mention one
pub const DEFAULT_NUM_CHANNELS: u16 = 1;
/// Default sample rate when the mime type carries no `rate=` parameter
pub const DEFAULT_SAMPLE_RATE: u32 = 24_000;
/// Default bit depth when the mime type names no linear pcm subtype
pub const DEFAULT_BIT_DEPTH: u16 = 16;

/// Size of the `fmt ` chunk body for plain PCM
pub(crate) const FMT_CHUNK_SIZE: u32 = 16;

/// Audio format codes understood by the encoder
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AudioFormat {
    /// PCM (Pulse Code Modulation) - integer samples
    Pcm = 1,
}

impl AudioFormat {
    pub(crate) fn from_u16(value: u16) -> Result<Self, Error> {
        match value {
            1 => Ok(AudioFormat::Pcm),
            _ => Err(Error::UnsupportedFormat(value)),
        }
    }

    pub(crate) fn to_u16(self) -> u16 {
        self as u16
    }
}

/// PCM parameters describing a raw payload
///
/// for more information see [`here`]
///
/// [`here`]: http://soundfile.sapp.org/doc/WaveFormat/
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PcmFormat {
    /// number of audio channels in the sample data, channels are interleaved
    pub num_channels: u16,
    /// sample rate, typical values for speech are `16_000` or `24_000`
    pub sample_rate: u32,
    /// bit depth for each sample, `8` or `16`
    pub bit_depth: u16,
}

impl Default for PcmFormat {
    fn default() -> Self {
        PcmFormat {
            num_channels: DEFAULT_NUM_CHANNELS,
            sample_rate: DEFAULT_SAMPLE_RATE,
            bit_depth: DEFAULT_BIT_DEPTH,
        }
    }
}

impl PcmFormat {
    /// Create a new [`PcmFormat`], rejecting zero parameters.
    ///
    /// ```
    /// use pcmwav::{Error, PcmFormat};
    ///
    /// let fmt = PcmFormat::new(2, 16_000, 8).unwrap();
    /// assert_eq!(fmt.byte_rate(), Ok(32_000));
    ///
    /// assert!(matches!(PcmFormat::new(0, 16_000, 8), Err(Error::InvalidParameter(_))));
    /// ```
    pub fn new(num_channels: u16, sample_rate: u32, bit_depth: u16) -> Result<Self, Error> {
        let fmt = PcmFormat {
            num_channels,
            sample_rate,
            bit_depth,
        };
        fmt.validate()?;
        Ok(fmt)
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.num_channels == 0 {
            return Err(Error::InvalidParameter("channel count must be positive"));
        }
        if self.sample_rate == 0 {
            return Err(Error::InvalidParameter("sample rate must be positive"));
        }
        if self.bit_depth == 0 {
            return Err(Error::InvalidParameter("bit depth must be positive"));
        }
        Ok(())
    }

    /// Bytes of audio consumed per second of playback
    pub fn byte_rate(&self) -> Result<u32, Error> {
        (self.sample_rate as u64 * self.num_channels as u64 * self.bit_depth as u64 / 8)
            .try_into()
            .map_err(|_| Error::InvalidParameter("byte rate exceeds 32 bits"))
    }

    /// Bytes per complete multi-channel sample frame
    pub fn block_align(&self) -> Result<u16, Error> {
        (self.num_channels as u32 * self.bit_depth as u32 / 8)
            .try_into()
            .map_err(|_| Error::InvalidParameter("block align exceeds 16 bits"))
    }

    /// Body of the `fmt ` chunk, without its tag and size.
    pub(crate) fn to_chunk_bytes(&self) -> Result<[u8; 16], Error> {
        self.validate()?;

        let af = AudioFormat::Pcm.to_u16().to_le_bytes();
        let nc = self.num_channels.to_le_bytes();
        let sr = self.sample_rate.to_le_bytes();
        let br = self.byte_rate()?.to_le_bytes();
        let ba = self.block_align()?.to_le_bytes();
        let bd = self.bit_depth.to_le_bytes();

        Ok([
            af[0], af[1], // audio format
            nc[0], nc[1], // num channels
            sr[0], sr[1], sr[2], sr[3], // sample rate
            br[0], br[1], br[2], br[3], // byte rate
            ba[0], ba[1], // block align
            bd[0], bd[1], // bits per sample
        ])
    }

    pub(crate) fn from_chunk_bytes(bytes: &[u8; 16]) -> Result<Self, Error> {
        AudioFormat::from_u16(u16::from_le_bytes([bytes[0], bytes[1]]))?;

        PcmFormat::new(
            u16::from_le_bytes([bytes[2], bytes[3]]),
            u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            u16::from_le_bytes([bytes[14], bytes[15]]),
        )
    }
}
