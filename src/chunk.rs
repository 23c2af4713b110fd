/// Four character tags used by the canonical RIFF/WAVE layout
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ChunkTag {
    /// `RIFF` container chunk
    Riff,
    /// `WAVE` form type following the riff size
    Wave,
    /// `fmt ` chunk holding the pcm format
    Fmt,
    /// `data` chunk holding the samples
    Data,
}

impl ChunkTag {
    /// ASCII bytes of the tag as they appear on disk
    pub const fn to_bytes(self) -> [u8; 4] {
        match self {
            ChunkTag::Riff => *b"RIFF",
            ChunkTag::Wave => *b"WAVE",
            ChunkTag::Fmt => *b"fmt ",
            ChunkTag::Data => *b"data",
        }
    }

    pub(crate) fn matches(self, bytes: &[u8]) -> bool {
        bytes == self.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_tag_keeps_trailing_space() {
        assert_eq!(ChunkTag::Fmt.to_bytes(), [0x66, 0x6d, 0x74, 0x20]);
        assert!(ChunkTag::Fmt.matches(b"fmt "));
        assert!(!ChunkTag::Fmt.matches(b"fmt"));
    }

    #[test]
    fn tags_are_ascii() {
        assert_eq!(&ChunkTag::Riff.to_bytes(), b"RIFF");
        assert_eq!(&ChunkTag::Wave.to_bytes(), b"WAVE");
        assert_eq!(&ChunkTag::Data.to_bytes(), b"data");
    }
}
