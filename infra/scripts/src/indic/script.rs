use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Offsets of the shared ISCII-derived layout, relative to the block start.
pub(crate) const CANDRABINDU: u32 = 0x01;
pub(crate) const ANUSVARA: u32 = 0x02;
pub(crate) const NUKTA: u32 = 0x3C;
pub(crate) const U_SIGN: u32 = 0x41;
pub(crate) const VIRAMA: u32 = 0x4D;

/// `(first stop, nasal)` for the five consonant classes.
const VARGAS: [(u32, u32); 5] =
    [(0x15, 0x19), (0x1A, 0x1E), (0x1F, 0x23), (0x24, 0x28), (0x2A, 0x2E)];

const BLOCK_LEN: u32 = 0x80;

/// Indic scripts handled by [`crate::IndicNormalizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Script {
    Devanagari,
    Bengali,
    Gurmukhi,
    Gujarati,
    Odia,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
}

impl Script {
    /// First code point of the script's Unicode block.
    #[must_use]
    pub const fn block_start(self) -> u32 {
        match self {
            Self::Devanagari => 0x0900,
            Self::Bengali => 0x0980,
            Self::Gurmukhi => 0x0A00,
            Self::Gujarati => 0x0A80,
            Self::Odia => 0x0B00,
            Self::Tamil => 0x0B80,
            Self::Telugu => 0x0C00,
            Self::Kannada => 0x0C80,
            Self::Malayalam => 0x0D00,
        }
    }

    #[must_use]
    pub const fn is_dravidian(self) -> bool {
        matches!(self, Self::Tamil | Self::Telugu | Self::Kannada | Self::Malayalam)
    }

    /// Tamil writes nasal clusters with explicit consonants only.
    #[must_use]
    pub const fn uses_anusvara(self) -> bool {
        !matches!(self, Self::Tamil)
    }

    pub(crate) fn offset(self, c: char) -> Option<u32> {
        u32::from(c).checked_sub(self.block_start()).filter(|&offset| offset < BLOCK_LEN)
    }

    pub(crate) fn char_at(self, offset: u32) -> Option<char> {
        (offset < BLOCK_LEN).then(|| char::from_u32(self.block_start() + offset)).flatten()
    }

    pub(crate) fn is(self, c: char, offset: u32) -> bool {
        self.offset(c) == Some(offset)
    }

    pub(crate) fn is_consonant(self, c: char) -> bool {
        self.offset(c).is_some_and(|o| (0x15..=0x39).contains(&o) || (0x58..=0x5F).contains(&o))
    }

    /// Class of a consonant, as `(first stop, nasal)`.
    pub(crate) fn varga(self, c: char) -> Option<(u32, u32)> {
        let offset = self.offset(c)?;
        VARGAS.into_iter().find(|(start, nasal)| (*start..=*nasal).contains(&offset))
    }

    pub(crate) fn is_class_nasal(self, c: char) -> bool {
        self.varga(c).is_some_and(|(_, nasal)| self.is(c, nasal))
    }

    /// Nasal offset of the class of a non-nasal stop.
    pub(crate) fn stop_class_nasal(self, c: char) -> Option<u32> {
        self.varga(c).filter(|(_, nasal)| !self.is(c, *nasal)).map(|(_, nasal)| nasal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn blocks_do_not_overlap() {
        let starts: Vec<u32> = Script::iter().map(Script::block_start).collect();
        assert!(starts.windows(2).all(|w| w[1] - w[0] == BLOCK_LEN));
    }

    #[test]
    fn offsets_are_block_relative() {
        assert_eq!(Script::Devanagari.offset('क'), Some(0x15));
        assert_eq!(Script::Malayalam.offset('ക'), Some(0x15));
        assert_eq!(Script::Devanagari.offset('ক'), None);
        assert_eq!(Script::Tamil.char_at(VIRAMA), Some('\u{0BCD}'));
    }

    #[test]
    fn consonant_classes() {
        assert_eq!(Script::Devanagari.varga('ग'), Some((0x15, 0x19)));
        assert!(Script::Devanagari.is_class_nasal('म'));
        assert_eq!(Script::Devanagari.stop_class_nasal('द'), Some(0x28));
        assert_eq!(Script::Devanagari.stop_class_nasal('न'), None);
        assert_eq!(Script::Devanagari.varga('य'), None);
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Script::Gurmukhi.to_string(), "gurmukhi");
        assert!(Script::Kannada.is_dravidian());
        assert!(!Script::Tamil.uses_anusvara());
    }
}
