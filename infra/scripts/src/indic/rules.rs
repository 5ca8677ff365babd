//! Character-level rewrite rules. Each rule takes and returns a decoded
//! character buffer so lookahead stays simple.

use super::script::{ANUSVARA, CANDRABINDU, NUKTA, Script, U_SIGN, VIRAMA};
use crate::text::is_symbol_or_punctuation;
use unicode_normalization::UnicodeNormalization;

const ZERO_WIDTH: [char; 5] = ['\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{FEFF}'];
const ZWJ: char = '\u{200D}';

/// Sentence punctuation kept in TTS mode.
const SENTENCE_PUNCTUATION: [char; 8] = ['.', ',', '?', '!', ';', ':', '।', '॥'];

/// Malayalam consonants written as `consonant + virama + ZWJ` before atomic chillus.
const MALAYALAM_CHILLUS: [(char, char); 6] =
    [('ണ', 'ൺ'), ('ന', 'ൻ'), ('ര', 'ർ'), ('ല', 'ൽ'), ('ള', 'ൾ'), ('ക', 'ൿ')];

const CHANDRA_PAIRS: [(u32, u32); 5] =
    [(CANDRABINDU, ANUSVARA), (0x45, 0x47), (0x49, 0x4B), (0x0D, 0x0F), (0x11, 0x13)];

/// Independent vowel letters written as a carrier followed by a vowel sign.
const GURMUKHI_VOWEL_BASES: [((char, char), char); 9] = [
    (('ਅ', 'ਾ'), 'ਆ'),
    (('ਅ', 'ੈ'), 'ਐ'),
    (('ਅ', 'ੌ'), 'ਔ'),
    (('ੲ', 'ਿ'), 'ਇ'),
    (('ੲ', 'ੀ'), 'ਈ'),
    (('ੲ', 'ੇ'), 'ਏ'),
    (('ੳ', 'ੁ'), 'ਉ'),
    (('ੳ', 'ੂ'), 'ਊ'),
    (('ੳ', 'ੋ'), 'ਓ'),
];

const GURMUKHI_ADDAK: char = '\u{0A71}';
const GURMUKHI_TIPPI: char = '\u{0A70}';
const GURMUKHI_BINDI: char = '\u{0A02}';

const ASSAMESE_REMAP: [(char, char); 2] = [('\u{09F0}', '\u{09B0}'), ('\u{09F1}', '\u{09AC}')];
const ODIA_VA: char = '\u{0B35}';
const ODIA_WA: char = '\u{0B71}';

fn map_chars(chars: &[char], f: impl Fn(char) -> char) -> Vec<char> {
    chars.iter().copied().map(f).collect()
}

fn is_word_end(next: Option<&char>) -> bool {
    next.is_none_or(|&c| c.is_whitespace() || is_symbol_or_punctuation(c))
}

/// Rewrites legacy Malayalam chillus, then drops zero-width characters.
pub(crate) fn clean_zero_width(script: Script, chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if script == Script::Malayalam
            && chars.get(i + 1).is_some_and(|&v| script.is(v, VIRAMA))
            && chars.get(i + 2) == Some(&ZWJ)
            && let Some(&(_, chillu)) = MALAYALAM_CHILLUS.iter().find(|(base, _)| *base == c)
        {
            out.push(chillu);
            i += 3;
            continue;
        }
        if !ZERO_WIDTH.contains(&c) {
            out.push(c);
        }
        i += 1;
    }
    out
}

/// Decomposes nukta letters and drops the nukta sign.
pub(crate) fn remove_nuktas(script: Script, chars: &[char]) -> Vec<char> {
    chars.iter().copied().nfd().filter(|&c| !script.is(c, NUKTA)).nfc().collect()
}

pub(crate) fn normalize_chandras(script: Script, chars: &[char]) -> Vec<char> {
    map_chars(chars, |c| {
        CHANDRA_PAIRS
            .iter()
            .find(|(from, _)| script.is(c, *from))
            .and_then(|(_, to)| script.char_at(*to))
            .unwrap_or(c)
    })
}

/// `nasal + virama + consonant` becomes `anusvara + consonant`.
///
/// Strict mode only folds a nasal followed by a stop of its own class.
pub(crate) fn to_anusvara(script: Script, chars: &[char], strict: bool) -> Vec<char> {
    let Some(anusvara) = script.char_at(ANUSVARA) else {
        return chars.to_vec();
    };
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let folds = script.is_class_nasal(c)
            && chars.get(i + 1).is_some_and(|&v| script.is(v, VIRAMA))
            && chars.get(i + 2).is_some_and(|&next| {
                if strict {
                    script.stop_class_nasal(next).is_some_and(|nasal| script.is(c, nasal))
                } else {
                    script.is_consonant(next)
                }
            });
        if folds {
            out.push(anusvara);
            i += 2;
        } else {
            out.push(c);
            i += 1;
        }
    }
    out
}

/// `anusvara + stop` becomes `class nasal + virama + stop`.
pub(crate) fn to_nasal_consonants(script: Script, chars: &[char]) -> Vec<char> {
    let Some(virama) = script.char_at(VIRAMA) else {
        return chars.to_vec();
    };
    let mut out = Vec::with_capacity(chars.len() + chars.len() / 4);
    for (i, &c) in chars.iter().enumerate() {
        let nasal = script
            .is(c, ANUSVARA)
            .then(|| chars.get(i + 1).and_then(|&next| script.stop_class_nasal(next)))
            .flatten()
            .and_then(|offset| script.char_at(offset));
        match nasal {
            Some(nasal) => out.extend([nasal, virama]),
            None => out.push(c),
        }
    }
    out
}

/// Indo-Aryan: drops a word-final virama after a consonant.
/// Dravidian: a word-final `u` sign before the virama is dropped.
pub(crate) fn normalize_vowel_ending(script: Script, chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        let drop = if script.is_dravidian() {
            script.is(c, U_SIGN)
                && chars.get(i + 1).is_some_and(|&v| script.is(v, VIRAMA))
                && is_word_end(chars.get(i + 2))
        } else {
            script.is(c, VIRAMA)
                && i > 0
                && script.is_consonant(chars[i - 1])
                && is_word_end(chars.get(i + 1))
        };
        if !drop {
            out.push(c);
        }
    }
    out
}

/// Symbols and punctuation become spaces; TTS mode keeps sentence punctuation.
pub(crate) fn strip_punctuation(chars: &[char], tts_mode: bool) -> Vec<char> {
    map_chars(chars, |c| {
        if !is_symbol_or_punctuation(c) || (tts_mode && SENTENCE_PUNCTUATION.contains(&c)) {
            c
        } else {
            ' '
        }
    })
}

pub(crate) fn remap_assamese_chars(chars: &[char]) -> Vec<char> {
    map_chars(chars, |c| {
        ASSAMESE_REMAP.iter().find(|(from, _)| *from == c).map_or(c, |(_, to)| *to)
    })
}

pub(crate) fn remap_wa(chars: &[char]) -> Vec<char> {
    map_chars(chars, |c| if c == ODIA_VA { ODIA_WA } else { c })
}

pub(crate) fn canonicalize_tippi(chars: &[char]) -> Vec<char> {
    map_chars(chars, |c| if c == GURMUKHI_TIPPI { GURMUKHI_BINDI } else { c })
}

/// Addak geminates the following consonant: `ੱ + C` becomes `C + virama + C`.
pub(crate) fn canonicalize_addak(chars: &[char]) -> Vec<char> {
    let script = Script::Gurmukhi;
    let Some(virama) = script.char_at(VIRAMA) else {
        return chars.to_vec();
    };
    let mut out = Vec::with_capacity(chars.len() + chars.len() / 4);
    for (i, &c) in chars.iter().enumerate() {
        match chars.get(i + 1) {
            Some(&next) if c == GURMUKHI_ADDAK && script.is_consonant(next) => {
                out.extend([next, virama]);
            },
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn replace_vowel_bases(chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let pair = chars.get(i + 1).map(|&next| (chars[i], next));
        match pair.and_then(|p| GURMUKHI_VOWEL_BASES.iter().find(|(seq, _)| *seq == p)) {
            Some((_, vowel)) => {
                out.push(*vowel);
                i += 2;
            },
            None => {
                out.push(chars[i]);
                i += 1;
            },
        }
    }
    out
}
