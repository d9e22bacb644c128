use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Primary weight class: separators sort before digits, digits before letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Separator,
    Digit,
    Letter,
}

/// Root-locale order of whitespace, punctuation and common symbols.
///
/// Non-alphanumeric characters missing from this table sort after it, by
/// code point.
const ROOT_SEPARATORS: &[char] = &[
    '\t', '\n', '\u{b}', '\u{c}', '\r', ' ', '\u{a0}',
    '_', '-', '\u{2010}', '\u{2011}', '\u{2013}', '\u{2014}',
    ',', ';', ':', '!', '\u{a1}', '?', '\u{bf}', '.', '\u{2026}', '\u{b7}',
    '\'', '\u{2018}', '\u{2019}', '"', '\u{201c}', '\u{201d}',
    '(', ')', '[', ']', '{', '}', '\u{a7}', '\u{b6}',
    '@', '*', '/', '\\', '&', '#', '%', '\u{2030}', '\u{2020}', '\u{2021}', '\u{2022}',
    '`', '\u{b4}', '^', '\u{a8}', '\u{b0}', '\u{a9}', '\u{ae}',
    '+', '\u{b1}', '\u{f7}', '\u{d7}', '<', '=', '>', '\u{ac}', '|', '\u{a6}', '~',
    '\u{a4}', '\u{a2}', '$', '\u{a3}', '\u{a5}', '\u{20ac}',
];

fn class_of(c: char) -> CharClass {
    if c.is_numeric() {
        CharClass::Digit
    } else if c.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Separator
    }
}

fn primary_weight(c: char) -> (CharClass, u32) {
    match class_of(c) {
        CharClass::Separator => {
            let weight = match ROOT_SEPARATORS.iter().position(|&p| p == c) {
                Some(rank) => rank as u32,
                None => ROOT_SEPARATORS.len() as u32 + c as u32,
            };
            (CharClass::Separator, weight)
        }
        class => (class, c as u32),
    }
}

fn primary_key(s: &str) -> impl Iterator<Item = (CharClass, u32)> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(primary_weight)
}

fn secondary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn tertiary_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd().map(char::is_uppercase)
}

/// Compare two display names the way a root-locale collator would.
///
/// Levels, in order: base letters ignoring accents and case, then accents,
/// then case (lowercase first). Falls back to code points so the order is
/// total and `Equal` only for identical strings.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| secondary_key(a).cmp(secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(tertiary_key(b)))
        .then_with(|| a.cmp(b))
}
