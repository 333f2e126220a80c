//! Recognizers for the inline constructs of a direction line.
//!
//! Each scanner is handed the rest of the line starting at a marker and
//! reports how many bytes it consumed and the item it produced. `Ok(None)`
//! means no construct starts here and the marker is plain text.

use crate::error::LineError;
use crate::model::Item;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

mod comment;
mod cookware;
mod ingredient;
mod timer;

pub use self::comment::{line_comment, BlockCommentScanner, EndOfLineCommentScanner};
pub use self::cookware::CookwareScanner;
pub use self::ingredient::IngredientScanner;
pub use self::timer::TimerScanner;

pub const INGREDIENT_MARKER: char = '@';
pub const COOKWARE_MARKER: char = '#';
pub const TIMER_MARKER: char = '~';
pub const BLOCK_COMMENT_OPEN: &str = "[-";
pub const BLOCK_COMMENT_CLOSE: &str = "-]";
pub const COMMENT_PREFIX: &str = "--";

/// A construct recognized at the start of the input
#[derive(Debug, Clone, PartialEq)]
pub struct Scanned {
    /// Bytes consumed, marker included
    pub len: usize,
    pub item: Item,
}

pub trait Scanner {
    /// Whether `rest` starts with this scanner's marker
    fn opens(&self, rest: &str) -> bool;

    fn scan(&self, rest: &str) -> Result<Option<Scanned>, LineError>;
}

/// Scanners in dispatch order
pub fn all() -> [&'static dyn Scanner; 5] {
    [
        &IngredientScanner,
        &CookwareScanner,
        &TimerScanner,
        &BlockCommentScanner,
        &EndOfLineCommentScanner,
    ]
}

/// `<marker><name>{<body>}`
#[derive(Debug, PartialEq)]
pub(crate) struct Braced<'a> {
    pub name: &'a str,
    pub body: &'a str,
    pub len: usize,
}

/// `<marker><word>`
#[derive(Debug, PartialEq)]
pub(crate) struct Word<'a> {
    pub name: &'a str,
    pub len: usize,
}

/// The text right after the marker, if an entity can start there at all.
///
/// A marker at the end of the line or followed by whitespace never starts one.
pub(crate) fn after_marker(rest: &str) -> Option<(&str, usize)> {
    let mut chars = rest.chars();
    let marker = chars.next()?;
    let next = chars.next()?;
    if next.is_whitespace() {
        return None;
    }
    let marker_len = marker.len_utf8();
    Some((&rest[marker_len..], marker_len))
}

/// Look for the braced form: the first `}` before any other marker.
pub(crate) fn braced(rest: &str) -> Option<Braced<'_>> {
    let (after, marker_len) = after_marker(rest)?;
    for (index, ch) in after.char_indices() {
        if is_marker(ch) || opens_comment(&after[index..]) {
            return None;
        }
        if ch == '}' {
            let (name, body) = after[..index].split_once('{')?;
            return Some(Braced {
                name,
                body,
                len: marker_len + index + 1,
            });
        }
    }
    None
}

/// The single word after the marker, up to whitespace or punctuation.
pub(crate) fn word(rest: &str) -> Option<Word<'_>> {
    let (after, marker_len) = after_marker(rest)?;
    let end = after
        .find(|c: char| c.is_whitespace() || is_punctuation(c))
        .unwrap_or(after.len());
    if end == 0 {
        return None;
    }
    Some(Word {
        name: &after[..end],
        len: marker_len + end,
    })
}

fn is_marker(ch: char) -> bool {
    matches!(ch, INGREDIENT_MARKER | COOKWARE_MARKER | TIMER_MARKER)
}

fn opens_comment(rest: &str) -> bool {
    rest.starts_with(BLOCK_COMMENT_OPEN) || rest.starts_with(COMMENT_PREFIX)
}

/// ASCII punctuation and the Unicode `P*` categories, except `_` which
/// belongs to words
pub(crate) fn is_punctuation(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_punctuation() && ch != '_';
    }
    ch.general_category_group() == GeneralCategoryGroup::Punctuation
}
