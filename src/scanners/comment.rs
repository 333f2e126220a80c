use super::{Scanned, Scanner, BLOCK_COMMENT_CLOSE, BLOCK_COMMENT_OPEN, COMMENT_PREFIX};
use crate::error::LineError;
use crate::model::{Comment, CommentKind, Item};

/// A `-- comment` line, if `line` is one
pub fn line_comment(line: &str) -> Option<Comment> {
    line.strip_prefix(COMMENT_PREFIX).map(|rest| Comment {
        value: rest.trim().to_string(),
        kind: CommentKind::Line,
    })
}

/// `[- comment -]` anywhere in a direction
pub struct BlockCommentScanner;

impl Scanner for BlockCommentScanner {
    fn opens(&self, rest: &str) -> bool {
        rest.starts_with(BLOCK_COMMENT_OPEN)
    }

    /// A block comment with no closing `-]` has no safe textual fallback and
    /// fails the line.
    fn scan(&self, rest: &str) -> Result<Option<Scanned>, LineError> {
        let body = &rest[BLOCK_COMMENT_OPEN.len()..];
        let end = body
            .find(BLOCK_COMMENT_CLOSE)
            .ok_or(LineError::UnterminatedBlockComment)?;
        Ok(Some(Scanned {
            len: BLOCK_COMMENT_OPEN.len() + end + BLOCK_COMMENT_CLOSE.len(),
            item: Item::Comment(Comment {
                value: body[..end].trim().to_string(),
                kind: CommentKind::Block,
            }),
        }))
    }
}

/// `-- comment` after direction text; takes the rest of the line
pub struct EndOfLineCommentScanner;

impl Scanner for EndOfLineCommentScanner {
    fn opens(&self, rest: &str) -> bool {
        rest.starts_with(COMMENT_PREFIX)
    }

    fn scan(&self, rest: &str) -> Result<Option<Scanned>, LineError> {
        Ok(Some(Scanned {
            len: rest.len(),
            item: Item::Comment(Comment {
                value: rest[COMMENT_PREFIX.len()..].trim().to_string(),
                kind: CommentKind::EndOfLine,
            }),
        }))
    }
}
