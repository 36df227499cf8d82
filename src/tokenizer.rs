use crate::error::Result;
use crate::SharedString;
use crate::NOT_FOUND;
use crate::NPOS;

/// Space and tab.
pub const WHITESPACE: &[u8] = b" \t";

/// Splits a SharedString on any of a set of delimiter bytes.
///
/// The tokenizer never edits its input. A SharedString source is shared
/// rather than copied, so editing it between calls to `next_token` changes
/// what the following tokens are. Each token is a new, unshared string.
///
/// A run of delimiters counts as one separator, except at the very start of
/// the input where a leading delimiter produces one empty token.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    source: SharedString,
    delimiters: SharedString,
    position: usize,
}

impl Tokenizer {
    pub fn new(source: impl Into<SharedString>, delimiters: impl Into<SharedString>) -> Self {
        Tokenizer { source: source.into(), delimiters: delimiters.into(), position: 0 }
    }

    /// Splits on spaces and tabs.
    pub fn whitespace(source: impl Into<SharedString>) -> Self {
        Self::new(source, WHITESPACE)
    }

    pub fn has_more_tokens(&self) -> bool {
        self.position != NPOS
    }

    fn is_delimiter(&self, c: u8) -> Result<bool> {
        if self.delimiters.is_empty() { return Ok(false) }
        Ok(self.delimiters.find(c, 0)? != NOT_FOUND)
    }

    /// Returns the next token, or an empty string once the input is used up.
    pub fn next_token(&mut self) -> Result<SharedString> {
        if self.position == NPOS {
            return Ok(SharedString::new());
        }
        let start = self.position;
        let len = self.source.len();

        let mut end = None;
        for i in start..len {
            if self.is_delimiter(self.source.byte_at(i)?)? {
                end = Some(i);
                break;
            }
        }
        let end = match end {
            Some(end) => end,
            None => {
                // no more delimiters, the rest of the input is the last token
                self.position = NPOS;
                return self.source.substr(start, NPOS);
            }
        };

        self.position = NPOS;
        for i in end..len {
            if !self.is_delimiter(self.source.byte_at(i)?)? {
                self.position = i;
                break;
            }
        }
        log::trace!("token {}..{}, next at {}", start, end, self.position);
        self.source.substr(start, end - start)
    }
}

/// Iteration ends at the end of the input. It also ends, with
/// `has_more_tokens` turning false, if the shared source was shortened
/// past the scan position, where `next_token` would return OutOfBounds.
impl Iterator for Tokenizer {
    type Item = SharedString;
    fn next(&mut self) -> Option<SharedString> {
        if !self.has_more_tokens() { return None }
        match self.next_token() {
            Ok(token) => Some(token),
            Err(e) => {
                log::debug!("tokenizer stopped: {}", e);
                self.position = NPOS;
                None
            }
        }
    }
}
