use std::iter::FusedIterator;
use std::ops::Range;

/// Split an input line into tokens.
///
/// Tokens are separated by unquoted, unescaped spaces.
/// A `"` toggles quoting (unless escaped by the immediately preceding `\`), and a token wrapped entirely in quotes has them removed.
/// Escapes are *not* unescaped: `\"` inside a token stays `\"`.
///
/// The returned iterator is lazy and borrows `input`; clone it (or call `tokenize` again) to restart.
///
/// ### Example
/// ```
/// # use sprig_core as sprig;
/// let tokens: Vec<&str> = sprig::tokenize(r#"commit -m "fix the thing""#).collect();
/// assert_eq!(tokens, vec!["commit", "-m", "fix the thing"]);
/// ```
pub fn tokenize(input: &str) -> Tokens<'_> {
    Tokens {
        scanner: Scanner::new(input),
    }
}

/// Iterator over the tokens of an input line, see [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    scanner: Scanner<'a>,
}

impl<'a> Tokens<'a> {
    /// Switch to yielding each token alongside its raw byte span in the input.
    ///
    /// The span covers the token as written, including any quotes that were stripped from the value.
    pub fn spanned(self) -> Spanned<'a> {
        Spanned {
            scanner: self.scanner,
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.scanner
            .next_span()
            .map(|span| self.scanner.value(span))
    }
}

impl FusedIterator for Tokens<'_> {}

/// Iterator over the tokens of an input line, with their raw spans.
#[derive(Debug, Clone)]
pub struct Spanned<'a> {
    scanner: Scanner<'a>,
}

impl<'a> Iterator for Spanned<'a> {
    type Item = (Range<usize>, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.scanner.next_span().map(|span| {
            let value = self.scanner.value(span.clone());
            (span, value)
        })
    }
}

impl FusedIterator for Spanned<'_> {}

const SPACE: u8 = b' ';
const QUOTE: u8 = b'"';
const ESCAPE: u8 = b'\\';

#[derive(Debug, Clone)]
struct Scanner<'a> {
    input: &'a str,
    // The current byte index of the input being considered.
    position: usize,
    quoted: bool,
    escaped: bool,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            quoted: false,
            escaped: false,
        }
    }

    // All the delimiting characters are ascii, so every index we slice at is a char boundary.
    fn next_span(&mut self) -> Option<Range<usize>> {
        let bytes = self.input.as_bytes();
        let mut start = self.position;

        while self.position < bytes.len() {
            let current = bytes[self.position];
            // Only the immediately preceding character decides whether this one is escaped.
            let escaped = self.escaped;

            if current == QUOTE && !escaped {
                self.quoted = !self.quoted;
            }

            self.escaped = current == ESCAPE && !escaped;
            self.position += 1;

            if current == SPACE && !self.quoted && !escaped {
                let end = self.position - 1;

                if end > start {
                    return Some(start..end);
                }

                start = self.position;
            }
        }

        if self.position > start {
            Some(start..self.position)
        } else {
            None
        }
    }

    fn value(&self, span: Range<usize>) -> &'a str {
        let raw = &self.input[span];

        if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
            &raw[1..raw.len() - 1]
        } else {
            raw
        }
    }
}
