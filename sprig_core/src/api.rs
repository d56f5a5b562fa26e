use crate::component::Component;
use crate::context::ParseContext;
use crate::error::ParseError;
use crate::matcher::match_component;
use crate::result::ParseResult;
use crate::tokens::tokenize;

/// Parse `text` against `root`, requiring every token to be consumed.
///
/// ### Example
/// ```
/// # use sprig_core as sprig;
/// use sprig::{make_flag, parse};
///
/// let help = make_flag("help", "h", "Print help.", vec![]);
///
/// assert_eq!(parse(&help, "-h").unwrap().value(), "-h");
/// assert!(parse(&help, "--wrong").is_none());
/// ```
pub fn parse<'c>(root: &'c Component, text: &str) -> Option<ParseResult<'c>> {
    try_parse(root, text).ok()
}

/// Parse `text` against the first of `roots` that consumes every token.
pub fn parse_multi<'c>(
    roots: impl IntoIterator<Item = &'c Component>,
    text: &str,
) -> Option<ParseResult<'c>> {
    try_parse_multi(roots, text).ok()
}

/// Parse `text` against `root`, requiring every token to be consumed, explaining any failure.
pub fn try_parse<'c>(root: &'c Component, text: &str) -> Result<ParseResult<'c>, ParseError> {
    try_parse_multi(std::iter::once(root), text)
}

/// Parse `text` against the first of `roots` that consumes every token, explaining any failure.
///
/// When no root succeeds, the error from the root which got the furthest is returned.
///
/// ### Example
/// ```
/// # use sprig_core as sprig;
/// use sprig::{make_command, try_parse_multi, ParseError};
///
/// let roots = vec![
///     make_command("status", "Show the working tree status.", vec![]),
///     make_command("stash", "Stash the changes away.", vec![]),
/// ];
///
/// assert_eq!(try_parse_multi(&roots, "stash").unwrap().value(), "stash");
/// assert_eq!(
///     try_parse_multi(&roots, "status now").unwrap_err(),
///     ParseError::Unconsumed { index: 1, token: "now".to_string() },
/// );
/// ```
pub fn try_parse_multi<'c>(
    roots: impl IntoIterator<Item = &'c Component>,
    text: &str,
) -> Result<ParseResult<'c>, ParseError> {
    let tokens: Vec<&str> = tokenize(text).collect();
    let mut furthest: Option<ParseError> = None;

    for root in roots {
        let error = match match_component(root, &tokens, 0) {
            Ok((result, next)) => match tokens.get(next) {
                None => return Ok(result),
                Some(token) => ParseError::Unconsumed {
                    index: next,
                    token: token.to_string(),
                },
            },
            Err(error) => error,
        };

        let further = match &furthest {
            Some(current) => error.index() > current.index(),
            None => true,
        };

        if further {
            furthest.replace(error);
        }
    }

    Err(furthest.unwrap_or_else(|| match tokens.first() {
        Some(token) => ParseError::NoMatch {
            index: 0,
            token: token.to_string(),
        },
        None => ParseError::TokensExhausted,
    }))
}

/// Parse `text` against `root`, returning whatever was matched before the first token the grammar cannot place.
///
/// Only fails when the first token does not match `root` (or there are no tokens).
pub fn parse_incomplete<'c>(root: &'c Component, text: &str) -> Option<ParseResult<'c>> {
    parse_incomplete_multi(std::iter::once(root), text)
}

/// Parse `text` against the first of `roots` that matches the first token, see [`parse_incomplete`].
pub fn parse_incomplete_multi<'c>(
    roots: impl IntoIterator<Item = &'c Component>,
    text: &str,
) -> Option<ParseResult<'c>> {
    let tokens: Vec<&str> = tokenize(text).collect();

    roots
        .into_iter()
        .find_map(|root| match_component(root, &tokens, 0).ok())
        .map(|(result, _)| result)
}

/// The candidates for the next token of `text`, against `root`.
///
/// See [`next_token_suggestions_multi`].
pub fn next_token_suggestions(root: &Component, text: &str) -> Vec<String> {
    next_token_suggestions_multi(std::iter::once(root), text)
}

/// The candidates for the next token of `text`, against alternative `roots`.
///
/// This is intended for tab completion.
/// The tokens of `text` are replayed through a fresh [`ParseContext`].
/// When `text` does not end with a delimiter, its last token is still being typed: it is not replayed, and instead used to filter the candidates.
/// This holds even when the last token already spells a candidate in full (`"clone"` suggests `clone`, while `"clone "` suggests what may follow it).
/// Replay also stops at the first token the grammar rejects, which is then used as the filter.
///
/// ### Example
/// ```
/// # use sprig_core as sprig;
/// use sprig::{make_command, next_token_suggestions};
///
/// let git = make_command(
///     "git",
///     "The stupid content tracker.",
///     vec![
///         make_command("clone", "Clone a repository.", vec![]),
///         make_command("pull", "Fetch and integrate.", vec![]),
///     ],
/// );
///
/// assert_eq!(next_token_suggestions(&git, "git "), vec!["clone", "pull"]);
/// assert_eq!(next_token_suggestions(&git, "git p"), vec!["pull"]);
/// ```
pub fn next_token_suggestions_multi<'c>(
    roots: impl IntoIterator<Item = &'c Component>,
    text: &str,
) -> Vec<String> {
    let mut context = ParseContext::new(roots);
    let mut tokens = tokenize(text).spanned().peekable();

    while let Some((span, token)) = tokens.next() {
        let partial = tokens.peek().is_none() && span.end == text.len();

        if partial || !context.parse_token(token) {
            return context.next_suggestions(token);
        }
    }

    context.next_suggestions("")
}
