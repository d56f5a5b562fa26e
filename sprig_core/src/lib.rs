//! Core module for `sprig`.
//! See [documentation root](https://docs.rs/sprig/latest/sprig/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod component;
mod context;
mod error;
mod matcher;
mod printer;
mod result;
mod tokens;

pub use api::*;
pub use component::*;
pub use context::{ContextState, ParseContext};
pub use error::{ParseError, WidthError};
pub use printer::{generate_help_string, generate_usage_string, HelpFormatter, DEFAULT_MARGIN};
pub use result::{serialize_result, ParseResult};
pub use tokens::{tokenize, Spanned, Tokens};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
