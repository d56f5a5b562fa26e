//! `sprig` is a grammar tree command line parser, built for interactive completion.
//!
//! A Cli grammar in `sprig` is a tree of [`Component`]s.
//! Each component is one of three kinds:
//! * *Parameter*: matches any single token, positionally.
//! * *Flag*: matches `--name` (or the short spelling `-n`).
//! * *Command*: matches its literal name.
//!
//! Any component may have children, which are matched after it.
//! For example, a `--message` flag may take a single parameter child, and a `clone` command may take flags and parameters of its own.
//!
//! Beyond one-shot parsing, `sprig` is designed around *incremental* parsing.
//! A [`ParseContext`] is fed one token at a time, and may be asked at any point which tokens could come next.
//! This drives shell style tab-completion via [`next_token_suggestions`].
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/completion.rs")]
//! ```
//!
//! ```console
//! $ completion commit --
//! Incomplete: Token '--' (index 2) was not consumed by the grammar.
//!   --message
//!   --amend
//!
//! $ completion checkout d
//! Parsed: git checkout d
//!   develop
//! ```
//!
//! # Parsing
//! ```
//! use sprig::*;
//!
//! let root = make_command("commit", "", vec![
//!     make_flag("message", "m", "", vec![make_required_parameter("msg", "", vec![])]),
//!     make_flag("amend", "", "", vec![]),
//! ]);
//!
//! let result = parse(&root, "commit -m \"first draft\" --amend").unwrap();
//! assert_eq!(result.children().len(), 2);
//! assert_eq!(result.children()[0].children()[0].value(), "first draft");
//!
//! // Every token must be consumed.
//! assert_eq!(parse(&root, "commit extra"), None);
//! ```
//!
//! # Completion
//! ```
//! use sprig::*;
//!
//! let root = make_command("git", "", vec![
//!     make_command("clone", "", vec![]),
//!     make_command("checkout", "", vec![]),
//!     make_flag("help", "h", "", vec![]),
//! ]);
//!
//! // A trailing space means the next token is empty.
//! assert_eq!(next_token_suggestions(&root, "git "), vec!["clone", "checkout", "--help"]);
//! // Otherwise the last token is the prefix being completed.
//! assert_eq!(next_token_suggestions(&root, "git ch"), vec!["checkout"]);
//! ```
//!
//! # Cli Semantics
//! `sprig` tokenizes and matches according to the following set of rules.
//!
//! * Tokens are separated by spaces.
//! A double quoted run is part of a single token, as is a space (or quote) preceded by a backslash.
//! Backslashes are kept in the token as written.
//! A token written entirely within quotes loses its surrounding quotes, so `"a b"` is the single token `a b`.
//! * After a component matches, its children are tried against the next token in the following precedence:
//! flags (in declared order), then commands (in declared order), then the next unmatched positional parameter.
//! * A component with nothing more to match hands the token back to its parent, and so on up the tree.
//! For example, with `commit -m MSG PATH`, the token after the message fills `PATH`.
//! * Flags and commands may repeat; each occurrence is a distinct match.
//! Parameters are matched at most once each.
//! * Completion suggests from the innermost component still accepting children.
//! Parameters suggest nothing unless configured via [`Component::with_suggestions`] (for example with [`Choices`]).
//!
//! # Features
//! * `tracing_debug`: Emit debug logs via `tracing`, for diagnosing how tokens are matched.
pub use sprig_core::*;
