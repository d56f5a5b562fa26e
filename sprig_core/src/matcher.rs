use crate::component::Component;
use crate::error::ParseError;
use crate::result::ParseResult;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Match a single token against `component`, without descending into its children.
pub(crate) fn match_token<'c>(component: &'c Component, token: &str) -> Option<ParseResult<'c>> {
    if component.accepts(token) {
        Some(ParseResult::new(token, component))
    } else {
        None
    }
}

/// Select the child of `component` which `token` should attach to.
///
/// Precedence:
/// 1. Flags, in declared order.
/// 2. Commands, in declared order.
/// 3. The next positional parameter, if any remain after the `matched_parameters` already taken.
pub(crate) fn select_child<'c>(
    component: &'c Component,
    matched_parameters: usize,
    token: &str,
) -> Option<&'c Component> {
    component
        .flags()
        .find(|flag| flag.accepts(token))
        .or_else(|| component.commands().find(|command| command.accepts(token)))
        .or_else(|| component.parameters().nth(matched_parameters))
}

/// Recursively match `component` (and its subtree) against `tokens`, starting at `position`.
///
/// On success, returns the result along with the position of the first un-consumed token.
/// Children are filled greedily until no child accepts the next token; the remaining tokens are left for an ancestor.
pub(crate) fn match_component<'c>(
    component: &'c Component,
    tokens: &[&str],
    position: usize,
) -> Result<(ParseResult<'c>, usize), ParseError> {
    let token = tokens.get(position).ok_or(ParseError::TokensExhausted)?;
    let mut result = match_token(component, token).ok_or_else(|| ParseError::NoMatch {
        index: position,
        token: token.to_string(),
    })?;
    let mut position = position + 1;

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Matched '{token}' to {} '{}'.", component.kind(), component.name());
    }

    while let Some(token) = tokens.get(position) {
        let child = match select_child(component, result.parameter_count(), token) {
            Some(child) => child,
            None => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("No child of '{}' accepts '{token}'; leaving it to an ancestor.", component.name());
                }

                break;
            }
        };

        let (child_result, next) = match_component(child, tokens, position)?;
        result.push(child_result);
        position = next;
    }

    Ok((result, position))
}
