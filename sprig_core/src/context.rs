use crate::component::Component;
use crate::error::ParseError;
use crate::matcher::{match_token, select_child};
use crate::result::ParseResult;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The lifecycle of a [`ParseContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// No root has matched yet.
    Empty,
    /// A root has matched, and some node may still accept children.
    Open,
    /// A root has matched, but no node accepts further children.
    Closed,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

// Index of a node in the context arena.
type NodeId = usize;

#[derive(Debug)]
struct Node<'c> {
    value: String,
    component: &'c Component,
    children: Vec<NodeId>,
}

impl<'c> Node<'c> {
    fn new(result: ParseResult<'c>) -> Self {
        Self {
            value: result.value().to_string(),
            component: result.component(),
            children: Vec::default(),
        }
    }
}

/// An incremental parse, fed one token at a time.
///
/// The context keeps the tree parsed so far plus a stack of *open* nodes: those which may still accept children.
/// Each token is offered to the immediate children of the top open node (flags, then commands, then the next due parameter).
/// When none accept it, that node is closed and the token is offered to the node below, and so on.
/// A token no open node accepts is rejected, leaving the parsed tree as it was.
///
/// ### Example
/// ```
/// # use sprig_core as sprig;
/// use sprig::{make_command, make_flag, make_required_parameter, ParseContext};
///
/// let git = make_command(
///     "git",
///     "The stupid content tracker.",
///     vec![make_command(
///         "clone",
///         "Clone a repository.",
///         vec![
///             make_flag("quiet", "q", "Operate quietly.", vec![]),
///             make_required_parameter("repository", "The repository to clone.", vec![]),
///         ],
///     )],
/// );
///
/// let mut context = ParseContext::single(&git);
/// assert!(context.parse_token("git"));
/// assert!(context.parse_token("clone"));
/// assert_eq!(context.next_suggestions("-"), vec!["--quiet"]);
/// assert!(!context.is_complete());
///
/// assert!(context.parse_token("https://example.com/repo.git"));
/// assert!(context.is_complete());
/// ```
#[derive(Debug)]
pub struct ParseContext<'c> {
    roots: Vec<&'c Component>,
    // The root node, once matched, is always at index 0.
    nodes: Vec<Node<'c>>,
    open: Vec<NodeId>,
    fed: usize,
}

const ROOT: NodeId = 0;

impl<'c> ParseContext<'c> {
    /// Create a context over alternative root components, tried in order for the first token.
    pub fn new(roots: impl IntoIterator<Item = &'c Component>) -> Self {
        Self {
            roots: roots.into_iter().collect(),
            nodes: Vec::default(),
            open: Vec::default(),
            fed: 0,
        }
    }

    /// Create a context over a single root component.
    pub fn single(root: &'c Component) -> Self {
        Self::new(std::iter::once(root))
    }

    /// The current lifecycle state.
    pub fn state(&self) -> ContextState {
        if self.nodes.is_empty() {
            ContextState::Empty
        } else if self.open.is_empty() {
            ContextState::Closed
        } else {
            ContextState::Open
        }
    }

    /// The number of tokens accepted so far.
    pub fn fed(&self) -> usize {
        self.fed
    }

    /// Parse the next token, returning whether it was accepted.
    ///
    /// See [`ParseContext::try_parse_token`].
    pub fn parse_token(&mut self, token: &str) -> bool {
        self.try_parse_token(token).is_ok()
    }

    /// Parse the next token.
    ///
    /// A rejected token never changes the parsed tree, although it may close open nodes.
    /// If every open node is closed, the context can accept no more tokens.
    pub fn try_parse_token(&mut self, token: &str) -> Result<(), ParseError> {
        if self.nodes.is_empty() {
            return self.parse_root(token);
        }

        while let Some(&top) = self.open.last() {
            let component = self.nodes[top].component;

            if component.has_children() {
                let matched_parameters = self.parameter_count(top);

                if let Some(result) = select_child(component, matched_parameters, token)
                    .and_then(|child| match_token(child, token))
                {
                    let id = self.attach(top, result);
                    self.fed += 1;

                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!(
                            "Attached '{token}' as {} '{}' under '{}'.",
                            self.nodes[id].component.kind(),
                            self.nodes[id].component.name(),
                            self.nodes[top].value
                        );
                    }

                    if self.nodes[id].component.has_children() {
                        self.open.push(id);
                    }

                    return Ok(());
                }
            }

            #[cfg(feature = "tracing_debug")]
            {
                debug!(
                    "Closing '{}', which does not accept '{token}'.",
                    self.nodes[top].value
                );
            }

            self.open.pop();
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("No open node accepts '{token}'.");
        }

        Err(ParseError::ContextStuck {
            index: self.fed,
            token: token.to_string(),
        })
    }

    fn parse_root(&mut self, token: &str) -> Result<(), ParseError> {
        let result = self
            .roots
            .iter()
            .find_map(|&root| match_token(root, token))
            .ok_or_else(|| ParseError::NoMatch {
                index: self.fed,
                token: token.to_string(),
            })?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Matched root '{}'.", result.component().name());
        }

        self.nodes.push(Node::new(result));
        self.open.push(ROOT);
        self.fed += 1;
        Ok(())
    }

    fn attach(&mut self, parent: NodeId, result: ParseResult<'c>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(result));
        self.nodes[parent].children.push(id);
        id
    }

    fn parameter_count(&self, id: NodeId) -> usize {
        self.nodes[id]
            .children
            .iter()
            .filter(|child| self.nodes[**child].component.is_parameter())
            .count()
    }

    /// The candidates for the next token, given the `partial` token typed so far (use `""` for none).
    ///
    /// Before any root matched, these are the roots' suggestions.
    /// Afterwards, they are the suggestions of the top open node's immediate children, in declared order.
    /// Parameters are not suggested once every declared parameter has been matched.
    /// Duplicates are kept.
    pub fn next_suggestions(&self, partial: &str) -> Vec<String> {
        let top = match self.open.last() {
            Some(&top) => top,
            None => {
                if !self.nodes.is_empty() {
                    return Vec::default();
                }

                return self
                    .roots
                    .iter()
                    .flat_map(|root| root.suggestions(partial))
                    .collect();
            }
        };

        let component = self.nodes[top].component;
        let parameters_exhausted = self.parameter_count(top) >= component.parameter_count();

        component
            .children()
            .iter()
            .filter(|child| !(parameters_exhausted && child.is_parameter()))
            .flat_map(|child| child.suggestions(partial))
            .collect()
    }

    /// The tree parsed so far, if a root has matched.
    pub fn root_parse_result(&self) -> Option<ParseResult<'c>> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(self.build(ROOT))
        }
    }

    fn build(&self, id: NodeId) -> ParseResult<'c> {
        let node = &self.nodes[id];
        let mut result = ParseResult::new(node.value.clone(), node.component);

        for child in &node.children {
            result.push(self.build(*child));
        }

        result
    }

    /// Whether no matched node is missing a required child.
    ///
    /// A context without a root match is never complete.
    pub fn is_complete(&self) -> bool {
        !self.nodes.is_empty() && self.is_node_complete(ROOT)
    }

    fn is_node_complete(&self, id: NodeId) -> bool {
        let node = &self.nodes[id];
        let satisfied = node
            .component
            .children()
            .iter()
            .filter(|child| child.is_required())
            .all(|required| {
                node.children
                    .iter()
                    .any(|child| std::ptr::eq(self.nodes[*child].component, required))
            });

        satisfied
            && node
                .children
                .iter()
                .all(|child| self.is_node_complete(*child))
    }
}
