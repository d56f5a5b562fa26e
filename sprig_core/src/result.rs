use crate::component::Component;

/// A node of parse output: the token matched, the [`Component`] it matched, and the matched children.
///
/// A result borrows from the grammar tree it was parsed against, and so cannot outlive it.
#[derive(Debug, Clone)]
pub struct ParseResult<'c> {
    value: String,
    component: &'c Component,
    children: Vec<ParseResult<'c>>,
}

impl<'c> ParseResult<'c> {
    pub(crate) fn new(value: impl Into<String>, component: &'c Component) -> Self {
        Self {
            value: value.into(),
            component,
            children: Vec::default(),
        }
    }

    pub(crate) fn push(&mut self, child: ParseResult<'c>) {
        self.children.push(child);
    }

    /// The literal token consumed for this node.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The grammar component this node matched.
    pub fn component(&self) -> &'c Component {
        self.component
    }

    /// The matched children, in the order their tokens were consumed.
    pub fn children(&self) -> &[ParseResult<'c>] {
        &self.children
    }

    /// The first matched child for the `component` (compared by identity, not by value).
    pub fn find(&self, component: &Component) -> Option<&ParseResult<'c>> {
        self.children
            .iter()
            .find(|child| std::ptr::eq(child.component, component))
    }

    /// The first matched child whose component is named `name`.
    pub fn find_named(&self, name: &str) -> Option<&ParseResult<'c>> {
        self.children
            .iter()
            .find(|child| child.component.name() == name)
    }

    /// The most recently matched descendant (following the last child at every level), or `self` if there are no children.
    pub fn last(&self) -> &ParseResult<'c> {
        match self.children.last() {
            Some(child) => child.last(),
            None => self,
        }
    }

    /// The number of matched parameter children (non-recursive).
    pub(crate) fn parameter_count(&self) -> usize {
        self.children
            .iter()
            .filter(|child| child.component.is_parameter())
            .count()
    }
}

impl PartialEq for ParseResult<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
            && std::ptr::eq(self.component, other.component)
            && self.children == other.children
    }
}

impl Eq for ParseResult<'_> {}

impl std::fmt::Display for ParseResult<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)?;

        for child in &self.children {
            write!(f, " {child}")?;
        }

        Ok(())
    }
}

/// Reconstruct the token string from a parse result.
///
/// Values are joined by single spaces, depth-first, in pre-order.
/// For a successful [`crate::parse`] of quote-free input, this reproduces the (whitespace-normalized) input.
pub fn serialize_result(result: &ParseResult<'_>) -> String {
    result.to_string()
}
