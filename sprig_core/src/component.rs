use std::sync::Arc;

/// The kind of a grammar [`Component`], which decides how it matches tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Accepts any single token as its value.
    Parameter,
    /// Matches `--name` or `-short_name`.
    Flag,
    /// Matches its name literally.
    Command,
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Behaviour for producing completion candidates of a [`Component`].
///
/// The candidates are for the component itself (not its children), given the partial token typed so far.
/// Closures of the shape `Fn(&Component, &str) -> Vec<String>` are providers too.
///
/// ### Example
/// ```
/// # use sprig_core as sprig;
/// use sprig::{make_command, make_parameter, next_token_suggestions};
///
/// let remote = make_parameter("remote", "The remote to push to.", vec![])
///     .with_suggestions(|_: &sprig::Component, partial: &str| {
///         vec!["origin".to_string(), "upstream".to_string()]
///             .into_iter()
///             .filter(|remote| remote.starts_with(partial))
///             .collect()
///     });
/// let push = make_command("push", "Update remote refs.", vec![remote]);
///
/// assert_eq!(next_token_suggestions(&push, "push u"), vec!["upstream"]);
/// ```
pub trait SuggestionProvider: Send + Sync {
    /// Produce the candidates for `component`, given the `partial` token.
    fn suggestions(&self, component: &Component, partial: &str) -> Vec<String>;
}

impl<F> SuggestionProvider for F
where
    F: Fn(&Component, &str) -> Vec<String> + Send + Sync,
{
    fn suggestions(&self, component: &Component, partial: &str) -> Vec<String> {
        self(component, partial)
    }
}

/// The default [`SuggestionProvider`].
///
/// Suggests the component's name when it is non-empty and begins with the partial token.
/// Never suggests a [`ComponentKind::Parameter`], since its values cannot be enumerated.
///
/// A flag is only ever suggested by its [`Component::spelling`], the long `--name` form when it has one.
/// So a flag with both spellings offers nothing for the partial `-v`; a custom provider must cover short spellings itself.
///
/// ### Example
/// ```
/// # use sprig_core as sprig;
/// use sprig::make_flag;
///
/// let verbose = make_flag("verbose", "v", "Print more.", vec![]);
///
/// assert_eq!(verbose.suggestions("--"), vec!["--verbose"]);
/// assert_eq!(verbose.suggestions("-v"), Vec::<String>::new());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NameSuggestions;

impl SuggestionProvider for NameSuggestions {
    fn suggestions(&self, component: &Component, partial: &str) -> Vec<String> {
        if component.is_parameter() {
            return Vec::default();
        }

        let spelling = component.spelling();

        if !spelling.is_empty() && spelling.starts_with(partial) {
            vec![spelling]
        } else {
            Vec::default()
        }
    }
}

/// A [`SuggestionProvider`] offering a fixed set of literals, filtered by the partial token.
///
/// Useful for parameters with an enumerable value space.
///
/// ### Example
/// ```
/// # use sprig_core as sprig;
/// use sprig::{make_parameter, Choices};
///
/// let format = make_parameter("format", "Output format.", vec![])
///     .with_suggestions(Choices::new(["json", "yaml", "toml"]));
///
/// assert_eq!(format.suggestions("y"), vec!["yaml"]);
/// ```
#[derive(Debug, Clone)]
pub struct Choices {
    values: Vec<String>,
}

impl Choices {
    /// Create a provider over the given literals, offered in the given order.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl SuggestionProvider for Choices {
    fn suggestions(&self, _component: &Component, partial: &str) -> Vec<String> {
        self.values
            .iter()
            .filter(|value| value.starts_with(partial))
            .cloned()
            .collect()
    }
}

/// A node in the static grammar.
///
/// Build trees with [`make_flag`], [`make_parameter`], [`make_command`] (and their `make_required_*` variants).
/// Once built, a tree is never mutated; parse results borrow from it.
///
/// ### Example
/// ```
/// # use sprig_core as sprig;
/// use sprig::{make_command, make_flag, make_parameter, parse};
///
/// let clone = make_command(
///     "clone",
///     "Clone a repository.",
///     vec![
///         make_flag("verbose", "v", "Be more verbose.", vec![]),
///         make_parameter("url", "Repository to clone.", vec![]),
///     ],
/// );
///
/// let result = parse(&clone, "clone -v https://example.com/repo.git").unwrap();
/// assert_eq!(result.children().len(), 2);
/// ```
#[derive(Clone)]
pub struct Component {
    kind: ComponentKind,
    name: String,
    short_name: String,
    description: String,
    required: bool,
    children: Vec<Component>,
    provider: Arc<dyn SuggestionProvider>,
}

impl std::fmt::Debug for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Component")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("short_name", &self.short_name)
            .field("required", &self.required)
            .field("children", &self.children)
            .finish()
    }
}

impl Component {
    /// Create a component of any kind.
    ///
    /// `short_name` only affects [`ComponentKind::Flag`]; pass `""` for no short form.
    pub fn new(
        kind: ComponentKind,
        name: impl Into<String>,
        short_name: impl Into<String>,
        description: impl Into<String>,
        children: Vec<Component>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            short_name: short_name.into(),
            description: description.into(),
            required: false,
            children,
            provider: Arc::new(NameSuggestions),
        }
    }

    /// Mark this component as required: its parent's parse is incomplete without it.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Replace the [`NameSuggestions`] default with a custom provider.
    pub fn with_suggestions(mut self, provider: impl SuggestionProvider + 'static) -> Self {
        self.provider = Arc::new(provider);
        self
    }

    /// The kind of this component.
    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Whether this is a [`ComponentKind::Parameter`].
    pub fn is_parameter(&self) -> bool {
        self.kind == ComponentKind::Parameter
    }

    /// Whether this is a [`ComponentKind::Flag`].
    pub fn is_flag(&self) -> bool {
        self.kind == ComponentKind::Flag
    }

    /// Whether this is a [`ComponentKind::Command`].
    pub fn is_command(&self) -> bool {
        self.kind == ComponentKind::Command
    }

    /// Whether this component must be present for its parent to be complete.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The canonical name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The short flag name (empty when there is none).
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// The human readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// All children, in declared order.
    pub fn children(&self) -> &[Component] {
        &self.children
    }

    /// Whether any children are declared.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// The flag children, in declared order.
    pub fn flags(&self) -> impl Iterator<Item = &Component> + '_ {
        self.children.iter().filter(|child| child.is_flag())
    }

    /// The command children, in declared order.
    pub fn commands(&self) -> impl Iterator<Item = &Component> + '_ {
        self.children.iter().filter(|child| child.is_command())
    }

    /// The parameter children, in declared (positional) order.
    pub fn parameters(&self) -> impl Iterator<Item = &Component> + '_ {
        self.children.iter().filter(|child| child.is_parameter())
    }

    /// The number of parameter children.
    pub fn parameter_count(&self) -> usize {
        self.parameters().count()
    }

    /// The completion candidates for this component, via its [`SuggestionProvider`].
    pub fn suggestions(&self, partial: &str) -> Vec<String> {
        self.provider.suggestions(self, partial)
    }

    /// Whether `token` spells this component.
    ///
    /// Parameters accept anything; commands must equal the name; flags must equal `--name` or `-short_name`.
    /// An empty name (or short name) provides no spelling on that side.
    pub fn accepts(&self, token: &str) -> bool {
        match self.kind {
            ComponentKind::Parameter => true,
            ComponentKind::Command => token == self.name,
            ComponentKind::Flag => {
                let long = !self.name.is_empty()
                    && token.strip_prefix("--") == Some(self.name.as_str());
                let short = !self.short_name.is_empty()
                    && !token.starts_with("--")
                    && token.strip_prefix('-') == Some(self.short_name.as_str());
                long || short
            }
        }
    }

    /// The canonical token spelling: `--name` for flags (`-short_name` if there is no name), otherwise the name.
    pub fn spelling(&self) -> String {
        match self.kind {
            ComponentKind::Flag => {
                if !self.name.is_empty() {
                    format!("--{}", self.name)
                } else if !self.short_name.is_empty() {
                    format!("-{}", self.short_name)
                } else {
                    String::default()
                }
            }
            ComponentKind::Command | ComponentKind::Parameter => self.name.clone(),
        }
    }
}

/// Create a [`ComponentKind::Parameter`], accepting any single token.
pub fn make_parameter(
    name: impl Into<String>,
    description: impl Into<String>,
    children: Vec<Component>,
) -> Component {
    Component::new(ComponentKind::Parameter, name, "", description, children)
}

/// Create a required [`ComponentKind::Parameter`].
pub fn make_required_parameter(
    name: impl Into<String>,
    description: impl Into<String>,
    children: Vec<Component>,
) -> Component {
    make_parameter(name, description, children).required()
}

/// Create a [`ComponentKind::Flag`], spelled `--name` or `-short_name`.
///
/// Names are given without dashes.
pub fn make_flag(
    name: impl Into<String>,
    short_name: impl Into<String>,
    description: impl Into<String>,
    children: Vec<Component>,
) -> Component {
    Component::new(ComponentKind::Flag, name, short_name, description, children)
}

/// Create a required [`ComponentKind::Flag`].
pub fn make_required_flag(
    name: impl Into<String>,
    short_name: impl Into<String>,
    description: impl Into<String>,
    children: Vec<Component>,
) -> Component {
    make_flag(name, short_name, description, children).required()
}

/// Create a [`ComponentKind::Command`], matched by its literal name.
pub fn make_command(
    name: impl Into<String>,
    description: impl Into<String>,
    children: Vec<Component>,
) -> Component {
    Component::new(ComponentKind::Command, name, "", description, children)
}

/// Create a required [`ComponentKind::Command`].
pub fn make_required_command(
    name: impl Into<String>,
    description: impl Into<String>,
    children: Vec<Component>,
) -> Component {
    make_command(name, description, children).required()
}
