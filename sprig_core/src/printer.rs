use terminal_size::{terminal_size, Width};

use crate::component::{Component, ComponentKind};
use crate::error::WidthError;

mod columns;
use columns::{minimum, ColumnRenderer, LeftWidth, PaddingWidth, TotalWidth};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The default column at which help descriptions start.
pub const DEFAULT_MARGIN: usize = 40;

// The wrap width when no terminal is available.
const DEFAULT_TOTAL_WIDTH: usize = 80;
const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;

/// Formats usage and help text for a component tree.
///
/// ### Example
/// ```
/// use sprig_core::*;
///
/// let root = make_command("clone", "Clone a repository.", vec![
///     make_flag("quiet", "q", "Suppress output.", vec![]),
///     make_required_parameter("url", "Where to clone from.", vec![]),
/// ]);
/// let formatter = HelpFormatter::new(DEFAULT_MARGIN);
///
/// assert_eq!(formatter.usage(&root), "usage: clone [-q|--quiet] URL");
/// assert!(formatter.help(&root).unwrap().contains("Suppress output."));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HelpFormatter {
    margin: usize,
    total_width: usize,
}

impl HelpFormatter {
    /// Create a formatter whose descriptions start at column `margin`, wrapping at a fixed width.
    pub fn new(margin: usize) -> Self {
        Self {
            margin,
            total_width: DEFAULT_TOTAL_WIDTH,
        }
    }

    /// Create a formatter which wraps at the width of the current terminal, when there is one.
    pub fn terminal(margin: usize) -> Self {
        let formatter = Self::new(margin);

        if let Some((Width(terminal_width), _)) = terminal_size() {
            formatter.with_total_width(terminal_width as usize)
        } else {
            formatter
        }
    }

    /// Wrap descriptions to fit within `total_width` columns.
    pub fn with_total_width(mut self, total_width: usize) -> Self {
        self.total_width = total_width;
        self
    }

    /// The single line usage grammar of `root`.
    pub fn usage(&self, root: &Component) -> String {
        format!("usage: {}", grammar(root))
    }

    /// The full help message of `root`: its usage, description, and a section for each kind of child.
    pub fn help(&self, root: &Component) -> Result<String, WidthError> {
        let padding = PaddingWidth::new(PADDING_WIDTH)?;
        let margin = minimum("margin", MAIN_INDENT + padding.value() + 1, self.margin)?;
        let left = LeftWidth::new(margin - MAIN_INDENT - padding.value())?;
        let renderer =
            ColumnRenderer::guided(MAIN_INDENT, padding, left, TotalWidth(self.total_width))?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Help for '{}' with renderer {renderer:?}.", root.name());
        }

        let mut lines = vec![self.usage(root)];

        if !root.description().is_empty() {
            lines.push(String::default());
            lines.push(root.description().to_string());
        }

        let sections: [(&str, Vec<&Component>); 3] = [
            ("parameters:", root.parameters().collect()),
            ("commands:", root.commands().collect()),
            ("flags:", root.flags().collect()),
        ];

        for (heading, children) in sections {
            if children.is_empty() {
                continue;
            }

            lines.push(String::default());
            lines.push(heading.to_string());

            for child in children {
                lines.extend(renderer.render(MAIN_INDENT, &row_label(child), child.description()));
            }
        }

        Ok(lines.join("\n"))
    }
}

/// Generate the usage line for `root`.
///
/// Flags are spelled `-s|--name`, commands by name, and parameters by their upper-cased name.
/// Optional children are wrapped in `[...]`.
pub fn generate_usage_string(root: &Component) -> String {
    HelpFormatter::new(DEFAULT_MARGIN).usage(root)
}

/// Generate the help message for `root`, with descriptions starting at column `margin`.
pub fn generate_help_string(root: &Component, margin: usize) -> Result<String, WidthError> {
    HelpFormatter::new(margin).help(root)
}

fn grammar(component: &Component) -> String {
    let mut parts = vec![usage_label(component)];
    parts.extend(child_grammars(component));
    parts.join(" ")
}

fn child_grammars(component: &Component) -> Vec<String> {
    component
        .flags()
        .chain(component.commands())
        .chain(component.parameters())
        .map(|child| {
            let inner = grammar(child);

            if child.is_required() {
                inner
            } else {
                format!("[{inner}]")
            }
        })
        .collect()
}

fn usage_label(component: &Component) -> String {
    match component.kind() {
        ComponentKind::Flag => flag_spellings(component).join("|"),
        ComponentKind::Command => component.name().to_string(),
        ComponentKind::Parameter => metavar(component),
    }
}

fn row_label(component: &Component) -> String {
    let label = match component.kind() {
        ComponentKind::Flag => flag_spellings(component).join(", "),
        ComponentKind::Command => component.name().to_string(),
        ComponentKind::Parameter => metavar(component),
    };

    if component.is_flag() && component.has_children() {
        let mut parts = vec![label];
        parts.extend(child_grammars(component));
        parts.join(" ")
    } else {
        label
    }
}

fn flag_spellings(component: &Component) -> Vec<String> {
    let mut spellings = Vec::default();

    if !component.short_name().is_empty() {
        spellings.push(format!("-{}", component.short_name()));
    }

    if !component.name().is_empty() {
        spellings.push(format!("--{}", component.name()));
    }

    spellings
}

fn metavar(component: &Component) -> String {
    component.name().to_uppercase().replace('-', "_")
}
