use crate::error::WidthError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub(crate) struct PaddingWidth(usize);

impl PaddingWidth {
    pub(crate) fn new(width: usize) -> Result<Self, WidthError> {
        // padding must be at least 1
        minimum("padding", 1, width).map(PaddingWidth)
    }

    pub(crate) fn value(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct LeftWidth(usize);

impl LeftWidth {
    pub(crate) fn new(width: usize) -> Result<Self, WidthError> {
        // left must be at least 1
        minimum("left", 1, width).map(LeftWidth)
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct MiddleWidth(usize);

impl MiddleWidth {
    pub(crate) fn new(width: usize) -> Result<Self, WidthError> {
        // middle must be at least 2 (so we can hyphenate)
        minimum("middle", 2, width).map(MiddleWidth)
    }
}

pub(crate) fn minimum(column: &'static str, minimum: usize, provided: usize) -> Result<usize, WidthError> {
    if provided >= minimum {
        Ok(provided)
    } else {
        Err(WidthError::TooNarrow {
            column,
            minimum,
            provided,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct TotalWidth(pub usize);

// We'll target 95% of the total width, to ensure the renderer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_MIDDLE_WIDTH: usize = 17;

/// Renders a `left` label and a word-wrapped `middle` description into fixed columns.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    padding: PaddingWidth,
    left: LeftWidth,
    middle: MiddleWidth,
}

impl ColumnRenderer {
    /// Produce a renderer whose middle column takes up the rest of the total width.
    pub(crate) fn guided(
        indent: usize,
        padding: PaddingWidth,
        left: LeftWidth,
        total_width: TotalWidth,
    ) -> Result<Self, WidthError> {
        // We always have a left and a middle (and a padding between them).
        let non_middle = indent + left.0 + padding.0;
        let target_total_width = (total_width.0 as f64 * TARGET_TOTAL_FACTOR) as usize;

        let middle = if non_middle + MINIMUM_MIDDLE_WIDTH <= target_total_width {
            target_total_width - non_middle
        } else {
            MINIMUM_MIDDLE_WIDTH
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Columns {non_middle} against the target total {target_total_width}.  Selecting middle: {middle}.");
        }

        Ok(Self::new(padding, left, MiddleWidth::new(middle)?))
    }

    pub(crate) fn new(padding: PaddingWidth, left: LeftWidth, middle: MiddleWidth) -> Self {
        Self {
            padding,
            left,
            middle,
        }
    }

    pub(crate) fn render(&self, indent: usize, left: &str, middle: &str) -> Vec<String> {
        let padding = format!("{:width$}", "", width = self.padding.0);
        let left_column_width = self.left.0;
        // A label too wide for its column goes on a line of its own.
        let overflow = left.chars().count() > left_column_width;
        let mut out = Vec::default();

        if overflow {
            out.push(format!("{:indent$}{left}", ""));
        }

        for (i, part) in chunk(middle, self.middle.0).iter().enumerate() {
            let label = if i == 0 && !overflow { left } else { "" };
            out.push(format!(
                "{:indent$}{label:left_column_width$}{padding}{part}",
                ""
            ));
        }

        if out.is_empty() {
            out.push(format!("{:indent$}{left}", ""));
        }

        out
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
        let word_length = word.chars().count();

        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word_length + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;

    while characters.len() - left > width {
        let piece: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{piece}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(7, true)]
    fn padding_width(#[case] width: usize, #[case] ok: bool) {
        assert_eq!(PaddingWidth::new(width).is_ok(), ok);
        assert_eq!(LeftWidth::new(width).is_ok(), ok);
    }

    #[rstest]
    #[case(1, false)]
    #[case(2, true)]
    fn middle_width(#[case] width: usize, #[case] ok: bool) {
        assert_eq!(MiddleWidth::new(width).is_ok(), ok);
    }

    #[test]
    fn width_error() {
        assert_eq!(
            MiddleWidth::new(1).unwrap_err(),
            WidthError::TooNarrow {
                column: "middle",
                minimum: 2,
                provided: 1
            }
        );
    }

    #[rstest]
    #[case("", 10, vec![])]
    #[case("   ", 10, vec![])]
    #[case("one two", 10, vec!["one two"])]
    #[case("one two three", 10, vec!["one two", "three"])]
    #[case("  one   two  ", 10, vec!["one two"])]
    #[case("abcdefghij", 10, vec!["abcdefghij"])]
    #[case("abcdefghijk", 10, vec!["abcdefghi-", "jk"])]
    #[case("ab abcdefghijklmnopqrst", 10, vec!["ab", "abcdefghi-", "jklmnopqr-", "st"])]
    #[case("héllo wörld", 5, vec!["héllo", "wörld"])]
    #[case("abcd", 2, vec!["a-", "b-", "cd"])]
    fn chunk_paragraph(#[case] paragraph: &str, #[case] width: usize, #[case] expected: Vec<&str>) {
        assert_eq!(chunk(paragraph, width), expected);
    }

    #[test]
    fn column_renderer_simple() {
        let cr = ColumnRenderer::new(
            PaddingWidth::new(4).unwrap(),
            LeftWidth::new(5).unwrap(),
            MiddleWidth::new(23).unwrap(),
        );

        assert_eq!(cr.render(0, "abc", "something"), vec!["abc      something"]);
        assert_eq!(cr.render(0, "abc", "  something  "), vec!["abc      something"]);
        assert_eq!(
            cr.render(0, "abc12", "something pieces full"),
            vec!["abc12    something pieces full"]
        );
        assert_eq!(
            cr.render(0, "abc", "something pieces full more stuff"),
            vec!["abc      something pieces full", "         more stuff"]
        );
        assert_eq!(cr.render(0, "abc", ""), vec!["abc"]);
    }

    #[test]
    fn column_renderer_indent() {
        let cr = ColumnRenderer::new(
            PaddingWidth::new(1).unwrap(),
            LeftWidth::new(3).unwrap(),
            MiddleWidth::new(5).unwrap(),
        );

        assert_eq!(
            cr.render(2, "ab", "one two"),
            vec!["  ab  one", "      two"]
        );
    }

    #[test]
    fn column_renderer_overflow() {
        let cr = ColumnRenderer::new(
            PaddingWidth::new(2).unwrap(),
            LeftWidth::new(3).unwrap(),
            MiddleWidth::new(10).unwrap(),
        );

        assert_eq!(
            cr.render(1, "--verbose", "be loud"),
            vec![" --verbose", "      be loud"]
        );
        assert_eq!(cr.render(1, "--verbose", ""), vec![" --verbose"]);
    }

    #[rstest]
    #[case(100, 95 - 10)]
    #[case(20, MINIMUM_MIDDLE_WIDTH)]
    #[case(30, 28 - 10)]
    #[case(0, MINIMUM_MIDDLE_WIDTH)]
    fn column_renderer_guided(#[case] total: usize, #[case] expected_middle: usize) {
        let cr = ColumnRenderer::guided(
            1,
            PaddingWidth::new(3).unwrap(),
            LeftWidth::new(6).unwrap(),
            TotalWidth(total),
        )
        .unwrap();

        assert_eq!(cr.middle.0, expected_middle);
    }
}
