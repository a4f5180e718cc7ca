use crate::{Alignment, HeadingLevel, LinkType};

/// Bullet or numbering style of a nested list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListStyle {
    Circle,
    Square,
    Disc,
    LowerAlpha,
    LowerRoman,
    Decimal,
}

impl ListStyle {
    /// Style of a list nested inside `depth` other lists. Top-level lists
    /// keep the dialect's default style.
    pub fn for_depth(ordered: bool, depth: usize) -> Option<ListStyle> {
        if depth == 0 {
            return None;
        }
        let rotation = if ordered {
            [ListStyle::LowerAlpha, ListStyle::LowerRoman, ListStyle::Decimal]
        } else {
            [ListStyle::Circle, ListStyle::Square, ListStyle::Disc]
        };
        Some(rotation[(depth - 1) % 3])
    }

    pub fn as_css(self) -> &'static str {
        match self {
            ListStyle::Circle => "circle",
            ListStyle::Square => "square",
            ListStyle::Disc => "disc",
            ListStyle::LowerAlpha => "lower-alpha",
            ListStyle::LowerRoman => "lower-roman",
            ListStyle::Decimal => "decimal",
        }
    }
}

/// The markup a dialect emits for each element of the tree.
///
/// Text arrives unescaped; each implementation escapes it the way its
/// dialect requires.
pub trait ElementRenderer {
    type Error;

    // Leaves
    fn render_text(&mut self, text: &str) -> Result<(), Self::Error>;
    fn render_code_inline(&mut self, text: &str) -> Result<(), Self::Error>;
    fn render_raw_html(&mut self, html: &str) -> Result<(), Self::Error>;
    fn render_soft_break(&mut self) -> Result<(), Self::Error>;
    fn render_hard_break(&mut self) -> Result<(), Self::Error>;
    fn render_thematic_break(&mut self) -> Result<(), Self::Error>;

    // Blocks
    fn render_paragraph_start(&mut self) -> Result<(), Self::Error>;
    fn render_paragraph_end(&mut self) -> Result<(), Self::Error>;
    fn render_heading_start(&mut self, level: HeadingLevel) -> Result<(), Self::Error>;
    fn render_heading_end(&mut self, level: HeadingLevel) -> Result<(), Self::Error>;
    /// `alternate` is set on every other nesting level.
    fn render_blockquote_start(&mut self, alternate: bool) -> Result<(), Self::Error>;
    fn render_blockquote_end(&mut self) -> Result<(), Self::Error>;
    fn render_code_block_start(&mut self, language: Option<&str>) -> Result<(), Self::Error>;
    fn render_code_block_text(&mut self, text: &str) -> Result<(), Self::Error>;
    fn render_code_block_end(&mut self) -> Result<(), Self::Error>;
    fn render_html_block(&mut self, html: &str) -> Result<(), Self::Error>;

    // Lists
    fn render_list_start(
        &mut self,
        ordered: bool,
        start: u64,
        style: Option<ListStyle>,
    ) -> Result<(), Self::Error>;
    fn render_list_end(&mut self, ordered: bool) -> Result<(), Self::Error>;
    fn render_list_item_start(&mut self) -> Result<(), Self::Error>;
    fn render_list_item_end(&mut self) -> Result<(), Self::Error>;

    // Tables
    fn render_table_start(&mut self, alignments: &[Alignment]) -> Result<(), Self::Error>;
    fn render_table_end(&mut self) -> Result<(), Self::Error>;
    fn render_table_head_start(&mut self) -> Result<(), Self::Error>;
    fn render_table_head_end(&mut self) -> Result<(), Self::Error>;
    fn render_table_row_start(&mut self) -> Result<(), Self::Error>;
    fn render_table_row_end(&mut self) -> Result<(), Self::Error>;
    fn render_table_cell_start(
        &mut self,
        header: bool,
        alignment: Alignment,
    ) -> Result<(), Self::Error>;
    fn render_table_cell_end(&mut self, header: bool) -> Result<(), Self::Error>;

    // Inline containers
    fn render_emphasis_start(&mut self) -> Result<(), Self::Error>;
    fn render_emphasis_end(&mut self) -> Result<(), Self::Error>;
    fn render_strong_start(&mut self) -> Result<(), Self::Error>;
    fn render_strong_end(&mut self) -> Result<(), Self::Error>;
    fn render_strikethrough_start(&mut self) -> Result<(), Self::Error>;
    fn render_strikethrough_end(&mut self) -> Result<(), Self::Error>;
    fn render_link_start(
        &mut self,
        link_type: LinkType,
        url: &str,
        title: &str,
    ) -> Result<(), Self::Error>;
    fn render_link_end(&mut self) -> Result<(), Self::Error>;
    fn render_autolink(&mut self, url: &str, email: bool) -> Result<(), Self::Error>;
    fn render_image(&mut self, url: &str, title: &str, alt: &str) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn list_styles_rotate() {
        assert_eq!(ListStyle::for_depth(false, 0), None);
        assert_eq!(ListStyle::for_depth(false, 1), Some(ListStyle::Circle));
        assert_eq!(ListStyle::for_depth(false, 3), Some(ListStyle::Disc));
        assert_eq!(ListStyle::for_depth(false, 4), Some(ListStyle::Circle));
        assert_eq!(ListStyle::for_depth(true, 2), Some(ListStyle::LowerRoman));
    }
}
