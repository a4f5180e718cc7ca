use forum_markdown_escape::{escape_href, escape_html, escape_html_body_text, StrWrite};

use super::element_renderer::{ElementRenderer, ListStyle};
use crate::{Alignment, HeadingLevel, LinkType};

/// Writes the strict and lenient HTML dialects. They differ only in how
/// void elements are closed.
#[derive(Debug)]
pub struct HtmlWriter<W: StrWrite> {
    pub writer: W,
    end_newline: bool,
    void_end: &'static str,
}

impl<W: StrWrite> HtmlWriter<W> {
    /// Closes void elements as `<br />`.
    pub fn strict(writer: W) -> Self {
        Self::new(writer, " />")
    }

    /// Closes void elements as `<br>`.
    pub fn lenient(writer: W) -> Self {
        Self::new(writer, ">")
    }

    fn new(writer: W, void_end: &'static str) -> Self {
        Self {
            writer,
            end_newline: true,
            void_end,
        }
    }

    pub fn write(&mut self, s: &str) -> Result<(), W::Error> {
        self.writer.write_str(s)?;
        if !s.is_empty() {
            self.end_newline = s.ends_with('\n');
        }
        Ok(())
    }

    pub fn write_newline(&mut self) -> Result<(), W::Error> {
        self.end_newline = true;
        self.writer.write_str("\n")
    }

    /// Writes `tag` on a fresh line.
    fn write_block(&mut self, tag: &str) -> Result<(), W::Error> {
        if !self.end_newline {
            self.write_newline()?;
        }
        self.write(tag)
    }
}

impl<W: StrWrite> ElementRenderer for HtmlWriter<W> {
    type Error = W::Error;

    fn render_text(&mut self, text: &str) -> Result<(), Self::Error> {
        escape_html_body_text(&mut self.writer, text)?;
        if !text.is_empty() {
            self.end_newline = text.ends_with('\n');
        }
        Ok(())
    }

    fn render_code_inline(&mut self, text: &str) -> Result<(), Self::Error> {
        self.write("<code>")?;
        escape_html_body_text(&mut self.writer, text)?;
        self.write("</code>")
    }

    fn render_raw_html(&mut self, html: &str) -> Result<(), Self::Error> {
        self.write(html)
    }

    fn render_soft_break(&mut self) -> Result<(), Self::Error> {
        self.write_newline()
    }

    fn render_hard_break(&mut self) -> Result<(), Self::Error> {
        self.write("<br")?;
        self.write(self.void_end)?;
        self.write_newline()
    }

    fn render_thematic_break(&mut self) -> Result<(), Self::Error> {
        self.write_block("<hr")?;
        self.write(self.void_end)?;
        self.write_newline()
    }

    fn render_paragraph_start(&mut self) -> Result<(), Self::Error> {
        self.write_block("<p>")
    }

    fn render_paragraph_end(&mut self) -> Result<(), Self::Error> {
        self.write("</p>\n")
    }

    fn render_heading_start(&mut self, level: HeadingLevel) -> Result<(), Self::Error> {
        self.write_block("<")?;
        write!(&mut self.writer, "{}", level)?;
        self.write(">")
    }

    fn render_heading_end(&mut self, level: HeadingLevel) -> Result<(), Self::Error> {
        self.write("</")?;
        write!(&mut self.writer, "{}", level)?;
        self.write(">\n")
    }

    fn render_blockquote_start(&mut self, alternate: bool) -> Result<(), Self::Error> {
        if alternate {
            self.write_block("<blockquote class=\"alternate\">\n")
        } else {
            self.write_block("<blockquote>\n")
        }
    }

    fn render_blockquote_end(&mut self) -> Result<(), Self::Error> {
        if !self.end_newline {
            self.write_newline()?;
        }
        self.write("</blockquote>\n")
    }

    fn render_code_block_start(&mut self, language: Option<&str>) -> Result<(), Self::Error> {
        match language {
            Some(lang) => {
                self.write_block("<pre><code class=\"language-")?;
                escape_html(&mut self.writer, lang)?;
                self.write("\">")
            }
            None => self.write_block("<pre><code>"),
        }
    }

    fn render_code_block_text(&mut self, text: &str) -> Result<(), Self::Error> {
        escape_html_body_text(&mut self.writer, text)
    }

    fn render_code_block_end(&mut self) -> Result<(), Self::Error> {
        self.write("</code></pre>\n")
    }

    fn render_html_block(&mut self, html: &str) -> Result<(), Self::Error> {
        if !self.end_newline {
            self.write_newline()?;
        }
        self.write(html)
    }

    fn render_list_start(
        &mut self,
        ordered: bool,
        start: u64,
        style: Option<ListStyle>,
    ) -> Result<(), Self::Error> {
        self.write_block(if ordered { "<ol" } else { "<ul" })?;
        if ordered && start != 1 {
            write!(&mut self.writer, " start=\"{}\"", start)?;
        }
        if let Some(style) = style {
            write!(
                &mut self.writer,
                " style=\"list-style-type: {}\"",
                style.as_css()
            )?;
        }
        self.write(">\n")
    }

    fn render_list_end(&mut self, ordered: bool) -> Result<(), Self::Error> {
        if ordered {
            self.write("</ol>\n")
        } else {
            self.write("</ul>\n")
        }
    }

    fn render_list_item_start(&mut self) -> Result<(), Self::Error> {
        self.write_block("<li>")
    }

    fn render_list_item_end(&mut self) -> Result<(), Self::Error> {
        self.write("</li>\n")
    }

    fn render_table_start(&mut self, _alignments: &[Alignment]) -> Result<(), Self::Error> {
        self.write_block("<table>")
    }

    fn render_table_end(&mut self) -> Result<(), Self::Error> {
        self.write("</tbody></table>\n")
    }

    fn render_table_head_start(&mut self) -> Result<(), Self::Error> {
        self.write("<thead><tr>")
    }

    fn render_table_head_end(&mut self) -> Result<(), Self::Error> {
        self.write("</tr></thead><tbody>\n")
    }

    fn render_table_row_start(&mut self) -> Result<(), Self::Error> {
        self.write("<tr>")
    }

    fn render_table_row_end(&mut self) -> Result<(), Self::Error> {
        self.write("</tr>\n")
    }

    fn render_table_cell_start(
        &mut self,
        header: bool,
        alignment: Alignment,
    ) -> Result<(), Self::Error> {
        self.write(if header { "<th" } else { "<td" })?;
        match alignment {
            Alignment::Left => self.write(" style=\"text-align: left\">"),
            Alignment::Center => self.write(" style=\"text-align: center\">"),
            Alignment::Right => self.write(" style=\"text-align: right\">"),
            Alignment::None => self.write(">"),
        }
    }

    fn render_table_cell_end(&mut self, header: bool) -> Result<(), Self::Error> {
        self.write(if header { "</th>" } else { "</td>" })
    }

    fn render_emphasis_start(&mut self) -> Result<(), Self::Error> {
        self.write("<em>")
    }

    fn render_emphasis_end(&mut self) -> Result<(), Self::Error> {
        self.write("</em>")
    }

    fn render_strong_start(&mut self) -> Result<(), Self::Error> {
        self.write("<strong>")
    }

    fn render_strong_end(&mut self) -> Result<(), Self::Error> {
        self.write("</strong>")
    }

    fn render_strikethrough_start(&mut self) -> Result<(), Self::Error> {
        self.write("<del>")
    }

    fn render_strikethrough_end(&mut self) -> Result<(), Self::Error> {
        self.write("</del>")
    }

    fn render_link_start(
        &mut self,
        _link_type: LinkType,
        url: &str,
        title: &str,
    ) -> Result<(), Self::Error> {
        self.write("<a href=\"")?;
        escape_href(&mut self.writer, url)?;
        if !title.is_empty() {
            self.write("\" title=\"")?;
            escape_html(&mut self.writer, title)?;
        }
        self.write("\">")
    }

    fn render_link_end(&mut self) -> Result<(), Self::Error> {
        self.write("</a>")
    }

    fn render_autolink(&mut self, url: &str, email: bool) -> Result<(), Self::Error> {
        if email {
            self.write("<a href=\"mailto:")?;
        } else {
            self.write("<a href=\"")?;
        }
        escape_href(&mut self.writer, url)?;
        self.write("\">")?;
        escape_html_body_text(&mut self.writer, url)?;
        self.write("</a>")
    }

    fn render_image(&mut self, url: &str, title: &str, alt: &str) -> Result<(), Self::Error> {
        self.write("<img src=\"")?;
        escape_href(&mut self.writer, url)?;
        self.write("\" alt=\"")?;
        escape_html(&mut self.writer, alt)?;
        if !title.is_empty() {
            self.write("\" title=\"")?;
            escape_html(&mut self.writer, title)?;
        }
        self.write("\"")?;
        self.write(self.void_end)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn void_elements_follow_dialect() {
        let mut strict = HtmlWriter::strict(String::new());
        strict.render_hard_break().unwrap();
        strict.render_thematic_break().unwrap();
        assert_eq!(strict.writer, "<br />\n<hr />\n");

        let mut lenient = HtmlWriter::lenient(String::new());
        lenient.render_text("a").unwrap();
        lenient.render_thematic_break().unwrap();
        lenient.render_image("x.png", "", "pic").unwrap();
        assert_eq!(lenient.writer, "a\n<hr>\n<img src=\"x.png\" alt=\"pic\">");
    }

    #[test]
    fn nested_list_style() {
        let mut w = HtmlWriter::strict(String::new());
        w.render_list_start(true, 3, Some(ListStyle::LowerAlpha))
            .unwrap();
        w.render_list_end(true).unwrap();
        assert_eq!(
            w.writer,
            "<ol start=\"3\" style=\"list-style-type: lower-alpha\">\n</ol>\n"
        );
    }

    #[test]
    fn email_autolink() {
        let mut w = HtmlWriter::strict(String::new());
        w.render_autolink("a@b.c", true).unwrap();
        assert_eq!(w.writer, "<a href=\"mailto:a@b.c\">a@b.c</a>");
    }
}
