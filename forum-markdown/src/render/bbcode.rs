use forum_markdown_escape::StrWrite;

use super::element_renderer::{ElementRenderer, ListStyle};
use crate::{Alignment, HeadingLevel, LinkType};

/// Writes the lightweight bracket-tag dialect. Literal text is copied
/// through as is.
#[derive(Debug)]
pub struct BbcodeWriter<W: StrWrite> {
    pub writer: W,
    end_newline: bool,
    at_start: bool,
}

impl<W: StrWrite> BbcodeWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            end_newline: true,
            at_start: true,
        }
    }

    pub fn write(&mut self, s: &str) -> Result<(), W::Error> {
        self.writer.write_str(s)?;
        if !s.is_empty() {
            self.end_newline = s.ends_with('\n');
            self.at_start = false;
        }
        Ok(())
    }

    /// Writes `tag` on a fresh line.
    fn write_block(&mut self, tag: &str) -> Result<(), W::Error> {
        if !self.end_newline {
            self.write("\n")?;
        }
        self.write(tag)
    }
}

impl<W: StrWrite> ElementRenderer for BbcodeWriter<W> {
    type Error = W::Error;

    fn render_text(&mut self, text: &str) -> Result<(), Self::Error> {
        self.write(text)
    }

    fn render_code_inline(&mut self, text: &str) -> Result<(), Self::Error> {
        self.write("[icode]")?;
        self.write(text)?;
        self.write("[/icode]")
    }

    fn render_raw_html(&mut self, html: &str) -> Result<(), Self::Error> {
        self.write(html)
    }

    fn render_soft_break(&mut self) -> Result<(), Self::Error> {
        self.write("\n")
    }

    fn render_hard_break(&mut self) -> Result<(), Self::Error> {
        self.write("\n")
    }

    fn render_thematic_break(&mut self) -> Result<(), Self::Error> {
        self.write_block("[hr]\n")
    }

    fn render_paragraph_start(&mut self) -> Result<(), Self::Error> {
        if self.at_start {
            return Ok(());
        }
        // paragraphs are separated by an empty line
        self.write_block("\n")
    }

    fn render_paragraph_end(&mut self) -> Result<(), Self::Error> {
        self.write("\n")
    }

    fn render_heading_start(&mut self, level: HeadingLevel) -> Result<(), Self::Error> {
        self.write_block("[heading=")?;
        write!(&mut self.writer, "{}", level as usize)?;
        self.write("]")
    }

    fn render_heading_end(&mut self, _level: HeadingLevel) -> Result<(), Self::Error> {
        self.write("[/heading]\n")
    }

    fn render_blockquote_start(&mut self, _alternate: bool) -> Result<(), Self::Error> {
        self.write_block("[quote]\n")
    }

    fn render_blockquote_end(&mut self) -> Result<(), Self::Error> {
        self.write_block("[/quote]\n")
    }

    fn render_code_block_start(&mut self, language: Option<&str>) -> Result<(), Self::Error> {
        match language {
            Some(lang) => {
                self.write_block("[code=")?;
                self.write(lang)?;
                self.write("]\n")
            }
            None => self.write_block("[code]\n"),
        }
    }

    fn render_code_block_text(&mut self, text: &str) -> Result<(), Self::Error> {
        self.write(text)
    }

    fn render_code_block_end(&mut self) -> Result<(), Self::Error> {
        self.write_block("[/code]\n")
    }

    fn render_html_block(&mut self, html: &str) -> Result<(), Self::Error> {
        if !self.end_newline {
            self.write("\n")?;
        }
        self.write(html)
    }

    // `[list=1]` has no start number; lists always restart at one
    fn render_list_start(
        &mut self,
        ordered: bool,
        _start: u64,
        style: Option<ListStyle>,
    ) -> Result<(), Self::Error> {
        let tag = match (ordered, style) {
            (false, _) => "[list]\n",
            (true, Some(ListStyle::LowerAlpha)) => "[list=a]\n",
            (true, Some(ListStyle::LowerRoman)) => "[list=i]\n",
            (true, _) => "[list=1]\n",
        };
        self.write_block(tag)
    }

    fn render_list_end(&mut self, _ordered: bool) -> Result<(), Self::Error> {
        self.write_block("[/list]\n")
    }

    fn render_list_item_start(&mut self) -> Result<(), Self::Error> {
        self.write_block("[*]")
    }

    fn render_list_item_end(&mut self) -> Result<(), Self::Error> {
        if !self.end_newline {
            self.write("\n")?;
        }
        Ok(())
    }

    fn render_table_start(&mut self, _alignments: &[Alignment]) -> Result<(), Self::Error> {
        self.write_block("[table]\n")
    }

    fn render_table_end(&mut self) -> Result<(), Self::Error> {
        self.write("[/table]\n")
    }

    fn render_table_head_start(&mut self) -> Result<(), Self::Error> {
        self.write("[tr]")
    }

    fn render_table_head_end(&mut self) -> Result<(), Self::Error> {
        self.write("[/tr]\n")
    }

    fn render_table_row_start(&mut self) -> Result<(), Self::Error> {
        self.write("[tr]")
    }

    fn render_table_row_end(&mut self) -> Result<(), Self::Error> {
        self.write("[/tr]\n")
    }

    fn render_table_cell_start(
        &mut self,
        header: bool,
        _alignment: Alignment,
    ) -> Result<(), Self::Error> {
        self.write(if header { "[th]" } else { "[td]" })
    }

    fn render_table_cell_end(&mut self, header: bool) -> Result<(), Self::Error> {
        self.write(if header { "[/th]" } else { "[/td]" })
    }

    fn render_emphasis_start(&mut self) -> Result<(), Self::Error> {
        self.write("[i]")
    }

    fn render_emphasis_end(&mut self) -> Result<(), Self::Error> {
        self.write("[/i]")
    }

    fn render_strong_start(&mut self) -> Result<(), Self::Error> {
        self.write("[b]")
    }

    fn render_strong_end(&mut self) -> Result<(), Self::Error> {
        self.write("[/b]")
    }

    fn render_strikethrough_start(&mut self) -> Result<(), Self::Error> {
        self.write("[s]")
    }

    fn render_strikethrough_end(&mut self) -> Result<(), Self::Error> {
        self.write("[/s]")
    }

    fn render_link_start(
        &mut self,
        _link_type: LinkType,
        url: &str,
        _title: &str,
    ) -> Result<(), Self::Error> {
        self.write("[url=")?;
        self.write(url)?;
        self.write("]")
    }

    fn render_link_end(&mut self) -> Result<(), Self::Error> {
        self.write("[/url]")
    }

    fn render_autolink(&mut self, url: &str, email: bool) -> Result<(), Self::Error> {
        if email {
            self.write("[email]")?;
            self.write(url)?;
            self.write("[/email]")
        } else {
            self.write("[url]")?;
            self.write(url)?;
            self.write("[/url]")
        }
    }

    fn render_image(&mut self, url: &str, _title: &str, alt: &str) -> Result<(), Self::Error> {
        if alt.is_empty() {
            self.write("[img]")?;
        } else {
            self.write("[img alt=\"")?;
            self.write(alt)?;
            self.write("\"]")?;
        }
        self.write(url)?;
        self.write("[/img]")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn paragraphs_are_separated() {
        let mut w = BbcodeWriter::new(String::new());
        w.render_paragraph_start().unwrap();
        w.render_text("a < b").unwrap();
        w.render_paragraph_end().unwrap();
        w.render_paragraph_start().unwrap();
        w.render_text("c").unwrap();
        w.render_paragraph_end().unwrap();
        assert_eq!(w.writer, "a < b\n\nc\n");
    }

    #[test]
    fn ordered_list_styles() {
        let mut w = BbcodeWriter::new(String::new());
        w.render_list_start(true, 1, Some(ListStyle::LowerRoman))
            .unwrap();
        w.render_list_item_start().unwrap();
        w.render_text("x").unwrap();
        w.render_list_item_end().unwrap();
        w.render_list_end(true).unwrap();
        assert_eq!(w.writer, "[list=i]\n[*]x\n[/list]\n");
    }
}
