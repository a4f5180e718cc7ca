//! Rendering a [`Document`] to one of the output dialects.

mod bbcode;
mod element_renderer;
mod html;
mod walker;

pub use forum_markdown_escape::StrWrite;
use forum_markdown_escape::{FmtWriter, IoWriter};

pub use self::bbcode::BbcodeWriter;
pub use self::element_renderer::{ElementRenderer, ListStyle};
pub use self::html::HtmlWriter;
pub use self::walker::TreeWalker;
use crate::{Dialect, Document, Options};

/// Render `document` with `options` and push the markup to a `String`.
///
/// # Examples
///
/// ```
/// use forum_markdown::{render, Dialect, Options, Parser};
///
/// let options = Options::new(Dialect::Strict);
/// let document = Parser::new(options).parse_document("hello\n=====\n\n* alpha\n* beta\n", false);
///
/// let mut html_buf = String::new();
/// render::push_markup(&mut html_buf, &document, options);
///
/// assert_eq!(html_buf, r#"<h1>hello</h1>
/// <ul>
/// <li>alpha</li>
/// <li>beta</li>
/// </ul>
/// "#);
/// ```
pub fn push_markup(s: &mut String, document: &Document, options: Options) {
    match write_markup(s, document, options) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Render `document` with `options` and write the markup out to an I/O
/// stream.
///
/// **Note**: using this function with an unbuffered writer like a file or socket
/// will result in poor performance. Wrap these in a
/// [`BufWriter`](https://doc.rust-lang.org/std/io/struct.BufWriter.html) to
/// prevent unnecessary slowdowns.
pub fn write_markup_io<W>(
    writer: W,
    document: &Document,
    options: Options,
) -> std::io::Result<()>
where
    W: std::io::Write,
{
    write_markup(IoWriter(writer), document, options)
}

/// Render `document` with `options` into a Unicode-accepting buffer or
/// stream.
pub fn write_markup_fmt<W>(
    writer: W,
    document: &Document,
    options: Options,
) -> std::fmt::Result
where
    W: std::fmt::Write,
{
    write_markup(FmtWriter(writer), document, options)
}

fn write_markup<W: StrWrite>(
    writer: W,
    document: &Document,
    options: Options,
) -> Result<(), W::Error> {
    match options.dialect {
        Dialect::Strict => walk(HtmlWriter::strict(writer), document, options),
        Dialect::Lenient => walk(HtmlWriter::lenient(writer), document, options),
        Dialect::Lightweight => walk(BbcodeWriter::new(writer), document, options),
    }
}

fn walk<R: ElementRenderer>(
    renderer: R,
    document: &Document,
    options: Options,
) -> Result<(), R::Error> {
    TreeWalker::new(renderer, options.line_breaks).run(document)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{LineBreakMode, Parser};

    fn document(input: &str) -> Document {
        Parser::new(Options::default()).parse_document(input, false)
    }

    #[test]
    fn one_tree_many_dialects() {
        let doc = document("> **a** & <b>\n");
        assert_eq!(
            doc.render(Options::new(Dialect::Strict)),
            "<blockquote>\n<strong>a</strong> &amp; <b>\n</blockquote>\n"
        );
        assert_eq!(
            doc.render(Options::new(Dialect::Lightweight)),
            "[quote]\n[b]a[/b] & <b>\n[/quote]\n"
        );
    }

    #[test]
    fn io_and_fmt_writers_agree() {
        let doc = document("1. *x*\n2. `y`\n");
        let options = Options::new(Dialect::Lenient).with_line_breaks(LineBreakMode::all());
        let mut bytes = Vec::new();
        write_markup_io(&mut bytes, &doc, options).unwrap();
        let mut text = String::new();
        write_markup_fmt(&mut text, &doc, options).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), text);
        assert_eq!(
            text,
            "<ol>\n<li><em>x</em></li>\n<li><code>y</code></li>\n</ol>\n"
        );
    }
}
