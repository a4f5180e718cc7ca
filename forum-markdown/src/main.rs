// Copyright 2015 Google Inc. All rights reserved.
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! Command line tool to render forum Markdown.

#![forbid(unsafe_code)]

use forum_markdown::{render, Dialect, Error, LineBreakMode, Options, Parser};

use std::env;
use std::fs::File;
use std::io::{self, Read, Write};
use std::process;

fn brief(program: &str) -> String {
    format!(
        "Usage: {} [options] [FILE...]\n\n{}",
        program, "Reads markdown from files or standard input and emits forum markup.",
    )
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>, Error> {
    let mut bytes = Vec::new();
    match path {
        Some(path) => File::open(path)?.read_to_end(&mut bytes)?,
        None => io::stdin().lock().read_to_end(&mut bytes)?,
    };
    Ok(bytes)
}

fn render_one(
    parser: &mut Parser,
    bytes: &[u8],
    already_rendered: bool,
    print_tree: bool,
) -> Result<(), Error> {
    let text = std::str::from_utf8(bytes)?;
    let document = parser.parse_document(text, already_rendered);
    let stdout = io::stdout();
    let mut buffer = io::BufWriter::with_capacity(1024 * 1024, stdout.lock());
    if print_tree {
        writeln!(buffer, "{:#?}", document)?;
    } else {
        render::write_markup_io(&mut buffer, &document, parser.options())?;
    }
    parser.recycle(document);
    buffer.flush()?;
    Ok(())
}

pub fn main() {
    env_logger::init();

    let args: Vec<_> = env::args().collect();
    let mut opts = getopts::Options::new();
    opts.optflag("h", "help", "this help message");
    opts.optopt(
        "d",
        "dialect",
        "output dialect (default: strict)",
        "strict|lenient|lightweight",
    );
    opts.optflag(
        "b",
        "convert-blank-runs",
        "render runs of blank lines as line breaks",
    );
    opts.optflag(
        "m",
        "convert-mid-paragraph",
        "render every line break inside a paragraph as a hard break",
    );
    opts.optflag(
        "r",
        "already-rendered",
        "input went through an earlier rendering pass",
    );
    opts.optflag("t", "tree", "print the document tree instead of rendering");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(f) => {
            eprintln!("{}\n{}", f, opts.usage(&brief(&args[0])));
            process::exit(1);
        }
    };
    if matches.opt_present("help") {
        println!("{}", opts.usage(&brief(&args[0])));
        return;
    }

    let dialect = match matches.opt_str("dialect").as_deref() {
        None | Some("strict") => Dialect::Strict,
        Some("lenient") => Dialect::Lenient,
        Some("lightweight") => Dialect::Lightweight,
        Some(other) => {
            eprintln!(
                "unknown dialect `{}`\n{}",
                other,
                opts.usage(&brief(&args[0]))
            );
            process::exit(1);
        }
    };
    let mut line_breaks = LineBreakMode::empty();
    if matches.opt_present("convert-blank-runs") {
        line_breaks.insert(LineBreakMode::CONVERT_BLANK_LINE_RUNS);
    }
    if matches.opt_present("convert-mid-paragraph") {
        line_breaks.insert(LineBreakMode::CONVERT_MID_PARAGRAPH_BREAKS);
    }
    let options = Options::new(dialect).with_line_breaks(line_breaks);
    let already_rendered = matches.opt_present("already-rendered");
    let print_tree = matches.opt_present("tree");

    let mut parser = Parser::new(options);
    let paths: Vec<Option<&str>> = if matches.free.is_empty() {
        vec![None]
    } else {
        matches.free.iter().map(|p| Some(p.as_str())).collect()
    };
    let mut failed = false;
    for path in paths {
        let result = read_input(path)
            .and_then(|bytes| render_one(&mut parser, &bytes, already_rendered, print_tree));
        if let Err(err) = result {
            eprintln!("{}: {}", path.unwrap_or("<stdin>"), err);
            failed = true;
        }
    }
    if failed {
        process::exit(1);
    }
}
