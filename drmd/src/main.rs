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

//! Command line tool that converts drmd text to HTML.

#![forbid(unsafe_code)]

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use log::{debug, info};
use thiserror::Error;

/// Appended to the output unless another stylesheet is asked for.
const STYLESHEET: &[u8] = include_bytes!("style.css");

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Convert(#[from] drmd::Error),
    #[error("unable to read '{path}': {source}")]
    Input { path: String, source: io::Error },
    #[error("unable to write '{path}': {source}")]
    Output { path: String, source: io::Error },
    #[error("unable to read stylesheet '{path}': {source}")]
    Stylesheet { path: String, source: io::Error },
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Convert(err) => u8::try_from(err.code()).unwrap_or(1),
            CliError::Input { .. } => 2,
            CliError::Output { .. } => 3,
            CliError::Stylesheet { .. } => 4,
        }
    }
}

fn read_input(path: Option<&String>) -> Result<Vec<u8>, CliError> {
    let mut input = Vec::new();
    let result = match path {
        Some(path) => fs::File::open(path).and_then(|mut f| f.read_to_end(&mut input)),
        None => io::stdin().lock().read_to_end(&mut input),
    };
    result.map_err(|source| CliError::Input {
        path: path.map_or_else(|| "<stdin>".to_string(), String::clone),
        source,
    })?;
    Ok(input)
}

fn write_output(path: Option<String>, bytes: &[u8]) -> Result<(), CliError> {
    match path {
        Some(path) => fs::write(&path, bytes).map_err(|source| CliError::Output { path, source }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(bytes)
                .and_then(|()| stdout.flush())
                .map_err(|source| CliError::Output {
                    path: "<stdout>".to_string(),
                    source,
                })
        }
    }
}

fn append_stylesheet(matches: &getopts::Matches, out: &mut Vec<u8>) -> Result<(), CliError> {
    if matches.opt_present("no-stylesheet") {
        return Ok(());
    }
    match matches.opt_str("stylesheet") {
        Some(path) => {
            let css = fs::read(&path).map_err(|source| CliError::Stylesheet { path, source })?;
            out.extend_from_slice(&css);
        }
        None => {
            out.push(b'\n');
            out.extend_from_slice(STYLESHEET);
            out.push(b'\n');
        }
    }
    Ok(())
}

fn run(matches: &getopts::Matches) -> Result<(), CliError> {
    let input = read_input(matches.free.first())?;
    info!("read {} bytes of input", input.len());

    let doc = drmd::parse(&input)?;
    debug!("parsed {} nodes", doc.node_count());
    if matches.opt_present("tree") {
        return write_output(matches.opt_str("output"), format!("{:?}", doc).as_bytes());
    }

    let mut out = Vec::new();
    drmd::html::push_html(&mut out, &doc)?;
    info!("rendered {} bytes of html", out.len());
    if matches.opt_present("dry-run") {
        println!("{} nodes, {} bytes", doc.node_count(), out.len());
        return Ok(());
    }

    append_stylesheet(matches, &mut out)?;
    write_output(matches.opt_str("output"), &out)
}

fn brief(program: &str) -> String {
    format!(
        "Usage: {} [options] [FILE]\n\n{}",
        program, "Reads drmd text from FILE or standard input and emits HTML.",
    )
}

pub fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<_> = env::args().collect();
    let program = args.first().map_or("drmd", String::as_str);
    let mut opts = getopts::Options::new();
    opts.optflag("h", "help", "this help message");
    opts.optflag("V", "version", "print version information and exit");
    opts.optopt("o", "output", "write to FILE instead of standard output", "FILE");
    opts.optopt(
        "s",
        "stylesheet",
        "append FILE instead of the built-in stylesheet",
        "FILE",
    );
    opts.optflag("", "no-stylesheet", "don't append a stylesheet");
    opts.optflag("t", "tree", "print the document tree instead of rendering");
    opts.optflag("d", "dry-run", "dry run, only print sizes");

    let matches = match opts.parse(args.iter().skip(1)) {
        Ok(m) => m,
        Err(f) => {
            eprintln!("{}\n{}", f, opts.usage(&brief(program)));
            return ExitCode::from(1);
        }
    };
    if matches.opt_present("help") {
        println!("{}", opts.usage(&brief(program)));
        return ExitCode::SUCCESS;
    }
    if matches.opt_present("version") {
        println!("drmd version {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }
    if matches.free.len() > 1 {
        eprintln!("expected at most one input file\n{}", opts.usage(&brief(program)));
        return ExitCode::from(1);
    }

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {}", program, err);
            ExitCode::from(err.exit_code())
        }
    }
}
