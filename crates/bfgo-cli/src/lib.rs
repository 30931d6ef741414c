//! bfgo command-line front end.
//!
//! Reads a program from disk, translates it, and writes the Go source (or
//! just the body, or a JSON result) to its destination. All file I/O and
//! process exit handling live here; the compiler crates never touch either.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use bfgo_codegen::DEFAULT_MEMORY_CELLS;
use bfgo_compiler::{compile, compile_body, compile_to_result, CompileOptions};
use clap::{ArgAction, Parser};
use log::{debug, info, LevelFilter};

/// Default output file name, created in the current directory.
pub const DEFAULT_OUTPUT: &str = "out.go";

#[derive(Parser, Debug)]
#[command(name = "bfgo", version, about = "Translate brainfuck programs into Go source")]
pub struct Cli {
    /// Program to translate
    #[arg(long = "in", value_name = "PATH")]
    pub input: PathBuf,

    /// Number of memory cells to allocate
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MEMORY_CELLS, value_parser = parse_memory)]
    pub mem: usize,

    /// Where to write the generated source [default: ./out.go]
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Template file replacing the built-in Go wrapper
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Write only the generated statement body
    #[arg(long, conflicts_with = "json")]
    pub body_only: bool,

    /// Print the structured compile result as JSON instead of writing a file
    #[arg(long)]
    pub json: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_memory(raw: &str) -> std::result::Result<usize, String> {
    let cells: usize = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a whole number"))?;
    if cells == 0 {
        return Err("memory size must be at least 1".into());
    }
    Ok(cells)
}

/// Install `env_logger`; `RUST_LOG` overrides the verbosity flag.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Entry point for the binary.
pub fn run(cli: &Cli) -> Result<()> {
    run_with(cli, &mut io::stdout().lock())
}

/// Like [`run`], with JSON output going to `stdout`.
pub fn run_with(cli: &Cli, stdout: &mut impl Write) -> Result<()> {
    let bytes = fs::read(&cli.input)
        .with_context(|| format!("reading input file {}", cli.input.display()))?;
    // Invalid UTF-8 (e.g. Latin-1 comments) becomes U+FFFD commentary.
    let source = String::from_utf8_lossy(&bytes);
    let filename = cli.input.display().to_string();
    let options = options_for(cli)?;
    debug!("compiling {filename} with {} memory cells", options.memory_cells);

    if cli.json {
        let result = compile_to_result(&source, &filename, &options);
        let json = result.to_json().context("serialising compile result")?;
        writeln!(stdout, "{json}")?;
        if !result.success {
            bail!("compilation of {filename} failed");
        }
        return Ok(());
    }

    let generated = if cli.body_only {
        compile_body(&source, &filename)?
    } else {
        compile(&source, &filename, &options)?
    };

    let out = output_path(cli)?;
    write_output(&out, &generated)?;
    info!("wrote {} ({} bytes)", out.display(), generated.len());
    Ok(())
}

fn options_for(cli: &Cli) -> Result<CompileOptions> {
    let mut options = CompileOptions::default().with_memory_cells(cli.mem);
    if let Some(path) = &cli.template {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading template {}", path.display()))?;
        options = options.with_template(text);
    }
    Ok(options)
}

fn output_path(cli: &Cli) -> Result<PathBuf> {
    match &cli.out {
        Some(path) => Ok(path.clone()),
        None => {
            let cwd = std::env::current_dir().context("resolving current directory")?;
            Ok(cwd.join(DEFAULT_OUTPUT))
        }
    }
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("writing output file {}", path.display()))
}
