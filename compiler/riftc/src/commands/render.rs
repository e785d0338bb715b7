//! The `render` command: compile templates to HTML (or a VDOM dump).
//!
//! Every file is its own compile unit. Units run in parallel on the rayon
//! pool; output and diagnostics are reported in argument order.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rift_diagnostic::emitter::DiagnosticEmitter;
use rift_diagnostic::Diagnostic;
use rift_ir::Source;
use rift_vdom::{RenderMode, RenderSettings};
use rustc_hash::FxHashMap;
use serde_json::Value;
use tracing::debug;

use super::{read_file, stderr_emitter};
use crate::{compile, evaluate_source};

/// What `render` writes for each unit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Emit {
    #[default]
    Html,
    /// The evaluated tree as JSON.
    Vdom,
}

impl Emit {
    /// Parse from command line string.
    pub fn from_flag(s: &str) -> Option<Self> {
        match s {
            "html" => Some(Emit::Html),
            "vdom" | "json" => Some(Emit::Vdom),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Emit::Html => "html",
            Emit::Vdom => "json",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub files: Vec<String>,
    /// JSON data file; `None` renders against an empty object.
    pub data: Option<String>,
    pub settings: RenderSettings,
    /// Directory to write `<stem>.<ext>` files into, instead of stdout.
    pub out_dir: Option<PathBuf>,
    pub emit: Emit,
}

/// Parse the arguments following `riftc render`.
pub fn parse_render_args(args: &[String]) -> Result<RenderOptions, String> {
    let mut options = RenderOptions::default();

    for arg in args {
        if let Some(path) = arg.strip_prefix("--data=") {
            options.data = Some(path.to_string());
        } else if let Some(mode) = arg.strip_prefix("--mode=") {
            options.settings.mode = mode.parse::<RenderMode>().map_err(|e| e.to_string())?;
        } else if let Some(indent) = arg.strip_prefix("--indent=") {
            options.settings.indent = indent
                .parse()
                .map_err(|_| format!("invalid indent '{indent}', expected a number of spaces"))?;
        } else if arg == "--no-doctype" {
            options.settings.implicit_doctype = false;
        } else if let Some(dir) = arg.strip_prefix("--out=") {
            options.out_dir = Some(PathBuf::from(dir));
        } else if let Some(emit) = arg.strip_prefix("--emit=") {
            options.emit = Emit::from_flag(emit)
                .ok_or_else(|| format!("unknown emit type '{emit}', options: html, vdom"))?;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else {
            options.files.push(arg.clone());
        }
    }

    if options.files.is_empty() {
        return Err("missing template path".to_string());
    }
    Ok(options)
}

/// Compile every file in `options` and write the results.
///
/// Exits 1 after reporting if any unit failed.
pub fn render_files(options: &RenderOptions) {
    if let Some(dir) = &options.out_dir {
        if let Some(collision) = find_output_collision(&options.files, dir, options.emit) {
            eprintln!(
                "error: '{}' and '{}' would both be written to '{}'",
                collision.first,
                collision.second,
                collision.path.display()
            );
            std::process::exit(1);
        }
    }

    let data = load_data(options.data.as_deref());
    let sources: Vec<Source> = options
        .files
        .iter()
        .map(|path| Source::new(path.as_str(), read_file(path)))
        .collect();

    debug!(units = sources.len(), "render");
    let results: Vec<Result<String, Diagnostic>> = sources
        .par_iter()
        .map(|source| render_unit(source, &data, options))
        .collect();

    if let Some(dir) = &options.out_dir {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("error: cannot create output directory '{}': {e}", dir.display());
            std::process::exit(1);
        }
    }

    let mut errors = Vec::new();
    for (source, result) in sources.into_iter().zip(results) {
        match result {
            Ok(output) => write_output(source.name(), &output, options),
            Err(diagnostic) => errors.push((source, diagnostic)),
        }
    }

    let count = errors.len();
    let mut errors = errors.into_iter();
    let Some((source, diagnostic)) = errors.next() else {
        return;
    };
    let mut emitter = stderr_emitter(source);
    emitter.emit(&diagnostic);
    for (source, diagnostic) in errors {
        emitter.set_source(source);
        emitter.emit(&diagnostic);
    }
    emitter.emit_summary(count, 0);
    emitter.flush();
    std::process::exit(1);
}

fn render_unit(source: &Source, data: &Value, options: &RenderOptions) -> Result<String, Diagnostic> {
    match options.emit {
        Emit::Html => compile(source, data, &options.settings).map(|compiled| compiled.output),
        Emit::Vdom => {
            let evaluated = evaluate_source(source, data)?;
            match serde_json::to_string_pretty(&evaluated.document) {
                Ok(json) => Ok(json),
                Err(e) => {
                    eprintln!("error: cannot serialize tree for '{}': {e}", source.name());
                    std::process::exit(1);
                }
            }
        }
    }
}

fn load_data(path: Option<&str>) -> Value {
    let Some(path) = path else {
        return Value::Object(serde_json::Map::new());
    };
    match serde_json::from_str(&read_file(path)) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("error: invalid JSON in '{path}': {e}");
            std::process::exit(1);
        }
    }
}

/// `<dir>/<stem>.<ext>` for a template path.
pub(crate) fn output_path(dir: &Path, template: &str, emit: Emit) -> PathBuf {
    let stem = Path::new(template)
        .file_stem()
        .map_or_else(|| "out".into(), |s| s.to_string_lossy());
    dir.join(format!("{stem}.{}", emit.extension()))
}

/// Two templates mapping to the same file under `--out`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct OutputCollision<'a> {
    pub first: &'a str,
    pub second: &'a str,
    pub path: PathBuf,
}

/// First pair of `files` whose output paths in `dir` coincide.
pub(crate) fn find_output_collision<'a>(
    files: &'a [String],
    dir: &Path,
    emit: Emit,
) -> Option<OutputCollision<'a>> {
    let mut seen: FxHashMap<PathBuf, &'a str> = FxHashMap::default();
    for file in files {
        let path = output_path(dir, file, emit);
        if let Some(&first) = seen.get(&path) {
            return Some(OutputCollision {
                first,
                second: file,
                path,
            });
        }
        seen.insert(path, file);
    }
    None
}

fn write_output(name: &str, output: &str, options: &RenderOptions) {
    let Some(dir) = &options.out_dir else {
        if output.ends_with('\n') {
            print!("{output}");
        } else {
            println!("{output}");
        }
        return;
    };

    let path = output_path(dir, name, options.emit);
    if let Err(e) = std::fs::write(&path, output) {
        eprintln!("error: cannot write '{}': {e}", path.display());
        std::process::exit(1);
    }
    debug!(path = %path.display(), "wrote");
}
