use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glob::glob;
use log::{LevelFilter, debug, info};
use m32scene_core::MixerScene;

mod summary;

#[derive(Parser, Debug)]
#[command(name = "m32scene")]
#[command(version)]
#[command(
    about = "Convert M32 scene files (.scn) to and from JSON.",
    long_about = None,
    after_help = "Examples:\n  m32scene convert show.scn -o show.json --pretty\n  m32scene convert show.json -o show.scn\n  m32scene inspect show.scn --pretty"
)]
struct Cli {
    /// Log decoder decisions (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a scene between .scn and JSON.
    Convert {
        /// Input scene (.scn or .json); a glob must match exactly one file
        input: PathBuf,

        /// Output path; the format follows the extension unless --to is given
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Input format (default: from the input extension)
        #[arg(long, value_enum)]
        from: Option<Format>,

        /// Output format (default: from the output extension)
        #[arg(long, value_enum)]
        to: Option<Format>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
    /// Print a JSON summary of a scene to stdout.
    Inspect {
        /// Input scene (.scn or .json)
        input: PathBuf,

        /// Input format (default: from the input extension)
        #[arg(long, value_enum)]
        from: Option<Format>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Scn,
    Json,
}

impl Format {
    /// JSON only for `.json`; everything else is read as scene text.
    fn for_input(path: &Path) -> Self {
        if extension(path) == "json" {
            Format::Json
        } else {
            Format::Scn
        }
    }

    /// Scene text only for `.scn`; everything else is written as JSON.
    fn for_output(path: &Path) -> Self {
        if extension(path) == "scn" {
            Format::Scn
        } else {
            Format::Json
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            from,
            to,
            pretty,
            quiet,
        } => cmd_convert(input, output, from, to, pretty, quiet),
        Commands::Inspect {
            input,
            from,
            pretty,
        } => cmd_inspect(input, from, pretty),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

fn cmd_convert(
    input: PathBuf,
    output: PathBuf,
    from: Option<Format>,
    to: Option<Format>,
    pretty: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let input = resolve_input_path(&input)?;
    validate_input_file(&input)?;
    ensure_distinct_paths(&input, &output)?;

    let from = from.unwrap_or_else(|| Format::for_input(&input));
    let to = to.unwrap_or_else(|| Format::for_output(&output));
    debug!("converting {:?} -> {:?}", from, to);

    let scene = read_scene(&input, from)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    match to {
        Format::Scn => m32scene_core::encode_scene_file(&scene, &output),
        Format::Json => m32scene_core::save_json_file(&scene, &output, pretty),
    }
    .with_context(|| format!("Failed to write output: {}", output.display()))?;

    info!("wrote scene '{}' to {}", scene.name, output.display());
    if !quiet {
        eprintln!("OK: {} -> {}", input.display(), output.display());
    }
    Ok(())
}

fn cmd_inspect(input: PathBuf, from: Option<Format>, pretty: bool) -> Result<(), CliError> {
    let input = resolve_input_path(&input)?;
    validate_input_file(&input)?;
    let from = from.unwrap_or_else(|| Format::for_input(&input));

    let scene = read_scene(&input, from)?;
    let summary = summary::SceneSummary::from_scene(&scene);
    let json = if pretty {
        serde_json::to_string_pretty(&summary)
    } else {
        serde_json::to_string(&summary)
    }
    .context("JSON serialization failed")?;
    println!("{}", json);
    Ok(())
}

fn read_scene(input: &Path, format: Format) -> Result<MixerScene, CliError> {
    let scene = match format {
        Format::Scn => m32scene_core::decode_scene_file(input),
        Format::Json => m32scene_core::load_json_file(input),
    };
    scene.map_err(|err| {
        CliError::new(
            format!("failed to read {}: {}", input.display(), err),
            Some(match format {
                Format::Scn => "expected a readable .scn scene file".to_string(),
                Format::Json => "expected a JSON document written by m32scene".to_string(),
            }),
        )
    })
}

fn ensure_distinct_paths(input: &Path, output: &Path) -> Result<(), CliError> {
    let input_abs = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;
    // The output may not exist yet: resolve its directory instead.
    let Some(name) = output.file_name() else {
        return Err(CliError::new(
            format!("invalid output path: {}", output.display()),
            Some("pass a file name, not a directory".to_string()),
        ));
    };
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if let Ok(dir) = fs::canonicalize(parent) {
        if dir.join(name) == input_abs {
            return Err(CliError::new(
                format!("output path must differ from input: {}", output.display()),
                Some("choose a different output path".to_string()),
            ));
        }
    }
    Ok(())
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("use a .scn or .json scene file".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("use a .scn or .json scene file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    match matches.len() {
        0 => Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        )),
        1 => Ok(matches.remove(0)),
        n => {
            let listed = matches
                .iter()
                .take(3)
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let more = if n > 3 { ", ..." } else { "" };
            Err(CliError::new(
                format!(
                    "multiple files match pattern '{}' ({} matches); matches: {}{}",
                    pattern, n, listed, more
                ),
                Some("pass a single scene file, or run once per file".to_string()),
            ))
        }
    }
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_format_defaults_to_scene_text() {
        assert_eq!(Format::for_input(Path::new("a.JSON")), Format::Json);
        assert_eq!(Format::for_input(Path::new("a.scn")), Format::Scn);
        assert_eq!(Format::for_input(Path::new("a.txt")), Format::Scn);
    }

    #[test]
    fn output_format_defaults_to_json() {
        assert_eq!(Format::for_output(Path::new("a.scn")), Format::Scn);
        assert_eq!(Format::for_output(Path::new("a.json")), Format::Json);
        assert_eq!(Format::for_output(Path::new("a")), Format::Json);
    }

    #[test]
    fn glob_detection() {
        assert!(is_glob_pattern("scenes/*.scn"));
        assert!(!is_glob_pattern("scenes/show.scn"));
    }
}
