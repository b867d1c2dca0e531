mod debug_report;

use debug_report::ReportOptions;
use std::io::{self, BufRead, IsTerminal, Write};
use thiserror::Error;
use uaclass::{DetectionVerbose, WindowsFlavor, detect_verbose};

fn main() {
    init_tracing();

    let config = match parse_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => exit_with(err),
    };

    if let Err(err) = run(config, io::stdin().lock(), &mut io::stdout().lock()) {
        exit_with(err);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn exit_with(err: CliError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(err.exit_code());
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{0} expects a value")]
    MissingValue(&'static str),
    #[error("input provided multiple times")]
    DuplicateInput,
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("no input provided\n\n{help}", help = help_text())]
    NoInput,
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::MissingValue(_) | CliError::DuplicateInput | CliError::UnknownOption(_) | CliError::NoInput => 2,
            CliError::Stdin(_) | CliError::Json(_) | CliError::Output(_) => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

#[derive(Debug)]
struct CliConfig {
    /// A single UA from the arguments; `None` streams one UA per stdin line.
    input: Option<String>,
    flavor: WindowsFlavor,
    format: Format,
    color: bool,
    verbose: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliConfig, CliError> {
    let mut input: Option<String> = None;
    let mut flavor = WindowsFlavor::Client;
    let mut format = Format::Text;
    let mut color = io::stdout().is_terminal();
    let mut verbose = false;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("uaclass {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--server" => flavor = WindowsFlavor::Server,
            "--json" => format = Format::Json,
            "-v" | "--verbose" => verbose = true,
            "--input" | "-i" => {
                let value = args.next().ok_or(CliError::MissingValue("--input"))?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=").to_string();
                set_input(&mut input, value)?;
            }
            _ if arg.starts_with('-') => {
                return Err(CliError::UnknownOption(arg));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    Ok(CliConfig { input, flavor, format, color, verbose })
}

fn set_input(input: &mut Option<String>, value: String) -> Result<(), CliError> {
    if input.is_some() {
        return Err(CliError::DuplicateInput);
    }
    *input = Some(value);
    Ok(())
}

fn run(config: CliConfig, stdin: impl BufRead, out: &mut impl Write) -> Result<(), CliError> {
    let opts = ReportOptions { flavor: config.flavor, color: config.color, verbose: config.verbose };

    if let Some(ua) = &config.input {
        if ua.trim().is_empty() {
            return Err(CliError::NoInput);
        }
        write_one(out, ua, config.format, &opts)?;
        return out.flush().map_err(CliError::Output);
    }

    // One UA per line, answered as soon as the line arrives.
    let mut seen = false;
    for line in stdin.lines() {
        let line = line.map_err(CliError::Stdin)?;
        if line.trim().is_empty() {
            continue;
        }
        seen = true;
        write_one(out, &line, config.format, &opts)?;
        out.flush().map_err(CliError::Output)?;
    }
    if seen { Ok(()) } else { Err(CliError::NoInput) }
}

fn write_one(out: &mut impl Write, ua: &str, format: Format, opts: &ReportOptions) -> Result<(), CliError> {
    let res = detect_verbose(ua);
    match format {
        Format::Text => debug_report::write_run(out, &res, opts).map_err(CliError::Output),
        Format::Json => {
            let line = json_line(&res, opts)?;
            writeln!(out, "{line}").map_err(CliError::Output)
        }
    }
}

/// One JSON object per UA. The library serializes client edition names;
/// `--server` swaps in the server ones.
fn json_line(res: &DetectionVerbose, opts: &ReportOptions) -> Result<String, CliError> {
    let mut value =
        if opts.verbose { serde_json::to_value(res)? } else { serde_json::to_value(&res.detection)? };

    let record = if opts.verbose { value.get_mut("detection") } else { Some(&mut value) };
    if let Some(record) = record.and_then(|v| v.as_object_mut()) {
        let name = res.detection.platform_version_name(opts.flavor);
        record.insert("platform_version_name".to_string(), serde_json::to_value(name)?);
    }

    Ok(serde_json::to_string(&value)?)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "uaclass {version}

Classify HTTP User-Agent strings: browser, version, platform and client traits.

Usage:
  uaclass [OPTIONS] [--] <user-agent...>
  uaclass [OPTIONS] --input <user-agent>
  producer | uaclass [OPTIONS]

Options:
  -i, --input <ua>           User-Agent to classify. If omitted, the remaining
                             args are joined into one UA, or stdin is read with
                             one UA per line when no args are provided.
  --server                   Name NT versions after server editions
                             (Windows Server 2008 R2 instead of Windows 7).
  --json                     Print one JSON object per UA.
  -v, --verbose              Include matched rule, rule counts and timings.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  RUST_LOG                   Log filter for stderr diagnostics (default: warn).

Exit codes:
  0  Success.
  1  Internal error (stdin, output or JSON encoding failure).
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
