// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! harsift CLI - traffic reduction for HAR captures
//!
//! Thin front end over the harsift library: reads captures, filters them
//! and writes the reduced capture next to the input.

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use harsift::{clip_strings, Capture, DomainInferencer, FilterOutcome, TrafficFilter};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("harsift=info".parse().expect("static directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "filter" => match FilterArgs::parse(&args[2..]) {
            Ok(filter_args) => filter_capture(filter_args).await,
            Err(e) => {
                eprintln!("{}", e);
                eprintln!("Usage: harsift filter <input.har> [output.har] [--report] [--clip <N>]");
                return ExitCode::from(1);
            }
        },
        "domain" => {
            if args.len() < 3 {
                eprintln!("Usage: harsift domain <input.har>");
                return ExitCode::from(1);
            }
            show_domain(Path::new(&args[2])).await
        }
        "batch" => {
            if args.len() < 3 {
                eprintln!("Usage: harsift batch <input.har>...");
                return ExitCode::from(1);
            }
            filter_batch(&args[2..]).await
        }
        "--help" | "-h" | "help" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        "--version" | "-v" | "version" => {
            println!("harsift {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            return ExitCode::from(1);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"harsift - Traffic Reduction for Browser Captures

USAGE:
    harsift <COMMAND> [OPTIONS]

COMMANDS:
    filter <input> [output]   Filter a HAR capture (default output: <input>_filtered.har)
        --report              Print the filter report as JSON
        --clip <N>            Cut every string in the input to N characters first
    domain <input>            Show the inferred primary domain
    batch <input>...          Filter several captures concurrently
    help                      Show this help message
    version                   Show version information

EXAMPLES:
    harsift filter runs/session.har
    harsift filter runs/session.har out.har --report
    harsift batch runs/*.har

Set RUST_LOG=harsift=debug to see why each record was dropped.
"#
    );
}

/// Arguments of the `filter` command
#[derive(Debug, Default, PartialEq)]
struct FilterArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    report: bool,
    clip: Option<usize>,
}

impl FilterArgs {
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut positional = Vec::new();
        let mut parsed = FilterArgs::default();

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--report" => parsed.report = true,
                "--clip" => {
                    let value = iter.next().ok_or("--clip needs a value")?;
                    let len = value
                        .parse::<usize>()
                        .map_err(|_| format!("Invalid --clip value: {}", value))?;
                    parsed.clip = Some(len);
                }
                flag if flag.starts_with("--") => return Err(format!("Unknown option: {}", flag)),
                _ => positional.push(PathBuf::from(arg)),
            }
        }

        let mut positional = positional.into_iter();
        parsed.input = positional.next().ok_or("Missing input file")?;
        parsed.output = positional.next();
        if let Some(extra) = positional.next() {
            return Err(format!("Unexpected argument: {}", extra.display()));
        }

        Ok(parsed)
    }
}

/// `dir/session.har` -> `dir/session_filtered.har`
fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "capture".to_string());
    input.with_file_name(format!("{}_filtered.har", stem))
}

fn load_capture(text: &str, clip: Option<usize>) -> harsift::Result<Capture> {
    match clip {
        Some(max_len) => {
            let raw: serde_json::Value = serde_json::from_str(text)?;
            Capture::from_value(clip_strings(raw, max_len))
        }
        None => Capture::from_json(text),
    }
}

fn run_filter(text: &str, clip: Option<usize>) -> harsift::Result<FilterOutcome> {
    let capture = load_capture(text, clip)?;
    TrafficFilter::new().filter(&capture)
}

async fn filter_capture(args: FilterArgs) -> anyhow::Result<()> {
    let text = tokio::fs::read_to_string(&args.input)
        .await
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let outcome = run_filter(&text, args.clip)
        .with_context(|| format!("Failed to filter {}", args.input.display()))?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input));
    tokio::fs::write(&output, outcome.capture.to_json_pretty()?)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("{}", outcome.report.summary());
    println!("Wrote filtered capture to {}", output.display());

    if args.report {
        println!("{}", serde_json::to_string_pretty(&outcome.report)?);
    }

    Ok(())
}

async fn show_domain(input: &Path) -> anyhow::Result<()> {
    let text = tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let capture = Capture::from_json(&text)
        .with_context(|| format!("Failed to parse {}", input.display()))?;

    let inference = DomainInferencer::new().infer(&capture);
    if inference.is_determined() {
        println!("{} ({:?})", inference.domain, inference.source);
    } else {
        println!("<undetermined>");
    }
    Ok(())
}

async fn filter_batch(inputs: &[String]) -> anyhow::Result<()> {
    let tasks = inputs.iter().map(|input| {
        let input = PathBuf::from(input);
        async move {
            let text = tokio::fs::read_to_string(&input)
                .await
                .with_context(|| format!("Failed to read {}", input.display()))?;

            let outcome = tokio::task::spawn_blocking(move || run_filter(&text, None))
                .await
                .context("Filter task panicked")?
                .with_context(|| format!("Failed to filter {}", input.display()))?;

            let output = default_output(&input);
            tokio::fs::write(&output, outcome.capture.to_json_pretty()?)
                .await
                .with_context(|| format!("Failed to write {}", output.display()))?;

            anyhow::Ok((input, outcome.report))
        }
    });

    let mut failures = 0;
    for result in futures::future::join_all(tasks).await {
        match result {
            Ok((input, report)) => println!("{}: {}", input.display(), report.summary()),
            Err(e) => {
                failures += 1;
                eprintln!("Error: {:#}", e);
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} captures failed", failures, inputs.len());
    }
    Ok(())
}
