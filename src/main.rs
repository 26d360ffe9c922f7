use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use lakhfmt::{FormatConfig, IncomeLimits, IndianFormatter};

#[derive(Parser)]
#[command(name = "lakhfmt", version, about = "Indian (lakh/crore) number formatting")]
struct Cli {
    /// Config file (overrides LAKHFMT_CONFIG and ~/.config/lakhfmt/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Group an amount lakh/crore style
    Format {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Strip separators and print the number (unreadable input prints 0)
    Parse {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Rupee string with a lakh/crore/thousand phrase
    Currency {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Just the lakh/crore/thousand phrase, as shown under an income field
    Helper {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Example income for a form placeholder
    Placeholder {
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Describe a scheme's income limits
    Limits {
        #[arg(long, allow_hyphen_values = true)]
        min: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        max: Option<String>,
    },
    /// Normalize one amount per line (stdin when no file is given)
    Batch {
        #[arg(long)]
        input: Option<PathBuf>,
        /// Render each line as a currency string instead
        #[arg(long)]
        currency: bool,
    },
}

#[derive(Serialize)]
struct Rendered<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<String>,
    output: T,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// A value that must be a real amount; unlike form input, the CLI rejects
/// what `parse` would silently zero.
fn strict_amount(fmt: &IndianFormatter, text: &str) -> Result<f64> {
    fmt.try_parse(text).with_context(|| format!("not an amount: {text:?}"))
}

/// One command result: the bare output, or `{"input": .., "output": ..}`.
fn render<T: Serialize + std::fmt::Display>(
    json: bool,
    input: Option<&str>,
    output: T,
) -> Result<String> {
    if json {
        let rendered = Rendered {
            input: input.map(str::to_string),
            output,
        };
        Ok(serde_json::to_string(&rendered)?)
    } else {
        Ok(output.to_string())
    }
}

fn emit<T: Serialize + std::fmt::Display>(
    json: bool,
    input: Option<&str>,
    output: T,
) -> Result<()> {
    println!("{}", render(json, input, output)?);
    Ok(())
}

/// Batch results: one output per line, or a JSON array of input/output pairs.
fn render_batch(json: bool, lines: &[String], outputs: &[String]) -> Result<String> {
    if json {
        let rendered: Vec<Rendered<&String>> = lines
            .iter()
            .zip(outputs)
            .map(|(input, output)| Rendered {
                input: Some(input.clone()),
                output,
            })
            .collect();
        Ok(serde_json::to_string_pretty(&rendered)?)
    } else {
        Ok(outputs.join("\n"))
    }
}

fn read_lines(input: Option<&PathBuf>) -> Result<Vec<String>> {
    let raw = match input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {path:?}"))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn run_batch(fmt: &IndianFormatter, lines: &[String], currency: bool) -> Result<Vec<String>> {
    lines
        .par_iter()
        .map(|line| -> Result<String> {
            if currency {
                Ok(fmt.format_currency(fmt.parse(line.as_str()))?)
            } else {
                Ok(fmt.normalize(line))
            }
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = FormatConfig::load(cli.config.as_deref()).context("failed to load config")?;
    debug!(?config, "resolved config");
    let fmt = IndianFormatter::new(config);

    match cli.command {
        Commands::Format { amount } => {
            let value = strict_amount(&fmt, &amount)?;
            emit(cli.json, Some(amount.as_str()), fmt.format(value)?)?;
        }
        Commands::Parse { text } => {
            emit(cli.json, Some(text.as_str()), fmt.parse(text.as_str()))?;
        }
        Commands::Currency { amount } => {
            let value = strict_amount(&fmt, &amount)?;
            emit(cli.json, Some(amount.as_str()), fmt.format_currency(value)?)?;
        }
        Commands::Helper { amount } => {
            let value = strict_amount(&fmt, &amount)?;
            let phrase = fmt.unit_phrase(value)?.unwrap_or_default();
            emit(cli.json, Some(amount.as_str()), phrase)?;
        }
        Commands::Placeholder { seed } => {
            let text = match seed {
                Some(seed) => fmt.placeholder_text_with(&mut StdRng::seed_from_u64(seed)),
                None => fmt.placeholder_text(),
            };
            let input = seed.map(|seed| format!("seed={seed}"));
            emit(cli.json, input.as_deref(), text)?;
        }
        Commands::Limits { min, max } => {
            let min = min.map(|m| strict_amount(&fmt, &m)).transpose()?;
            let max = max.map(|m| strict_amount(&fmt, &m)).transpose()?;
            let lines = IncomeLimits::new(min, max).requirements(&fmt)?;
            if cli.json {
                let rendered = Rendered {
                    input: Some(format!("min={min:?} max={max:?}")),
                    output: &lines,
                };
                println!("{}", serde_json::to_string(&rendered)?);
            } else if lines.is_empty() {
                println!("No income limit");
            } else {
                for line in &lines {
                    println!("{line}");
                }
            }
        }
        Commands::Batch { input, currency } => {
            let lines = read_lines(input.as_ref())?;
            info!(count = lines.len(), currency, "formatting batch");
            let outputs = run_batch(&fmt, &lines, currency)?;
            if cli.json || !outputs.is_empty() {
                println!("{}", render_batch(cli.json, &lines, &outputs)?);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_amounts_are_positional_values() {
        let cli = Cli::try_parse_from(["lakhfmt", "currency", "-50000"]).unwrap();
        assert!(matches!(&cli.command, Commands::Currency { amount } if amount == "-50000"));
    }

    #[test]
    fn batch_keeps_input_order() {
        let fmt = IndianFormatter::default();
        let lines: Vec<String> = (0..1_000).map(|i| (i * 1_000).to_string()).collect();
        let outputs = run_batch(&fmt, &lines, false).unwrap();
        for (line, output) in lines.iter().zip(&outputs) {
            assert_eq!(fmt.parse(output.as_str()), fmt.parse(line.as_str()));
        }
        assert_eq!(outputs[100], "1,00,000");
    }

    #[test]
    fn batch_currency_mode_zeroes_garbage() {
        let fmt = IndianFormatter::default();
        let lines = vec!["2,50,000".to_string(), "n/a".to_string()];
        let outputs = run_batch(&fmt, &lines, true).unwrap();
        assert_eq!(outputs, vec!["₹2,50,000 (2.5 Lakhs)", "₹0"]);
    }

    #[test]
    fn strict_amount_rejects_garbage() {
        let fmt = IndianFormatter::default();
        assert!(strict_amount(&fmt, "12x").is_err());
        assert_eq!(strict_amount(&fmt, "1,000").unwrap(), 1_000.0);
    }

    #[test]
    fn json_output_carries_input_and_output() {
        let text = render(true, Some("250000"), "₹2,50,000 (2.5 Lakhs)").unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["input"], "250000");
        assert_eq!(value["output"], "₹2,50,000 (2.5 Lakhs)");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn plain_output_is_just_the_value() {
        assert_eq!(render(false, Some("1,00,000"), 100_000.0).unwrap(), "100000");
    }

    #[test]
    fn unseeded_placeholder_json_has_no_input_key() {
        let text = render(true, None, "e.g., 5,00,000").unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value.get("input").is_none());
        assert_eq!(value["output"], "e.g., 5,00,000");

        let text = render(true, Some("seed=7"), "e.g., 5,00,000").unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["input"], "seed=7");
    }

    #[test]
    fn batch_json_is_an_array_of_pairs() {
        let lines = vec!["250000".to_string(), "oops".to_string()];
        let outputs = vec!["2,50,000".to_string(), "0".to_string()];
        let text = render_batch(true, &lines, &outputs).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["input"], "250000");
        assert_eq!(items[0]["output"], "2,50,000");
        assert_eq!(items[1]["input"], "oops");
        assert_eq!(items[1]["output"], "0");

        assert_eq!(render_batch(false, &lines, &outputs).unwrap(), "2,50,000\n0");
    }

    #[test]
    fn read_lines_trims_and_skips_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "  1,00,000 \n\n\t250000\n   \n-500\n").unwrap();
        let path = file.path().to_path_buf();
        let lines = read_lines(Some(&path)).unwrap();
        assert_eq!(lines, vec!["1,00,000", "250000", "-500"]);
    }

    #[test]
    fn read_lines_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_lines(Some(&dir.path().join("absent.txt"))).is_err());
    }
}
