mod report;

use std::io::{self, IsTerminal, Read};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wordplay::{Options, TracingSink, generate_filtered_with, is_palindrome};

const DEFAULT_TOKENS: [&str; 5] = ["Gimli", "Fili", "Ilif", "Ilmig", "Mark"];

fn main() {
    init_tracing();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let res = generate_filtered_with(&config.tokens, is_palindrome, &config.options, &mut TracingSink);
    report::print_run(&config.tokens, &res, config.color);
}

/// `RUST_LOG` wins when set; otherwise `WORDPLAY_DEBUG` switches from `info`
/// to `debug`.
fn init_tracing() {
    let default_level = if std::env::var_os("WORDPLAY_DEBUG").is_some() { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).with_writer(io::stderr).init();
}

struct CliConfig {
    tokens: Vec<String>,
    options: Options,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut tokens: Option<Vec<String>> = None;
    let mut options = Options::default();
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("wordplay {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--tokens" | "-t" => {
                let value = args.next().ok_or_else(|| "error: --tokens expects a value".to_string())?;
                set_tokens(&mut tokens, split_list(&value))?;
            }
            "--input-warning" => {
                let value = args.next().ok_or_else(|| "error: --input-warning expects a value".to_string())?;
                options.input_warning = parse_count("--input-warning", &value)?;
            }
            "--result-warning" => {
                let value = args.next().ok_or_else(|| "error: --result-warning expects a value".to_string())?;
                options.result_warning = parse_count("--result-warning", &value)?;
            }
            "--latency-warning-ms" => {
                let value = args.next().ok_or_else(|| "error: --latency-warning-ms expects a value".to_string())?;
                options.latency_warning = Duration::from_millis(parse_count("--latency-warning-ms", &value)? as u64);
            }
            "--" => {
                let rest: Vec<String> = args.collect();
                if !rest.is_empty() {
                    set_tokens(&mut tokens, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--tokens=") => {
                let value = arg.trim_start_matches("--tokens=");
                set_tokens(&mut tokens, split_list(value))?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest: Vec<String> = std::iter::once(arg).chain(args).collect();
                set_tokens(&mut tokens, rest)?;
                break;
            }
        }
    }

    let tokens = match tokens {
        Some(value) => value,
        None if io::stdin().is_terminal() => DEFAULT_TOKENS.iter().map(|s| s.to_string()).collect(),
        None => read_stdin_tokens()?,
    };

    if tokens.is_empty() {
        return Err(format!("error: no tokens provided\n\n{}", help_text()));
    }

    Ok(CliConfig { tokens, options, color })
}

fn set_tokens(slot: &mut Option<Vec<String>>, value: Vec<String>) -> Result<(), String> {
    if slot.is_some() {
        return Err("error: tokens provided multiple times".to_string());
    }
    *slot = Some(value);
    Ok(())
}

/// Comma separated list; empty entries are kept so the engine can skip them.
fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(|s| s.trim().to_string()).collect()
}

fn parse_count(flag: &str, value: &str) -> Result<usize, String> {
    value.parse::<usize>().map_err(|_| format!("error: invalid {flag} '{value}' (expected a non-negative integer)"))
}

fn read_stdin_tokens() -> Result<Vec<String>, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer.split_whitespace().map(str::to_string).collect())
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "wordplay {version}

Finds every palindrome built by concatenating distinct tokens in any order.

Usage:
  wordplay [OPTIONS] [--] <token...>
  wordplay [OPTIONS] --tokens <a,b,c>

Options:
  -t, --tokens <list>          Comma separated tokens. If omitted, reads the
                               remaining args, whitespace separated stdin, or
                               falls back to: {defaults}
  --input-warning <n>          Token count above which a cost estimate is logged.
                               Default: {input_warning}
  --result-warning <n>         Result count above which a memory warning is logged.
                               Default: {result_warning}
  --latency-warning-ms <ms>    Run time above which the elapsed time is logged.
                               Default: {latency_warning}
  --color                      Force ANSI color output.
  --no-color                   Disable ANSI color output.
  -h, --help                   Show this help message.
  -V, --version                Print version information.

Environment:
  WORDPLAY_DEBUG               Log engine debug events.
  RUST_LOG                     Explicit log filter (overrides WORDPLAY_DEBUG).

Exit codes:
  0  Success.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        defaults = DEFAULT_TOKENS.join(" "),
        input_warning = Options::default().input_warning,
        result_warning = Options::default().result_warning,
        latency_warning = Options::default().latency_warning.as_millis(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_keeps_empty_entries() {
        assert_eq!(split_list("Gimli, Fili,,Mark"), vec!["Gimli", "Fili", "", "Mark"]);
    }

    #[test]
    fn parse_count_rejects_garbage() {
        assert_eq!(parse_count("--input-warning", "12"), Ok(12));
        assert!(parse_count("--input-warning", "-1").unwrap_err().contains("--input-warning"));
        assert!(parse_count("--result-warning", "lots").is_err());
    }

    #[test]
    fn tokens_can_only_be_set_once() {
        let mut slot = None;
        assert!(set_tokens(&mut slot, vec!["a".to_string()]).is_ok());
        assert!(set_tokens(&mut slot, vec!["b".to_string()]).is_err());
        assert_eq!(slot, Some(vec!["a".to_string()]));
    }
}
