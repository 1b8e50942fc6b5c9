mod logging;
mod report;

use chrono::NaiveDate;
use datescan::{Options, Parser};
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    logging::init(config.verbosity);

    let parser = match Parser::new(config.options) {
        Ok(parser) => parser,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let found: Vec<_> = parser.parse(&config.input).collect();
    report::print_matches(&config.input, &found, config.color);
}

struct CliConfig {
    input: String,
    options: Options,
    verbosity: u8,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut options = Options::default();
    let mut locales: Vec<String> = Vec::new();
    let mut verbosity = 0u8;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("datescan {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--month-before-day" => options.month_before_day = true,
            "-v" | "-vv" | "-vvv" => verbosity = verbosity.saturating_add(arg.len() as u8 - 1),
            "-d" | "--dictionary" => {
                let value = args.next().ok_or_else(|| "error: --dictionary expects a value".to_string())?;
                locales.push(value);
            }
            "--min-date" => {
                let value = args.next().ok_or_else(|| "error: --min-date expects a value".to_string())?;
                options.min_date = parse_date("--min-date", &value)?;
            }
            "--max-date" => {
                let value = args.next().ok_or_else(|| "error: --max-date expects a value".to_string())?;
                options.max_date = parse_date("--max-date", &value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--dictionary=") => {
                locales.push(arg.trim_start_matches("--dictionary=").to_string());
            }
            _ if arg.starts_with("--min-date=") => {
                options.min_date = parse_date("--min-date", arg.trim_start_matches("--min-date="))?;
            }
            _ if arg.starts_with("--max-date=") => {
                options.max_date = parse_date("--max-date", arg.trim_start_matches("--max-date="))?;
            }
            _ if arg.starts_with("--input=") => {
                set_input(&mut input, arg.trim_start_matches("--input=").to_string())?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    if !locales.is_empty() {
        options.dictionaries = locales;
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, options, verbosity, color })
}

fn set_input(input: &mut Option<String>, value: String) -> Result<(), String> {
    if input.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *input = Some(value);
    Ok(())
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_date(flag: &str, value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("error: invalid {flag} '{value}' (expected YYYY-MM-DD)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    let defaults = Options::default();
    format!(
        "datescan {version}

Find calendar dates in free-form text.

Usage:
  datescan [OPTIONS] [--] <input...>
  datescan [OPTIONS] --input <text>

Options:
  -i, --input <text>         Input text to scan. If omitted, reads remaining args
                             or stdin when no args are provided.
  -d, --dictionary <locale>  Locale dictionary to load; repeat for several.
                             Default: {locale}. Available: {available}
  --month-before-day         Read ambiguous numbers as month/day/year.
  --min-date <YYYY-MM-DD>    Earliest date to report. Default: {min_date}
  --max-date <YYYY-MM-DD>    Latest date to report. Default: {max_date}
  -v, -vv, -vvv              Log more (info, debug, trace). RUST_LOG overrides.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Invalid dictionary configuration.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        locale = datescan::DEFAULT_LOCALE,
        available = datescan::available_locales().collect::<Vec<_>>().join(", "),
        min_date = defaults.min_date,
        max_date = defaults.max_date,
    )
}
