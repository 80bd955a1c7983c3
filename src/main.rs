// SPDX-FileCopyrightText: 2026 ctxpanel contributors
// SPDX-License-Identifier: MIT

//! ctxpanel CLI entrypoint.
//!
//! Runs the interactive context panel over one occurrence report.
//! Use `--demo` to open a built-in demo report instead of a file.

use std::error::Error;
use std::path::PathBuf;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <report.json>\n  {program} --report <report.json>\n  {program} --demo\n\nThe report is a single JSON object describing one error occurrence.\n--demo opens a built-in demo report and cannot be combined with a report file."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    report: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--report" => {
                if options.report.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.report = Some(path);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.report.is_some() {
                    return Err(());
                }
                options.report = Some(arg);
            }
        }
    }

    if options.demo && options.report.is_some() {
        return Err(());
    }

    if !options.demo && options.report.is_none() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "ctxpanel".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let (record, report_path) = if options.demo {
            (ctxpanel::model::fixtures::demo_record(), None)
        } else {
            let path = PathBuf::from(options.report.unwrap_or_default());
            let record = ctxpanel::store::load_report(&path)?;
            (record, Some(path))
        };

        ctxpanel::tui::run(record, report_path)?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("ctxpanel: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    #[test]
    fn rejects_empty_args() {
        assert!(parse_options(std::iter::empty()).is_err(), "a report or --demo is required");
    }

    #[test]
    fn parses_demo_flag() {
        let options = parse_options(["--demo".to_owned()].into_iter()).expect("parse options");
        assert_eq!(options, CliOptions { demo: true, report: None });
    }

    #[test]
    fn parses_positional_report() {
        let options =
            parse_options(["occurrence.json".to_owned()].into_iter()).expect("parse options");
        assert_eq!(options.report.as_deref(), Some("occurrence.json"));
        assert!(!options.demo);
    }

    #[test]
    fn parses_report_flag() {
        let options = parse_options(["--report".to_owned(), "o.json".to_owned()].into_iter())
            .expect("parse options");
        assert_eq!(options.report.as_deref(), Some("o.json"));
    }

    #[test]
    fn rejects_demo_combined_with_a_report() {
        assert!(parse_options(["--demo".to_owned(), "o.json".to_owned()].into_iter()).is_err());
        assert!(parse_options(
            ["--report".to_owned(), "o.json".to_owned(), "--demo".to_owned()].into_iter()
        )
        .is_err());
    }

    #[test]
    fn rejects_duplicate_and_unknown_flags() {
        assert!(parse_options(["--demo".to_owned(), "--demo".to_owned()].into_iter()).is_err());
        assert!(parse_options(["--report".to_owned()].into_iter()).is_err(), "missing value");
        assert!(parse_options(["--verbose".to_owned()].into_iter()).is_err());
        assert!(parse_options(["a.json".to_owned(), "b.json".to_owned()].into_iter()).is_err());
    }
}
