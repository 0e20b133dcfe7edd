//! Command-line spelling normalization
//!
//! The tool documents Go-style flags with a single dash (`-name=demo`,
//! `-private`). clap reads long flags with two dashes, so single-dash words
//! are rewritten before parsing. Single-letter short flags such as `-h`
//! pass through unchanged.

use std::ffi::OsString;

/// Long flags that take the next argument as their value when written without `=`
const STRING_FLAGS: &[&str] = &["--name", "--owner", "--message"];

/// Rewrite `-word[=value]` arguments to `--word[=value]`
///
/// The first item is the program name and is never touched. Everything after
/// a bare `--` is left as is, and so is the value following a string flag
/// (`-message -wip` keeps `-wip`).
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    let mut value_next = false;

    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || passthrough {
                return arg;
            }
            if std::mem::take(&mut value_next) {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            let arg = match arg.to_str() {
                Some(s) if is_single_dash_long(s) => OsString::from(format!("-{}", s)),
                _ => arg,
            };
            value_next = arg.to_str().is_some_and(|s| STRING_FLAGS.contains(&s));
            arg
        })
        .collect()
}

/// Boolean flag values in the set Go's `strconv.ParseBool` accepts
pub fn parse_flag_bool(value: &str) -> Result<bool, String> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(format!(
            "invalid boolean '{}' (expected true/false, t/f, 1/0)",
            value
        )),
    }
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }

    let flag = rest.split('=').next().unwrap_or_default();
    flag.len() > 1 && flag.starts_with(|c: char| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(args: &[&str]) -> Vec<String> {
        normalize_args(args.iter().copied())
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect()
    }

    #[test]
    fn test_single_dash_words_become_long_flags() {
        assert_eq!(
            normalize(&["create-repo", "-name=demo", "-create-dir=true", "-private"]),
            vec!["create-repo", "--name=demo", "--create-dir=true", "--private"]
        );
    }

    #[test]
    fn test_double_dash_and_short_flags_untouched() {
        assert_eq!(
            normalize(&["create-repo", "--name", "demo", "-h"]),
            vec!["create-repo", "--name", "demo", "-h"]
        );
    }

    #[test]
    fn test_values_and_program_name_untouched() {
        assert_eq!(
            normalize(&["-weird-program", "-name", "demo", "-1x"]),
            vec!["-weird-program", "--name", "demo", "-1x"]
        );
    }

    #[test]
    fn test_dash_leading_values_of_string_flags_untouched() {
        assert_eq!(
            normalize(&["create-repo", "-message", "-wip", "-name", "-demo", "-private"]),
            vec!["create-repo", "--message", "-wip", "--name", "-demo", "--private"]
        );
        assert_eq!(
            normalize(&["create-repo", "--owner", "-org", "-create-dir"]),
            vec!["create-repo", "--owner", "-org", "--create-dir"]
        );
    }

    #[test]
    fn test_inline_value_does_not_capture_next_arg() {
        assert_eq!(
            normalize(&["create-repo", "-name=demo", "-private"]),
            vec!["create-repo", "--name=demo", "--private"]
        );
    }

    #[test]
    fn test_flag_bool_values() {
        for v in ["1", "t", "T", "true", "TRUE", "True"] {
            assert_eq!(parse_flag_bool(v), Ok(true), "{v}");
        }
        for v in ["0", "f", "F", "false", "FALSE", "False"] {
            assert_eq!(parse_flag_bool(v), Ok(false), "{v}");
        }
        for v in ["", "yes", "on", "tRUE", "2"] {
            assert!(parse_flag_bool(v).is_err(), "{v}");
        }
    }

    #[test]
    fn test_stops_after_separator() {
        assert_eq!(
            normalize(&["create-repo", "--", "-name"]),
            vec!["create-repo", "--", "-name"]
        );
    }
}
