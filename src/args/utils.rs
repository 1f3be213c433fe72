//! Shared utilities for argument processing.

/// Environment variable that forces TRACE logging.
pub const TRACE_ENV: &str = "LTA_SWITCHER_TRACE";

/// What: Determine the log level based on command-line arguments and environment variables.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level`.
/// - `LTA_SWITCHER_TRACE=1` enables TRACE level.
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else if std::env::var(TRACE_ENV).ok().as_deref() == Some("1") {
        "trace".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Parse a competition id given on the command line.
///
/// Inputs:
/// - `text`: Raw argument.
///
/// Output:
/// - `Ok(id)` for a positive integer, `Err(message)` otherwise.
pub fn parse_competition_id(text: &str) -> Result<i32, String> {
    match text.trim().parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(format!("invalid competition id: {text:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Verbose wins over the explicit level; ids must be positive integers.
    ///
    /// Inputs:
    /// - `--verbose` args; ids "10", " 7 ", "0", "abc".
    ///
    /// Output:
    /// - "debug"; Ok(10), Ok(7), Err, Err.
    fn log_level_and_id_parsing() {
        let args = crate::args::Args {
            verbose: true,
            log_level: "warn".into(),
            ..crate::args::Args::default()
        };
        assert_eq!(determine_log_level(&args), "debug");
        assert_eq!(parse_competition_id("10"), Ok(10));
        assert_eq!(parse_competition_id(" 7 "), Ok(7));
        assert!(parse_competition_id("0").is_err());
        assert!(parse_competition_id("abc").is_err());
    }
}
