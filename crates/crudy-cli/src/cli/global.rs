//! Flags accepted by every `crudy` subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum, builder::FalseyValueParser};

/// Flags flattened into [`super::Cli`].
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log verbosity. Warnings only by default; `-v` info, `-vv` debug,
    /// `-vvv` trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "More log output (-v, -vv, -vvv)",
        long_help = "More log output on stderr:
    (none)  - warnings and errors
    -v      - each resolved project and created directory
    -vv     - each rendered template and written file
    -vvv    - renderer internals
RUST_LOG takes precedence when set."
    )]
    pub verbose: u8,

    /// Errors only. Also hides the success message of `init`.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print errors only"
    )]
    pub quiet: bool,

    /// No ANSI colors on stdout or stderr.
    ///
    /// `NO_COLOR` follows <https://no-color.org>: any value other than an
    /// empty string, `0`, `false`, `no`, `off`, `n` or `f` turns colors off.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// TOML file layered over the defaults. Must exist when given.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file (default: platform config dir)"
    )]
    pub config: Option<PathBuf>,

    /// Output format. `auto` defers to `output.format` in the config, then
    /// to terminal detection.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format",
        long_help = "Output format:
    auto    - `output.format` from the config, else human on a terminal and plain when piped
    human   - colored messages
    plain   - messages without colors
    json    - one JSON document on stdout; for `init`: name, path, created, files"
    )]
    pub output_format: OutputFormat,
}

/// How the CLI renders its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Auto,
    Human,
    Plain,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        global: GlobalArgs,
    }

    #[test]
    fn defaults() {
        let h = Harness::try_parse_from(["crudy"]).unwrap();
        assert_eq!(h.global.verbose, 0);
        assert!(!h.global.quiet);
        assert_eq!(h.global.output_format, OutputFormat::Auto);
        assert!(h.global.config.is_none());
    }

    #[test]
    fn no_color_flag_takes_no_value() {
        let h = Harness::try_parse_from(["crudy", "--no-color"]).unwrap();
        assert!(h.global.no_color);
    }

    #[test]
    fn falsey_parser_accepts_no_color_convention() {
        let parser = FalseyValueParser::new();
        let cmd = clap::Command::new("crudy");
        let parse = |v: &str| {
            clap::builder::TypedValueParser::parse_ref(&parser, &cmd, None, std::ffi::OsStr::new(v))
                .unwrap()
        };
        assert!(parse("1"));
        assert!(parse("yes"));
        assert!(!parse(""));
        assert!(!parse("0"));
        assert!(!parse("false"));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Harness::try_parse_from(["crudy", "-q", "-v"]).is_err());
    }

    #[test]
    fn json_format_is_case_insensitive_in_config() {
        assert_eq!(OutputFormat::from_str("JSON", true), Ok(OutputFormat::Json));
    }
}
