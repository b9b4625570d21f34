//! Command-line argument definitions for the Strata CLI.
//!
//! [`Args`] is parsed from the command line with [`clap`]. Arguments select the
//! input document, the output SVG path, an optional configuration file and the
//! logging verbosity.

use clap::Parser;

/// Command-line arguments for the Strata diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input diagram document (TOML)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["strata", "diagram.toml"]);

        assert_eq!(args.input, "diagram.toml");
        assert_eq!(args.output, "out.svg");
        assert_eq!(args.config, None);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from([
            "strata",
            "diagram.toml",
            "-o",
            "layers.svg",
            "-c",
            "style.toml",
            "--log-level",
            "debug",
        ]);

        assert_eq!(args.output, "layers.svg");
        assert_eq!(args.config.as_deref(), Some("style.toml"));
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_input_is_required() {
        assert!(Args::try_parse_from(["strata"]).is_err());
    }
}
