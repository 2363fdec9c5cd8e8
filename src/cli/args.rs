use clap::Parser;

/// Global command-line arguments
///
/// Only options placed before the command path are parsed here. Everything
/// from the first command token on is kept raw and resolved against the
/// command tree by the dispatcher, so `-h/--help` is handled there too.
#[derive(Parser, Debug, Clone)]
#[command(name = "cli")]
#[command(about = "Manage apps, images and clusters")]
#[command(long_about = None)]
#[command(version)]
#[command(disable_help_flag = true)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format for help pages: text or json
    #[arg(
        long = "help-format",
        value_name = "FORMAT",
        default_value = "text",
        env = "NESTCLI_HELP_FORMAT",
        value_parser = ["text", "json"]
    )]
    pub help_format: String,

    /// Show this message and exit.
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Command path followed by its arguments
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Args {
    /// Tokens handed to the dispatcher
    ///
    /// A root `--help` flag is turned back into a leading token so the
    /// dispatcher sees the same request as `cli --help` typed after a path.
    #[must_use]
    pub fn command_tokens(&self) -> Vec<String> {
        let mut tokens = Vec::with_capacity(self.command.len() + 1);
        if self.help {
            tokens.push("--help".to_owned());
        }
        tokens.extend(self.command.iter().cloned());
        tokens
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    #[test]
    fn keeps_command_tokens_raw() {
        let args = Args::try_parse_from(["cli", "-v", "app", "build", "--help"]).unwrap();

        assert!(args.verbose);
        assert!(!args.help);
        assert_eq!(args.command, vec!["app", "build", "--help"]);
        assert_eq!(args.help_format, "text");
    }

    #[test]
    fn root_help_becomes_a_token() {
        let args = Args::try_parse_from(["cli", "--help"]).unwrap();

        assert!(args.help);
        assert_eq!(args.command_tokens(), vec!["--help"]);
    }

    #[test]
    fn rejects_unknown_help_format() {
        assert!(Args::try_parse_from(["cli", "--help-format", "yaml", "app"]).is_err());
    }
}
