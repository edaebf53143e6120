//! Completions command implementation

use crate::cli::{Cli, CompletionsArgs};
use clap::CommandFactory;
use clap_complete::generate;
use std::io::{self, Write};

/// Handle `keepalive completions` command
pub fn handle_completions(args: &CompletionsArgs) {
    write_completions(args, &mut io::stdout());
}

/// Write the completion script for the requested shell.
pub fn write_completions<W: Write>(args: &CompletionsArgs, out: &mut W) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, bin_name, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_complete::Shell;

    #[test]
    fn test_completions_bash() {
        let args = CompletionsArgs { shell: Shell::Bash };
        let mut buf = Vec::new();
        write_completions(&args, &mut buf);

        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("keepalive"));
        assert!(script.contains("ping"));
    }

    #[test]
    fn test_completions_zsh() {
        let args = CompletionsArgs { shell: Shell::Zsh };
        let mut buf = Vec::new();
        write_completions(&args, &mut buf);
        assert!(!buf.is_empty());
    }
}
