use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Interpreter for Bisaya++ programs
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run source file
    Run(ArgsRun),
    /// Print the token stream of a source file
    Tokens(ArgsTokens),
}

#[derive(Args)]
pub struct ArgsRun {
    /// Target file
    pub target: String,
    /// Do not print a prompt before reading each DAWAT value
    ///
    /// Useful when values are piped in on stdin.
    #[arg(long)]
    pub no_prompt: bool,
}

#[derive(Args)]
pub struct ArgsTokens {
    /// Target file
    pub target: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run() {
        let cli = Cli::parse_from(["bpp", "-vv", "run", "hello.bpp", "--no-prompt"]);

        assert_eq!(2, cli.verbose, "expected=2, got={}", cli.verbose);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!("hello.bpp", args.target);
                assert!(args.no_prompt);
            }
            Commands::Tokens(_) => panic!("expected run command"),
        }
    }

    #[test]
    fn test_parse_tokens() {
        let cli = Cli::parse_from(["bpp", "tokens", "hello.bpp"]);

        assert_eq!(0, cli.verbose);
        match cli.command {
            Commands::Tokens(args) => assert_eq!("hello.bpp", args.target),
            Commands::Run(_) => panic!("expected tokens command"),
        }
    }
}
