use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use tracing::{error, Level};

use bpp_lang::{
    cli::{ArgsRun, ArgsTokens, Cli, Commands},
    interpret, tokenize, Error, InputSource, Parser, TokenKind,
};

/// Reads one line of stdin per requested value.
struct StdinInput {
    prompt: bool,
}

impl InputSource for StdinInput {
    fn next_value(&mut self, name: &str) -> bpp_lang::Result<String> {
        if self.prompt {
            let mut stdout = io::stdout();
            // a failed prompt write does not prevent reading the value
            let _ = write!(stdout, "Enter value for {}: ", name);
            let _ = stdout.flush();
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => Err(Error::input_unavailable(name)),
            Ok(_) => Ok(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Run(args) => run(args),
        Commands::Tokens(args) => tokens(args),
    }
}

fn read_source(target: &str) -> Option<String> {
    match fs::read_to_string(target) {
        Ok(source) => Some(source),
        Err(e) => {
            error!(%target, "cannot read source file");
            eprintln!("cannot read '{}': {}", target, e);
            None
        }
    }
}

fn run(args: ArgsRun) -> ExitCode {
    let source = match read_source(&args.target) {
        Some(source) => source,
        None => return ExitCode::FAILURE,
    };

    let mut input = StdinInput {
        prompt: !args.no_prompt,
    };
    let mut output = Vec::new();

    let result = interpret(&source, &mut input, &mut output);

    let mut stdout = io::stdout().lock();
    for line in &output {
        if writeln!(stdout, "{}", line).is_err() {
            return ExitCode::FAILURE;
        }
    }

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", e.category(), e);
            ExitCode::FAILURE
        }
    }
}

fn tokens(args: ArgsTokens) -> ExitCode {
    let source = match read_source(&args.target) {
        Some(source) => source,
        None => return ExitCode::FAILURE,
    };

    let mut stdout = io::stdout().lock();
    let mut illegal = false;

    for token in tokenize(&source) {
        let kind = token.kind();
        illegal |= kind == TokenKind::Illegal;

        let class = if kind.is_keyword() {
            "keyword"
        } else if kind.is_operator() {
            "operator"
        } else if kind.is_punctuation() {
            "punctuation"
        } else {
            "value"
        };

        if writeln!(stdout, "{}\t{}\t{}", token.position, class, token).is_err() {
            return ExitCode::FAILURE;
        }
    }

    if illegal {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
