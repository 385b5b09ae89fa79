use file_diff::diff;
use std::{fs, path::Path};

use bpp_lang::{
    interpret, parse, tokenize, ErrorCategory, ErrorKind, Object, Result, ScriptedInput,
    TokenKind,
};

macro_rules! test_file {
    ($fname:expr) => {
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/resources/", $fname) // assumes Linux ('/')!
    };
}

fn run(source: &str, input: &[&str]) -> (Result<bpp_lang::Environment>, Vec<String>) {
    let mut input = ScriptedInput::new(input.iter().copied());
    let mut output = Vec::new();
    let result = interpret(source, &mut input, &mut output);
    (result, output)
}

#[test]
fn run_source_file() -> Result<()> {
    let source = fs::read_to_string(Path::new(test_file!("sample.bpp")))
        .expect("sample program is readable");

    let (result, output) = run(&source, &["3", "Maria"]);
    let environment = result?;

    let mut artifact = output.join("\n");
    artifact.push('\n');
    fs::write(test_file!("artifact_output"), artifact).expect("artifact is writable");

    assert!(
        diff(test_file!("artifact_output"), test_file!("expected_output")),
        "output artifact does not match test case"
    );

    let tests = vec![
        ("n", Object::Numero(3)),
        ("i", Object::Numero(4)),
        ("total", Object::Numero(14)),
        ("name", Object::Letra("Maria".into())),
        ("even", Object::Tinuod(false)),
    ];

    for (name, expected) in tests {
        let got = environment.get(name)?;
        assert_eq!(&expected, got, "{}: expected={:?}, got={:?}", name, expected, got);
    }

    Ok(())
}

#[test]
fn printed_program_round_trips() -> Result<()> {
    let source = fs::read_to_string(Path::new(test_file!("sample.bpp")))
        .expect("sample program is readable");

    let program = parse(&source)?;
    let printed = program.to_string();
    let reparsed = parse(&printed)?;

    assert_eq!(program, reparsed, "printed program differs:\n{}", printed);

    let (_, output) = run(&printed, &["3", "Maria"]);
    let (_, expected) = run(&source, &["3", "Maria"]);
    assert_eq!(expected, output, "printed program behaves differently");

    Ok(())
}

#[test]
fn error_categories() {
    let tests = vec![
        ("MUGNA NUMERO x\nKATAPUSAN", ErrorCategory::Syntax),
        ("SUGOD\nIPAKITA: 1\n", ErrorCategory::Syntax),
        ("SUGOD\nKUNG (OO) {\nKATAPUSAN", ErrorCategory::Syntax),
        ("SUGOD\nMUGNA NUMERO x\nMUGNA LETRA x\nKATAPUSAN", ErrorCategory::Declaration),
        ("SUGOD\nMUGNA NUMERO x = 'a'\nKATAPUSAN", ErrorCategory::Declaration),
        ("SUGOD\nx = 1\nKATAPUSAN", ErrorCategory::Reference),
        ("SUGOD\nMUGNA LETRA c = 'a'\nIPAKITA: c * 2\nKATAPUSAN", ErrorCategory::Type),
        ("SUGOD\nMUGNA NUMERO x\nDAWAT: x\nKATAPUSAN", ErrorCategory::Input),
        ("SUGOD\nMUGNA NUMERO x = 1\nx = x / 0\nKATAPUSAN", ErrorCategory::Arithmetic),
    ];

    for (source, expected) in tests {
        let (result, _) = run(source, &[]);
        let got = match result {
            Ok(_) => panic!("program should fail:\n{}", source),
            Err(e) => e.category(),
        };
        assert_eq!(expected, got, "expected={}, got={}\n{}", expected, got, source);
    }
}

#[test]
fn partial_output_is_kept() {
    let source = "SUGOD\nIPAKITA: 'one'\nIPAKITA: 'two'\nMUGNA NUMERO x\nDAWAT: x\nIPAKITA: x\nKATAPUSAN";

    let (result, output) = run(source, &["not a number"]);

    let err = match result {
        Ok(_) => panic!("program should fail"),
        Err(e) => e,
    };
    assert_eq!(ErrorKind::InvalidInput, err.kind(), "got={:?}", err.kind());
    assert_eq!(vec!["one", "two"], output, "got={:?}", output);
}

#[test]
fn tokens_end_with_eof() {
    let tokens = tokenize("SUGOD\n-- nothing here\nKATAPUSAN");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        vec![TokenKind::Sugod, TokenKind::Katapusan, TokenKind::Eof],
        kinds,
        "got={:?}",
        kinds
    );
}

#[test]
fn empty_program() -> Result<()> {
    let (result, output) = run("SUGOD\nKATAPUSAN\n", &[]);

    assert!(result?.is_empty());
    assert!(output.is_empty(), "got={:?}", output);

    Ok(())
}
