mod token;

pub use token::{Position, Token, TokenKind, TokenKinds};

use tracing::trace;

/// Converts source text into a flat token stream.
///
/// Lexing never fails: characters the language does not know and string
/// literals that run into the end of input come out as [`TokenKind::Illegal`]
/// tokens, which the parser reports with their position.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    read_position: usize,
    ch: char,
    line: usize,
    column: usize,
    finished: bool,
}

impl Lexer {
    pub fn new(input: &str) -> Lexer {
        let mut lexer = Self {
            input: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: '\0',
            line: 1,
            column: 0,
            finished: false,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        if self.ch == '\n' {
            self.line += 1;
            self.column = 0;
        }

        self.ch = self.peek_nth(0);
        self.position = self.read_position;
        self.read_position += 1;
        self.column += 1;
    }

    fn peek_nth(&self, n: usize) -> char {
        self.input
            .get(self.read_position + n)
            .copied()
            .unwrap_or('\0')
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn follows_ident(&self) -> bool {
        self.position > 0
            && self
                .input
                .get(self.position - 1)
                .is_some_and(|ch| ch.is_alphanumeric() || *ch == '_')
    }

    // `--` is a decrement only right after a name and when nothing but a
    // closing `)`, `}`, `,` or another comment follows it on the line
    fn at_decrement(&self) -> bool {
        if !self.follows_ident() {
            return false;
        }

        let mut offset = 1;
        while matches!(self.peek_nth(offset), ' ' | '\t') {
            offset += 1;
        }

        match self.peek_nth(offset) {
            '\0' | '\n' | '\r' | ')' | '}' | ',' => true,
            '-' => self.peek_nth(offset + 1) == '-',
            _ => false,
        }
    }

    fn skip_whitespace(&mut self) {
        loop {
            while !self.at_end() && self.ch.is_whitespace() {
                self.read_char()
            }

            if self.ch == '-' && self.peek_nth(0) == '-' && !self.at_decrement() {
                while !self.at_end() && self.ch != '\n' {
                    self.read_char()
                }
                continue;
            }

            break;
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let position = self.current_position();

        if self.at_end() {
            return Token::eof(position);
        }

        let kind = match self.ch {
            '=' => self.either('=', TokenKind::Equals, TokenKind::Assign),
            '<' => match self.peek_nth(0) {
                '=' => {
                    self.read_char();
                    TokenKind::LesserEquals
                }
                '>' => {
                    self.read_char();
                    TokenKind::NotEquals
                }
                _ => TokenKind::LesserThan,
            },
            '>' => self.either('=', TokenKind::GreaterEquals, TokenKind::GreaterThan),
            '+' => self.either('+', TokenKind::Increment, TokenKind::Plus),
            '-' => self.either('-', TokenKind::Decrement, TokenKind::Minus),
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '&' => TokenKind::Ampersand,
            '$' => TokenKind::Dollar,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LSquirly,
            '}' => TokenKind::RSquirly,
            '[' if self.peek_nth(1) == ']' => {
                return self.read_escape(position)
            }
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '\'' | '"' => return self.read_string(position),
            ch if ch.is_alphabetic() || ch == '_' => return self.read_ident(position),
            ch if ch.is_ascii_digit() => return self.read_number(position),
            ch => {
                self.read_char();
                return Token::illegal(ch.to_string(), position);
            }
        };

        self.read_char();
        Token::from((kind, position))
    }

    fn either(&mut self, next: char, matched: TokenKind, single: TokenKind) -> TokenKind {
        if self.peek_nth(0) == next {
            self.read_char();
            matched
        } else {
            single
        }
    }

    fn slice(&self, from: usize) -> String {
        self.input[from..self.position].iter().collect()
    }

    fn read_escape(&mut self, position: Position) -> Token {
        self.read_char();
        let escaped = self.ch;
        self.read_char();
        self.read_char();

        Token::new(TokenKind::Escape, escaped.to_string(), position)
    }

    fn read_ident(&mut self, position: Position) -> Token {
        let start = self.position;

        while !self.at_end() && (self.ch.is_alphanumeric() || self.ch == '_') {
            self.read_char()
        }

        let literal = self.slice(start);

        match TokenKind::from_keyword(&literal) {
            Some(kind) => Token::new(kind, literal, position),
            None => Token::new(TokenKind::Ident, literal, position),
        }
    }

    fn read_number(&mut self, position: Position) -> Token {
        let start = self.position;
        let mut kind = TokenKind::IntLiteral;

        while self.ch.is_ascii_digit() {
            self.read_char()
        }

        if self.ch == '.' && self.peek_nth(0).is_ascii_digit() {
            kind = TokenKind::FloatLiteral;
            self.read_char();

            while self.ch.is_ascii_digit() {
                self.read_char()
            }
        }

        Token::new(kind, self.slice(start), position)
    }

    fn read_string(&mut self, position: Position) -> Token {
        let quote = self.ch;
        self.read_char();

        let start = self.position;

        while !self.at_end() && self.ch != quote {
            self.read_char()
        }

        if self.at_end() {
            return Token::illegal(format!("{}{}", quote, self.slice(start)), position);
        }

        let literal = self.slice(start);
        self.read_char();

        Token::new(TokenKind::StringLiteral, literal, position)
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        trace!(token = %token, position = %token.position, "lexed token");

        if token.kind == TokenKind::Eof {
            self.finished = true;
        }

        Some(token)
    }
}

/// Lexes the whole source. The returned stream always ends with one `Eof` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<(TokenKind, String)> {
        tokenize(input)
            .into_iter()
            .map(|token| (token.kind, token.literal.to_string()))
            .collect()
    }

    macro_rules! toks {
        ($($kind:ident $literal:literal),* $(,)?) => {
            vec![$((TokenKind::$kind, $literal.to_string())),*]
        };
    }

    #[test]
    fn test_next_token() {
        let input = r#"-- this is a sample program
SUGOD
    MUGNA NUMERO x, y, z=5
    MUGNA LETRA a_1='n'
    MUGNA TINUOD t="OO"
    MUGNA TIPIK r = 2.75
    x = y = 4
    IPAKITA: x & t & z & $ & a_1 & [#] & "last"
    KUNG (x >= 4 UG DILI (y <> 3)) PUNDOK{
        DAWAT: x
    }
    ALANG SA (i = 1, i <= 3, i++) { x = x % 2 * -1 / 7 }
KATAPUSAN"#;

        let expected = toks![
            Sugod "SUGOD",
            Mugna "MUGNA", Numero "NUMERO", Ident "x", Comma ",", Ident "y", Comma ",",
            Ident "z", Assign "=", IntLiteral "5",
            Mugna "MUGNA", Letra "LETRA", Ident "a_1", Assign "=", StringLiteral "n",
            Mugna "MUGNA", Tinuod "TINUOD", Ident "t", Assign "=", StringLiteral "OO",
            Mugna "MUGNA", Tipik "TIPIK", Ident "r", Assign "=", FloatLiteral "2.75",
            Ident "x", Assign "=", Ident "y", Assign "=", IntLiteral "4",
            Ipakita "IPAKITA", Colon ":", Ident "x", Ampersand "&", Ident "t", Ampersand "&",
            Ident "z", Ampersand "&", Dollar "$", Ampersand "&", Ident "a_1", Ampersand "&",
            Escape "#", Ampersand "&", StringLiteral "last",
            Kung "KUNG", LParen "(", Ident "x", GreaterEquals ">=", IntLiteral "4", Ug "UG",
            Dili "DILI", LParen "(", Ident "y", NotEquals "<>", IntLiteral "3", RParen ")",
            RParen ")", Pundok "PUNDOK", LSquirly "{",
            Dawat "DAWAT", Colon ":", Ident "x",
            RSquirly "}",
            Alang "ALANG", Sa "SA", LParen "(", Ident "i", Assign "=", IntLiteral "1", Comma ",",
            Ident "i", LesserEquals "<=", IntLiteral "3", Comma ",", Ident "i", Increment "++",
            RParen ")", LSquirly "{", Ident "x", Assign "=", Ident "x", Percent "%",
            IntLiteral "2", Asterisk "*", Minus "-", IntLiteral "1", Slash "/", IntLiteral "7",
            RSquirly "}",
            Katapusan "KATAPUSAN",
            Eof "EOF",
        ];

        let got = kinds(input);

        for (i, (expected, got)) in expected.iter().zip(got.iter()).enumerate() {
            assert_eq!(expected, got, "token {}: expected={:?}, got={:?}", i, expected, got);
        }
        assert_eq!(expected.len(), got.len(), "token count differs");
    }

    #[test]
    fn test_decrement_and_comments() {
        let tests = vec![
            ("i--", toks![Ident "i", Decrement "--", Eof "EOF"]),
            ("i -- not a decrement", toks![Ident "i", Eof "EOF"]),
            ("x-- show x", toks![Ident "x", Eof "EOF"]),
            ("i-- -- count down", toks![Ident "i", Decrement "--", Eof "EOF"]),
            ("(i--)", toks![LParen "(", Ident "i", Decrement "--", RParen ")", Eof "EOF"]),
            ("{ i--}", toks![LSquirly "{", Ident "i", Decrement "--", RSquirly "}", Eof "EOF"]),
            ("i--\nx", toks![Ident "i", Decrement "--", Ident "x", Eof "EOF"]),
            ("-- whole line\nx", toks![Ident "x", Eof "EOF"]),
            ("x - 1", toks![Ident "x", Minus "-", IntLiteral "1", Eof "EOF"]),
        ];

        for (input, expected) in tests {
            let got = kinds(input);
            assert_eq!(expected, got, "input {:?}: expected={:?}, got={:?}", input, expected, got);
        }
    }

    #[test]
    fn test_brackets() {
        let tests = vec![
            ("[[]", toks![Escape "[", Eof "EOF"]),
            ("[]]", toks![Escape "]", Eof "EOF"]),
            ("[&]", toks![Escape "&", Eof "EOF"]),
            ("[ab]", toks![LBracket "[", Ident "ab", RBracket "]", Eof "EOF"]),
        ];

        for (input, expected) in tests {
            let got = kinds(input);
            assert_eq!(expected, got, "input {:?}: expected={:?}, got={:?}", input, expected, got);
        }
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let got = kinds("sugod Sugod SUGOD");
        let expected = toks![Ident "sugod", Ident "Sugod", Sugod "SUGOD", Eof "EOF"];

        assert_eq!(expected, got, "expected={:?}, got={:?}", expected, got);
    }

    #[test]
    fn test_illegal_tokens() {
        let got = kinds("x ? 'open");
        let expected = toks![Ident "x", Illegal "?", Illegal "'open", Eof "EOF"];

        assert_eq!(expected, got, "expected={:?}, got={:?}", expected, got);
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize("SUGOD\n  x = 'ka'\nKATAPUSAN");
        let positions: Vec<_> = tokens.iter().map(|t| (t.position.line, t.position.column)).collect();

        assert_eq!(
            vec![(1, 1), (2, 3), (2, 5), (2, 7), (3, 1), (3, 10)],
            positions,
            "unexpected token positions for {:?}",
            tokens
        );
    }
}
