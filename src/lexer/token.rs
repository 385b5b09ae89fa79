use std::{borrow::Cow, fmt::Display};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Eof,
    Illegal,

    Assign,
    Equals,
    NotEquals,
    LesserThan,
    GreaterThan,
    LesserEquals,
    GreaterEquals,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
    Increment,
    Decrement,
    Ampersand,
    Dollar,

    Ident,
    IntLiteral,
    FloatLiteral,
    StringLiteral,
    Escape,

    Comma,
    Colon,

    LParen,
    RParen,
    LSquirly,
    RSquirly,
    LBracket,
    RBracket,

    Sugod,
    Katapusan,
    Mugna,
    Numero,
    Tipik,
    Letra,
    Tinuod,
    Ipakita,
    Dawat,
    Kung,
    Wala,
    Alang,
    Sa,
    Pundok,
    Ug,
    O,
    Dili,
    Oo,
}

impl TokenKind {
    pub fn from_keyword(literal: &str) -> Option<Self> {
        let kind = match literal {
            "SUGOD" => TokenKind::Sugod,
            "KATAPUSAN" => TokenKind::Katapusan,
            "MUGNA" => TokenKind::Mugna,
            "NUMERO" => TokenKind::Numero,
            "TIPIK" => TokenKind::Tipik,
            "LETRA" => TokenKind::Letra,
            "TINUOD" => TokenKind::Tinuod,
            "IPAKITA" => TokenKind::Ipakita,
            "DAWAT" => TokenKind::Dawat,
            "KUNG" => TokenKind::Kung,
            "WALA" => TokenKind::Wala,
            "ALANG" => TokenKind::Alang,
            "SA" => TokenKind::Sa,
            "PUNDOK" => TokenKind::Pundok,
            "UG" => TokenKind::Ug,
            "O" => TokenKind::O,
            "DILI" => TokenKind::Dili,
            "OO" => TokenKind::Oo,
            _ => return None,
        };

        Some(kind)
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Sugod
                | TokenKind::Katapusan
                | TokenKind::Mugna
                | TokenKind::Numero
                | TokenKind::Tipik
                | TokenKind::Letra
                | TokenKind::Tinuod
                | TokenKind::Ipakita
                | TokenKind::Dawat
                | TokenKind::Kung
                | TokenKind::Wala
                | TokenKind::Alang
                | TokenKind::Sa
                | TokenKind::Pundok
                | TokenKind::Ug
                | TokenKind::O
                | TokenKind::Dili
                | TokenKind::Oo
        )
    }

    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Assign
                | TokenKind::Equals
                | TokenKind::NotEquals
                | TokenKind::LesserThan
                | TokenKind::GreaterThan
                | TokenKind::LesserEquals
                | TokenKind::GreaterEquals
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::Percent
                | TokenKind::Increment
                | TokenKind::Decrement
                | TokenKind::Ampersand
                | TokenKind::Dollar
                | TokenKind::Ug
                | TokenKind::O
                | TokenKind::Dili
        )
    }

    pub fn is_punctuation(&self) -> bool {
        matches!(
            self,
            TokenKind::Comma
                | TokenKind::Colon
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LSquirly
                | TokenKind::RSquirly
                | TokenKind::LBracket
                | TokenKind::RBracket
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "Illegal",
            TokenKind::Assign => "Assign",
            TokenKind::Equals => "Equals",
            TokenKind::NotEquals => "NotEquals",
            TokenKind::LesserThan => "LesserThan",
            TokenKind::GreaterThan => "GreaterThan",
            TokenKind::LesserEquals => "LesserEquals",
            TokenKind::GreaterEquals => "GreaterEquals",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Asterisk => "Asterisk",
            TokenKind::Slash => "Slash",
            TokenKind::Percent => "Percent",
            TokenKind::Increment => "Increment",
            TokenKind::Decrement => "Decrement",
            TokenKind::Ampersand => "Ampersand",
            TokenKind::Dollar => "Dollar",
            TokenKind::Ident => "Ident",
            TokenKind::IntLiteral => "IntLiteral",
            TokenKind::FloatLiteral => "FloatLiteral",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::Escape => "Escape",
            TokenKind::Comma => "Comma",
            TokenKind::Colon => "Colon",
            TokenKind::LParen => "LParen",
            TokenKind::RParen => "RParen",
            TokenKind::LSquirly => "LSquirly",
            TokenKind::RSquirly => "RSquirly",
            TokenKind::LBracket => "LBracket",
            TokenKind::RBracket => "RBracket",
            TokenKind::Sugod => "SUGOD",
            TokenKind::Katapusan => "KATAPUSAN",
            TokenKind::Mugna => "MUGNA",
            TokenKind::Numero => "NUMERO",
            TokenKind::Tipik => "TIPIK",
            TokenKind::Letra => "LETRA",
            TokenKind::Tinuod => "TINUOD",
            TokenKind::Ipakita => "IPAKITA",
            TokenKind::Dawat => "DAWAT",
            TokenKind::Kung => "KUNG",
            TokenKind::Wala => "WALA",
            TokenKind::Alang => "ALANG",
            TokenKind::Sa => "SA",
            TokenKind::Pundok => "PUNDOK",
            TokenKind::Ug => "UG",
            TokenKind::O => "O",
            TokenKind::Dili => "DILI",
            TokenKind::Oo => "OO",
        };

        write!(f, "{}", name)
    }
}

/// Set of token kinds a parser position accepts, used for error reporting.
#[derive(Debug, PartialEq, Clone)]
pub struct TokenKinds(Vec<TokenKind>);

impl From<&[TokenKind]> for TokenKinds {
    fn from(value: &[TokenKind]) -> Self {
        Self(value.to_vec())
    }
}

impl Display for TokenKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.0.iter().peekable();

        while let Some(kind) = iter.next() {
            if iter.peek().is_some() {
                write!(f, "{}, ", kind)?;
            } else {
                write!(f, "{}", kind)?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: Cow<'static, str>,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<Cow<'static, str>>, position: Position) -> Self {
        Self {
            kind,
            literal: literal.into(),
            position,
        }
    }

    pub fn eof(position: Position) -> Self {
        Self::new(TokenKind::Eof, "EOF", position)
    }

    pub fn illegal(literal: impl Into<Cow<'static, str>>, position: Position) -> Self {
        Self::new(TokenKind::Illegal, literal, position)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "EOF"),
            kind => write!(f, "{}({})", kind, self.literal),
        }
    }
}

impl From<(TokenKind, Position)> for Token {
    fn from((kind, position): (TokenKind, Position)) -> Self {
        let literal: &'static str = match kind {
            TokenKind::Assign => "=",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "<>",
            TokenKind::LesserThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::LesserEquals => "<=",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Increment => "++",
            TokenKind::Decrement => "--",
            TokenKind::Ampersand => "&",
            TokenKind::Dollar => "$",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LSquirly => "{",
            TokenKind::RSquirly => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Eof => "EOF",
            _ => "",
        };

        Token::new(kind, literal, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classes() {
        // (kind, keyword, operator, punctuation)
        let tests = vec![
            (TokenKind::Sugod, true, false, false),
            (TokenKind::Pundok, true, false, false),
            (TokenKind::Ug, true, true, false),
            (TokenKind::Dili, true, true, false),
            (TokenKind::NotEquals, false, true, false),
            (TokenKind::Decrement, false, true, false),
            (TokenKind::Ampersand, false, true, false),
            (TokenKind::Colon, false, false, true),
            (TokenKind::RBracket, false, false, true),
            (TokenKind::Ident, false, false, false),
            (TokenKind::Escape, false, false, false),
            (TokenKind::Eof, false, false, false),
        ];

        for (kind, keyword, operator, punctuation) in tests {
            let got = (kind.is_keyword(), kind.is_operator(), kind.is_punctuation());
            let expected = (keyword, operator, punctuation);
            assert_eq!(expected, got, "{}: expected={:?}, got={:?}", kind, expected, got);
        }
    }

    #[test]
    fn test_keywords_round_trip() {
        for literal in ["SUGOD", "KATAPUSAN", "KUNG", "WALA", "ALANG", "SA", "OO", "O"] {
            let kind = match TokenKind::from_keyword(literal) {
                Some(kind) => kind,
                None => panic!("{} is not a keyword", literal),
            };
            assert!(kind.is_keyword(), "expected {} to be a keyword", kind);
        }

        assert_eq!(None, TokenKind::from_keyword("sugod"));
    }

    #[test]
    fn test_token_from_kind() {
        let token = Token::from((TokenKind::NotEquals, Position::new(2, 4)));

        assert_eq!(TokenKind::NotEquals, token.kind());
        assert_eq!("<>", token.literal());
        assert_eq!("2:4", token.position.to_string());
    }
}
