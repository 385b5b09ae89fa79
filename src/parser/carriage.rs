use crate::{
    error::{Error, Result},
    lexer::{Token, TokenKind},
};

use super::Precedence;

/// Cursor over a token stream with arbitrary lookahead. The stream is
/// expected to end with an `Eof` token, which the cursor never moves past.
pub struct Carriage {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Carriage {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, cursor: 0 }
    }
}

impl Carriage {
    pub fn next_token(&mut self) -> Result<Token> {
        let token = match self.tokens.get(self.cursor) {
            Some(token) => token.clone(),
            None => return Err(Error::eof()),
        };

        if token.kind != TokenKind::Eof {
            self.cursor += 1;
        }

        Ok(token)
    }

    pub fn peek_token(&self) -> Result<&Token> {
        match self.tokens.get(self.cursor) {
            Some(token) => Ok(token),
            None => Err(Error::eof()),
        }
    }

    /// `peek_nth(0)` is the same token as `peek_token`.
    pub fn peek_nth(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.cursor + n)
    }

    pub fn peek_precedence(&self) -> Result<Precedence> {
        Ok(Precedence::from(self.peek_token()?))
    }

    pub fn expect_tokens(&mut self, tokens: &[TokenKind]) -> Result<Token> {
        let peek = self.peek_token()?;

        for token in tokens {
            if &peek.kind == token {
                return self.next_token();
            }
        }

        Err(Error::expected_token(peek, tokens.into()))
    }

    pub fn is_peek_token(&self, token: TokenKind) -> bool {
        match self.tokens.get(self.cursor) {
            Some(peek) => peek.kind == token,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, lexer::tokenize};

    #[test]
    fn test_cursor_stops_at_eof() {
        let mut carriage = Carriage::new(tokenize("x"));

        let token = carriage.next_token().unwrap();
        assert_eq!(TokenKind::Ident, token.kind, "expected=Ident, got={}", token.kind);

        for _ in 0..3 {
            let token = carriage.next_token().unwrap();
            assert_eq!(TokenKind::Eof, token.kind, "expected=Eof, got={}", token.kind);
        }
    }

    #[test]
    fn test_lookahead() {
        let carriage = Carriage::new(tokenize("KUNG DILI (a)"));

        let kinds: Vec<Option<TokenKind>> =
            (0..6).map(|n| carriage.peek_nth(n).map(|t| t.kind)).collect();
        let expected = vec![
            Some(TokenKind::Kung),
            Some(TokenKind::Dili),
            Some(TokenKind::LParen),
            Some(TokenKind::Ident),
            Some(TokenKind::RParen),
            Some(TokenKind::Eof),
        ];

        assert_eq!(expected, kinds, "expected={:?}, got={:?}", expected, kinds);
        assert_eq!(None, carriage.peek_nth(6).map(|t| t.kind));
    }

    #[test]
    fn test_expect_tokens() {
        let mut carriage = Carriage::new(tokenize(": x"));

        let colon = carriage.expect_tokens(&[TokenKind::Colon]).unwrap();
        assert_eq!(TokenKind::Colon, colon.kind);

        let err = match carriage.expect_tokens(&[TokenKind::Comma, TokenKind::Assign]) {
            Ok(token) => panic!("expected an error. got={}", token),
            Err(e) => e,
        };
        assert_eq!(ErrorKind::ExpectToken, err.kind(), "got={:?}", err.kind());
        assert!(carriage.is_peek_token(TokenKind::Ident), "failed expect must not consume");
    }
}
