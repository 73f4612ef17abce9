// Lexer for the textual formula syntax
//
// Accepted operator spellings:
//   NOT:  ! ~ NOT      AND:  & && * AND      OR:  | || + OR      XOR:  ^ XOR
// plus parentheses, identifiers, and the constants 0/1/true/false.
// Keyword forms are matched case-insensitively and must be bounded by
// non-alphanumeric characters. Unknown characters are silently skipped.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Not,
    And,
    Or,
    Xor,
    LParen,
    RParen,
    Ident(String),
    Const(bool),
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Not => write!(f, "NOT"),
            Token::And => write!(f, "AND"),
            Token::Or => write!(f, "OR"),
            Token::Xor => write!(f, "XOR"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Ident(name) => write!(f, "{}", name),
            Token::Const(true) => write!(f, "1"),
            Token::Const(false) => write!(f, "0"),
            Token::Eof => write!(f, "EOF"),
        }
    }
}

/// A token together with the character position it starts at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub position: usize,
}

#[derive(Debug)]
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(ch) = self.current() {
            if ch.is_alphanumeric() || ch == '_' {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        word
    }

    fn next_spanned(&mut self) -> SpannedToken {
        loop {
            self.skip_whitespace();
            let start = self.position;

            let Some(ch) = self.current() else {
                return SpannedToken {
                    token: Token::Eof,
                    position: start,
                };
            };

            if ch.is_alphabetic() || ch == '_' {
                let word = self.read_word();
                let token = match word.to_ascii_lowercase().as_str() {
                    "not" => Token::Not,
                    "and" => Token::And,
                    "or" => Token::Or,
                    "xor" => Token::Xor,
                    "true" => Token::Const(true),
                    "false" => Token::Const(false),
                    _ => Token::Ident(word),
                };
                return SpannedToken { token, position: start };
            }

            let token = match ch {
                '0' => {
                    self.advance();
                    Some(Token::Const(false))
                }
                '1' => {
                    self.advance();
                    Some(Token::Const(true))
                }
                '!' | '~' => {
                    self.advance();
                    Some(Token::Not)
                }
                '&' => {
                    self.advance();
                    if self.current() == Some('&') {
                        self.advance();
                    }
                    Some(Token::And)
                }
                '*' => {
                    self.advance();
                    Some(Token::And)
                }
                '|' => {
                    self.advance();
                    if self.current() == Some('|') {
                        self.advance();
                    }
                    Some(Token::Or)
                }
                '+' => {
                    self.advance();
                    Some(Token::Or)
                }
                '^' => {
                    self.advance();
                    Some(Token::Xor)
                }
                '(' => {
                    self.advance();
                    Some(Token::LParen)
                }
                ')' => {
                    self.advance();
                    Some(Token::RParen)
                }
                _ => {
                    // Unknown character: skip it silently
                    self.advance();
                    None
                }
            };

            if let Some(token) = token {
                return SpannedToken { token, position: start };
            }
        }
    }

    pub fn tokenize(&mut self) -> Vec<SpannedToken> {
        let mut tokens = Vec::new();
        loop {
            let spanned = self.next_spanned();
            let is_eof = matches!(spanned.token, Token::Eof);
            tokens.push(spanned);
            if is_eof {
                break;
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        Lexer::new(input)
            .tokenize()
            .into_iter()
            .map(|spanned| spanned.token)
            .collect()
    }

    #[test]
    fn test_symbol_operators() {
        for (input, expected) in [
            ("!", Token::Not),
            ("~", Token::Not),
            ("&", Token::And),
            ("&&", Token::And),
            ("*", Token::And),
            ("|", Token::Or),
            ("||", Token::Or),
            ("+", Token::Or),
            ("^", Token::Xor),
        ] {
            assert_eq!(tokens(input), vec![expected, Token::Eof], "input {:?}", input);
        }
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(tokens("NOT"), vec![Token::Not, Token::Eof]);
        assert_eq!(tokens("and"), vec![Token::And, Token::Eof]);
        assert_eq!(tokens("Or"), vec![Token::Or, Token::Eof]);
        assert_eq!(tokens("xOr"), vec![Token::Xor, Token::Eof]);
        assert_eq!(tokens("TRUE"), vec![Token::Const(true), Token::Eof]);
        assert_eq!(tokens("False"), vec![Token::Const(false), Token::Eof]);
    }

    #[test]
    fn test_keyword_bounded_by_identifier_chars() {
        // "nota" is one identifier, not NOT followed by a
        assert_eq!(
            tokens("nota"),
            vec![Token::Ident("nota".to_string()), Token::Eof]
        );
        assert_eq!(
            tokens("android"),
            vec![Token::Ident("android".to_string()), Token::Eof]
        );
    }

    #[test]
    fn test_identifiers_preserve_case() {
        assert_eq!(
            tokens("Flag_1"),
            vec![Token::Ident("Flag_1".to_string()), Token::Eof]
        );
    }

    #[test]
    fn test_constants() {
        assert_eq!(tokens("0"), vec![Token::Const(false), Token::Eof]);
        assert_eq!(tokens("1"), vec![Token::Const(true), Token::Eof]);
    }

    #[test]
    fn test_unknown_characters_skipped() {
        assert_eq!(
            tokens("a # b"),
            vec![
                Token::Ident("a".to_string()),
                Token::Ident("b".to_string()),
                Token::Eof
            ]
        );
        assert_eq!(tokens("@%$"), vec![Token::Eof]);
    }

    #[test]
    fn test_positions() {
        let spanned = Lexer::new("a & b").tokenize();
        let positions: Vec<usize> = spanned.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 2, 4, 5]);
    }

    #[test]
    fn test_complex_expression() {
        assert_eq!(
            tokens("!(a && b) + c ^ 1"),
            vec![
                Token::Not,
                Token::LParen,
                Token::Ident("a".to_string()),
                Token::And,
                Token::Ident("b".to_string()),
                Token::RParen,
                Token::Or,
                Token::Ident("c".to_string()),
                Token::Xor,
                Token::Const(true),
                Token::Eof
            ]
        );
    }
}
