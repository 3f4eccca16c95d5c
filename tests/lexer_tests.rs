use cutexpr::{LexError, Token, TokenKind, tokenize};

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn tokenizes_two_char_operators() {
    use TokenKind::*;
    assert_eq!(kinds("a<=b"), vec![Ident, Le, Ident]);
    assert_eq!(kinds("a>=b"), vec![Ident, Ge, Ident]);
    assert_eq!(kinds("a==b"), vec![Ident, EqEq, Ident]);
    assert_eq!(kinds("x!=1"), vec![Ident, NotEq, Num]);
    assert_eq!(kinds("a&&b||c"), vec![Ident, AndAnd, Ident, OrOr, Ident]);
    assert_eq!(kinds("!(a<b)"), vec![Not, LParen, Ident, Lt, Ident, RParen]);
}

#[test]
fn tokens_carry_text_and_offset() {
    let tokens = tokenize("hitsAna.energy > 1e-3").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Ident, "hitsAna.energy", 0),
            Token::new(TokenKind::Gt, ">", 15),
            Token::new(TokenKind::Num, "1e-3", 17),
        ]
    );
    assert_eq!(tokens[0].to_string(), "hitsAna.energy");
}

#[test]
fn operators_split_words() {
    let tokens = tokenize("x_1*(y-2)").unwrap();
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["x_1", "*", "(", "y", "-", "2", ")"]);
}

#[test]
fn whitespace_only_yields_no_tokens() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize(" \t\n").unwrap().is_empty());
}

#[test]
fn lone_pair_characters_are_rejected() {
    assert_eq!(
        tokenize("a = b").unwrap_err(),
        LexError::IncompleteOperator {
            found: '=',
            expected: '=',
            offset: 2
        }
    );
    assert_eq!(
        tokenize("a & b").unwrap_err(),
        LexError::IncompleteOperator {
            found: '&',
            expected: '&',
            offset: 2
        }
    );
    assert_eq!(
        tokenize("a |").unwrap_err(),
        LexError::IncompleteOperator {
            found: '|',
            expected: '|',
            offset: 2
        }
    );
}

#[test]
fn not_followed_by_space_then_equals_fails() {
    assert!(tokenize("5 ! = 3").is_err());
    assert_eq!(kinds("5 != 3"), vec![TokenKind::Num, TokenKind::NotEq, TokenKind::Num]);
}

#[test]
fn offsets_are_byte_offsets() {
    let tokens = tokenize("é + 1").unwrap();
    assert_eq!(tokens[0].text, "é");
    assert_eq!(tokens[1].offset, 3);
    assert_eq!(tokens[2].offset, 5);
}

#[test]
fn malformed_number_reports_word() {
    assert_eq!(
        tokenize("1 + 2x").unwrap_err(),
        LexError::MalformedNumber {
            text: "2x".into(),
            offset: 4
        }
    );
}
