use crate::token::{Numeral, Operator, Token, TokenError, tokenize};

#[test]
fn test_tokenize_empty_buffer() {
    let result = tokenize("");
    assert!(result.is_ok());
    if let Ok(tokens) = result {
        assert!(tokens.is_empty());
    }
}

#[test]
fn test_tokenize_expression_with_trailing_operator() {
    let result = tokenize("5 + 23 - ");
    assert!(result.is_ok());
    if let Ok(tokens) = result {
        assert_eq!(tokens.len(), 4);
        assert!(matches!(&tokens[0], Token::Number(n) if n.value() == 5.0));
        assert_eq!(tokens[1], Token::Operator(Operator::Add));
        assert!(matches!(&tokens[2], Token::Number(n) if n.literal() == "23"));
        assert_eq!(tokens[3], Token::Operator(Operator::Subtract));
    }
}

#[test]
fn test_tokenize_evaluated_buffer() {
    let result = tokenize("3 - 2 = 1");
    assert!(result.is_ok());
    if let Ok(tokens) = result {
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[3], Token::ResultMarker);
        assert!(matches!(tokens.last(), Some(Token::Number(n)) if n.literal() == "1"));
    }
}

#[test]
fn test_tokenize_rejects_unknown_symbols() {
    assert_eq!(
        tokenize("10 / 2"),
        Err(TokenError::UnknownOperator("/".to_string()))
    );
}

#[test]
fn test_numeral_points() {
    let result = "12.".parse::<Numeral>();
    assert!(result.is_ok());
    if let Ok(n) = result {
        assert!(n.has_point());
        assert!(n.ends_with_point());
        assert_eq!(n.value(), 12.0);
    }

    let result = "9.3".parse::<Numeral>();
    assert!(result.is_ok());
    if let Ok(n) = result {
        assert!(n.has_point());
        assert!(!n.ends_with_point());
    }
}

#[test]
fn test_numeral_accepts_negative_result() {
    let result = "-3.5".parse::<Numeral>();
    assert!(result.is_ok());
    if let Ok(n) = result {
        assert_eq!(n.value(), -3.5);
    }
}

#[test]
fn test_numeral_rejects_malformed_text() {
    assert!("".parse::<Numeral>().is_err());
    assert!(".".parse::<Numeral>().is_err());
    assert!("-".parse::<Numeral>().is_err());
    assert!("1..2".parse::<Numeral>().is_err());
    assert!("1e5".parse::<Numeral>().is_err());
    assert!("inf".parse::<Numeral>().is_err());
}

#[test]
fn test_operator_symbols() {
    for op in Operator::ALL {
        assert_eq!(op.symbol().parse::<Operator>(), Ok(op));
    }
    assert!(Operator::Multiply.is_priority());
    assert!(Operator::Divide.is_priority());
    assert!(!Operator::Add.is_priority());
    assert!(!Operator::Subtract.is_priority());
}

#[test]
fn test_operator_apply() {
    assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
    assert_eq!(Operator::Subtract.apply(5.0, 2.0), 3.0);
    assert_eq!(Operator::Multiply.apply(6.0, 3.0), 18.0);
    assert_eq!(Operator::Divide.apply(10.0, 2.0), 5.0);
}
