use crate::engine::{Engine, ErrorCase};
use crate::keys::{Key, KeyError, parse_keys};
use crate::token::Operator;

fn run(text: &str) -> (Engine, Vec<Result<String, ErrorCase>>) {
    let mut engine = Engine::new();
    let outcomes = parse_keys(text)
        .unwrap_or_default()
        .into_iter()
        .map(|key| engine.press(key))
        .collect();
    (engine, outcomes)
}

#[test]
fn test_parse_spaced_sequence() {
    let result = parse_keys("40 + 6 x 9.3 ÷ 2 =");
    assert!(result.is_ok());
    if let Ok(keys) = result {
        assert_eq!(keys.len(), 11);
        assert_eq!(keys[0], Key::Digit(4));
        assert_eq!(keys[2], Key::Operator(Operator::Add));
        assert_eq!(keys[6], Key::Point);
        assert_eq!(keys[8], Key::Operator(Operator::Divide));
        assert_eq!(keys.last(), Some(&Key::Equals));
    }
}

#[test]
fn test_parse_compact_sequence_and_words() {
    let result = parse_keys("12+3=K ac Del keep");
    assert!(result.is_ok());
    if let Ok(keys) = result {
        assert_eq!(
            keys,
            vec![
                Key::Digit(1),
                Key::Digit(2),
                Key::Operator(Operator::Add),
                Key::Digit(3),
                Key::Equals,
                Key::Keep,
                Key::AllClear,
                Key::Correction,
                Key::Keep,
            ]
        );
    }
}

#[test]
fn test_parse_unknown_key() {
    assert_eq!(
        parse_keys("2 + 3 ^ 2"),
        Err(KeyError::UnknownKey {
            key: '^',
            word: "^".to_string()
        })
    );
}

#[test]
fn test_parse_empty_text() {
    assert_eq!(parse_keys("   "), Ok(Vec::new()));
}

#[test]
fn test_press_full_session() {
    let (engine, outcomes) = run("40 + 6 x 9.3 ÷ 2 =");
    assert!(outcomes.iter().all(Result::is_ok));
    assert_eq!(engine.display(), "40 + 6 x 9.3 ÷ 2 = 67.9");
}

#[test]
fn test_press_keep_and_continue() {
    let (engine, outcomes) = run("3 - 2 = K + 4 =");
    assert!(outcomes.iter().all(Result::is_ok));
    assert_eq!(engine.display(), "1 + 4 = 5");
}

#[test]
fn test_press_reports_rejections() {
    let (engine, outcomes) = run("+ 5 + - 2");
    assert_eq!(outcomes[0], Err(ErrorCase::OperationImpossible));
    assert_eq!(outcomes[3], Err(ErrorCase::WrongOperator));
    assert_eq!(engine.display(), "5 + 2");
}

#[test]
fn test_press_correction_and_clear() {
    let (engine, _) = run("5 + 23 - C");
    assert_eq!(engine.display(), "5 + 23");

    let (engine, outcomes) = run("5 + 2 = AC");
    assert_eq!(outcomes.last(), Some(&Ok(String::new())));
    assert!(engine.is_empty());
}

#[test]
fn test_key_display() {
    assert_eq!(Key::Digit(7).to_string(), "7");
    assert_eq!(Key::Operator(Operator::Divide).to_string(), "÷");
    assert_eq!(Key::AllClear.to_string(), "AC");
    assert!(Key::Point.is_entry());
    assert!(!Key::Equals.is_entry());
}
