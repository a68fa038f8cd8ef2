use std::fs;

use minicalc::{
    Context, Error,
    ast::{BinaryOperator, Expr},
    error::{ParseError, RuntimeError},
    evaluate, get_result,
    interpreter::{lexer::Token, parser::core::MAX_DEPTH},
    parse, parse_strict, tokenize,
};
use walkdir::WalkDir;

fn demo_context() -> Context {
    [("x", 10), ("y", 5), ("z", 2)].into_iter().collect()
}

fn assert_value(src: &str, context: &Context, expected: i64) {
    match get_result(src, context) {
        Ok(value) => assert_eq!(value, expected, "'{src}' evaluated to the wrong value"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match parse(src) {
        Ok(expr) => panic!("'{src}' parsed as {expr} but was expected to fail"),
        Err(e) => e,
    }
}

fn runtime_error(src: &str, context: &Context) -> RuntimeError {
    let expr = parse(src).unwrap_or_else(|e| panic!("'{src}' failed to parse: {e}"));
    match evaluate(&expr, context) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += run_script(&content).unwrap_or_else(|e| panic!("{path:?}: {e}"));
    }

    assert!(count > 0, "No script checks found in tests/scripts");
}

/// Runs a fixture script and returns how many checks it made.
///
/// Line formats: `set NAME VALUE`, `EXPR => VALUE`, `EXPR => error KIND`.
fn run_script(content: &str) -> Result<usize, String> {
    let mut context = Context::new();
    let mut checks = 0;

    for (number, line) in content.lines().enumerate() {
        let number = number + 1;
        let line = line.trim_end();
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix("set ") {
            let (name, value) = rest.split_once(' ')
                                    .ok_or(format!("line {number}: malformed set"))?;
            let value = value.trim()
                             .parse()
                             .map_err(|e| format!("line {number}: bad value: {e}"))?;
            context.set(name, value);
            continue;
        }

        let (source, expected) = line.split_once(" => ")
                                     .ok_or(format!("line {number}: missing ' => '"))?;
        let outcome = get_result(source, &context);
        checks += 1;

        match expected.strip_prefix("error ") {
            Some(kind) => {
                let actual = outcome.map_or_else(|e| error_kind(&e), |v| v.to_string());
                if actual != kind {
                    return Err(format!("line {number}: '{source}' expected error {kind}, got {actual}"));
                }
            },
            None => {
                let expected: i64 =
                    expected.parse()
                            .map_err(|e| format!("line {number}: bad expectation: {e}"))?;
                match outcome {
                    Ok(value) if value == expected => {},
                    other => {
                        return Err(format!("line {number}: '{source}' expected {expected}, got {other:?}"));
                    },
                }
            },
        }
    }

    Ok(checks)
}

fn error_kind(error: &Error) -> String {
    let kind = match error {
        Error::Parse(ParseError::InvalidCharacter { .. }) => "InvalidCharacter",
        Error::Parse(ParseError::LiteralTooLarge { .. }) => "LiteralTooLarge",
        Error::Parse(ParseError::UnexpectedToken { .. }) => "UnexpectedToken",
        Error::Parse(ParseError::UnbalancedParentheses { .. }) => "UnbalancedParentheses",
        Error::Parse(ParseError::NestingTooDeep { .. }) => "NestingTooDeep",
        Error::Parse(ParseError::UnexpectedTrailingTokens { .. }) => "UnexpectedTrailingTokens",
        Error::Runtime(RuntimeError::UndefinedVariable { .. }) => "UndefinedVariable",
        Error::Runtime(RuntimeError::DivisionByZero) => "DivisionByZero",
        Error::Runtime(RuntimeError::Overflow { .. }) => "Overflow",
    };
    kind.to_string()
}

#[test]
fn integer_literals_tokenize_to_one_token() {
    for value in [0, 1, 7, 42, 1_000, 65_536, 9_007_199_254_740_993, i64::MAX] {
        assert_eq!(tokenize(&value.to_string()).unwrap(),
                   vec![(Token::Integer(value), 0)]);
    }
}

#[test]
fn tokenizer_skips_spaces_and_records_positions() {
    let tokens = tokenize("  ab*(c - 12)/ d").unwrap();
    assert_eq!(tokens,
               vec![(Token::Identifier("ab".to_string()), 2),
                    (Token::Star, 4),
                    (Token::LParen, 5),
                    (Token::Identifier("c".to_string()), 6),
                    (Token::Minus, 8),
                    (Token::Integer(12), 10),
                    (Token::RParen, 12),
                    (Token::Slash, 13),
                    (Token::Identifier("d".to_string()), 15)]);
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("   ").unwrap().is_empty());
}

#[test]
fn identifiers_stop_at_digits() {
    assert_eq!(tokenize("x1").unwrap(),
               vec![(Token::Identifier("x".to_string()), 0), (Token::Integer(1), 1)]);
    assert_eq!(tokenize("2ab").unwrap(),
               vec![(Token::Integer(2), 0), (Token::Identifier("ab".to_string()), 1)]);
}

#[test]
fn identifiers_are_case_sensitive() {
    let context: Context = [("x", 1), ("X", 2)].into_iter().collect();
    assert_value("x + X * 10", &context, 21);
}

#[test]
fn invalid_characters_are_reported_with_position() {
    assert_eq!(tokenize("1.5"),
               Err(ParseError::InvalidCharacter { character: '.',
                                                  position:  1, }));
    assert_eq!(tokenize("x # y"),
               Err(ParseError::InvalidCharacter { character: '#',
                                                  position:  2, }));
    assert_eq!(tokenize("$"),
               Err(ParseError::InvalidCharacter { character: '$',
                                                  position:  0, }));
    assert_eq!(tokenize("1\t+ 2"),
               Err(ParseError::InvalidCharacter { character: '\t',
                                                  position:  1, }));
    assert_eq!(tokenize("x + é"),
               Err(ParseError::InvalidCharacter { character: 'é',
                                                  position:  4, }));
}

#[test]
fn oversized_literal_is_an_error() {
    assert_eq!(tokenize("1 + 9223372036854775808"),
               Err(ParseError::LiteralTooLarge { literal:  "9223372036854775808".to_string(),
                                                 position: 4, }));
}

#[test]
fn demonstration_expressions() {
    let context = demo_context();
    assert_value("5 + 3", &Context::new(), 8);
    assert_value("10 - x", &context, 0);
    assert_value("x * y", &context, 50);
    assert_value("y / z", &context, 2);
    assert_value("(x + y) * z", &context, 30);
    assert_value("(x + y) * (z + 1)", &context, 45);
    assert_value("100 / (x - y)", &context, 20);
    assert_value("x + y + z", &context, 17);
    assert_value("x * y / z", &context, 25);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let context = demo_context();
    assert_value("x + y * z", &context, 20);
    assert_value("x * y + z", &context, 52);
    assert_value("x - y / z", &context, 8);

    let expr = parse("x + y * z").unwrap();
    assert_eq!(expr.operator(), Some(BinaryOperator::Add));
}

#[test]
fn operators_are_left_associative() {
    assert_value("10 - 4 - 3", &Context::new(), 3);
    assert_value("100 / 10 / 5", &Context::new(), 2);
    assert_value("8 / 2 * 4", &Context::new(), 16);

    assert_eq!(parse("a - b - c").unwrap(),
               Expr::binary(BinaryOperator::Sub,
                            Expr::binary(BinaryOperator::Sub,
                                         Expr::Variable("a".to_string()),
                                         Expr::Variable("b".to_string())),
                            Expr::Variable("c".to_string())));
}

#[test]
fn division_floors_toward_negative_infinity() {
    assert_value("7 / 2", &Context::new(), 3);
    assert_value("(0 - 7) / 2", &Context::new(), -4);
    assert_value("7 / (0 - 2)", &Context::new(), -4);
    assert_value("(0 - 7) / (0 - 2)", &Context::new(), 3);
    assert_value("(0 - 8) / 2", &Context::new(), -4);
}

#[test]
fn division_by_zero_is_error() {
    let context = demo_context();
    assert_eq!(runtime_error("10 / 0", &context), RuntimeError::DivisionByZero);
    assert_eq!(runtime_error("x / (y - 5)", &context), RuntimeError::DivisionByZero);
}

#[test]
fn divisor_is_evaluated_before_dividend() {
    assert_eq!(runtime_error("unknown / 0", &Context::new()),
               RuntimeError::DivisionByZero);
    assert_eq!(runtime_error("unknown / missing", &Context::new()),
               RuntimeError::UndefinedVariable { name: "missing".to_string() });
    assert_eq!(runtime_error("unknown + missing", &Context::new()),
               RuntimeError::UndefinedVariable { name: "unknown".to_string() });
}

#[test]
fn undefined_variable_is_error() {
    let context: Context = [("x", 10)].into_iter().collect();
    assert_eq!(runtime_error("x + unknown", &context),
               RuntimeError::UndefinedVariable { name: "unknown".to_string() });
}

#[test]
fn overflow_is_error() {
    let context: Context = [("big", i64::MAX), ("small", i64::MIN)].into_iter().collect();
    assert!(matches!(runtime_error("big + 1", &context),
                     RuntimeError::Overflow { op: BinaryOperator::Add, .. }));
    assert!(matches!(runtime_error("small - 1", &context),
                     RuntimeError::Overflow { op: BinaryOperator::Sub, .. }));
    assert!(matches!(runtime_error("big * 2", &context),
                     RuntimeError::Overflow { op: BinaryOperator::Mul, .. }));
    assert_eq!(runtime_error("small / (0 - 1)", &context),
               RuntimeError::Overflow { left:  i64::MIN,
                                        op:    BinaryOperator::Div,
                                        right: -1, });
}

#[test]
fn unbalanced_parentheses_is_error() {
    assert_eq!(parse_error("(x + y"),
               ParseError::UnbalancedParentheses { position: 0 });
    assert_eq!(parse_error("2 * ((x + y) * 3"),
               ParseError::UnbalancedParentheses { position: 4 });
    assert_eq!(parse_error("(1 2)"),
               ParseError::UnbalancedParentheses { position: 0 });
}

#[test]
fn incomplete_expressions_are_unexpected_tokens() {
    assert_eq!(parse_error("5 +"),
               ParseError::UnexpectedToken { token:    None,
                                             position: 3, });
    assert_eq!(parse_error("x *"),
               ParseError::UnexpectedToken { token:    None,
                                             position: 3, });
    assert_eq!(parse_error(""),
               ParseError::UnexpectedToken { token:    None,
                                             position: 0, });
    assert_eq!(parse_error("5 + * 3"),
               ParseError::UnexpectedToken { token:    Some("*".to_string()),
                                             position: 4, });
    assert_eq!(parse_error("()"),
               ParseError::UnexpectedToken { token:    Some(")".to_string()),
                                             position: 1, });
    assert_eq!(parse_error("-5"),
               ParseError::UnexpectedToken { token:    Some("-".to_string()),
                                             position: 0, });
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(parse_error("5 +").to_string(),
               "expected a number, variable or '(' but found end of input at position 3");
    assert_eq!(parse_error("5 + * 3").to_string(),
               "expected a number, variable or '(' but found '*' at position 4");
    assert_eq!(parse_error("(x + y").to_string(),
               "expected ')' to close the '(' at position 0");
    assert_eq!(runtime_error("x + unknown", &demo_context()).to_string(),
               "variable 'unknown' is not defined");
    assert_eq!(get_result("10 / 0", &Context::new()).unwrap_err().to_string(),
               "division by zero");
}

#[test]
fn trailing_tokens_are_ignored_by_parse() {
    let context = demo_context();
    assert_eq!(parse("5 3").unwrap(), Expr::Number(5));
    assert_eq!(parse("x)").unwrap(), Expr::Variable("x".to_string()));
    assert_value("(x + y)) * 100", &context, 15);
    assert_value("x1", &context, 10);
}

#[test]
fn trailing_tokens_are_rejected_by_parse_strict() {
    assert_eq!(parse_strict("5 3"),
               Err(ParseError::UnexpectedTrailingTokens { token:    "3".to_string(),
                                                          position: 2, }));
    assert_eq!(parse_strict("x)"),
               Err(ParseError::UnexpectedTrailingTokens { token:    ")".to_string(),
                                                          position: 1, }));
    assert_eq!(parse_strict("(x + y) * z"), parse("(x + y) * z"));
    assert_eq!(parse_strict("(x + y"),
               Err(ParseError::UnbalancedParentheses { position: 0 }));
}

#[test]
fn evaluation_is_repeatable() {
    let context = demo_context();
    let expr = parse("(x + y) * z - x / y").unwrap();
    let first = evaluate(&expr, &context);
    assert_eq!(first, Ok(28));
    assert_eq!(evaluate(&expr, &context), first);
    assert_eq!(context, demo_context());
}

#[test]
fn literal_trees_ignore_the_context() {
    let expr = parse("(12 + 30) * 2 / (9 - 4)").unwrap();
    let populated: Context = [("a", 1), ("b", -7), ("x", 3)].into_iter().collect();
    assert_eq!(evaluate(&expr, &Context::new()), Ok(16));
    assert_eq!(evaluate(&expr, &populated), Ok(16));
    assert_eq!(evaluate(&expr, &demo_context()), Ok(16));
}

#[test]
fn one_tree_many_contexts() {
    let expr = parse("x * x - 1").unwrap();
    for x in [-3, 0, 1, 12] {
        let context: Context = [("x", x)].into_iter().collect();
        assert_eq!(evaluate(&expr, &context), Ok(x * x - 1));
    }
}

#[test]
fn context_set_get_remove() {
    let mut context = Context::new();
    assert!(context.is_empty());
    assert_eq!(context.get("x"),
               Err(RuntimeError::UndefinedVariable { name: "x".to_string() }));

    assert_eq!(context.set("x", 1), None);
    assert_eq!(context.set("x", 2), Some(1));
    assert_eq!(context.get("x"), Ok(2));
    assert!(context.contains("x"));

    context.set("a", 9);
    assert_eq!(context.iter().collect::<Vec<_>>(), vec![("a", 9), ("x", 2)]);
    assert_eq!(context.len(), 2);

    assert_eq!(context.remove("x"), Some(2));
    assert_eq!(context.remove("x"), None);
    assert!(!context.contains("x"));
}

#[test]
fn display_round_trips_through_parse() {
    for src in ["x + y * z", "(x + y) * z", "a - b - c", "a - (b - c)", "100 / (x - y) / 2", "42"] {
        let expr = parse(src).unwrap();
        let rendered = expr.to_string();
        assert_eq!(parse_strict(&rendered).unwrap(), expr, "'{src}' rendered as '{rendered}'");
    }
    assert_eq!(parse("x + y * z").unwrap().to_string(), "(x + (y * z))");
}

#[test]
fn variables_are_listed_in_order() {
    assert_eq!(parse("b * (a + b) - c / a").unwrap().variables(), vec!["b", "a", "c"]);
    assert!(parse("1 + 2").unwrap().variables().is_empty());
}

#[test]
fn parse_errors_are_distinguishable_from_runtime_errors() {
    assert!(matches!(get_result("(1 + 2", &Context::new()),
                     Err(Error::Parse(ParseError::UnbalancedParentheses { .. }))));
    assert!(matches!(get_result("1 / 0", &Context::new()),
                     Err(Error::Runtime(RuntimeError::DivisionByZero))));
}

fn sum_of_ones(terms: usize) -> String {
    vec!["1"; terms].join(" + ")
}

#[test]
fn long_operator_chains_evaluate_up_to_the_depth_limit() {
    let expr = parse(&sum_of_ones(MAX_DEPTH)).unwrap();
    assert_eq!(evaluate(&expr, &Context::new()), Ok(256));
    assert_eq!(parse_strict(&expr.to_string()), Ok(expr));
}

#[test]
fn long_operator_chains_past_the_limit_are_rejected() {
    // "1 + " repeats every four bytes; the 256th '+' would make depth 257.
    assert_eq!(parse_error(&sum_of_ones(MAX_DEPTH + 1)),
               ParseError::NestingTooDeep { position: 4 * MAX_DEPTH - 2 });
    assert!(matches!(get_result(&sum_of_ones(5_000), &Context::new()),
                     Err(Error::Parse(ParseError::NestingTooDeep { .. }))));
    assert!(matches!(parse(&sum_of_ones(200_000)),
                     Err(ParseError::NestingTooDeep { .. })));
    assert!(matches!(parse(&vec!["x"; 5_000].join(" * ")),
                     Err(ParseError::NestingTooDeep { .. })));
}

#[test]
fn deep_parentheses_are_rejected() {
    let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    assert_value(&nested(MAX_DEPTH), &Context::new(), 1);
    assert_eq!(parse_error(&nested(MAX_DEPTH + 1)),
               ParseError::NestingTooDeep { position: MAX_DEPTH });
    assert_eq!(parse_error(&nested(100_000)),
               ParseError::NestingTooDeep { position: MAX_DEPTH });
    assert_eq!(parse_error(&nested(100_000)).to_string(),
               "expression nested too deeply at position 256");
}

#[test]
fn depth_counts_the_deepest_branch() {
    // Balanced trees stay shallow even with many operators.
    let mut source = "1".to_string();
    for _ in 0..8 {
        source = format!("({source}) + ({source})");
    }
    assert_value(&source, &Context::new(), 256);

    let right_deep = format!("{}{}", "1 + (".repeat(200), "1".to_string() + &")".repeat(200));
    assert_value(&right_deep, &Context::new(), 201);
}
