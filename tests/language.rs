use std::fs::{self};

use mapscript::{
    Context, Error, Position, Value,
    error::{EvalError, LexError, ParseError},
    evaluate, evaluate_assignments,
    interpreter::lexer::is_identifier,
    parse_assignments, parse_expression,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;
    let ctx = Context::with_builtins();

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for code in extract_dsl_blocks(&content) {
            for line in code.lines().map(str::trim).filter(|line| !line.is_empty()) {
                count += 1;
                match evaluate(line, &ctx) {
                    Ok(value) if value.is_true() => {},
                    Ok(_) => panic!("Example `{line}` in {path:?} evaluated to none"),
                    Err(e) => panic!("Example `{line}` in {path:?} failed:\n{e}"),
                }
            }
        }
    }

    assert!(count > 0, "No mapscript examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```mapscript") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_success(src: &str) -> Value {
    evaluate(src, &Context::with_builtins()).unwrap_or_else(|e| panic!("Expression `{src}` failed: {e}"))
}

fn assert_failure(src: &str) -> Error {
    match evaluate(src, &Context::with_builtins()) {
        Ok(value) => panic!("Expression `{src}` succeeded with '{value}' but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_prints(src: &str, expected: &str) {
    assert_eq!(assert_success(src).to_string(), expected, "while evaluating `{src}`");
}

#[test]
fn arithmetic_and_precedence() {
    assert_eq!(assert_success("2 + 3 * 4"), Value::Number(14.0));
    assert_eq!(assert_success("(2 + 3) * 4"), Value::Number(20.0));
    assert_prints("10 - 4 - 3", "3");
    assert_prints("64 / 4 / 2", "8");
    assert_prints("2 * 3 % 4", "2");
    assert_prints("-2 * 3", "-6");
    assert_prints("2 - -3", "5");
    assert_prints("1 + 2 * 3 == 7", "1");
    assert_prints("1 == 2 + 3 * 4 > 5", "1");
    assert_prints("0 == 2 + 3 * 4 > 5", "");
}

#[test]
fn number_formatting_follows_ieee() {
    assert_prints("1 / 0", "inf");
    assert_prints("-1 / 0", "-inf");
    assert_prints("0 / 0", "NaN");
    assert_prints("3 / 2", "1.5");
    assert_prints("-1 / 4", "-0.25");
    assert_prints("-7 % 3", "-1");
    assert_prints("7.5 % 2", "1.5");
}

#[test]
fn both_conditional_forms_agree() {
    assert_eq!(assert_success("1 if 2 > 1 else 0"), Value::Number(1.0));
    assert_eq!(assert_success("2 > 1 ? 1 : 0"), Value::Number(1.0));
    assert_prints("none ? 1 : none ? 2 : 3", "3");
    assert_prints("'a' if none else 'b' if 1 else 'c'", "b");
    assert_prints("1 + 1 if 0 else 5", "2");
    assert_prints("(1 ? 2 : 3) * 10", "20");
}

#[test]
fn only_the_taken_branch_is_evaluated() {
    assert_prints("1 ? 'yes' : missing()", "yes");
    assert_prints("missing() if none else 'no'", "no");
    assert!(matches!(assert_failure("none ? 1 : missing()"), Error::Eval(EvalError::NotCallable { .. })));
}

#[test]
fn logical_operators_short_circuit() {
    let mut ctx = Context::with_builtins();
    ctx.bind("f", Value::None);

    assert_eq!(evaluate("f and anything_that_would_error()", &ctx).unwrap(), Value::None);
    assert_eq!(evaluate("1 or anything_that_would_error()", &ctx).unwrap(), Value::Number(1.0));
    assert!(evaluate("1 and anything_that_would_error()", &ctx).is_err());

    assert_eq!(evaluate("f && anything_that_would_error()", &ctx).unwrap(), Value::None);
    assert_eq!(evaluate("none && anything_that_would_error()", &ctx).unwrap(), Value::None);
    assert_eq!(evaluate("1 || anything_that_would_error()", &ctx).unwrap(), Value::Number(1.0));
    assert!(evaluate("f || anything_that_would_error()", &ctx).is_err());
}

#[test]
fn logical_operators_yield_an_operand() {
    assert_prints("2 and 3", "3");
    assert_prints("none and 3", "");
    assert_prints("none or 'fallback'", "fallback");
    assert_prints("'first' || 'second'", "first");
    assert_prints("0 && 'zero is true'", "zero is true");
    assert_prints("1 or none and none", "1");
}

#[test]
fn only_none_is_false() {
    assert!(Value::Number(0.0).is_true());
    assert!(Value::from("").is_true());
    assert!(!Value::None.is_true());

    assert_eq!(assert_success("!0"), Value::None);
    assert_eq!(assert_success("!''"), Value::None);
    assert_eq!(assert_success("!none"), Value::Number(1.0));
    assert_eq!(assert_success("!!5"), Value::Number(1.0));
}

#[test]
fn unresolved_names_are_none() {
    assert_eq!(assert_success("undefined_name"), Value::None);
    assert_prints("undefined_name", "");
    assert_prints("undefined_name or 4", "4");
}

#[test]
fn keywords_ignore_case() {
    assert_prints("1 AND 2", "2");
    assert_prints("NONE Or 3", "3");
    assert_prints("'x' If 1 ELSE 'y'", "x");
    assert_eq!(assert_success("None"), Value::None);
}

#[test]
fn comparisons_and_equality() {
    assert_prints("[1, 2] == [1, 2]", "1");
    assert_prints("[1, 2] == [1, 2, 3]", "");
    assert_prints("'1' == 1", "");
    assert_prints("'1' != 1", "1");
    assert_prints("none == none", "1");
    assert_prints("'a' == 'a'", "1");
    assert_prints("2 >= 2", "1");
    assert_prints("2 < 1", "");
    assert!(matches!(assert_failure("'a' < 'b'"), Error::Eval(EvalError::ExpectedNumber { .. })));
}

#[test]
fn vectors_and_indexing() {
    assert_eq!(assert_success("[1,2,3][1]"), Value::Number(2.0));
    assert_prints("[1, 2, 3]", "1 2 3");
    assert_prints("[]", "");
    assert_prints("[0.5, -1]", "0.5 -1");
    assert_prints("[10, 20][1 + 0]", "20");
    assert_prints("-[1, 2][1]", "-2");
    assert_prints("[[1, 2][0], 5]", "1 5");

    let mut ctx = Context::new();
    ctx.bind("origin", [64.0, 32.0, 16.0]);
    assert_eq!(evaluate("origin[2]", &ctx).unwrap(), Value::Number(16.0));
    assert_eq!(evaluate("origin.y", &ctx).unwrap(), Value::Number(32.0));
}

#[test]
fn bad_indexing_is_error() {
    assert!(matches!(assert_failure("[1, 2][2]"),
                     Error::Eval(EvalError::IndexOutOfBounds { index: 2, length: 2, .. })));
    assert!(matches!(assert_failure("[1, 2][-1]"), Error::Eval(EvalError::InvalidIndex { .. })));
    assert!(matches!(assert_failure("[1, 2][0.5]"), Error::Eval(EvalError::InvalidIndex { .. })));
    assert!(matches!(assert_failure("5[0]"), Error::Eval(EvalError::ExpectedVector { .. })));
    assert!(matches!(assert_failure("missing[0]"), Error::Eval(EvalError::ExpectedVector { .. })));
    assert!(matches!(assert_failure("[1, 'a']"), Error::Eval(EvalError::ExpectedNumber { .. })));
}

#[test]
fn strings_are_verbatim() {
    assert_eq!(assert_success("'a b'"), Value::from("a b"));
    assert_prints("'no \\n escapes'", "no \\n escapes");
    assert_prints("'two\nlines'", "two\nlines");
    assert!(matches!(assert_failure("'a' + 'b'"), Error::Eval(EvalError::ExpectedNumber { .. })));
}

#[test]
fn string_members() {
    assert_prints("'func_detail'.length", "11");
    assert_prints("'héllo'.length", "5");
    assert_prints("'abc'.upper()", "ABC");
    assert_prints("'ABC'.lower()", "abc");
    assert_prints("'  pad  '.trim()", "pad");
    assert_prints("'abc'.substr(1, 1)", "b");
    assert_prints("'abc'.substr(5)", "");
    assert_prints("'a-b-c'.replace('-', '_')", "a_b_c");
    assert_prints("'light_spot'.startswith('light')", "1");
    assert_prints("'light_spot'.endswith('light')", "");
    assert_prints("'abc'.contains('bc')", "1");
}

#[test]
fn vector_members() {
    assert_prints("[3, 4].length", "5");
    assert_prints("[3, 4].count", "2");
    assert_prints("[3, 4].normalized()", "0.6 0.8");
    assert_prints("[0, 0].normalized()", "0 0");
    assert_prints("[1, 2, 3].dot([4, 5, 6])", "32");
    assert!(matches!(assert_failure("[1, 2].z"), Error::Eval(EvalError::IndexOutOfBounds { .. })));
    assert!(matches!(assert_failure("[1, 2].dot([1])"), Error::Eval(EvalError::InvalidArgument { .. })));
}

#[test]
fn methods_are_bound_before_they_are_called() {
    let mut ctx = Context::new();
    ctx.bind("name", "func_wall");

    let upper = evaluate("name.upper", &ctx).unwrap();
    assert_eq!(upper.type_name(), "function");
    assert_eq!(upper.to_string(), "function");

    ctx.bind("shout", upper);
    assert_eq!(evaluate("shout()", &ctx).unwrap(), Value::from("FUNC_WALL"));
}

#[test]
fn unknown_member_is_error() {
    match assert_failure("'abc'.nope") {
        Error::Eval(EvalError::UnknownMember { type_name, member, .. }) => {
            assert_eq!(type_name, "string");
            assert_eq!(member, "nope");
        },
        e => panic!("Unexpected error {e:?}"),
    }

    assert!(matches!(assert_failure("(5).foo"), Error::Eval(EvalError::UnknownMember { .. })));
    assert!(matches!(assert_failure("none.x"), Error::Eval(EvalError::UnknownMember { .. })));
}

#[test]
fn builtin_functions() {
    assert_prints("min(3, 1, 2)", "1");
    assert_prints("max(3)", "3");
    assert_prints("clamp(5, 0, 3)", "3");
    assert_prints("clamp(-5, 0, 3)", "0");
    assert_prints("sqrt(16)", "4");
    assert_prints("abs(-2.5)", "2.5");
    assert_prints("floor(-1.5)", "-2");
    assert_prints("ceil(1.2)", "2");
    assert_prints("round(2.5)", "3");
    assert_prints("trunc(-2.7)", "-2");
    assert_prints("sign(-3)", "-1");
    assert_prints("atan2(0, 1)", "0");
    assert_prints("lerp(0, 10, 0.5)", "5");
    assert_prints("len('héllo')", "5");
    assert_prints("len([1, 2, 3])", "3");
    assert_prints("num(' 12.5 ')", "12.5");
    assert_prints("str(42) == '42'", "1");
    assert_prints("vec('0 90 0')", "0 90 0");
    assert_prints("vec(1, 2, 3)[2]", "3");
    assert_prints("assert(0)", "0");
}

#[test]
fn builtin_function_errors() {
    assert!(matches!(assert_failure("clamp(1, 3, 0)"), Error::Eval(EvalError::InvalidArgument { .. })));
    assert!(matches!(assert_failure("num('x')"), Error::Eval(EvalError::InvalidArgument { .. })));
    assert!(matches!(assert_failure("vec('0 nine 0')"), Error::Eval(EvalError::InvalidArgument { .. })));
    assert!(matches!(assert_failure("len(5)"), Error::Eval(EvalError::TypeError { .. })));
    assert!(matches!(assert_failure("sqrt('4')"), Error::Eval(EvalError::ExpectedNumber { .. })));
    assert!(matches!(assert_failure("assert(none)"), Error::Eval(EvalError::AssertionFailed { .. })));
    assert!(matches!(assert_failure("lerp([0], [1, 2], 0.5)"), Error::Eval(EvalError::InvalidArgument { .. })));
}

#[test]
fn wrong_function_arity_is_error() {
    match assert_failure("abs(1, 2)") {
        Error::Eval(EvalError::ArgumentCountMismatch { name, found, .. }) => {
            assert_eq!(name, "abs");
            assert_eq!(found, 2);
        },
        e => panic!("Unexpected error {e:?}"),
    }

    assert!(matches!(assert_failure("min()"), Error::Eval(EvalError::ArgumentCountMismatch { .. })));
    assert!(matches!(assert_failure("'abc'.upper(1)"), Error::Eval(EvalError::ArgumentCountMismatch { .. })));
    assert!(matches!(assert_failure("'abc'.substr(1, 2, 3)"),
                     Error::Eval(EvalError::ArgumentCountMismatch { .. })));
}

#[test]
fn calling_a_non_function_is_error() {
    assert!(matches!(assert_failure("5()"), Error::Eval(EvalError::NotCallable { found: "number", .. })));
    assert!(matches!(assert_failure("missing(1)"), Error::Eval(EvalError::NotCallable { found: "none", .. })));
}

#[test]
fn builtins_are_opt_in() {
    assert_eq!(evaluate("max(1, 2)", &Context::with_builtins()).unwrap(), Value::Number(2.0));
    assert!(matches!(evaluate("max(1, 2)", &Context::new()),
                     Err(Error::Eval(EvalError::NotCallable { .. }))));
}

#[test]
fn lex_errors_have_positions() {
    let e = assert_failure("1 & 2");
    assert!(matches!(e, Error::Lex(LexError::IncompleteOperator { found: '&', .. })));
    assert_eq!(e.position(), Position::new(1, 2));

    let e = assert_failure("1 +\n 2 | 3");
    assert!(matches!(e, Error::Lex(LexError::IncompleteOperator { found: '|', .. })));
    assert_eq!(e.position(), Position::new(2, 3));

    let e = assert_failure("'é' & 1");
    assert!(matches!(e, Error::Lex(LexError::IncompleteOperator { found: '&', .. })));
    assert_eq!(e.position(), Position::new(1, 4));

    let e = assert_failure("a = 1");
    assert!(matches!(e, Error::Lex(LexError::IncompleteOperator { found: '=', .. })));

    let e = assert_failure("'open");
    assert!(matches!(e, Error::Lex(LexError::UnterminatedString { .. })));
    assert_eq!(e.position(), Position::new(1, 0));

    let e = assert_failure("1 # 2");
    assert!(matches!(e, Error::Lex(LexError::UnexpectedCharacter { character: '#', .. })));
    assert_eq!(e.position(), Position::new(1, 2));
}

#[test]
fn parse_errors_have_positions() {
    let e = assert_failure("(1 + 2");
    assert!(matches!(e, Error::Parse(ParseError::InvalidExpression { .. })));
    assert_eq!(e.position(), Position::new(1, 0));

    let e = assert_failure("1 2");
    assert!(matches!(e, Error::Parse(ParseError::UnexpectedToken { .. })));
    assert_eq!(e.position(), Position::new(1, 2));

    let e = assert_failure("* 2");
    assert!(matches!(e, Error::Parse(ParseError::UnexpectedToken { .. })));
    assert_eq!(e.position(), Position::new(1, 0));

    let e = assert_failure("1 + 2)");
    assert!(matches!(e, Error::Parse(ParseError::UnexpectedToken { .. })));
    assert_eq!(e.position(), Position::new(1, 5));

    // Offsets count characters from the start of the line a string ended on.
    let e = assert_failure("'a\nbé' + x y");
    assert!(matches!(e, Error::Parse(ParseError::UnexpectedToken { .. })));
    assert_eq!(e.position(), Position::new(2, 8));
}

#[test]
fn long_expressions_parse() {
    let sum = vec!["1"; 500].join(" + ");
    assert_prints(&sum, "500");

    let chain = vec!["1"; 300].join(" * 2 - ");
    assert_prints(&chain, "-595");

    let nested = format!("{}7{}", "(".repeat(64), ")".repeat(64));
    assert_prints(&nested, "7");

    let elements = vec!["2"; 200].join(", ");
    assert_prints(&format!("max({elements}) + [{elements}][199]"), "4");
}

#[test]
fn names_are_single_identifiers() {
    assert!(is_identifier("origin"));
    assert!(is_identifier("_spawn2"));
    assert!(!is_identifier("1bad"));
    assert!(!is_identifier("a b"));
    assert!(!is_identifier("None"));
    assert!(!is_identifier("x.y"));
    assert!(!is_identifier(""));
}

#[test]
fn malformed_expressions_are_errors() {
    for src in ["",
                "1 +",
                "max(1,)",
                "[1, 2",
                "a[]",
                "a[1, 2]",
                "1 ? 2",
                "1 : 2",
                "1 else 2",
                "a.",
                "a.1",
                "1;",
                "(,)"]
    {
        assert!(matches!(assert_failure(src), Error::Parse(_)), "`{src}` should not parse");
    }
}

#[test]
fn parsed_expressions_can_be_reused() {
    let expr = parse_expression("origin.x + index * 128").unwrap();

    for index in 0..4 {
        let mut ctx = Context::new();
        ctx.bind("origin", [64.0, 0.0, 0.0]);
        ctx.bind("index", f64::from(index));

        let expected = 64.0 + f64::from(index) * 128.0;
        assert_eq!(ctx.eval(&expr).unwrap(), Value::Number(expected));
    }
}

#[test]
fn batches_bind_in_order() {
    let mut ctx = Context::new();
    evaluate_assignments("a = 2; b = a * 3;", &mut ctx).unwrap();

    assert_eq!(ctx.resolve("a"), Some(&Value::Number(2.0)));
    assert_eq!(ctx.resolve("b"), Some(&Value::Number(6.0)));

    evaluate_assignments("a = a + 1;\nname = 'brush_' if a > 2 else 'none';", &mut ctx).unwrap();
    assert_eq!(ctx.resolve("a"), Some(&Value::Number(3.0)));
    assert_eq!(ctx.resolve("name"), Some(&Value::from("brush_")));
}

#[test]
fn failing_batch_keeps_earlier_bindings() {
    let mut ctx = Context::new();
    let e = evaluate_assignments("a = 1; b = missing(); c = 3;", &mut ctx).unwrap_err();

    assert!(matches!(e, Error::Eval(EvalError::NotCallable { .. })));
    assert_eq!(ctx.resolve("a"), Some(&Value::Number(1.0)));
    assert_eq!(ctx.resolve("b"), None);
    assert_eq!(ctx.resolve("c"), None);
}

#[test]
fn malformed_batches_are_errors() {
    assert!(matches!(parse_assignments(""), Err(Error::Parse(ParseError::InvalidAssignments { .. }))));
    assert!(matches!(parse_assignments("a = 1"),
                     Err(Error::Parse(ParseError::InvalidAssignments { .. }))));
    assert!(matches!(parse_assignments("1 = 2;"),
                     Err(Error::Parse(ParseError::InvalidAssignmentTarget { .. }))));
    assert!(matches!(parse_assignments("a.b = 2;"),
                     Err(Error::Parse(ParseError::InvalidAssignmentTarget { .. }))));
    assert!(matches!(parse_assignments("a = b = 1;"),
                     Err(Error::Parse(ParseError::UnexpectedToken { .. }))));
    assert!(matches!(parse_assignments("a = 1;;"), Err(Error::Parse(ParseError::UnexpectedToken { .. }))));
    assert!(matches!(parse_assignments("a = 1 & 2;"), Err(Error::Lex(_))));
}

#[test]
fn parsed_batch_keeps_source_order() {
    let batch = parse_assignments("z = 1;\ny = 2;\nx = 3;").unwrap();
    let names: Vec<_> = batch.iter().map(|a| a.name.as_str()).collect();

    assert_eq!(names, ["z", "y", "x"]);
    assert_eq!(batch[1].position.line, 2);
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.mscript").unwrap();
    let mut ctx = Context::with_builtins();
    ctx.bind("index", 3.0);
    ctx.bind("origin", [128.0, -64.0, 0.0]);

    evaluate_assignments(&contents, &mut ctx).unwrap_or_else(|e| panic!("Example batch failed: {e}"));

    assert_eq!(ctx.resolve("offset").map(ToString::to_string).as_deref(), Some("512 -64 32"));
    assert_eq!(ctx.resolve("targetname").map(ToString::to_string).as_deref(), Some("door_3"));
    assert_eq!(ctx.resolve("spawnflags"), Some(&Value::Number(1.0)));
}
