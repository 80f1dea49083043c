use parsido::{MapExt, Parser, Recursive, one_of, or, pattern, recursive, sequence, word};

fn number<'code>() -> impl Parser<'code, Output = i64> {
    pattern("[0-9]+")
        .unwrap()
        .map(|digits: &str| digits.parse::<i64>().unwrap())
}

fn apply(lhs: i64, op: &str, rhs: i64) -> i64 {
    match op {
        "+" => lhs + rhs,
        "-" => lhs - rhs,
        "*" => lhs * rhs,
        _ => lhs / rhs,
    }
}

/// Left-associative chain: operand (operator operand)*
fn chain<'code, P, Op>(operand: P, operator: Op) -> impl Parser<'code, Output = i64>
where
    P: Parser<'code, Output = i64> + 'code,
    Op: Parser<'code, Output = &'code str> + 'code,
{
    sequence(move |run| {
        let step = sequence(|inner| {
            let op = inner.invoke(&operator)?;
            let rhs = inner.invoke(&operand)?;
            Ok((op, rhs))
        });

        let mut acc = run.invoke(&operand)?;
        while let Some((op, rhs)) = run.nullable(&step)? {
            acc = apply(acc, op, rhs);
        }
        Ok(acc)
    })
}

// expr   := term (("+" | "-") term)*
// term   := factor (("*" | "/") factor)*
// factor := number | "(" expr ")"
fn expression<'code>() -> Recursive<'code, i64> {
    recursive(|expr| {
        let group = sequence(move |run| {
            run.invoke("(")?;
            let value = run.invoke(&expr)?;
            run.invoke(")")?;
            Ok(value)
        });
        let factor = or(number(), group);
        let term = chain(factor, one_of![word("*"), word("/")]);
        chain(term, one_of![word("+"), word("-")])
    })
}

fn evaluate(input: &str) -> Option<i64> {
    match expression().parse_str(input).unwrap() {
        Some((value, "")) => Some(value),
        _ => None,
    }
}

#[test]
fn test_precedence() {
    assert_eq!(evaluate("1 + 2 * 3"), Some(7));
    assert_eq!(evaluate("2 * 3 + 1"), Some(7));
}

#[test]
fn test_grouping() {
    assert_eq!(evaluate("(1 + 2) * 3"), Some(9));
    assert_eq!(evaluate("2 * (3 + (4 - 1))"), Some(12));
    assert_eq!(evaluate("((((5))))"), Some(5));
}

#[test]
fn test_left_associative() {
    assert_eq!(evaluate("10 - 4 - 3"), Some(3));
    assert_eq!(evaluate("100 / 10 / 5"), Some(2));
}

#[test]
fn test_incomplete_tail_is_left_over() {
    let (value, rest) = expression().parse_str("1 + 2 +").unwrap().unwrap();
    assert_eq!(value, 3);
    assert_eq!(rest, " +");
}

#[test]
fn test_unbalanced_group() {
    assert_eq!(expression().parse_str("(1 + 2").unwrap(), None);
    assert_eq!(evaluate("1 + 2)"), None);
}

#[test]
fn test_no_expression() {
    assert_eq!(expression().parse_str("+ 1").unwrap(), None);
    assert_eq!(expression().parse_str("").unwrap(), None);
}

#[test]
fn test_grammar_is_reusable() {
    let expr = expression();

    let first = expr.parse_str("3 * (2 + 2)").unwrap();
    let second = expr.parse_str("3 * (2 + 2)").unwrap();
    assert_eq!(first, second);
    assert_eq!(first, Some((12, "")));
}

#[test]
fn test_strict_group_reports_position() {
    let strict = recursive(|expr| {
        let group = sequence(move |run| {
            run.invoke("(")?;
            let value = run.invoke(&expr)?;
            run.throwable(")")?;
            Ok(value)
        });
        or(number(), group)
    });

    let failure = strict.parse_str("((7)").unwrap_err();
    assert_eq!(failure.position(), 4);
    assert_eq!(failure.remaining(), "");
    assert_eq!(
        failure.to_string(),
        "parser failure at byte 4: unexpected end of input"
    );

    let failure = strict.parse_str("(7 ]").unwrap_err();
    assert_eq!(failure.position(), 2);
    assert_eq!(failure.remaining(), " ]");
}
