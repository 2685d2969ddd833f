use ndproof::parsing::parse;
use ndproof::*;

macro_rules! same {
	($a:expr, $b:expr) => {
		assert_eq!(parse($a).unwrap(), parse($b).unwrap());
	};
}

#[test]
fn associativity() {
	same!("a -> b -> c", "a -> (b -> c)");
	same!("a && b && c", "(a && b) && c");
	same!("a || b || c", "(a || b) || c");
}

#[test]
fn priority() {
	same!("a || b && c", "a || (b && c)");
	same!("a && b -> c || d", "(a && b) -> (c || d)");
	same!("~a && b", "(~a) && b");
	same!("~~a", "~(~a)");
	same!("FA x. P(x) -> Q(x)", "FA x. (P(x) -> Q(x))");
	same!("a && FA x. P(x) || Q(x)", "a && (FA x. (P(x) || Q(x)))");
}

#[test]
fn builds_expressions() {
	let expr = parse("EX x. FA y. P(x,y)").unwrap();
	assert_eq!(
		expr,
		Expression::exists("x", Expression::forall("y", Expression::pred("P", vec!["x", "y"])))
	);
	assert_eq!(expr.to_string(), "(∃x. (∀y. P(x, y)))");

	let expr = parse("(FA y. P(u,y)) -> (FA y. EX x. P(x,y))").unwrap();
	assert_eq!(expr.to_string(), "((∀y. P(u, y)) → (∀y. (∃x. P(x, y))))");

	let expr = parse("~a || T -> F").unwrap();
	assert_eq!(
		expr,
		Expression::arrow(
			Expression::or(Expression::not(Expression::var("a")), Expression::truth()),
			Expression::falsity()
		)
	);
}

#[test]
fn read_expression_reports_location() {
	assert_eq!(read_expression("a && b", false).unwrap(), Expression::and(Expression::var("a"), Expression::var("b")));

	let report = read_expression("a && (b", false).unwrap_err();
	assert!(report.contains("unexpected token"));
}
