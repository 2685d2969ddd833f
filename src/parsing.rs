use crate::expr::Expression;

pub type ParseError = peg::error::ParseError<peg::str::LineCol>;

// `T` и `F` только целым словом, иначе это обычные имена
peg::parser!(
	grammar parser() for str {
		pub rule expression() -> Expression
			= _ e:expr() _ { e }

		rule expr() -> Expression
			= quantified()
			/ arrow()

		rule quantified() -> Expression
			= "FA" _ bound:name() _ "." _ body:expr() { Expression::forall(bound, body) }
			/ "EX" _ bound:name() _ "." _ body:expr() { Expression::exists(bound, body) }

		rule arrow() -> Expression
			= lhs:or() rhs:(_ "->" _ r:arrow() { r })? {
				match rhs {
					Some(rhs) => Expression::arrow(lhs, rhs),
					None => lhs,
				}
			}

		rule or() -> Expression
			= first:and() rest:(_ "||" _ e:and() { e })* {
				rest.into_iter().fold(first, Expression::or)
			}

		rule and() -> Expression
			= first:not() rest:(_ "&&" _ e:not() { e })* {
				rest.into_iter().fold(first, Expression::and)
			}

		rule not() -> Expression
			= "~" _ e:not() { Expression::not(e) }
			/ atom()

		rule atom() -> Expression
			= "(" _ e:expr() _ ")" { e }
			/ quantified()
			/ name:name() _ "(" _ args:name() ** (_ "," _) _ ")" { Expression::pred(name, args) }
			/ name:name() {
				match &name[..] {
					"T" => Expression::truth(),
					"F" => Expression::falsity(),
					_ => Expression::Var(name),
				}
			}

		rule name() -> String
			= n:$(['a'..='z' | 'A'..='Z']+) { String::from(n) }

		rule _() = quiet!{[' ' | '\n' | '\t' | '\r']*}
	}
);

/// Разбирает формулу в записи `FA x. EX y. ~P(x, y) && Q || T -> F`.
pub fn parse(input: &str) -> Result<Expression, ParseError> {
	parser::expression(input)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn atoms() {
		assert_eq!(parse("a").unwrap(), Expression::var("a"));
		assert_eq!(parse(" T ").unwrap(), Expression::truth());
		assert_eq!(parse("F").unwrap(), Expression::falsity());
		assert_eq!(parse("Tx").unwrap(), Expression::var("Tx"));
		assert_eq!(parse("P()").unwrap(), Expression::pred("P", Vec::<String>::new()));
		assert_eq!(parse("P(x, y)").unwrap(), Expression::pred("P", vec!["x", "y"]));
	}

	#[test]
	fn errors() {
		assert!(parse("").is_err());
		assert!(parse("a &&").is_err());
		assert!(parse("P(x,").is_err());
		assert!(parse("(a").is_err());
		assert!(parse("a $ b").is_err());

		let err = parse("a && (b").unwrap_err();
		assert_eq!(err.location.offset, 7);
	}
}
