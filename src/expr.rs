use std::fmt;

use itertools::Itertools;
use thiserror::Error;

/// Логическая формула. Неизменяема после построения, сравнивается только структурно: `∀x. P(x)` и `∀y. P(y)` разные формулы.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Expression {
	/// `a ∧ b`
	And(Box<Expression>, Box<Expression>),

	/// `a ∨ b`
	Or(Box<Expression>, Box<Expression>),

	/// `a → b`
	Arrow(Box<Expression>, Box<Expression>),

	/// `¬a`
	Not(Box<Expression>),

	/// Константы `⊤` и `⊥`.
	Lit(bool),

	/// Пропозициональная переменная или свободная переменная первого порядка.
	Var(String),

	/// Атомарный предикат. Аргументы только имена переменных, порядок важен. В выражении выглядит как: `P(x, y)`, `Q()`.
	Pred {
		name: String,
		args: Vec<String>,
	},

	/// `∀x. body`
	Forall {
		bound: String,
		body: Box<Expression>,
	},

	/// `∃x. body`
	Exists {
		bound: String,
		body: Box<Expression>,
	},
}

#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Copy)]
pub enum ExpressionKind {
	And,
	Or,
	Arrow,
	Not,
	Lit,
	Var,
	Pred,
	Forall,
	Exists,
}

impl From<&Expression> for ExpressionKind {
	fn from(expr: &Expression) -> Self {
		use Expression::*;

		match expr {
			And(..) => ExpressionKind::And,
			Or(..) => ExpressionKind::Or,
			Arrow(..) => ExpressionKind::Arrow,
			Not(..) => ExpressionKind::Not,
			Lit(..) => ExpressionKind::Lit,
			Var(..) => ExpressionKind::Var,
			Pred { .. } => ExpressionKind::Pred,
			Forall { .. } => ExpressionKind::Forall,
			Exists { .. } => ExpressionKind::Exists,
		}
	}
}

impl fmt::Display for ExpressionKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			ExpressionKind::And => "And",
			ExpressionKind::Or => "Or",
			ExpressionKind::Arrow => "Arrow",
			ExpressionKind::Not => "Not",
			ExpressionKind::Lit => "Lit",
			ExpressionKind::Var => "Var",
			ExpressionKind::Pred => "Pred",
			ExpressionKind::Forall => "Forall",
			ExpressionKind::Exists => "Exists",
		};
		f.write_str(name)
	}
}

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum SubstitutionError {
	#[error("substitution is not implemented for {kind}")]
	Unsupported {
		kind: ExpressionKind,
	},
}

impl Expression {
	pub fn and(lhs: Expression, rhs: Expression) -> Self {
		Expression::And(Box::new(lhs), Box::new(rhs))
	}

	pub fn or(lhs: Expression, rhs: Expression) -> Self {
		Expression::Or(Box::new(lhs), Box::new(rhs))
	}

	pub fn arrow(lhs: Expression, rhs: Expression) -> Self {
		Expression::Arrow(Box::new(lhs), Box::new(rhs))
	}

	pub fn not(operand: Expression) -> Self {
		Expression::Not(Box::new(operand))
	}

	pub fn truth() -> Self {
		Expression::Lit(true)
	}

	pub fn falsity() -> Self {
		Expression::Lit(false)
	}

	pub fn var(name: impl Into<String>) -> Self {
		Expression::Var(name.into())
	}

	pub fn pred<I, S>(name: impl Into<String>, args: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Expression::Pred {
			name: name.into(),
			args: args.into_iter().map(Into::into).collect(),
		}
	}

	pub fn forall(bound: impl Into<String>, body: Expression) -> Self {
		Expression::Forall { bound: bound.into(), body: Box::new(body) }
	}

	pub fn exists(bound: impl Into<String>, body: Expression) -> Self {
		Expression::Exists { bound: bound.into(), body: Box::new(body) }
	}

	pub fn kind(&self) -> ExpressionKind {
		ExpressionKind::from(self)
	}

	pub fn is_truth(&self) -> bool {
		matches!(self, Expression::Lit(true))
	}

	pub fn is_falsity(&self) -> bool {
		matches!(self, Expression::Lit(false))
	}

	pub fn as_and(&self) -> Option<(&Expression, &Expression)> {
		match self {
			Expression::And(lhs, rhs) => Some((&**lhs, &**rhs)),
			_ => None,
		}
	}

	pub fn as_or(&self) -> Option<(&Expression, &Expression)> {
		match self {
			Expression::Or(lhs, rhs) => Some((&**lhs, &**rhs)),
			_ => None,
		}
	}

	pub fn as_arrow(&self) -> Option<(&Expression, &Expression)> {
		match self {
			Expression::Arrow(lhs, rhs) => Some((&**lhs, &**rhs)),
			_ => None,
		}
	}

	pub fn as_not(&self) -> Option<&Expression> {
		match self {
			Expression::Not(operand) => Some(&**operand),
			_ => None,
		}
	}

	pub fn as_var(&self) -> Option<&str> {
		match self {
			Expression::Var(name) => Some(name.as_str()),
			_ => None,
		}
	}

	pub fn as_forall(&self) -> Option<(&str, &Expression)> {
		match self {
			Expression::Forall { bound, body } => Some((bound.as_str(), &**body)),
			_ => None,
		}
	}

	pub fn as_exists(&self) -> Option<(&str, &Expression)> {
		match self {
			Expression::Exists { bound, body } => Some((bound.as_str(), &**body)),
			_ => None,
		}
	}

	/// Заменяет свободные вхождения `x` на `v`. Квантор по `x` закрывает своё тело от замены. На константах возвращает ошибку.
	pub fn substitute(&self, x: &str, v: &str) -> Result<Expression, SubstitutionError> {
		use Expression::*;

		match self {
			And(lhs, rhs) => Ok(Expression::and(lhs.substitute(x, v)?, rhs.substitute(x, v)?)),
			Or(lhs, rhs) => Ok(Expression::or(lhs.substitute(x, v)?, rhs.substitute(x, v)?)),
			Arrow(lhs, rhs) => Ok(Expression::arrow(lhs.substitute(x, v)?, rhs.substitute(x, v)?)),
			Not(operand) => Ok(Expression::not(operand.substitute(x, v)?)),
			Lit(_) => Err(SubstitutionError::Unsupported { kind: ExpressionKind::Lit }),
			Var(name) => Ok(Var((if name == x { v } else { name.as_str() }).to_string())),
			Pred { name, args } => Ok(Pred {
				name: name.clone(),
				args: args
					.iter()
					.map(|arg| (if arg == x { v } else { arg.as_str() }).to_string())
					.collect(),
			}),
			Forall { bound, .. } | Exists { bound, .. } if bound == x => Ok(self.clone()),
			Forall { bound, body } => Ok(Expression::forall(bound.clone(), body.substitute(x, v)?)),
			Exists { bound, body } => Ok(Expression::exists(bound.clone(), body.substitute(x, v)?)),
		}
	}

	/// Подставляет `witness` вместо связанной переменной квантора и возвращает тело. Правила вывода вызывают подстановку только так, поэтому на любом другом узле это ошибка.
	pub fn instantiate(&self, witness: &str) -> Result<Expression, SubstitutionError> {
		match self {
			Expression::Forall { bound, body } | Expression::Exists { bound, body } => body.substitute(bound, witness),
			other => Err(SubstitutionError::Unsupported { kind: other.kind() }),
		}
	}
}

impl fmt::Display for Expression {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use Expression::*;

		match self {
			And(lhs, rhs) => write!(f, "({} ∧ {})", lhs, rhs),
			Or(lhs, rhs) => write!(f, "({} ∨ {})", lhs, rhs),
			Arrow(lhs, rhs) => write!(f, "({} → {})", lhs, rhs),
			Not(operand) => write!(f, "¬{}", operand),
			Lit(true) => f.write_str("⊤"),
			Lit(false) => f.write_str("⊥"),
			Var(name) => f.write_str(name),
			Pred { name, args } => write!(f, "{}({})", name, args.iter().join(", ")),
			Forall { bound, body } => write!(f, "(∀{}. {})", bound, body),
			Exists { bound, body } => write!(f, "(∃{}. {})", bound, body),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn p(args: &[&str]) -> Expression {
		Expression::pred("P", args.iter().copied())
	}

	fn q(args: &[&str]) -> Expression {
		Expression::pred("Q", args.iter().copied())
	}

	#[test]
	fn equality_is_structural() {
		let ab = Expression::and(Expression::var("a"), Expression::var("b"));
		assert_eq!(ab, Expression::and(Expression::var("a"), Expression::var("b")));
		assert_ne!(ab, Expression::and(Expression::var("b"), Expression::var("a")));
		assert_ne!(Expression::forall("x", p(&["x"])), Expression::forall("y", p(&["y"])));
		assert_ne!(p(&["x", "y"]), p(&["y", "x"]));
		assert_ne!(Expression::var("P"), Expression::pred("P", Vec::<String>::new()));
	}

	#[test]
	fn substitution_stops_at_shadowing_quantifier() {
		let expr = Expression::and(p(&["x", "y"]), Expression::forall("x", q(&["x", "y"])));
		let expected = Expression::and(p(&["c", "y"]), Expression::forall("x", q(&["x", "y"])));
		assert_eq!(expr.substitute("x", "c"), Ok(expected));

		let expr = Expression::exists("y", q(&["x", "y"]));
		assert_eq!(expr.substitute("x", "c"), Ok(Expression::exists("y", q(&["c", "y"]))));
	}

	#[test]
	fn substitution_rejects_literals() {
		let expr = Expression::arrow(p(&["x"]), Expression::falsity());
		assert_eq!(
			expr.substitute("x", "c"),
			Err(SubstitutionError::Unsupported { kind: ExpressionKind::Lit })
		);
	}

	#[test]
	fn instantiate_only_on_quantifiers() {
		let rejected = vec![
			Expression::and(Expression::var("x"), Expression::var("y")),
			Expression::or(Expression::var("x"), Expression::var("y")),
			Expression::arrow(Expression::var("x"), Expression::var("y")),
			Expression::not(Expression::var("x")),
			Expression::truth(),
			Expression::var("x"),
			p(&["x"]),
		];
		for expr in rejected {
			assert_eq!(
				expr.instantiate("c"),
				Err(SubstitutionError::Unsupported { kind: expr.kind() })
			);
		}

		let forall = Expression::forall("x", Expression::exists("y", p(&["x", "y"])));
		assert_eq!(forall.instantiate("c"), Ok(Expression::exists("y", p(&["c", "y"]))));
	}

	#[test]
	fn display() {
		let expr = Expression::arrow(
			Expression::forall("y", p(&["u", "y"])),
			Expression::not(Expression::or(Expression::truth(), Expression::falsity())),
		);
		assert_eq!(expr.to_string(), "((∀y. P(u, y)) → ¬(⊤ ∨ ⊥))");
		assert_eq!(Expression::pred("Q", Vec::<String>::new()).to_string(), "Q()");
	}
}
