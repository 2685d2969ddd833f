use std::fmt;
use std::rc::Rc;

use crate::expr::Expression;

/// Правило вывода, которым обоснован шаг доказательства.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Copy)]
pub enum Rule {
	Premise,
	Assume,
	Assumed,
	AndIntro,
	AndElimLeft,
	AndElimRight,
	OrIntroLeft,
	OrIntroRight,
	OrElim,
	ArrowIntro,
	ArrowElim,
	NotIntro,
	NotElim,
	TrueIntro,
	FalseElim,
	ExcludedMiddle,
	ForallIntro,
	ForallElim,
	ExistsIntro,
	ExistsElim,
}

impl Rule {
	pub fn name(self) -> &'static str {
		use Rule::*;

		match self {
			Premise => "Premise",
			Assume => "assume",
			Assumed => "assumed",
			AndIntro => "∧ I",
			AndElimLeft => "∧ EL",
			AndElimRight => "∧ ER",
			OrIntroLeft => "∨ IL",
			OrIntroRight => "∨ IR",
			OrElim => "∨ E",
			ArrowIntro => "→ I",
			ArrowElim => "→ E",
			NotIntro => "¬ I",
			NotElim => "¬ E",
			TrueIntro => "⊤ I",
			FalseElim => "⊥ E",
			ExcludedMiddle => "LEM",
			ForallIntro => "∀ I",
			ForallElim => "∀ E",
			ExistsIntro => "∃ I",
			ExistsElim => "∃ E",
		}
	}

	/// Открывает гипотетическую область.
	pub fn opens_scope(self) -> bool {
		self == Rule::Assume
	}

	/// Закрывает последнюю открытую гипотетическую область.
	pub fn discharges(self) -> bool {
		matches!(self, Rule::ArrowIntro | Rule::ForallIntro)
	}
}

impl fmt::Display for Rule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

pub type StepRef = Rc<Step>;

/// Узел дерева доказательства: заключение, правило и шаги, из которых оно получено. Один шаг может быть опорой для нескольких последующих.
#[derive(Debug)]
pub struct Step {
	conclusion: Expression,
	rule: Rule,
	support: Vec<StepRef>,
}

impl Step {
	pub fn new(conclusion: Expression, rule: Rule, support: Vec<StepRef>) -> Self {
		Step { conclusion, rule, support }
	}

	pub fn conclusion(&self) -> &Expression {
		&self.conclusion
	}

	pub fn rule(&self) -> Rule {
		self.rule
	}

	pub fn support(&self) -> &[StepRef] {
		&self.support
	}
}
