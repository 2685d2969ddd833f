use std::rc::Rc;

use crate::error::{Failure, ProofError, RuleResult};
use crate::expr::Expression;
use crate::step::{Rule, Step, StepRef};

/// Состояние одного строящегося доказательства: принятые посылки и стек открытых допущений.
///
/// Все правила вывода работают через сессию. Независимые доказательства строятся в разных сессиях, одну сессию меняет только один владелец.
#[derive(Default, Debug)]
pub struct ProofSession {
	premises: Vec<StepRef>,
	assumptions: Vec<Expression>,
}

impl ProofSession {
	pub fn new() -> Self {
		Self::default()
	}

	/// Сбрасывает посылки и допущения, чтобы начать новое доказательство.
	pub fn clear(&mut self) {
		self.premises.clear();
		self.assumptions.clear();
	}

	pub fn premises(&self) -> &[StepRef] {
		&self.premises
	}

	/// Открытые допущения, последнее открытое в конце.
	pub fn open_assumptions(&self) -> &[Expression] {
		&self.assumptions
	}

	pub fn premise(&mut self, expression: Expression) -> StepRef {
		log::debug!("premise {}", expression);
		let step = Rc::new(Step::new(expression, Rule::Premise, vec![]));
		self.premises.push(step.clone());
		step
	}

	pub fn assume(&mut self, expression: Expression) -> StepRef {
		log::debug!("assume {} (depth {})", expression, self.assumptions.len() + 1);
		self.assumptions.push(expression.clone());
		Rc::new(Step::new(expression, Rule::Assume, vec![]))
	}

	/// Ссылка на допущение, которое ещё открыто где-то в стеке.
	pub fn assumed(&self, expression: Expression) -> RuleResult {
		let step = Rc::new(Step::new(expression, Rule::Assumed, vec![]));
		if self.assumptions.contains(step.conclusion()) {
			Ok(step)
		} else {
			Err(Failure {
				rule: Rule::Assumed,
				error: ProofError::NotAssumed { expression: step.conclusion().clone() },
				partial: step,
			})
		}
	}

	/// Снимает последнее допущение со стека и сверяет его с `expected`. Снятое допущение не возвращается даже при несовпадении.
	pub(crate) fn discharge(&mut self, expected: &Expression) -> Result<(), ProofError> {
		match self.assumptions.pop() {
			None => Err(ProofError::NoOpenAssumption { expected: expected.clone() }),
			Some(actual) if &actual != expected => {
				log::warn!("tried to discharge {}, but the most recent assumption is {}", expected, actual);
				Err(ProofError::WrongAssumptionDischarged {
					expected: expected.clone(),
					actual,
				})
			},
			Some(_) => {
				log::debug!("discharge {} (depth {})", expected, self.assumptions.len());
				Ok(())
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn premises_are_recorded_in_order() {
		let mut session = ProofSession::new();
		session.premise(Expression::var("a"));
		session.premise(Expression::var("b"));

		let premises: Vec<_> = session.premises().iter().map(|s| s.conclusion().clone()).collect();
		assert_eq!(premises, vec![Expression::var("a"), Expression::var("b")]);
		assert!(session.open_assumptions().is_empty());
	}

	#[test]
	fn assumed_looks_through_whole_stack() {
		let mut session = ProofSession::new();
		session.assume(Expression::var("a"));
		session.assume(Expression::var("b"));

		let step = session.assumed(Expression::var("a")).unwrap();
		assert_eq!(step.rule(), Rule::Assumed);
		assert!(step.support().is_empty());

		let failure = session.assumed(Expression::var("c")).unwrap_err();
		assert_eq!(failure.error, ProofError::NotAssumed { expression: Expression::var("c") });
		assert_eq!(failure.partial.conclusion(), &Expression::var("c"));
	}

	#[test]
	fn discharge_is_lifo() {
		let mut session = ProofSession::new();
		session.assume(Expression::var("a"));
		session.assume(Expression::var("b"));

		assert_eq!(
			session.discharge(&Expression::var("a")),
			Err(ProofError::WrongAssumptionDischarged {
				expected: Expression::var("a"),
				actual: Expression::var("b"),
			})
		);
		assert_eq!(session.open_assumptions(), &[Expression::var("a")]);

		assert_eq!(session.discharge(&Expression::var("a")), Ok(()));
		assert_eq!(
			session.discharge(&Expression::var("a")),
			Err(ProofError::NoOpenAssumption { expected: Expression::var("a") })
		);
	}

	#[test]
	fn clear_resets_everything() {
		let mut session = ProofSession::new();
		session.premise(Expression::var("a"));
		session.assume(Expression::var("b"));
		session.clear();

		assert!(session.premises().is_empty());
		assert!(session.open_assumptions().is_empty());
		assert!(session.assumed(Expression::var("b")).is_err());
	}
}
