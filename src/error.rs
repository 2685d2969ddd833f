use thiserror::Error;

use crate::expr::{Expression, SubstitutionError};
use crate::step::{Rule, StepRef};

/// Почему правило не применимо. Набор фиксированный, чтобы диагностика была точной.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum Reason {
	#[error("conclusion is not in the form A ∧ B")]
	ConclusionNotAnd,
	#[error("conclusion is not in the form A ∨ B")]
	ConclusionNotOr,
	#[error("conclusion doesn't match A → B")]
	ConclusionNotArrow,
	#[error("conclusion is not in the form ∀x. A")]
	ConclusionNotForall,
	#[error("conclusion is not in the form ∃x. A")]
	ConclusionNotExists,
	#[error("conclusion doesn't match A ∨ ¬A")]
	ConclusionNotExcludedMiddle,
	#[error("conclusion must be true")]
	ConclusionNotTrue,
	#[error("conclusion must be false")]
	ConclusionNotFalse,

	#[error("premise is not in the form A ∧ B")]
	PremiseNotAnd,
	#[error("premise doesn't match {shape}")]
	PremiseShape {
		shape: &'static str,
	},
	#[error("premise is not in the form ∀x. A")]
	PremiseNotForall,
	#[error("premise is not in the form ∃x. A")]
	PremiseNotExists,
	#[error("premise must be false")]
	PremiseNotFalse,

	#[error("left hand side doesn't match conclusion")]
	LeftSideMismatch,
	#[error("right hand side doesn't match conclusion")]
	RightSideMismatch,
	#[error("conclusion doesn't match left hand side of premise")]
	NotLeftOfPremise,
	#[error("conclusion doesn't match right hand side of premise")]
	NotRightOfPremise,
	#[error("left hand side of conclusion doesn't match premise")]
	NotLeftOfConclusion,
	#[error("right hand side of conclusion doesn't match premise")]
	NotRightOfConclusion,
	#[error("{case} doesn't match: {left} != {right}")]
	CaseMismatch {
		case: &'static str,
		left: Expression,
		right: Expression,
	},
	#[error("C doesn't match conclusion")]
	ConsequentMismatch,
	#[error("premises don't match")]
	PremisesMismatch,
	#[error("premise doesn't match conclusion")]
	PremiseMismatch,
	#[error("assumption must be a variable")]
	AssumptionNotVariable,
	#[error("existential and concrete term don't match")]
	WitnessMismatch,
}

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ProofError {
	#[error(transparent)]
	Substitution(#[from] SubstitutionError),

	#[error("{expression} has not been assumed yet")]
	NotAssumed {
		expression: Expression,
	},

	#[error("{expected} isn't the most recent assumption, {actual} is")]
	WrongAssumptionDischarged {
		expected: Expression,
		actual: Expression,
	},

	#[error("{expected} can't be discharged, nothing is assumed")]
	NoOpenAssumption {
		expected: Expression,
	},

	#[error("proof rule {rule} can't be applied to {expression}, because {reason}")]
	RuleViolation {
		rule: Rule,
		expression: Expression,
		reason: Reason,
	},
}

impl ProofError {
	pub fn violation(rule: Rule, expression: &Expression, reason: Reason) -> Self {
		ProofError::RuleViolation { rule, expression: expression.clone(), reason }
	}
}

/// Неудачная попытка применить правило. `partial` это уже построенный (но неверный) шаг, по нему можно отрисовать частичное доказательство.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct Failure {
	pub rule: Rule,
	pub partial: StepRef,
	pub error: ProofError,
}

pub type RuleResult = Result<StepRef, Failure>;
