//! Каталог правил натурального вывода. Каждое правило сначала строит шаг, потом проверяет его: при ошибке шаг остаётся в `Failure::partial`.

use std::rc::Rc;

use crate::error::{Failure, ProofError, Reason, RuleResult};
use crate::expr::Expression;
use crate::session::ProofSession;
use crate::step::{Rule, Step, StepRef};

fn verify<F>(rule: Rule, conclusion: Expression, support: Vec<StepRef>, check: F) -> RuleResult
where
	F: FnOnce(&Expression) -> Result<(), ProofError>,
{
	log::trace!("{} ⊢ {}", rule, conclusion);
	let step = Rc::new(Step::new(conclusion, rule, support));
	match check(step.conclusion()) {
		Ok(()) => Ok(step),
		Err(error) => Err(Failure { rule, partial: step, error }),
	}
}

fn ensure(holds: bool, rule: Rule, expression: &Expression, reason: Reason) -> Result<(), ProofError> {
	if holds {
		Ok(())
	} else {
		Err(ProofError::violation(rule, expression, reason))
	}
}

impl ProofSession {
	/// ```text
	///  A  B
	/// ------ ∧ I
	/// A ∧ B
	/// ```
	pub fn and_intro(&self, a: &StepRef, b: &StepRef, conclusion: Expression) -> RuleResult {
		let rule = Rule::AndIntro;
		verify(rule, conclusion, vec![a.clone(), b.clone()], |c| {
			let (lhs, rhs) = c.as_and().ok_or_else(|| ProofError::violation(rule, c, Reason::ConclusionNotAnd))?;
			ensure(lhs == a.conclusion(), rule, a.conclusion(), Reason::LeftSideMismatch)?;
			ensure(rhs == b.conclusion(), rule, b.conclusion(), Reason::RightSideMismatch)
		})
	}

	/// ```text
	/// A ∧ B
	/// ------ ∧ EL
	///   A
	/// ```
	pub fn and_elim_left(&self, ab: &StepRef, conclusion: Expression) -> RuleResult {
		let rule = Rule::AndElimLeft;
		verify(rule, conclusion, vec![ab.clone()], |c| {
			let (lhs, _) = ab.conclusion().as_and().ok_or_else(|| ProofError::violation(rule, ab.conclusion(), Reason::PremiseNotAnd))?;
			ensure(lhs == c, rule, c, Reason::NotLeftOfPremise)
		})
	}

	/// ```text
	/// A ∧ B
	/// ------ ∧ ER
	///   B
	/// ```
	pub fn and_elim_right(&self, ab: &StepRef, conclusion: Expression) -> RuleResult {
		let rule = Rule::AndElimRight;
		verify(rule, conclusion, vec![ab.clone()], |c| {
			let (_, rhs) = ab.conclusion().as_and().ok_or_else(|| ProofError::violation(rule, ab.conclusion(), Reason::PremiseNotAnd))?;
			ensure(rhs == c, rule, c, Reason::NotRightOfPremise)
		})
	}

	/// ```text
	///   A
	/// ------ ∨ IL
	/// A ∨ B
	/// ```
	pub fn or_intro_left(&self, a: &StepRef, conclusion: Expression) -> RuleResult {
		let rule = Rule::OrIntroLeft;
		verify(rule, conclusion, vec![a.clone()], |c| {
			let (lhs, _) = c.as_or().ok_or_else(|| ProofError::violation(rule, c, Reason::ConclusionNotOr))?;
			ensure(lhs == a.conclusion(), rule, a.conclusion(), Reason::NotLeftOfConclusion)
		})
	}

	/// ```text
	///   B
	/// ------ ∨ IR
	/// A ∨ B
	/// ```
	pub fn or_intro_right(&self, b: &StepRef, conclusion: Expression) -> RuleResult {
		let rule = Rule::OrIntroRight;
		verify(rule, conclusion, vec![b.clone()], |c| {
			let (_, rhs) = c.as_or().ok_or_else(|| ProofError::violation(rule, c, Reason::ConclusionNotOr))?;
			ensure(rhs == b.conclusion(), rule, b.conclusion(), Reason::NotRightOfConclusion)
		})
	}

	/// ```text
	/// A ∨ B  A → C  B → C
	/// ------------------- ∨ E
	///          C
	/// ```
	pub fn or_elim(&self, ab: &StepRef, ac: &StepRef, bc: &StepRef, conclusion: Expression) -> RuleResult {
		let rule = Rule::OrElim;
		verify(rule, conclusion, vec![ab.clone(), ac.clone(), bc.clone()], |c| {
			let wrong_shape = |step: &StepRef, shape| ProofError::violation(rule, step.conclusion(), Reason::PremiseShape { shape });
			let (a, b) = ab.conclusion().as_or().ok_or_else(|| wrong_shape(ab, "A ∨ B"))?;
			let (a_case, c_left) = ac.conclusion().as_arrow().ok_or_else(|| wrong_shape(ac, "A → C"))?;
			let (b_case, c_right) = bc.conclusion().as_arrow().ok_or_else(|| wrong_shape(bc, "B → C"))?;

			let mismatch = |step: &StepRef, case, left: &Expression, right: &Expression| ProofError::violation(
				rule,
				step.conclusion(),
				Reason::CaseMismatch { case, left: left.clone(), right: right.clone() },
			);
			if a != a_case {
				return Err(mismatch(ab, "A", a, a_case));
			}
			if b != b_case {
				return Err(mismatch(ab, "B", b, b_case));
			}
			if c_left != c_right {
				return Err(mismatch(ac, "C", c_left, c_right));
			}
			ensure(c_left == c, rule, c, Reason::ConsequentMismatch)
		})
	}

	/// ```text
	/// [A] B
	/// ------ → I
	/// A → B
	/// ```
	///
	/// Закрывает допущение `A`, оно должно быть последним открытым.
	pub fn arrow_intro(&mut self, a: &StepRef, b: &StepRef, conclusion: Expression) -> RuleResult {
		let rule = Rule::ArrowIntro;
		verify(rule, conclusion, vec![a.clone(), b.clone()], |c| {
			let (lhs, rhs) = c.as_arrow().ok_or_else(|| ProofError::violation(rule, c, Reason::ConclusionNotArrow))?;
			ensure(lhs == a.conclusion(), rule, a.conclusion(), Reason::LeftSideMismatch)?;
			ensure(rhs == b.conclusion(), rule, b.conclusion(), Reason::RightSideMismatch)?;
			self.discharge(a.conclusion())
		})
	}

	/// ```text
	/// A  A → B
	/// -------- → E
	///    B
	/// ```
	pub fn arrow_elim(&self, a: &StepRef, ab: &StepRef, conclusion: Expression) -> RuleResult {
		let rule = Rule::ArrowElim;
		verify(rule, conclusion, vec![a.clone(), ab.clone()], |c| {
			let (lhs, rhs) = ab
				.conclusion()
				.as_arrow()
				.ok_or_else(|| ProofError::violation(rule, ab.conclusion(), Reason::PremiseShape { shape: "A → B" }))?;
			ensure(lhs == a.conclusion(), rule, a.conclusion(), Reason::PremisesMismatch)?;
			ensure(rhs == c, rule, c, Reason::NotRightOfPremise)
		})
	}

	/// ```text
	/// A → ⊥
	/// ------ ¬ I
	///  ¬A
	/// ```
	pub fn not_intro(&self, af: &StepRef, conclusion: Expression) -> RuleResult {
		let rule = Rule::NotIntro;
		verify(rule, conclusion, vec![af.clone()], |c| {
			let lhs = match af.conclusion().as_arrow() {
				Some((lhs, rhs)) if rhs.is_falsity() => lhs,
				_ => return Err(ProofError::violation(rule, af.conclusion(), Reason::PremiseShape { shape: "A → ⊥" })),
			};
			ensure(c.as_not() == Some(lhs), rule, c, Reason::PremiseMismatch)
		})
	}

	/// ```text
	/// A  ¬A
	/// ----- ¬ E
	///   ⊥
	/// ```
	pub fn not_elim(&self, a: &StepRef, na: &StepRef, conclusion: Expression) -> RuleResult {
		let rule = Rule::NotElim;
		verify(rule, conclusion, vec![a.clone(), na.clone()], |c| {
			let operand = na
				.conclusion()
				.as_not()
				.ok_or_else(|| ProofError::violation(rule, na.conclusion(), Reason::PremiseShape { shape: "¬A" }))?;
			ensure(operand == a.conclusion(), rule, a.conclusion(), Reason::PremisesMismatch)?;
			ensure(c.is_falsity(), rule, c, Reason::ConclusionNotFalse)
		})
	}

	pub fn true_intro(&self, conclusion: Expression) -> RuleResult {
		let rule = Rule::TrueIntro;
		verify(rule, conclusion, vec![], |c| ensure(c.is_truth(), rule, c, Reason::ConclusionNotTrue))
	}

	/// Из `⊥` выводится что угодно.
	pub fn false_elim(&self, f: &StepRef, conclusion: Expression) -> RuleResult {
		let rule = Rule::FalseElim;
		verify(rule, conclusion, vec![f.clone()], |_| {
			ensure(f.conclusion().is_falsity(), rule, f.conclusion(), Reason::PremiseNotFalse)
		})
	}

	pub fn excluded_middle(&self, conclusion: Expression) -> RuleResult {
		let rule = Rule::ExcludedMiddle;
		verify(rule, conclusion, vec![], |c| match c.as_or() {
			Some((lhs, rhs)) if rhs.as_not() == Some(lhs) => Ok(()),
			_ => Err(ProofError::violation(rule, c, Reason::ConclusionNotExcludedMiddle)),
		})
	}

	/// ```text
	/// [c] A(c)
	/// -------- ∀ I
	/// ∀x. A(x)
	/// ```
	///
	/// `witness` это допущение переменной `c`, оно закрывается. Свежесть `c` не проверяется.
	pub fn forall_intro(&mut self, witness: &StepRef, instance: &StepRef, conclusion: Expression) -> RuleResult {
		let rule = Rule::ForallIntro;
		verify(rule, conclusion, vec![witness.clone(), instance.clone()], |c| {
			ensure(c.as_forall().is_some(), rule, c, Reason::ConclusionNotForall)?;
			let name = witness
				.conclusion()
				.as_var()
				.ok_or_else(|| ProofError::violation(rule, witness.conclusion(), Reason::AssumptionNotVariable))?;
			ensure(&c.instantiate(name)? == instance.conclusion(), rule, c, Reason::PremiseMismatch)?;
			self.discharge(witness.conclusion())
		})
	}

	/// ```text
	/// ∀x. A(x)
	/// -------- ∀ E
	///   A(c)
	/// ```
	pub fn forall_elim(&self, fax: &StepRef, witness: &str, conclusion: Expression) -> RuleResult {
		let rule = Rule::ForallElim;
		verify(rule, conclusion, vec![fax.clone()], |c| {
			ensure(fax.conclusion().as_forall().is_some(), rule, fax.conclusion(), Reason::PremiseNotForall)?;
			ensure(&fax.conclusion().instantiate(witness)? == c, rule, c, Reason::PremiseMismatch)
		})
	}

	/// ```text
	///   A(c)
	/// -------- ∃ I
	/// ∃x. A(x)
	/// ```
	pub fn exists_intro(&self, instance: &StepRef, witness: &str, conclusion: Expression) -> RuleResult {
		let rule = Rule::ExistsIntro;
		verify(rule, conclusion, vec![instance.clone()], |c| {
			ensure(c.as_exists().is_some(), rule, c, Reason::ConclusionNotExists)?;
			ensure(&c.instantiate(witness)? == instance.conclusion(), rule, instance.conclusion(), Reason::PremiseMismatch)
		})
	}

	/// ```text
	/// ∃x. A(x)  A(c) → B
	/// ------------------ ∃ E
	///         B
	/// ```
	pub fn exists_elim(&self, exa: &StepRef, witness: &str, implication: &StepRef, conclusion: Expression) -> RuleResult {
		let rule = Rule::ExistsElim;
		verify(rule, conclusion, vec![exa.clone(), implication.clone()], |c| {
			ensure(exa.conclusion().as_exists().is_some(), rule, exa.conclusion(), Reason::PremiseNotExists)?;
			let (lhs, rhs) = implication
				.conclusion()
				.as_arrow()
				.ok_or_else(|| ProofError::violation(rule, implication.conclusion(), Reason::PremiseShape { shape: "A(c) → B" }))?;
			ensure(&exa.conclusion().instantiate(witness)? == lhs, rule, exa.conclusion(), Reason::WitnessMismatch)?;
			ensure(rhs == c, rule, implication.conclusion(), Reason::PremiseMismatch)
		})
	}
}
