//! Печать доказательства списком пронумерованных строк.
//!
//! Опоры шага печатаются раньше самого шага. Шаг, на который ссылаются несколько раз, печатается один раз, при первом посещении. Слева рисуется по черте на каждое открытое допущение.

use std::collections::HashMap;

use itertools::Itertools;

use crate::error::Failure;
use crate::session::ProofSession;
use crate::step::{Step, StepRef};
use crate::utils::id::IdGenerator;

/// Ширины колонок при печати. Номер строки всегда занимает 5 символов.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderOptions {
	pub conclusion_width: usize,
	pub rule_width: usize,
}

impl Default for RenderOptions {
	fn default() -> Self {
		RenderOptions {
			conclusion_width: 60,
			rule_width: 10,
		}
	}
}

/// Наибольшая вложенность допущений: шаги `→ I` и `∀ I` дают по единице.
pub fn max_depth(root: &Step) -> usize {
	fn depth(step: &Step, memo: &mut HashMap<*const Step, usize>) -> usize {
		if let Some(known) = memo.get(&(step as *const Step)) {
			return *known;
		}
		let below = step.support().iter().map(|s| depth(s, memo)).max().unwrap_or(0);
		let result = below + step.rule().discharges() as usize;
		memo.insert(step as *const Step, result);
		result
	}

	depth(root, &mut HashMap::new())
}

struct Renderer<'a> {
	options: &'a RenderOptions,
	lines: IdGenerator<*const Step>,
	open: usize,
	max_depth: usize,
	output: String,
}

impl<'a> Renderer<'a> {
	fn render_step(&mut self, step: &Step) {
		let key = step as *const Step;
		if self.lines.contains(&key) {
			return;
		}

		for s in step.support() {
			self.render_step(s);
		}

		let rule = step.rule();
		if rule.opens_scope() {
			self.open += 1;
		}
		if rule.discharges() {
			self.open = self.open.saturating_sub(1);
		}

		let line = self.lines.get_or_add_id(key);
		let bars: String = (0..self.max_depth).map(|i| if i < self.open { '|' } else { ' ' }).collect();
		let support = step
			.support()
			.iter()
			.filter_map(|s| self.lines.get_id(&StepRef::as_ptr(s)))
			.join(", ");
		let text = format!(
			"{bars}{line:>5}: {conclusion:>conclusion_width$} | {rule:>rule_width$} {support}",
			bars = bars,
			line = line,
			conclusion = step.conclusion().to_string(),
			conclusion_width = self.options.conclusion_width,
			rule = rule.name(),
			rule_width = self.options.rule_width,
			support = support,
		);
		self.output.push_str(text.trim_end());
		self.output.push('\n');
	}
}

/// Строка `посылки ⊢ заключение`, затем по строке на каждый различный шаг.
///
/// Номера строк живут только во время печати, поэтому повторная печать того же дерева даёт тот же текст.
pub fn render_proof(premises: &[StepRef], root: &Step, options: &RenderOptions) -> String {
	let sequent = if premises.is_empty() {
		format!("⊢ {}\n", root.conclusion())
	} else {
		format!(
			"{} ⊢ {}\n",
			premises.iter().map(|p| p.conclusion()).join(", "),
			root.conclusion()
		)
	};

	let mut renderer = Renderer {
		options,
		lines: IdGenerator::default(),
		open: 0,
		max_depth: max_depth(root),
		output: sequent,
	};
	renderer.render_step(root);
	renderer.output
}

impl ProofSession {
	pub fn render(&self, root: &Step) -> String {
		self.render_with(root, &RenderOptions::default())
	}

	pub fn render_with(&self, root: &Step, options: &RenderOptions) -> String {
		render_proof(self.premises(), root, options)
	}
}

impl Failure {
	/// Частичное доказательство до шага, на котором произошла ошибка, и строка с причиной.
	pub fn report(&self, premises: &[StepRef], options: &RenderOptions) -> String {
		let mut output = render_proof(premises, &self.partial, options);
		output.push_str(&format!("Error: {}\n", self.error));
		output
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::expr::Expression;

	fn compact() -> RenderOptions {
		RenderOptions {
			conclusion_width: 0,
			rule_width: 0,
		}
	}

	#[test]
	fn shared_step_is_printed_once() {
		let mut session = ProofSession::new();
		let a = session.premise(Expression::var("a"));
		let aa = session.and_intro(&a, &a, Expression::and(Expression::var("a"), Expression::var("a"))).unwrap();

		assert_eq!(
			session.render_with(&aa, &compact()),
			"a ⊢ (a ∧ a)\n    1: a | Premise\n    2: (a ∧ a) | ∧ I 1, 1\n"
		);
	}

	#[test]
	fn bars_follow_open_assumptions() {
		let mut session = ProofSession::new();
		let a = session.assume(Expression::var("a"));
		let aa = session.arrow_intro(&a, &a, Expression::arrow(Expression::var("a"), Expression::var("a"))).unwrap();

		assert_eq!(max_depth(&aa), 1);
		assert_eq!(
			session.render_with(&aa, &compact()),
			"⊢ (a → a)\n|    1: a | assume\n     2: (a → a) | → I 1, 1\n"
		);
	}

	#[test]
	fn default_layout_pads_columns() {
		let session = ProofSession::new();
		let t = session.true_intro(Expression::truth()).unwrap();

		let rendered = session.render(&t);
		let expected_line = format!("    1: {}⊤ |        ⊤ I", " ".repeat(59));
		assert_eq!(rendered, format!("⊢ ⊤\n{}\n", expected_line));
	}

	#[test]
	fn failure_report() {
		let mut session = ProofSession::new();
		let a = session.premise(Expression::var("a"));
		let failure = session.false_elim(&a, Expression::var("b")).unwrap_err();

		assert_eq!(
			failure.report(session.premises(), &compact()),
			"a ⊢ b\n    1: a | Premise\n    2: b | ⊥ E 1\nError: proof rule ⊥ E can't be applied to a, because premise must be false\n"
		);
	}
}
