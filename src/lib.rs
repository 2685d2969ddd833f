pub mod demo;
pub mod error;
pub mod expr;
pub mod parsing;
pub mod render;
pub mod rules;
pub mod session;
pub mod step;
pub mod utils;

pub use crate::error::{Failure, ProofError, Reason, RuleResult};
pub use crate::expr::{Expression, ExpressionKind, SubstitutionError};
pub use crate::render::{render_proof, RenderOptions};
pub use crate::session::ProofSession;
pub use crate::step::{Rule, Step, StepRef};

/// Разбирает формулу. При ошибке возвращает готовый к печати отчёт с указанием места.
pub fn read_expression(input: &str, color: bool) -> Result<Expression, String> {
	use crate::{parsing::parse, utils::span::peg_error_to_snippet};

	parse(input).map_err(|err| peg_error_to_snippet(&err, input, color))
}

/// Проверяет и печатает доказательство, построенное `build` в новой сессии. При ошибке печатает частичное доказательство и причину.
pub fn check_proof<F>(build: F, options: &RenderOptions, color: bool) -> Result<String, String>
where
	F: FnOnce(&mut ProofSession) -> RuleResult,
{
	use crate::utils::span::failure_to_snippet;

	let mut session = ProofSession::new();
	match build(&mut session) {
		Ok(root) => Ok(session.render_with(&root, options)),
		Err(failure) => Err(format!(
			"{}{}",
			render_proof(session.premises(), &failure.partial, options),
			failure_to_snippet(&failure, color)
		)),
	}
}
