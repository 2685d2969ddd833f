use crate::error::RuleResult;
use crate::expr::Expression;
use crate::session::ProofSession;

/// Перестановка кванторов: `∃x. ∀y. P(x, y) ⊢ ∀y. ∃x. P(x, y)`.
///
/// ```text
///                                          [∀y. P(u, y)]
///                                          ------------- ∀ E
///                                             P(u, v)
///                                          ------------- ∃ I
///                                     [v]   ∃x. P(x, v)
///                                     ------------------ ∀ I
///                    [∀y. P(u, y)]     ∀y. ∃x. P(x, y)
///                    ----------------------------------- → I
/// ∃x. ∀y. P(x, y)   (∀y. P(u, y)) → (∀y. ∃x. P(x, y))
/// ------------------------------------------------------ ∃ E
///                   ∀y. ∃x. P(x, y)
/// ```
pub fn commutativity(session: &mut ProofSession) -> RuleResult {
	let p = |x: &str, y: &str| Expression::pred("P", vec![x, y]);
	let inner = Expression::forall("y", p("u", "y"));
	let goal = Expression::forall("y", Expression::exists("x", p("x", "y")));

	let premise = session.premise(Expression::exists("x", Expression::forall("y", p("x", "y"))));
	let outer = session.assume(inner.clone());

	let witness = session.assume(Expression::var("v"));
	let assumed = session.assumed(inner.clone())?;
	let instance = session.forall_elim(&assumed, "v", p("u", "v"))?;
	let some = session.exists_intro(&instance, "u", Expression::exists("x", p("x", "v")))?;
	let all = session.forall_intro(&witness, &some, goal.clone())?;

	let implication = session.arrow_intro(&outer, &all, Expression::arrow(inner, goal.clone()))?;
	session.exists_elim(&premise, "u", &implication, goal)
}
