use crate::{capabilities::TargetCapabilities, error::CompileError};
use sift_syntax::{ComparisonOp, Identifier, Literal, Predicate, PredicateKind};
use tracing::debug;

/// A query representation the engine can lower predicates into. One impl per
/// external collaborator; the structural mapping in [`lower`] is shared.
pub trait QueryTarget {
    type Query;

    fn name(&self) -> &str;

    fn capabilities(&self) -> TargetCapabilities;

    fn term(
        &self,
        field: &Identifier,
        op: ComparisonOp,
        value: &Literal,
    ) -> Result<Self::Query, CompileError>;

    fn conjunction(&self, left: Self::Query, right: Self::Query) -> Self::Query;

    fn disjunction(&self, left: Self::Query, right: Self::Query) -> Self::Query;

    /// Only called for targets advertising `NATIVE_NOT`.
    fn negation(&self, inner: Self::Query) -> Result<Self::Query, CompileError>;
}

/// Lowers a validated predicate into the target's query representation.
/// Total over the validated grammar for full-capability targets; limited
/// targets either get a rewritten tree (negation) or reject individual
/// terms (ordering).
pub fn lower<T: QueryTarget>(predicate: &Predicate, target: &T) -> Result<T::Query, CompileError> {
    let caps = target.capabilities();

    if !caps.contains(TargetCapabilities::NATIVE_NOT) {
        let rewritten = push_down_negations(predicate);
        debug!(target = target.name(), "rewrote negations before lowering");
        return lower_node(&rewritten, target, caps);
    }
    lower_node(predicate, target, caps)
}

fn lower_node<T: QueryTarget>(
    predicate: &Predicate,
    target: &T,
    caps: TargetCapabilities,
) -> Result<T::Query, CompileError> {
    match &predicate.kind {
        PredicateKind::Comparison { field, op, value } => {
            if op.is_ordering() && !caps.contains(TargetCapabilities::ORDERED_COMPARISONS) {
                return Err(CompileError::UnsupportedComparison {
                    field: field.name.clone(),
                    op: *op,
                    target: target.name().to_string(),
                });
            }
            target.term(field, *op, value)
        }
        PredicateKind::And(left, right) => {
            let left = lower_node(left, target, caps)?;
            let right = lower_node(right, target, caps)?;
            Ok(target.conjunction(left, right))
        }
        PredicateKind::Or(left, right) => {
            let left = lower_node(left, target, caps)?;
            let right = lower_node(right, target, caps)?;
            Ok(target.disjunction(left, right))
        }
        PredicateKind::Not(inner) => {
            let inner = lower_node(inner, target, caps)?;
            target.negation(inner)
        }
    }
}

/// Eliminates every `Not` node by algebraic rewrite: De Morgan over
/// `And`/`Or`, operator negation at comparison level, and double-negation
/// elimination. Spans are preserved so diagnostics keep pointing at the
/// original text.
pub fn push_down_negations(predicate: &Predicate) -> Predicate {
    match &predicate.kind {
        PredicateKind::Comparison { .. } => predicate.clone(),
        PredicateKind::And(left, right) => Predicate::new(
            PredicateKind::And(
                Box::new(push_down_negations(left)),
                Box::new(push_down_negations(right)),
            ),
            predicate.span,
        ),
        PredicateKind::Or(left, right) => Predicate::new(
            PredicateKind::Or(
                Box::new(push_down_negations(left)),
                Box::new(push_down_negations(right)),
            ),
            predicate.span,
        ),
        PredicateKind::Not(inner) => negate(inner),
    }
}

fn negate(predicate: &Predicate) -> Predicate {
    match &predicate.kind {
        PredicateKind::Comparison { field, op, value } => Predicate::new(
            PredicateKind::Comparison {
                field: field.clone(),
                op: op.negated(),
                value: value.clone(),
            },
            predicate.span,
        ),
        // NOT NOT x == x
        PredicateKind::Not(inner) => push_down_negations(inner),
        // NOT (a AND b) == NOT a OR NOT b
        PredicateKind::And(left, right) => Predicate::new(
            PredicateKind::Or(Box::new(negate(left)), Box::new(negate(right))),
            predicate.span,
        ),
        // NOT (a OR b) == NOT a AND NOT b
        PredicateKind::Or(left, right) => Predicate::new(
            PredicateKind::And(Box::new(negate(left)), Box::new(negate(right))),
            predicate.span,
        ),
    }
}
