pub mod capabilities;
pub mod compile;
pub mod error;
pub mod eval;
pub mod filter;
pub mod sql;
pub mod validate;

use model::{Schema, Value};
use tracing::debug;

pub use capabilities::TargetCapabilities;
pub use compile::{QueryTarget, lower, push_down_negations};
pub use error::{CompileError, EngineError, ValidationError};
pub use filter::{Filter, FilterTarget};
pub use sql::{SqlDialect, SqlQuery, SqlTarget};
pub use validate::validate;

/// Compiles a predicate string into the default [`Filter`] representation:
/// lex, parse (with positional `%@` substitution), validate against the
/// schema, then lower. Fails fast with the first error of any stage.
pub fn compile(
    text: &str,
    schema: &Schema,
    substitutions: &[Value],
) -> Result<Filter, EngineError> {
    compile_for(text, schema, substitutions, &FilterTarget)
}

/// Same pipeline, lowering into an alternative [`QueryTarget`].
pub fn compile_for<T: QueryTarget>(
    text: &str,
    schema: &Schema,
    substitutions: &[Value],
    target: &T,
) -> Result<T::Query, EngineError> {
    let predicate = sift_syntax::parse_predicate(text, substitutions)?;
    debug!(predicate = %predicate, "parsed");

    validate::validate(&predicate, schema)?;
    let query = compile::lower(&predicate, target)?;
    debug!(target = target.name(), "compiled");
    Ok(query)
}
