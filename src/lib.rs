//! Evaluation and type checking for a lambda calculus with records,
//! universal types and existential types.
//!
//! Terms arrive already resolved to de Bruijn indices against a [`Context`].
//! [`eval::evaluate`] reduces a term to normal form, [`typecheck::type_of`]
//! synthesizes its type, and [`Program`] threads toplevel commands through an
//! ambient context.

pub mod assoclist;
pub mod context;
pub mod debug;
pub mod errors;
pub mod eval;
pub mod program;
pub mod shift;
pub mod syntax;
pub mod typecheck;

#[cfg(test)]
mod testing;

pub use context::Context;
pub use errors::{ContextError, EvalError, ProgramError, TypeError};
pub use eval::{eval1, eval_binding, evaluate, Step};
pub use program::{Output, Program};
pub use shift::Shift;
pub use syntax::{Binding, Command, Info, Label, Term, Type};
pub use typecheck::{type_equiv, type_of, TypeChecker};
