use crate::context::Context;
use crate::errors::TypeError;
use crate::syntax::{Binding, Term, Type};

pub mod equiv;
pub mod fullpoly;

pub use self::equiv::{simplify_ty, type_equiv};
pub use self::fullpoly::type_of;

/// Synthesizes the type of a term in a context. Alternate checkers (with
/// subtyping, say) plug in here without touching evaluation.
pub type TypeChecker = fn(&Context, &Term) -> Result<Type, TypeError>;

/// Fill in or check the type of a term abbreviation before it is added to
/// the context. Other bindings carry nothing to check.
pub fn check_binding(
    typecheck: TypeChecker,
    ctx: &Context,
    binding: Binding,
) -> Result<Binding, TypeError> {
    match binding {
        Binding::TmAbb(t, None) => {
            let ty = typecheck(ctx, &t)?;
            Ok(Binding::TmAbb(t, Some(ty)))
        }
        Binding::TmAbb(t, Some(expected)) => {
            let found = typecheck(ctx, &t)?;
            if type_equiv(ctx, &found, &expected) {
                Ok(Binding::TmAbb(t, Some(expected)))
            } else {
                Err(TypeError::BindingTypeMismatch { expected, found })
            }
        }
        b => Ok(b),
    }
}
