//! Type equivalence modulo type abbreviations

use crate::context::Context;
use crate::syntax::{Binding, Type};

const MODULE: &str = "typecheck::equiv";

/// Unfold a type variable bound to an abbreviation, one level
pub fn compute_ty(ctx: &Context, ty: &Type) -> Option<Type> {
    match *ty {
        Type::Var(i, _) => match ctx.get_binding(i) {
            Ok(Binding::TyAbb(ty)) => Some(ty),
            _ => None,
        },
        _ => None,
    }
}

/// Unfold abbreviations at the head of `ty` until there are none left.
/// A cyclic abbreviation does not terminate.
pub fn simplify_ty(ctx: &Context, ty: Type) -> Type {
    let mut ty = ty;
    while let Some(unfolded) = compute_ty(ctx, &ty) {
        ty = unfolded;
    }
    ty
}

pub fn type_equiv(ctx: &Context, s: &Type, t: &Type) -> bool {
    let s = simplify_ty(ctx, s.clone());
    let t = simplify_ty(ctx, t.clone());
    let equiv = match (&s, &t) {
        (Type::Id(a), Type::Id(b)) => a == b,
        (Type::Var(i, _), Type::Var(j, _)) => i == j,
        (Type::Arr(s1, s2), Type::Arr(t1, t2)) => {
            type_equiv(ctx, s1, t1) && type_equiv(ctx, s2, t2)
        }
        // positional: labels never take part in the comparison
        (Type::Record(fs), Type::Record(ft)) => {
            fs.len() == ft.len()
                && fs
                    .iter()
                    .zip(ft.iter())
                    .all(|((_, s), (_, t))| type_equiv(ctx, s, t))
        }
        (Type::All(x, s1), Type::All(_, t1))
        | (Type::Some(x, s1), Type::Some(_, t1)) => {
            type_equiv(&ctx.add_name(x), s1, t1)
        }
        (a, b) if a.is_base() => a == b,
        _ => false,
    };
    crate::debug_trace!(MODULE, "{:?} == {:?}: {}", s, t, equiv);
    equiv
}
