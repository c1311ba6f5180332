//! Universal, existential and record types over the simply typed core

use crate::context::Context;
use crate::errors::TypeError;
use crate::shift::Shift;
use crate::syntax::{Binding, Term, Type};
use crate::typecheck::equiv::{simplify_ty, type_equiv};

const MODULE: &str = "typecheck::fullpoly";

pub fn type_of(ctx: &Context, term: &Term) -> Result<Type, TypeError> {
    let ty = match *term {
        Term::Var(i, n) => {
            ctx.check_tag(i, n);
            match ctx.get_binding(i)? {
                Binding::Var(ty) | Binding::TmAbb(_, Some(ty)) => ty,
                _ => {
                    return Err(TypeError::WrongBindingKind(
                        ctx.index_to_name(i)?,
                    ))
                }
            }
        }
        Term::Abs(ref param, ref ty, ref body) => {
            let ctx = ctx.add(param.clone(), Binding::Var(ty.clone()));
            let body_ty = type_of(&ctx, body)?;
            Type::arr(ty.clone(), body_ty.shift(-1))
        }
        Term::App(ref func, ref arg) => {
            let func_ty = type_of(ctx, func)?;
            let arg_ty = type_of(ctx, arg)?;
            match simplify_ty(ctx, func_ty) {
                Type::Arr(from, to) => {
                    if type_equiv(ctx, &arg_ty, &from) {
                        *to
                    } else {
                        return Err(TypeError::ParameterTypeMismatch {
                            expected: *from,
                            found: arg_ty,
                        });
                    }
                }
                other => return Err(TypeError::ArrowTypeExpected(other)),
            }
        }
        Term::Let(ref name, ref val, ref body) => {
            let val_ty = type_of(ctx, val)?;
            let ctx = ctx.add(name.clone(), Binding::Var(val_ty));
            type_of(&ctx, body)?.shift(-1)
        }
        Term::Fix(ref t) => match simplify_ty(ctx, type_of(ctx, t)?) {
            Type::Arr(domain, codomain) => {
                if type_equiv(ctx, &codomain, &domain) {
                    *codomain
                } else {
                    return Err(TypeError::FixDomainMismatch {
                        domain: *domain,
                        codomain: *codomain,
                    });
                }
            }
            other => return Err(TypeError::ArrowTypeExpected(other)),
        },
        Term::Record(ref fields) => {
            Type::Record(fields.map_val(|t| type_of(ctx, t))?)
        }
        Term::Proj(ref t, ref label) => match simplify_ty(ctx, type_of(ctx, t)?) {
            Type::Record(fields) => fields
                .get(label)
                .cloned()
                .ok_or_else(|| TypeError::LabelNotFound(label.clone()))?,
            other => return Err(TypeError::ExpectedRecordType(other)),
        },
        Term::If(ref cond, ref t1, ref t2) => {
            let cond_ty = type_of(ctx, cond)?;
            if !type_equiv(ctx, &cond_ty, &Type::Bool) {
                return Err(TypeError::GuardNotBoolean(cond_ty));
            }
            let then_ty = type_of(ctx, t1)?;
            let else_ty = type_of(ctx, t2)?;
            if type_equiv(ctx, &then_ty, &else_ty) {
                then_ty
            } else {
                return Err(TypeError::BranchTypeMismatch(then_ty, else_ty));
            }
        }
        Term::Bool(_) => Type::Bool,
        Term::Zero => Type::Nat,
        Term::Succ(ref t) | Term::Pred(ref t) => {
            expect_nat(ctx, t)?;
            Type::Nat
        }
        Term::IsZero(ref t) => {
            expect_nat(ctx, t)?;
            Type::Bool
        }
        Term::String(_) => Type::String,
        Term::Unit => Type::Unit,
        Term::Float(_) => Type::Float,
        Term::TimesFloat(ref t1, ref t2) => {
            for t in &[t1, t2] {
                let ty = type_of(ctx, t)?;
                if !type_equiv(ctx, &ty, &Type::Float) {
                    return Err(TypeError::ExpectedFloat(ty));
                }
            }
            Type::Float
        }
        Term::Ascribe(ref t, ref ty) => {
            let found = type_of(ctx, t)?;
            if type_equiv(ctx, &found, ty) {
                ty.clone()
            } else {
                return Err(TypeError::AscriptionMismatch {
                    expected: ty.clone(),
                    found,
                });
            }
        }
        Term::TyAbs(ref name, ref body) => {
            let ctx = ctx.add(name.clone(), Binding::TyVar);
            Type::All(name.clone(), Box::new(type_of(&ctx, body)?))
        }
        Term::TyApp(ref t, ref arg) => match simplify_ty(ctx, type_of(ctx, t)?) {
            Type::All(_, body) => (*body).subst_top(arg.clone()),
            other => return Err(TypeError::UniversalTypeExpected(other)),
        },
        Term::Pack(ref witness, ref t, ref ty) => {
            match simplify_ty(ctx, ty.clone()) {
                Type::Some(_, body) => {
                    let expected = (*body).subst_top(witness.clone());
                    let found = type_of(ctx, t)?;
                    if type_equiv(ctx, &found, &expected) {
                        ty.clone()
                    } else {
                        return Err(TypeError::PackTypeMismatch {
                            expected,
                            found,
                        });
                    }
                }
                other => return Err(TypeError::ExistentialTypeExpected(other)),
            }
        }
        Term::Unpack(ref ty_name, ref name, ref t1, ref t2) => {
            match simplify_ty(ctx, type_of(ctx, t1)?) {
                Type::Some(_, body) => {
                    let ctx = ctx
                        .add(ty_name.clone(), Binding::TyVar)
                        .add(name.clone(), Binding::Var(*body));
                    let body_ty = type_of(&ctx, t2)?;
                    // the hidden type must not leak out of the body
                    if body_ty.mentions_innermost(2) {
                        return Err(TypeError::ScopeEscape(ty_name.clone()));
                    }
                    body_ty.shift(-2)
                }
                other => return Err(TypeError::ExistentialTypeExpected(other)),
            }
        }
    };
    crate::debug_trace!(MODULE, "{:?} : {:?}", term, ty);
    Ok(ty)
}

fn expect_nat(ctx: &Context, t: &Term) -> Result<(), TypeError> {
    let ty = type_of(ctx, t)?;
    if type_equiv(ctx, &ty, &Type::Nat) {
        Ok(())
    } else {
        Err(TypeError::ExpectedNat(ty))
    }
}
