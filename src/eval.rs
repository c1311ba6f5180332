//! Small-step call-by-value evaluation

use crate::assoclist::AssocList;
use crate::context::Context;
use crate::errors::EvalError;
use crate::shift::Shift;
use crate::syntax::{Binding, Term};

const MODULE: &str = "eval";

/// Outcome of a single reduction step
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    Reduced(Term),
    /// no rule applies and the term is a value
    Value,
    /// no rule applies but the term is not a value either
    Stuck,
}

/// call eval1 on a term until no rule applies
pub fn evaluate(ctx: &Context, term: &Term) -> Result<Term, EvalError> {
    let mut current = term.clone();
    while let Some(next) = step(ctx, &current)? {
        crate::debug_trace!(MODULE, "{:?}\n  --> {:?}", current, next);
        current = next;
    }
    Ok(current)
}

pub fn eval1(ctx: &Context, term: &Term) -> Result<Step, EvalError> {
    Ok(match step(ctx, term)? {
        Some(next) => Step::Reduced(next),
        None if term.is_val() => Step::Value,
        None => Step::Stuck,
    })
}

/// Reduce the right hand side of a term abbreviation to a value. Every
/// other binding is returned as is.
pub fn eval_binding(
    ctx: &Context,
    binding: Binding,
) -> Result<Binding, EvalError> {
    match binding {
        Binding::TmAbb(t, ty) => {
            let val = evaluate(ctx, &t)?;
            crate::debug_debug!(MODULE, "abbreviation reduced to {:?}", val);
            Ok(Binding::TmAbb(val, ty))
        }
        b => Ok(b),
    }
}

/// One step of reduction, or None if no rule applies
fn step(ctx: &Context, term: &Term) -> Result<Option<Term>, EvalError> {
    let next = match *term {
        Term::App(ref t1, ref t2) => match **t1 {
            Term::Abs(_, _, ref body) if t2.is_val() => {
                Some((**body).clone().subst_top((**t2).clone()))
            }
            _ if t1.is_val() => {
                step(ctx, t2)?.map(|t2| Term::App(t1.clone(), Box::new(t2)))
            }
            _ => step(ctx, t1)?.map(|t1| Term::App(Box::new(t1), t2.clone())),
        },
        Term::Let(ref name, ref t1, ref t2) => {
            if t1.is_val() {
                Some((**t2).clone().subst_top((**t1).clone()))
            } else {
                step(ctx, t1)?.map(|t1| {
                    Term::Let(name.clone(), Box::new(t1), t2.clone())
                })
            }
        }
        Term::Fix(ref t) => match **t {
            Term::Abs(_, _, ref body) => {
                Some((**body).clone().subst_top(term.clone()))
            }
            _ => step(ctx, t)?.map(|t| Term::Fix(Box::new(t))),
        },
        Term::Record(ref fields) => {
            // stored last field first, so the first unevaluated field in
            // source order is the last one in storage
            match fields.inner.iter().rposition(|(_, t)| !t.is_val()) {
                Some(i) => step(ctx, &fields.inner[i].1)?.map(|t| {
                    let mut inner = fields.inner.clone();
                    inner[i].1 = t;
                    Term::Record(AssocList::from_vec(inner))
                }),
                None => None,
            }
        }
        Term::Proj(ref t, ref label) => match **t {
            Term::Record(ref fields) if t.is_val() => Some(
                fields
                    .get(label)
                    .cloned()
                    .ok_or_else(|| EvalError::LabelNotFound(label.clone()))?,
            ),
            _ => step(ctx, t)?.map(|t| Term::Proj(Box::new(t), label.clone())),
        },
        Term::If(ref cond, ref t1, ref t2) => match **cond {
            Term::Bool(true) => Some((**t1).clone()),
            Term::Bool(false) => Some((**t2).clone()),
            _ => step(ctx, cond)?
                .map(|cond| Term::If(Box::new(cond), t1.clone(), t2.clone())),
        },
        Term::Succ(ref t) => step(ctx, t)?.map(|t| Term::Succ(Box::new(t))),
        Term::Pred(ref t) => match **t {
            Term::Zero => Some(Term::Zero),
            Term::Succ(ref n) if n.is_numeric_val() => Some((**n).clone()),
            _ => step(ctx, t)?.map(|t| Term::Pred(Box::new(t))),
        },
        Term::IsZero(ref t) => match **t {
            Term::Zero => Some(Term::Bool(true)),
            Term::Succ(ref n) if n.is_numeric_val() => Some(Term::Bool(false)),
            _ => step(ctx, t)?.map(|t| Term::IsZero(Box::new(t))),
        },
        Term::TimesFloat(ref t1, ref t2) => match (&**t1, &**t2) {
            (Term::Float(a), Term::Float(b)) => Some(Term::Float(a * b)),
            _ if t1.is_val() => step(ctx, t2)?
                .map(|t2| Term::TimesFloat(t1.clone(), Box::new(t2))),
            _ => step(ctx, t1)?
                .map(|t1| Term::TimesFloat(Box::new(t1), t2.clone())),
        },
        Term::Ascribe(ref t, ref ty) => {
            if t.is_val() {
                Some((**t).clone())
            } else {
                step(ctx, t)?.map(|t| Term::Ascribe(Box::new(t), ty.clone()))
            }
        }
        Term::TyApp(ref t, ref ty) => match **t {
            Term::TyAbs(_, ref body) => {
                Some((**body).clone().subst_type_top(ty.clone()))
            }
            _ => step(ctx, t)?.map(|t| Term::TyApp(Box::new(t), ty.clone())),
        },
        Term::Pack(ref witness, ref t, ref ty) => step(ctx, t)?
            .map(|t| Term::Pack(witness.clone(), Box::new(t), ty.clone())),
        Term::Unpack(ref ty_name, ref name, ref t1, ref t2) => match **t1 {
            Term::Pack(ref witness, ref v, _) if v.is_val() => Some(
                (**t2)
                    .clone()
                    .subst_top((**v).clone().shift(1))
                    .subst_type_top(witness.clone()),
            ),
            _ => step(ctx, t1)?.map(|t1| {
                Term::Unpack(
                    ty_name.clone(),
                    name.clone(),
                    Box::new(t1),
                    t2.clone(),
                )
            }),
        },
        Term::Var(i, _) => match ctx.get_binding(i)? {
            Binding::TmAbb(t, _) => Some(t),
            _ => None,
        },
        Term::Abs(..)
        | Term::TyAbs(..)
        | Term::Bool(_)
        | Term::Zero
        | Term::String(_)
        | Term::Unit
        | Term::Float(_) => None,
    };
    Ok(next)
}
