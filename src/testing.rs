//! Random generators for property tests

use crate::assoclist::AssocList;
use crate::context::Context;
use crate::syntax::{Binding, Label, Term, Type};

use quickcheck::{Arbitrary, Gen};
use rand::Rng;

use std::cell::Cell;

const MAX_DEPTH: usize = 4;

/// A term and the length of a context it is well scoped in
#[derive(Clone, Debug)]
pub struct ScopedTerm(pub Term, pub usize);

/// A type and the length of a context it is well scoped in
#[derive(Clone, Debug)]
pub struct ScopedType(pub Type, pub usize);

/// A closed term and the type it was built at
#[derive(Clone, Debug)]
pub struct WellTyped(pub Term, pub Type);

/// `(\x:param_ty. body) arg` with `arg` a value
#[derive(Clone, Debug)]
pub struct Redex {
    pub param_ty: Type,
    pub arg: Term,
    pub body: Term,
}

/// A context of `n` type entries, every other one an abbreviation over the
/// type variable just before it
pub fn type_context(n: usize) -> Context {
    (0..n).fold(Context::empty(), |ctx, k| {
        if k % 2 == 1 {
            ctx.add(
                format!("A{}", k),
                Binding::TyAbb(Type::arr(Type::Var(0, k), Type::Nat)),
            )
        } else {
            ctx.add(format!("X{}", k), Binding::TyVar)
        }
    })
}

fn check_tag(ok: &Cell<bool>, depth: usize, x: usize, n: usize) {
    if n != depth || x >= n {
        ok.set(false);
    }
}

/// Whether every variable in `ty` carries the length of the context it sits
/// in, for `ty` living in a context of length `len`
pub fn type_well_tagged(ty: &Type, len: usize) -> bool {
    let ok = Cell::new(true);
    ty.clone().map_vars(0, &|c, x, n| {
        check_tag(&ok, len + c, x, n);
        Type::Var(x, n)
    });
    ok.get()
}

pub fn well_tagged(t: &Term, len: usize) -> bool {
    let ok = Cell::new(true);
    t.clone().map_vars(
        0,
        &|c, x, n| {
            check_tag(&ok, len + c, x, n);
            Term::Var(x, n)
        },
        &|c, ty: Type| {
            if !type_well_tagged(&ty, len + c) {
                ok.set(false);
            }
            ty
        },
    );
    ok.get()
}

fn depth<G: Gen>(g: &mut G) -> usize {
    let max = MAX_DEPTH.min(g.size());
    g.gen_range(0, max + 1)
}

fn scoped_type<G: Gen>(g: &mut G, n: usize, size: usize) -> Type {
    if size == 0 || g.gen_bool(0.3) {
        return match g.gen_range(0, 6) {
            0 if n > 0 => Type::Var(g.gen_range(0, n), n),
            1 => Type::Nat,
            2 => Type::Unit,
            3 => Type::Id("A".into()),
            4 => Type::String,
            _ => Type::Bool,
        };
    }
    let s = size - 1;
    match g.gen_range(0, 4) {
        0 => Type::arr(scoped_type(g, n, s), scoped_type(g, n, s)),
        1 => Type::all("X", scoped_type(g, n + 1, s)),
        2 => Type::some("X", scoped_type(g, n + 1, s)),
        _ => Type::record(vec![
            (Label::from("a"), scoped_type(g, n, s)),
            (Label::Pos(2), scoped_type(g, n, s)),
        ]),
    }
}

fn scoped_term<G: Gen>(g: &mut G, n: usize, size: usize) -> Term {
    if size == 0 || g.gen_bool(0.2) {
        return match g.gen_range(0, 6) {
            0 | 1 if n > 0 => Term::Var(g.gen_range(0, n), n),
            2 => Term::Zero,
            3 => Term::Unit,
            4 => Term::String("s".into()),
            _ => Term::Bool(g.gen()),
        };
    }
    let s = size - 1;
    let boxed = |g: &mut G, n| Box::new(scoped_term(g, n, s));
    match g.gen_range(0, 14) {
        0 => Term::Abs("x".into(), scoped_type(g, n, 1), boxed(g, n + 1)),
        1 => Term::App(boxed(g, n), boxed(g, n)),
        2 => Term::Let("x".into(), boxed(g, n), boxed(g, n + 1)),
        3 => Term::tuple(vec![scoped_term(g, n, s), scoped_term(g, n, s)]),
        4 => Term::Proj(boxed(g, n), Label::Pos(1)),
        5 => Term::If(boxed(g, n), boxed(g, n), boxed(g, n)),
        6 => Term::Succ(boxed(g, n)),
        7 => Term::TyAbs("X".into(), boxed(g, n + 1)),
        8 => Term::TyApp(boxed(g, n), scoped_type(g, n, 1)),
        9 => Term::Pack(
            scoped_type(g, n, 1),
            boxed(g, n),
            Type::some("X", scoped_type(g, n + 1, 1)),
        ),
        10 => Term::Unpack("X".into(), "x".into(), boxed(g, n), boxed(g, n + 2)),
        11 => Term::Ascribe(boxed(g, n), scoped_type(g, n, 1)),
        12 => Term::Fix(boxed(g, n)),
        _ => Term::TimesFloat(boxed(g, n), Box::new(Term::Float(1.5))),
    }
}

fn closed_type<G: Gen>(g: &mut G, size: usize) -> Type {
    if size == 0 || g.gen_bool(0.4) {
        return match g.gen_range(0, 3) {
            0 => Type::Nat,
            1 => Type::Unit,
            _ => Type::Bool,
        };
    }
    let s = size - 1;
    if g.gen() {
        Type::arr(closed_type(g, s), closed_type(g, s))
    } else {
        Type::record(vec![
            (Label::Pos(1), closed_type(g, s)),
            (Label::Pos(2), closed_type(g, s)),
        ])
    }
}

/// Slots are oldest first; `None` marks a slot that no generated variable
/// may refer to
type Env = Vec<Option<Type>>;

fn var_of<G: Gen>(g: &mut G, env: &Env, ty: &Type) -> Option<Term> {
    let candidates: Vec<usize> = env
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.as_ref() == Some(ty))
        .map(|(i, _)| env.len() - 1 - i)
        .collect();
    if candidates.is_empty() {
        None
    } else {
        let pick = candidates[g.gen_range(0, candidates.len())];
        Some(Term::Var(pick, env.len()))
    }
}

fn value_of<G: Gen>(g: &mut G, env: &mut Env, ty: &Type) -> Term {
    match *ty {
        Type::Bool => Term::Bool(g.gen()),
        Type::Nat => Term::nat(g.gen_range(0, 3)),
        Type::Unit => Term::Unit,
        Type::String => Term::String("s".into()),
        Type::Float => Term::Float(1.0),
        Type::Arr(ref from, ref to) => {
            env.push(Some((**from).clone()));
            let body = typed_term(g, env, to, 0);
            env.pop();
            Term::abs("x", (**from).clone(), body)
        }
        Type::Record(ref fields) => Term::Record(AssocList::from_vec(
            fields
                .iter()
                .map(|(label, ty)| (label.clone(), value_of(g, env, ty)))
                .collect(),
        )),
        _ => unreachable!("no values generated at {:?}", ty),
    }
}

fn typed_term<G: Gen>(g: &mut G, env: &mut Env, ty: &Type, size: usize) -> Term {
    if size == 0 || g.gen_bool(0.25) {
        if g.gen() {
            if let Some(var) = var_of(g, env, ty) {
                return var;
            }
        }
        return value_of(g, env, ty);
    }
    let n = env.len();
    let s = size - 1;
    match g.gen_range(0, 8) {
        0 => {
            let cond = typed_term(g, env, &Type::Bool, s);
            let t1 = typed_term(g, env, ty, s);
            let t2 = typed_term(g, env, ty, s);
            Term::if_(cond, t1, t2)
        }
        1 => {
            let param = closed_type(g, 1);
            let arg = typed_term(g, env, &param, s);
            env.push(Some(param.clone()));
            let body = typed_term(g, env, ty, s);
            env.pop();
            Term::app(Term::abs("y", param, body), arg)
        }
        2 => {
            let bound_ty = closed_type(g, 1);
            let bound = typed_term(g, env, &bound_ty, s);
            env.push(Some(bound_ty));
            let body = typed_term(g, env, ty, s);
            env.pop();
            Term::let_("z", bound, body)
        }
        3 => {
            let other = closed_type(g, 1);
            let first = typed_term(g, env, ty, s);
            let second = typed_term(g, env, &other, s);
            Term::proj(Term::tuple(vec![first, second]), 1)
        }
        4 => {
            env.push(None);
            let body = typed_term(g, env, ty, s);
            env.pop();
            Term::ty_app(Term::ty_abs("X", body), closed_type(g, 1))
        }
        5 => Term::Ascribe(Box::new(typed_term(g, env, ty, s)), ty.clone()),
        6 => {
            let witness = closed_type(g, 1);
            let payload = typed_term(g, env, &witness, s);
            let package =
                Term::pack(witness, payload, Type::some("X", Type::Var(0, n + 1)));
            env.push(None);
            env.push(None);
            let body = typed_term(g, env, ty, s);
            env.pop();
            env.pop();
            Term::unpack("X", "p", package, body)
        }
        _ => match *ty {
            Type::Nat if g.gen() => Term::Succ(Box::new(typed_term(g, env, ty, s))),
            Type::Nat => Term::Pred(Box::new(typed_term(g, env, ty, s))),
            Type::Bool => {
                Term::IsZero(Box::new(typed_term(g, env, &Type::Nat, s)))
            }
            Type::Arr(ref from, ref to) => {
                env.push(Some((**from).clone()));
                let body = typed_term(g, env, to, s);
                env.pop();
                Term::abs("x", (**from).clone(), body)
            }
            _ => value_of(g, env, ty),
        },
    }
}

impl Arbitrary for ScopedType {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let n = g.gen_range(0, 4);
        let size = depth(g);
        ScopedType(scoped_type(g, n, size), n)
    }
}

impl Arbitrary for ScopedTerm {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let n = g.gen_range(0, 4);
        let size = depth(g);
        ScopedTerm(scoped_term(g, n, size), n)
    }
}

impl Arbitrary for WellTyped {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let ty = closed_type(g, 2);
        let size = depth(g);
        WellTyped(typed_term(g, &mut Vec::new(), &ty, size), ty)
    }
}

impl Arbitrary for Redex {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let param_ty = closed_type(g, 2);
        let arg = value_of(g, &mut Vec::new(), &param_ty);
        let ty = closed_type(g, 2);
        let size = depth(g);
        let body = typed_term(g, &mut vec![Some(param_ty.clone())], &ty, size);
        Redex { param_ty, arg, body }
    }
}
