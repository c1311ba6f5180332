//! Shifting and substitution over de Bruijn indexed types and terms.
//!
//! Both walkers take a cutoff `c`, the number of binders crossed so far, and
//! a callback invoked at variable leaves only. Every other node is rebuilt
//! with its children walked. Shifting and the various substitutions are all
//! instances of these two walkers.

use crate::syntax::{Binding, Term, Type};

use std::cell::Cell;

pub trait Shift: Sized {
    /// Shift every free variable at or above cutoff `c` by `d`
    fn shift_above(self, d: isize, c: usize) -> Self;

    fn shift(self, d: isize) -> Self {
        self.shift_above(d, 0)
    }
}

fn shifted(x: usize, d: isize) -> usize {
    let y = x as isize + d;
    if y < 0 {
        panic!("de Bruijn index underflow: {} shifted by {}", x, d);
    }
    y as usize
}

impl Type {
    pub fn map_vars<F>(self, c: usize, onvar: &F) -> Type
    where
        F: Fn(usize, usize, usize) -> Type,
    {
        match self {
            Type::Var(x, n) => onvar(c, x, n),
            Type::Arr(from, to) => Type::Arr(
                Box::new((*from).map_vars(c, onvar)),
                Box::new((*to).map_vars(c, onvar)),
            ),
            Type::Record(fields) => {
                Type::Record(fields.map_owned(|ty| ty.map_vars(c, onvar)))
            }
            Type::All(name, body) => {
                Type::All(name, Box::new((*body).map_vars(c + 1, onvar)))
            }
            Type::Some(name, body) => {
                Type::Some(name, Box::new((*body).map_vars(c + 1, onvar)))
            }
            t @ Type::Id(_)
            | t @ Type::Bool
            | t @ Type::Nat
            | t @ Type::String
            | t @ Type::Unit
            | t @ Type::Float => t,
        }
    }

    /// Replace variable `j` with `ty`. Under `c` binders the variable is
    /// `j + c` and the replacement is shifted by `c`.
    pub fn subst(self, j: usize, ty: &Type) -> Type {
        let onvar = |c: usize, x: usize, n: usize| {
            if x == j + c {
                ty.clone().shift(c as isize)
            } else {
                Type::Var(x, n)
            }
        };
        self.map_vars(0, &onvar)
    }

    /// Substitute `ty` for the variable bound by an eliminated binder
    pub fn subst_top(self, ty: Type) -> Type {
        self.subst(0, &ty.shift(1)).shift(-1)
    }

    /// Whether some free variable refers to one of the `k` innermost
    /// context entries
    pub fn mentions_innermost(&self, k: usize) -> bool {
        let hit = Cell::new(false);
        let onvar = |c: usize, x: usize, n: usize| {
            if x >= c && x < c + k {
                hit.set(true);
            }
            Type::Var(x, n)
        };
        self.clone().map_vars(0, &onvar);
        hit.get()
    }
}

impl Shift for Type {
    fn shift_above(self, d: isize, c: usize) -> Type {
        let onvar = |c: usize, x: usize, n: usize| {
            if x >= c {
                Type::Var(shifted(x, d), shifted(n, d))
            } else {
                Type::Var(x, shifted(n, d))
            }
        };
        self.map_vars(c, &onvar)
    }
}

impl Term {
    /// Walk the term, calling `onvar(c, x, n)` at term variables and
    /// `ontype(c, ty)` at every embedded type
    pub fn map_vars<F, G>(self, c: usize, onvar: &F, ontype: &G) -> Term
    where
        F: Fn(usize, usize, usize) -> Term,
        G: Fn(usize, Type) -> Type,
    {
        let walk = |t: Box<Term>, c: usize| Box::new((*t).map_vars(c, onvar, ontype));
        match self {
            Term::Var(x, n) => onvar(c, x, n),
            Term::Abs(name, ty, body) => {
                Term::Abs(name, ontype(c, ty), walk(body, c + 1))
            }
            Term::App(t1, t2) => Term::App(walk(t1, c), walk(t2, c)),
            Term::Let(name, t1, t2) => Term::Let(name, walk(t1, c), walk(t2, c + 1)),
            Term::Fix(t) => Term::Fix(walk(t, c)),
            Term::Record(fields) => Term::Record(
                fields.map_owned(|t| t.map_vars(c, onvar, ontype)),
            ),
            Term::Proj(t, label) => Term::Proj(walk(t, c), label),
            Term::If(cond, t1, t2) => {
                Term::If(walk(cond, c), walk(t1, c), walk(t2, c))
            }
            Term::Succ(t) => Term::Succ(walk(t, c)),
            Term::Pred(t) => Term::Pred(walk(t, c)),
            Term::IsZero(t) => Term::IsZero(walk(t, c)),
            Term::TimesFloat(t1, t2) => Term::TimesFloat(walk(t1, c), walk(t2, c)),
            Term::Ascribe(t, ty) => Term::Ascribe(walk(t, c), ontype(c, ty)),
            Term::TyAbs(name, body) => Term::TyAbs(name, walk(body, c + 1)),
            Term::TyApp(t, ty) => Term::TyApp(walk(t, c), ontype(c, ty)),
            Term::Pack(witness, t, ty) => {
                Term::Pack(ontype(c, witness), walk(t, c), ontype(c, ty))
            }
            Term::Unpack(ty_name, name, t1, t2) => {
                Term::Unpack(ty_name, name, walk(t1, c), walk(t2, c + 2))
            }
            t @ Term::Bool(_)
            | t @ Term::Zero
            | t @ Term::String(_)
            | t @ Term::Unit
            | t @ Term::Float(_) => t,
        }
    }

    /// Replace term variable `j` with `s`; embedded types are left alone
    pub fn subst(self, j: usize, s: &Term) -> Term {
        let onvar = |c: usize, x: usize, n: usize| {
            if x == j + c {
                s.clone().shift(c as isize)
            } else {
                Term::Var(x, n)
            }
        };
        self.map_vars(0, &onvar, &|_, ty| ty)
    }

    /// Substitute `s` for the variable bound by an eliminated binder
    pub fn subst_top(self, s: Term) -> Term {
        self.subst(0, &s.shift(1)).shift(-1)
    }

    /// Replace type variable `j` with `ty` inside every embedded type; term
    /// variables keep their indices
    pub fn subst_type(self, j: usize, ty: &Type) -> Term {
        self.map_vars(
            0,
            &|_, x, n| Term::Var(x, n),
            &|c, inner: Type| inner.subst(j + c, &ty.clone().shift(c as isize)),
        )
    }

    pub fn subst_type_top(self, ty: Type) -> Term {
        self.subst_type(0, &ty.shift(1)).shift(-1)
    }
}

impl Shift for Term {
    fn shift_above(self, d: isize, c: usize) -> Term {
        let onvar = |c: usize, x: usize, n: usize| {
            if x >= c {
                Term::Var(shifted(x, d), shifted(n, d))
            } else {
                Term::Var(x, shifted(n, d))
            }
        };
        self.map_vars(c, &onvar, &|c, ty: Type| ty.shift_above(d, c))
    }
}

impl Shift for Binding {
    fn shift_above(self, d: isize, c: usize) -> Binding {
        match self {
            Binding::Var(ty) => Binding::Var(ty.shift_above(d, c)),
            Binding::TyAbb(ty) => Binding::TyAbb(ty.shift_above(d, c)),
            Binding::TmAbb(t, ty) => Binding::TmAbb(
                t.shift_above(d, c),
                ty.map(|ty| ty.shift_above(d, c)),
            ),
            b @ Binding::Name | b @ Binding::TyVar => b,
        }
    }
}
