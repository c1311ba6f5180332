use crate::assoclist::AssocList;
use crate::syntax::{Label, Type};

#[derive(Clone, Debug, PartialEq)]
pub enum Term {
    /// de Bruijn index and the length of the context the variable was built in
    Var(usize, usize),
    Abs(String, Type, Box<Term>),
    App(Box<Term>, Box<Term>),
    Let(String, Box<Term>, Box<Term>),
    Fix(Box<Term>),
    Record(AssocList<Label, Term>),
    Proj(Box<Term>, Label),
    If(Box<Term>, Box<Term>, Box<Term>),
    Bool(bool),
    Zero,
    Succ(Box<Term>),
    Pred(Box<Term>),
    IsZero(Box<Term>),
    String(String),
    Unit,
    Float(f64),
    TimesFloat(Box<Term>, Box<Term>),
    Ascribe(Box<Term>, Type),
    /// type abstraction (function from type to term)
    TyAbs(String, Box<Term>),
    TyApp(Box<Term>, Type),
    /// introduce an existential: the witness type, the implementation, and
    /// the existential type it should inhabit
    Pack(Type, Box<Term>, Type),
    /// open an existential, naming its hidden type and its implementation
    /// for the scope of the body
    Unpack(String, String, Box<Term>, Box<Term>),
}

impl Term {
    pub fn abs(param: &str, ty: Type, body: Term) -> Term {
        Term::Abs(param.to_string(), ty, Box::new(body))
    }

    pub fn app(func: Term, arg: Term) -> Term {
        Term::App(Box::new(func), Box::new(arg))
    }

    pub fn let_(name: &str, val: Term, body: Term) -> Term {
        Term::Let(name.to_string(), Box::new(val), Box::new(body))
    }

    pub fn if_(cond: Term, then: Term, else_: Term) -> Term {
        Term::If(Box::new(cond), Box::new(then), Box::new(else_))
    }

    /// Build a record from fields given in source order
    pub fn record(fields: Vec<(Label, Term)>) -> Term {
        Term::Record(AssocList::from_source_order(fields))
    }

    /// Build a tuple, labelling each field with its source position
    pub fn tuple(items: Vec<Term>) -> Term {
        Term::record(
            items
                .into_iter()
                .enumerate()
                .map(|(i, t)| (Label::Pos(i + 1), t))
                .collect(),
        )
    }

    pub fn proj<L: Into<Label>>(term: Term, label: L) -> Term {
        Term::Proj(Box::new(term), label.into())
    }

    /// numeral `n` as a chain of successors
    pub fn nat(n: u64) -> Term {
        (0..n).fold(Term::Zero, |t, _| Term::Succ(Box::new(t)))
    }

    pub fn ty_abs(name: &str, body: Term) -> Term {
        Term::TyAbs(name.to_string(), Box::new(body))
    }

    pub fn ty_app(term: Term, ty: Type) -> Term {
        Term::TyApp(Box::new(term), ty)
    }

    pub fn pack(witness: Type, term: Term, ty: Type) -> Term {
        Term::Pack(witness, Box::new(term), ty)
    }

    pub fn unpack(ty_name: &str, name: &str, package: Term, body: Term) -> Term {
        Term::Unpack(
            ty_name.to_string(),
            name.to_string(),
            Box::new(package),
            Box::new(body),
        )
    }

    /// The numeral's value, if this is a numeric value
    pub fn as_nat(&self) -> Option<u64> {
        match *self {
            Term::Zero => Some(0),
            Term::Succ(ref t) => t.as_nat().map(|n| n + 1),
            _ => None,
        }
    }

    pub fn is_numeric_val(&self) -> bool {
        self.as_nat().is_some()
    }

    pub fn is_val(&self) -> bool {
        match self {
            Term::Bool(_)
            | Term::String(_)
            | Term::Unit
            | Term::Float(_)
            | Term::Abs(_, _, _)
            | Term::TyAbs(_, _) => true,
            Term::Zero | Term::Succ(_) => self.is_numeric_val(),
            Term::Record(fields) => fields.iter().all(|(_, t)| t.is_val()),
            Term::Pack(_, t, _) => t.is_val(),
            Term::Var(_, _)
            | Term::App(_, _)
            | Term::Let(_, _, _)
            | Term::Fix(_)
            | Term::Proj(_, _)
            | Term::If(_, _, _)
            | Term::Pred(_)
            | Term::IsZero(_)
            | Term::TimesFloat(_, _)
            | Term::Ascribe(_, _)
            | Term::TyApp(_, _)
            | Term::Unpack(_, _, _, _) => false,
        }
    }
}
