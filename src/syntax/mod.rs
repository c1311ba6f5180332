pub mod term;
pub mod ty;

pub use self::term::Term;
pub use self::ty::Type;

use std::fmt;

/// Record field label. Unlabeled (tuple) fields get their 1-based source
/// position as a label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    Name(String),
    Pos(usize),
}

impl From<&str> for Label {
    fn from(name: &str) -> Label {
        Label::Name(name.to_string())
    }
}

impl From<usize> for Label {
    fn from(pos: usize) -> Label {
        Label::Pos(pos)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Label::Name(ref s) => write!(f, "{}", s),
            Label::Pos(n) => write!(f, "{}", n),
        }
    }
}

/// Payload of a context entry
#[derive(Clone, Debug, PartialEq)]
pub enum Binding {
    /// name only, used while walking under a binder whose payload is irrelevant
    Name,
    /// term variable of the given type
    Var(Type),
    TyVar,
    /// term abbreviation with its type, once known
    TmAbb(Term, Option<Type>),
    /// type synonym, unfolded by type equivalence
    TyAbb(Type),
}

/// Source location of a toplevel command
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Info {
    pub file: String,
    pub line: usize,
}

impl Info {
    pub fn new(file: &str, line: usize) -> Info {
        Info {
            file: file.to_string(),
            line,
        }
    }
}

impl fmt::Display for Info {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{}:{}>", self.file, self.line)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// evaluate a term and report its type
    Eval(Info, Term),
    /// add a named binding to the ambient context
    Bind(Info, String, Binding),
    /// `{X, x} = t`: open an existential package at toplevel
    SomeBind(Info, String, String, Term),
}

impl Command {
    pub fn info(&self) -> &Info {
        match *self {
            Command::Eval(ref info, _)
            | Command::Bind(ref info, _, _)
            | Command::SomeBind(ref info, _, _, _) => info,
        }
    }
}
