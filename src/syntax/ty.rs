use crate::assoclist::AssocList;
use crate::syntax::Label;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Type {
    /// type variable: de Bruijn index and the length of the context the
    /// variable was built in
    Var(usize, usize),
    /// free type identifier, left unresolved
    Id(String),
    Arr(Box<Type>, Box<Type>),
    /// Fields are compared by position, never by label.
    Record(AssocList<Label, Type>),
    Bool,
    Nat,
    String,
    Unit,
    Float,
    /// universal type; the name is only a printing hint
    All(String, Box<Type>),
    /// existential type; the name is only a printing hint
    Some(String, Box<Type>),
}

impl Type {
    pub fn arr(from: Type, to: Type) -> Type {
        Type::Arr(Box::new(from), Box::new(to))
    }

    pub fn all(name: &str, body: Type) -> Type {
        Type::All(name.to_string(), Box::new(body))
    }

    pub fn some(name: &str, body: Type) -> Type {
        Type::Some(name.to_string(), Box::new(body))
    }

    /// Build a record type from fields given in source order
    pub fn record(fields: Vec<(Label, Type)>) -> Type {
        Type::Record(AssocList::from_source_order(fields))
    }

    pub fn is_base(&self) -> bool {
        match *self {
            Type::Bool | Type::Nat | Type::String | Type::Unit | Type::Float => {
                true
            }
            _ => false,
        }
    }
}
