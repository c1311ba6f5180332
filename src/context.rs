//! Naming context for de Bruijn indices.
//!
//! A context is a persistent stack of `(name, binding)` entries. Index 0 is
//! the most recent entry. Extending a context never touches the receiver, so
//! a sub-derivation that extends it cannot leak entries back to its caller.

use crate::errors::ContextError;
use crate::shift::Shift;
use crate::syntax::Binding;

use std::rc::Rc;

#[derive(Debug)]
struct Node {
    name: String,
    binding: Binding,
    next: Option<Rc<Node>>,
}

#[derive(Clone, Debug, Default)]
pub struct Context {
    head: Option<Rc<Node>>,
    len: usize,
}

impl Context {
    pub fn empty() -> Context {
        Context { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn add(&self, name: String, binding: Binding) -> Context {
        Context {
            head: Some(Rc::new(Node {
                name,
                binding,
                next: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub fn add_name(&self, name: &str) -> Context {
        self.add(name.to_string(), Binding::Name)
    }

    /// Drop the most recent entry. Popping an empty context is a bug in the
    /// caller.
    pub fn pop(&self) -> Context {
        match self.head {
            Some(ref node) => Context {
                head: node.next.clone(),
                len: self.len - 1,
            },
            None => panic!("popped an empty context"),
        }
    }

    /// Entries from the most recent outward, unshifted
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_ref().map(|node| &**node),
        }
    }

    /// The entry at `index`, with its payload shifted to be valid in this
    /// context rather than the shorter one it was recorded in
    pub fn get(&self, index: usize) -> Result<(String, Binding), ContextError> {
        match self.iter().nth(index) {
            Some((name, binding)) => Ok((
                name.to_string(),
                binding.clone().shift(index as isize + 1),
            )),
            None => Err(ContextError::IndexOutOfRange {
                index,
                len: self.len,
            }),
        }
    }

    pub fn get_binding(&self, index: usize) -> Result<Binding, ContextError> {
        self.get(index).map(|(_, binding)| binding)
    }

    pub fn index_to_name(&self, index: usize) -> Result<String, ContextError> {
        self.iter()
            .nth(index)
            .map(|(name, _)| name.to_string())
            .ok_or(ContextError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// Index of the innermost entry called `name`
    pub fn lookup_index(&self, name: &str) -> Result<usize, ContextError> {
        self.iter()
            .position(|(entry, _)| entry == name)
            .ok_or_else(|| ContextError::UnboundIdentifier(name.to_string()))
    }

    pub fn is_name_bound(&self, name: &str) -> bool {
        self.iter().any(|(entry, _)| entry == name)
    }

    /// `base` with primes appended until it no longer clashes with a bound
    /// name. Only used for display.
    pub fn fresh_name(&self, base: &str) -> String {
        let mut name = base.to_string();
        while self.is_name_bound(&name) {
            name.push('\'');
        }
        name
    }

    /// Aborts when a variable built for a context of length `tag` shows up in
    /// a context of a different length.
    pub fn check_tag(&self, index: usize, tag: usize) {
        if tag != self.len {
            panic!(
                "variable {} was built for a context of length {} but the \
                 context has length {}",
                index, tag, self.len
            );
        }
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Binding);

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_ref().map(|next| &**next);
            (node.name.as_str(), &node.binding)
        })
    }
}
