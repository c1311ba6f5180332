use crate::syntax::{Info, Label, Type};

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ContextError {
    #[error("variable lookup failure: offset {index}, context size {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("identifier {0} is unbound")]
    UnboundIdentifier(String),
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum EvalError {
    #[error(transparent)]
    Context(#[from] ContextError),
    #[error("eval error: label {0} not found in record")]
    LabelNotFound(Label),
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeError {
    #[error(transparent)]
    Context(#[from] ContextError),
    #[error("wrong kind of binding for variable {0}")]
    WrongBindingKind(String),
    #[error("parameter type mismatch: expected {expected:?} but got {found:?}")]
    ParameterTypeMismatch { expected: Type, found: Type },
    #[error("arrow type expected, got {0:?}")]
    ArrowTypeExpected(Type),
    #[error("expected record type, got {0:?}")]
    ExpectedRecordType(Type),
    #[error("label {0} not found")]
    LabelNotFound(Label),
    #[error("guard of conditional not a boolean: {0:?}")]
    GuardNotBoolean(Type),
    #[error("arms of conditional have different types: {0:?} and {1:?}")]
    BranchTypeMismatch(Type, Type),
    #[error("existential type expected, got {0:?}")]
    ExistentialTypeExpected(Type),
    #[error("universal type expected, got {0:?}")]
    UniversalTypeExpected(Type),
    #[error("doesn't match declared type: expected {expected:?} but got {found:?}")]
    PackTypeMismatch { expected: Type, found: Type },
    #[error("body type of ascription does not match: expected {expected:?} but got {found:?}")]
    AscriptionMismatch { expected: Type, found: Type },
    #[error("result of body not compatible with domain: {domain:?} vs {codomain:?}")]
    FixDomainMismatch { domain: Type, codomain: Type },
    #[error("argument of numeric operator is not a number: {0:?}")]
    ExpectedNat(Type),
    #[error("argument of timesfloat is not a float: {0:?}")]
    ExpectedFloat(Type),
    #[error("type of binding does not match declared type: expected {expected:?} but got {found:?}")]
    BindingTypeMismatch { expected: Type, found: Type },
    #[error("scoping error: hidden type {0} escapes the body of its unpack")]
    ScopeEscape(String),
}

/// A failed command, tagged with where it came from
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ProgramError {
    #[error("{info} {source}")]
    Type { info: Info, source: TypeError },
    #[error("{info} {source}")]
    Eval { info: Info, source: EvalError },
}

impl ProgramError {
    pub fn info(&self) -> &Info {
        match self {
            ProgramError::Type { info, .. } | ProgramError::Eval { info, .. } => {
                info
            }
        }
    }
}
