use crate::context::Context;
use crate::errors::{EvalError, ProgramError, TypeError};
use crate::eval::{eval_binding, evaluate};
use crate::shift::Shift;
use crate::syntax::{Binding, Command, Info, Term, Type};
use crate::typecheck::{check_binding, fullpoly, simplify_ty, TypeChecker};

const MODULE: &str = "program";

/// What a successfully processed command produced
#[derive(Clone, Debug, PartialEq)]
pub enum Output {
    /// normal form of a term and its type; `stuck` marks a normal form that
    /// is not a value
    Evaluated { term: Term, ty: Type, stuck: bool },
    Bound { name: String, binding: Binding },
    Unpacked {
        ty_name: String,
        var_name: String,
        ty: Type,
    },
}

/// A session: the ambient context that toplevel bindings accumulate in, and
/// the type checker commands are run through.
pub struct Program {
    ctx: Context,
    typecheck: TypeChecker,
}

impl Default for Program {
    fn default() -> Program {
        Program::new()
    }
}

impl Program {
    pub fn new() -> Program {
        Program::with_context(Context::empty())
    }

    pub fn with_context(ctx: Context) -> Program {
        Program {
            ctx,
            typecheck: fullpoly::type_of,
        }
    }

    pub fn with_typechecker(mut self, typecheck: TypeChecker) -> Program {
        self.typecheck = typecheck;
        self
    }

    pub fn set_typechecker(&mut self, typecheck: TypeChecker) {
        self.typecheck = typecheck;
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Run every command in order. A failing command leaves the context as
    /// it was and later commands still run.
    pub fn process_all(
        &mut self,
        cmds: Vec<Command>,
    ) -> Vec<Result<Output, ProgramError>> {
        cmds.into_iter()
            .map(|cmd| self.process_command(cmd))
            .collect()
    }

    pub fn process_command(
        &mut self,
        cmd: Command,
    ) -> Result<Output, ProgramError> {
        let result = match cmd {
            Command::Eval(ref info, ref t) => self.eval_term(info, t),
            Command::Bind(ref info, ref name, ref binding) => {
                self.bind(info, name, binding.clone())
            }
            Command::SomeBind(ref info, ref ty_name, ref var_name, ref t) => {
                self.unpack(info, ty_name, var_name, t)
            }
        };
        if let Err(ref err) = result {
            crate::debug_warn!(MODULE, "{}", err);
        }
        result
    }

    fn eval_term(&self, info: &Info, t: &Term) -> Result<Output, ProgramError> {
        let ty = (self.typecheck)(&self.ctx, t).map_err(type_err(info))?;
        let term = evaluate(&self.ctx, t).map_err(eval_err(info))?;
        let stuck = !term.is_val();
        if stuck {
            crate::debug_warn!(MODULE, "{} stuck at {:?}", info, term);
        } else {
            crate::debug_info!(MODULE, "{} {:?} : {:?}", info, term, ty);
        }
        Ok(Output::Evaluated { term, ty, stuck })
    }

    fn bind(
        &mut self,
        info: &Info,
        name: &str,
        binding: Binding,
    ) -> Result<Output, ProgramError> {
        let binding = check_binding(self.typecheck, &self.ctx, binding)
            .map_err(type_err(info))?;
        let binding =
            eval_binding(&self.ctx, binding).map_err(eval_err(info))?;
        crate::debug_info!(MODULE, "{} {} bound to {:?}", info, name, binding);
        self.ctx = self.ctx.add(name.to_string(), binding.clone());
        Ok(Output::Bound {
            name: name.to_string(),
            binding,
        })
    }

    /// `{X, x} = t` at toplevel: the witness stays abstract, but the payload
    /// of an evaluated package is kept as an abbreviation for `x`
    fn unpack(
        &mut self,
        info: &Info,
        ty_name: &str,
        var_name: &str,
        t: &Term,
    ) -> Result<Output, ProgramError> {
        let ty = (self.typecheck)(&self.ctx, t).map_err(type_err(info))?;
        let body = match simplify_ty(&self.ctx, ty) {
            Type::Some(_, body) => *body,
            other => {
                return Err(type_err(info)(TypeError::ExistentialTypeExpected(
                    other,
                )))
            }
        };
        let binding = match evaluate(&self.ctx, t).map_err(eval_err(info))? {
            Term::Pack(_, payload, _) => {
                Binding::TmAbb((*payload).shift(1), Some(body.clone()))
            }
            _ => Binding::Var(body.clone()),
        };
        crate::debug_info!(MODULE, "{} {{{}, {}}} opened", info, ty_name, var_name);
        self.ctx = self
            .ctx
            .add(ty_name.to_string(), Binding::TyVar)
            .add(var_name.to_string(), binding);
        Ok(Output::Unpacked {
            ty_name: ty_name.to_string(),
            var_name: var_name.to_string(),
            ty: body,
        })
    }
}

fn type_err(info: &Info) -> impl Fn(TypeError) -> ProgramError + '_ {
    move |source| ProgramError::Type {
        info: info.clone(),
        source,
    }
}

fn eval_err(info: &Info) -> impl Fn(EvalError) -> ProgramError + '_ {
    move |source| ProgramError::Eval {
        info: info.clone(),
        source,
    }
}
