//! Name-to-handler table through which the evaluator calls script functions.
//!
//! The process-wide table, [`GLOBAL_FUNCTIONS`], is built on first use from
//! [`Config::from_env`] and is read-only from then on.

use std::collections::HashMap;
use std::fmt;
use lazy_static::lazy_static;
use log::{debug, info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::functions;
use crate::value::Value;

pub type Handler = fn(&Config, &[Value]) -> Result<Value>;

/// Kind of value a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Number,
    Color,
    /// Anything; the handler checks the value itself.
    Any,
}

impl ParamKind {
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            ParamKind::Number => value.as_number().is_some(),
            ParamKind::Color => value.as_color().is_some(),
            ParamKind::Any => true,
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParamKind::Number => "number",
            ParamKind::Color => "color",
            ParamKind::Any => "value",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub name: &'static str,
    pub params: &'static [Param],
}

impl Signature {
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Checks the argument count, then each argument against its declared kind.
    pub fn check(&self, args: &[Value]) -> Result<()> {
        if args.len() != self.arity() {
            return Err(Error::WrongArity {
                name: self.name.to_string(),
                expected: self.arity(),
                given: args.len(),
            });
        }
        for (param, arg) in self.params.iter().zip(args) {
            if !param.kind.accepts(arg) {
                return Err(Error::WrongType {
                    function: self.name.to_string(),
                    param: param.name,
                    expected: param.kind,
                    found: arg.type_name(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub struct Function {
    pub signature: Signature,
    handler: Handler,
}

impl Function {
    pub fn call(&self, config: &Config, args: &[Value]) -> Result<Value> {
        (self.handler)(config, args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct FunctionMap {
    config: Config,
    functions: HashMap<&'static str, Function>,
}

impl FunctionMap {
    /// A table holding every built-in function.
    pub fn new(config: Config) -> Self {
        let mut map = Self::empty(config);
        functions::declare(&mut map);
        map
    }

    pub fn empty(config: Config) -> Self {
        Self {
            config,
            functions: HashMap::new(),
        }
    }

    pub fn declare(&mut self, signature: Signature, handler: Handler) {
        let function = Function { signature, handler };
        if self.functions.insert(signature.name, function).is_some() {
            warn!("Function '{}' declared twice, keeping the latest", signature.name);
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn get(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Checks `args` against the declared signature, then runs the handler.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let function = self
            .get(name)
            .ok_or_else(|| Error::UndefinedFunction(name.to_string()))?;
        function.signature.check(args)?;
        let result = function.call(&self.config, args);
        match &result {
            Ok(value) => debug!("{}({} args) -> {}", name, args.len(), self.render(value)),
            Err(e) => debug!("{}({} args) failed: {}", name, args.len(), e),
        }
        result
    }

    /// CSS text for `value` at the configured precision.
    pub fn render(&self, value: &Value) -> String {
        value.to_css(self.config.precision)
    }
}

lazy_static! {
    pub static ref GLOBAL_FUNCTIONS: FunctionMap = {
        let config = Config::from_env();
        info!("Function registry initialised: rounding {:?}, precision {}", config.rounding, config.precision);
        FunctionMap::new(config)
    };
}

/// Calls a built-in through [`GLOBAL_FUNCTIONS`].
pub fn call(name: &str, args: &[Value]) -> Result<Value> {
    GLOBAL_FUNCTIONS.call(name, args)
}

/// Renders a value through [`GLOBAL_FUNCTIONS`].
pub fn render(value: &Value) -> String {
    GLOBAL_FUNCTIONS.render(value)
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
