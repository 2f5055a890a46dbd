// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Typed parameters for a processor invocation.
//!
//! A processor declares its flags once through [`Processor::flags`]; callers
//! pass a parallel list carrying the same `short` keys with overriding values.
//! Resolution is lenient: a supplied value of the wrong type is logged and the
//! declared default is used instead.
//!
//! [`Processor::flags`]: crate::traits::Processor::flags

use std::fmt::{Display, Formatter};

use crate::observability::messages::{flag::FlagTypeMismatch, StructuredLog};

/// Type tag used when generating command-line arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagType {
    Bool,
    Uint,
    String,
}

impl Display for FlagType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagType::Bool => write!(f, "bool"),
            FlagType::Uint => write!(f, "uint"),
            FlagType::String => write!(f, "string"),
        }
    }
}

/// Value carried by a flag; the variant is the flag's type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Bool(bool),
    Uint(u64),
    Str(String),
}

impl FlagValue {
    pub fn flag_type(&self) -> FlagType {
        match self {
            FlagValue::Bool(_) => FlagType::Bool,
            FlagValue::Uint(_) => FlagType::Uint,
            FlagValue::Str(_) => FlagType::String,
        }
    }
}

impl Display for FlagValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagValue::Bool(b) => write!(f, "{}", b),
            FlagValue::Uint(n) => write!(f, "{}", n),
            FlagValue::Str(s) => write!(f, "{}", s),
        }
    }
}

/// A named, typed, optional parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    /// Long name used in help text and as the `--long` CLI option.
    pub name: &'static str,
    /// Lookup key; unique within one processor's declared flags.
    pub short: &'static str,
    pub desc: &'static str,
    pub value: FlagValue,
}

impl Flag {
    pub fn bool(name: &'static str, short: &'static str, desc: &'static str, default: bool) -> Self {
        Self {
            name,
            short,
            desc,
            value: FlagValue::Bool(default),
        }
    }

    pub fn uint(name: &'static str, short: &'static str, desc: &'static str, default: u64) -> Self {
        Self {
            name,
            short,
            desc,
            value: FlagValue::Uint(default),
        }
    }

    pub fn string(
        name: &'static str,
        short: &'static str,
        desc: &'static str,
        default: impl Into<String>,
    ) -> Self {
        Self {
            name,
            short,
            desc,
            value: FlagValue::Str(default.into()),
        }
    }

    pub fn flag_type(&self) -> FlagType {
        self.value.flag_type()
    }

    /// Same flag with a caller-supplied value.
    pub fn with_value(&self, value: FlagValue) -> Self {
        Self {
            value,
            ..self.clone()
        }
    }
}

fn supplied<'a>(flags: &'a [Flag], declared: &Flag) -> Option<&'a FlagValue> {
    flags
        .iter()
        .find(|flag| flag.short == declared.short)
        .map(|flag| &flag.value)
}

fn log_mismatch(declared: &Flag, found: &FlagValue) {
    FlagTypeMismatch {
        short: declared.short,
        expected: declared.flag_type(),
        found: found.flag_type(),
    }
    .log();
}

/// Boolean value for `declared`, falling back to its default.
pub fn resolve_bool(flags: &[Flag], declared: &Flag) -> bool {
    let default = match declared.value {
        FlagValue::Bool(b) => b,
        _ => false,
    };
    match supplied(flags, declared) {
        Some(FlagValue::Bool(b)) => *b,
        Some(other) => {
            log_mismatch(declared, other);
            default
        }
        None => default,
    }
}

/// Unsigned value for `declared`, falling back to its default.
pub fn resolve_uint(flags: &[Flag], declared: &Flag) -> u64 {
    let default = match declared.value {
        FlagValue::Uint(n) => n,
        _ => 0,
    };
    match supplied(flags, declared) {
        Some(FlagValue::Uint(n)) => *n,
        Some(other) => {
            log_mismatch(declared, other);
            default
        }
        None => default,
    }
}

/// String value for `declared`, falling back to its default.
pub fn resolve_str(flags: &[Flag], declared: &Flag) -> String {
    let default = match &declared.value {
        FlagValue::Str(s) => s.clone(),
        _ => String::new(),
    };
    match supplied(flags, declared) {
        Some(FlagValue::Str(s)) => s.clone(),
        Some(other) => {
            log_mismatch(declared, other);
            default
        }
        None => default,
    }
}
