//! Tokenizer — raw launch tokens → positional arguments and flags.

use std::ffi::OsString;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Value attached to a parsed flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// Presence-only flag (`--name`, `-x`).
    Present,
    /// Flag with an embedded value (`--name=value`).
    Value(String),
}

impl Serialize for FlagValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FlagValue::Present => serializer.serialize_bool(true),
            FlagValue::Value(v) => serializer.serialize_str(v),
        }
    }
}

/// Flags keyed by name, without the leading dashes.
///
/// Negated flags keep their prefix (`--no-foo` is stored as `no-foo`).
/// Keys are unique; inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlagSet {
    entries: IndexMap<String, FlagValue>,
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a flag. Last write wins.
    pub fn insert(&mut self, name: impl Into<String>, value: FlagValue) {
        self.entries.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FlagValue> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FlagValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Tagged decomposition of a raw token list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArguments {
    /// Tokens without a flag marker, in order. Kept as `OsString` so
    /// non-Unicode entries survive until the resolver decides about them.
    pub positional: Vec<OsString>,
    pub flags: FlagSet,
    /// Flag tokens exactly as typed, in command-line order.
    pub flag_tokens: Vec<String>,
}

/// Split tokens into positional arguments and flags.
///
/// - `--` ends flag parsing, every later token is positional
/// - `--name` / `--name=value` are long flags
/// - `-abc` sets `a`, `b` and `c`; `-abc=value` gives the value to `c`
/// - a lone `-` is positional
///
/// A flag never consumes the following token. Tokens that are not valid
/// Unicode are always positional.
pub fn tokenize<I>(tokens: I) -> ParsedArguments
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut parsed = ParsedArguments::default();
    let mut only_positional = false;

    for token in tokens {
        let token: OsString = token.into();

        if only_positional {
            parsed.positional.push(token);
            continue;
        }

        let Some(text) = token.to_str() else {
            parsed.positional.push(token);
            continue;
        };

        if text == "--" {
            only_positional = true;
        } else if let Some(long) = text.strip_prefix("--") {
            if parse_long(long, &mut parsed.flags) {
                parsed.flag_tokens.push(text.to_string());
            } else {
                parsed.positional.push(token);
            }
        } else if let Some(short) = text.strip_prefix('-').filter(|s| !s.is_empty()) {
            if parse_short(short, &mut parsed.flags) {
                parsed.flag_tokens.push(text.to_string());
            } else {
                parsed.positional.push(token);
            }
        } else {
            parsed.positional.push(token);
        }
    }

    parsed
}

fn split_value(body: &str) -> (&str, FlagValue) {
    match body.split_once('=') {
        Some((name, value)) => (name, FlagValue::Value(value.to_string())),
        None => (body, FlagValue::Present),
    }
}

fn parse_long(body: &str, flags: &mut FlagSet) -> bool {
    let (name, value) = split_value(body);
    if name.is_empty() {
        return false;
    }
    flags.insert(name, value);
    true
}

fn parse_short(body: &str, flags: &mut FlagSet) -> bool {
    let (letters, value) = split_value(body);
    let count = letters.chars().count();
    if count == 0 {
        return false;
    }

    for (i, letter) in letters.chars().enumerate() {
        let v = if i + 1 == count {
            value.clone()
        } else {
            FlagValue::Present
        };
        flags.insert(letter.to_string(), v);
    }
    true
}
