//! Command-line option parsing for `ori-lit`.

use std::fmt;
use std::str::FromStr;

use ori_lit::{check_radix, INFER_RADIX};

/// Target type selected by the first positional argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Bool,
}

impl LiteralKind {
    pub const ALL: [LiteralKind; 11] = [
        LiteralKind::I8,
        LiteralKind::I16,
        LiteralKind::I32,
        LiteralKind::I64,
        LiteralKind::U8,
        LiteralKind::U16,
        LiteralKind::U32,
        LiteralKind::U64,
        LiteralKind::F32,
        LiteralKind::F64,
        LiteralKind::Bool,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LiteralKind::I8 => "i8",
            LiteralKind::I16 => "i16",
            LiteralKind::I32 => "i32",
            LiteralKind::I64 => "i64",
            LiteralKind::U8 => "u8",
            LiteralKind::U16 => "u16",
            LiteralKind::U32 => "u32",
            LiteralKind::U64 => "u64",
            LiteralKind::F32 => "f32",
            LiteralKind::F64 => "f64",
            LiteralKind::Bool => "bool",
        }
    }

    /// Integer kinds accept `--base`.
    pub fn is_integer(self) -> bool {
        !matches!(self, LiteralKind::F32 | LiteralKind::F64 | LiteralKind::Bool)
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LiteralKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LiteralKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown literal kind '{s}'"))
    }
}

/// Parsed `ori-lit` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub kind: LiteralKind,
    /// Explicit base, or [`INFER_RADIX`]. Defaults to 10.
    pub base: u32,
    /// Decode through the byte adapter instead of the text adapter.
    pub bytes: bool,
    /// Require each literal to be consumed entirely.
    pub exact: bool,
    pub literals: Vec<String>,
}

impl Options {
    /// Parse everything after the program name.
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let Some((kind, rest)) = args.split_first() else {
            return Err("missing literal kind".to_string());
        };
        let kind: LiteralKind = kind.parse()?;

        let mut base = None;
        let mut bytes = false;
        let mut exact = false;
        let mut literals = Vec::new();
        let mut flags_done = false;

        for arg in rest {
            if flags_done {
                literals.push(arg.clone());
            } else if let Some(value) = arg.strip_prefix("--base=") {
                let parsed = value
                    .parse::<u32>()
                    .map_err(|_| format!("invalid --base value '{value}'"))?;
                check_radix(parsed).map_err(|e| format!("--base={value}: {e}"))?;
                base = Some(parsed);
            } else if arg == "--bytes" {
                bytes = true;
            } else if arg == "--exact" {
                exact = true;
            } else if arg == "--" {
                // Everything after `--` is a literal, even if it looks like a flag.
                flags_done = true;
            } else if arg.starts_with("--") {
                return Err(format!("unknown option '{arg}'"));
            } else {
                literals.push(arg.clone());
            }
        }

        if base.is_some() && !kind.is_integer() {
            return Err(format!("--base is not supported for {kind}"));
        }
        if literals.is_empty() {
            return Err("no literals given".to_string());
        }

        Ok(Self {
            kind,
            base: base.unwrap_or(10),
            bytes,
            exact,
            literals,
        })
    }

    /// Whether the base will be inferred from each literal's prefix.
    pub fn infers_base(&self) -> bool {
        self.base == INFER_RADIX
    }
}
