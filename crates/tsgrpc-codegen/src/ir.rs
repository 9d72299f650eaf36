//! Intermediate representation of emitted TypeScript constructs.
//!
//! Emitters build [`Item`]s; the [`render`](crate::render) module turns them into text. Keeping
//! the two apart lets the emitters decide *what* is declared while layout rules (indentation,
//! overload stacking, separators) live in one place.
//!
//! # Structure
//!
//! - [`Item`]: a top-level statement (import, function, interface, constant, comment)
//! - [`Member`]: one line group inside an interface body
//! - [`Value`]: an initializer expression (object literals, casts, calls)

use std::fmt;

/// A top-level statement of a generated module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// Comment block, one `//` line per line of text.
    Comment(String),
    Import(Import),
    Function(Function),
    Interface(Interface),
    Const(Const),
    /// An empty line.
    Blank,
}

/// `import * as <alias> from '<module>';`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub alias: String,
    pub module: String,
}

/// A module-private function with a statement body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub params: Vec<Param>,
    pub returns: String,
    /// Statements, one per line.
    pub body: Vec<String>,
}

/// A parameter of a function or signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
    /// Rendered as `name?: ty`.
    pub optional: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            optional: true,
            ..Self::new(name, ty)
        }
    }
}

/// An exported interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    pub extends: Option<String>,
    pub members: Vec<Member>,
}

/// One entry of an interface body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    /// Comment block placed before or after a member.
    Comment(String),
    /// `key: ty;`
    Property { key: PropertyKey, ty: String },
    /// A call signature overload.
    Method(MethodSignature),
    /// `new (params): returns;`
    Construct { params: Vec<Param>, returns: String },
    /// An empty line between member groups.
    Gap,
}

/// A named call signature, printed with the name on its own line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub key: PropertyKey,
    pub params: Vec<Param>,
    pub returns: String,
    pub layout: ParamLayout,
}

/// How the parameter list of a [`MethodSignature`] is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLayout {
    /// `(a: A, b: B): R;` on one line
    Inline,
    /// One parameter per line, leading commas:
    ///
    /// ```text
    /// ( a: A
    /// , b: B
    /// ): R;
    /// ```
    Stacked,
}

/// Key of an interface member or object literal entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Ident(String),
    /// Rendered in single quotes.
    Quoted(String),
}

impl PropertyKey {
    /// Key for a member name, quoting names that cannot stand bare in a member position.
    ///
    /// ```
    /// use tsgrpc_codegen::ir::PropertyKey;
    ///
    /// assert_eq!(PropertyKey::member("sayHello").to_string(), "sayHello");
    /// assert_eq!(PropertyKey::member("new").to_string(), "'new'");
    /// ```
    pub fn member(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == "new" {
            PropertyKey::Quoted(name)
        } else {
            PropertyKey::Ident(name)
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Ident(name) => f.write_str(name),
            PropertyKey::Quoted(name) => write!(f, "'{}'", escape_single_quoted(name)),
        }
    }
}

/// An exported constant: `export const <name>[: <ty>] = <value>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Const {
    pub name: String,
    pub ty: Option<String>,
    pub value: Value,
}

/// An initializer expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A bare identifier or dotted path.
    Ident(String),
    /// A single-quoted string literal.
    Str(String),
    Bool(bool),
    /// An object literal, one entry per line.
    Object(Vec<Entry>),
    /// A type assertion, `<ty>value`.
    Cast { ty: String, value: Box<Value> },
    /// `callee(args)`
    Call { callee: String, args: Vec<Value> },
}

impl Value {
    pub fn ident(name: impl Into<String>) -> Self {
        Value::Ident(name.into())
    }

    pub fn cast(ty: impl Into<String>, value: Value) -> Self {
        Value::Cast {
            ty: ty.into(),
            value: Box::new(value),
        }
    }
}

/// One `key: value,` line of an object literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: PropertyKey,
    pub value: Value,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: PropertyKey::member(key),
            value,
        }
    }
}

/// Escape text for a single-quoted string literal.
pub(crate) fn escape_single_quoted(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            c => escaped.push(c),
        }
    }
    escaped
}
