//! Text rendering of [`ir`](crate::ir) items.
//!
//! Indentation is two spaces per level. Empty lines are never indented.

use crate::ir::{
    Const, Entry, Function, Import, Interface, Item, Member, MethodSignature, Param, ParamLayout,
    Value, escape_single_quoted,
};
use std::fmt;

const INDENT: &str = "  ";

/// Writes items to any [`fmt::Write`] sink, tracking indentation.
pub struct Renderer<W> {
    out: W,
    level: usize,
    at_line_start: bool,
}

impl<W: fmt::Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            level: 0,
            at_line_start: true,
        }
    }

    /// Give back the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render every item in order.
    pub fn render_all(&mut self, items: &[Item]) -> fmt::Result {
        items.iter().try_for_each(|item| self.render(item))
    }

    /// Render one top-level item.
    pub fn render(&mut self, item: &Item) -> fmt::Result {
        match item {
            Item::Comment(block) => self.comment(block),
            Item::Import(import) => self.import(import),
            Item::Function(function) => self.function(function),
            Item::Interface(interface) => self.interface(interface),
            Item::Const(constant) => self.constant(constant),
            Item::Blank => self.writeln(""),
        }
    }

    fn comment(&mut self, block: &str) -> fmt::Result {
        block.lines().try_for_each(|line| self.writeln(line))
    }

    fn import(&mut self, import: &Import) -> fmt::Result {
        self.writeln(&format!(
            "import * as {} from '{}';",
            import.alias,
            escape_single_quoted(&import.module)
        ))
    }

    fn function(&mut self, function: &Function) -> fmt::Result {
        self.writeln(&format!(
            "function {}({}): {} {{",
            function.name,
            inline_params(&function.params),
            function.returns
        ))?;
        self.indented(|r| {
            function
                .body
                .iter()
                .try_for_each(|statement| r.writeln(statement))
        })?;
        self.writeln("}")
    }

    fn interface(&mut self, interface: &Interface) -> fmt::Result {
        match &interface.extends {
            Some(base) => self.writeln(&format!(
                "export interface {} extends {base} {{",
                interface.name
            ))?,
            None => self.writeln(&format!("export interface {} {{", interface.name))?,
        }
        self.indented(|r| {
            interface
                .members
                .iter()
                .try_for_each(|member| r.member(member))
        })?;
        self.writeln("}")
    }

    fn member(&mut self, member: &Member) -> fmt::Result {
        match member {
            Member::Comment(block) => self.comment(block),
            Member::Property { key, ty } => self.writeln(&format!("{key}: {ty};")),
            Member::Method(signature) => self.signature(signature),
            Member::Construct { params, returns } => {
                self.writeln(&format!("new ({}): {returns};", inline_params(params)))
            }
            Member::Gap => self.writeln(""),
        }
    }

    fn signature(&mut self, signature: &MethodSignature) -> fmt::Result {
        self.writeln(&signature.key.to_string())?;
        self.indented(|r| match (signature.layout, signature.params.split_first()) {
            (ParamLayout::Stacked, Some((first, rest))) => {
                r.writeln(&format!("( {}", param(first)))?;
                for next in rest {
                    r.writeln(&format!(", {}", param(next)))?;
                }
                r.writeln(&format!("): {};", signature.returns))
            }
            _ => r.writeln(&format!(
                "({}): {};",
                inline_params(&signature.params),
                signature.returns
            )),
        })
    }

    fn constant(&mut self, constant: &Const) -> fmt::Result {
        match &constant.ty {
            Some(ty) => self.write(&format!("export const {}: {ty} = ", constant.name))?,
            None => self.write(&format!("export const {} = ", constant.name))?,
        }
        match &constant.value {
            // Object literal initializers close without a semicolon.
            Value::Object(entries) => self.object(entries)?,
            value => {
                self.value(value)?;
                self.write(";")?;
            }
        }
        self.writeln("")
    }

    fn object(&mut self, entries: &[Entry]) -> fmt::Result {
        self.writeln("{")?;
        self.indented(|r| entries.iter().try_for_each(|entry| r.entry(entry)))?;
        self.write("}")
    }

    fn value(&mut self, value: &Value) -> fmt::Result {
        match value {
            Value::Ident(name) => self.write(name),
            Value::Str(text) => self.write(&format!("'{}'", escape_single_quoted(text))),
            Value::Bool(flag) => self.write(if *flag { "true" } else { "false" }),
            Value::Object(entries) if entries.is_empty() => self.write("{}"),
            Value::Object(entries) => self.object(entries),
            Value::Cast { ty, value } => {
                self.write(&format!("<{ty}>"))?;
                if matches!(**value, Value::Object(_)) {
                    self.value(value)
                } else {
                    self.writeln("")?;
                    self.indented(|r| r.value(value))
                }
            }
            Value::Call { callee, args } => {
                self.write(callee)?;
                self.write("(")?;
                for (index, arg) in args.iter().enumerate() {
                    if index > 0 {
                        self.write(", ")?;
                    }
                    self.value(arg)?;
                }
                self.write(")")
            }
        }
    }

    fn entry(&mut self, entry: &Entry) -> fmt::Result {
        self.write(&format!("{}: ", entry.key))?;
        self.value(&entry.value)?;
        self.writeln(",")
    }

    fn indented<F>(&mut self, body: F) -> fmt::Result
    where
        F: FnOnce(&mut Self) -> fmt::Result,
    {
        self.level += 1;
        let result = body(self);
        self.level -= 1;
        result
    }

    fn write(&mut self, text: &str) -> fmt::Result {
        if text.is_empty() {
            return Ok(());
        }
        if self.at_line_start {
            for _ in 0..self.level {
                self.out.write_str(INDENT)?;
            }
            self.at_line_start = false;
        }
        self.out.write_str(text)
    }

    fn writeln(&mut self, text: &str) -> fmt::Result {
        self.write(text)?;
        self.out.write_char('\n')?;
        self.at_line_start = true;
        Ok(())
    }
}

fn param(param: &Param) -> String {
    if param.optional {
        format!("{}?: {}", param.name, param.ty)
    } else {
        format!("{}: {}", param.name, param.ty)
    }
}

fn inline_params(params: &[Param]) -> String {
    params.iter().map(param).collect::<Vec<_>>().join(", ")
}
