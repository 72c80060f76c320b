//! Configuration blocks.
//!
//! [`Block`] is the identity shared by every kind (`<kind> "<name>" { }`).
//! Each concrete kind is a plain struct implementing [`RenderBlock`], and
//! [`HclBlock`] collects them so a document can hold a mixed list.

mod module;
mod output;
mod provider;
mod resource;
mod variable;

use hcl::{Attribute, Identifier, expr::Expression};
pub use module::Module;
pub use output::Output;
pub use provider::Provider;
pub use resource::Resource;
pub use variable::Variable;

use crate::{
    Error, Result,
    value::{Value, parse_expression, required_expression, type_value},
};

/// Trait for types that render to a single HCL block.
pub trait RenderBlock {
    /// Build the block.
    fn render_block(&self) -> Result<hcl::Block>;

    /// Number of leading attributes set apart from the rest of the body by
    /// a blank line.
    fn leading_attributes(&self) -> usize {
        0
    }
}

const BODY_INDENT: &str = "  ";

/// Format a rendered block canonically, ending with a newline.
///
/// When `leading` is non-zero and attributes follow it, the first `leading`
/// attributes are written as their own group followed by a blank line.
pub(crate) fn format_block(
    block: &hcl::Block,
    leading: usize,
) -> std::result::Result<String, hcl::Error> {
    let total = block.body.iter().count();
    if leading == 0 || leading >= total {
        let mut text = hcl::format::to_string(block)?;
        if !text.ends_with('\n') {
            text.push('\n');
        }
        return Ok(text);
    }

    let mut structures = block.body.iter().cloned();
    let head: hcl::Body = structures.by_ref().take(leading).collect();
    let rest: hcl::Body = structures.collect();

    let mut shell = block.clone();
    shell.body = head;
    let shell = hcl::format::to_string(&shell)?;
    let Some(open) = shell.trim_end().strip_suffix('}') else {
        return format_block(block, 0);
    };

    let mut text = open.to_string();
    text.push('\n');
    for line in hcl::format::to_string(&rest)?.lines() {
        if !line.is_empty() {
            text.push_str(BODY_INDENT);
            text.push_str(line);
        }
        text.push('\n');
    }
    text.push_str("}\n");
    Ok(text)
}

/// The identity of a configuration block: its kind and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    kind: String,
    name: String,
}

impl Block {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create a render error attributed to this block.
    pub fn error(&self, message: impl Into<String>) -> Error {
        Error::block_render(&self.kind, &self.name, message)
    }

    /// Start writing the block body.
    pub(crate) fn writer(&self) -> Result<BodyWriter<'_>> {
        let identifier = Identifier::new(self.kind.as_str())
            .map_err(|err| self.error(format!("invalid block type: {}", err)))?;
        if self.name.is_empty() {
            return Err(self.error("block name must not be empty"));
        }

        Ok(BodyWriter {
            block: self,
            identifier,
            labels: vec![self.name.clone()],
            attributes: Vec::new(),
        })
    }
}

impl RenderBlock for Block {
    fn render_block(&self) -> Result<hcl::Block> {
        Ok(self.writer()?.finish())
    }
}

/// Accumulates the labels and attributes of a block under construction.
pub(crate) struct BodyWriter<'a> {
    block: &'a Block,
    identifier: Identifier,
    labels: Vec<String>,
    attributes: Vec<Attribute>,
}

impl BodyWriter<'_> {
    /// Insert a label before the block name (e.g. a resource type).
    pub fn prepend_label(mut self, label: &str) -> Result<Self> {
        if label.is_empty() {
            return Err(self.block.error("block label must not be empty"));
        }
        self.labels.insert(0, label.to_string());
        Ok(self)
    }

    /// Set an attribute unconditionally.
    pub fn set(&mut self, key: &str, expr: Expression) -> Result<()> {
        let ident = Identifier::new(key)
            .map_err(|err| self.block.error(format!("invalid attribute name '{}': {}", key, err)))?;
        self.attributes.push(Attribute::new(ident, expr));
        Ok(())
    }

    /// Set a string attribute unconditionally, even when empty.
    pub fn set_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.set(key, Expression::String(value.to_string()))
    }

    /// Set an attribute unconditionally, zero values included.
    pub fn set_required(&mut self, key: &str, value: &Value) -> Result<()> {
        let expr = required_expression(value).map_err(|err| self.block.error(err.to_string()))?;
        self.set(key, expr)
    }

    /// Set an attribute to a raw expression such as `list(string)`.
    pub fn set_raw(&mut self, key: &str, raw: &str) -> Result<()> {
        let expr = parse_expression(raw).map_err(|err| self.block.error(err.to_string()))?;
        self.set(key, expr)
    }

    /// Set a typed attribute, skipping it when the value types as absent.
    pub fn set_value(&mut self, key: &str, value: &Value) -> Result<()> {
        let expr = type_value(value)
            .to_expression()
            .map_err(|err| self.block.error(err.to_string()))?;
        match expr {
            Some(expr) => self.set(key, expr),
            None => {
                tracing::trace!(
                    block = %self.block.name(),
                    attribute = key,
                    "skipping absent attribute"
                );
                Ok(())
            }
        }
    }

    pub fn finish(self) -> hcl::Block {
        let mut builder = hcl::Block::builder(self.identifier);
        for label in self.labels {
            builder = builder.add_label(label);
        }
        builder.add_attributes(self.attributes).build()
    }
}

/// Any block that can be placed in a [`Document`](crate::Document).
#[derive(Debug, Clone, PartialEq)]
pub enum HclBlock {
    Module(Module),
    Output(Output),
    Variable(Variable),
    Provider(Provider),
    Resource(Resource),
}

impl HclBlock {
    /// The identity of the wrapped block.
    pub fn block(&self) -> Block {
        match self {
            HclBlock::Module(m) => m.block(),
            HclBlock::Output(o) => o.block(),
            HclBlock::Variable(v) => v.block(),
            HclBlock::Provider(p) => p.block(),
            HclBlock::Resource(r) => r.block(),
        }
    }
}

impl RenderBlock for HclBlock {
    fn render_block(&self) -> Result<hcl::Block> {
        match self {
            HclBlock::Module(m) => m.render_block(),
            HclBlock::Output(o) => o.render_block(),
            HclBlock::Variable(v) => v.render_block(),
            HclBlock::Provider(p) => p.render_block(),
            HclBlock::Resource(r) => r.render_block(),
        }
    }

    fn leading_attributes(&self) -> usize {
        match self {
            HclBlock::Module(m) => m.leading_attributes(),
            HclBlock::Output(o) => o.leading_attributes(),
            HclBlock::Variable(v) => v.leading_attributes(),
            HclBlock::Provider(p) => p.leading_attributes(),
            HclBlock::Resource(r) => r.leading_attributes(),
        }
    }
}

impl From<Module> for HclBlock {
    fn from(m: Module) -> Self {
        HclBlock::Module(m)
    }
}

impl From<Output> for HclBlock {
    fn from(o: Output) -> Self {
        HclBlock::Output(o)
    }
}

impl From<Variable> for HclBlock {
    fn from(v: Variable) -> Self {
        HclBlock::Variable(v)
    }
}

impl From<Provider> for HclBlock {
    fn from(p: Provider) -> Self {
        HclBlock::Provider(p)
    }
}

impl From<Resource> for HclBlock {
    fn from(r: Resource) -> Self {
        HclBlock::Resource(r)
    }
}
