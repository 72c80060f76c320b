use super::{Block, RenderBlock};
use crate::{Reference, Result, Value};

const VARIABLE_BLOCK_TYPE: &str = "variable";

/// An input variable block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variable {
    pub name: String,
    /// Always written, even when empty.
    pub description: String,
    /// Type constraint such as `list(string)`, written as a raw expression.
    pub type_constraint: Option<String>,
    /// Written whenever supplied, zero values included.
    pub default: Option<Value>,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_type(mut self, type_constraint: impl Into<String>) -> Self {
        self.type_constraint = Some(type_constraint.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Reference this variable: `var.<name>`.
    pub fn reference(&self) -> Reference {
        Reference::variable(&self.name)
    }

    pub fn block(&self) -> Block {
        Block::new(VARIABLE_BLOCK_TYPE, &self.name)
    }
}

impl RenderBlock for Variable {
    fn render_block(&self) -> Result<hcl::Block> {
        let block = self.block();
        let mut body = block.writer()?;
        body.set_string("description", &self.description)?;
        if let Some(ty) = self.type_constraint.as_deref().filter(|t| !t.is_empty()) {
            body.set_raw("type", ty)?;
        }
        if let Some(default) = &self.default {
            body.set_required("default", default)?;
        }
        Ok(body.finish())
    }
}
