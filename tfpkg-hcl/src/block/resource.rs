use indexmap::IndexMap;

use super::{Block, RenderBlock};
use crate::{Result, Value};

const RESOURCE_BLOCK_TYPE: &str = "resource";

/// A resource block: `resource "<type>" "<name>" { ... }`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resource {
    pub resource_type: String,
    pub name: String,
    pub attributes: IndexMap<String, Value>,
}

impl Resource {
    pub fn new(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            name: name.into(),
            attributes: IndexMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn block(&self) -> Block {
        Block::new(RESOURCE_BLOCK_TYPE, &self.name)
    }
}

impl RenderBlock for Resource {
    fn render_block(&self) -> Result<hcl::Block> {
        let block = self.block();
        let mut body = block.writer()?.prepend_label(&self.resource_type)?;
        for (key, value) in &self.attributes {
            body.set_value(key, value)?;
        }
        Ok(body.finish())
    }
}
