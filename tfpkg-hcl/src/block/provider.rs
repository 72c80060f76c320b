use super::{Block, RenderBlock};
use crate::Result;

const PROVIDER_BLOCK_TYPE: &str = "provider";

/// A provider configuration block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Provider {
    pub name: String,
    /// Version constraint; written when non-empty.
    pub version: Option<String>,
}

impl Provider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn block(&self) -> Block {
        Block::new(PROVIDER_BLOCK_TYPE, &self.name)
    }
}

impl RenderBlock for Provider {
    fn render_block(&self) -> Result<hcl::Block> {
        let block = self.block();
        let mut body = block.writer()?;
        if let Some(version) = self.version.as_deref().filter(|v| !v.is_empty()) {
            body.set_string("version", version)?;
        }
        Ok(body.finish())
    }
}
