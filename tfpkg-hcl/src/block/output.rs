use super::{Block, RenderBlock};
use crate::{Result, Value};

const OUTPUT_BLOCK_TYPE: &str = "output";

/// An output block.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub name: String,
    /// Always written; usually a [`Reference`](crate::Reference).
    pub value: Value,
    /// Written when non-empty.
    pub description: Option<String>,
}

impl Output {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn block(&self) -> Block {
        Block::new(OUTPUT_BLOCK_TYPE, &self.name)
    }
}

impl RenderBlock for Output {
    fn render_block(&self) -> Result<hcl::Block> {
        let block = self.block();
        let mut body = block.writer()?;
        body.set_required("value", &self.value)?;
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            body.set_string("description", description)?;
        }
        Ok(body.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Reference, block::testing::render};

    #[test]
    fn test_output_with_reference() {
        let output = Output::new("network", Reference::module_output("net", "network_name"))
            .with_description("The network name");
        let rendered = render(&output);

        assert!(rendered.starts_with("output \"network\" {"));
        assert!(rendered.contains("value = module.net.network_name"));
        assert!(rendered.contains("description = \"The network name\""));
    }

    #[test]
    fn test_value_is_always_written() {
        let rendered = render(&Output::new("empty", ""));
        assert!(rendered.contains("value = \"\""));
        assert!(!rendered.contains("description"));
    }
}
