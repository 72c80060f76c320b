use indexmap::IndexMap;

use super::{Block, RenderBlock};
use crate::{Reference, Result, Value};

const MODULE_BLOCK_TYPE: &str = "module";

/// A module instantiation of a remote or local module.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Module {
    pub name: String,
    /// Module source address; always written.
    pub source: String,
    /// Version constraint; written when non-empty.
    pub version: Option<String>,
    /// Input attributes, written in insertion order.
    pub attributes: IndexMap<String, Value>,
}

impl Module {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.add_attribute(key, value);
        self
    }

    /// Add or replace an input attribute.
    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Reference one of this module's outputs.
    pub fn output_ref(&self, attribute: &str) -> Reference {
        Reference::module_output(&self.name, attribute)
    }

    pub fn block(&self) -> Block {
        Block::new(MODULE_BLOCK_TYPE, &self.name)
    }

    fn has_version(&self) -> bool {
        self.version.as_deref().is_some_and(|v| !v.is_empty())
    }
}

impl RenderBlock for Module {
    fn render_block(&self) -> Result<hcl::Block> {
        let block = self.block();
        if self.source.is_empty() {
            return Err(block.error("module source is required"));
        }

        let mut body = block.writer()?;
        body.set_string("source", &self.source)?;
        if let Some(version) = self.version.as_deref().filter(|_| self.has_version()) {
            body.set_string("version", version)?;
        }
        for (key, value) in &self.attributes {
            body.set_value(key, value)?;
        }
        Ok(body.finish())
    }

    /// `source` and `version` are set apart from the inputs.
    fn leading_attributes(&self) -> usize {
        1 + usize::from(self.has_version())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, block::testing::render};

    #[test]
    fn test_source_and_version() {
        let module = Module::new("net", "terraform-google-modules/network/google")
            .with_version("~> 9.0");
        let rendered = render(&module);

        assert!(rendered.starts_with("module \"net\" {"));
        assert!(rendered.contains("source = \"terraform-google-modules/network/google\""));
        assert!(rendered.contains("version = \"~> 9.0\""));
    }

    #[test]
    fn test_empty_version_is_omitted() {
        let rendered = render(&Module::new("net", "./net").with_version(""));
        assert!(!rendered.contains("version"));
    }

    #[test]
    fn test_attributes_keep_order_and_skip_zero_values() {
        let module = Module::new("net", "./net")
            .with_attribute("project_id", "my-project")
            .with_attribute("auto_create", false)
            .with_attribute("mtu", 1460)
            .with_attribute("description", "");
        let rendered = render(&module);

        let project = rendered.find("project_id").unwrap();
        let mtu = rendered.find("mtu").unwrap();
        assert!(project < mtu);
        assert!(!rendered.contains("auto_create"));
        assert!(!rendered.contains("description"));
    }

    #[test]
    fn test_inputs_follow_blank_line() {
        let module = Module::new("net", "./net")
            .with_version("1.0.0")
            .with_attribute("project_id", "my-project");
        let rendered = render(&module);

        assert!(rendered.contains("version = \"1.0.0\"\n\nproject_id = \"my-project\""));
        assert!(rendered.ends_with("\n}"));
    }

    #[test]
    fn test_no_blank_line_without_inputs() {
        let rendered = render(&Module::new("net", "./net").with_version("1.0.0"));
        assert!(!rendered.contains("\n\n"));

        let rendered = render(&Module::new("net", "./net").with_attribute("mtu", 1460));
        assert!(rendered.contains("source = \"./net\"\n\nmtu = 1460"));
    }

    #[test]
    fn test_missing_source() {
        let err = Module::new("net", "").render_block().unwrap_err();
        assert!(matches!(err, Error::BlockRender { ref message, .. } if message.contains("source")));
    }

    #[test]
    fn test_reference_attribute_is_unquoted() {
        let net = Module::new("net", "./net");
        let subnets = Module::new("subnets", "./subnets")
            .with_attribute("network_name", net.output_ref("network_name"));
        let rendered = render(&subnets);

        assert!(rendered.contains("network_name = module.net.network_name"));
        assert!(!rendered.contains("\"module.net.network_name\""));
    }
}
