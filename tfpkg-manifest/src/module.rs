//! Module interfaces: the variables a module accepts and the outputs it exposes.

use std::path::{Path, PathBuf};

use hcl::{Block, Expression};
use serde_json::Value as JsonValue;

use crate::{Error, Result};

const HCL_SUFFIX: &str = ".tf";
const JSON_SUFFIX: &str = ".tf.json";

/// The public interface of a downloaded module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleDescription {
    pub path: PathBuf,
    /// Sorted by name.
    pub variables: Vec<VariableDescription>,
    /// Sorted by name.
    pub outputs: Vec<OutputDescription>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDescription {
    pub name: String,
    /// The `type` constraint as written, e.g. `list(string)`. Empty when unset.
    pub type_descriptor: String,
    pub description: Option<String>,
    /// A variable without a default must be set by the caller.
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDescription {
    pub name: String,
    pub description: Option<String>,
}

/// Reads a module's interface from its download directory.
pub trait ModuleLoader {
    fn load(&self, dir: &Path) -> Result<ModuleDescription>;
}

/// Loads modules by parsing their `.tf` and `.tf.json` files.
#[derive(Debug, Default, Clone, Copy)]
pub struct HclModuleLoader;

impl ModuleLoader for HclModuleLoader {
    fn load(&self, dir: &Path) -> Result<ModuleDescription> {
        let mut module = ModuleDescription {
            path: dir.to_path_buf(),
            ..Default::default()
        };

        for path in config_files(dir)? {
            let content = std::fs::read_to_string(&path).map_err(|source| {
                Box::new(Error::ModuleRead {
                    path: path.clone(),
                    source,
                })
            })?;

            if has_suffix(&path, JSON_SUFFIX) {
                let root: JsonValue = serde_json::from_str(&content).map_err(|source| {
                    Box::new(Error::ModuleJsonParse {
                        path: path.clone(),
                        source,
                    })
                })?;
                describe_json(&root, &mut module);
                continue;
            }

            let body = hcl::parse(&content).map_err(|source| {
                Box::new(Error::ModuleParse {
                    path: path.clone(),
                    source,
                })
            })?;

            for block in body.blocks() {
                match block.identifier() {
                    "variable" => module.variables.extend(describe_variable(block)),
                    "output" => module.outputs.extend(describe_output(block)),
                    _ => {}
                }
            }
        }

        module.variables.sort_by(|a, b| a.name.cmp(&b.name));
        module.outputs.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::debug!(
            path = %dir.display(),
            variables = module.variables.len(),
            outputs = module.outputs.len(),
            "loaded module"
        );
        Ok(module)
    }
}

/// Configuration files directly inside `dir`, sorted by path.
fn config_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_error = |source| {
        Box::new(Error::ModuleRead {
            path: dir.to_path_buf(),
            source,
        })
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && (has_suffix(&path, HCL_SUFFIX) || has_suffix(&path, JSON_SUFFIX)) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(suffix))
}

fn block_name(block: &Block) -> Option<String> {
    let name = block.labels().first().map(|label| label.as_str().to_string());
    if name.is_none() {
        tracing::warn!(block = block.identifier(), "skipping block without a name");
    }
    name
}

fn describe_variable(block: &Block) -> Option<VariableDescription> {
    let mut variable = VariableDescription {
        name: block_name(block)?,
        type_descriptor: String::new(),
        description: None,
        required: true,
    };

    for attr in block.body().attributes() {
        match attr.key() {
            "type" => variable.type_descriptor = expression_text(attr.expr()),
            "description" => variable.description = description_text(attr.expr()),
            "default" => variable.required = false,
            _ => {}
        }
    }
    Some(variable)
}

fn describe_output(block: &Block) -> Option<OutputDescription> {
    let description = block
        .body()
        .attributes()
        .find(|attr| attr.key() == "description")
        .and_then(|attr| description_text(attr.expr()));

    Some(OutputDescription {
        name: block_name(block)?,
        description,
    })
}

/// Collect variables and outputs from a file in JSON configuration syntax.
fn describe_json(root: &JsonValue, module: &mut ModuleDescription) {
    for (name, spec) in json_blocks(root, "variable") {
        module.variables.push(VariableDescription {
            name: name.clone(),
            type_descriptor: json_string(spec, "type").unwrap_or_default(),
            description: json_string(spec, "description").filter(|d| !d.is_empty()),
            required: spec.get("default").is_none(),
        });
    }
    for (name, spec) in json_blocks(root, "output") {
        module.outputs.push(OutputDescription {
            name: name.clone(),
            description: json_string(spec, "description").filter(|d| !d.is_empty()),
        });
    }
}

/// Named blocks of one kind, given either as an object keyed by name or as
/// an array of such objects.
fn json_blocks<'a>(root: &'a JsonValue, kind: &str) -> Vec<(&'a String, &'a JsonValue)> {
    match root.get(kind) {
        Some(JsonValue::Object(blocks)) => blocks.iter().collect(),
        Some(JsonValue::Array(items)) => items
            .iter()
            .filter_map(JsonValue::as_object)
            .flat_map(|blocks| blocks.iter())
            .collect(),
        _ => Vec::new(),
    }
}

fn json_string(spec: &JsonValue, key: &str) -> Option<String> {
    spec.get(key)
        .and_then(JsonValue::as_str)
        .map(|s| s.trim().to_string())
}

/// Expression source text, normalized by the HCL formatter.
fn expression_text(expr: &Expression) -> String {
    hcl::format::to_string(expr)
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

fn description_text(expr: &Expression) -> Option<String> {
    let text = match expr {
        Expression::String(s) => s.clone(),
        other => expression_text(other),
    };
    let text = text.trim().to_string();
    (!text.is_empty()).then_some(text)
}
