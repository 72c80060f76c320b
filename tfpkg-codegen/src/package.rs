//! Language-agnostic description of one generated package.

use indexmap::IndexMap;
use tfpkg_manifest::ModuleDescription;

use crate::{Error, FieldType, NamingConvention, Result, map_type};

/// Everything a backend needs to render one module's package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    /// Package identifier, e.g. `network`. Already safe to use as the
    /// package, directory and file name.
    pub identifier: String,
    /// Module source address the package was generated from.
    pub source: String,
    pub version: Option<String>,
    /// One field per declared variable.
    pub record: RecordSpec,
    pub outputs: Vec<OutputSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSpec {
    /// Type name in the target language.
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name in the target language.
    pub name: String,
    /// Variable name as declared by the module.
    pub variable: String,
    pub ty: FieldType,
    pub description: Option<String>,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    /// Output name in target-language type casing, e.g. `NetworkName`.
    pub name: String,
    /// Output name as declared by the module.
    pub output: String,
    pub description: Option<String>,
}

impl PackageSpec {
    /// Build a package from a module's declared interface.
    ///
    /// The identifier is made safe for `naming` first. Fails when two variables (or two outputs) convert to the same
    /// identifier under `naming`.
    pub fn build(
        identifier: &str,
        source: &str,
        version: Option<&str>,
        module: &ModuleDescription,
        naming: &NamingConvention,
    ) -> Result<Self> {
        let package_name = naming.package_name(identifier);
        if package_name.is_empty() {
            return Err(Error::InvalidIdentifier {
                identifier: identifier.to_string(),
            });
        }

        let record_name = naming.type_name(&package_name);
        let mut seen = Seen::new(&record_name);
        let mut fields = Vec::with_capacity(module.variables.len());
        for variable in &module.variables {
            let name = naming.field_name(&variable.name);
            seen.insert(&name, &variable.name)?;
            fields.push(FieldSpec {
                name,
                variable: variable.name.clone(),
                ty: map_type(&variable.type_descriptor),
                description: variable.description.clone(),
                required: variable.required,
            });
        }

        let mut seen = Seen::new("outputs");
        let mut outputs = Vec::with_capacity(module.outputs.len());
        for output in &module.outputs {
            let name = naming.type_name(&output.name);
            seen.insert(&name, &output.name)?;
            outputs.push(OutputSpec {
                name,
                output: output.name.clone(),
                description: output.description.clone(),
            });
        }

        tracing::debug!(
            package = %package_name,
            fields = fields.len(),
            outputs = outputs.len(),
            "built package"
        );

        Ok(Self {
            identifier: package_name,
            source: source.to_string(),
            version: version.map(str::to_string),
            record: RecordSpec {
                name: record_name,
                fields,
            },
            outputs,
        })
    }
}

/// Tracks converted names to detect collisions within one record.
struct Seen {
    record: String,
    names: IndexMap<String, String>,
}

impl Seen {
    fn new(record: &str) -> Self {
        Self {
            record: record.to_string(),
            names: IndexMap::new(),
        }
    }

    fn insert(&mut self, converted: &str, original: &str) -> Result<()> {
        if let Some(first) = self.names.get(converted) {
            return Err(Error::FieldCollision {
                record: self.record.clone(),
                field: converted.to_string(),
                first: first.clone(),
                second: original.to_string(),
            });
        }
        self.names
            .insert(converted.to_string(), original.to_string());
        Ok(())
    }
}
