use tfpkg_codegen::{
    FieldSpec, LanguageCodegen, NamingConvention, PackageSpec, RUST_NAMING, TypeMapper,
    builder::CodeBuilder,
};

use crate::{Field, RustTypeMapper, Struct};

const DERIVES: &[&str] = &[
    "Debug",
    "Clone",
    "Default",
    "PartialEq",
    "serde::Serialize",
    "serde::Deserialize",
];

/// Rust code generator producing one module per Terraform module
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator {
    types: RustTypeMapper,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn naming(&self) -> &NamingConvention {
        &RUST_NAMING
    }

    fn render_package(&self, package: &PackageSpec) -> String {
        let version = match &package.version {
            Some(version) => format!("Some({:?})", version),
            None => "None".to_string(),
        };
        let outputs: Vec<String> = package
            .outputs
            .iter()
            .map(|o| format!("{:?}", o.output))
            .collect();

        let mut builder = CodeBuilder::rust();
        builder
            .push_comment("///", "Module source address this package was generated from.")
            .push_line(&format!("pub const SOURCE: &str = {:?};", package.source))
            .push_blank()
            .push_comment("///", "Resolved module version, `None` when unversioned.")
            .push_line(&format!("pub const VERSION: Option<&str> = {};", version))
            .push_blank()
            .push_comment("///", "Names of the outputs the module exposes.")
            .push_line(&format!("pub const OUTPUTS: &[&str] = &[{}];", outputs.join(", ")))
            .push_blank()
            .emit(&self.record(package));

        builder.build()
    }
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, package: &PackageSpec) -> Struct {
        let record = DERIVES.iter().fold(
            Struct::new(&package.record.name).doc("Input variables of the module."),
            |s, derive| s.derive(*derive),
        );
        package
            .record
            .fields
            .iter()
            .fold(record, |s, field| s.field(self.field(field)))
    }

    /// Optional variables become `Option` fields omitted when unset, so the
    /// module's own default applies.
    fn field(&self, field: &FieldSpec) -> Field {
        let ty = self.types.render(&field.ty);
        let mut rust_field = if field.required {
            Field::new(&field.name, ty)
        } else {
            Field::new(&field.name, self.types.map_optional(&ty))
        };

        if let Some(description) = &field.description {
            rust_field = rust_field.doc(description.as_str());
        }
        if field.name.trim_start_matches("r#") != field.variable {
            rust_field = rust_field.attr(format!("serde(rename = {:?})", field.variable));
        }
        if !field.required {
            rust_field =
                rust_field.attr("serde(default, skip_serializing_if = \"Option::is_none\")");
        }
        rust_field
    }
}

#[cfg(test)]
mod tests {
    use tfpkg_codegen::{FieldType, RecordSpec};

    use super::*;

    fn package(fields: Vec<FieldSpec>) -> PackageSpec {
        PackageSpec {
            identifier: "sql_db".to_string(),
            source: "registry.terraform.io/GoogleCloudPlatform/sql-db/google".to_string(),
            version: None,
            record: RecordSpec {
                name: "SqlDb".to_string(),
                fields,
            },
            outputs: Vec::new(),
        }
    }

    fn field(name: &str, variable: &str) -> FieldSpec {
        FieldSpec {
            name: name.to_string(),
            variable: variable.to_string(),
            ty: FieldType::String,
            description: None,
            required: true,
        }
    }

    #[test]
    fn test_unversioned_without_outputs() {
        let code = Generator::new().render_package(&package(Vec::new()));

        assert!(code.contains("pub const VERSION: Option<&str> = None;\n"));
        assert!(code.contains("pub const OUTPUTS: &[&str] = &[];\n"));
        assert!(code.ends_with("pub struct SqlDb {}\n"));
    }

    #[test]
    fn test_renamed_field() {
        let code = Generator::new().render_package(&package(vec![field("project_id", "projectId")]));
        assert!(code.contains("    #[serde(rename = \"projectId\")]\n    pub project_id: String,\n"));
    }

    #[test]
    fn test_raw_identifier_is_not_renamed() {
        let code = Generator::new().render_package(&package(vec![field("r#type", "type")]));
        assert!(code.contains("    pub r#type: String,\n"));
        assert!(!code.contains("rename"));
    }
}
