use tfpkg_codegen::{
    FieldSpec, LanguageCodegen, NamingConvention, PackageSpec, TypeMapper,
    builder::CodeBuilder,
};

use crate::{Const, ConstBlock, Field, GO_NAMING, GoTypeMapper, Struct, go_quote};

/// Go code generator producing one package per module
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator {
    types: GoTypeMapper,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "go"
    }

    fn file_extension(&self) -> &'static str {
        "go"
    }

    fn naming(&self) -> &NamingConvention {
        &GO_NAMING
    }

    fn render_package(&self, package: &PackageSpec) -> String {
        let mut builder = CodeBuilder::go();

        builder
            .push_line(&format!("package {}", package.identifier))
            .push_blank()
            .emit(
                &Const::new("Source", go_quote(&package.source))
                    .doc("Source is the module source address this package was generated from."),
            )
            .push_blank()
            .emit(
                &Const::new(
                    "Version",
                    go_quote(package.version.as_deref().unwrap_or_default()),
                )
                .doc("Version is the resolved module version, empty when unversioned."),
            )
            .push_blank()
            .emit(&self.record(package));

        let outputs = self.outputs(package);
        if !outputs.is_empty() {
            builder.push_blank().emit(&outputs);
        }

        builder.build()
    }
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, package: &PackageSpec) -> Struct {
        let record = &package.record;
        record.fields.iter().fold(
            Struct::new(&record.name).doc(format!(
                "{} holds the input variables of the module.",
                record.name
            )),
            |s, field| s.field(self.field(field)),
        )
    }

    fn field(&self, field: &FieldSpec) -> Field {
        let omitempty = if field.required { "" } else { ",omitempty" };
        let go_field = Field::new(&field.name, self.types.render(&field.ty))
            .tag(format!("json:\"{}{}\"", field.variable, omitempty));
        match &field.description {
            Some(description) => go_field.doc(description.as_str()),
            None => go_field,
        }
    }

    fn outputs(&self, package: &PackageSpec) -> ConstBlock {
        package.outputs.iter().fold(
            ConstBlock::new().doc("Names of the outputs the module exposes."),
            |block, output| {
                let constant =
                    Const::new(format!("Output{}", output.name), go_quote(&output.output));
                block.constant(match &output.description {
                    Some(description) => constant.doc(description.as_str()),
                    None => constant,
                })
            },
        )
    }
}
