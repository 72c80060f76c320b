//! Rust struct builder.

use tfpkg_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A field in a Rust struct.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub doc: Option<String>,
    pub attrs: Vec<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            attrs: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }
}

/// Builder for Rust structs.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    doc: Option<String>,
    derives: Vec<String>,
    fields: Vec<Field>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            derives: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn derive(mut self, derive: impl Into<String>) -> Self {
        self.derives.push(derive.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Build the struct as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }

    /// Convert fields to code fragments.
    fn fields_to_fragments(&self) -> Vec<CodeFragment> {
        self.fields
            .iter()
            .flat_map(|field| {
                let mut fragments = Vec::new();

                if let Some(doc) = &field.doc {
                    fragments.push(CodeFragment::rust_doc(doc));
                }

                for attr in &field.attrs {
                    fragments.push(CodeFragment::Line(format!("#[{}]", attr)));
                }

                fragments.push(CodeFragment::Line(format!(
                    "pub {}: {},",
                    field.name, field.ty
                )));

                fragments
            })
            .collect()
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::rust_doc(doc));
        }

        if !self.derives.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "#[derive({})]",
                self.derives.join(", ")
            )));
        }

        if self.fields.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "pub struct {} {{}}",
                self.name
            )));
        } else {
            fragments.push(CodeFragment::block(
                format!("pub struct {} {{", self.name),
                self.fields_to_fragments(),
                "}",
            ));
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_struct() {
        let s = Struct::new("Empty").build();
        assert_eq!(s, "pub struct Empty {}\n");
    }

    #[test]
    fn test_struct_with_derives() {
        let s = Struct::new("Network")
            .derive("Debug")
            .derive("Clone")
            .field(Field::new("name", "String"))
            .build();

        assert_eq!(
            s,
            "#[derive(Debug, Clone)]\npub struct Network {\n    pub name: String,\n}\n"
        );
    }

    #[test]
    fn test_field_doc_and_attrs() {
        let s = Struct::new("Inputs")
            .doc("Module inputs.")
            .field(
                Field::new("project_id", "String")
                    .doc("Project to deploy into")
                    .attr("serde(rename = \"projectId\")"),
            )
            .field(Field::new("enabled", "bool"))
            .build();

        assert_eq!(
            s,
            "/// Module inputs.\n\
             pub struct Inputs {\n    \
             /// Project to deploy into\n    \
             #[serde(rename = \"projectId\")]\n    \
             pub project_id: String,\n    \
             pub enabled: bool,\n\
             }\n"
        );
    }

    #[test]
    fn test_multiline_doc() {
        let s = Struct::new("A")
            .field(Field::new("b", "i64").doc("first\nsecond"))
            .build();
        assert!(s.contains("    /// first\n    /// second\n    pub b: i64,\n"));
    }
}
