//! Go declaration builders, rendered the way gofmt lays them out.

use tfpkg_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A field in a Go struct.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub tag: Option<String>,
    pub doc: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            tag: None,
            doc: None,
        }
    }

    /// Set the struct tag, without backquotes (e.g. `json:"name"`).
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// Builder for an exported Go struct type.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    doc: Option<String>,
    fields: Vec<Field>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            fields: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Build the struct as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::go();
        builder.emit(self);
        builder.build()
    }

    /// Field lines with names, types and tags aligned in columns.
    fn fields_to_fragments(&self) -> Vec<CodeFragment> {
        let name_width = column_width(self.fields.iter().map(|f| f.name.as_str()));
        let type_width = column_width(self.fields.iter().map(|f| f.ty.as_str()));

        self.fields
            .iter()
            .flat_map(|field| {
                let mut fragments = Vec::new();
                if let Some(doc) = &field.doc {
                    fragments.push(CodeFragment::comment(doc));
                }
                let line = match &field.tag {
                    Some(tag) => format!(
                        "{} {} `{}`",
                        pad(&field.name, name_width),
                        pad(&field.ty, type_width),
                        tag
                    ),
                    None => format!("{} {}", pad(&field.name, name_width), field.ty),
                };
                fragments.push(CodeFragment::Line(line));
                fragments
            })
            .collect()
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::comment(doc));
        }

        if self.fields.is_empty() {
            fragments.push(CodeFragment::line(format!("type {} struct{{}}", self.name)));
        } else {
            fragments.push(CodeFragment::block(
                format!("type {} struct {{", self.name),
                self.fields_to_fragments(),
                "}",
            ));
        }

        fragments
    }
}

/// A single constant declaration. `value` is emitted verbatim.
#[derive(Debug, Clone)]
pub struct Const {
    pub name: String,
    pub value: String,
    pub doc: Option<String>,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::comment(doc));
        }
        fragments.push(CodeFragment::line(format!(
            "const {} = {}",
            self.name, self.value
        )));
        fragments
    }
}

/// A parenthesized `const ( ... )` group with aligned `=` signs.
#[derive(Debug, Clone, Default)]
pub struct ConstBlock {
    doc: Option<String>,
    consts: Vec<Const>,
}

impl ConstBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn constant(mut self, constant: Const) -> Self {
        self.consts.push(constant);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.consts.is_empty()
    }
}

impl Renderable for ConstBlock {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::comment(doc));
        }

        let width = column_width(self.consts.iter().map(|c| c.name.as_str()));
        let body = self
            .consts
            .iter()
            .flat_map(|c| {
                let mut lines = Vec::new();
                if let Some(doc) = &c.doc {
                    lines.push(CodeFragment::comment(doc));
                }
                lines.push(CodeFragment::Line(format!(
                    "{} = {}",
                    pad(&c.name, width),
                    c.value
                )));
                lines
            })
            .collect();
        fragments.push(CodeFragment::block("const (", body, ")"));
        fragments
    }
}

fn column_width<'a>(cells: impl Iterator<Item = &'a str>) -> usize {
    cells.map(|c| c.chars().count()).max().unwrap_or(0)
}

fn pad(cell: &str, width: usize) -> String {
    format!("{:<width$}", cell, width = width)
}
