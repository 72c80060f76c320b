//! Attribute values and the typer that classifies them for serialization.
//!
//! Callers build a [`Value`]; [`type_value`] turns it into a [`TypedValue`],
//! dropping zero values so that unset options never reach the output.

use hcl::{
    Identifier, Number,
    expr::{Expression, Object, ObjectKey},
};
use indexmap::IndexMap;

use crate::{Error, Reference};

/// An attribute value supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Bool(bool),
    Int(i64),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
    /// A raw HCL expression emitted without quoting, e.g. `module.net.id`.
    Expression(String),
}

impl Value {
    /// Create a raw expression value.
    pub fn expression(expr: impl Into<String>) -> Self {
        Value::Expression(expr.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<IndexMap<String, T>> for Value {
    fn from(map: IndexMap<String, T>) -> Self {
        Value::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<Reference> for Value {
    fn from(reference: Reference) -> Self {
        Value::Expression(reference.expression().to_string())
    }
}

impl From<&Reference> for Value {
    fn from(reference: &Reference) -> Self {
        Value::Expression(reference.expression().to_string())
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value as Json;

        match value {
            Json::String(s) => Ok(Value::String(s)),
            Json::Bool(b) => Ok(Value::Bool(b)),
            Json::Number(n) => n.as_i64().map(Value::Int).ok_or(Error::UnknownValueKind {
                kind: format!("non-integer number {}", n),
            }),
            Json::Array(items) => items
                .into_iter()
                .map(Value::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            Json::Object(map) => map
                .into_iter()
                .map(|(k, v)| Value::try_from(v).map(|v| (k, v)))
                .collect::<Result<IndexMap<_, _>, _>>()
                .map(Value::Map),
            Json::Null => Err(Error::UnknownValueKind {
                kind: "null".to_string(),
            }),
        }
    }
}

/// The kind of a [`TypedValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Absent,
    String,
    Bool,
    Number,
    List,
    Object,
    Expression,
}

/// A value classified for serialization.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// The input was the zero value of its type; the attribute is omitted.
    Absent,
    String(String),
    Bool(bool),
    Number(i64),
    List(Vec<TypedValue>),
    Object(IndexMap<String, TypedValue>),
    Expression(String),
}

impl TypedValue {
    pub fn kind(&self) -> Kind {
        match self {
            TypedValue::Absent => Kind::Absent,
            TypedValue::String(_) => Kind::String,
            TypedValue::Bool(_) => Kind::Bool,
            TypedValue::Number(_) => Kind::Number,
            TypedValue::List(_) => Kind::List,
            TypedValue::Object(_) => Kind::Object,
            TypedValue::Expression(_) => Kind::Expression,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, TypedValue::Absent)
    }

    /// Element kind of a list. An empty list is a list of strings.
    pub fn element_kind(&self) -> Option<Kind> {
        match self {
            TypedValue::List(items) => Some(items.first().map_or(Kind::String, TypedValue::kind)),
            _ => None,
        }
    }

    /// Convert to an HCL expression, or `None` if the value is absent.
    ///
    /// Fails when a raw expression does not parse.
    pub fn to_expression(&self) -> crate::Result<Option<Expression>> {
        let expr = match self {
            TypedValue::Absent => return Ok(None),
            TypedValue::String(s) => Expression::String(s.clone()),
            TypedValue::Bool(b) => Expression::Bool(*b),
            TypedValue::Number(n) => Expression::Number(Number::from(*n)),
            TypedValue::List(items) => {
                let mut array = Vec::with_capacity(items.len());
                for item in items {
                    if let Some(expr) = item.to_expression()? {
                        array.push(expr);
                    }
                }
                Expression::Array(array)
            }
            TypedValue::Object(map) => {
                let mut object: Object<ObjectKey, Expression> = Object::new();
                for (key, value) in map {
                    if let Some(expr) = value.to_expression()? {
                        object.insert(object_key(key), expr);
                    }
                }
                Expression::Object(object)
            }
            TypedValue::Expression(raw) => parse_expression(raw)?,
        };
        Ok(Some(expr))
    }
}

/// Parse a raw HCL expression such as `module.net.id` or `list(string)`.
pub fn parse_expression(raw: &str) -> crate::Result<Expression> {
    hcl::edit::parser::parse_expr(raw)
        .map(Expression::from)
        .map_err(|err| Error::InvalidExpression {
            expression: raw.to_string(),
            message: err.to_string(),
        })
}

fn object_key(key: &str) -> ObjectKey {
    match Identifier::new(key) {
        Ok(ident) => ObjectKey::Identifier(ident),
        Err(_) => ObjectKey::Expression(Expression::String(key.to_string())),
    }
}

/// Classify a value for serialization.
///
/// Zero values (`""`, `false`, `0`, an empty map) type as [`TypedValue::Absent`].
/// An empty list is kept and renders as `[]`. Absent list elements and map
/// entries are dropped. A string of the exact form `$${expr}` types as the raw
/// expression `expr`.
pub fn type_value(value: &Value) -> TypedValue {
    match value {
        Value::String(s) if s.is_empty() => TypedValue::Absent,
        Value::String(s) => match Reference::parse_escaped(s) {
            Some(reference) => TypedValue::Expression(reference.expression().to_string()),
            None => TypedValue::String(s.clone()),
        },
        Value::Bool(false) => TypedValue::Absent,
        Value::Bool(b) => TypedValue::Bool(*b),
        Value::Int(0) => TypedValue::Absent,
        Value::Int(n) => TypedValue::Number(*n),
        Value::List(items) => TypedValue::List(
            items
                .iter()
                .map(type_value)
                .filter(|v| !v.is_absent())
                .collect(),
        ),
        Value::Map(map) if map.is_empty() => TypedValue::Absent,
        Value::Map(map) => TypedValue::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), type_value(v)))
                .filter(|(_, v)| !v.is_absent())
                .collect(),
        ),
        Value::Expression(expr) if expr.is_empty() => TypedValue::Absent,
        Value::Expression(expr) => TypedValue::Expression(expr.clone()),
    }
}

/// Expression for an attribute that is always written, zero values included.
pub(crate) fn required_expression(value: &Value) -> crate::Result<Expression> {
    if let Some(expr) = type_value(value).to_expression()? {
        return Ok(expr);
    }
    let expr = match value {
        Value::Bool(b) => Expression::Bool(*b),
        Value::Int(n) => Expression::Number(Number::from(*n)),
        Value::Map(_) => Expression::Object(Object::new()),
        Value::String(s) | Value::Expression(s) => Expression::String(s.clone()),
        Value::List(_) => Expression::Array(Vec::new()),
    };
    Ok(expr)
}

#[cfg(test)]
mod tests {
    use indexmap::indexmap;

    use super::*;

    #[test]
    fn test_zero_values_are_absent() {
        assert_eq!(type_value(&Value::from("")), TypedValue::Absent);
        assert_eq!(type_value(&Value::from(false)), TypedValue::Absent);
        assert_eq!(type_value(&Value::from(0)), TypedValue::Absent);
        assert_eq!(type_value(&Value::Map(IndexMap::new())), TypedValue::Absent);
    }

    #[test]
    fn test_empty_list_is_not_absent() {
        let typed = type_value(&Value::List(Vec::new()));
        assert_eq!(typed, TypedValue::List(Vec::new()));
        assert_eq!(typed.element_kind(), Some(Kind::String));
        assert_eq!(typed.to_expression().unwrap(), Some(Expression::Array(Vec::new())));
    }

    #[test]
    fn test_primitives() {
        assert_eq!(type_value(&"a".into()), TypedValue::String("a".into()));
        assert_eq!(type_value(&true.into()), TypedValue::Bool(true));
        assert_eq!(type_value(&42.into()), TypedValue::Number(42));
        assert_eq!(type_value(&(-1).into()), TypedValue::Number(-1));
    }

    #[test]
    fn test_nested_values() {
        let value = Value::from(indexmap! {
            "zones".to_string() => Value::from(vec!["a", "b"]),
            "count".to_string() => Value::from(3),
            "unset".to_string() => Value::from(""),
        });

        let typed = type_value(&value);
        assert_eq!(
            typed,
            TypedValue::Object(indexmap! {
                "zones".to_string() => TypedValue::List(vec![
                    TypedValue::String("a".into()),
                    TypedValue::String("b".into()),
                ]),
                "count".to_string() => TypedValue::Number(3),
            })
        );
        assert_eq!(typed.kind(), Kind::Object);
    }

    #[test]
    fn test_absent_list_elements_are_dropped() {
        let typed = type_value(&Value::from(vec!["", "x"]));
        assert_eq!(typed, TypedValue::List(vec![TypedValue::String("x".into())]));
    }

    #[test]
    fn test_escaped_reference_types_as_expression() {
        let typed = type_value(&Value::from("$${module.net.network_name}"));
        assert_eq!(typed, TypedValue::Expression("module.net.network_name".into()));

        let expr = typed.to_expression().unwrap().unwrap();
        assert!(matches!(expr, Expression::Traversal(_)));
        assert_eq!(hcl::format::to_string(&expr).unwrap(), "module.net.network_name");
    }

    #[test]
    fn test_spanning_escape_stays_string() {
        let raw = "$${var.a}-${var.b}";
        assert_eq!(type_value(&Value::from(raw)), TypedValue::String(raw.into()));
    }

    #[test]
    fn test_malformed_expression() {
        let typed = type_value(&Value::expression("module.net."));
        let err = typed.to_expression().unwrap_err();
        assert!(matches!(err, Error::InvalidExpression { ref expression, .. } if expression == "module.net."));

        let nested = type_value(&Value::from(vec![Value::expression("var.a +")]));
        assert!(nested.to_expression().is_err());
    }

    #[test]
    fn test_parse_type_constraint() {
        let expr = parse_expression("list(map(string))").unwrap();
        assert!(matches!(expr, Expression::FuncCall(_)));
        assert_eq!(hcl::format::to_string(&expr).unwrap(), "list(map(string))");
    }

    #[test]
    fn test_raw_expression() {
        let typed = type_value(&Value::expression("length(var.zones)"));
        assert_eq!(typed.kind(), Kind::Expression);
        assert_eq!(type_value(&Value::expression("")), TypedValue::Absent);
    }

    #[test]
    fn test_reference_value() {
        let value = Value::from(Reference::variable("project_id"));
        assert_eq!(type_value(&value), TypedValue::Expression("var.project_id".into()));
    }

    #[test]
    fn test_object_keys() {
        assert!(matches!(object_key("env"), ObjectKey::Identifier(_)));
        assert!(matches!(object_key("my key"), ObjectKey::Expression(_)));
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::json!({"name": "x", "tags": ["a"], "size": 10, "on": true});
        let value = Value::try_from(json).unwrap();
        assert_eq!(
            value,
            Value::from(indexmap! {
                "name".to_string() => Value::from("x"),
                "tags".to_string() => Value::from(vec!["a"]),
                "size".to_string() => Value::from(10),
                "on".to_string() => Value::from(true),
            })
        );
    }

    #[test]
    fn test_from_json_unknown_kinds() {
        let err = Value::try_from(serde_json::json!(1.5)).unwrap_err();
        assert!(matches!(err, Error::UnknownValueKind { .. }));

        let err = Value::try_from(serde_json::json!({"a": [null]})).unwrap_err();
        assert!(matches!(err, Error::UnknownValueKind { ref kind } if kind == "null"));
    }

    #[test]
    fn test_required_expression_keeps_zero_values() {
        assert_eq!(
            required_expression(&Value::from("")).unwrap(),
            Expression::String(String::new())
        );
        assert_eq!(
            required_expression(&Value::from(false)).unwrap(),
            Expression::Bool(false)
        );
    }
}
