// ABOUTME: Tagged configuration values arriving from a host binding layer.
// ABOUTME: Names each configuration entry point and the value kind it expects.

use std::fmt;

use dg_core::{Axis, Color};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    RowCount,
    ColumnCount,
    AddHorizontalSeparators,
    AddVerticalSeparators,
    SeparatorThickness,
    SeparatorColor,
    StarRows,
    StarColumns,
    HorizontalSeparatorSpan,
    VerticalSeparatorSpan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Text(String),
    Color(Color),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Int,
    Bool,
    Text,
    Color,
}

impl Property {
    pub fn all() -> &'static [Property] {
        &[
            Property::RowCount,
            Property::ColumnCount,
            Property::AddHorizontalSeparators,
            Property::AddVerticalSeparators,
            Property::SeparatorThickness,
            Property::SeparatorColor,
            Property::StarRows,
            Property::StarColumns,
            Property::HorizontalSeparatorSpan,
            Property::VerticalSeparatorSpan,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Property::RowCount => "RowCount",
            Property::ColumnCount => "ColumnCount",
            Property::AddHorizontalSeparators => "AddHorizontalSeparators",
            Property::AddVerticalSeparators => "AddVerticalSeparators",
            Property::SeparatorThickness => "SeparatorThickness",
            Property::SeparatorColor => "SeparatorColor",
            Property::StarRows => "StarRows",
            Property::StarColumns => "StarColumns",
            Property::HorizontalSeparatorSpan => "HorizontalSeparatorSpan",
            Property::VerticalSeparatorSpan => "VerticalSeparatorSpan",
        }
    }

    pub fn expected(&self) -> ValueKind {
        match self {
            Property::RowCount
            | Property::ColumnCount
            | Property::SeparatorThickness
            | Property::HorizontalSeparatorSpan
            | Property::VerticalSeparatorSpan => ValueKind::Int,
            Property::AddHorizontalSeparators | Property::AddVerticalSeparators => ValueKind::Bool,
            Property::StarRows | Property::StarColumns => ValueKind::Text,
            Property::SeparatorColor => ValueKind::Color,
        }
    }

    /// Axis the property configures, `None` for shared separator styling
    pub fn axis(&self) -> Option<Axis> {
        match self {
            Property::RowCount
            | Property::AddHorizontalSeparators
            | Property::StarRows
            | Property::HorizontalSeparatorSpan => Some(Axis::Row),
            Property::ColumnCount
            | Property::AddVerticalSeparators
            | Property::StarColumns
            | Property::VerticalSeparatorSpan => Some(Axis::Column),
            Property::SeparatorThickness | Property::SeparatorColor => None,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Bool(_) => ValueKind::Bool,
            Value::Text(_) => ValueKind::Text,
            Value::Color(_) => ValueKind::Color,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Color> for Value {
    fn from(value: Color) -> Self {
        Value::Color(value)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValueKind::Int => "integer",
            ValueKind::Bool => "boolean",
            ValueKind::Text => "text",
            ValueKind::Color => "color",
        };
        f.write_str(label)
    }
}
