//! Source type classification and storage type mapping.
//!
//! Source type names are classified once into `SourceType`; everything
//! downstream matches on `StorageType` instead of comparing strings.

use std::fmt;

use serde::Serialize;

use crate::TypeError;

/// Name of the grammar-token enumeration type.
pub const GRAMMAR_TOKENS: &str = "GrammarTokens";

/// Source type name as declared in a grammar, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceType {
    Int,
    Time,
    Color,
    Px,
    Float,
    Double,
    GrammarTokens,
    DisplayType,
    RefnameType,
    Vbo,
    Bool,
    /// `string` and its aliases.
    StringLike,
    Unknown,
}

impl SourceType {
    /// Classify a source type name (case-insensitive).
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "int" => Self::Int,
            "time" => Self::Time,
            "color" => Self::Color,
            "px" => Self::Px,
            "float" => Self::Float,
            "double" => Self::Double,
            "grammartokens" => Self::GrammarTokens,
            "displaytype" => Self::DisplayType,
            "refnametype" => Self::RefnameType,
            "vbo" => Self::Vbo,
            "bool" => Self::Bool,
            "string" | "std::string" | "const char *" | "char *" => Self::StringLike,
            _ => Self::Unknown,
        }
    }
}

/// Storage type of a planned field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum StorageType {
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "GrammarTokens")]
    GrammarTokens,
    #[serde(rename = "NodeIndex")]
    NodeIndex,
    /// Pointer into an externally managed vertex/color resource. Never
    /// packed into a buffer.
    #[serde(rename = "__global VertexAndColor*")]
    VertexColorPtr,
}

impl StorageType {
    pub fn from_source(source: SourceType) -> Result<Self, TypeError> {
        match source {
            SourceType::Int | SourceType::Time | SourceType::Color | SourceType::Px => {
                Ok(Self::Int)
            }
            SourceType::Float => Ok(Self::Float),
            SourceType::Double => Ok(Self::Double),
            SourceType::GrammarTokens | SourceType::DisplayType | SourceType::RefnameType => {
                Ok(Self::GrammarTokens)
            }
            SourceType::Vbo => Ok(Self::VertexColorPtr),
            SourceType::Bool => Err(TypeError::Boolean),
            SourceType::StringLike => Err(TypeError::StringLike),
            SourceType::Unknown => Err(TypeError::Unrecognized),
        }
    }

    /// Map a source type name straight to its storage type.
    pub fn map(source_name: &str) -> Result<Self, TypeError> {
        Self::from_source(SourceType::parse(source_name))
    }

    /// Type name as spelled in generated device code.
    pub fn target_name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Double => "double",
            Self::GrammarTokens => GRAMMAR_TOKENS,
            Self::NodeIndex => "NodeIndex",
            Self::VertexColorPtr => "__global VertexAndColor*",
        }
    }

    /// Fields of exempt types get no buffer placement.
    pub fn is_exempt(self) -> bool {
        matches!(self, Self::VertexColorPtr)
    }

    /// Reading the value requires an explicit enumeration cast.
    pub fn needs_enum_cast(self) -> bool {
        matches!(self, Self::GrammarTokens)
    }

    /// Underlying raw storage type. Enumerations and node indices are ints.
    pub fn primitive(self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Double => "double",
            Self::Int | Self::GrammarTokens | Self::NodeIndex | Self::VertexColorPtr => "int",
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.target_name())
    }
}
