use crate::core::attributes::{NominalAttribute, NumericAttribute};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumDiscriminants};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, EnumDiscriminants)]
#[serde(tag = "type", rename_all = "kebab-case")]
#[strum_discriminants(name(AttributeType))]
#[strum_discriminants(derive(Display, Serialize, Deserialize, Hash))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
#[strum_discriminants(serde(rename_all = "kebab-case"))]
pub enum Attribute {
    Numeric(NumericAttribute),
    Nominal(NominalAttribute),
}

impl Attribute {
    pub fn numeric(name: impl Into<String>) -> Self {
        Attribute::Numeric(NumericAttribute::new(name.into()))
    }

    pub fn nominal(name: impl Into<String>, values: Vec<String>) -> Self {
        Attribute::Nominal(NominalAttribute::with_values(name.into(), values))
    }

    pub fn name(&self) -> &str {
        match self {
            Attribute::Numeric(a) => &a.name,
            Attribute::Nominal(a) => &a.name,
        }
    }

    pub fn attribute_type(&self) -> AttributeType {
        AttributeType::from(self)
    }

    /// Category count for nominal attributes, `None` for numeric ones.
    pub fn num_categories(&self) -> Option<usize> {
        match self {
            Attribute::Numeric(_) => None,
            Attribute::Nominal(a) => Some(a.num_values()),
        }
    }
}
