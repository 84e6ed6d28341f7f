use crate::core::attributes::{Attribute, AttributeType};
use crate::error::HoeffdingError;
use serde::{Deserialize, Serialize};

/// Describes the dimensions of the observations a tree is trained on.
///
/// Labels are supplied separately, so every attribute here is a predictor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceHeader {
    pub relation_name: String,
    pub attributes: Vec<Attribute>,
}

impl InstanceHeader {
    pub fn new(relation_name: String, attributes: Vec<Attribute>) -> InstanceHeader {
        InstanceHeader {
            relation_name,
            attributes,
        }
    }

    /// Header of `dimensionality` numeric attributes named `x0`, `x1`, ...
    pub fn all_numeric(dimensionality: usize) -> InstanceHeader {
        let attributes = (0..dimensionality)
            .map(|i| Attribute::numeric(format!("x{i}")))
            .collect();
        InstanceHeader::new("numeric".to_string(), attributes)
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn attribute_at_index(&self, index: usize) -> Option<&Attribute> {
        self.attributes.get(index)
    }

    pub fn index_of_attribute(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name() == name)
    }

    pub fn attribute_type(&self, index: usize) -> Option<AttributeType> {
        self.attributes.get(index).map(Attribute::attribute_type)
    }

    pub fn num_categories(&self, index: usize) -> Option<usize> {
        self.attributes.get(index).and_then(Attribute::num_categories)
    }

    pub fn count_of(&self, kind: AttributeType) -> usize {
        self.attributes
            .iter()
            .filter(|a| a.attribute_type() == kind)
            .count()
    }

    /// Rejects nominal attributes without categories; they could never be routed.
    pub fn validate(&self) -> Result<(), HoeffdingError> {
        for (i, att) in self.attributes.iter().enumerate() {
            if att.num_categories() == Some(0) {
                return Err(HoeffdingError::InvalidParameter(format!(
                    "nominal attribute {i} ('{}') has no categories",
                    att.name()
                )));
            }
        }
        Ok(())
    }
}
