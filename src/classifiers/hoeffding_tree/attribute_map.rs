use crate::core::attributes::AttributeType;
use crate::core::instance_header::InstanceHeader;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeMapping {
    pub attribute_type: AttributeType,
    /// Position inside the candidate array of `attribute_type`.
    pub local_index: usize,
}

/// Global attribute index -> typed candidate slot. Built once per tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeMap {
    mappings: Vec<AttributeMapping>,
    numeric_count: usize,
    nominal_count: usize,
}

impl AttributeMap {
    pub fn new(header: &InstanceHeader) -> Self {
        let mut numeric_count = 0;
        let mut nominal_count = 0;
        let mappings = header
            .attributes
            .iter()
            .map(|attribute| {
                let attribute_type = attribute.attribute_type();
                let counter = match attribute_type {
                    AttributeType::Numeric => &mut numeric_count,
                    AttributeType::Nominal => &mut nominal_count,
                };
                let local_index = *counter;
                *counter += 1;
                AttributeMapping {
                    attribute_type,
                    local_index,
                }
            })
            .collect();
        Self {
            mappings,
            numeric_count,
            nominal_count,
        }
    }

    pub fn get(&self, index: usize) -> AttributeMapping {
        self.mappings[index]
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn numeric_count(&self) -> usize {
        self.numeric_count
    }

    pub fn nominal_count(&self) -> usize {
        self.nominal_count
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, AttributeMapping)> + '_ {
        self.mappings.iter().copied().enumerate()
    }
}
