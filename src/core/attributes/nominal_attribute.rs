use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A categorical attribute. Category `i` is stored in instances as the value `i as f64`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominalAttribute {
    pub name: String,
    pub values: Vec<String>,
    #[serde(skip)]
    label_to_index: HashMap<String, usize>,
}

impl NominalAttribute {
    pub fn with_values(name: String, values: Vec<String>) -> NominalAttribute {
        let label_to_index = values
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        NominalAttribute {
            name,
            values,
            label_to_index,
        }
    }

    /// Nominal attribute with `count` anonymous categories named `"0"`, `"1"`, ...
    pub fn with_cardinality(name: String, count: usize) -> NominalAttribute {
        Self::with_values(name, (0..count).map(|i| i.to_string()).collect())
    }

    pub fn num_values(&self) -> usize {
        self.values.len()
    }

    pub fn index_of_value(&self, v: &str) -> Option<usize> {
        if self.label_to_index.is_empty() {
            return self.values.iter().position(|x| x == v);
        }
        self.label_to_index.get(v).copied()
    }

    pub fn enumerate_values(&self) -> impl Iterator<Item = (usize, &String)> {
        self.values.iter().enumerate()
    }
}

impl PartialEq for NominalAttribute {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.values == other.values
    }
}
