use crate::classifiers::Classifier;
use crate::classifiers::hoeffding_tree::attribute_map::AttributeMap;
use crate::classifiers::hoeffding_tree::nodes::Node;
use crate::classifiers::hoeffding_tree::tree_options::{TreeContext, TreeOptions};
use crate::config::HoeffdingTreeParams;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Dataset;
use crate::error::HoeffdingError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// An incrementally grown decision tree.
///
/// The tree owns the attribute descriptor, the attribute map and the
/// hyperparameters; nodes borrow them through a [`TreeContext`] while
/// training. Public methods validate their inputs, the node routines below
/// them do not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoeffdingTree {
    header: InstanceHeader,
    attribute_map: AttributeMap,
    options: TreeOptions,
    root: Node,
}

impl HoeffdingTree {
    pub fn new(header: InstanceHeader, options: TreeOptions) -> Result<Self, HoeffdingError> {
        header.validate()?;
        options.validate()?;
        let attribute_map = AttributeMap::new(&header);
        let root = Node::new_leaf(&TreeContext {
            header: &header,
            attribute_map: &attribute_map,
            options: &options,
        });
        debug!(
            "new tree over {} attributes ({} numeric, {} nominal), {} classes",
            attribute_map.len(),
            attribute_map.numeric_count(),
            attribute_map.nominal_count(),
            options.num_classes
        );
        Ok(Self {
            header,
            attribute_map,
            options,
            root,
        })
    }

    /// Builds a tree and trains it on `data` right away.
    pub fn with_data(
        header: InstanceHeader,
        data: &Dataset,
        labels: &[usize],
        batch: bool,
        options: TreeOptions,
    ) -> Result<Self, HoeffdingError> {
        let mut tree = Self::new(header, options)?;
        tree.train(data, labels, batch)?;
        Ok(tree)
    }

    pub fn from_params(
        header: InstanceHeader,
        num_classes: usize,
        params: &HoeffdingTreeParams,
    ) -> Result<Self, HoeffdingError> {
        Self::new(header, params.to_options(num_classes))
    }

    /// Trains on every column of `data`, either point by point or in batch
    /// mode, where leaves only consider splitting once per batch.
    pub fn train(
        &mut self,
        data: &Dataset,
        labels: &[usize],
        batch: bool,
    ) -> Result<(), HoeffdingError> {
        self.check_dataset(data)?;
        if data.n_cols() != labels.len() {
            return Err(HoeffdingError::LabelCountMismatch {
                points: data.n_cols(),
                labels: labels.len(),
            });
        }
        for &label in labels {
            self.check_label(label)?;
        }

        let (ctx, root) = self.split_borrow();
        if batch {
            root.train_batch(data, labels, &ctx);
        } else {
            for (point, &label) in data.cols().zip(labels) {
                root.train(point, label, &ctx);
            }
        }
        Ok(())
    }

    pub fn train_on_instance(&mut self, point: &[f64], label: usize) -> Result<(), HoeffdingError> {
        self.check_point(point)?;
        self.check_label(label)?;
        let (ctx, root) = self.split_borrow();
        root.train(point, label, &ctx);
        Ok(())
    }

    pub fn classify(&self, point: &[f64]) -> Result<usize, HoeffdingError> {
        self.check_point(point)?;
        Ok(self.root.classify(point))
    }

    pub fn classify_with_probability(&self, point: &[f64]) -> Result<(usize, f64), HoeffdingError> {
        self.check_point(point)?;
        Ok(self.root.classify_with_probability(point))
    }

    pub fn classify_batch(&self, data: &Dataset) -> Result<Vec<usize>, HoeffdingError> {
        self.check_dataset(data)?;
        Ok(data.cols().map(|point| self.root.classify(point)).collect())
    }

    /// Predictions and probabilities for every column of `data`, in order.
    pub fn classify_batch_with_probabilities(
        &self,
        data: &Dataset,
    ) -> Result<(Vec<usize>, Vec<f64>), HoeffdingError> {
        self.check_dataset(data)?;
        Ok(data
            .cols()
            .map(|point| self.root.classify_with_probability(point))
            .unzip())
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn header(&self) -> &InstanceHeader {
        &self.header
    }

    pub fn attribute_map(&self) -> &AttributeMap {
        &self.attribute_map
    }

    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    pub fn num_classes(&self) -> usize {
        self.options.num_classes
    }

    pub fn num_nodes(&self) -> usize {
        self.root.num_nodes()
    }

    pub fn num_leaves(&self) -> usize {
        self.root.num_leaves()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn to_json(&self) -> Result<String, HoeffdingError> {
        serde_json::to_string(self).map_err(|e| HoeffdingError::UnableToWrite(e.to_string()))
    }

    pub fn from_json(json_str: &str) -> Result<Self, HoeffdingError> {
        let mut tree = serde_json::from_str::<Self>(json_str)
            .map_err(|e| HoeffdingError::UnableToRead(e.to_string()))?;
        tree.header.validate()?;
        tree.options.validate()?;
        if tree.attribute_map != AttributeMap::new(&tree.header) {
            return Err(HoeffdingError::UnableToRead(
                "attribute map does not match the attribute descriptor".to_string(),
            ));
        }
        let (ctx, root) = tree.split_borrow();
        root.validate(&ctx)?;
        root.restore_candidates(&ctx);
        Ok(tree)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), HoeffdingError> {
        fs::write(path.as_ref(), self.to_json()?)
            .map_err(|e| HoeffdingError::UnableToWrite(e.to_string()))?;
        info!(
            "saved tree with {} nodes to {}",
            self.num_nodes(),
            path.as_ref().display()
        );
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, HoeffdingError> {
        let json_str = fs::read_to_string(path.as_ref())
            .map_err(|e| HoeffdingError::UnableToRead(e.to_string()))?;
        let tree = Self::from_json(&json_str)?;
        info!(
            "loaded tree with {} nodes from {}",
            tree.num_nodes(),
            path.as_ref().display()
        );
        Ok(tree)
    }

    fn split_borrow(&mut self) -> (TreeContext<'_>, &mut Node) {
        let ctx = TreeContext {
            header: &self.header,
            attribute_map: &self.attribute_map,
            options: &self.options,
        };
        (ctx, &mut self.root)
    }

    fn check_point(&self, point: &[f64]) -> Result<(), HoeffdingError> {
        let expected = self.header.number_of_attributes();
        if point.len() != expected {
            return Err(HoeffdingError::DimensionMismatch {
                expected,
                found: point.len(),
            });
        }
        Ok(())
    }

    fn check_dataset(&self, data: &Dataset) -> Result<(), HoeffdingError> {
        let expected = self.header.number_of_attributes();
        if data.dimensionality() != expected {
            return Err(HoeffdingError::DimensionMismatch {
                expected,
                found: data.dimensionality(),
            });
        }
        Ok(())
    }

    fn check_label(&self, label: usize) -> Result<(), HoeffdingError> {
        if label >= self.options.num_classes {
            return Err(HoeffdingError::LabelOutOfRange {
                label,
                num_classes: self.options.num_classes,
            });
        }
        Ok(())
    }
}

impl Classifier for HoeffdingTree {
    fn header(&self) -> &InstanceHeader {
        &self.header
    }

    fn number_of_classes(&self) -> usize {
        self.options.num_classes
    }

    fn predict_with_probability(&self, point: &[f64]) -> Result<(usize, f64), HoeffdingError> {
        self.classify_with_probability(point)
    }

    fn train_on_instance(&mut self, point: &[f64], label: usize) -> Result<(), HoeffdingError> {
        HoeffdingTree::train_on_instance(self, point, label)
    }
}
