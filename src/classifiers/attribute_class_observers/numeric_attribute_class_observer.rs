use crate::classifiers::attribute_class_observers::{
    AttributeClassObserver, BinaryNumericAttributeClassObserver,
    BinnedNumericAttributeClassObserver, GaussianNumericAttributeClassObserver,
};
use crate::classifiers::conditional_tests::AttributeSplitSuggestion;
use crate::classifiers::hoeffding_tree::split_criteria::SplitCriterion;
use serde::{Deserialize, Serialize};

/// Which statistics numeric attributes keep while a leaf is learning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum NumericObserverType {
    #[default]
    Binary,
    Binned {
        bins: usize,
        observations_before_binning: usize,
    },
    Gaussian {
        num_bins: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum NumericAttributeClassObserver {
    Binary(BinaryNumericAttributeClassObserver),
    Binned(BinnedNumericAttributeClassObserver),
    Gaussian(GaussianNumericAttributeClassObserver),
}

impl NumericAttributeClassObserver {
    pub fn new(kind: NumericObserverType, num_classes: usize) -> Self {
        match kind {
            NumericObserverType::Binary => {
                Self::Binary(BinaryNumericAttributeClassObserver::new(num_classes))
            }
            NumericObserverType::Binned {
                bins,
                observations_before_binning,
            } => Self::Binned(BinnedNumericAttributeClassObserver::new(
                num_classes,
                bins,
                observations_before_binning,
            )),
            NumericObserverType::Gaussian { num_bins } => {
                Self::Gaussian(GaussianNumericAttributeClassObserver::new(num_classes, num_bins))
            }
        }
    }

    fn inner(&self) -> &dyn AttributeClassObserver {
        match self {
            Self::Binary(o) => o,
            Self::Binned(o) => o,
            Self::Gaussian(o) => o,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn AttributeClassObserver {
        match self {
            Self::Binary(o) => o,
            Self::Binned(o) => o,
            Self::Gaussian(o) => o,
        }
    }
}

impl AttributeClassObserver for NumericAttributeClassObserver {
    fn observe_attribute_class(&mut self, att_val: f64, class_val: usize) {
        self.inner_mut().observe_attribute_class(att_val, class_val);
    }

    fn evaluate_fitness(&self, criterion: &dyn SplitCriterion) -> f64 {
        self.inner().evaluate_fitness(criterion)
    }

    fn observed_class_distribution(&self) -> &[f64] {
        self.inner().observed_class_distribution()
    }

    fn split(
        &self,
        attribute_index: usize,
        criterion: &dyn SplitCriterion,
    ) -> AttributeSplitSuggestion {
        self.inner().split(attribute_index, criterion)
    }

    fn is_consistent(&self, num_classes: usize) -> bool {
        self.inner().is_consistent(num_classes)
    }
}
