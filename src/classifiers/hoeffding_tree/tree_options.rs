use crate::classifiers::attribute_class_observers::NumericObserverType;
use crate::classifiers::hoeffding_tree::attribute_map::AttributeMap;
use crate::classifiers::hoeffding_tree::split_criteria::FitnessFunction;
use crate::core::instance_header::InstanceHeader;
use crate::error::HoeffdingError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SUCCESS_PROBABILITY: f64 = 0.95;
pub const DEFAULT_MAX_SAMPLES: usize = 5000;
pub const DEFAULT_CHECK_INTERVAL: usize = 100;

/// Hyperparameters shared by every node of a tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeOptions {
    pub num_classes: usize,
    /// Confidence of the Hoeffding bound, in the open interval (0, 1).
    pub success_probability: f64,
    /// Samples after which a leaf splits on any positive gain; 0 means never.
    pub max_samples: usize,
    /// Samples between split checks at a leaf.
    pub check_interval: usize,
    pub fitness_function: FitnessFunction,
    pub numeric_observer: NumericObserverType,
}

impl TreeOptions {
    pub fn new(num_classes: usize) -> Self {
        Self {
            num_classes,
            success_probability: DEFAULT_SUCCESS_PROBABILITY,
            max_samples: DEFAULT_MAX_SAMPLES,
            check_interval: DEFAULT_CHECK_INTERVAL,
            fitness_function: FitnessFunction::default(),
            numeric_observer: NumericObserverType::default(),
        }
    }

    pub fn set_success_probability(mut self, success_probability: f64) -> Self {
        self.success_probability = success_probability;
        self
    }

    pub fn set_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples;
        self
    }

    pub fn set_check_interval(mut self, check_interval: usize) -> Self {
        self.check_interval = check_interval;
        self
    }

    pub fn set_fitness_function(mut self, fitness_function: FitnessFunction) -> Self {
        self.fitness_function = fitness_function;
        self
    }

    pub fn set_numeric_observer(mut self, numeric_observer: NumericObserverType) -> Self {
        self.numeric_observer = numeric_observer;
        self
    }

    /// The sample cap as the nodes use it, with 0 widened to "unbounded".
    pub fn effective_max_samples(&self) -> usize {
        if self.max_samples == 0 {
            usize::MAX
        } else {
            self.max_samples
        }
    }

    pub fn validate(&self) -> Result<(), HoeffdingError> {
        if self.num_classes == 0 {
            return Err(invalid("num_classes must be positive"));
        }
        if self.check_interval == 0 {
            return Err(invalid("check_interval must be positive"));
        }
        if !(self.success_probability > 0.0 && self.success_probability < 1.0) {
            return Err(invalid(format!(
                "success_probability must be in (0, 1), got {}",
                self.success_probability
            )));
        }
        match self.numeric_observer {
            NumericObserverType::Binary => {}
            NumericObserverType::Binned {
                bins,
                observations_before_binning,
            } => {
                if bins < 2 {
                    return Err(invalid("binned numeric observer needs at least 2 bins"));
                }
                if observations_before_binning == 0 {
                    return Err(invalid("observations_before_binning must be positive"));
                }
            }
            NumericObserverType::Gaussian { num_bins } => {
                if num_bins == 0 {
                    return Err(invalid("gaussian numeric observer needs at least 1 bin"));
                }
            }
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> HoeffdingError {
    HoeffdingError::InvalidParameter(message.into())
}

/// Read-only state every node of one tree borrows while it trains.
#[derive(Debug, Clone, Copy)]
pub struct TreeContext<'a> {
    pub header: &'a InstanceHeader,
    pub attribute_map: &'a AttributeMap,
    pub options: &'a TreeOptions,
}
