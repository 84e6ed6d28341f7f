use crate::classifiers::attribute_class_observers::{
    AttributeClassObserver, NominalAttributeClassObserver, NumericAttributeClassObserver,
};
use crate::classifiers::hoeffding_tree::tree_options::TreeContext;
use crate::core::attributes::AttributeType;
use crate::error::HoeffdingError;
use serde::{Deserialize, Serialize};

/// Split candidates of an unsplit leaf, one per attribute, grouped by type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidates {
    numeric: Vec<NumericAttributeClassObserver>,
    nominal: Vec<NominalAttributeClassObserver>,
}

impl Candidates {
    pub fn new(ctx: &TreeContext<'_>) -> Self {
        let num_classes = ctx.options.num_classes;
        let numeric = (0..ctx.attribute_map.numeric_count())
            .map(|_| NumericAttributeClassObserver::new(ctx.options.numeric_observer, num_classes))
            .collect();
        let nominal = ctx
            .header
            .attributes
            .iter()
            .filter_map(|a| a.num_categories())
            .map(|categories| NominalAttributeClassObserver::new(categories, num_classes))
            .collect();
        Self { numeric, nominal }
    }

    /// True while no observation has reached any candidate.
    pub fn is_untouched(&self) -> bool {
        self.numeric
            .iter()
            .map(|c| c.total_weight_observed())
            .chain(self.nominal.iter().map(|c| c.total_weight_observed()))
            .all(|w| w == 0.0)
    }

    fn matches(&self, ctx: &TreeContext<'_>) -> bool {
        self.numeric.len() == ctx.attribute_map.numeric_count()
            && self.nominal.len() == ctx.attribute_map.nominal_count()
    }

    /// Checks persisted candidates against the descriptor. Empty candidates
    /// pass; they are rebuilt on load.
    fn validate(&self, ctx: &TreeContext<'_>) -> Result<(), HoeffdingError> {
        if self.numeric.is_empty() && self.nominal.is_empty() {
            return Ok(());
        }
        if !self.matches(ctx) {
            return Err(HoeffdingError::UnableToRead(format!(
                "leaf has {} numeric and {} nominal candidates, descriptor has {} and {}",
                self.numeric.len(),
                self.nominal.len(),
                ctx.attribute_map.numeric_count(),
                ctx.attribute_map.nominal_count()
            )));
        }
        let num_classes = ctx.options.num_classes;
        let cardinalities = ctx.header.attributes.iter().filter_map(|a| a.num_categories());
        let nominal_fits = self
            .nominal
            .iter()
            .zip(cardinalities)
            .all(|(c, categories)| {
                c.num_categories() == categories && c.is_consistent(num_classes)
            });
        let numeric_fits = self.numeric.iter().all(|c| c.is_consistent(num_classes));
        if !(nominal_fits && numeric_fits) {
            return Err(HoeffdingError::UnableToRead(format!(
                "leaf candidate statistics are not sized for {num_classes} classes"
            )));
        }
        Ok(())
    }

    fn get(&self, index: usize, ctx: &TreeContext<'_>) -> &dyn AttributeClassObserver {
        let mapping = ctx.attribute_map.get(index);
        match mapping.attribute_type {
            AttributeType::Numeric => &self.numeric[mapping.local_index],
            AttributeType::Nominal => &self.nominal[mapping.local_index],
        }
    }

    fn observe(&mut self, point: &[f64], label: usize, ctx: &TreeContext<'_>) {
        for (i, mapping) in ctx.attribute_map.iter() {
            let candidate: &mut dyn AttributeClassObserver = match mapping.attribute_type {
                AttributeType::Numeric => &mut self.numeric[mapping.local_index],
                AttributeType::Nominal => &mut self.nominal[mapping.local_index],
            };
            candidate.observe_attribute_class(point[i], label);
        }
    }

    /// Majority class and probability, read from the first nominal candidate
    /// if there is one, else from the first numeric one.
    fn majority(&self) -> Option<(usize, f64)> {
        let first: &dyn AttributeClassObserver = match (self.nominal.first(), self.numeric.first()) {
            (Some(c), _) => c,
            (None, Some(c)) => c,
            (None, None) => return None,
        };
        Some((first.majority_class(), first.majority_probability()))
    }
}

/// State of a leaf that is still collecting evidence for a split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningNode {
    sample_count: usize,
    num_classes: usize,
    max_samples: usize,
    check_interval: usize,
    success_probability: f64,
    #[serde(default, skip_serializing_if = "Candidates::is_untouched")]
    candidates: Candidates,
}

impl LearningNode {
    pub fn new(ctx: &TreeContext<'_>) -> Self {
        Self {
            sample_count: 0,
            num_classes: ctx.options.num_classes,
            max_samples: ctx.options.effective_max_samples(),
            check_interval: ctx.options.check_interval,
            success_probability: ctx.options.success_probability,
            candidates: Candidates::new(ctx),
        }
    }

    /// Feeds one observation to every candidate and returns the refreshed
    /// majority, if the leaf has any candidate to read it from.
    pub fn learn_from_instance(
        &mut self,
        point: &[f64],
        label: usize,
        ctx: &TreeContext<'_>,
    ) -> Option<(usize, f64)> {
        self.sample_count += 1;
        self.candidates.observe(point, label, ctx);
        self.candidates.majority()
    }

    pub fn is_check_due(&self) -> bool {
        self.sample_count % self.check_interval == 0
    }

    pub fn candidate(&self, index: usize, ctx: &TreeContext<'_>) -> &dyn AttributeClassObserver {
        self.candidates.get(index, ctx)
    }

    pub fn validate(&self, ctx: &TreeContext<'_>) -> Result<(), HoeffdingError> {
        if self.check_interval == 0 {
            return Err(HoeffdingError::UnableToRead(
                "leaf check interval must be positive".into(),
            ));
        }
        if self.num_classes != ctx.options.num_classes {
            return Err(HoeffdingError::UnableToRead(format!(
                "leaf expects {} classes, tree has {}",
                self.num_classes, ctx.options.num_classes
            )));
        }
        if !(self.success_probability > 0.0 && self.success_probability < 1.0) {
            return Err(HoeffdingError::UnableToRead(format!(
                "leaf success probability {} is outside (0, 1)",
                self.success_probability
            )));
        }
        self.candidates.validate(ctx)
    }

    /// Rebuilds the candidates when they were not persisted.
    pub fn restore_candidates(&mut self, ctx: &TreeContext<'_>) {
        if !self.candidates.matches(ctx) {
            self.candidates = Candidates::new(ctx);
        }
    }

    /// Overrides the limits for one batch, returning the previous
    /// `(check_interval, max_samples)`.
    pub fn set_batch_limits(&mut self, batch_size: usize) -> (usize, usize) {
        let saved = (self.check_interval, self.max_samples);
        self.check_interval = batch_size;
        self.max_samples = batch_size.saturating_sub(1).max(5);
        saved
    }

    pub fn restore_limits(&mut self, (check_interval, max_samples): (usize, usize)) {
        self.check_interval = check_interval;
        self.max_samples = max_samples;
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    pub fn max_samples(&self) -> usize {
        self.max_samples
    }

    pub fn check_interval(&self) -> usize {
        self.check_interval
    }

    pub fn success_probability(&self) -> f64 {
        self.success_probability
    }

    pub fn candidates(&self) -> &Candidates {
        &self.candidates
    }
}
