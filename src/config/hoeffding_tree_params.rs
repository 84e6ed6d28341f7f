use crate::classifiers::attribute_class_observers::NumericObserverType;
use crate::classifiers::hoeffding_tree::TreeOptions;
use crate::classifiers::hoeffding_tree::split_criteria::FitnessFunction;
use crate::config::ParamChoice;
use anyhow::Result;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_success_probability() -> f64 {
    0.95
}
fn default_max_samples() -> usize {
    5000
}
fn default_check_interval() -> usize {
    100
}
fn default_bins() -> usize {
    10
}
fn default_observations_before_binning() -> usize {
    100
}
fn default_num_bins() -> usize {
    10
}

/// Empty parameter object for choices without settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct NoParams {}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BinnedSplitParams {
    #[serde(default = "default_bins")]
    #[schemars(
        title = "Number of bins",
        description = "Equal-width bins created once the warm-up buffer is full.",
        range(min = 2),
        default = "default_bins"
    )]
    pub bins: usize,

    #[serde(default = "default_observations_before_binning")]
    #[schemars(
        title = "Observations before binning",
        description = "Values buffered before bin edges are fixed.",
        range(min = 1),
        default = "default_observations_before_binning"
    )]
    pub observations_before_binning: usize,
}
impl Default for BinnedSplitParams {
    fn default() -> Self {
        Self {
            bins: default_bins(),
            observations_before_binning: default_observations_before_binning(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GaussianSplitParams {
    #[serde(default = "default_num_bins")]
    #[schemars(
        title = "Number of candidate thresholds",
        description = "Evenly spaced thresholds tried inside the observed range.",
        range(min = 1),
        default = "default_num_bins"
    )]
    pub num_bins: usize,
}
impl Default for GaussianSplitParams {
    fn default() -> Self {
        Self {
            num_bins: default_num_bins(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(NumericSplitKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum NumericSplitChoice {
    #[strum_discriminants(strum(
        message = "Binary threshold",
        detailed_message = "Exhaustive search over midpoints between observed values."
    ))]
    Binary(NoParams),
    #[strum_discriminants(strum(
        message = "Equal-width bins",
        detailed_message = "Multiway split over bins fixed after a warm-up window."
    ))]
    Binned(BinnedSplitParams),
    #[strum_discriminants(strum(
        message = "Gaussian threshold",
        detailed_message = "Binary split scored from per-class normal estimates."
    ))]
    Gaussian(GaussianSplitParams),
}
impl Default for NumericSplitChoice {
    fn default() -> Self {
        Self::Binary(NoParams::default())
    }
}

impl NumericSplitChoice {
    pub fn observer_type(&self) -> NumericObserverType {
        match self {
            Self::Binary(_) => NumericObserverType::Binary,
            Self::Binned(p) => NumericObserverType::Binned {
                bins: p.bins,
                observations_before_binning: p.observations_before_binning,
            },
            Self::Gaussian(p) => NumericObserverType::Gaussian {
                num_bins: p.num_bins,
            },
        }
    }
}

impl ParamChoice for NumericSplitChoice {
    type Kind = NumericSplitKind;

    fn schema() -> Schema {
        schema_for!(NumericSplitChoice)
    }

    fn default_params(kind: Self::Kind) -> Result<Value> {
        Ok(match kind {
            NumericSplitKind::Binary => serde_json::to_value(NoParams::default())?,
            NumericSplitKind::Binned => serde_json::to_value(BinnedSplitParams::default())?,
            NumericSplitKind::Gaussian => serde_json::to_value(GaussianSplitParams::default())?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(SplitCriterionKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum SplitCriterionChoice {
    #[strum_discriminants(strum(
        message = "Gini impurity",
        detailed_message = "Reduction in Gini impurity; range 1 - 1/k."
    ))]
    Gini(NoParams),
    #[strum_discriminants(strum(
        message = "Information gain",
        detailed_message = "Reduction in entropy (bits); range log2(k)."
    ))]
    InfoGain(NoParams),
}
impl Default for SplitCriterionChoice {
    fn default() -> Self {
        Self::Gini(NoParams::default())
    }
}

impl SplitCriterionChoice {
    pub fn fitness_function(&self) -> FitnessFunction {
        match self {
            Self::Gini(_) => FitnessFunction::Gini,
            Self::InfoGain(_) => FitnessFunction::InfoGain,
        }
    }
}

impl ParamChoice for SplitCriterionChoice {
    type Kind = SplitCriterionKind;

    fn schema() -> Schema {
        schema_for!(SplitCriterionChoice)
    }

    fn default_params(kind: Self::Kind) -> Result<Value> {
        match kind {
            SplitCriterionKind::Gini | SplitCriterionKind::InfoGain => {
                Ok(serde_json::to_value(NoParams::default())?)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HoeffdingTreeParams {
    #[serde(default = "default_success_probability")]
    #[schemars(
        title = "Success probability",
        description = "Confidence required before a leaf splits, exclusive of 0 and 1.",
        range(min = 0.0, max = 1.0),
        default = "default_success_probability"
    )]
    pub success_probability: f64,

    #[serde(default = "default_max_samples")]
    #[schemars(
        title = "Maximum samples",
        description = "Samples after which a leaf splits on any positive gain (0 = never).",
        default = "default_max_samples"
    )]
    pub max_samples: usize,

    #[serde(default = "default_check_interval")]
    #[schemars(
        title = "Check interval",
        description = "Samples a leaf sees between split checks.",
        range(min = 1),
        default = "default_check_interval"
    )]
    pub check_interval: usize,

    #[serde(default)]
    #[schemars(skip)]
    pub split_criterion: SplitCriterionChoice,

    #[serde(default)]
    #[schemars(skip)]
    pub numeric_split: NumericSplitChoice,
}
impl Default for HoeffdingTreeParams {
    fn default() -> Self {
        Self {
            success_probability: default_success_probability(),
            max_samples: default_max_samples(),
            check_interval: default_check_interval(),
            split_criterion: SplitCriterionChoice::default(),
            numeric_split: NumericSplitChoice::default(),
        }
    }
}

impl HoeffdingTreeParams {
    /// Tree options for `num_classes` classes; validation happens when the
    /// tree is built.
    pub fn to_options(&self, num_classes: usize) -> TreeOptions {
        TreeOptions::new(num_classes)
            .set_success_probability(self.success_probability)
            .set_max_samples(self.max_samples)
            .set_check_interval(self.check_interval)
            .set_fitness_function(self.split_criterion.fitness_function())
            .set_numeric_observer(self.numeric_split.observer_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use strum::EnumMessage;

    fn root_props_of<T: JsonSchema>() -> Value {
        let root = schema_for!(T);
        let v = serde_json::to_value(root).expect("schema to JSON");
        v.get("schema")
            .cloned()
            .unwrap_or(v)
            .get("properties")
            .cloned()
            .unwrap_or_else(|| json!({}))
    }

    #[test]
    fn default_functions_are_expected() {
        assert!((default_success_probability() - 0.95).abs() < f64::EPSILON);
        assert_eq!(default_max_samples(), 5000);
        assert_eq!(default_check_interval(), 100);
        assert_eq!(default_bins(), 10);
        assert_eq!(default_observations_before_binning(), 100);
        assert_eq!(default_num_bins(), 10);
    }

    #[test]
    fn serde_missing_fields_apply_defaults() {
        let p: HoeffdingTreeParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p, HoeffdingTreeParams::default());
    }

    #[test]
    fn serde_roundtrip_params() {
        let p0 = HoeffdingTreeParams {
            check_interval: 7,
            numeric_split: NumericSplitChoice::Gaussian(GaussianSplitParams { num_bins: 4 }),
            ..Default::default()
        };
        let j = serde_json::to_string(&p0).unwrap();
        let p1: HoeffdingTreeParams = serde_json::from_str(&j).unwrap();
        assert_eq!(p0, p1);
    }

    #[test]
    fn tagged_enum_serialization_numeric_split() {
        let v = serde_json::to_value(NumericSplitChoice::Binned(BinnedSplitParams::default()))
            .unwrap();
        assert_eq!(v.get("type").and_then(Value::as_str), Some("binned"));
        assert_eq!(
            v.get("params")
                .and_then(|x| x.get("bins"))
                .and_then(Value::as_u64),
            Some(10)
        );
    }

    #[test]
    fn tagged_enum_serialization_split_criterion() {
        let v = serde_json::to_value(SplitCriterionChoice::InfoGain(NoParams {})).unwrap();
        assert_eq!(v.get("type").and_then(Value::as_str), Some("info-gain"));
        assert!(
            v.get("params")
                .map(|p| p.as_object().unwrap().is_empty())
                .unwrap_or(false)
        );
    }

    #[test]
    fn from_parts_fills_missing_params() {
        let c = NumericSplitChoice::from_parts(NumericSplitKind::Binned, json!({ "bins": 4 }))
            .unwrap();
        assert_eq!(
            c.observer_type(),
            NumericObserverType::Binned {
                bins: 4,
                observations_before_binning: 100
            }
        );
        let d = NumericSplitChoice::default_params(NumericSplitKind::Gaussian).unwrap();
        assert_eq!(d.get("num_bins").and_then(Value::as_u64), Some(10));
    }

    #[test]
    fn from_parts_rejects_bad_params() {
        let bad = NumericSplitChoice::from_parts(NumericSplitKind::Binned, json!({ "bins": "x" }));
        assert!(bad.is_err());
    }

    #[test]
    fn kinds_carry_messages() {
        let kinds = SplitCriterionChoice::kinds();
        assert_eq!(
            kinds,
            vec![
                ("gini", Some("Gini impurity")),
                ("info-gain", Some("Information gain"))
            ]
        );
        assert!(NumericSplitKind::Gaussian.get_detailed_message().is_some());
    }

    #[test]
    fn choice_schema_lists_every_variant() {
        let schema = serde_json::to_value(NumericSplitChoice::schema()).unwrap();
        let variants = schema
            .get("oneOf")
            .or_else(|| schema.get("anyOf"))
            .and_then(Value::as_array)
            .map(Vec::len);
        assert_eq!(variants, Some(3));
    }

    #[test]
    fn schema_skips_nested_choice_fields() {
        let props = root_props_of::<HoeffdingTreeParams>();
        let obj = props.as_object().expect("props object");
        assert!(!obj.contains_key("split_criterion"));
        assert!(!obj.contains_key("numeric_split"));
        for key in ["success_probability", "max_samples", "check_interval"] {
            assert!(obj.contains_key(key), "missing key in schema: {key}");
        }
        let sp = obj.get("success_probability").unwrap().as_object().unwrap();
        assert!(sp.get("title").is_some());
        assert_eq!(sp.get("minimum").and_then(Value::as_f64), Some(0.0));
        assert_eq!(sp.get("maximum").and_then(Value::as_f64), Some(1.0));
    }

    #[test]
    fn params_map_onto_tree_options() {
        let p = HoeffdingTreeParams {
            split_criterion: SplitCriterionChoice::InfoGain(NoParams {}),
            max_samples: 0,
            ..Default::default()
        };
        let o = p.to_options(4);
        assert_eq!(o.num_classes, 4);
        assert_eq!(o.fitness_function, FitnessFunction::InfoGain);
        assert_eq!(o.numeric_observer, NumericObserverType::Binary);
        assert_eq!(o.effective_max_samples(), usize::MAX);
        assert_eq!(o.check_interval, 100);
    }
}
