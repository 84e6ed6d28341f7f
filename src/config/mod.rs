mod hoeffding_tree_params;
mod param_choice;

pub use hoeffding_tree_params::{
    BinnedSplitParams, GaussianSplitParams, HoeffdingTreeParams, NoParams, NumericSplitChoice,
    NumericSplitKind, SplitCriterionChoice, SplitCriterionKind,
};
pub use param_choice::ParamChoice;
