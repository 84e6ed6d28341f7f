use anyhow::{Context, Result};
use schemars::{JsonSchema, Schema};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use strum::{EnumMessage, IntoEnumIterator};

/// Contract for a tagged `{"type": ..., "params": ...}` choice enum.
pub trait ParamChoice: Sized + Serialize + DeserializeOwned + JsonSchema {
    type Kind: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator;

    /// Schema of every variant, tag included.
    fn schema() -> Schema;

    /// The `params` object a kind decodes from when nothing is overridden.
    fn default_params(kind: Self::Kind) -> Result<Value>;

    /// Every kind with its short description.
    fn kinds() -> Vec<(&'static str, Option<&'static str>)> {
        Self::Kind::iter()
            .map(|kind| (kind.into(), kind.get_message()))
            .collect()
    }

    /// Decodes a choice from its kind and a `params` object; missing fields
    /// take their serde defaults.
    fn from_parts(kind: Self::Kind, params: Value) -> Result<Self> {
        let tag: &'static str = kind.into();
        let choice = serde_json::from_value(json!({ "type": tag, "params": params }))
            .with_context(|| format!("invalid params for '{tag}'"))?;
        Ok(choice)
    }
}
