/// Transformer configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenesisConfig {
    /// Joins ancestor keys into an action type (`widget.fetch.complete`).
    /// Child keys may not contain it.
    pub separator: char,

    /// Reserved key marking a node of a genesis *document* as an action node.
    /// Only consulted when parsing dynamic documents; typed genesis trees
    /// carry their metadata out of band.
    pub meta_key: String,
}

impl GenesisConfig {
    pub const DEFAULT_SEPARATOR: char = '.';
    pub const DEFAULT_META_KEY: &'static str = "actionMeta";

    pub fn new() -> Self {
        Self {
            separator: Self::DEFAULT_SEPARATOR,
            meta_key: Self::DEFAULT_META_KEY.to_owned(),
        }
    }

    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    #[must_use]
    pub fn with_meta_key(mut self, meta_key: impl Into<String>) -> Self {
        self.meta_key = meta_key.into();
        self
    }
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self::new()
    }
}
