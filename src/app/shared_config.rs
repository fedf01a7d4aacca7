/// Read-only configuration handed in by the embedding console.
///
/// The core stores it and passes it through to the rendering layer
/// untouched; nothing in the state machine keys off its contents.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SharedConfig {
    values: toml::Table,
}

impl SharedConfig {
    pub fn new(values: toml::Table) -> Self {
        Self { values }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&toml::Value> {
        self.values.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
