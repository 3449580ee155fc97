//! Database configuration.

/// Field name that holds a record's identifier unless configured otherwise.
pub const DEFAULT_ID_FIELD: &str = "id";

/// Configuration for creating a database.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the field that carries each record's identifier.
    pub id_field: String,

    /// Number of records to reserve room for when a collection is created.
    pub initial_capacity: usize,

    /// Whether to maintain operation counters.
    pub collect_stats: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id_field: DEFAULT_ID_FIELD.to_string(),
            initial_capacity: 0,
            collect_stats: true,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identifier field name.
    #[must_use]
    pub fn id_field(mut self, field: impl Into<String>) -> Self {
        self.id_field = field.into();
        self
    }

    /// Sets the per-collection initial capacity.
    #[must_use]
    pub const fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets whether to maintain operation counters.
    #[must_use]
    pub const fn collect_stats(mut self, value: bool) -> Self {
        self.collect_stats = value;
        self
    }
}
