use tally_format::Locale;

/// Session-wide settings owned by the controllers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    /// History entries kept before the oldest is evicted.
    pub history_capacity: usize,
    /// Separators used when rendering numbers.
    pub locale: Locale,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            history_capacity: 50,
            locale: Locale::default(),
        }
    }
}
