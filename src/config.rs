//! Game configuration: the number range and the attempt budget.

/// Immutable parameters for a game session.
///
/// `min_number < max_number` and `max_attempts >= 1` are construction-time
/// invariants; nothing re-validates them afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub min_number: u32,
    pub max_number: u32,
    pub max_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_number: 1,
            max_number: 10,
            max_attempts: 3,
        }
    }
}

impl GameConfig {
    /// Create a config with a custom range and attempt budget.
    pub fn new(min_number: u32, max_number: u32, max_attempts: u32) -> Self {
        debug_assert!(min_number < max_number, "range must contain at least two numbers");
        debug_assert!(max_attempts >= 1, "at least one attempt is required");
        Self {
            min_number,
            max_number,
            max_attempts,
        }
    }

    /// Decimal digit count of `max_number`.
    ///
    /// The guess buffer never grows past this many characters.
    pub fn digit_width(&self) -> usize {
        self.max_number.to_string().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.min_number, 1);
        assert_eq!(config.max_number, 10);
        assert_eq!(config.max_attempts, 3);
    }

    #[test]
    fn test_digit_width_default_range() {
        assert_eq!(GameConfig::default().digit_width(), 2);
    }

    #[test]
    fn test_digit_width_single_digit_max() {
        assert_eq!(GameConfig::new(1, 9, 3).digit_width(), 1);
    }

    #[test]
    fn test_digit_width_wide_max() {
        assert_eq!(GameConfig::new(1, 100, 3).digit_width(), 3);
        assert_eq!(GameConfig::new(1, u32::MAX, 3).digit_width(), 10);
    }
}
