//! Row limit for list queries

/// Maximum rows a single list query may return
const MAX_LIMIT: u32 = 100;

/// Default number of rows, used when the caller doesn't ask for one
pub const DEFAULT_LIMIT: u32 = 10;

/// Validated LIMIT value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit(u32);

impl Limit {
    /// Create a limit capped at 100. Zero stays zero.
    pub fn new(limit: u32) -> Self {
        Self(limit.min(MAX_LIMIT))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Value to bind for the SQL `LIMIT` placeholder.
    pub fn as_i64(self) -> i64 {
        i64::from(self.0)
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten() {
        assert_eq!(Limit::default().get(), 10);
    }

    #[test]
    fn zero_is_kept() {
        assert_eq!(Limit::new(0).get(), 0);
        assert_eq!(Limit::new(0).as_i64(), 0);
    }

    #[test]
    fn caps_at_max() {
        assert_eq!(Limit::new(25).get(), 25);
        assert_eq!(Limit::new(100).get(), 100);
        assert_eq!(Limit::new(999).get(), 100);
    }
}
