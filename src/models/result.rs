//! Cache lookup result
//!
//! Distinguishes "stored as the default value" from "never stored or expired",
//! which a plain value-or-default lookup cannot.

/// Outcome of a single-key lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheResult<T> {
    /// A live entry was found. A stored default value is still a hit.
    Hit(T),
    /// The key is absent or its entry has expired.
    Miss,
}

impl<T> CacheResult<T> {
    /// Returns true for `Hit`, regardless of the value held.
    pub fn has_value(&self) -> bool {
        matches!(self, CacheResult::Hit(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            CacheResult::Hit(value) => Some(value),
            CacheResult::Miss => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        self.into()
    }

    /// Collapses a miss into `T::default()`.
    ///
    /// This is lossy: a miss and a hit holding the default value look the same.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.into_value().unwrap_or_default()
    }
}

impl<T> From<Option<T>> for CacheResult<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => CacheResult::Hit(value),
            None => CacheResult::Miss,
        }
    }
}

impl<T> From<CacheResult<T>> for Option<T> {
    fn from(result: CacheResult<T>) -> Self {
        match result {
            CacheResult::Hit(value) => Some(value),
            CacheResult::Miss => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_has_value() {
        let result = CacheResult::Hit("value".to_string());
        assert!(result.has_value());
        assert_eq!(result.value().map(String::as_str), Some("value"));
    }

    #[test]
    fn test_miss_has_no_value() {
        let result: CacheResult<String> = CacheResult::Miss;
        assert!(!result.has_value());
        assert!(result.value().is_none());
        assert_eq!(result.unwrap_or_default(), "");
    }

    #[test]
    fn test_default_value_is_still_a_hit() {
        let result = CacheResult::Hit(0u64);
        assert!(result.has_value());
        assert_eq!(result.into_value(), Some(0));
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(CacheResult::from(Some(3)), CacheResult::Hit(3));
        assert_eq!(CacheResult::<i32>::from(None), CacheResult::Miss);
        let value: Option<i32> = CacheResult::Hit(3).into();
        assert_eq!(value, Some(3));
    }
}
