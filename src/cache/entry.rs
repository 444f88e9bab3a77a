//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// Represents a single cache entry with value and expiry metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_seconds` from now.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl_seconds` - TTL in seconds
    pub fn new(value: V, ttl_seconds: u64) -> Self {
        let now = current_timestamp_ms();

        Self {
            value,
            created_at: now,
            expires_at: now + ttl_seconds * 1000,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is still fresh while the current time is
    /// less than or equal to the expiration time, and expired strictly after.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() > self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds.
    ///
    /// Returns 0 once the entry has expired.
    pub fn ttl_remaining_ms(&self) -> u64 {
        let now = current_timestamp_ms();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            0
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value".to_string(), 60);

        assert_eq!(entry.value, "test_value");
        assert_eq!(entry.expires_at, entry.created_at + 60_000);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        // Create entry with 1 second TTL
        let entry = CacheEntry::new("test_value".to_string(), 1);

        assert!(!entry.is_expired());

        // Wait for expiration
        sleep(Duration::from_millis(1100));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_entry_holds_non_string_values() {
        let entry = CacheEntry::new(42u64, 60);
        assert_eq!(entry.value, 42);

        let entry = CacheEntry::new(vec![1, 2, 3], 60);
        assert_eq!(entry.value, vec![1, 2, 3]);
    }

    #[test]
    fn test_ttl_remaining_ms() {
        let entry = CacheEntry::new("test_value".to_string(), 10);

        let remaining_ms = entry.ttl_remaining_ms();
        assert!(remaining_ms <= 10_000);
        assert!(remaining_ms >= 9_000);
    }

    #[test]
    fn test_ttl_remaining_expired() {
        let entry = CacheEntry::new("test_value".to_string(), 1);

        sleep(Duration::from_millis(1100));

        assert_eq!(entry.ttl_remaining_ms(), 0);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        // Build an entry whose expiry lies in the past
        let now = current_timestamp_ms();
        let entry = CacheEntry {
            value: "test".to_string(),
            created_at: now - 2000,
            expires_at: now - 1000,
        };

        assert!(entry.is_expired(), "Entry past its expiry should be expired");
    }
}
