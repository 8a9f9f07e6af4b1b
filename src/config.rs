//! Centralized runtime constants for the commute relay.
//!
//! All tunable timeouts, endpoints, and storage keys are collected here so
//! they can be found and adjusted in a single place rather than scattered
//! across modules.

/// Deadline for a commute-details exchange over the relay (seconds).
pub const COMMUTE_TIMEOUT_SECS: u64 = 10;

/// Deadline for a liveness ping over the relay (seconds).
/// Shorter than the commute deadline: a ping is diagnostics only.
pub const PING_TIMEOUT_SECS: u64 = 2;

/// Hour of day (local time) every departure time is pinned to, so repeated
/// checks within a day hit comparable traffic conditions.
pub const DEPARTURE_HOUR: u32 = 13;

/// Base URL of the upstream distance-matrix endpoint.
pub const DISTANCE_MATRIX_BASE_URL: &str =
    "https://maps.googleapis.com/maps/api/distancematrix/json";

/// Capacity of the bounded request channel between the UI side and the
/// privileged service. Requests are one-per-user-action; the bound only
/// provides backpressure if a caller misbehaves.
pub const RELAY_CHANNEL_CAPACITY: usize = 16;

/// Settings-store key for the upstream API key.
pub const API_KEY_STORAGE_KEY: &str = "googleApiKey";

/// Settings-store key for the saved work address.
pub const WORK_ADDRESS_STORAGE_KEY: &str = "workAddress";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_deadline_shorter_than_commute_deadline() {
        assert!(PING_TIMEOUT_SECS < COMMUTE_TIMEOUT_SECS);
    }

    #[test]
    fn test_departure_hour_is_valid_hour() {
        const _: () = assert!(DEPARTURE_HOUR < 24);
    }

    #[test]
    fn test_storage_keys_distinct() {
        assert_ne!(API_KEY_STORAGE_KEY, WORK_ADDRESS_STORAGE_KEY);
    }
}
