//! Shared helper utilities for factory methods.

/// Counter for generating unique business IDs in tests.
///
/// Starts well above the small literal IDs tests use directly so factory-generated
/// records never collide with them.
static COUNTER: std::sync::atomic::AtomicI64 = std::sync::atomic::AtomicI64::new(1_000_000);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `i64` - Next unique counter value
pub fn next_id() -> i64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}
