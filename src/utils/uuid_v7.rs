//! Time-ordered identifiers for new records.
//!
//! Version-7 UUIDs put a millisecond Unix timestamp in the top 48 bits and
//! fill the rest with random data, so ids sort by creation time.

use uuid::Uuid;

pub fn generate() -> Uuid {
    Uuid::now_v7()
}
