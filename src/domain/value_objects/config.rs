//! Opaque configuration blobs
//!
//! Infrastructure and foundation configuration is schema-free: the loader
//! hands over whatever the source defined. Values are JSON-shaped (null,
//! bool, number, string, array, object) so deterministic serialization
//! for fingerprinting stays well-defined without a schema.

/// Schema-free configuration block: string keys to arbitrary values.
///
/// Fingerprinting canonicalizes object key order itself, so callers may
/// build these maps in any order.
pub type ConfigMap = serde_json::Map<String, serde_json::Value>;
