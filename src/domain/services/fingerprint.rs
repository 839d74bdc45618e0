//! Content fingerprinting for application files
//!
//! The fingerprint covers semantic configuration content only: the
//! application block plus infrastructure and foundation names, order,
//! and config blocks. File identity (`id`, `path`) never participates,
//! so two files loaded from different locations with the same content
//! produce the same value. Downstream tooling persists the result as a
//! cache/build key, which makes cross-platform, cross-run stability a
//! hard requirement.

use std::fmt::Write as _;

use sha2::{Digest, Sha256};

use crate::domain::entities::{Application, File, Foundation, Infrastructure};
use crate::domain::value_objects::ConfigMap;

/// Format tag hashed into every preimage. Bump when the canonical
/// layout changes so stale persisted keys cannot collide with new ones.
const PREIMAGE_TAG: &str = "appfile/v1";

/// Fingerprint of `file`'s semantic content.
///
/// SHA-256 over the canonical [`preimage`], truncated to the leading
/// 8 bytes (big-endian). Zero is reserved to signal "no fingerprint",
/// so the vanishingly unlikely all-zero prefix is remapped.
pub fn config_hash(file: &File) -> u64 {
    let digest = Sha256::digest(preimage(file).as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    match u64::from_be_bytes(prefix) {
        0 => u64::MAX,
        hash => hash,
    }
}

/// Canonical, line-oriented serialization of `file`'s semantic content.
///
/// One line per field in a fixed order. Strings are JSON-escaped so
/// embedded newlines cannot fake extra lines, and config blocks render
/// as canonical JSON with object keys sorted lexicographically
/// regardless of in-memory order. Exposed for diagnostics and snapshot
/// coverage of the canonical form.
pub fn preimage(file: &File) -> String {
    let mut out = String::new();
    out.push_str(PREIMAGE_TAG);
    out.push('\n');

    if let Some(app) = &file.application {
        write_application(&mut out, app);
    }
    for (index, infra) in file.infrastructure.iter().enumerate() {
        write_infrastructure(&mut out, index, infra);
    }
    out
}

fn write_application(out: &mut String, app: &Application) {
    out.push_str("application.name=");
    write_string(out, &app.name);
    out.push('\n');

    out.push_str("application.type=");
    write_string(out, &app.kind);
    out.push('\n');

    let _ = writeln!(out, "application.detect={}", app.detect);

    out.push_str("application.version=");
    write_string(out, &app.version_raw);
    out.push('\n');
}

fn write_infrastructure(out: &mut String, index: usize, infra: &Infrastructure) {
    let _ = write!(out, "infrastructure[{index}].name=");
    write_string(out, &infra.name);
    out.push('\n');

    let _ = write!(out, "infrastructure[{index}].config=");
    write_config(out, &infra.config);
    out.push('\n');

    for (nested, foundation) in infra.foundations.iter().enumerate() {
        write_foundation(out, index, nested, foundation);
    }
}

fn write_foundation(out: &mut String, index: usize, nested: usize, foundation: &Foundation) {
    let _ = write!(out, "infrastructure[{index}].foundation[{nested}].name=");
    write_string(out, &foundation.name);
    out.push('\n');

    let _ = write!(out, "infrastructure[{index}].foundation[{nested}].config=");
    write_config(out, &foundation.config);
    out.push('\n');
}

fn write_config(out: &mut String, config: &ConfigMap) {
    write_object(out, config.iter());
}

fn write_value(out: &mut String, value: &serde_json::Value) {
    use serde_json::Value;

    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(flag) => {
            let _ = write!(out, "{flag}");
        }
        // serde_json's Display for numbers is already canonical: integers
        // print without a fraction, floats via the shortest round-trip form.
        Value::Number(number) => {
            let _ = write!(out, "{number}");
        }
        Value::String(text) => write_string(out, text),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => write_object(out, map.iter()),
    }
}

fn write_object<'a>(
    out: &mut String,
    entries: impl Iterator<Item = (&'a String, &'a serde_json::Value)>,
) {
    // Key order must not depend on how the map was built.
    let mut entries: Vec<_> = entries.collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    out.push('{');
    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_string(out, key);
        out.push(':');
        write_value(out, value);
    }
    out.push('}');
}

fn write_string(out: &mut String, text: &str) {
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
