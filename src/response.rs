//! Standard response body helpers.

use serde_json::{json, Value};

/// `{"success": "<message>"}`, the shape every mutating route answers with.
pub fn success_body(message: impl Into<String>) -> Value {
    json!({ "success": message.into() })
}

/// `{"error": "<message>"}`, the shape every handled failure answers with.
pub fn error_body(message: impl Into<String>) -> Value {
    json!({ "error": message.into() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bodies_carry_a_single_key() {
        assert_eq!(success_body("done"), json!({"success": "done"}));
        assert_eq!(error_body("nope"), json!({"error": "nope"}));
    }
}
