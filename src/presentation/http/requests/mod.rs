use serde_json::Value;

/// Fields extracted from a create/update body.
#[derive(Debug, Default)]
pub struct UserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Pulls `name` and `email` out of a request body. Returns `None` when the
/// body is not a JSON object. A missing, null, or empty email maps to
/// `None`; a non-string scalar is rendered as text so it flows into the
/// syntax check and fails there.
pub fn parse_user_payload(body: &Value) -> Option<UserPayload> {
    let object = body.as_object()?;
    let name = object.get("name").and_then(Value::as_str).map(str::to_string);
    let email = match object.get("email") {
        None | Some(Value::Null) => None,
        Some(Value::String(email)) if email.is_empty() => None,
        Some(Value::String(email)) => Some(email.clone()),
        Some(other) => Some(other.to_string()),
    };
    Some(UserPayload { name, email })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_name_and_email() {
        let payload = parse_user_payload(&json!({"name": "Ann", "email": "a@b.com"})).unwrap();
        assert_eq!(payload.name.as_deref(), Some("Ann"));
        assert_eq!(payload.email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        assert!(parse_user_payload(&json!("hello")).is_none());
        assert!(parse_user_payload(&json!([1, 2])).is_none());
        assert!(parse_user_payload(&json!(null)).is_none());
    }

    #[test]
    fn missing_null_or_empty_email_maps_to_none() {
        assert!(parse_user_payload(&json!({})).unwrap().email.is_none());
        assert!(parse_user_payload(&json!({"email": null})).unwrap().email.is_none());
        assert!(parse_user_payload(&json!({"email": ""})).unwrap().email.is_none());
    }

    #[test]
    fn non_string_email_is_kept_as_text() {
        let payload = parse_user_payload(&json!({"email": 123})).unwrap();
        assert_eq!(payload.email.as_deref(), Some("123"));
    }
}
