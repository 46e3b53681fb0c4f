// handlers/greeting.rs - GET /api/greeting handler

use axum::{extract::Query, Json};

use crate::types::Greeting;

pub const DEFAULT_NAME: &str = "World";

/// Renders the greeting template for `name`.
pub fn greeting_for(name: &str) -> Greeting {
    Greeting {
        content: format!("¡Hola!, {}!", name),
    }
}

/// First `name` value in the query. Repeats are ignored; an empty value is
/// used as-is.
pub fn requested_name(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value.as_str())
}

/// GET /api/greeting[?name=X]
///
/// Expected Output:
/// ```json
/// { "content": "¡Hola!, World!" }
/// ```
pub async fn greeting(Query(params): Query<Vec<(String, String)>>) -> Json<Greeting> {
    let name = requested_name(&params).unwrap_or(DEFAULT_NAME);
    tracing::debug!(name, "Serving greeting");
    Json(greeting_for(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_greeting_template() {
        assert_eq!(greeting_for("World").content, "¡Hola!, World!");
        assert_eq!(greeting_for("Charles").content, "¡Hola!, Charles!");
        assert_eq!(greeting_for("").content, "¡Hola!, !");
    }

    #[test]
    fn test_requested_name_takes_first_value() {
        assert_eq!(requested_name(&params(&[("name", "a"), ("name", "b")])), Some("a"));
        assert_eq!(requested_name(&params(&[("lang", "es"), ("name", "b")])), Some("b"));
        assert_eq!(requested_name(&params(&[("name", "")])), Some(""));
        assert_eq!(requested_name(&params(&[("lang", "es")])), None);
    }

    #[tokio::test]
    async fn test_missing_name_defaults_to_world() {
        let Json(body) = greeting(Query(Vec::new())).await;
        assert_eq!(body.content, "¡Hola!, World!");
    }

    #[tokio::test]
    async fn test_name_is_interpolated_verbatim() {
        let Json(body) = greeting(Query(params(&[("name", "\"<Zoë>\"")]))).await;
        assert_eq!(body.content, "¡Hola!, \"<Zoë>\"!");
    }
}
