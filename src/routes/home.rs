//! Greeting handler.

use axum::extract::State;

use crate::state::AppState;

/// Greeting handler.
///
/// Responds with `Hello, World! (version: <version>)` on any method.
pub async fn index(State(state): State<AppState>) -> String {
    greeting(&state.build.version)
}

pub(crate) fn greeting(version: &str) -> String {
    format!("Hello, World! (version: {})\n", version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_embeds_version() {
        assert_eq!(greeting("dev"), "Hello, World! (version: dev)\n");
        assert_eq!(greeting("1.4.2"), "Hello, World! (version: 1.4.2)\n");
    }
}
