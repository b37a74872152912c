//! Build information endpoint.

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::config::BuildInfo;
use crate::state::AppState;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Build information as reported by `/version`.
///
/// Built fresh for every request and discarded after serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
    pub commit: String,
    pub build_date: String,
    /// Compiler version, serialized under the `go_version` key.
    #[serde(rename = "go_version")]
    pub runtime_version: String,
    pub platform: String,
}

impl From<&BuildInfo> for VersionInfo {
    fn from(build: &BuildInfo) -> Self {
        Self {
            version: build.version.clone(),
            commit: build.commit.clone(),
            build_date: build.build_date.clone(),
            runtime_version: build.runtime_version.clone(),
            platform: build.platform.clone(),
        }
    }
}

impl VersionInfo {
    /// Serializes to a JSON object followed by a newline.
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        let mut body = serde_json::to_string(self)?;
        body.push('\n');
        Ok(body)
    }
}

/// Version handler.
pub async fn version(State(state): State<AppState>) -> Response {
    let info = VersionInfo::from(state.build.as_ref());

    match info.to_json_line() {
        Ok(body) => (StatusCode::OK, [(CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize version info");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_build() -> BuildInfo {
        BuildInfo {
            version: "dev".to_string(),
            commit: "unknown".to_string(),
            build_date: "unknown".to_string(),
            runtime_version: "rustc 1.80.0".to_string(),
            platform: "linux/x86_64".to_string(),
        }
    }

    #[test]
    fn serializes_fields_in_order_with_runtime_key() {
        let info = VersionInfo::from(&sample_build());
        assert_eq!(
            info.to_json_line().unwrap(),
            "{\"version\":\"dev\",\"commit\":\"unknown\",\"build_date\":\"unknown\",\
             \"go_version\":\"rustc 1.80.0\",\"platform\":\"linux/x86_64\"}\n"
        );
    }

    #[test]
    fn object_has_exactly_five_keys() {
        let body = VersionInfo::from(&sample_build()).to_json_line().unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["build_date", "commit", "go_version", "platform", "version"]
        );
    }
}
