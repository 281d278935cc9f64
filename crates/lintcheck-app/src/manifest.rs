//! Reads the one setting lintcheck takes from `package.json`: whether the
//! linter should run with its prettier integration.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

pub const MANIFEST_FILE: &str = "package.json";
pub const PRETTIER_FLAG: &str = "--prettier";

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("read manifest '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse manifest '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectManifest {
    #[serde(default)]
    pub eslint_config: Option<EslintConfig>,
    #[serde(default)]
    pub xo: Option<XoConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EslintConfig {
    #[serde(default)]
    pub plugins: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct XoConfig {
    #[serde(default)]
    pub prettier: Option<Value>,
}

impl ProjectManifest {
    /// Loads `<workspace>/package.json`. A missing file is an empty manifest.
    pub fn load(workspace: &Path) -> Result<Self, ManifestError> {
        let path = workspace.join(MANIFEST_FILE);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No manifest at '{}'", path.display());
                return Ok(Self::default());
            }
            Err(source) => return Err(ManifestError::Read { path, source }),
        };

        Self::parse(&text).map_err(|source| ManifestError::Parse { path, source })
    }

    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn needs_prettier(&self) -> bool {
        let plugin = self
            .eslint_config
            .as_ref()
            .and_then(|c| c.plugins.as_ref())
            .is_some_and(|plugins| plugins.iter().any(|p| p == "prettier"));

        let flag = self
            .xo
            .as_ref()
            .and_then(|x| x.prettier.as_ref())
            .is_some_and(is_truthy);

        plugin || flag
    }

    /// Linter flags derived from the manifest.
    pub fn extra_flags(&self) -> Vec<String> {
        if self.needs_prettier() {
            vec![PRETTIER_FLAG.to_string()]
        } else {
            vec![]
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use lintcheck_testkit::sample_manifests;
    use tempfile::TempDir;

    use super::*;

    fn parse(text: &str) -> ProjectManifest {
        ProjectManifest::parse(text).expect("manifest")
    }

    #[test]
    fn prettier_toggle_sources() {
        assert!(!parse(sample_manifests::plain()).needs_prettier());
        assert!(parse(sample_manifests::eslint_prettier_plugin()).needs_prettier());
        assert!(!parse(sample_manifests::eslint_other_plugins()).needs_prettier());
        assert!(parse(sample_manifests::xo_prettier()).needs_prettier());
        assert!(!parse(sample_manifests::xo_prettier_off()).needs_prettier());
    }

    #[test]
    fn eslint_config_without_plugins_is_fine() {
        assert!(!parse(r#"{"eslintConfig": {"extends": "xo"}}"#).needs_prettier());
    }

    #[test]
    fn truthy_non_bool_prettier() {
        assert!(parse(r#"{"xo": {"prettier": "yes"}}"#).needs_prettier());
        assert!(!parse(r#"{"xo": {"prettier": 0}}"#).needs_prettier());
        assert!(!parse(r#"{"xo": {"prettier": ""}}"#).needs_prettier());
    }

    #[test]
    fn extra_flags_follow_toggle() {
        assert_eq!(
            parse(sample_manifests::xo_prettier()).extra_flags(),
            vec![PRETTIER_FLAG.to_string()]
        );
        assert!(parse(sample_manifests::plain()).extra_flags().is_empty());
    }

    #[test]
    fn load_missing_manifest_is_empty() {
        let td = TempDir::new().expect("temp");
        let manifest = ProjectManifest::load(td.path()).expect("load");
        assert_eq!(manifest, ProjectManifest::default());
    }

    #[test]
    fn load_invalid_manifest_errors() {
        let td = TempDir::new().expect("temp");
        std::fs::write(td.path().join(MANIFEST_FILE), "{ not json").expect("write");
        let err = ProjectManifest::load(td.path()).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
    }

    #[test]
    fn load_reads_workspace_manifest() {
        let td = TempDir::new().expect("temp");
        std::fs::write(
            td.path().join(MANIFEST_FILE),
            sample_manifests::eslint_prettier_plugin(),
        )
        .expect("write");
        assert!(ProjectManifest::load(td.path()).expect("load").needs_prettier());
    }
}
