//! Typed model of a conda `environment.yml` file.
//!
//! Only the parts of the format the converter consumes are modelled:
//! the environment name, the channel list, and the dependency list with
//! its nested pip sub-list. Anything else in the file is ignored.

use serde::{Deserialize, Serialize};

/// Root document of an `environment.yml`.
///
/// Every field is optional so that hand-trimmed exports (no `name:`,
/// no `channels:`) still load. A file without a `dependencies:` key
/// yields an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CondaEnvironment {
    /// Environment name, e.g. `scene-recon`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Channel priority list, e.g. `[pytorch, conda-forge, defaults]`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub channels: Vec<String>,

    /// Dependency entries in file order.
    pub dependencies: Vec<CondaDependency>,

    /// Absolute prefix recorded by `conda env export`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl CondaEnvironment {
    /// Iterates over the plain conda spec strings, skipping nested maps.
    pub fn conda_specs(&self) -> impl Iterator<Item = &str> {
        self.dependencies.iter().filter_map(|dep| match dep {
            CondaDependency::Spec(spec) => Some(spec.as_str()),
            _ => None,
        })
    }

    /// Iterates over the packages of the nested `pip:` sub-list, if any.
    pub fn pip_specs(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .iter()
            .filter_map(|dep| match dep {
                CondaDependency::Pip { pip } => Some(pip.iter().map(String::as_str)),
                _ => None,
            })
            .flatten()
    }
}

/// One entry of the `dependencies:` list.
///
/// Conda mixes plain spec strings with a single nested map holding the
/// pip-installed packages, so the representation has to be untagged.
/// Maps other than `pip:` are tolerated and skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CondaDependency {
    /// Plain spec string: `name`, `name=version` or `name=version=build`.
    Spec(String),

    /// The nested pip sub-list: `pip: [pkg==1.0, ...]`.
    Pip { pip: Vec<String> },

    /// Any other mapping. Kept so one exotic entry does not fail the
    /// whole file.
    Other(serde_yaml::Value),
}

/// Borrowed field view of a plain conda spec string.
///
/// Splitting is deliberately naive: fields are separated on every `=`,
/// the first is the name, the second (if present) the version, and the
/// build string after the second `=` is discarded. A spec written with
/// a double equals (`name==1.0`) therefore yields an empty version
/// field, which is passed through to the output untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecFields<'a> {
    /// Package name (everything before the first `=`).
    pub name: &'a str,
    /// Version field, `None` for a bare unversioned name.
    pub version: Option<&'a str>,
}

impl<'a> SpecFields<'a> {
    /// Splits a spec string into its fields.
    pub fn parse(spec: &'a str) -> Self {
        let mut fields = spec.split('=');
        let name = fields.next().unwrap_or("");
        let version = fields.next();
        Self { name, version }
    }

    /// True when the spec carried a version field at all.
    pub fn is_versioned(&self) -> bool {
        self.version.is_some()
    }

    /// Renders the fields as a pip requirement line (`name==version`).
    pub fn to_pip_line(&self) -> String {
        match self.version {
            Some(version) => format!("{}=={}", self.name, version),
            None => self.name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_fields_splits_name_and_version() {
        let fields = SpecFields::parse("numpy=1.24.3");
        assert_eq!(fields.name, "numpy");
        assert_eq!(fields.version, Some("1.24.3"));
        assert!(fields.is_versioned());
    }

    #[test]
    fn spec_fields_discards_build_string() {
        let fields = SpecFields::parse("numpy=1.24.3=py310h5f9d8c6_0");
        assert_eq!(fields.name, "numpy");
        assert_eq!(fields.version, Some("1.24.3"));
        assert_eq!(fields.to_pip_line(), "numpy==1.24.3");
    }

    #[test]
    fn spec_fields_bare_name_has_no_version() {
        let fields = SpecFields::parse("pip");
        assert_eq!(fields.name, "pip");
        assert_eq!(fields.version, None);
        assert!(!fields.is_versioned());
        assert_eq!(fields.to_pip_line(), "pip");
    }

    #[test]
    fn spec_fields_double_equals_yields_empty_version() {
        let fields = SpecFields::parse("scipy==1.10.1");
        assert_eq!(fields.name, "scipy");
        assert_eq!(fields.version, Some(""));
        assert_eq!(fields.to_pip_line(), "scipy==");
    }

    #[test]
    fn environment_separates_conda_and_pip_specs() {
        let yaml = r#"
name: demo
channels:
  - pytorch
  - defaults
dependencies:
  - python=3.10
  - numpy=1.24.3
  - pip
  - pip:
      - trimesh==3.21.5
      - open3d==0.17.0
"#;
        let env: CondaEnvironment = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(env.name.as_deref(), Some("demo"));
        assert_eq!(
            env.conda_specs().collect::<Vec<_>>(),
            vec!["python=3.10", "numpy=1.24.3", "pip"]
        );
        assert_eq!(
            env.pip_specs().collect::<Vec<_>>(),
            vec!["trimesh==3.21.5", "open3d==0.17.0"]
        );
    }

    #[test]
    fn environment_without_dependencies_key_is_empty() {
        let env: CondaEnvironment = serde_yaml::from_str("name: bare").unwrap();
        assert!(env.dependencies.is_empty());
        assert_eq!(env.conda_specs().count(), 0);
        assert_eq!(env.pip_specs().count(), 0);
    }

    #[test]
    fn unknown_mapping_entries_are_tolerated() {
        let yaml = r#"
dependencies:
  - python=3.10
  - extras:
      - something
"#;
        let env: CondaEnvironment = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(env.conda_specs().collect::<Vec<_>>(), vec!["python=3.10"]);
        assert_eq!(env.pip_specs().count(), 0);
    }
}
