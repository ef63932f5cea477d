//! The generated `package.json`.

use std::{collections::BTreeMap, fmt};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{config::ScaffoldConfig, ScaffoldRequest};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum License {
    #[default]
    Unlicensed,
    Mit,
}

impl License {
    pub const ALL: [License; 2] = [License::Unlicensed, License::Mit];
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            License::Unlicensed => write!(f, "UNLICENSED"),
            License::Mit => write!(f, "MIT"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageJson {
    pub name: String,
    pub version: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub license: License,
    pub author: String,
    pub main: String,
    pub scripts: IndexMap<String, String>,
    pub dependencies: BTreeMap<String, String>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
    #[serde(rename = "type")]
    pub module_type: String,
}

impl PackageJson {
    /// Dependency maps start empty: `npm install` fills them with the
    /// versions it resolves.
    pub fn new(request: &ScaffoldRequest, config: &ScaffoldConfig) -> Self {
        Self {
            name: request.package_name(),
            version: config.version.clone(),
            description: request.description.clone(),
            keywords: config.keywords.clone(),
            license: request.license,
            author: request.author.clone(),
            main: config.main.clone(),
            scripts: config.scripts.clone(),
            dependencies: BTreeMap::new(),
            dev_dependencies: BTreeMap::new(),
            module_type: "module".to_string(),
        }
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn request() -> ScaffoldRequest {
        ScaffoldRequest::new(
            "My-App",
            Some("Acme".to_string()),
            "An app",
            License::Mit,
            "Jane Doe",
        )
    }

    #[test]
    fn license_serializes_to_spdx_names() {
        assert_eq!(serde_json::to_string(&License::Mit).unwrap(), "\"MIT\"");
        assert_eq!(
            serde_json::to_string(&License::Unlicensed).unwrap(),
            "\"UNLICENSED\""
        );
        assert_eq!(License::ALL.map(|l| l.to_string()), ["UNLICENSED", "MIT"]);
    }

    #[test]
    fn package_json_has_expected_shape() {
        let package = PackageJson::new(&request(), &ScaffoldConfig::default());
        let json = package.to_pretty_json().unwrap();
        assert!(json.ends_with("}\n"));

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "@acme/my-app");
        assert_eq!(value["license"], "MIT");
        assert_eq!(value["author"], "Jane Doe");
        assert_eq!(value["type"], "module");
        assert!(value["dependencies"].as_object().unwrap().is_empty());
        assert!(value["devDependencies"].as_object().unwrap().is_empty());

        let scripts: Vec<&str> = value["scripts"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            scripts,
            ["build", "clean", "deploy", "postinstall", "prepare", "start"]
        );
    }

    #[test]
    fn fields_keep_their_order() {
        let json = PackageJson::new(&request(), &ScaffoldConfig::default())
            .to_pretty_json()
            .unwrap();
        let positions: Vec<usize> = [
            "\"name\"",
            "\"version\"",
            "\"description\"",
            "\"keywords\"",
            "\"license\"",
            "\"author\"",
            "\"main\"",
            "\"scripts\"",
            "\"dependencies\"",
            "\"devDependencies\"",
            "\"type\"",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    }
}
