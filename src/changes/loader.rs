//! Load sound-change catalogues from TOML

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::changes::catalog::{into_catalog, ChangeSpec};
use crate::changes::Catalog;
use crate::core::error::{EvolveError, Result};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    changes: Vec<ChangeSpec>,
}

/// Load a catalogue from a TOML file of `[[changes]]` tables
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    catalog_from_toml_str(&content)
}

pub fn catalog_from_toml_str(content: &str) -> Result<Catalog> {
    let file: CatalogFile = toml::from_str(content)?;

    if file.changes.is_empty() {
        return Err(EvolveError::InvalidData("catalog defines no changes".into()));
    }
    for spec in &file.changes {
        validate_spec(spec)?;
    }

    Ok(into_catalog(file.changes))
}

fn validate_spec(spec: &ChangeSpec) -> Result<()> {
    if spec.name.trim().is_empty() {
        return Err(EvolveError::InvalidData("change with empty name".into()));
    }
    if spec.shifts.is_empty() {
        return Err(EvolveError::InvalidData(format!(
            "{}: change has no shifts",
            spec.name
        )));
    }
    if spec.environments.is_empty() {
        return Err(EvolveError::InvalidData(format!(
            "{}: change has no environments",
            spec.name
        )));
    }
    if let Some((target, _)) = spec.shifts.iter().find(|(t, r)| t == r) {
        return Err(EvolveError::InvalidData(format!(
            "{}: shift {} > {} changes nothing",
            spec.name, target, target
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changes::SoundChange;

    #[test]
    fn test_parse_catalog() {
        let toml_str = r#"
[[changes]]
name = "sonorization"
shifts = [["p", "b"], ["t", "d"]]
environments = ["(V)_(V)"]

[[changes]]
name = "apocope"
shifts = [["e", ""]]
environments = ["_$"]
"#;
        let catalog = catalog_from_toml_str(toml_str).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].name(), "sonorization");
        assert_eq!(catalog[1].name(), "apocope");
    }

    #[test]
    fn test_rejects_change_without_environments() {
        let toml_str = r#"
[[changes]]
name = "broken"
shifts = [["p", "b"]]
environments = []
"#;
        assert!(matches!(
            catalog_from_toml_str(toml_str),
            Err(EvolveError::InvalidData(_))
        ));
    }

    #[test]
    fn test_rejects_identity_shift() {
        let toml_str = r#"
[[changes]]
name = "nothing"
shifts = [["p", "p"]]
environments = ["_"]
"#;
        assert!(catalog_from_toml_str(toml_str).is_err());
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert!(catalog_from_toml_str("").is_err());
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            catalog_from_toml_str("[[changes]\nname ="),
            Err(EvolveError::Toml(_))
        ));
    }
}
