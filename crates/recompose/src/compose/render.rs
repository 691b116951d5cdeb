//! Render — compose document to YAML text.

use super::model::ComposeFile;

/// Serialize a compose document to YAML.
pub fn to_yaml(file: &ComposeFile) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::model::{Attrs, COMPOSE_VERSION};
    use serde_yaml::Value;
    use std::collections::BTreeMap;

    fn sample_document() -> ComposeFile {
        let mut web = Attrs::new();
        web.insert("image".into(), Value::String("nginx:1.25".into()));
        web.insert(
            "ports".into(),
            Value::Sequence(vec![Value::String("8080:80/tcp".into())]),
        );
        web.insert("privileged".into(), Value::Bool(false));

        let mut services = BTreeMap::new();
        services.insert("web1".to_string(), web);

        let mut frontend = Attrs::new();
        frontend.insert("external".into(), Value::Bool(true));
        frontend.insert("name".into(), Value::String("frontend".into()));

        let mut networks = BTreeMap::new();
        networks.insert("frontend".to_string(), frontend);

        ComposeFile::new(services, networks, BTreeMap::new())
    }

    #[test]
    fn test_field_order() {
        let yaml = to_yaml(&sample_document()).unwrap();

        let version_at = yaml.find("version:").unwrap();
        let services_at = yaml.find("services:").unwrap();
        let networks_at = yaml.find("networks:").unwrap();
        assert!(version_at < services_at);
        assert!(services_at < networks_at);
    }

    #[test]
    fn test_empty_sections_omitted() {
        let yaml = to_yaml(&sample_document()).unwrap();
        assert!(!yaml.contains("volumes:"));

        let no_networks = ComposeFile::new(BTreeMap::new(), BTreeMap::new(), BTreeMap::new());
        let yaml = to_yaml(&no_networks).unwrap();
        assert!(!yaml.contains("networks:"));
        assert!(!yaml.contains("volumes:"));
    }

    #[test]
    fn test_round_trip() {
        let document = sample_document();
        let yaml = to_yaml(&document).unwrap();
        let reparsed: ComposeFile = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(reparsed, document);
        assert_eq!(reparsed.version, COMPOSE_VERSION);
    }
}
