use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;

const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.json");

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ServiceId(pub u32);

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceIcon {
    Cake,
    Heart,
    Briefcase,
    GraduationCap,
    Sparkles,
    Gift,
    Music,
    Camera,
    #[serde(other)]
    Unknown,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub icon: ServiceIcon,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Socials {
    pub instagram: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CompanyInfo {
    pub name: String,
    pub phone: String,
    pub socials: Socials,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub company: CompanyInfo,
    pub services: Vec<Service>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON for the content model: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("service id {0} appears more than once")]
    DuplicateServiceId(ServiceId),
}

impl Catalog {
    /// The catalog shipped inside the binary from `assets/catalog.json`.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    // Selection is keyed by id, so ids must be unique.
    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for service in &self.services {
            if !seen.insert(service.id) {
                return Err(CatalogError::DuplicateServiceId(service.id));
            }
        }
        Ok(())
    }

    pub fn find(&self, id: ServiceId) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_loads() {
        let catalog = Catalog::bundled().expect("bundled catalog should parse");
        assert!(!catalog.services.is_empty());
        assert_eq!(catalog.company.phone, "+7 900 000-00-00");
        for service in &catalog.services {
            assert!(!service.features.is_empty(), "service {} has no features", service.id);
            assert_ne!(service.icon, ServiceIcon::Unknown, "service {} has an unknown icon", service.id);
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let raw = r#"{
            "company": {"name": "x", "phone": "1", "socials": {"instagram": "@x"}},
            "services": [
                {"id": 1, "title": "a", "shortDescription": "a", "description": "a", "icon": "cake"},
                {"id": 1, "title": "b", "shortDescription": "b", "description": "b", "icon": "gift"}
            ]
        }"#;
        match Catalog::from_json(raw) {
            Err(CatalogError::DuplicateServiceId(id)) => assert_eq!(id, ServiceId(1)),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_icon_falls_back() {
        let raw = r#"{
            "company": {"name": "x", "phone": "1", "socials": {"instagram": "x"}},
            "services": [
                {"id": 7, "title": "a", "shortDescription": "a", "description": "a", "icon": "balloon"}
            ]
        }"#;
        let catalog = Catalog::from_json(raw).unwrap();
        assert_eq!(catalog.services[0].icon, ServiceIcon::Unknown);
        assert!(catalog.services[0].gallery.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(Catalog::from_json("{\"services\": 3}"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn find_by_id() {
        let catalog = Catalog::bundled().unwrap();
        let first = &catalog.services[0];
        assert_eq!(catalog.find(first.id).map(|s| &s.title), Some(&first.title));
        assert!(catalog.find(ServiceId(u32::MAX)).is_none());
    }
}
