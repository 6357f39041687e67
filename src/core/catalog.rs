use crate::domain::model::Service;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub base_rate: f64,
}

impl CatalogEntry {
    pub fn new(id: &str, name: &str, base_rate: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            base_rate,
        }
    }

    pub fn to_service(&self) -> Service {
        Service::new(self.name.clone(), self.base_rate)
    }
}

/// Maps a service-type identifier to a [`Service`].
///
/// Unknown identifiers never fail: they resolve to the fallback service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCatalog {
    entries: Vec<CatalogEntry>,
    fallback: Service,
}

impl ServiceCatalog {
    pub fn new(entries: Vec<CatalogEntry>, fallback: Service) -> Self {
        Self { entries, fallback }
    }

    pub fn lookup(&self, type_id: &str) -> Service {
        match self.entries.iter().find(|entry| entry.id == type_id) {
            Some(entry) => entry.to_service(),
            None => {
                tracing::debug!(
                    "Unknown service type '{}', using {}",
                    type_id,
                    self.fallback.name
                );
                self.fallback.clone()
            }
        }
    }

    pub fn contains(&self, type_id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == type_id)
    }

    /// 依註冊順序列出所有服務
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn fallback(&self) -> &Service {
        &self.fallback
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::new(
            vec![
                CatalogEntry::new("design", "Graphic Design", 50.0),
                CatalogEntry::new("web", "Web Development", 100.0),
                CatalogEntry::new("content", "Content Writing", 30.0),
            ],
            Service::new("Generic", 20.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_services() {
        let catalog = ServiceCatalog::default();

        assert_eq!(catalog.lookup("design"), Service::new("Graphic Design", 50.0));
        assert_eq!(catalog.lookup("web"), Service::new("Web Development", 100.0));
        assert_eq!(catalog.lookup("content"), Service::new("Content Writing", 30.0));
    }

    #[test]
    fn test_lookup_unknown_falls_back_to_generic() {
        let catalog = ServiceCatalog::default();

        for type_id in ["other", "", "Web", "design ", "seo"] {
            assert_eq!(catalog.lookup(type_id), Service::new("Generic", 20.0));
        }
    }

    #[test]
    fn test_lookup_is_pure() {
        let catalog = ServiceCatalog::default();
        assert_eq!(catalog.lookup("web"), catalog.lookup("web"));
        assert_eq!(catalog, ServiceCatalog::default());
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = ServiceCatalog::new(
            vec![CatalogEntry::new("seo", "SEO Audit", 75.0)],
            Service::new("Misc", 10.0),
        );

        assert!(catalog.contains("seo"));
        assert!(!catalog.contains("web"));
        assert_eq!(catalog.lookup("seo").base_rate, 75.0);
        assert_eq!(catalog.lookup("web"), Service::new("Misc", 10.0));
    }

    #[test]
    fn test_entries_keep_registration_order() {
        let catalog = ServiceCatalog::default();
        let ids: Vec<&str> = catalog.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["design", "web", "content"]);
    }
}
