use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One service the agency offers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ServiceOffering {
    #[schema(example = "web-dev")]
    pub id: String,
    #[schema(example = "Web Design & Development")]
    pub title: String,
    pub description: String,
}

/// Static catalog entry
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl From<&CatalogEntry> for ServiceOffering {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            title: entry.title.to_string(),
            description: entry.description.to_string(),
        }
    }
}

/// The offered services, in display order
pub const SERVICES: [CatalogEntry; 4] = [
    CatalogEntry {
        id: "web-dev",
        title: "Web Design & Development",
        description: "Modern, fast, and accessible websites built on React, Next.js, and Tailwind.",
    },
    CatalogEntry {
        id: "ecommerce",
        title: "E-commerce Solutions",
        description: "Conversion-focused online stores with secure payments and inventory tools.",
    },
    CatalogEntry {
        id: "branding",
        title: "Branding & UI/UX",
        description: "Cohesive brand systems and delightful interfaces that users love.",
    },
    CatalogEntry {
        id: "seo",
        title: "SEO & Performance",
        description: "Technical SEO, Core Web Vitals, and ongoing optimization for growth.",
    },
];

pub fn list_services() -> Vec<ServiceOffering> {
    SERVICES.iter().map(ServiceOffering::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_order_is_stable() {
        let ids: Vec<_> = list_services().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["web-dev", "ecommerce", "branding", "seo"]);
    }

    #[test]
    fn test_entries_are_complete_and_unique() {
        let services = list_services();
        let ids: HashSet<_> = services.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), services.len());
        for service in &services {
            assert!(!service.title.is_empty());
            assert!(!service.description.is_empty());
        }
    }
}
