use serde::{Deserialize, Serialize};

/// Surface finish settings.
///
/// STL carries no material data; these are kept for format writers that do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub roughness: f64,
    pub metalness: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            roughness: 0.2,
            metalness: 1.0,
        }
    }
}

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOptions {
    pub material: Material,
    /// Facet normals recomputed flat from each triangle's winding (true),
    /// or averaged from the stored vertex normals (false).
    pub faceted: bool,
    /// Solid name written into format headers.
    pub name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            material: Material::default(),
            faceted: true,
            name: "mesh".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ExportOptions::default();
        assert_eq!(options.material.roughness, 0.2);
        assert_eq!(options.material.metalness, 1.0);
        assert!(options.faceted);
        assert_eq!(options.name, "mesh");
    }

    #[test]
    fn test_options_serialize() {
        let json = serde_json::to_string(&ExportOptions::default()).unwrap();
        assert!(json.contains("roughness"));
        assert!(json.contains("faceted"));
    }
}
