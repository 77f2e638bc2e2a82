use std::collections::HashMap;

use quoter_types::{Material, MaterialCode};

/// Errors from material lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("material not found: {code}")]
    NotFound { code: MaterialCode },
}

/// The table of quotable materials. Built once at startup and read-only
/// afterward; handlers share it by reference.
#[derive(Debug, Clone)]
pub struct MaterialCatalog {
    materials: HashMap<MaterialCode, Material>,
}

impl MaterialCatalog {
    /// Build a catalog from explicit entries. Later entries win on
    /// duplicate codes.
    pub fn new(materials: impl IntoIterator<Item = (MaterialCode, Material)>) -> Self {
        Self {
            materials: materials.into_iter().collect(),
        }
    }

    pub fn get(&self, code: MaterialCode) -> Result<&Material, CatalogError> {
        self.materials
            .get(&code)
            .ok_or(CatalogError::NotFound { code })
    }

    pub fn list(&self) -> &HashMap<MaterialCode, Material> {
        &self.materials
    }
}

impl Default for MaterialCatalog {
    /// The stock filament lineup with list prices per kilogram.
    fn default() -> Self {
        Self::new([
            (
                MaterialCode::Pla,
                Material {
                    name: "PLA (Standard)".to_string(),
                    density_g_cm3: 1.24,
                    price_per_kg: 25.0,
                    print_speed_modifier: 1.0,
                },
            ),
            (
                MaterialCode::Abs,
                Material {
                    name: "ABS (High Strength)".to_string(),
                    density_g_cm3: 1.04,
                    price_per_kg: 30.0,
                    print_speed_modifier: 0.9,
                },
            ),
            (
                MaterialCode::Petg,
                Material {
                    name: "PETG (Chemical Resistant)".to_string(),
                    density_g_cm3: 1.27,
                    price_per_kg: 35.0,
                    print_speed_modifier: 0.8,
                },
            ),
            (
                MaterialCode::Tpu,
                Material {
                    name: "TPU (Flexible)".to_string(),
                    density_g_cm3: 1.21,
                    price_per_kg: 45.0,
                    // Flexible filament prints slowest of the lineup.
                    print_speed_modifier: 0.5,
                },
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_covers_every_code() {
        let catalog = MaterialCatalog::default();
        for code in MaterialCode::ALL {
            assert!(catalog.get(code).is_ok(), "missing {code}");
        }
    }

    #[test]
    fn lookup_in_partial_catalog_fails_with_not_found() {
        let catalog = MaterialCatalog::new([(
            MaterialCode::Pla,
            Material {
                name: "PLA (Standard)".to_string(),
                density_g_cm3: 1.24,
                price_per_kg: 25.0,
                print_speed_modifier: 1.0,
            },
        )]);

        let err = catalog.get(MaterialCode::Tpu).unwrap_err();
        assert_eq!(
            err,
            CatalogError::NotFound {
                code: MaterialCode::Tpu
            }
        );
    }

    #[test]
    fn tpu_is_the_slowest_material() {
        let catalog = MaterialCatalog::default();
        let tpu = catalog.get(MaterialCode::Tpu).unwrap();
        for code in MaterialCode::ALL {
            let material = catalog.get(code).unwrap();
            assert!(material.print_speed_modifier >= tpu.print_speed_modifier);
        }
    }
}
