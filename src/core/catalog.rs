//! Ingredient catalog — the compiled-in density table and user catalog files.
//!
//! Densities are stored as grams per deciliter. The builtin table is
//! embedded JSON parsed once on first use; user-supplied catalogs are JSON
//! files with the same shape:
//!
//! ```json
//! { "ingredients": { "all-purpose flour": 60, "butter": 90 } }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::sync::LazyLock;

/// A baking ingredient with a known density.
///
/// Identity is the display name: two ingredients with the same name compare
/// equal regardless of density, and hashing follows the same rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    /// Display name, unique within a catalog.
    pub name: String,

    /// Grams per deciliter. Zero means "density unknown" and converts to
    /// 0 dl rather than failing.
    pub grams_per_deciliter: f64,
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Ingredient {}

impl Hash for Ingredient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} g/dl)", self.name, self.grams_per_deciliter)
    }
}

/// On-disk catalog format, shared by the builtin table and user files.
#[derive(Serialize, Deserialize)]
struct CatalogFile {
    /// Ingredient name -> grams per deciliter, in author order.
    ingredients: IndexMap<String, f64>,
}

/// An immutable, display-ordered collection of ingredients.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Sorted ascending by lowercased name.
    ingredients: Vec<Ingredient>,
}

/// Embedded builtin density table.
static BUILTIN_JSON: &str = include_str!("data/ingredients.json");

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_json(BUILTIN_JSON).expect("builtin ingredient table should be valid JSON")
});

impl Catalog {
    /// The compiled-in ingredient table.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Catalog, String> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| format!("catalog parse error: {}", e))?;
        let mut ingredients: Vec<Ingredient> = file
            .ingredients
            .into_iter()
            .map(|(name, grams_per_deciliter)| Ingredient {
                name,
                grams_per_deciliter,
            })
            .collect();
        ingredients.sort_by_key(|i| i.name.to_lowercase());
        Ok(Catalog { ingredients })
    }

    /// Parse a catalog from a JSON file on disk.
    pub fn from_file(path: &Path) -> Result<Catalog, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        Self::from_json(&content).map_err(|e| format!("{}: {}", path.display(), e))
    }

    /// Ingredients in display order (name ascending, case-insensitive).
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Look up an ingredient by name, case-insensitively and ignoring
    /// surrounding whitespace.
    pub fn get(&self, name: &str) -> Option<&Ingredient> {
        let wanted = normalize_name(name);
        self.ingredients
            .iter()
            .find(|i| normalize_name(&i.name) == wanted)
    }
}

/// Normalize an ingredient name for lookup.
fn normalize_name(s: &str) -> String {
    s.trim().to_lowercase()
}

// ============================================================================
// Validation
// ============================================================================

/// Catalog validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Validate a catalog. Returns a list of errors (empty = valid).
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if catalog.is_empty() {
        errors.push(ValidationError {
            message: "catalog has no ingredients".to_string(),
        });
    }

    let mut seen: Vec<String> = Vec::new();
    for ingredient in catalog.ingredients() {
        let normalized = normalize_name(&ingredient.name);

        if normalized.is_empty() {
            errors.push(ValidationError {
                message: "ingredient with empty name".to_string(),
            });
        }

        if seen.contains(&normalized) {
            errors.push(ValidationError {
                message: format!("duplicate ingredient name '{}'", normalized),
            });
        }
        seen.push(normalized);

        if !ingredient.grams_per_deciliter.is_finite() {
            errors.push(ValidationError {
                message: format!("ingredient '{}' has a non-finite density", ingredient.name),
            });
        } else if ingredient.grams_per_deciliter < 0.0 {
            errors.push(ValidationError {
                message: format!(
                    "ingredient '{}' has a negative density ({})",
                    ingredient.name, ingredient.grams_per_deciliter
                ),
            });
        }
    }

    errors
}

// ============================================================================
// Tests
// ============================================================================
