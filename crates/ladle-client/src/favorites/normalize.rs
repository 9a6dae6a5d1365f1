//! Normalization of the favorites payload.
//!
//! The upstream contract for `GET /users/favorites` is not stable: the recipe
//! array has been observed directly under `data`, under `data.recipes`, and
//! under `data.favouriteRecipes`. This module probes the three shapes in that
//! declared priority order and hands the rest of the system one typed list.
//! Anything other than the canonical flat shape is logged as API drift.

use ladle_types::RecipeDoc;
use serde_json::Value;
use tracing::warn;

/// Which of the known payload shapes the server used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoritesShape {
    /// `data` is the recipe array. Canonical.
    Flat,
    /// `data.recipes` is the recipe array.
    NestedRecipes,
    /// `data.favouriteRecipes` is the recipe array.
    NestedFavouriteRecipes,
    /// None of the known shapes matched; treated as no favorites.
    Unrecognized,
}

/// The favorites payload reduced to one typed list.
#[derive(Debug, Clone)]
pub struct NormalizedFavorites {
    pub shape: FavoritesShape,
    pub recipes: Vec<RecipeDoc>,
}

/// Reduces the envelope `data` of a favorites response to a recipe list.
///
/// Logs a warning when the shape is anything but the canonical flat array,
/// so upstream drift shows up in the logs instead of silently.
pub fn normalize(data: Option<&Value>) -> NormalizedFavorites {
    let (shape, array) = match data {
        Some(Value::Array(array)) => (FavoritesShape::Flat, Some(array)),
        Some(value) => {
            if let Some(array) = value.get("recipes").and_then(Value::as_array) {
                (FavoritesShape::NestedRecipes, Some(array))
            } else if let Some(array) = value.get("favouriteRecipes").and_then(Value::as_array) {
                (FavoritesShape::NestedFavouriteRecipes, Some(array))
            } else {
                (FavoritesShape::Unrecognized, None)
            }
        }
        None => (FavoritesShape::Unrecognized, None),
    };

    match shape {
        FavoritesShape::Flat => {}
        FavoritesShape::NestedRecipes | FavoritesShape::NestedFavouriteRecipes => {
            warn!(?shape, "favorites payload used a non-canonical shape");
        }
        FavoritesShape::Unrecognized => {
            warn!("favorites payload matched no known shape, treating as empty");
        }
    }

    let recipes = array
        .map(|items| items.iter().cloned().map(RecipeDoc::from_value).collect())
        .unwrap_or_default();

    NormalizedFavorites { shape, recipes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids(normalized: &NormalizedFavorites) -> Vec<&str> {
        normalized.recipes.iter().filter_map(RecipeDoc::id).collect()
    }

    /// Test: all three known shapes yield the same recipe list.
    #[test]
    fn test_three_shapes_agree() {
        let recipes = json!([{"_id": "r1"}, {"_id": "r2"}]);

        let flat = normalize(Some(&recipes));
        let nested = normalize(Some(&json!({"recipes": recipes})));
        let favourite = normalize(Some(&json!({"favouriteRecipes": recipes})));

        assert_eq!(flat.shape, FavoritesShape::Flat);
        assert_eq!(nested.shape, FavoritesShape::NestedRecipes);
        assert_eq!(favourite.shape, FavoritesShape::NestedFavouriteRecipes);

        assert_eq!(ids(&flat), vec!["r1", "r2"]);
        assert_eq!(ids(&nested), ids(&flat));
        assert_eq!(ids(&favourite), ids(&flat));
    }

    /// Test: probe order prefers the flat array over nested fields.
    #[test]
    fn test_probe_priority() {
        // `recipes` before `favouriteRecipes` when both nest.
        let both = normalize(Some(&json!({
            "recipes": [{"_id": "a"}],
            "favouriteRecipes": [{"_id": "b"}],
        })));
        assert_eq!(both.shape, FavoritesShape::NestedRecipes);
        assert_eq!(ids(&both), vec!["a"]);
    }

    /// Test: unknown shapes and missing data default to empty.
    #[test]
    fn test_unrecognized_is_empty() {
        let scalar = normalize(Some(&json!(42)));
        assert_eq!(scalar.shape, FavoritesShape::Unrecognized);
        assert!(scalar.recipes.is_empty());

        let object = normalize(Some(&json!({"count": 3})));
        assert_eq!(object.shape, FavoritesShape::Unrecognized);
        assert!(object.recipes.is_empty());

        let missing = normalize(None);
        assert!(missing.recipes.is_empty());
    }

    /// Test: a non-array `recipes` field does not match the nested shape.
    #[test]
    fn test_nested_field_must_be_array() {
        let bad = normalize(Some(&json!({"recipes": "nope", "favouriteRecipes": [{"_id": "x"}]})));
        assert_eq!(bad.shape, FavoritesShape::NestedFavouriteRecipes);
        assert_eq!(ids(&bad), vec!["x"]);
    }
}
