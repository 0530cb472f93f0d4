//! Free-text search over the in-memory recipe list.

use crate::model::Recipe;

/// Trim and lowercase a raw search query
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Lowercased title, cuisine, tags and ingredients joined by single spaces.
/// Absent or empty fields are skipped.
pub fn haystack(recipe: &Recipe) -> String {
    let tags = recipe.tags.join(" ");
    let ingredients = recipe.ingredients.join(" ");

    [
        recipe.title.as_str(),
        recipe.cuisine.as_deref().unwrap_or_default(),
        tags.as_str(),
        ingredients.as_str(),
    ]
    .into_iter()
    .filter(|piece| !piece.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase()
}

/// Recipes whose haystack contains the normalized query, in their original order.
/// A blank query keeps everything.
pub fn filter<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    let term = normalize_query(query);
    if term.is_empty() {
        return recipes.iter().collect();
    }

    recipes
        .iter()
        .filter(|recipe| haystack(recipe).contains(&term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Recipe> {
        let mut tacos = Recipe::new(1, "Smoky Tofu Tacos");
        tacos.cuisine = Some("Mexican".to_string());
        tacos.tags = vec!["vegan".to_string(), "weeknight".to_string()];
        tacos.ingredients = vec!["tofu".to_string(), "Chipotle".to_string()];

        let mut curry = Recipe::new(2, "Green Curry");
        curry.cuisine = Some("Thai".to_string());
        curry.ingredients = vec!["coconut milk".to_string(), "lime".to_string()];

        let mut salad = Recipe::new(3, "Lime Slaw");
        salad.tags = vec!["Vegan".to_string()];

        vec![tacos, curry, salad]
    }

    fn ids(recipes: &[&Recipe]) -> Vec<String> {
        recipes.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn test_haystack_skips_absent_fields() {
        let recipes = sample();
        assert_eq!(
            haystack(&recipes[0]),
            "smoky tofu tacos mexican vegan weeknight tofu chipotle"
        );
        assert_eq!(haystack(&recipes[2]), "lime slaw vegan");
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        let recipes = sample();
        assert_eq!(ids(&filter(&recipes, "")), vec!["1", "2", "3"]);
        assert_eq!(ids(&filter(&recipes, "   \t")), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let recipes = sample();
        assert_eq!(ids(&filter(&recipes, "  LIME ")), vec!["2", "3"]);
        assert_eq!(ids(&filter(&recipes, "vegan")), vec!["1", "3"]);
        assert_eq!(ids(&filter(&recipes, "thai")), vec!["2"]);
    }

    #[test]
    fn test_match_can_span_fields() {
        let recipes = sample();
        // title and cuisine are joined with a space
        assert_eq!(ids(&filter(&recipes, "tacos mexican")), vec!["1"]);
    }

    #[test]
    fn test_instructions_are_not_searched() {
        let mut recipes = sample();
        recipes[1].instructions = Some("Simmer gently".to_string());
        assert!(filter(&recipes, "simmer").is_empty());
    }

    #[test]
    fn test_filter_is_an_ordered_subsequence() {
        let recipes = sample();
        for query in ["a", "e", "vegan", "lime", "zzz", "o"] {
            let kept = filter(&recipes, query);
            let mut cursor = 0;
            for recipe in &kept {
                let pos = recipes[cursor..]
                    .iter()
                    .position(|r| r.id == recipe.id)
                    .expect("kept recipe must come from the source in order");
                cursor += pos + 1;
                assert!(haystack(recipe).contains(&normalize_query(query)));
            }
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let recipes = sample();
        for query in ["", "lime", "VEGAN", "tofu"] {
            let once: Vec<Recipe> = filter(&recipes, query).into_iter().cloned().collect();
            let twice: Vec<Recipe> = filter(&once, query).into_iter().cloned().collect();
            assert_eq!(once, twice);
        }
    }
}
