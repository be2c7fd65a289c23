//! Prompt sent to the text provider for each recipe request.

/// Build the recipe prompt: dish name, step-by-step preparation and a side
/// suggestion for the given ingredients. The ingredients are inserted unmodified.
pub fn build_recipe_prompt(ingredients: &str) -> String {
    format!(
        "Genera una receta sencilla y paso a paso usando estos ingredientes: {ingredients}.\n  \
         Incluye: nombre del platillo, pasos de preparación y una sugerencia de acompañamiento."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_ingredients_in_template() {
        let prompt = build_recipe_prompt("tomate");
        assert!(prompt.contains("usando estos ingredientes: tomate."));
        assert!(prompt.contains("nombre del platillo"));
        assert!(prompt.contains("pasos de preparación"));
        assert!(prompt.contains("sugerencia de acompañamiento"));
    }

    #[test]
    fn empty_ingredients_still_produce_prompt() {
        let prompt = build_recipe_prompt("");
        assert!(prompt.starts_with(
            "Genera una receta sencilla y paso a paso usando estos ingredientes: ."
        ));
    }

    #[test]
    fn second_line_keeps_its_indentation() {
        let prompt = build_recipe_prompt("pan");
        assert!(prompt.contains(".\n  Incluye:"));
    }
}
