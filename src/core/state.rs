//! Conversion session state — selected ingredient, gram amount, and the
//! derived deciliter result.
//!
//! Mutation is synchronous: by the time a setter returns, the result has
//! been recomputed and listeners notified exactly once. The derived value
//! is never observably stale.

use super::catalog::{Catalog, Ingredient};
use super::convert::grams_to_deciliters;
use super::format;

/// Gram amount a fresh session starts with.
pub const DEFAULT_GRAM_AMOUNT: f64 = 100.0;

/// Called with the freshly recomputed deciliter result after every change.
pub type ChangeListener = Box<dyn Fn(f64)>;

/// Holds the current selection and gram amount, keeping the derived
/// deciliter result consistent with both.
pub struct ConversionState {
    selected: Ingredient,
    gram_amount: f64,
    deciliters: f64,
    listeners: Vec<ChangeListener>,
}

impl ConversionState {
    /// Start a session: the first catalog ingredient in display order is
    /// selected, with [`DEFAULT_GRAM_AMOUNT`] grams entered.
    pub fn new(catalog: &Catalog) -> Result<Self, String> {
        let selected = catalog
            .ingredients()
            .first()
            .cloned()
            .ok_or_else(|| "catalog has no ingredients".to_string())?;
        let mut state = Self {
            selected,
            gram_amount: DEFAULT_GRAM_AMOUNT,
            deciliters: 0.0,
            listeners: Vec::new(),
        };
        state.recompute();
        Ok(state)
    }

    pub fn selected_ingredient(&self) -> &Ingredient {
        &self.selected
    }

    pub fn gram_amount(&self) -> f64 {
        self.gram_amount
    }

    /// The deciliter equivalent of the current amount and selection.
    pub fn derived_result(&self) -> f64 {
        self.deciliters
    }

    /// Replace the selection and recompute.
    pub fn select_ingredient(&mut self, ingredient: Ingredient) {
        self.selected = ingredient;
        self.recompute();
    }

    /// Set the gram amount, clamping negative input to zero, and recompute.
    pub fn update_gram_amount(&mut self, grams: f64) {
        self.gram_amount = grams.max(0.0);
        self.recompute();
    }

    /// Register a listener invoked with the new result after each change.
    pub fn subscribe(&mut self, listener: impl Fn(f64) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Current amount as display text, e.g. `"150 g"`.
    pub fn formatted_grams(&self) -> String {
        format::format_grams(self.gram_amount)
    }

    /// Current result as display text, e.g. `"1.50 dl"`.
    pub fn formatted_result(&self) -> String {
        format::format_deciliters(self.deciliters)
    }

    fn recompute(&mut self) {
        self.deciliters = grams_to_deciliters(self.gram_amount, self.selected.grams_per_deciliter);
        for listener in &self.listeners {
            listener(self.deciliters);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn ingredient(name: &str, density: f64) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            grams_per_deciliter: density,
        }
    }

    #[test]
    fn test_default_state() {
        let state = ConversionState::new(Catalog::builtin()).unwrap();
        assert_eq!(state.gram_amount(), 100.0);
        // First of the builtin catalog in display order.
        assert_eq!(state.selected_ingredient().name, "all-purpose flour");
        assert!(state.derived_result() > 0.0);
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let empty = Catalog::from_json(r#"{"ingredients": {}}"#).unwrap();
        assert!(ConversionState::new(&empty).is_err());
    }

    #[test]
    fn test_select_recomputes() {
        let mut state = ConversionState::new(Catalog::builtin()).unwrap();
        state.update_gram_amount(120.0);
        state.select_ingredient(ingredient("flour", 60.0));
        assert_eq!(state.derived_result(), 2.0);

        state.select_ingredient(ingredient("water", 100.0));
        assert_eq!(state.derived_result(), 1.2);
    }

    #[test]
    fn test_update_amount_recomputes() {
        let mut state = ConversionState::new(Catalog::builtin()).unwrap();
        state.select_ingredient(ingredient("butter", 90.0));
        state.update_gram_amount(135.0);
        assert_eq!(state.derived_result(), 1.5);
    }

    #[test]
    fn test_negative_amount_clamps_to_zero() {
        let mut state = ConversionState::new(Catalog::builtin()).unwrap();
        state.update_gram_amount(-50.0);
        assert_eq!(state.gram_amount(), 0.0);
        assert_eq!(state.derived_result(), 0.0);
    }

    #[test]
    fn test_unknown_density_yields_zero_result() {
        let mut state = ConversionState::new(Catalog::builtin()).unwrap();
        state.select_ingredient(ingredient("mystery powder", 0.0));
        assert_eq!(state.derived_result(), 0.0);
    }

    #[test]
    fn test_result_never_stale() {
        let mut state = ConversionState::new(Catalog::builtin()).unwrap();
        for grams in [0.0, 33.0, 100.0, 250.5] {
            state.update_gram_amount(grams);
            assert_eq!(
                state.derived_result(),
                grams_to_deciliters(grams, state.selected_ingredient().grams_per_deciliter)
            );
        }
    }

    #[test]
    fn test_listener_fires_once_per_change() {
        let mut state = ConversionState::new(Catalog::builtin()).unwrap();
        let fired = Rc::new(Cell::new(0u32));
        let last = Rc::new(Cell::new(f64::NAN));
        let fired2 = Rc::clone(&fired);
        let last2 = Rc::clone(&last);
        state.subscribe(move |result| {
            fired2.set(fired2.get() + 1);
            last2.set(result);
        });

        state.select_ingredient(ingredient("flour", 60.0));
        assert_eq!(fired.get(), 1);

        state.update_gram_amount(120.0);
        assert_eq!(fired.get(), 2);
        assert_eq!(last.get(), 2.0);
    }

    #[test]
    fn test_formatted_output() {
        let mut state = ConversionState::new(Catalog::builtin()).unwrap();
        state.select_ingredient(ingredient("flour", 100.0));
        state.update_gram_amount(150.0);
        assert_eq!(state.formatted_grams(), "150 g");
        assert_eq!(state.formatted_result(), "1.50 dl");
    }
}
