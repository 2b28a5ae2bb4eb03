use super::*;
use crate::food::{nutrient, Category};

fn avocado() -> Food {
    Food::new("1", "Avocat", Category::Fruits)
        .with_property("anti-inflammatoire")
        .with_property("riche-omega3")
        .with_nutrient(nutrient::OMEGA_3, 0.1)
}

fn salmon() -> Food {
    Food::new("2", "Saumon", Category::Poissons)
        .with_property("riche-omega3")
        .with_nutrient(nutrient::OMEGA_3, 2.3)
}

fn spinach() -> Food {
    Food::new("4", "Épinards", Category::Legumes)
        .with_property("riche-fer")
        .with_property("antioxydant")
        .with_vitamin(nutrient::VITAMINE_C, 28.0)
}

fn names(foods: &[&Food]) -> Vec<String> {
    foods.iter().map(|f| f.name.clone()).collect()
}

// ========================================
// filter_foods: scenario
// ========================================

#[test]
fn property_filter_returns_both_in_order() {
    let foods = vec![avocado(), salmon()];
    let criteria = FilterCriteria::new().with_property("riche-omega3");
    let result = filter_foods(&foods, &criteria);
    assert_eq!(names(&result), vec!["Avocat", "Saumon"]);
}

#[test]
fn nutrient_threshold_returns_only_salmon() {
    let foods = vec![avocado(), salmon()];
    let criteria =
        FilterCriteria::new().with_nutrient(NutrientThreshold::new(nutrient::OMEGA_3, 1.0));
    let result = filter_foods(&foods, &criteria);
    assert_eq!(names(&result), vec!["Saumon"]);
}

#[test]
fn text_filter_returns_only_avocado() {
    let foods = vec![avocado(), salmon()];
    let criteria = FilterCriteria::new().with_text("av");
    let result = filter_foods(&foods, &criteria);
    assert_eq!(names(&result), vec!["Avocat"]);
}

// ========================================
// filter_foods: individual constraints
// ========================================

#[test]
fn empty_criteria_returns_all() {
    let foods = vec![avocado(), salmon(), spinach()];
    let result = filter_foods(&foods, &FilterCriteria::new());
    assert_eq!(names(&result), vec!["Avocat", "Saumon", "Épinards"]);
}

#[test]
fn empty_input_returns_empty() {
    let criteria = FilterCriteria::new().with_text("a").with_category("fruits");
    assert!(filter_foods(&[], &criteria).is_empty());
}

#[test]
fn text_filter_is_case_insensitive() {
    let foods = vec![avocado(), salmon()];
    let upper = filter_foods(&foods, &FilterCriteria::new().with_text("AVOCAT"));
    let lower = filter_foods(&foods, &FilterCriteria::new().with_text("avocat"));
    assert_eq!(upper, lower);
    assert_eq!(names(&upper), vec!["Avocat"]);
}

#[test]
fn text_filter_does_not_fold_accents() {
    let foods = vec![spinach()];
    assert!(filter_foods(&foods, &FilterCriteria::new().with_text("epinards")).is_empty());
    assert_eq!(
        filter_foods(&foods, &FilterCriteria::new().with_text("épin")).len(),
        1
    );
}

#[test]
fn category_filter_exact_match() {
    let foods = vec![avocado(), salmon(), spinach()];
    let result = filter_foods(&foods, &FilterCriteria::new().with_category("poissons"));
    assert_eq!(names(&result), vec!["Saumon"]);
}

#[test]
fn category_sentinel_matches_all() {
    let foods = vec![avocado(), salmon()];
    let result = filter_foods(&foods, &FilterCriteria::new().with_category(ALL));
    assert_eq!(result.len(), 2);
}

#[test]
fn unknown_category_matches_nothing() {
    let foods = vec![avocado(), salmon()];
    assert!(filter_foods(&foods, &FilterCriteria::new().with_category("desserts")).is_empty());
    assert!(filter_foods(&foods, &FilterCriteria::new().with_category("Fruits")).is_empty());
}

#[test]
fn property_sentinel_matches_all() {
    let foods = vec![avocado(), spinach()];
    let result = filter_foods(&foods, &FilterCriteria::new().with_property(ALL));
    assert_eq!(result.len(), 2);
}

#[test]
fn unknown_property_matches_nothing() {
    let foods = vec![avocado(), salmon(), spinach()];
    let result = filter_foods(&foods, &FilterCriteria::new().with_property("sans-gluten"));
    assert!(result.is_empty());
}

#[test]
fn nutrient_threshold_is_inclusive() {
    let foods = vec![salmon()];
    let criteria =
        FilterCriteria::new().with_nutrient(NutrientThreshold::new(nutrient::OMEGA_3, 2.3));
    assert_eq!(filter_foods(&foods, &criteria).len(), 1);
}

#[test]
fn missing_nutrient_excluded_by_positive_threshold() {
    let foods = vec![spinach()];
    let criteria =
        FilterCriteria::new().with_nutrient(NutrientThreshold::new(nutrient::OMEGA_3, 0.01));
    assert!(filter_foods(&foods, &criteria).is_empty());
}

#[test]
fn missing_nutrient_included_by_zero_threshold() {
    let foods = vec![spinach()];
    let zero = FilterCriteria::new().with_nutrient(NutrientThreshold::new(nutrient::OMEGA_3, 0.0));
    let negative =
        FilterCriteria::new().with_nutrient(NutrientThreshold::new(nutrient::OMEGA_3, -1.0));
    assert_eq!(filter_foods(&foods, &zero).len(), 1);
    assert_eq!(filter_foods(&foods, &negative).len(), 1);
}

#[test]
fn nutrient_threshold_reads_vitamins() {
    let foods = vec![avocado(), spinach()];
    let criteria =
        FilterCriteria::new().with_nutrient(NutrientThreshold::new(nutrient::VITAMINE_C, 20.0));
    assert_eq!(names(&filter_foods(&foods, &criteria)), vec!["Épinards"]);
}

#[test]
fn nan_threshold_matches_nothing() {
    let foods = vec![avocado(), salmon()];
    let criteria =
        FilterCriteria::new().with_nutrient(NutrientThreshold::new(nutrient::OMEGA_3, f64::NAN));
    assert!(filter_foods(&foods, &criteria).is_empty());
}

#[test]
fn constraints_are_conjunctive() {
    let foods = vec![avocado(), salmon(), spinach()];
    let criteria = FilterCriteria::new()
        .with_property("riche-omega3")
        .with_category("fruits");
    assert_eq!(names(&filter_foods(&foods, &criteria)), vec!["Avocat"]);

    let none = criteria.with_text("saumon");
    assert!(filter_foods(&foods, &none).is_empty());
}

#[test]
fn filter_does_not_mutate_input() {
    let foods = vec![avocado(), salmon()];
    let before = foods.clone();
    let _ = filter_foods(&foods, &FilterCriteria::new().with_text("sau"));
    assert_eq!(foods, before);
}

// ========================================
// FilterCriteria
// ========================================

#[test]
fn criteria_active_count_ignores_sentinels() {
    let criteria = FilterCriteria::new()
        .with_text("")
        .with_category(ALL)
        .with_property(ALL);
    assert_eq!(criteria.active_count(), 0);
    assert!(criteria.is_empty());
}

#[test]
fn criteria_active_count_counts_each_constraint() {
    let criteria = FilterCriteria::new()
        .with_text("a")
        .with_category("fruits")
        .with_property("antioxydant")
        .with_nutrient(NutrientThreshold::new(nutrient::PROTEINES, 15.0));
    assert_eq!(criteria.active_count(), 4);
    assert_eq!(criteria.category(), Some("fruits"));
    assert_eq!(criteria.nutrient().map(|n| n.min), Some(15.0));
}

// ========================================
// predicates
// ========================================

#[test]
fn matches_text_empty_query() {
    assert!(matches_text(&avocado(), ""));
}

#[test]
fn matches_text_lowercases_query() {
    assert!(matches_text(&salmon(), "SAU"));
    assert!(matches_text(&spinach(), "ÉPI"));
}

#[test]
fn contains_query_expects_lowercased_query() {
    assert!(contains_query(&salmon(), "sau"));
    assert!(!contains_query(&salmon(), "SAU"));
}

#[test]
fn filter_foods_lowercases_query_once_for_all_items() {
    let foods = vec![avocado(), salmon(), spinach()];
    let criteria = FilterCriteria::new().with_text("ÉPINARDS");
    assert_eq!(names(&filter_foods(&foods, &criteria)), vec!["Épinards"]);
}

#[test]
fn matches_category_none_passes() {
    assert!(matches_category(&salmon(), None));
}

#[test]
fn matches_property_membership() {
    assert!(matches_property(&avocado(), Some("anti-inflammatoire")));
    assert!(!matches_property(&salmon(), Some("anti-inflammatoire")));
}

#[test]
fn matches_nutrient_none_passes() {
    assert!(matches_nutrient(&spinach(), None));
}
