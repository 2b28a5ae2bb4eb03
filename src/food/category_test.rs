use super::*;

#[test]
fn test_category_as_str() {
    assert_eq!(Category::Fruits.as_str(), "fruits");
    assert_eq!(Category::Oleagineux.as_str(), "oleagineux");
    assert_eq!(Category::Huiles.as_str(), "huiles");
}

#[test]
fn test_category_from_id_roundtrip() {
    for category in Category::all() {
        assert_eq!(Category::from_id(category.as_str()), Some(*category));
    }
}

#[test]
fn test_category_from_id_unknown() {
    assert_eq!(Category::from_id("tous"), None);
    assert_eq!(Category::from_id("Fruits"), None);
    assert_eq!(Category::from_id(""), None);
}

#[test]
fn test_category_all_unique() {
    let all = Category::all();
    let mut seen = std::collections::HashSet::new();
    for category in all {
        assert!(seen.insert(category), "Duplicate Category found: {:?}", category);
    }
    assert_eq!(all.len(), 7);
}

#[test]
fn test_category_serde_lowercase() {
    let json = serde_json::to_string(&Category::Poissons).unwrap();
    assert_eq!(json, "\"poissons\"");
    let parsed: Category = serde_json::from_str("\"cereales\"").unwrap();
    assert_eq!(parsed, Category::Cereales);
}

#[test]
fn test_category_serde_rejects_unknown() {
    let parsed: Result<Category, _> = serde_json::from_str("\"desserts\"");
    assert!(parsed.is_err());
}
