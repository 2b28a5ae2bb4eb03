use super::*;
use crate::food::{nutrient, Category};
use proptest::prelude::*;

/// 食品名に使う文字列（アクセント付き文字を含む）
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-ZéÉèô' ]{1,12}"
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::all().to_vec())
}

fn property_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "anti-inflammatoire",
        "riche-omega3",
        "antioxydant",
        "riche-fer",
        "inconnu",
    ])
    .prop_map(|s| s.to_string())
}

fn nutrient_id_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        nutrient::PROTEINES,
        nutrient::OMEGA_3,
        nutrient::VITAMINE_C,
        nutrient::MAGNESIUM,
    ])
}

fn food_strategy() -> impl Strategy<Value = Food> {
    (
        name_strategy(),
        category_strategy(),
        prop::collection::vec(property_strategy(), 0..3),
        prop::collection::vec((nutrient_id_strategy(), 0.0f64..200.0), 0..4),
    )
        .prop_map(|(name, category, properties, nutrients)| {
            let mut food = Food::new("", name, category);
            for tag in properties {
                food.add_property(tag);
            }
            for (id, amount) in nutrients {
                food.nutrients.insert(id.to_string(), amount);
            }
            food
        })
}

/// 識別子が一意な食品一覧
fn foods_strategy() -> impl Strategy<Value = Vec<Food>> {
    prop::collection::vec(food_strategy(), 0..12).prop_map(|foods| {
        foods
            .into_iter()
            .enumerate()
            .map(|(i, mut f)| {
                f.id = i.to_string();
                f
            })
            .collect()
    })
}

fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::option::of("[a-zé]{0,3}"),
        prop::option::of(prop::sample::select(vec![
            "fruits", "poissons", "legumes", ALL, "desserts",
        ])),
        prop::option::of(property_strategy()),
        prop::option::of((nutrient_id_strategy(), -1.0f64..150.0)),
    )
        .prop_map(|(text, category, property, nutrient)| {
            let mut criteria = FilterCriteria::new();
            if let Some(text) = text {
                criteria = criteria.with_text(text);
            }
            if let Some(category) = category {
                criteria = criteria.with_category(category);
            }
            if let Some(property) = property {
                criteria = criteria.with_property(property);
            }
            if let Some((id, min)) = nutrient {
                criteria = criteria.with_nutrient(NutrientThreshold::new(id, min));
            }
            criteria
        })
}

fn ids(foods: &[&Food]) -> Vec<String> {
    foods.iter().map(|f| f.id.clone()).collect()
}

proptest! {
    /// 条件なしなら全件が元の順序で返る
    #[test]
    fn prop_empty_criteria_returns_all(foods in foods_strategy()) {
        let result = filter_foods(&foods, &FilterCriteria::new());
        let expected: Vec<&Food> = foods.iter().collect();
        prop_assert_eq!(result, expected);
    }

    /// 結果は入力の部分集合で、重複を含まない
    #[test]
    fn prop_result_is_subset_without_duplicates(
        foods in foods_strategy(),
        criteria in criteria_strategy()
    ) {
        let result = ids(&filter_foods(&foods, &criteria));
        let mut seen = std::collections::HashSet::new();
        for id in &result {
            prop_assert!(foods.iter().any(|f| &f.id == id));
            prop_assert!(seen.insert(id.clone()));
        }
    }

    /// 同じ条件で2回絞り込んでも結果は変わらない
    #[test]
    fn prop_filter_is_idempotent(
        foods in foods_strategy(),
        criteria in criteria_strategy()
    ) {
        let once: Vec<Food> = filter_foods(&foods, &criteria).into_iter().cloned().collect();
        let twice: Vec<Food> = filter_foods(&once, &criteria).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    /// 条件を1つ追加しても結果件数は増えない
    #[test]
    fn prop_adding_constraint_never_grows_result(
        foods in foods_strategy(),
        criteria in criteria_strategy(),
        property in property_strategy(),
        nutrient_id in nutrient_id_strategy(),
        min in 0.0f64..100.0
    ) {
        let base = filter_foods(&foods, &criteria).len();

        if criteria.property().is_none() {
            let extended = criteria.clone().with_property(property);
            prop_assert!(filter_foods(&foods, &extended).len() <= base);
        }
        if criteria.nutrient().is_none() {
            let extended = criteria.clone().with_nutrient(NutrientThreshold::new(nutrient_id, min));
            prop_assert!(filter_foods(&foods, &extended).len() <= base);
        }
    }

    /// 一致した食品の相対順は入力と同じ
    #[test]
    fn prop_order_is_preserved(
        foods in foods_strategy(),
        criteria in criteria_strategy()
    ) {
        let result = filter_foods(&foods, &criteria);
        let positions: Vec<usize> = result
            .iter()
            .map(|r| foods.iter().position(|f| f.id == r.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// 名前検索は大文字小文字を区別しない
    #[test]
    fn prop_text_is_case_insensitive(
        foods in foods_strategy(),
        text in "[a-zA-Z]{1,4}"
    ) {
        let upper = filter_foods(&foods, &FilterCriteria::new().with_text(text.to_uppercase()));
        let lower = filter_foods(&foods, &FilterCriteria::new().with_text(text.to_lowercase()));
        prop_assert_eq!(ids(&upper), ids(&lower));
    }

    /// 栄養素キーが欠けている食品は、正の下限で除外され 0 以下の下限で残る
    #[test]
    fn prop_missing_nutrient_counts_as_zero(
        name in name_strategy(),
        category in category_strategy(),
        min in -100.0f64..100.0
    ) {
        let foods = vec![Food::new("0", name, category)];
        let criteria = FilterCriteria::new()
            .with_nutrient(NutrientThreshold::new(nutrient::OMEGA_3, min));
        let matched = filter_foods(&foods, &criteria).len() == 1;
        prop_assert_eq!(matched, min <= 0.0);
    }
}
