use super::CatalogSource;
use crate::error::Result;
use crate::food::{nutrient, Category, Food, Season};

const IMAGE_BASE: &str = "https://images.unsplash.com";

/// 組み込みカタログ（バックエンド未接続時のサンプルデータ）
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn load(&self) -> Result<Vec<Food>> {
        Ok(builtin_foods())
    }

    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }
}

fn image(photo: &str) -> Option<String> {
    Some(format!(
        "{IMAGE_BASE}/{photo}?w=800&auto=format&fit=crop&q=60&ixlib=rb-4.0.3"
    ))
}

fn builtin_foods() -> Vec<Food> {
    let mut avocado = Food::new("1", "Avocat", Category::Fruits)
        .with_season(Season::Ete)
        .with_property("anti-inflammatoire")
        .with_property("riche-omega3")
        .with_nutrient(nutrient::PROTEINES, 2.0)
        .with_nutrient(nutrient::GLUCIDES, 9.0)
        .with_nutrient(nutrient::LIPIDES_TOTAUX, 15.0)
        .with_nutrient(nutrient::ACIDES_GRAS_SATURES, 2.1)
        .with_nutrient(nutrient::MONO_INSATURES, 9.8)
        .with_nutrient(nutrient::POLY_INSATURES, 1.8)
        .with_nutrient(nutrient::OMEGA_3, 0.1)
        .with_nutrient(nutrient::OMEGA_6, 1.7)
        .with_nutrient(nutrient::FIBRES, 7.0)
        .with_vitamin(nutrient::VITAMINE_C, 10.0)
        .with_vitamin("vitamine_b6", 0.2)
        .with_vitamin("vitamine_b9", 81.0)
        .with_vitamin("vitamine_e", 2.1)
        .with_vitamin("vitamine_k", 21.0)
        .with_mineral(nutrient::MAGNESIUM, 29.0)
        .with_mineral("potassium", 485.0)
        .with_mineral("zinc", 0.6)
        .with_mineral(nutrient::FER, 0.6)
        .with_mineral("cuivre", 0.2)
        .with_description(
            "L'avocat est un fruit riche en graisses monoinsaturées bénéfiques pour la santé \
             cardiovasculaire. Sa teneur élevée en potassium, fibres et antioxydants en fait un \
             aliment de choix pour réduire l'inflammation et soutenir la santé métabolique.",
        );
    avocado.bioactives = vec![
        "catéchines".to_string(),
        "flavonoïdes".to_string(),
        "anthocyanes".to_string(),
    ];
    avocado.image_url = image("photo-1551460226-a5b8c49a8709");

    let mut salmon = Food::new("2", "Saumon", Category::Poissons)
        .with_property("riche-omega3")
        .with_property("riche-vitamine-d")
        .with_nutrient(nutrient::PROTEINES, 20.0)
        .with_nutrient(nutrient::GLUCIDES, 0.0)
        .with_nutrient(nutrient::LIPIDES_TOTAUX, 13.0)
        .with_nutrient(nutrient::OMEGA_3, 2.3)
        .with_vitamin(nutrient::VITAMINE_C, 0.0)
        .with_mineral(nutrient::MAGNESIUM, 29.0);
    salmon.image_url = image("photo-1519708227418-c8fd9a32b7a2");

    let mut walnut = Food::new("3", "Noix", Category::Oleagineux)
        .with_season(Season::Automne)
        .with_property("anti-inflammatoire")
        .with_property("antioxydant")
        .with_nutrient(nutrient::PROTEINES, 15.0)
        .with_nutrient(nutrient::GLUCIDES, 14.0)
        .with_nutrient(nutrient::LIPIDES_TOTAUX, 65.0)
        .with_nutrient(nutrient::OMEGA_3, 9.0)
        .with_vitamin(nutrient::VITAMINE_C, 1.3)
        .with_mineral(nutrient::MAGNESIUM, 158.0);
    walnut.image_url = image("photo-1611070950847-18a1aace3a7a");

    let mut spinach = Food::new("4", "Épinards", Category::Legumes)
        .with_season(Season::Printemps)
        .with_property("riche-fer")
        .with_property("antioxydant")
        .with_nutrient(nutrient::PROTEINES, 2.9)
        .with_nutrient(nutrient::GLUCIDES, 3.6)
        .with_nutrient(nutrient::LIPIDES_TOTAUX, 0.4)
        .with_nutrient(nutrient::OMEGA_3, 0.1)
        .with_vitamin(nutrient::VITAMINE_C, 28.0)
        .with_mineral(nutrient::MAGNESIUM, 79.0);
    spinach.image_url = image("photo-1576045057995-568f588f82fb");

    let mut blueberry = Food::new("5", "Myrtilles", Category::Fruits)
        .with_season(Season::Ete)
        .with_property("antioxydant")
        .with_property("neuroprotecteur");
    blueberry.image_url = image("photo-1498557850523-fd3d118b962e");

    let mut olive_oil = Food::new("6", "Huile d'olive", Category::Huiles)
        .with_property("anti-inflammatoire")
        .with_property("cardioprotecteur");
    olive_oil.image_url = image("photo-1474979266404-7eaacbcd87c5");

    vec![avocado, salmon, walnut, spinach, blueberry, olive_oil]
}
