//! 栄養バランスの算出
//!
//! 食品詳細画面で表示する比率（主要栄養素・脂質内訳・オメガ6:3）を計算する。

use super::{nutrient, Food};
use serde::Serialize;

/// オメガ6:3比の理想上限
pub const IDEAL_OMEGA_RATIO: f64 = 4.0;

/// 主要栄養素の割合（%）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroSplit {
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// 総脂質に対する脂肪酸の割合（%）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LipidSplit {
    pub saturated: f64,
    pub mono: f64,
    pub poly: f64,
}

/// オメガ3・オメガ6 の合計に対する割合（%）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OmegaSplit {
    pub omega_3: f64,
    pub omega_6: f64,
}

/// たんぱく質・炭水化物・脂質の合計に対する割合
///
/// 合計が 0 の場合はすべて 0。
pub fn macro_split(food: &Food) -> MacroSplit {
    let proteins = food.nutrient(nutrient::PROTEINES);
    let carbs = food.nutrient(nutrient::GLUCIDES);
    let fats = food.nutrient(nutrient::LIPIDES_TOTAUX);
    let total = proteins + carbs + fats;

    if total <= 0.0 {
        return MacroSplit {
            proteins: 0.0,
            carbs: 0.0,
            fats: 0.0,
        };
    }

    MacroSplit {
        proteins: proteins / total * 100.0,
        carbs: carbs / total * 100.0,
        fats: fats / total * 100.0,
    }
}

/// 総脂質に対する飽和・一価不飽和・多価不飽和の割合
pub fn lipid_split(food: &Food) -> Option<LipidSplit> {
    let total = food.nutrient(nutrient::LIPIDES_TOTAUX);
    if total <= 0.0 {
        return None;
    }

    Some(LipidSplit {
        saturated: food.nutrient(nutrient::ACIDES_GRAS_SATURES) / total * 100.0,
        mono: food.nutrient(nutrient::MONO_INSATURES) / total * 100.0,
        poly: food.nutrient(nutrient::POLY_INSATURES) / total * 100.0,
    })
}

/// オメガ3とオメガ6の合計に対する各割合（合計が 0 なら None）
pub fn omega_split(food: &Food) -> Option<OmegaSplit> {
    let omega_3 = food.nutrient(nutrient::OMEGA_3);
    let omega_6 = food.nutrient(nutrient::OMEGA_6);
    let total = omega_3 + omega_6;
    if total <= 0.0 {
        return None;
    }

    Some(OmegaSplit {
        omega_3: omega_3 / total * 100.0,
        omega_6: omega_6 / total * 100.0,
    })
}

/// オメガ6:オメガ3 比（オメガ3 が 0 なら None）
pub fn omega_ratio(food: &Food) -> Option<f64> {
    let omega_3 = food.nutrient(nutrient::OMEGA_3);
    if omega_3 <= 0.0 {
        return None;
    }
    Some(food.nutrient(nutrient::OMEGA_6) / omega_3)
}

pub fn is_ideal_ratio(ratio: f64) -> bool {
    ratio <= IDEAL_OMEGA_RATIO
}

#[cfg(test)]
#[path = "analysis_test.rs"]
mod tests;
