use crate::error::{NutriError, Result};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 名前の最大長
const MAX_NAME_LENGTH: usize = 64;

/// 性別（推奨値の算出に使う）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Femme,
    Homme,
}

impl Sex {
    pub fn display_name(&self) -> &'static str {
        match self {
            Sex::Femme => "Femme",
            Sex::Homme => "Homme",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// 1日あたりの目標値
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goals {
    /// mg
    pub omega_3: f64,
    /// µg
    pub vitamine_d: f64,
    /// mg
    pub magnesium: f64,
    /// mg
    pub fer: f64,
}

impl Goals {
    /// (識別子, 値, 単位) の一覧（表示順）
    pub fn entries(&self) -> [(&'static str, f64, &'static str); 4] {
        [
            ("omega_3", self.omega_3, "mg"),
            ("vitamine_d", self.vitamine_d, "µg"),
            ("magnesium", self.magnesium, "mg"),
            ("fer", self.fer, "mg"),
        ]
    }

    fn validate(&self) -> Result<()> {
        for (id, value, _) in self.entries() {
            if !value.is_finite() || value < 0.0 {
                return Err(NutriError::Validation(format!(
                    "Goal '{}' must be a non-negative number, got {}",
                    id, value
                )));
            }
        }
        Ok(())
    }
}

/// 性別ごとの推奨値
pub fn recommended_for(sex: Sex) -> Goals {
    match sex {
        Sex::Femme => Goals {
            omega_3: 1000.0,
            vitamine_d: 10.0,
            magnesium: 360.0,
            fer: 16.0,
        },
        Sex::Homme => Goals {
            omega_3: 1300.0,
            vitamine_d: 10.0,
            magnesium: 400.0,
            fer: 9.0,
        },
    }
}

/// 表示上の達成率の上限（%）
pub const MAX_GOAL_PERCENT: f64 = 150.0;

/// 推奨値に対する目標値の帯
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalBand {
    /// 推奨値の 80% 未満
    Low,
    /// 80% 以上 100% 未満
    Below,
    /// 100% 以上 120% 以下
    Good,
    /// 120% 超
    High,
}

/// 推奨値に対する目標値の割合と帯
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalStatus {
    /// 推奨値比（%、上限 150）
    pub percent: f64,
    pub band: GoalBand,
}

/// 目標値を推奨値と比べる
///
/// 推奨値が 0 以下の場合、目標値が正なら High、それ以外は Good とする。
pub fn goal_status(goal: f64, recommended: f64) -> GoalStatus {
    if recommended.is_nan() || recommended <= 0.0 {
        let band = if goal > 0.0 {
            GoalBand::High
        } else {
            GoalBand::Good
        };
        let percent = if goal > 0.0 { MAX_GOAL_PERCENT } else { 100.0 };
        return GoalStatus { percent, band };
    }

    let ratio = goal / recommended;
    let band = if ratio < 0.8 {
        GoalBand::Low
    } else if ratio < 1.0 {
        GoalBand::Below
    } else if ratio <= 1.2 {
        GoalBand::Good
    } else {
        GoalBand::High
    };
    GoalStatus {
        percent: (ratio * 100.0).min(MAX_GOAL_PERCENT),
        band,
    }
}

/// 目標値の個別上書き（未指定は推奨値を使う）
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GoalOverrides {
    pub omega_3: Option<f64>,
    pub vitamine_d: Option<f64>,
    pub magnesium: Option<f64>,
    pub fer: Option<f64>,
}

impl GoalOverrides {
    pub fn apply(&self, base: Goals) -> Goals {
        Goals {
            omega_3: self.omega_3.unwrap_or(base.omega_3),
            vitamine_d: self.vitamine_d.unwrap_or(base.vitamine_d),
            magnesium: self.magnesium.unwrap_or(base.magnesium),
            fer: self.fer.unwrap_or(base.fer),
        }
    }
}

/// 栄養目標プロファイル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "sexe")]
    pub sex: Sex,
    pub poids_kg: f64,
    #[serde(rename = "objectifs_personnalises")]
    pub goals: Goals,
    #[serde(rename = "valeurs_recommandees")]
    pub recommended: Goals,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// プロファイル作成の入力
#[derive(Debug, Clone, PartialEq)]
pub struct NewProfile {
    pub name: String,
    pub sex: Sex,
    pub weight_kg: f64,
    pub overrides: GoalOverrides,
}

impl NewProfile {
    /// 入力を検証し、IDを割り当ててプロファイルを生成
    pub fn into_profile(self, id: String) -> Result<Profile> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(NutriError::Validation("Name cannot be empty".to_string()));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(NutriError::Validation(format!(
                "Name is too long (max {} characters)",
                MAX_NAME_LENGTH
            )));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(NutriError::Validation(format!(
                "Weight must be a positive number of kg, got {}",
                self.weight_kg
            )));
        }

        let recommended = recommended_for(self.sex);
        let goals = self.overrides.apply(recommended);
        goals.validate()?;

        Ok(Profile {
            id,
            name,
            sex: self.sex,
            poids_kg: self.weight_kg,
            goals,
            recommended,
            created_at: Some(Utc::now()),
        })
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
