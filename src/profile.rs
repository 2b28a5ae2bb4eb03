//! 栄養目標プロファイル
//!
//! 利用者ごとの性別・体重・目標値を管理し、`profiles.json` に永続化する。

mod model;
mod registry;

pub use model::{
    goal_status, recommended_for, GoalBand, GoalOverrides, GoalStatus, Goals, NewProfile, Profile,
    Sex,
};
pub use registry::{ProfileRegistry, RemoveResult};
