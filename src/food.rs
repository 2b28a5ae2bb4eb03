//! 食品モデル
//!
//! カタログの1エントリ（食品）と、その分類・季節・栄養素識別子を定義する。

pub mod analysis;
mod category;
mod model;
pub mod nutrient;
mod season;

pub use category::Category;
pub use model::Food;
pub use season::Season;
