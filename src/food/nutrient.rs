//! 栄養素識別子
//!
//! 値はすべて可食部100gあたり。

pub const PROTEINES: &str = "proteines";
pub const GLUCIDES: &str = "glucides";
pub const LIPIDES_TOTAUX: &str = "lipides_totaux";
pub const ACIDES_GRAS_SATURES: &str = "acides_gras_satures";
pub const MONO_INSATURES: &str = "mono_insatures";
pub const POLY_INSATURES: &str = "poly_insatures";
pub const OMEGA_3: &str = "omega_3";
pub const OMEGA_6: &str = "omega_6";
pub const FIBRES: &str = "fibres";
pub const VITAMINE_C: &str = "vitamine_c";
pub const VITAMINE_D: &str = "vitamine_d";
pub const MAGNESIUM: &str = "magnesium";
pub const FER: &str = "fer";
