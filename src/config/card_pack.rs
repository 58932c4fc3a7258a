/// Nyancard pack configuration.
/// 
/// Draw weights are percentages and must sum to 100.
pub const HOLOGRAPHIC_WEIGHT: u32 = 1;
pub const ULTRA_RARE_WEIGHT: u32 = 4;
pub const SUPER_RARE_WEIGHT: u32 = 10;
pub const RARE_WEIGHT: u32 = 25;
pub const COMMON_WEIGHT: u32 = 60;
