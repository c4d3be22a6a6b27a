//! Design tokens shared by every screen.
//!
//! Plain CSS values consumed through inline `style` attributes.

pub mod color {
    pub const BACKGROUND: &str = "#f7f6f3";
    pub const SURFACE: &str = "#ffffff";
    pub const BORDER: &str = "#e3e2e0";
    pub const PRIMARY: &str = "#2383e2";
    pub const ON_PRIMARY: &str = "#ffffff";
    pub const TEXT_PRIMARY: &str = "#37352f";
    pub const TEXT_SECONDARY: &str = "#787774";
}

pub mod spacing {
    pub const XS: &str = "0.25rem";
    pub const MD: &str = "0.75rem";
    pub const LG: &str = "1.5rem";
}

pub mod font {
    pub const SIZE_MD: &str = "0.9375rem";
    pub const SIZE_LG: &str = "1.125rem";
    pub const WEIGHT_SEMIBOLD: &str = "600";
}
