pub mod navigation;
pub mod theme_toggle;
pub mod toast;
