pub mod escape_hue;
pub mod interior_glow;
