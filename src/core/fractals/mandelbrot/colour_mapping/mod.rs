pub mod factory;
pub mod hsv;
pub mod kinds;
pub mod maps;
