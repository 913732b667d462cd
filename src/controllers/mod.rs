pub mod cli;
pub mod interaction;
pub mod interactive;
pub mod ports;
