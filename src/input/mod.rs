//! Input adapters: receive platform input and translate it into controller events.

pub mod gui;
