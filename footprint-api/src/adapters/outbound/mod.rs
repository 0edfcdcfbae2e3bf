pub mod memory;
pub mod rules;
