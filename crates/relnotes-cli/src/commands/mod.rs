pub mod custom_fields;
pub mod generate;
pub mod progress;
pub mod teams;
