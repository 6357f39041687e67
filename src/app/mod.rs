pub mod console;
pub mod screens;
