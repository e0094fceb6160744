pub mod console;
pub mod process;
