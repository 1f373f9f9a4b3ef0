pub mod backends;
pub mod cli;
pub mod color;
pub mod generate;
pub mod pipeline;
pub mod swatch;
pub mod theme;
