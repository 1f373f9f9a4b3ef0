pub mod parse;
pub mod shades;
