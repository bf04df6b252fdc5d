//! Output path composition and PGM serialization.

pub mod path;
pub mod pgm;
