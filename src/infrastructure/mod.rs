pub mod random;
pub mod transliteration;
pub mod util;
