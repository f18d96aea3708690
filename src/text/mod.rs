pub(crate) mod font;
pub(crate) mod layout;

pub use font::FontId;
