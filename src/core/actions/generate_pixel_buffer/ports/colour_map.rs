use crate::core::data::colour::Colour;

/// Turns a per-pixel algorithm result into a colour.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Colour;

    fn display_name(&self) -> &str;
}
