use std::borrow::Cow;

/// Id of the table every chain ends at.
pub const ROOT_LOCALE: &str = "root";

/// Normalise separators to the `_` form the data files use (`sr-Latn` ->
/// `sr_Latn`). Subtag case is left alone; ids are matched verbatim after this.
#[inline]
pub fn canonicalize_locale_id(id: &str) -> Cow<'_, str> {
    let id = id.trim();
    if id.contains('-') {
        Cow::Owned(id.replace('-', "_"))
    } else {
        Cow::Borrowed(id)
    }
}
