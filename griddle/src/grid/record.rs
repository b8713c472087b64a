/// A dataset row. Implementors expose a stable unique identifier and
/// field access by column id; the grid never inspects rows any other way
/// and never mutates them.
///
/// Validation belongs where the dataset is built, not here: the grid
/// assumes `id` values are unique and treats a `None`/empty field the
/// same (placeholder display, no filter match).
pub trait Record: Clone + Send + Sync + 'static {
    /// Stable unique identifier, used for keying and mutation targeting
    /// by the owner.
    fn id(&self) -> String;

    /// The stringified value of one field, by column id.
    fn field(&self, key: &str) -> Option<String>;
}
