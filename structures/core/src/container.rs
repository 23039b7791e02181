pub trait Container {
    /// Return the number of stored elements
    fn len(&self) -> usize;

    /// Return true if nothing is stored
    fn is_empty(&self) -> bool;
}
