pub trait Identifiable {
    fn identifier(&self) -> &str;
}
