// src/application/ports/util.rs
/// Turns a display title into a base slug. Must be pure and deterministic.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
