pub mod reference_resolver;
pub mod uniqueness_guard;
