pub mod specification;
