//! Visibility module - branching over prior answers.

mod resolver;

pub use resolver::VisibilityResolver;
