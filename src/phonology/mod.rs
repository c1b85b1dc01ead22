//! Rules, phoneme categories, and the expansion/application engine

pub mod apply;
pub mod category;
pub mod expand;
pub mod rule;

pub use apply::{apply, apply_all};
pub use category::{load_category_table, Category, CategoryResolver, CategoryTable};
pub use expand::{expand, expand_all};
pub use rule::Rule;
