pub mod sql;

pub use sql::escape_like_pattern;
