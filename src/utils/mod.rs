pub mod sql;

pub use sql::escape_sql_string;
