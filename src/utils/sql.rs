/// SQL text-literal escaping for generated seed statements.
///
/// An absent value renders as the bare token `NULL`; a present value has
/// embedded single quotes doubled and is wrapped in single quotes. This is
/// the only escaping the seed file needs (it is consumed by a migration
/// runner, not built from untrusted input).
pub fn escape_sql_string(value: Option<&str>) -> String {
    match value {
        None => "NULL".to_string(),
        Some(s) => format!("'{}'", s.replace('\'', "''")),
    }
}
