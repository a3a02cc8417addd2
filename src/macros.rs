/// Moves a `Cursor` to the next field or returns `ParseError::Incomplete`
/// naming the field that was expected.
///
/// Evaluates to the advanced cursor, so it works for owned cursors
/// (`cursor = next_field!(cursor, "time")`) as well as borrowed ones
/// (`*cursor = next_field!(cursor, "latitude")`).
macro_rules! next_field {
    ($cursor:expr, $name:expr) => {
        match $cursor.advance() {
            Some(next) => next,
            None => return Err(ParseError::Incomplete($name)),
        }
    };
}

/// Advances a cursor `$n` times, landing on the `$n`th field after the
/// current one.
macro_rules! advance_fields {
    ($cursor:ident, $n:expr, $name:expr) => {
        for _ in 0..$n {
            $cursor = next_field!($cursor, $name);
        }
    };
}
