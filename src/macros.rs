/// Compile a literal regex once and hand out a `&'static Regex`.
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Fold `Result<T, Infallible>` into `T`.
macro_rules! infallible {
    ($res:expr) => {
        match $res {
            Ok(value) => value,
            Err(never) => match never {},
        }
    };
}
