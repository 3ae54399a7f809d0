//! Left-to-right function application.

/// Returns its argument unchanged.
pub fn identity<T>(value: T) -> T {
    value
}

/// Feeds `self` into a function, so calls read left to right.
///
/// ```
/// use sovran_typedict::Pipe;
///
/// let len = "hello".pipe(str::len).pipe(|n| n * 2);
/// assert_eq!(len, 10);
/// ```
pub trait Pipe: Sized {
    /// Calls `f` with `self` and returns its result.
    fn pipe<R>(self, f: impl FnOnce(Self) -> R) -> R {
        f(self)
    }
}

impl<T> Pipe for T {}

/// Piping through an optional value: a missing value skips the function.
///
/// ```
/// use sovran_typedict::PipeOption;
///
/// #[derive(Debug, PartialEq)]
/// enum Kind { Foo, Bar }
///
/// fn parse_kind(n: i64) -> Option<Kind> {
///     match n {
///         1 => Some(Kind::Foo),
///         2 => Some(Kind::Bar),
///         _ => None,
///     }
/// }
///
/// let raw: Option<&str> = Some("100");
/// let kind = raw
///     .pipe_some(|s| s.parse::<i64>().ok())
///     .pipe_some(parse_kind)
///     .unwrap_or(Kind::Foo);
/// assert_eq!(kind, Kind::Foo);
///
/// let raw: Option<&str> = Some("2");
/// let kind = raw.pipe_some(|s| s.parse::<i64>().ok()).pipe_some(parse_kind);
/// assert_eq!(kind, Some(Kind::Bar));
/// ```
pub trait PipeOption<T> {
    /// Applies `f` when a value is present.
    fn pipe_some<U>(self, f: impl FnOnce(T) -> Option<U>) -> Option<U>;

    /// Applies a fallible `f` when a value is present.
    ///
    /// A missing value is `Ok(None)`; an error from `f` is returned as is.
    fn try_pipe<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Option<U>, E>;
}

impl<T> PipeOption<T> for Option<T> {
    fn pipe_some<U>(self, f: impl FnOnce(T) -> Option<U>) -> Option<U> {
        let value = self?;
        f(value)
    }

    fn try_pipe<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Option<U>, E> {
        match self {
            Some(value) => f(value).map(Some),
            None => Ok(None),
        }
    }
}
