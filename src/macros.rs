/// Builds a `Vec<Span>` from range expressions, one per axis.
///
/// # Examples
///
/// ```
/// use ndboard::prelude::*;
/// use ndboard::spans;
///
/// let b: Board<i32> = Board::new(&[Finite(4), Finite(4)]).unwrap();
/// let view = b.slice(&spans![1.., 1..3]).unwrap();
/// assert_eq!(view.dims(), &[Dim::Finite(3), Dim::Finite(2)]);
/// ```
#[macro_export]
macro_rules! spans {
    ($($range:expr),+ $(,)?) => {
        vec![$($crate::span::Span::from($range)),+]
    };
}
