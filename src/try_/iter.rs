//! Iteration over the zero-or-one success value of a [`Try`].

use crate::types::Captured;

use super::Try;

impl<T> Try<T> {
    /// Returns an iterator yielding the success value, if any.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.value(),
        }
    }

    /// Returns a mutable iterator yielding the success value, if any.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: match self {
                Try::Success(value) => Some(value),
                Try::Failure(_) => None,
            },
        }
    }
}

/// Borrowing iterator over a [`Try`], yielding zero or one item.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> core::iter::FusedIterator for Iter<'_, T> {}

/// Mutably borrowing iterator over a [`Try`], yielding zero or one item.
#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: Option<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> core::iter::FusedIterator for IterMut<'_, T> {}

/// Owning iterator over a [`Try`], yielding zero or one item.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> core::iter::FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Try<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_value(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Try<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Try<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Collects an iterator of `Try<T>` into `Try<V>`, short-circuiting on the
/// first `Failure`. Elements after the failing one are not consumed.
///
/// # Examples
///
/// ```
/// use try_rail::Try;
///
/// let parsed: Try<Vec<i32>> = ["1", "2", "3"]
///     .iter()
///     .map(|s| Try::of(|| s.parse::<i32>()))
///     .collect();
/// assert_eq!(parsed.into_value(), Some(vec![1, 2, 3]));
/// ```
impl<T, V> FromIterator<Try<T>> for Try<V>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Try<T>>>(iter: I) -> Self {
        let collected: Result<V, Captured> = iter.into_iter().map(Try::into_result).collect();
        Try::from_result(collected)
    }
}
