//! Broadcasting of one-dimensional batches.
//!
//! Curve and market data queries take batches of dates. Two batches can be
//! combined element-wise when their lengths are equal, or when one of them
//! holds a single element, which is then repeated.
//!
//! ```
//! use platform_core::math::broadcast::{broadcast_len, broadcast_pairs};
//!
//! assert_eq!(broadcast_len(1, 4).unwrap(), 4);
//! assert!(broadcast_len(2, 3).is_err());
//!
//! let pairs: Vec<(i32, char)> = broadcast_pairs(&[1], &['a', 'b']).unwrap().collect();
//! assert_eq!(pairs, vec![(1, 'a'), (1, 'b')]);
//! ```

use crate::types::ShapeError;

/// Length of the broadcast of two batches.
pub fn broadcast_len(left: usize, right: usize) -> Result<usize, ShapeError> {
    match (left, right) {
        (l, r) if l == r => Ok(l),
        (1, r) => Ok(r),
        (l, 1) => Ok(l),
        (l, r) => Err(ShapeError::Incompatible { left: l, right: r }),
    }
}

/// Element pairs of two broadcast-compatible batches.
pub fn broadcast_pairs<'a, A: Copy, B: Copy>(
    left: &'a [A],
    right: &'a [B],
) -> Result<impl ExactSizeIterator<Item = (A, B)> + 'a, ShapeError> {
    let len = broadcast_len(left.len(), right.len())?;
    let pick = |n: usize, i: usize| if n == 1 { 0 } else { i };
    Ok((0..len).map(move |i| (left[pick(left.len(), i)], right[pick(right.len(), i)])))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_lengths() {
        assert_eq!(broadcast_len(3, 3).unwrap(), 3);
        let pairs: Vec<_> = broadcast_pairs(&[1, 2], &[3, 4]).unwrap().collect();
        assert_eq!(pairs, vec![(1, 3), (2, 4)]);
    }

    #[test]
    fn test_scalar_on_right() {
        let pairs: Vec<_> = broadcast_pairs(&[1, 2, 3], &[9]).unwrap().collect();
        assert_eq!(pairs, vec![(1, 9), (2, 9), (3, 9)]);
    }

    #[test]
    fn test_empty_against_scalar() {
        assert_eq!(broadcast_len(0, 1).unwrap(), 0);
        assert!(broadcast_pairs::<i32, i32>(&[], &[1]).unwrap().next().is_none());
    }

    #[test]
    fn test_incompatible() {
        match broadcast_pairs(&[1, 2], &[1, 2, 3]) {
            Err(ShapeError::Incompatible { left, right }) => assert_eq!((left, right), (2, 3)),
            Ok(_) => panic!("Expected Incompatible error"),
        }
    }
}
