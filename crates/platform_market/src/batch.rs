//! Batch evaluation over date arrays.

use crate::error::MarketDataError;

/// Minimum batch size evaluated on the rayon pool when the `parallel`
/// feature is enabled. Smaller batches are cheaper to run inline.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Applies `f` to every item, failing on the first error.
///
/// Results keep the input order.
pub(crate) fn evaluate<I, T, F>(items: &[I], f: F) -> Result<Vec<T>, MarketDataError>
where
    I: Copy + Send + Sync,
    T: Send,
    F: Fn(I) -> Result<T, MarketDataError> + Send + Sync,
{
    #[cfg(feature = "parallel")]
    if items.len() >= PARALLEL_THRESHOLD {
        use rayon::prelude::*;
        return items.par_iter().map(|&item| f(item)).collect();
    }

    items.iter().map(|&item| f(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_order() {
        let items: Vec<u32> = (0..10).collect();
        let out = evaluate(&items, |i| Ok(i * 2)).unwrap();
        assert_eq!(out, (0..10).map(|i| i * 2).collect::<Vec<_>>());
    }

    #[test]
    fn test_large_batch_matches_sequential() {
        let items: Vec<u64> = (0..(PARALLEL_THRESHOLD as u64 * 2)).collect();
        let out = evaluate(&items, |i| Ok(i + 1)).unwrap();
        assert_eq!(out.len(), items.len());
        assert!(out.iter().zip(&items).all(|(o, i)| *o == i + 1));
    }

    #[test]
    fn test_error_propagates() {
        let result = evaluate(&[1, 2, 3], |i| {
            if i == 2 {
                Err(MarketDataError::Inconsistent("two".to_string()))
            } else {
                Ok(i)
            }
        });
        assert!(matches!(result, Err(MarketDataError::Inconsistent(_))));
    }
}
