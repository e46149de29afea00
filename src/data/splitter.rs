// ============================================================
// Layer 4 — Train/Validation Splitter
// ============================================================
// Shuffles rows and splits them into two sets:
//   - Training set:   what a classifier learns from
//   - Validation set: held-out rows for measuring generalisation
//
// Why shuffle before splitting?
//   Dialogue files are usually in script order, so whole scenes
//   (and often whole speakers) sit next to each other. Without a
//   shuffle the validation set would only contain the last scene.
//
// The shuffle is seeded, so the same corpus + seed always gives
// the same split. Uses Fisher-Yates via rand::seq::SliceRandom.
//
// Reference: rand crate documentation

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffle `rows` with a seeded RNG and split into (train, validation).
///
/// # Arguments
/// * `rows`           - All rows (consumed by this function)
/// * `train_fraction` - Proportion for training, e.g. 0.8 = 80%
/// * `seed`           - RNG seed; equal seeds give equal splits
///
/// # Example
/// ```
/// use dialogue_vectorizer::data::splitter::split_train_val;
///
/// let (train, val) = split_train_val((0..10).collect::<Vec<_>>(), 0.8, 7);
/// assert_eq!((train.len(), val.len()), (8, 2));
/// ```
pub fn split_train_val<T>(mut rows: Vec<T>, train_fraction: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    let mut rng = StdRng::seed_from_u64(seed);
    rows.shuffle(&mut rng);

    // Clamp to valid range to avoid panics on tiny datasets
    let total    = rows.len();
    let split_at = ((total as f64) * train_fraction.clamp(0.0, 1.0)).round() as usize;
    let split_at = split_at.min(total);

    // After this: rows = [0..split_at], val = [split_at..total]
    let val = rows.split_off(split_at);

    tracing::debug!(
        "Row split: {} training, {} validation (seed {})",
        rows.len(),
        val.len(),
        seed,
    );

    (rows, val)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_split_sizes() {
        let items: Vec<usize> = (0..100).collect();
        let (train, val)      = split_train_val(items, 0.8, 1);
        assert_eq!(train.len(), 80);
        assert_eq!(val.len(),   20);
    }

    #[test]
    fn test_all_items_preserved() {
        let items: Vec<usize>  = (0..50).collect();
        let (train, val)       = split_train_val(items, 0.7, 1);
        let mut all: Vec<usize> = train.into_iter().chain(val).collect();
        all.sort_unstable();
        assert_eq!(all, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_split() {
        let a = split_train_val((0..30).collect::<Vec<usize>>(), 0.5, 42);
        let b = split_train_val((0..30).collect::<Vec<usize>>(), 0.5, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_dataset() {
        let items: Vec<usize> = Vec::new();
        let (train, val)      = split_train_val(items, 0.8, 1);
        assert!(train.is_empty());
        assert!(val.is_empty());
    }

    #[test]
    fn test_full_training_split() {
        let items: Vec<usize> = (0..10).collect();
        let (train, val)      = split_train_val(items, 1.0, 1);
        assert_eq!(train.len(), 10);
        assert!(val.is_empty());
    }
}
