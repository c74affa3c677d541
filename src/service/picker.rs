use rand::Rng;

/// Chooses which of several matching readings is returned.
pub trait ReadingPicker: Send + Sync {
    /// Returns an index in `0..candidates`. Only called with `candidates > 0`.
    fn pick(&self, candidates: usize) -> usize;
}

/// Uniform choice backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl ReadingPicker for ThreadRngPicker {
    fn pick(&self, candidates: usize) -> usize {
        rand::rng().random_range(0..candidates)
    }
}

/// Take one element chosen by `picker`, or `None` when there is nothing to choose.
pub fn choose<T>(picker: &dyn ReadingPicker, mut candidates: Vec<T>) -> Option<T> {
    if candidates.is_empty() {
        return None;
    }
    let last = candidates.len() - 1;
    let idx = picker.pick(candidates.len()).min(last);
    Some(candidates.swap_remove(idx))
}
