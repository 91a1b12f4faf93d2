use crate::core::list::{HEAD, List};
use rand::Rng;

/// Fisher-Yates shuffle over the payloads of `list`.
///
/// Walks from the last position back to the second; each step swaps the
/// current payload with one picked uniformly from the positions not yet
/// fixed (itself included). Nodes stay where they are.
pub(crate) fn shuffle<T, R: Rng + ?Sized>(list: &mut List<T>, rng: &mut R) {
    let mut remaining = list.len();
    let mut current = list.prev(HEAD);
    while remaining > 1 {
        let pick = rng.random_range(0..remaining);
        let mut other = list.next(HEAD);
        for _ in 0..pick {
            other = list.next(other);
        }

        list.swap_values(current, other);
        current = list.prev(current);
        remaining -= 1;
    }
}
