//! The alignment pass
//!
//! Data flows one way: strings → per-string count vectors → global maximum
//! vector → per-string padding amounts → padded strings. Count and maximum
//! vectors are plain `Vec<usize>` indexed by the configuration's rule
//! order, so the key set is fixed up front and no by-key accumulation
//! happens during the pass.

use super::config::PaddingConfig;

/// Tally one string's characters per category, indexed by configuration
/// rule order. Iteration is by Unicode scalar value, so supplementary-plane
/// characters count as one unit.
fn count_categories(config: &PaddingConfig, input: &str) -> Vec<usize> {
    let mut counts = vec![0usize; config.len()];
    for c in input.chars() {
        counts[config.classify_index(c)] += 1;
    }
    counts
}

/// Element-wise maximum across all count vectors.
fn max_counts(config: &PaddingConfig, counts: &[Vec<usize>]) -> Vec<usize> {
    let mut maxima = vec![0usize; config.len()];
    for vector in counts {
        for (max, count) in maxima.iter_mut().zip(vector) {
            *max = (*max).max(*count);
        }
    }
    maxima
}

/// Right-pad every string to the per-category maxima of the whole list.
///
/// Output order matches input order and every output starts with its input
/// unchanged; padding is strictly appended, one placeholder per missing
/// character, category by category in configuration order. Strings already
/// at every maximum come back with nothing appended. Pure: no I/O, no
/// mutation of the inputs.
pub fn align<S: AsRef<str>>(strings: &[S], config: &PaddingConfig) -> Vec<String> {
    let counts: Vec<Vec<usize>> = strings
        .iter()
        .map(|s| count_categories(config, s.as_ref()))
        .collect();
    let maxima = max_counts(config, &counts);

    strings
        .iter()
        .zip(&counts)
        .map(|(s, vector)| {
            let mut padded = String::from(s.as_ref());
            for (index, (_, rule)) in config.rules().enumerate() {
                let missing = maxima[index] - vector[index];
                for _ in 0..missing {
                    padded.push(rule.placeholder);
                }
            }
            padded
        })
        .collect()
}
