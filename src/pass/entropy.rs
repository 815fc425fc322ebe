//! Template strength in bits.
//!
//! For a pool of length `t` whose distinct characters occur `c_1..c_k` times,
//! the Shannon entropy of one draw is
//!
//! ```text
//! H = -Σ p_i log2 p_i,  p_i = c_i / t
//!   = log2 t - Σ (c_i / t) log2 c_i
//! ```
//!
//! Natural logs are used throughout and the sum is divided by `ln 2` once at
//! the end.
//!
//! A template's entropy is the sum of its positions' entropies. That holds
//! only because every position is drawn independently of the others.

use std::collections::BTreeMap;
use std::f64::consts::LN_2;

use super::charset::{Pool, PoolTable};
use super::template::Template;
use crate::error::Result;

/// Entropy in bits of one uniform draw by index from `pool`.
pub fn pool_entropy(pool: &Pool) -> f64 {
    if pool.is_empty() {
        return 0.0;
    }

    // Sorted so the summation order, and therefore the result, never varies.
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    for &c in pool.iter() {
        *counts.entry(c).or_insert(0) += 1;
    }

    let total = pool.len() as f64;
    let mut bits = total.ln();
    for &count in counts.values() {
        let count = count as f64;
        bits -= count * count.ln() / total;
    }

    bits / LN_2
}

/// Sum of per-position entropies for already resolved pools.
pub fn entropy(pools: &[&Pool]) -> f64 {
    pools.iter().map(|pool| pool_entropy(pool)).sum()
}

pub fn template_entropy(template: &Template, table: &PoolTable) -> Result<f64> {
    let pools = template.resolve(table)?;
    Ok(entropy(&pools))
}
