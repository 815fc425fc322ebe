//! Password generation.

use std::io::Write;

use rand::Rng;
use zeroize::Zeroizing;

use super::charset::{Pool, PoolTable};
use super::template::Template;
use crate::error::Result;

/// Draw one password from already resolved pools, one index per position.
pub fn generate<R: Rng + ?Sized>(pools: &[&Pool], rng: &mut R) -> String {
    pools.iter().map(|pool| random_char(pool, rng)).collect()
}

/// Resolve `template` and draw one password from it.
pub fn generate_one<R: Rng + ?Sized>(
    template: &Template,
    table: &PoolTable,
    rng: &mut R,
) -> Result<String> {
    let pools = template.resolve(table)?;
    Ok(generate(&pools, rng))
}

/// Write `count` passwords for `pools`, one per line, each with a single
/// `write_all` so a line-buffered writer passes it straight through. The
/// line buffer is zeroized on return.
pub fn generate_batch<R, W>(pools: &[&Pool], count: usize, rng: &mut R, out: &mut W) -> Result<()>
where
    R: Rng + ?Sized,
    W: Write,
{
    let mut line = Zeroizing::new(String::with_capacity(pools.len() + 1));
    for _ in 0..count {
        line.clear();
        line.extend(pools.iter().map(|pool| random_char(pool, rng)));
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}

#[inline]
fn random_char<R: Rng + ?Sized>(pool: &Pool, rng: &mut R) -> char {
    pool[rng.random_range(0..pool.len())]
}
