//! Character pool building for template symbols.

use std::collections::BTreeMap;
use std::ops::Deref;

use super::keyboard::{DIGITS, Group, KeyboardBias};

/// Literal template characters that stand for themselves.
const PASSTHROUGH: &[char] = &['-'];

/// Sequence of characters for one symbol. Repeats are sampling weight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pool(Vec<char>);

impl Pool {
    /// Concatenate each group `repeat` times.
    pub fn from_groups(groups: &[Group]) -> Self {
        let mut chars = Vec::new();
        for (group, repeat) in groups {
            for _ in 0..*repeat {
                chars.extend(group.chars());
            }
        }
        Pool(chars)
    }

    pub fn concat(&self, other: &Pool) -> Pool {
        let mut chars = Vec::with_capacity(self.len() + other.len());
        chars.extend_from_slice(&self.0);
        chars.extend_from_slice(&other.0);
        Pool(chars)
    }

    /// Pool followed by its own uppercase copy. Once a letter is picked,
    /// each case is equally likely.
    pub fn with_uppercase(&self) -> Pool {
        let upper: Vec<char> = self.0.iter().map(|c| c.to_ascii_uppercase()).collect();
        self.concat(&Pool(upper))
    }
}

impl Deref for Pool {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.0
    }
}

impl From<&str> for Pool {
    fn from(s: &str) -> Self {
        Pool(s.chars().collect())
    }
}

/// Symbol to pool mapping for one keyboard layout. Immutable once built.
#[derive(Debug, Clone)]
pub struct PoolTable {
    bias: KeyboardBias,
    pools: BTreeMap<char, Pool>,
}

impl PoolTable {
    pub fn build(bias: KeyboardBias) -> Self {
        let weights = bias.weights();

        let consonants = Pool::from_groups(weights.consonants);
        let vowels = Pool::from_groups(weights.vowels);
        let letters = consonants.concat(&vowels);
        let digits = Pool::from(DIGITS);
        let punctuation = Pool::from_groups(weights.punctuation);

        let mut pools = BTreeMap::new();
        pools.insert('C', consonants.with_uppercase());
        pools.insert('V', vowels.with_uppercase());
        pools.insert('L', letters.with_uppercase());
        pools.insert('h', digits.concat(&Pool::from("abcdef")));
        pools.insert('H', digits.concat(&Pool::from("ABCDEF")));
        pools.insert('c', consonants);
        pools.insert('v', vowels);
        pools.insert('l', letters);
        pools.insert('d', digits.clone());
        pools.insert('D', digits);
        pools.insert('p', punctuation.clone());
        pools.insert('P', punctuation);
        for &c in PASSTHROUGH {
            pools.insert(c, Pool(vec![c]));
        }

        log::debug!("built {} pools for {bias} layout", pools.len());
        Self { bias, pools }
    }

    pub fn bias(&self) -> KeyboardBias {
        self.bias
    }

    pub fn get(&self, symbol: char) -> Option<&Pool> {
        self.pools.get(&symbol)
    }

    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.pools.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::keyboard::{CONSONANTS, PUNCTUATION, VOWELS};

    fn distinct(pool: &Pool) -> String {
        let mut chars: Vec<char> = pool.to_vec();
        chars.sort_unstable();
        chars.dedup();
        chars.into_iter().collect()
    }

    fn sorted(s: &str) -> String {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars.into_iter().collect()
    }

    #[test]
    fn uniform_pools_match_base_alphabets() {
        let table = PoolTable::build(KeyboardBias::Uniform);
        assert_eq!(&table.get('c').unwrap()[..], &CONSONANTS.chars().collect::<Vec<_>>()[..]);
        assert_eq!(&table.get('v').unwrap()[..], &VOWELS.chars().collect::<Vec<_>>()[..]);
        assert_eq!(table.get('d').unwrap().len(), 10);
        assert_eq!(table.get('p').unwrap().len(), 20);
        assert_eq!(table.get('h').unwrap().iter().collect::<String>(), "0123456789abcdef");
        assert_eq!(table.get('H').unwrap().iter().collect::<String>(), "0123456789ABCDEF");
        assert_eq!(table.get('-').unwrap().iter().collect::<String>(), "-");
    }

    #[test]
    fn every_bias_covers_exactly_the_base_alphabet() {
        for bias in KeyboardBias::ALL {
            let table = PoolTable::build(bias);
            assert_eq!(distinct(table.get('c').unwrap()), sorted(CONSONANTS), "{bias}");
            assert_eq!(distinct(table.get('v').unwrap()), sorted(VOWELS), "{bias}");
            assert_eq!(distinct(table.get('p').unwrap()), sorted(PUNCTUATION), "{bias}");
        }
    }

    #[test]
    fn weighted_layouts_are_not_flat() {
        for bias in [KeyboardBias::Qwerty, KeyboardBias::Dvorak] {
            let table = PoolTable::build(bias);
            let consonants = table.get('c').unwrap();
            assert!(consonants.len() > CONSONANTS.len(), "{bias}");
        }
    }

    #[test]
    fn build_is_deterministic() {
        for bias in KeyboardBias::ALL {
            let a = PoolTable::build(bias);
            let b = PoolTable::build(bias);
            for symbol in a.symbols() {
                assert_eq!(a.get(symbol), b.get(symbol));
            }
        }
    }

    #[test]
    fn mixed_case_pools_double_their_source() {
        for bias in KeyboardBias::ALL {
            let table = PoolTable::build(bias);
            for (lower, mixed) in [('c', 'C'), ('v', 'V'), ('l', 'L')] {
                let lower = table.get(lower).unwrap();
                let mixed = table.get(mixed).unwrap();
                assert_eq!(mixed.len(), 2 * lower.len());
                assert_eq!(&mixed[..lower.len()], &lower[..]);
                assert!(mixed[lower.len()..].iter().all(|c| c.is_ascii_uppercase()));
            }
        }
    }

    #[test]
    fn letters_keep_duplicates_from_both_classes() {
        let table = PoolTable::build(KeyboardBias::Dvorak);
        let l = table.get('l').unwrap();
        assert_eq!(l.len(), table.get('c').unwrap().len() + table.get('v').unwrap().len());
    }

    #[test]
    fn unknown_symbol_has_no_pool() {
        let table = PoolTable::build(KeyboardBias::Uniform);
        assert!(table.get('z').is_none());
        assert!(table.get('x').is_none());
    }
}
