//! Templates and their resolution against a pool table.

use std::fmt;

use super::charset::{Pool, PoolTable};
use crate::error::{Error, Result};

pub const DEFAULT_TEMPLATE: &str = "cvcpcvccvcpdd";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template(String);

impl Template {
    pub fn new(template: &str) -> Result<Self> {
        if template.is_empty() {
            return Err(Error::InvalidConfiguration("template is empty".into()));
        }
        Ok(Template(template.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up the pool of every position. Fails on the first symbol the
    /// table does not know.
    pub fn resolve<'t>(&self, table: &'t PoolTable) -> Result<Vec<&'t Pool>> {
        self.0
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                table.get(symbol).ok_or_else(|| Error::UnknownSymbol {
                    symbol,
                    position,
                    template: self.0.clone(),
                })
            })
            .collect()
    }
}

impl Default for Template {
    fn default() -> Self {
        Template(DEFAULT_TEMPLATE.to_string())
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::keyboard::KeyboardBias;

    #[test]
    fn empty_template_is_rejected() {
        assert!(matches!(Template::new(""), Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn resolves_every_position() {
        let table = PoolTable::build(KeyboardBias::Uniform);
        let template = Template::new("cv-dH").unwrap();
        let pools = template.resolve(&table).unwrap();
        assert_eq!(pools.len(), template.len());
        assert_eq!(pools[2].len(), 1);
        assert_eq!(pools[3].len(), 10);
    }

    #[test]
    fn unknown_symbol_names_character_and_position() {
        let table = PoolTable::build(KeyboardBias::Uniform);
        let err = Template::new("cvz").unwrap().resolve(&table).unwrap_err();
        match err {
            Error::UnknownSymbol { symbol, position, ref template } => {
                assert_eq!(symbol, 'z');
                assert_eq!(position, 2);
                assert_eq!(template, "cvz");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("'z'"));
    }
}
