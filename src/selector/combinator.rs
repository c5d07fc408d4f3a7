use super::error::SelectorError;

/// Glyph joining two compound selectors.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Combinator {
    /// `a b`
    Descendant,
    /// `a > b`
    Child,
    /// `a + b`
    Adjacent,
    /// `a ~ b`
    Sibling,
}

impl Combinator {
    pub fn glyph(&self) -> char {
        match self {
            Combinator::Descendant => ' ',
            Combinator::Child => '>',
            Combinator::Adjacent => '+',
            Combinator::Sibling => '~',
        }
    }
}

/// str isomorphism
///
/// `_` stands in for the descendant space where whitespace would be eaten
/// (shell arguments).
impl TryFrom<&str> for Combinator {
    type Error = SelectorError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            " " | "_" => Ok(Combinator::Descendant),
            ">" => Ok(Combinator::Child),
            "+" => Ok(Combinator::Adjacent),
            "~" => Ok(Combinator::Sibling),
            _ => Err(SelectorError::UnknownCombinator(s.to_string())),
        }
    }
}

impl std::fmt::Display for Combinator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
