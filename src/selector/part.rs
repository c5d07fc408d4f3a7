use super::error::SelectorError;

/// One category of compound-selector fragment.
///
/// Discriminants are the order in which parts may appear inside one
/// compound selector: `element#id.class[attr]:pseudo-class::pseudo-element`.
/// Equal parts may follow each other; going backwards is an error.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Part {
    Element = 1,
    Id = 2,
    Class = 3,
    Attribute = 4,
    PseudoClass = 5,
    PseudoElement = 6,
}

impl Part {
    pub const fn all() -> [Part; 6] {
        [
            Part::Element,
            Part::Id,
            Part::Class,
            Part::Attribute,
            Part::PseudoClass,
            Part::PseudoElement,
        ]
    }
    pub fn rank(&self) -> u8 {
        *self as u8
    }
    /// Element, id and pseudo-element appear at most once per compound selector.
    pub fn singleton(&self) -> bool {
        matches!(self, Part::Element | Part::Id | Part::PseudoElement)
    }
    /// Renders a raw value with this part's sigil. Values are not validated.
    pub fn render(&self, value: &str) -> String {
        match self {
            Part::Element => value.to_string(),
            Part::Id => format!("#{}", value),
            Part::Class => format!(".{}", value),
            Part::Attribute => format!("[{}]", value),
            Part::PseudoClass => format!(":{}", value),
            Part::PseudoElement => format!("::{}", value),
        }
    }
    /// Splits a `name=value` token, e.g. `class=container` or `attr=href$=".png"`.
    /// Only the first `=` separates name from value.
    pub fn split(token: &str) -> Result<(Part, &str), SelectorError> {
        let (name, value) = token
            .split_once('=')
            .ok_or_else(|| SelectorError::UnknownPart(token.to_string()))?;
        Ok((Part::try_from(name)?, value))
    }
}

/// str isomorphism
impl TryFrom<&str> for Part {
    type Error = SelectorError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "element" => Ok(Part::Element),
            "id" => Ok(Part::Id),
            "class" => Ok(Part::Class),
            "attr" | "attribute" => Ok(Part::Attribute),
            "pseudo-class" | "pseudoClass" => Ok(Part::PseudoClass),
            "pseudo-element" | "pseudoElement" => Ok(Part::PseudoElement),
            _ => Err(SelectorError::UnknownPart(s.to_string())),
        }
    }
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Part::Element => write!(f, "element"),
            Part::Id => write!(f, "id"),
            Part::Class => write!(f, "class"),
            Part::Attribute => write!(f, "attribute"),
            Part::PseudoClass => write!(f, "pseudo-class"),
            Part::PseudoElement => write!(f, "pseudo-element"),
        }
    }
}
