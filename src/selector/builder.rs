use super::combinator::Combinator;
use super::error::SelectorError;
use super::part::Part;

/// An incrementally built CSS selector.
///
/// Each append consumes the builder and hands it back on success, so calls
/// chain with `?`:
///
/// ```
/// use katas::selector::*;
/// let s = id("main").class("container")?.class("editable")?;
/// assert_eq!(s.stringify(), "#main.container.editable");
/// # Ok::<(), SelectorError>(())
/// ```
///
/// The ordering and cardinality state always describes the trailing
/// compound selector, i.e. whatever follows the last combinator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    text: String,
    last: Option<Part>,
    seen: [bool; 6],
}

impl Selector {
    /// Appends one part, checking order first and cardinality second.
    pub fn append(mut self, part: Part, value: &str) -> Result<Self, SelectorError> {
        if let Some(after) = self.last.filter(|last| *last > part) {
            return Err(SelectorError::Order { part, after });
        }
        if part.singleton() && self.seen(part) {
            return Err(SelectorError::Cardinality(part));
        }
        self.push(part, value);
        Ok(self)
    }

    pub fn element(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Part::Element, value)
    }
    pub fn id(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Part::Id, value)
    }
    pub fn class(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Part::Class, value)
    }
    pub fn attr(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Part::Attribute, value)
    }
    pub fn pseudo_class(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Part::PseudoClass, value)
    }
    pub fn pseudo_element(self, value: &str) -> Result<Self, SelectorError> {
        self.append(Part::PseudoElement, value)
    }

    /// The rendered selector text.
    pub fn stringify(&self) -> &str {
        &self.text
    }
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Joins two selectors as `lhs <glyph> rhs`, each glyph padded by one
    /// space on either side (so a descendant renders as three spaces).
    /// Both operands are consumed; the result continues `rhs`'s compound.
    pub fn combine(lhs: Selector, combinator: Combinator, rhs: Selector) -> Selector {
        log::trace!("combine {:?} {:?} {:?}", lhs.text, combinator.glyph(), rhs.text);
        Selector {
            text: format!("{} {} {}", lhs.text, combinator, rhs.text),
            ..rhs
        }
    }

    fn seen(&self, part: Part) -> bool {
        self.seen[part.rank() as usize - 1]
    }
    fn push(&mut self, part: Part, value: &str) {
        log::trace!("append {} {:?}", part, value);
        self.seen[part.rank() as usize - 1] = true;
        self.last = Some(part);
        self.text.push_str(&part.render(value));
    }
}

/// A fresh selector holding a single part. Never violates ordering.
impl From<(Part, &str)> for Selector {
    fn from((part, value): (Part, &str)) -> Self {
        let mut selector = Self::default();
        selector.push(part, value);
        selector
    }
}

/// Parses a token stream of `name=value` parts and bare combinators,
/// e.g. `["element=div", "id=main", "+", "element=table"]`.
impl TryFrom<&[&str]> for Selector {
    type Error = SelectorError;
    fn try_from(tokens: &[&str]) -> Result<Self, Self::Error> {
        let mut joined: Option<(Selector, Combinator)> = None;
        let mut current = Selector::default();
        for token in tokens {
            match Combinator::try_from(*token) {
                Ok(combinator) => {
                    if current.is_empty() {
                        return Err(SelectorError::Dangling(token.to_string()));
                    }
                    let lhs = match joined.take() {
                        Some((prev, glue)) => Selector::combine(prev, glue, current),
                        None => current,
                    };
                    joined = Some((lhs, combinator));
                    current = Selector::default();
                }
                Err(_) => {
                    let (part, value) = Part::split(token)?;
                    current = current.append(part, value)?;
                }
            }
        }
        match joined {
            Some((_, glue)) if current.is_empty() => Err(SelectorError::Dangling(glue.to_string())),
            Some((prev, glue)) => Ok(Selector::combine(prev, glue, current)),
            None => Ok(current),
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
