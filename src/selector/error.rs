use super::part::Part;
use thiserror::Error;

/// Errors raised while building a selector.
///
/// A failed append consumes the builder, so there is never a half-updated
/// selector to recover.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// A part was appended after a part that must come later.
    #[error(
        "selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element ({part} after {after})"
    )]
    Order { part: Part, after: Part },

    /// Element, id or pseudo-element appended a second time.
    #[error("element, id and pseudo-element should not occur more than one time inside the selector ({0})")]
    Cardinality(Part),

    #[error("unknown selector part: {0:?}")]
    UnknownPart(String),

    #[error("unknown combinator: {0:?}")]
    UnknownCombinator(String),

    /// A combinator with nothing on one of its sides.
    #[error("combinator {0:?} needs a compound selector on both sides")]
    Dangling(String),
}
