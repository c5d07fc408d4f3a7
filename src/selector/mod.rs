//! CSS selector builder.
//!
//! A compound selector is built part by part in the fixed order
//! `element#id.class[attr]:pseudo-class::pseudo-element`. Classes, attributes
//! and pseudo-classes may repeat; element, id and pseudo-element may not.
//! Compound selectors are joined with a [`Combinator`].
//!
//! The free functions below start a fresh [`Selector`] with one part.
pub mod builder;
pub use builder::*;

pub mod combinator;
pub use combinator::*;

pub mod error;
pub use error::*;

pub mod part;
pub use part::*;

pub fn element(value: &str) -> Selector {
    Selector::from((Part::Element, value))
}
pub fn id(value: &str) -> Selector {
    Selector::from((Part::Id, value))
}
pub fn class(value: &str) -> Selector {
    Selector::from((Part::Class, value))
}
pub fn attr(value: &str) -> Selector {
    Selector::from((Part::Attribute, value))
}
pub fn pseudo_class(value: &str) -> Selector {
    Selector::from((Part::PseudoClass, value))
}
pub fn pseudo_element(value: &str) -> Selector {
    Selector::from((Part::PseudoElement, value))
}
pub fn combine(lhs: Selector, combinator: Combinator, rhs: Selector) -> Selector {
    Selector::combine(lhs, combinator, rhs)
}
