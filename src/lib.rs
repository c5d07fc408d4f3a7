//! Three small, independent katas.
//!
//! - [`selector`]: a CSS selector builder that enforces part order and cardinality
//! - [`account`]: an OCR-style reader for 9-digit bank account numbers drawn with pipes and underscores
//! - [`evaluation`]: a 5-card poker hand classifier, built on the [`cards`] vocabulary
//!
//! Every component is a pure function of its input. Nothing here touches
//! the filesystem or the network; the `katas` binary is a thin shell over them.
pub mod account;
pub mod cards;
pub mod evaluation;
pub mod selector;

// ============================================================================
// ACCOUNT GRID GEOMETRY
// ============================================================================
/// Digits in one account number.
pub const ACCOUNT_DIGITS: usize = 9;
/// Characters per glyph cell, horizontally and vertically.
pub const CELL_WIDTH: usize = 3;
/// Rows of text in one account block.
pub const CELL_HEIGHT: usize = 3;
/// Characters per row of an account block, excluding the line terminator.
pub const ROW_WIDTH: usize = ACCOUNT_DIGITS * CELL_WIDTH;

// ============================================================================
// POKER
// ============================================================================
/// Cards in a classified hand.
pub const HAND_SIZE: usize = 5;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging.
/// The `KATAS_LOG` env var (error, warn, info, debug, trace) takes precedence over `level`.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let level = std::env::var("KATAS_LOG")
        .ok()
        .and_then(|s| s.parse::<log::LevelFilter>().ok())
        .unwrap_or(level);
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
