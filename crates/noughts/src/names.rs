//! Player name validation for the presentation layer.
//!
//! The game core accepts any name. Adapters that collect names from the user
//! run them through [`validate_names`] first, so both players end up with
//! distinct, non-empty names.

use derive_more::{Display, Error};
use noughts_tictactoe::Mark;
use tracing::{debug, instrument};

/// Why a pair of names was refused.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum NameError {
    /// The name for this mark was blank.
    #[display("Enter a name for player {}", _0)]
    Empty(#[error(not(source))] Mark),
    /// Both players entered the same name, ignoring case.
    #[display("Both players are named \"{}\"; pick different names", _0)]
    Duplicate(#[error(not(source))] String),
}

/// Trims both names and checks they are non-empty and distinct.
///
/// Names are compared case-insensitively, so "ada" and "Ada" collide.
///
/// # Errors
///
/// Returns the first problem found, checking X before O.
#[instrument]
pub fn validate_names(x_name: &str, o_name: &str) -> Result<(String, String), NameError> {
    let x = x_name.trim();
    let o = o_name.trim();

    if x.is_empty() {
        return Err(NameError::Empty(Mark::X));
    }
    if o.is_empty() {
        return Err(NameError::Empty(Mark::O));
    }
    if x.to_lowercase() == o.to_lowercase() {
        debug!("Duplicate names rejected");
        return Err(NameError::Duplicate(o.to_string()));
    }

    Ok((x.to_string(), o.to_string()))
}
