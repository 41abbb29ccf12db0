//! Unlocking a vault session from CLI inputs.

use zkvault_core::SessionKeyHolder;

use crate::cli::KeyArgs;
use crate::errors::CliError;
use crate::helpers::{prompt_password, require_salt};

use super::AppContext;

/// Resolve salt and password, derive the key, and return an unlocked holder.
///
/// The salt is checked before prompting so a missing salt fails fast.
/// The password is dropped as soon as derivation finishes.
pub fn open_session(ctx: &AppContext<'_>, args: &KeyArgs) -> anyhow::Result<SessionKeyHolder> {
    let config = ctx.config()?;
    let salt = require_salt(args.salt.as_deref())?;
    let password = prompt_password(args.no_input)?;

    let mut holder = SessionKeyHolder::new();
    holder
        .unlock(&password, &salt, &config.kdf)
        .map_err(CliError::from)?;
    Ok(holder)
}
