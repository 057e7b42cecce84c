pub mod info;
pub mod route;
pub mod status;

use std::io::{BufRead, Write};

use route_atlas_core::{Atlas, AtlasError};

use crate::error::Result;
use crate::prompt::prompt_until_found;
use crate::util::normalize_name;

/// Resolve a country from an argument, or prompt for one.
///
/// An argument naming an unknown country is an error; an interactive answer
/// naming one is asked again. `Ok(None)` means input ended.
pub(crate) fn resolve_country<R: BufRead, W: Write>(
    atlas: &Atlas,
    arg: Option<&str>,
    message: &str,
    input: &mut R,
    output: &mut W,
) -> Result<Option<String>> {
    let lookup = |name: &str| -> std::result::Result<String, AtlasError> {
        atlas.registry().lookup(name).map(|e| e.id.clone())
    };

    match arg {
        Some(raw) => Ok(Some(lookup(&normalize_name(raw))?)),
        None => prompt_until_found(input, output, message, lookup),
    }
}
