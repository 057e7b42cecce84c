use std::io::{BufRead, Write};

use route_atlas_core::AtlasError;

use crate::error::Result;
use crate::util::normalize_name;

/// Ask for a country name until `resolve` accepts one.
///
/// Prints `message` once, then re-reads after every `NotFound`. Returns the
/// resolved value, or `None` if input ends first.
pub fn prompt_until_found<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    message: &str,
    mut resolve: F,
) -> Result<Option<T>>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> std::result::Result<T, AtlasError>,
{
    writeln!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let name = normalize_name(&line);
        match resolve(&name) {
            Ok(value) => return Ok(Some(value)),
            Err(AtlasError::NotFound { id }) => {
                tracing::debug!(input = %id, "country not found, prompting again");
                writeln!(output, "'{}' is not a valid country, please try again:", id)?;
                output.flush()?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn known(name: &str) -> std::result::Result<String, AtlasError> {
        if name == "Peru" || name == "New Guinea" {
            Ok(name.to_string())
        } else {
            Err(AtlasError::NotFound {
                id: name.to_string(),
            })
        }
    }

    #[test]
    fn test_retries_until_valid() {
        let mut input = Cursor::new("atlantis\nnew  guinea\nperu\n");
        let mut output = Vec::new();
        let found = prompt_until_found(&mut input, &mut output, "Country:", known).unwrap();
        assert_eq!(found.as_deref(), Some("New Guinea"));

        let printed = String::from_utf8(output).unwrap();
        assert_eq!(
            printed,
            "Country:\n'Atlantis' is not a valid country, please try again:\n"
        );
    }

    #[test]
    fn test_eof_returns_none() {
        let mut input = Cursor::new("mordor\n");
        let mut output = Vec::new();
        let found = prompt_until_found(&mut input, &mut output, "Country:", known).unwrap();
        assert_eq!(found, None);
    }
}
