// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Result type for every fallible entry point in this crate.
pub type BidiResult<T> = miette::Result<T, BidiError>;

/// The only two ways line analysis can fail. The rule engine itself is total over any
/// sequence of codepoints, so there is nothing else to report. Deep nesting of explicit
/// formatting characters is capped by the directional status stack and is never an
/// error.
///
/// Callers should treat a failure as local to one line: fall back to
/// [`BidiLine::identity`] and keep going. [`analyze_line_or_identity`] does exactly
/// that.
///
/// [`BidiLine::identity`]: crate::BidiLine::identity
/// [`analyze_line_or_identity`]: crate::analyze_line_or_identity
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum BidiError {
    /// The line was supplied as bytes and they are not valid UTF-8.
    #[error("malformed UTF-8 in line at byte offset {valid_up_to}")]
    #[diagnostic(
        code(r3bl_bidi::decode),
        help(
            "The bytes handed to the bidi engine must be UTF-8. Decode the line \
             upstream, or render it in logical order."
        )
    )]
    Decode {
        /// Length of the valid prefix, which is also the offset of the bad sequence.
        valid_up_to: usize,
        /// Length of the invalid sequence, `None` if the input ended mid sequence.
        error_len: Option<usize>,
    },

    /// A level, class or map buffer could not be reserved.
    #[error("could not allocate {requested} entries for the {what} buffer")]
    #[diagnostic(
        code(r3bl_bidi::resource_exhaustion),
        help(
            "The system is out of memory. This is not retried. Render the line in \
             logical order."
        )
    )]
    ResourceExhaustion {
        /// Which buffer failed, eg: `"levels"`.
        what: &'static str,
        /// Number of elements that were requested.
        requested: usize,
    },
}

impl From<std::str::Utf8Error> for BidiError {
    fn from(error: std::str::Utf8Error) -> Self {
        BidiError::Decode {
            valid_up_to: error.valid_up_to(),
            error_len: error.error_len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_decode_error_from_utf8_error() {
        let bytes = [b'a', b'b', 0xFF, b'c'];
        let utf8_error = std::str::from_utf8(&bytes).unwrap_err();
        let error = BidiError::from(utf8_error);
        assert_eq2!(
            error,
            BidiError::Decode {
                valid_up_to: 2,
                error_len: Some(1)
            }
        );
        assert_eq2!(error.to_string(), "malformed UTF-8 in line at byte offset 2");
    }

    #[test]
    fn test_diagnostic_codes() {
        use miette::Diagnostic;

        let error = BidiError::ResourceExhaustion {
            what: "levels",
            requested: 42,
        };
        assert_eq2!(
            error.code().map(|it| it.to_string()),
            Some("r3bl_bidi::resource_exhaustion".to_string())
        );
        assert!(error.help().is_some());
        assert_eq2!(
            error.to_string(),
            "could not allocate 42 entries for the levels buffer"
        );
    }
}
