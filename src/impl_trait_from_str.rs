use crate::parsing::shift_in_digits;
use crate::stdlib::str::FromStr;
use crate::word::BcdWord;
use crate::{Bcd, BcdError, ParseBcdError};

impl<W: BcdWord> FromStr for Bcd<W> {
    type Err = ParseBcdError;

    /// Parse a string made entirely of ASCII decimal digits
    fn from_str(s: &str) -> Result<Bcd<W>, ParseBcdError> {
        if s.is_empty() {
            return Err(ParseBcdError::Empty);
        }
        if let Some(c) = s.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ParseBcdError::InvalidCharacter(c));
        }

        // only possible failure of shifting in ASCII digits is overflow
        shift_in_digits::<W>(s.as_bytes())
            .map(Bcd::from_bits)
            .map_err(|_: BcdError| ParseBcdError::Overflow)
    }
}
