//!
//! Support for serde implementations
//!
//! Values serialize as minimal decimal strings. Deserialization accepts
//! decimal strings and non-negative integers (binary values, which are
//! encoded as BCD).
//!
use crate::stdlib::fmt;
use crate::stdlib::marker::PhantomData;
use crate::stdlib::str::FromStr;
use crate::word::BcdWord;
use crate::{binary_to_bcd, Bcd};

use num_traits::NumCast;
use serde_crate::{de, ser};


impl<W: BcdWord> ser::Serialize for Bcd<W> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        if !self.is_valid() {
            return Err(ser::Error::custom(crate::BcdError::InvalidDigit));
        }
        serializer.collect_str(self)
    }
}

/// Used by SerDe to construct a Bcd
struct BcdVisitor<W>(PhantomData<W>);

impl<'de, W: BcdWord> de::Visitor<'de> for BcdVisitor<W> {
    type Value = Bcd<W>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a string of at most {} decimal digits or a non-negative integer", W::DIGITS)
    }

    fn visit_str<E>(self, value: &str) -> Result<Bcd<W>, E>
    where
        E: de::Error,
    {
        Bcd::from_str(value).map_err(E::custom)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Bcd<W>, E>
    where
        E: de::Error,
    {
        let binary = match <W as NumCast>::from(value) {
            Some(n) => n,
            None => return Err(E::custom(crate::BcdError::Overflow)),
        };
        binary_to_bcd(binary).map_err(E::custom)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Bcd<W>, E>
    where
        E: de::Error,
    {
        if value < 0 {
            return Err(E::invalid_value(de::Unexpected::Signed(value), &self));
        }
        self.visit_u64(value as u64)
    }
}

impl<'de, W: BcdWord> de::Deserialize<'de> for Bcd<W> {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(BcdVisitor(PhantomData))
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    use serde_test::{
        Token, assert_tokens, assert_de_tokens, assert_de_tokens_error, assert_ser_tokens_error
    };

    mod serde_serialize_deserialize_str {
        use super::*;

        macro_rules! impl_case {
            ($name:ident : $t:ty; $input:literal => $output:literal) => {
                #[test]
                fn $name() {
                    let expected = Token::Str($output);
                    let bcd = Bcd::<$t>::from_bits($input);
                    assert_tokens(&bcd, &[expected]);
                }
            }
        }

        impl_case!(case_0: u16; 0x0 => "0");
        impl_case!(case_42: u16; 0x42 => "42");
        impl_case!(case_9999: u16; 0x9999 => "9999");
        impl_case!(case_u8_7: u8; 0x07 => "7");
        impl_case!(case_u64: u64; 0x1000000000000001 => "1000000000000001");
    }

    mod serde_deserialize_int {
        use super::*;

        macro_rules! impl_case {
            ( $( $ttype:ident ),+ : $input:literal => $bits:literal ) => {
                $( paste! {
                    #[test]
                    fn [< case_ $input _ $ttype:lower >]() {
                        let expected = Bcd::<u16>::from_bits($bits);
                        assert_de_tokens(&expected, &[Token::$ttype($input)]);
                    }
                } )*
            };
        }

        impl_case!(I8, I16, I32, I64, U8, U16, U32, U64 : 0 => 0x0);
        impl_case!(I8, I16, I32, I64, U8, U16, U32, U64 : 12 => 0x12);
        impl_case!(I16, I32, I64, U16, U32, U64 : 9999 => 0x9999);
    }

    #[test]
    fn deserialize_leading_zeros() {
        assert_de_tokens(&Bcd::<u16>::from_bits(0x12), &[Token::Str("0012")]);
    }

    #[test]
    fn deserialize_integer_overflow() {
        assert_de_tokens_error::<Bcd<u16>>(&[Token::U64(10000)], "BCD overflow");
        assert_de_tokens_error::<Bcd<u8>>(&[Token::U64(100000)], "BCD overflow");
    }

    #[test]
    fn deserialize_negative() {
        assert_de_tokens_error::<Bcd<u16>>(
            &[Token::I32(-1)],
            "invalid value: integer `-1`, expected a string of at most 4 decimal digits or a non-negative integer",
        );
    }

    #[test]
    fn deserialize_bad_string() {
        assert_de_tokens_error::<Bcd<u16>>(&[Token::Str("12a")], "invalid character 'a' in BCD string");
        assert_de_tokens_error::<Bcd<u16>>(&[Token::Str("12345")], "number too large to fit in BCD");
    }

    #[test]
    fn serialize_invalid() {
        assert_ser_tokens_error(&Bcd::from_bits(0x1Au8), &[], "invalid BCD digit");
    }
}
