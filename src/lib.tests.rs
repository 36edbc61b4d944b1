mod constants {
    use super::*;

    #[test]
    fn zero_one_max() {
        assert_eq!(Bcd::<u16>::ZERO.to_bits(), 0);
        assert_eq!(Bcd::<u16>::ONE.to_bits(), 1);
        assert_eq!(Bcd::<u16>::MAX.to_bits(), 0x9999);
        assert_eq!(Bcd::<u8>::MAX.to_binary(), Ok(99));
        assert_eq!(Bcd::<u32>::DIGITS, 8);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(DefaultBcd::default(), DefaultBcd::ZERO);
        assert!(DefaultBcd::default().is_zero());
    }

    #[test]
    fn default_word_has_digits() {
        assert_eq!(DefaultBcd::DIGITS, <DefaultWord as BcdWord>::BITS as usize / 4);
    }
}

mod digits {
    use super::*;

    #[test]
    fn read_and_replace() {
        let bcd = Bcd::from_bits(0x0907u16);
        assert_eq!(bcd.digit(0), 7);
        assert_eq!(bcd.digit(1), 0);
        assert_eq!(bcd.digit(2), 9);
        assert_eq!(bcd.with_digit(3, 4).to_bits(), 0x4907);
        assert_eq!(bcd.significant_digits(), 3);
    }

    #[test]
    fn with_invalid_digit() {
        let bcd = Bcd::from_bits(0x0000u16).with_digit(1, 0xC);
        assert_eq!(bcd.to_bits(), 0x00C0);
        assert!(!bcd.is_valid());
    }

    #[test]
    #[should_panic(expected = "digit index 4 out of range")]
    fn digit_out_of_range() {
        Bcd::from_bits(0x1234u16).digit(4);
    }

    #[test]
    fn iterate() {
        let digits: Vec<u8> = Bcd::from_bits(0x19u8).digits().collect();
        assert_eq!(digits, vec![1, 9]);
    }
}

mod ordering {
    use super::*;

    #[test]
    fn packed_order_is_numeric_order() {
        let mut values: Vec<Bcd<u16>> = [512u16, 7, 9999, 10, 99, 100]
            .iter()
            .map(|&n| binary_to_bcd(n).unwrap())
            .collect();
        values.sort();
        let decoded: Vec<u16> = values.iter().map(|b| b.to_binary().unwrap()).collect();
        assert_eq!(decoded, vec![7, 10, 99, 100, 512, 9999]);
    }
}

mod roundtrip {
    use super::*;

    #[test]
    fn all_u8_binary_values() {
        for v in 0..=u8::MAX {
            match binary_to_bcd(v) {
                Ok(bcd) => {
                    assert!(v < 100);
                    assert_eq!(bcd_to_binary(bcd), Ok(v));
                }
                Err(err) => {
                    assert!(v >= 100);
                    assert_eq!(err, BcdError::Overflow);
                }
            }
        }
    }

    #[test]
    fn all_u16_decimal_values() {
        let mut buf = [0u8; <u16 as BcdWord>::BUF_SIZE];
        for v in 0..10000u16 {
            let bcd = binary_to_bcd(v).unwrap();
            assert_eq!(bcd_to_binary(bcd), Ok(v));

            let n = bcd_to_str(bcd, &mut buf).unwrap();
            let text = core::str::from_utf8(&buf[..n]).unwrap();
            assert!(v == 0 || !text.starts_with('0'), "{}", text);
            assert_eq!(text, v.to_string());

            let (parsed, rest) = str_to_bcd::<u16>(text).unwrap();
            assert_eq!(parsed, bcd);
            assert_eq!(rest, "");
        }
    }

    #[test]
    fn all_valid_u16_bcd_words() {
        for bits in 0..=u16::MAX {
            let bcd = Bcd::from_bits(bits);
            match bcd_to_binary(bcd) {
                Ok(v) => {
                    assert!(bcd.is_valid());
                    assert_eq!(binary_to_bcd(v), Ok(bcd));
                }
                Err(err) => {
                    assert!(!bcd.is_valid());
                    assert_eq!(err, BcdError::InvalidDigit);
                }
            }
        }
    }

    #[test]
    fn zero_formats_as_single_digit() {
        assert_eq!(Bcd::<u64>::ZERO.to_string(), "0");
    }
}

mod overflow_boundary {
    use super::*;

    macro_rules! impl_case {
        ($t:ty) => {
            paste! {
                #[test]
                fn [< boundary_ $t >]() {
                    let max = <$t as BcdWord>::MAX_DECIMAL;
                    assert_eq!(binary_to_bcd(max), Ok(Bcd::<$t>::MAX));
                    assert_eq!(binary_to_bcd(max + 1), Err(BcdError::Overflow));
                    assert_eq!(Bcd::<$t>::MAX.checked_add(Bcd::ONE), None);
                    assert_eq!(Bcd::<$t>::MAX.checked_mul(Bcd::ONE), Some(Bcd::MAX));
                }
            }
        };
    }

    impl_case!(u8);
    impl_case!(u16);
    impl_case!(u32);
    impl_case!(u64);
}

mod arithmetic_u8_exhaustive {
    use super::*;

    fn bcd(n: u8) -> Bcd<u8> {
        binary_to_bcd(n).unwrap()
    }

    #[test]
    fn add_matches_binary() {
        for a in 0..100u8 {
            assert_eq!(bcd_add(bcd(a), Bcd::ZERO), Ok(bcd(a)));
            for b in 0..100u8 {
                let expected = if a + b < 100 { Ok(bcd(a + b)) } else { Err(BcdError::Overflow) };
                assert_eq!(bcd_add(bcd(a), bcd(b)), expected, "{} + {}", a, b);
            }
        }
    }

    #[test]
    fn multiply_matches_binary() {
        for a in 0..100u16 {
            assert_eq!(bcd_multiply(bcd(a as u8), Bcd::ZERO), Ok(Bcd::ZERO));
            for b in 0..100u16 {
                let product = a * b;
                let expected = if product < 100 {
                    Ok(bcd(product as u8))
                } else {
                    Err(BcdError::Overflow)
                };
                assert_eq!(bcd_multiply(bcd(a as u8), bcd(b as u8)), expected, "{} * {}", a, b);
            }
        }
    }

    #[test]
    fn invalid_operands_detected() {
        for bits in 0..=u8::MAX {
            let x = Bcd::from_bits(bits);
            if x.is_valid() {
                continue;
            }
            assert_eq!(bcd_to_binary(x), Err(BcdError::InvalidDigit));
            assert_eq!(bcd_add(x, Bcd::ZERO), Err(BcdError::InvalidDigit));
            assert_eq!(bcd_add(Bcd::MAX, x), Err(BcdError::InvalidDigit));
            assert_eq!(bcd_multiply(x, Bcd::ZERO), Err(BcdError::InvalidDigit));
            assert_eq!(bcd_multiply(Bcd::MAX, x), Err(BcdError::InvalidDigit));
        }
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn concrete_u16() {
        assert_eq!(binary_to_bcd(0xCu16).map(Bcd::to_bits), Ok(0x12));
        assert_eq!(bcd_to_binary(Bcd::from_bits(0x255u16)), Ok(0xFF));
        assert_eq!(bcd_add(Bcd::from_bits(0x0099u16), Bcd::from_bits(0x0001)), Ok(Bcd::from_bits(0x0100)));
        assert_eq!(bcd_multiply(Bcd::from_bits(0x0099u16), Bcd::from_bits(0x0099)), Ok(Bcd::from_bits(0x9801)));
        assert_eq!(bcd_multiply(Bcd::from_bits(0x9999u16), Bcd::from_bits(0x0002)), Err(BcdError::Overflow));

        let (value, rest) = str_to_bcd::<u16>("042x").unwrap();
        assert_eq!(value, Bcd::from_bits(0x42));
        assert_eq!(rest, "x");
    }

    #[test]
    fn methods_match_functions() {
        let x = Bcd::from_bits(0x1250u16);
        let y = Bcd::from_bits(0x0004u16);
        assert_eq!(x.try_add(y), bcd_add(x, y));
        assert_eq!(x.try_mul(y), bcd_multiply(x, y));
        assert_eq!(Bcd::from_binary(1250u16), Ok(x));
        assert_eq!(x.to_binary(), Ok(1250));

        let mut buf = [0u8; 5];
        assert_eq!(x.to_str_buf(&mut buf), Ok(4));
        assert_eq!(&buf, b"1250\0");
    }
}

mod errors {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(BcdError::InvalidDigit.to_string(), "invalid BCD digit");
        assert_eq!(BcdError::Overflow.to_string(), "BCD overflow");
        assert_eq!(ParseBcdError::Empty.to_string(), "cannot parse BCD from empty string");
        assert_eq!(ParseBcdError::InvalidCharacter('z').to_string(), "invalid character 'z' in BCD string");
        assert_eq!(ParseBcdError::Overflow.to_string(), "number too large to fit in BCD");
    }

    #[cfg(feature = "std")]
    #[test]
    fn boxed_error() {
        fn parse(s: &str) -> Result<Bcd<u16>, Box<dyn std::error::Error>> {
            let bcd: Bcd<u16> = s.parse()?;
            let doubled = bcd_add(bcd, bcd)?;
            Ok(doubled)
        }

        assert_eq!(parse("21").unwrap(), Bcd::from_bits(0x42));
        assert_eq!(parse("9000").unwrap_err().to_string(), "BCD overflow");
        assert_eq!(parse("x").unwrap_err().to_string(), "invalid character 'x' in BCD string");
    }
}
