// Property tests to be included by lib.rs (if enabled)


mod roundtrip {
    use super::*;

    macro_rules! impl_test {
        ($t:ty) => {
            paste! { proptest! {
                #[test]
                fn [< binary_ $t >](n in 0..=<$t as BcdWord>::MAX_DECIMAL) {
                    let bcd = binary_to_bcd(n).unwrap();
                    prop_assert!(bcd.is_valid());
                    prop_assert_eq!(bcd_to_binary(bcd), Ok(n));
                }

                #[test]
                fn [< binary_overflow_ $t >](n in <$t as BcdWord>::MAX_DECIMAL + 1..) {
                    prop_assert_eq!(binary_to_bcd(n), Err(BcdError::Overflow));
                }

                #[test]
                fn [< text_ $t >](n in 0..=<$t as BcdWord>::MAX_DECIMAL) {
                    let bcd = binary_to_bcd(n).unwrap();
                    let mut buf = [0u8; <$t as BcdWord>::BUF_SIZE];
                    let len = bcd_to_str(bcd, &mut buf).unwrap();
                    prop_assert_eq!(buf[len], 0);

                    let text = core::str::from_utf8(&buf[..len]).unwrap();
                    prop_assert_eq!(text, n.to_string());
                    prop_assert_eq!(str_to_bcd::<$t>(text), Ok((bcd, "")));
                    prop_assert_eq!(text.parse::<Bcd<$t>>(), Ok(bcd));
                }

                #[test]
                fn [< text_with_suffix_ $t >](n in 0..=<$t as BcdWord>::MAX_DECIMAL, suffix in "[a-z ]{0,4}") {
                    let text = format!("{}{}", n, suffix);
                    let (bcd, rest) = str_to_bcd::<$t>(&text).unwrap();
                    prop_assert_eq!(bcd.to_binary(), Ok(n));
                    prop_assert_eq!(rest, suffix.as_str());
                }
            } }
        };
    }

    impl_test!(u8);
    impl_test!(u16);
    impl_test!(u32);
    impl_test!(u64);
}


mod arithmetic {
    use super::*;

    macro_rules! impl_test {
        ($t:ty, $wide:ty) => {
            paste! { proptest! {
                #[test]
                fn [< add_ $t >](a in 0..=<$t as BcdWord>::MAX_DECIMAL, b in 0..=<$t as BcdWord>::MAX_DECIMAL) {
                    let x = binary_to_bcd(a).unwrap();
                    let y = binary_to_bcd(b).unwrap();
                    let sum = bcd_add(x, y);
                    prop_assert_eq!(sum, bcd_add(y, x));
                    prop_assert_eq!(bcd_add(x, Bcd::ZERO), Ok(x));

                    let expected = a as $wide + b as $wide;
                    if expected <= <$t as BcdWord>::MAX_DECIMAL as $wide {
                        prop_assert_eq!(sum.and_then(bcd_to_binary), Ok(expected as $t));
                    } else {
                        prop_assert_eq!(sum, Err(BcdError::Overflow));
                    }
                }

                #[test]
                fn [< mul_ $t >](a in 0..=<$t as BcdWord>::MAX_DECIMAL, b in 0..=<$t as BcdWord>::MAX_DECIMAL) {
                    let x = binary_to_bcd(a).unwrap();
                    let y = binary_to_bcd(b).unwrap();
                    let product = bcd_multiply(x, y);
                    prop_assert_eq!(product, bcd_multiply(y, x));
                    prop_assert_eq!(bcd_multiply(x, Bcd::ZERO), Ok(Bcd::ZERO));
                    prop_assert_eq!(bcd_multiply(x, Bcd::ONE), Ok(x));

                    let expected = a as $wide * b as $wide;
                    if expected <= <$t as BcdWord>::MAX_DECIMAL as $wide {
                        prop_assert_eq!(product.and_then(bcd_to_binary), Ok(expected as $t));
                    } else {
                        prop_assert_eq!(product, Err(BcdError::Overflow));
                    }
                }

                #[test]
                fn [< invalid_ $t >](bits in any::<$t>(), idx in 0..(<$t as BcdWord>::DIGITS), nibble in 10u8..16) {
                    let x = Bcd::from_bits(bits).with_digit(idx, nibble);
                    prop_assert!(!x.is_valid());
                    prop_assert_eq!(bcd_to_binary(x), Err(BcdError::InvalidDigit));
                    prop_assert_eq!(bcd_add(x, Bcd::MAX), Err(BcdError::InvalidDigit));
                    prop_assert_eq!(bcd_add(Bcd::MAX, x), Err(BcdError::InvalidDigit));
                    prop_assert_eq!(bcd_multiply(x, Bcd::MAX), Err(BcdError::InvalidDigit));
                    prop_assert_eq!(bcd_multiply(Bcd::MAX, x), Err(BcdError::InvalidDigit));

                    let mut buf = [0u8; <$t as BcdWord>::BUF_SIZE];
                    prop_assert_eq!(bcd_to_str(x, &mut buf), Err(BcdError::InvalidDigit));
                }
            } }
        };
    }

    impl_test!(u8, u16);
    impl_test!(u16, u32);
    impl_test!(u32, u64);
    impl_test!(u64, u128);
}


mod widening {
    use super::*;

    proptest! {
        #[test]
        fn u16_into_u64(n in 0..=<u16 as BcdWord>::MAX_DECIMAL) {
            let narrow = binary_to_bcd(n).unwrap();
            let wide: Bcd<u64> = narrow.into();
            prop_assert_eq!(wide.to_binary(), Ok(n as u64));
            prop_assert_eq!(wide.try_cast::<u16>(), Ok(narrow));
        }
    }
}
