mod add_digits_with_carry {
    use super::*;

    #[test]
    fn no_carry() {
        assert_eq!(add_digits_with_carry(0x1234u16, 0x4321), (0, 0x5555));
    }

    #[test]
    fn carry_ripples_through_nines() {
        assert_eq!(add_digits_with_carry(0x0999u16, 0x0001), (0, 0x1000));
    }

    #[test]
    fn carry_out_keeps_low_digits() {
        assert_eq!(add_digits_with_carry(0x95u8, 0x07), (1, 0x02));
        assert_eq!(add_digits_with_carry(0x9999u16, 0x9999), (1, 0x9998));
    }
}

mod bcd_add {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ( $t:ty; $a:literal + $b:literal = $c:literal ) => {
            paste! {
                #[test]
                fn [< case_ $t _ $a _ $b >]() {
                    let x = Bcd::<$t>::from_bits($a);
                    let y = Bcd::<$t>::from_bits($b);

                    let x_plus_y = bcd_add(x, y);
                    let y_plus_x = bcd_add(y, x);

                    assert_eq!(x_plus_y, Ok(Bcd::from_bits($c)));
                    assert_eq!(y_plus_x, Ok(Bcd::from_bits($c)));
                }
            }
        };
        ( $t:ty; $a:literal + $b:literal => $err:ident ) => {
            paste! {
                #[test]
                fn [< case_ $t _ $a _ $b _ $err:lower >]() {
                    let x = Bcd::<$t>::from_bits($a);
                    let y = Bcd::<$t>::from_bits($b);

                    assert_eq!(bcd_add(x, y), Err(BcdError::$err));
                    assert_eq!(bcd_add(y, x), Err(BcdError::$err));
                }
            }
        };
    }

    impl_case!(u16; 0x0 + 0x0 = 0x0);
    impl_case!(u16; 0x0099 + 0x0001 = 0x0100);
    impl_case!(u16; 0x1234 + 0x0 = 0x1234);
    impl_case!(u16; 0x0005 + 0x0005 = 0x0010);
    impl_case!(u16; 0x4567 + 0x5432 = 0x9999);
    impl_case!(u16; 0x4999 + 0x5000 = 0x9999);
    impl_case!(u16; 0x0999 + 0x9000 = 0x9999);
    impl_case!(u16; 0x9998 + 0x0001 = 0x9999);
    impl_case!(u16; 0x9999 + 0x0001 => Overflow);
    impl_case!(u16; 0x5000 + 0x5000 => Overflow);
    impl_case!(u16; 0x9999 + 0x9999 => Overflow);

    impl_case!(u8; 0x45 + 0x54 = 0x99);
    impl_case!(u8; 0x50 + 0x50 => Overflow);

    impl_case!(u32; 0x12345678 + 0x87654321 = 0x99999999);
    impl_case!(u32; 0x19999999 + 0x00000001 = 0x20000000);
    impl_case!(u32; 0x99999999 + 0x00000001 => Overflow);

    impl_case!(u64; 0x1234567890123456 + 0x1111111111111111 = 0x2345679001234567);
    impl_case!(u64; 0x4999999999999999 + 0x5000000000000000 = 0x9999999999999999);
    impl_case!(u64; 0x9000000000000000 + 0x1000000000000000 => Overflow);

    impl_case!(u16; 0x000A + 0x0001 => InvalidDigit);
    impl_case!(u16; 0xF000 + 0x0000 => InvalidDigit);
    impl_case!(u8; 0x9A + 0x01 => InvalidDigit);

    // would also overflow: invalid digit is reported first
    impl_case!(u16; 0x9999 + 0xB999 => InvalidDigit);
    impl_case!(u8; 0xFF + 0xFF => InvalidDigit);
}
