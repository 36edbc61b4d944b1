mod multiply_digits_into {
    use super::*;

    #[test]
    fn single_digits() {
        let mut result = [0; 4];
        multiply_digits_into(0x07u8, 0x08u8, &mut result);
        assert_eq!(result, [56, 0, 0, 0]);
    }

    #[test]
    fn slots_hold_uncarried_sums() {
        // 99 * 99: slot1 = 9*9 + 9*9
        let mut result = [0; 4];
        multiply_digits_into(0x99u8, 0x99u8, &mut result);
        assert_eq!(result, [81, 162, 81, 0]);
    }

    #[test]
    fn worst_case_slot() {
        let mut result = [0; 32];
        multiply_digits_into(0x9999999999999999u64, 0x9999999999999999u64, &mut result);
        assert_eq!(result[15], 16 * 81);
        assert_eq!(result[31], 0);
    }
}

mod normalize_carries {
    use super::*;

    #[test]
    fn already_normal() {
        let mut digits = [1, 2, 3, 0];
        normalize_carries(&mut digits);
        assert_eq!(digits, [1, 2, 3, 0]);
    }

    #[test]
    fn ninety_nine_squared() {
        let mut digits = [81, 162, 81, 0];
        normalize_carries(&mut digits);
        // 9801, least significant first
        assert_eq!(digits, [1, 0, 8, 9]);
    }

    #[test]
    fn carry_spans_slots() {
        let mut digits = [1296, 0, 0, 0];
        normalize_carries(&mut digits);
        assert_eq!(digits, [6, 9, 2, 1]);
    }
}

mod bcd_multiply {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ( $t:ty; $a:literal * $b:literal = $c:literal ) => {
            paste! {
                #[test]
                fn [< case_ $t _ $a _ $b >]() {
                    let x = Bcd::<$t>::from_bits($a);
                    let y = Bcd::<$t>::from_bits($b);

                    let x_times_y = bcd_multiply(x, y);
                    let y_times_x = bcd_multiply(y, x);

                    assert_eq!(x_times_y, Ok(Bcd::from_bits($c)));
                    assert_eq!(y_times_x, Ok(Bcd::from_bits($c)));
                }
            }
        };
        ( $t:ty; $a:literal * $b:literal => $err:ident ) => {
            paste! {
                #[test]
                fn [< case_ $t _ $a _ $b _ $err:lower >]() {
                    let x = Bcd::<$t>::from_bits($a);
                    let y = Bcd::<$t>::from_bits($b);

                    assert_eq!(bcd_multiply(x, y), Err(BcdError::$err));
                    assert_eq!(bcd_multiply(y, x), Err(BcdError::$err));
                }
            }
        };
    }

    impl_case!(u16; 0x0 * 0x0 = 0x0);
    impl_case!(u16; 0x1234 * 0x0 = 0x0);
    impl_case!(u16; 0x9999 * 0x0 = 0x0);
    impl_case!(u16; 0x1234 * 0x1 = 0x1234);
    impl_case!(u16; 0x0012 * 0x0012 = 0x0144);
    impl_case!(u16; 0x0099 * 0x0099 = 0x9801);
    impl_case!(u16; 0x0100 * 0x0099 = 0x9900);
    impl_case!(u16; 0x4999 * 0x0002 = 0x9998);
    impl_case!(u16; 0x9999 * 0x0002 => Overflow);
    impl_case!(u16; 0x0100 * 0x0100 => Overflow);
    impl_case!(u16; 0x1000 * 0x0010 => Overflow);
    impl_case!(u16; 0x9999 * 0x9999 => Overflow);

    impl_case!(u8; 0x09 * 0x09 = 0x81);
    impl_case!(u8; 0x11 * 0x09 = 0x99);
    impl_case!(u8; 0x10 * 0x10 => Overflow);
    impl_case!(u8; 0x50 * 0x02 => Overflow);

    impl_case!(u32; 0x00012345 * 0x00000678 = 0x08369910);
    impl_case!(u32; 0x00009999 * 0x00009999 = 0x99980001);
    impl_case!(u32; 0x00010000 * 0x00010000 => Overflow);

    impl_case!(u64; 0x99999999 * 0x99999999 = 0x9999999800000001);
    impl_case!(u64; 0x1111111111111111 * 0x9 = 0x9999999999999999);
    impl_case!(u64; 0x1111111111111111 * 0x10 => Overflow);
    impl_case!(u64; 0x100000000 * 0x100000000 => Overflow);

    impl_case!(u16; 0x000A * 0x0001 => InvalidDigit);
    impl_case!(u16; 0x0000 * 0xF000 => InvalidDigit);

    // would also overflow: invalid digit is reported first
    impl_case!(u16; 0x9999 * 0x00C0 => InvalidDigit);
    impl_case!(u8; 0xEE * 0xEE => InvalidDigit);
}
