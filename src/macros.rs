// \file src/macros.rs
//! macros for forwarding operator implementations

// Forward ref-val, val-ref and ref-ref forms to val-val (Bcd is Copy)
macro_rules! forward_ref_binop {
    (impl $imp:ident, $method:ident for Bcd) => {
        impl<'a, W: BcdWord> $imp<&'a Bcd<W>> for Bcd<W> {
            type Output = Bcd<W>;

            #[inline]
            fn $method(self, rhs: &Bcd<W>) -> Bcd<W> {
                $imp::$method(self, *rhs)
            }
        }

        impl<'a, W: BcdWord> $imp<Bcd<W>> for &'a Bcd<W> {
            type Output = Bcd<W>;

            #[inline]
            fn $method(self, rhs: Bcd<W>) -> Bcd<W> {
                $imp::$method(*self, rhs)
            }
        }

        impl<'a, 'b, W: BcdWord> $imp<&'b Bcd<W>> for &'a Bcd<W> {
            type Output = Bcd<W>;

            #[inline]
            fn $method(self, rhs: &Bcd<W>) -> Bcd<W> {
                $imp::$method(*self, *rhs)
            }
        }
    };
}

// Implement op-assign for values and refs using the binary operator
macro_rules! forward_op_assign {
    (impl $imp:ident, $method:ident => $op:ident, $op_method:ident for Bcd) => {
        impl<W: BcdWord> $imp<Bcd<W>> for Bcd<W> {
            #[inline]
            fn $method(&mut self, rhs: Bcd<W>) {
                *self = $op::$op_method(*self, rhs);
            }
        }

        impl<'a, W: BcdWord> $imp<&'a Bcd<W>> for Bcd<W> {
            #[inline]
            fn $method(&mut self, rhs: &Bcd<W>) {
                *self = $op::$op_method(*self, *rhs);
            }
        }
    };
}
