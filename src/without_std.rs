// tests only; the library does not allocate
#[cfg(test)]
#[macro_use]
extern crate alloc;

// Wrap core:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use core::{
        fmt,
        hash,
        iter,
        marker,
        ops,
        str,
    };

    #[cfg(test)]
    pub use alloc::string::ToString;
    #[cfg(test)]
    pub use alloc::vec::Vec;
}
