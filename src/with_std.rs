// Wrap std:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use std::{
        fmt,
        hash,
        iter,
        marker,
        ops,
        str,
    };

    #[cfg(test)]
    pub use std::string::ToString;
    #[cfg(test)]
    pub use std::vec::Vec;
}
