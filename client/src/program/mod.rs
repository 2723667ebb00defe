pub mod currency;
pub mod pay;
pub mod scenario;

pub use currency::*;
pub use pay::*;
pub use scenario::*;
