mod bridged;
mod currency;

pub use bridged::*;
pub use currency::*;
