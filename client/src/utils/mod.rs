mod horizon;

pub use horizon::*;
