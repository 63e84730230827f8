#[macro_use]
pub mod test_util;
