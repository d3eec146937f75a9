pub(crate) mod test_utils;
mod value_tests;
