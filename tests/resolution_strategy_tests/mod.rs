pub mod attr_resolution;
pub mod test_utils;
