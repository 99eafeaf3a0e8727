#[macro_use]
mod test_util;

mod test_properties;
