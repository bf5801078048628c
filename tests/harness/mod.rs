#![allow(dead_code, unused_imports)]


pub(crate) use test_context::{REQUIRED_FILES, TestContext};
