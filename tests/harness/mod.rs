#![allow(dead_code, unused_imports)]

pub(crate) mod fake_tools;
pub(crate) mod test_context;

pub(crate) use fake_tools::{FakeAws, FakeTerraform};
pub(crate) use test_context::TestContext;
