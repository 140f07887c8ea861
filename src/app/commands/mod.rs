pub mod run;
pub mod setup;
pub mod teardown;
pub mod validate;
