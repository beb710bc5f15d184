#![allow(dead_code)]

pub use taskdeps_test_utils::{builders, init_tracing};
