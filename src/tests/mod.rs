//! Free-standing test files exercising the crate end to end, separate from
//! the `#[cfg(test)]` unit tests embedded in each module.

mod scenarios;
