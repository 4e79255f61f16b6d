//! transaction pool integration tests

mod service;
mod tabs;

const fn main() {}
