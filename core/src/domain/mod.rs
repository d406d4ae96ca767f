pub mod analysis;
pub mod chat;
pub mod common;
pub mod image;
pub mod prompt;
pub mod search;

#[cfg(test)]
pub(crate) mod testing;
