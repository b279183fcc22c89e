pub mod errors;
pub mod slug;
pub mod storage;
pub mod types;

#[cfg(test)]
pub mod test_helpers;
