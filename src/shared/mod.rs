pub mod constants;
pub mod flash;
pub mod page;
pub mod slug;
pub mod templates;
#[cfg(test)]
pub mod test_helpers;
pub mod validation;
