/// Grammar check command.
pub mod check;
/// Single value lookup command.
pub mod get;
/// Search-path lookup command.
pub mod locate;
/// Outline printing command.
pub mod show;
#[cfg(test)]
pub(crate) mod test_support;
pub(crate) mod util;
