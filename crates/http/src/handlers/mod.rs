pub mod aliases;
pub mod manufacturers;

#[cfg(test)]
pub(crate) mod test_support;
