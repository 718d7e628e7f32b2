pub mod celebration;
pub mod not_found;
pub mod test;
pub mod test_list;
