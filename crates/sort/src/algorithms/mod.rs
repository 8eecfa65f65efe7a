pub(crate) mod common;
pub(crate) mod counting_sort;
