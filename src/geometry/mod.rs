pub(crate) mod triangle;
