pub(crate) mod customize;
