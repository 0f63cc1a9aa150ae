mod integer;

pub(crate) use integer::*;
