pub(crate) mod animator;
pub(crate) mod frame;
pub(crate) mod sink;
pub(crate) mod timing;
