pub(crate) mod fallback;
pub(crate) mod model;
