pub(crate) mod category;
pub(crate) mod entries;
pub(crate) mod model;
