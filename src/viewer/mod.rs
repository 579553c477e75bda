pub(crate) mod card;
#[allow(clippy::module_inception)]
pub(crate) mod viewer;
