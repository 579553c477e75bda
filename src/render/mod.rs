pub(crate) mod backend;
pub(crate) mod composite;
pub(crate) mod cpu;
pub(crate) mod fonts;
pub(crate) mod pipeline;
pub(crate) mod svg;
