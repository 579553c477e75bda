//! Terminal front-end of the gallery shell.

pub(crate) mod braille;
pub(crate) mod run;
pub(crate) mod view;
