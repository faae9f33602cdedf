pub(crate) mod logging;
pub(crate) mod seed;
pub(crate) mod settings;
