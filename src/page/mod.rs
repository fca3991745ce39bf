pub(crate) mod controller;
pub(crate) mod host;
mod run;
