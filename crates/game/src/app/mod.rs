mod bootstrap;
mod gameplay;
mod loop_runner;

pub(crate) use bootstrap::init_tracing;
pub(crate) use loop_runner::run;
