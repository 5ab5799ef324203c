use std::process::ExitCode;

mod app;

fn main() -> ExitCode {
    app::init_tracing();
    app::run()
}
