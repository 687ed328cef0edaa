use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    mkpasswd::logging::init();

    let status = mkpasswd::run(
        std::env::args_os(),
        mkpasswd::open_system_source,
        io::stdout().lock(),
        io::stderr(),
    );
    ExitCode::from(status)
}
