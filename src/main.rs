use tracing_subscriber::EnvFilter;
use workweek::{commands::Cli, msg_error};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    if let Err(e) = Cli::menu() {
        msg_error!(format!("{:#}", e));
        std::process::exit(1);
    }
}
