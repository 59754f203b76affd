pub mod check;
pub mod deploy;
pub mod vhost;
pub mod watch;
