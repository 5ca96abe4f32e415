mod bundle;
mod inspect;
mod install;

pub use bundle::cmd_bundle;
pub use inspect::cmd_inspect;
pub use install::cmd_install;
