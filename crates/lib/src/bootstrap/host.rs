//! Host runtime interface consumed by the bootstrap.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use super::types::HostError;

/// Primitives the host runtime supplies to a running installer.
///
/// Paths are host paths (`a.js`, `/lib/heap.js`). Implementations treat a
/// leading separator as optional.
pub trait Host {
  /// Current content at `path`, or `None` if there is no such file.
  fn read(&self, path: &str) -> Result<Option<String>, HostError>;

  /// Replace the content at `path`.
  fn write(&mut self, path: &str, content: &str) -> Result<(), HostError>;

  /// Files at `location` whose name matches `name`.
  fn ls(&self, location: &str, name: &str) -> Result<Vec<String>, HostError>;

  /// Rename `from` to `to` at `location`, replacing `to`.
  fn mv(&mut self, location: &str, from: &str, to: &str) -> Result<(), HostError>;

  /// Schedule `path` to be executed.
  fn run(&mut self, path: &str) -> Result<(), HostError>;

  /// Suspend the installer without blocking the host.
  fn sleep(&mut self, duration: Duration) -> impl Future<Output = ()>;

  fn now(&self) -> Instant;

  /// Write to the script's own log.
  fn log(&mut self, message: &str);

  /// Write to the host terminal.
  fn tprint(&mut self, message: &str);
}

/// Compare two host paths, ignoring a leading separator.
pub fn same_name(a: &str, b: &str) -> bool {
  a.trim_start_matches('/') == b.trim_start_matches('/')
}
