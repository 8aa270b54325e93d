//! Hostname lookup.

use std::path::Path;

/// Default hostname file.
pub const HOSTNAME_FILE: &str = "/etc/hostname";

/// Kernel view of the hostname on Linux, same value `gethostname(2)` returns.
const KERNEL_HOSTNAME_FILE: &str = "/proc/sys/kernel/hostname";

/// Resolve the hostname printed in each line.
///
/// Reads `hostname_file` with every `\n` removed. When the file cannot be
/// read, falls back to the OS-reported hostname.
pub fn resolve(hostname_file: &Path) -> String {
    match std::fs::read_to_string(hostname_file) {
        Ok(content) => content.replace('\n', ""),
        Err(e) => {
            tracing::debug!(
                path = %hostname_file.display(),
                error = %e,
                "Hostname file unreadable, using OS hostname"
            );
            os_hostname()
        }
    }
}

/// Hostname as reported by the OS, or an empty string when unknown.
pub fn os_hostname() -> String {
    if let Ok(name) = std::fs::read_to_string(KERNEL_HOSTNAME_FILE) {
        let name = name.trim();
        if !name.is_empty() {
            return name.to_string();
        }
    }
    std::env::var("HOSTNAME").unwrap_or_default()
}
