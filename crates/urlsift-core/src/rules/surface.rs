//! Attack-surface heuristics read off the path and authority.

use crate::url_model::ParsedUrl;

/// Executable, config, backup, and source-control file endings.
const INTERESTING_EXTENSIONS: &[&str] = &[
    ".php", ".phtml", ".asp", ".aspx", ".asmx", ".ashx", ".cgi", ".pl", ".jsp", ".jspa", ".do",
    ".action", ".json", ".xml", ".api", ".wadl", ".wsdl", ".rb", ".py", ".sh", ".bat", ".ps1",
    ".yaml", ".yml", ".toml", ".ini", ".conf", ".config", ".bak", ".backup", ".old", ".save",
    ".swp", ".tmp", ".git", ".svn", ".env", ".properties", ".sql", ".db", ".sqlite",
];

/// Path segments worth a second look on any host.
const SENSITIVE_SEGMENTS: &[&str] = &[
    "admin",
    "login",
    "auth",
    "api",
    "v1",
    "v2",
    "graphql",
    "swagger",
    "docs",
    "console",
    "phpmyadmin",
    "wp-admin",
    "jmx-console",
    "manager",
    "jenkins",
    "kibana",
    "grafana",
    ".git",
    ".svn",
    ".env",
    "config",
    "backup",
    "dump",
    "temp",
    "tmp",
    "test",
    "dev",
    "stage",
    "debug",
    "private",
    "secret",
    "internal",
    "upload",
    "download",
    "include",
    "require",
    "proxy",
    "redirect",
    "forward",
    "exec",
    "execute",
    "eval",
    "system",
    "shell",
];

/// Ports that carry no signal on their own.
const UNREMARKABLE_PORTS: &[u16] = &[80, 443, 8080, 8443];

/// Path ends with an executable/config/backup/source-control extension.
pub(super) fn extensions(url: &ParsedUrl) -> bool {
    let path = url.path_decoded_lower();
    INTERESTING_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Path contains a sensitive segment anywhere.
pub(super) fn sensitive_paths(url: &ParsedUrl) -> bool {
    let path = url.path().to_lowercase();
    SENSITIVE_SEGMENTS.iter().any(|seg| path.contains(seg))
}

/// Explicit port outside the common HTTP(S) set.
pub(super) fn non_standard_port(url: &ParsedUrl) -> bool {
    matches!(url.port(), Some(port) if !UNREMARKABLE_PORTS.contains(&port))
}
