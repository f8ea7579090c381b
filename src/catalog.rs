//! Prioritized attack-signature catalog.
//!
//! The catalog is an ordered list of signature strings plus a
//! case-insensitive lookup table mapping each signature to an attack
//! category. Ordering determines detection priority: the pipeline stops
//! at the first signature that matches a log line, so reordering the
//! catalog changes observable behavior.
//!
//! The catalog is an explicitly constructed, immutable value passed into
//! the detection pipeline at call time; concurrent reads are safe.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// Attack classes a signature can be attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackCategory {
    #[serde(rename = "SQL Injection")]
    SqlInjection,
    #[serde(rename = "XSS")]
    Xss,
    #[serde(rename = "LFI/RFI")]
    FileInclusion,
    #[serde(rename = "RFI")]
    RemoteFileInclusion,
    #[serde(rename = "Command Injection")]
    CommandInjection,
    #[serde(rename = "Reconnaissance")]
    Reconnaissance,
    #[serde(rename = "PHP Code Injection")]
    PhpCodeInjection,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl AttackCategory {
    /// The category's display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttackCategory::SqlInjection => "SQL Injection",
            AttackCategory::Xss => "XSS",
            AttackCategory::FileInclusion => "LFI/RFI",
            AttackCategory::RemoteFileInclusion => "RFI",
            AttackCategory::CommandInjection => "Command Injection",
            AttackCategory::Reconnaissance => "Reconnaissance",
            AttackCategory::PhpCodeInjection => "PHP Code Injection",
            AttackCategory::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for AttackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builtin signature list, in detection-priority order.
const BUILTIN_SIGNATURES: &[&str] = &[
    "' OR '1'='1",
    "<script>",
    "../../",
    "wget",
    "curl",
    "nc",
    "'--",
    "<img src=x onerror=alert(1)>",
    "<iframe src=javascript:alert(1)>",
    "<svg/onload=alert(1)>",
    "<body onload=alert(1)>",
    "<a href=javascript:alert(1)>",
    "../etc/passwd",
    "../../../../etc/passwd",
    "<?php",
    "system(",
    "exec(",
    "; ls",
    "| cat /etc/passwd",
    "union select",
    "select * from",
    "drop table",
    "insert into",
    "update set",
    "delete from",
    "--",
    "#",
    "/*",
    "../",
    "..\\",
    "%00",
    "%2e%2e%2f",
    "%252e%252e%252f",
    "http://",
    "https://",
    "ftp://",
    "file://",
    "$IFS",
    "| bash",
    "| sh",
    "chmod 777",
    "chown root",
    "base64 -d",
    "eval(",
    "python -c",
    "perl -e",
    "ruby -e",
    "nc -e",
    "ncat -e",
    "powershell",
    "cmd.exe",
    "/bin/sh",
    "/bin/bash",
    "whoami",
    "ifconfig",
    "ipconfig",
    "net user",
    "passwd",
    "shadow",
    "root:x:0:0:",
    "<script>alert",
    "<script>alert(1)</script>",
    "<script>alert('xss')</script>",
    "onerror=",
    "onload=",
    "javascript:",
    "\"><script>",
    "rm -rf",
    "rm -rf /",
    "rm -rf *",
    "rm -rf .",
    "rm -rf ..",
    "cmd=",
    "cmd=rm",
    "&cmd=",
    "?cmd=",
    ";cmd=",
    "|cmd=",
    "command=",
    "exec=",
    "execute=",
    "system=",
    "; rm",
    "&& rm",
    "|| rm",
    "|rm",
    "$(rm",
    "`rm",
];

/// Builtin signature-to-category assignments. Keys are matched
/// case-insensitively by [`PatternCatalog::category_for`], which is why
/// some entries appear in both original and lowercased spellings.
const BUILTIN_CATEGORIES: &[(&str, AttackCategory)] = &[
    // SQL Injection
    ("' or '1'='1", AttackCategory::SqlInjection),
    ("' OR '1'='1", AttackCategory::SqlInjection),
    ("'--", AttackCategory::SqlInjection),
    ("union select", AttackCategory::SqlInjection),
    ("select * from", AttackCategory::SqlInjection),
    ("drop table", AttackCategory::SqlInjection),
    ("insert into", AttackCategory::SqlInjection),
    ("update set", AttackCategory::SqlInjection),
    ("delete from", AttackCategory::SqlInjection),
    ("--", AttackCategory::SqlInjection),
    ("#", AttackCategory::SqlInjection),
    ("/*", AttackCategory::SqlInjection),
    ("%27 or %271%27=%271", AttackCategory::SqlInjection),
    // XSS
    ("<script>", AttackCategory::Xss),
    ("<script>alert", AttackCategory::Xss),
    ("<script>alert(1)</script>", AttackCategory::Xss),
    ("<script>alert('xss')</script>", AttackCategory::Xss),
    ("onerror=", AttackCategory::Xss),
    ("onload=", AttackCategory::Xss),
    ("javascript:", AttackCategory::Xss),
    ("\"><script>", AttackCategory::Xss),
    ("%3cscript%3e", AttackCategory::Xss),
    ("<img src=x onerror=alert(1)>", AttackCategory::Xss),
    ("<svg/onload=alert(1)>", AttackCategory::Xss),
    // LFI / RFI
    ("../../", AttackCategory::FileInclusion),
    ("../../../../etc/passwd", AttackCategory::FileInclusion),
    ("../etc/passwd", AttackCategory::FileInclusion),
    ("%2e%2e%2f", AttackCategory::FileInclusion),
    ("%252e%252e%252f", AttackCategory::FileInclusion),
    ("../", AttackCategory::FileInclusion),
    ("..\\", AttackCategory::FileInclusion),
    ("file://", AttackCategory::FileInclusion),
    ("http://", AttackCategory::RemoteFileInclusion),
    ("https://", AttackCategory::RemoteFileInclusion),
    ("ftp://", AttackCategory::RemoteFileInclusion),
    // Command Injection
    ("wget", AttackCategory::CommandInjection),
    ("curl", AttackCategory::CommandInjection),
    ("nc", AttackCategory::CommandInjection),
    ("system(", AttackCategory::CommandInjection),
    ("exec(", AttackCategory::CommandInjection),
    ("rm -rf", AttackCategory::CommandInjection),
    ("rm -rf /", AttackCategory::CommandInjection),
    ("rm -rf *", AttackCategory::CommandInjection),
    ("rm -rf .", AttackCategory::CommandInjection),
    ("rm -rf ..", AttackCategory::CommandInjection),
    ("; ls", AttackCategory::CommandInjection),
    ("| cat /etc/passwd", AttackCategory::CommandInjection),
    ("$ifs", AttackCategory::CommandInjection),
    ("| bash", AttackCategory::CommandInjection),
    ("| sh", AttackCategory::CommandInjection),
    ("chmod 777", AttackCategory::CommandInjection),
    ("chown root", AttackCategory::CommandInjection),
    ("base64 -d", AttackCategory::CommandInjection),
    ("eval(", AttackCategory::CommandInjection),
    ("python -c", AttackCategory::CommandInjection),
    ("perl -e", AttackCategory::CommandInjection),
    ("ruby -e", AttackCategory::CommandInjection),
    ("nc -e", AttackCategory::CommandInjection),
    ("ncat -e", AttackCategory::CommandInjection),
    ("powershell", AttackCategory::CommandInjection),
    ("cmd.exe", AttackCategory::CommandInjection),
    ("/bin/sh", AttackCategory::CommandInjection),
    ("/bin/bash", AttackCategory::CommandInjection),
    ("&&", AttackCategory::CommandInjection),
    ("cmd=", AttackCategory::CommandInjection),
    ("cmd=rm", AttackCategory::CommandInjection),
    ("&cmd=", AttackCategory::CommandInjection),
    ("?cmd=", AttackCategory::CommandInjection),
    (";cmd=", AttackCategory::CommandInjection),
    ("|cmd=", AttackCategory::CommandInjection),
    ("command=", AttackCategory::CommandInjection),
    ("exec=", AttackCategory::CommandInjection),
    ("execute=", AttackCategory::CommandInjection),
    ("system=", AttackCategory::CommandInjection),
    ("; rm", AttackCategory::CommandInjection),
    ("&& rm", AttackCategory::CommandInjection),
    ("|| rm", AttackCategory::CommandInjection),
    ("|rm", AttackCategory::CommandInjection),
    ("$(rm", AttackCategory::CommandInjection),
    ("`rm", AttackCategory::CommandInjection),
    // Reconnaissance
    ("whoami", AttackCategory::Reconnaissance),
    ("ifconfig", AttackCategory::Reconnaissance),
    ("ipconfig", AttackCategory::Reconnaissance),
    ("net user", AttackCategory::Reconnaissance),
    ("passwd", AttackCategory::Reconnaissance),
    ("shadow", AttackCategory::Reconnaissance),
    ("root:x:0:0:", AttackCategory::Reconnaissance),
    // PHP Code Injection
    ("<?php", AttackCategory::PhpCodeInjection),
];

/// Ordered signature list plus category lookup.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    signatures: Vec<Cow<'static, str>>,
    categories: HashMap<Cow<'static, str>, AttackCategory>,
}

impl PatternCatalog {
    /// Build a catalog from owned signatures and category assignments.
    /// Signature order is preserved and defines detection priority.
    pub fn new(
        signatures: Vec<String>,
        categories: HashMap<String, AttackCategory>,
    ) -> Self {
        Self {
            signatures: signatures.into_iter().map(Cow::Owned).collect(),
            categories: categories
                .into_iter()
                .map(|(k, v)| (Cow::Owned(k), v))
                .collect(),
        }
    }

    /// The builtin catalog of known attack signatures.
    pub fn builtin() -> Self {
        Self {
            signatures: BUILTIN_SIGNATURES.iter().map(|&s| Cow::Borrowed(s)).collect(),
            categories: BUILTIN_CATEGORIES
                .iter()
                .map(|&(s, c)| (Cow::Borrowed(s), c))
                .collect(),
        }
    }

    /// Signatures in detection-priority order.
    pub fn signatures(&self) -> impl Iterator<Item = &str> {
        self.signatures.iter().map(|s| s.as_ref())
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Resolve a signature's category: the lowercased spelling is tried
    /// first, then the original casing; unmapped signatures are
    /// [`AttackCategory::Unknown`].
    pub fn category_for(&self, pattern: &str) -> AttackCategory {
        let lowered = pattern.to_lowercase();
        self.categories
            .get(lowered.as_str())
            .or_else(|| self.categories.get(pattern))
            .copied()
            .unwrap_or(AttackCategory::Unknown)
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
