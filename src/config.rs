//! Function configuration
//!
//! Options a host can set when building a registry. Defaults reproduce the
//! historical behavior of the functions.

use serde::{Deserialize, Serialize};

/// How `split_part` interprets its `token` argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMode {
    /// Every character of `token` is a delimiter on its own.
    ///
    /// `split_part('a-b_c', '-_', 3)` is `'c'`. This differs from the
    /// conventional SQL `split_part`, which splits on the whole token.
    #[default]
    AnyChar,
    /// `token` is a literal multi-character delimiter
    Substring,
}

/// How bytes produced by `base64_decode` become text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDecoding {
    /// UTF-8, replacing invalid sequences with U+FFFD
    #[default]
    Lossy,
    /// UTF-8, failing the call on invalid sequences
    Strict,
}

/// Configuration shared by all functions of a registry
///
/// # Examples
///
/// ```rust
/// use relstore_udf::config::{FunctionConfig, SplitMode, TextDecoding};
///
/// let config = FunctionConfig::default()
///     .with_split_mode(SplitMode::Substring)
///     .with_text_decoding(TextDecoding::Strict)
///     .with_name_prefix("legend_h2_extension_");
///
/// assert_eq!(config.registered_name("hash_md5"), "legend_h2_extension_hash_md5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionConfig {
    /// Delimiter semantics of `split_part`. Default: any-char
    pub split_mode: SplitMode,

    /// Text decoding applied after `base64_decode`. Default: lossy UTF-8
    pub text_decoding: TextDecoding,

    /// Prefix prepended to every function name when a host binding
    /// registers the functions. Default: empty
    pub name_prefix: String,
}

impl FunctionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_split_mode(mut self, mode: SplitMode) -> Self {
        self.split_mode = mode;
        self
    }

    pub fn with_text_decoding(mut self, decoding: TextDecoding) -> Self {
        self.text_decoding = decoding;
        self
    }

    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    /// Name under which a host should register `function_name`
    pub fn registered_name(&self, function_name: &str) -> String {
        format!("{}{}", self.name_prefix, function_name)
    }
}
