//! Share links.
//!
//! A share link reproduces a transliteration: opening it issues
//! `GET /?text=…&script=…` and the page renders the same result. Values
//! are escaped exactly like JavaScript's `encodeURIComponent`, so links
//! built here are byte-identical to links built by page script.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use thiserror::Error;
use url::Url;

use crate::error::UiError;

/// Characters `encodeURIComponent` leaves alone besides ASCII alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a URL query component the way `encodeURIComponent` does.
///
/// Spaces become `%20` (never `+`), non-ASCII text is UTF-8 encoded.
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// The pieces of a share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink<'a> {
    pub origin: &'a str,
    pub path: &'a str,
    pub text: &'a str,
    pub script: &'a str,
}

impl<'a> ShareLink<'a> {
    /// A link rooted at `/` on the given origin.
    pub fn new(origin: &'a str, text: &'a str, script: &'a str) -> Self {
        Self {
            origin,
            path: "/",
            text,
            script,
        }
    }

    pub fn with_path(mut self, path: &'a str) -> Self {
        self.path = path;
        self
    }
}

impl fmt::Display for ShareLink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}?text={}&script={}",
            self.origin,
            self.path,
            encode_uri_component(self.text),
            encode_uri_component(self.script)
        )
    }
}

/// Writing systems the transliterator renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Script {
    #[default]
    ElderFuthark,
    Tengwar,
}

impl Script {
    pub const ALL: [Script; 2] = [Script::ElderFuthark, Script::Tengwar];

    /// Identifier used in forms and share links.
    pub fn id(self) -> &'static str {
        match self {
            Script::ElderFuthark => "ELDER_FUTHARK",
            Script::Tengwar => "TENGWAR",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Script::ElderFuthark => "Elder Futhark",
            Script::Tengwar => "Tengwar",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Unknown script identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown script: {0}")]
pub struct UnknownScript(pub String);

impl FromStr for Script {
    type Err = UnknownScript;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Script::ALL
            .into_iter()
            .find(|script| script.id() == s)
            .ok_or_else(|| UnknownScript(s.to_owned()))
    }
}

/// A decoded share link, resolved the way the page's `GET /` does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedQuery {
    /// Source text; empty when the link carries none.
    pub text: String,
    /// Script id exactly as carried by the link, if any.
    pub script_id: Option<String>,
    /// `script_id` resolved to a known script, `ElderFuthark` otherwise.
    pub script: Script,
}

impl SharedQuery {
    /// Decode a share URL. Only the first `text` and `script` pairs count.
    pub fn from_url(url: &str) -> Result<Self, UiError> {
        let url = Url::parse(url)?;

        let mut text = None;
        let mut script_id = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "text" if text.is_none() => text = Some(value.into_owned()),
                "script" if script_id.is_none() => script_id = Some(value.into_owned()),
                _ => {}
            }
        }

        let script = script_id
            .as_deref()
            .and_then(|id| id.parse().ok())
            .unwrap_or_default();

        Ok(Self {
            text: text.unwrap_or_default(),
            script_id,
            script,
        })
    }
}
