use std::fmt;

use color_eyre::eyre::{bail, eyre, Result};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const SCHEME: &str = "mailto:";

/// Bytes left alone by `encodeURIComponent`; everything else is escaped.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, QUERY_COMPONENT).to_string()
}

pub fn decode_component(s: &str) -> Result<String> {
    let decoded = percent_decode_str(s)
        .decode_utf8()
        .map_err(|e| eyre!("invalid UTF-8 in percent-encoded value: {e}"))?;
    Ok(decoded.into_owned())
}

/// A pre-filled message for the platform mail composer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailtoLink {
    pub fn new(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// `mailto:{recipient}?subject={..}&body={..}` with both values encoded.
    /// The recipient is written verbatim.
    pub fn to_uri(&self) -> String {
        format!(
            "{SCHEME}{}?subject={}&body={}",
            self.recipient,
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }

    /// Decodes a link produced by [`MailtoLink::to_uri`].
    ///
    /// Only `subject` and `body` are accepted, each at most once; a missing
    /// parameter decodes to the empty string.
    pub fn parse(uri: &str) -> Result<Self> {
        let Some(rest) = uri.strip_prefix(SCHEME) else {
            bail!("not a mailto URI: {uri}");
        };
        let (recipient, query) = rest.split_once('?').unwrap_or((rest, ""));
        if recipient.is_empty() {
            bail!("mailto URI has no recipient");
        }

        let mut subject = None;
        let mut body = None;
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let slot = match key {
                "subject" => &mut subject,
                "body" => &mut body,
                other => bail!("unexpected mailto parameter: {other}"),
            };
            if slot.is_some() {
                bail!("duplicated mailto parameter: {key}");
            }
            *slot = Some(decode_component(value)?);
        }

        Ok(Self {
            recipient: decode_component(recipient)?,
            subject: subject.unwrap_or_default(),
            body: body.unwrap_or_default(),
        })
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}
