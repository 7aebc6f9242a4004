//! Domain entities: server connection, tags, query and check requests

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::domain::DomainError;

/// Port the historian listens on unless told otherwise.
pub const DEFAULT_PORT: u16 = 3000;

/// Connection descriptor for one historian server.
///
/// Built fresh per invocation and discarded at exit. The port is only
/// stored when it was explicitly overridden, so a client can tell
/// "default port" apart from "caller asked for 3000".
pub struct ServerConnection {
    hostname: String,
    username: String,
    password: SecretString,
    port: Option<u16>,
}

impl ServerConnection {
    pub fn new(
        hostname: impl Into<String>,
        username: impl Into<String>,
        password: SecretString,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            username: username.into(),
            password,
            port: None,
        }
    }

    /// Override the server port.
    pub fn set_port(&mut self, port: u16) {
        self.port = Some(port);
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// Effective port: the override if one was set, else [`DEFAULT_PORT`].
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// The explicit port override, if `set_port` was called.
    pub fn port_override(&self) -> Option<u16> {
        self.port
    }

    /// True when both username and password are empty (integrated login).
    pub fn is_anonymous(&self) -> bool {
        self.username.is_empty() && self.password.expose_secret().is_empty()
    }
}

impl fmt::Debug for ServerConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConnection")
            .field("hostname", &self.hostname)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("port", &self.port)
            .finish()
    }
}

/// A named data point in the historian.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Ordered collection of tags for one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags(Vec<Tag>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, tag: Tag) {
        self.0.push(tag);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.0.iter()
    }
}

impl FromIterator<Tag> for Tags {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Row data query against the default connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    tags: Tags,
    /// Start of the window, absolute or relative (`NOW-1D`), passed through verbatim
    pub start_time: String,
    /// End of the window, passed through verbatim
    pub end_time: String,
    /// Sampling interval; 0 means raw data
    pub sample_frequency: u32,
}

impl QueryRequest {
    pub fn new(
        tags: Tags,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        sample_frequency: u32,
    ) -> Result<Self, DomainError> {
        if tags.is_empty() {
            return Err(DomainError::EmptyTagCollection);
        }
        Ok(Self {
            tags,
            start_time: start_time.into(),
            end_time: end_time.into(),
            sample_frequency,
        })
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    pub fn is_raw(&self) -> bool {
        self.sample_frequency == 0
    }
}

/// Tag existence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCheckRequest {
    pub tag_name: String,
}

/// Serialized result document returned by the historian.
///
/// Opaque: it is printed, never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document(String);

impl Document {
    pub fn new(xml: impl Into<String>) -> Self {
        Self(xml.into())
    }

    pub fn xml(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection() -> ServerConnection {
        ServerConnection::new("MALSHW1", "", SecretString::new("".into()))
    }

    #[test]
    fn given_new_connection_then_port_is_default_without_override() {
        let conn = connection();
        assert_eq!(conn.port(), DEFAULT_PORT);
        assert_eq!(conn.port_override(), None);
        assert!(conn.is_anonymous());
    }

    #[test]
    fn given_set_port_then_override_is_recorded() {
        let mut conn = connection();
        conn.set_port(3100);
        assert_eq!(conn.port(), 3100);
        assert_eq!(conn.port_override(), Some(3100));
    }

    #[test]
    fn given_password_then_debug_output_redacts_it() {
        let conn = ServerConnection::new("h", "u", SecretString::new("hunter2".into()));
        let out = format!("{:?}", conn);
        assert!(!out.contains("hunter2"));
        assert!(out.contains("[REDACTED]"));
        assert!(!conn.is_anonymous());
    }

    #[test]
    fn given_no_tags_when_building_query_then_fails() {
        let result = QueryRequest::new(Tags::new(), "NOW-1D", "NOW", 0);
        assert_eq!(result, Err(DomainError::EmptyTagCollection));
    }

    #[test]
    fn given_tags_when_building_query_then_keeps_order() {
        let tags: Tags = ["B", "A"].into_iter().map(Tag::new).collect();
        let query = QueryRequest::new(tags, "NOW-1D", "NOW", 60).unwrap();
        let names: Vec<_> = query.tags().iter().map(Tag::name).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert!(!query.is_raw());
    }
}
