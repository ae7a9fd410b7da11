use serde::{Serialize, Serializer};
use std::fmt;

/// Homeserver every conference room alias lives on.
pub const SERVER_NAME: &str = "fosdem.org";

/// A Matrix room alias, `#<localpart>:fosdem.org`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RoomAlias {
    localpart: String,
}

impl RoomAlias {
    pub fn new(localpart: impl Into<String>) -> Self {
        Self {
            localpart: localpart.into(),
        }
    }

    pub fn localpart(&self) -> &str {
        &self.localpart
    }

    pub fn server_name(&self) -> &str {
        SERVER_NAME
    }
}

impl fmt::Display for RoomAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.localpart, SERVER_NAME)
    }
}

impl Serialize for RoomAlias {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
