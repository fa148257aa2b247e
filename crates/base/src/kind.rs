use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use snafu::Snafu;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    #[default]
    Text,
    Image,
}

impl Kind {
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
        }
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            _ => Err(Error::Parse { value: s.to_string() }),
        }
    }
}

impl From<Kind> for i32 {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Text => 0,
            Kind::Image => 1,
        }
    }
}

impl From<i32> for Kind {
    fn from(v: i32) -> Self {
        match v {
            0 => Self::Text,
            _ => Self::Image,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Could not parse entry kind, value: {value}"))]
    Parse { value: String },
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Kind;

    #[test]
    fn parse() {
        assert_eq!(Kind::from_str("text").unwrap(), Kind::Text);
        assert_eq!(Kind::from_str("Image").unwrap(), Kind::Image);
        assert!(Kind::from_str("video").is_err());
    }

    #[test]
    fn serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Kind::Text).unwrap(), "\"text\"");
        assert_eq!(serde_json::to_string(&Kind::Image).unwrap(), "\"image\"");
    }
}
