//! Navigation target parsing.
//!
//! Targets are resolved against a fixed origin with the `url` crate, so
//! relative targets, dot segments, query strings and fragments behave the
//! way a browser location would. Only the path takes part in matching.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::navigation::NavigationError;

const ORIGIN: &str = "http://gallery.localhost/";

/// A parsed navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl Location {
    pub fn parse(target: &str) -> Result<Self, NavigationError> {
        let invalid = |source: url::ParseError| NavigationError::InvalidLocation {
            target: target.to_string(),
            source,
        };
        let base = Url::parse(ORIGIN).map_err(invalid)?;
        let url = base.join(target.trim()).map_err(invalid)?;

        // Absolute URLs to another origin are not in-app navigation.
        if url.origin() != base.origin() {
            return Err(NavigationError::ForeignOrigin {
                target: target.to_string(),
            });
        }

        Ok(Self {
            path: url.path().to_string(),
            query: url.query().map(str::to_string),
            fragment: url.fragment().map(str::to_string),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

impl FromStr for Location {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}
