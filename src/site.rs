use crate::error::SyncError;
use std::fmt;
use std::str::FromStr;

/// Remote environments a snapshot may be taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Test,
    Live,
}

impl Environment {
    pub const ALL: [Environment; 3] = [Environment::Dev, Environment::Test, Environment::Live];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Test => "test",
            Environment::Live => "live",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Environment::ALL
            .into_iter()
            .find(|env| env.as_str() == s)
            .ok_or_else(|| SyncError::InvalidEnvironment { env: s.to_string() })
    }
}

/// A site and one of its environments on the hosting platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteReference {
    site: String,
    env: Environment,
}

impl SiteReference {
    /// Builds a reference, rejecting environments outside the allow-list.
    pub fn new(site: &str, env: &str) -> Result<Self, SyncError> {
        let env = env.parse()?;
        Ok(Self {
            site: site.to_string(),
            env,
        })
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    pub fn env(&self) -> Environment {
        self.env
    }

    /// `<site>.<env>`, the identifier Terminus uses for an environment.
    pub fn composite(&self) -> String {
        format!("{}.{}", self.site, self.env)
    }
}

impl fmt::Display for SiteReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.site, self.env)
    }
}
