use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use time::OffsetDateTime;

/// The kind of the last replication request sent for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplicationAction {
    Activate,
    Deactivate,
    Delete,
    Test,
    Reverse,
    InternalPoll,
}
impl ReplicationAction {
    /// Returns the name the action is stored under.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Activate => "Activate",
            Self::Deactivate => "Deactivate",
            Self::Delete => "Delete",
            Self::Test => "Test",
            Self::Reverse => "Reverse",
            Self::InternalPoll => "Internal Poll",
        }
    }
}
impl FromStr for ReplicationAction {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Stored names have drifted across versions; the short codes are
        // what the replication agents write.
        Ok(match s.trim().to_lowercase().as_str() {
            "activate" | "a" => Self::Activate,
            "deactivate" | "d" => Self::Deactivate,
            "delete" | "del" => Self::Delete,
            "test" | "t" => Self::Test,
            "reverse" | "r" => Self::Reverse,
            "internal poll" | "internalpoll" | "p" => Self::InternalPoll,
            _ => return Err(()),
        })
    }
}
impl Display for ReplicationAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Publication state of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplicationStatus {
    pub last_action: Option<ReplicationAction>,
    pub last_published: Option<OffsetDateTime>,
}
impl ReplicationStatus {
    /// A page counts as activated when the most recent replication
    /// request published it.
    pub fn is_activated(&self) -> bool {
        self.last_action == Some(ReplicationAction::Activate)
    }
}
