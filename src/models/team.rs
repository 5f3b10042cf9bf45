//! Team and GroupId: the static roster entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four round-robin groups.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum GroupId {
    A,
    B,
    C,
    D,
}

impl GroupId {
    pub const ALL: [GroupId; 4] = [GroupId::A, GroupId::B, GroupId::C, GroupId::D];

    pub fn as_str(self) -> &'static str {
        match self {
            GroupId::A => "A",
            GroupId::B => "B",
            GroupId::C => "C",
            GroupId::D => "D",
        }
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupId {
    type Err = ();

    /// Accepts "A" as well as "Group A" (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = match s.get(..6) {
            Some(prefix) if prefix.eq_ignore_ascii_case("group ") => s[6..].trim(),
            _ => s,
        };
        match s {
            "A" | "a" => Ok(GroupId::A),
            "B" | "b" => Ok(GroupId::B),
            "C" | "c" => Ok(GroupId::C),
            "D" | "d" => Ok(GroupId::D),
            _ => Err(()),
        }
    }
}

/// A team in the tournament. `code` is what the schedule refers to ("A1"), `name` is shown.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub group: GroupId,
    pub code: String,
}

impl Team {
    pub fn new(name: impl Into<String>, group: GroupId, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group,
            code: code.into(),
        }
    }
}
