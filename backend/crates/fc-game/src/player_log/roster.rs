use std::collections::BTreeSet;

const JOIN_MARKER: &str = "[JOIN]";
const JOIN_SUFFIX: &str = "joined the game";
const LEAVE_MARKER: &str = "[LEAVE]";
const LEAVE_SUFFIX: &str = "left the game";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    Joined(String),
    Left(String),
}

impl RosterEvent {
    /// Parse a server log line. Lines without a join/leave marker yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        if let Some(name) = Self::name_between(line, JOIN_MARKER, JOIN_SUFFIX) {
            return Some(Self::Joined(name));
        }
        Self::name_between(line, LEAVE_MARKER, LEAVE_SUFFIX).map(Self::Left)
    }

    fn name_between(line: &str, marker: &str, suffix: &str) -> Option<String> {
        let (_, rest) = line.split_once(marker)?;
        let name = rest.split(suffix).next().unwrap_or_default().trim();
        (!name.is_empty()).then(|| name.to_string())
    }

    pub fn player(&self) -> &str {
        match self {
            Self::Joined(name) | Self::Left(name) => name,
        }
    }
}

/// Players currently online, kept sorted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: BTreeSet<String>,
}

impl Roster {
    pub fn from_players<I: IntoIterator<Item = String>>(players: I) -> Self {
        Self {
            players: players.into_iter().collect(),
        }
    }

    /// Apply an event; returns whether the roster changed.
    pub fn apply(&mut self, event: &RosterEvent) -> bool {
        match event {
            RosterEvent::Joined(name) => self.players.insert(name.clone()),
            RosterEvent::Left(name) => self.players.remove(name),
        }
    }

    pub fn players(&self) -> Vec<String> {
        self.players.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
