use super::event::GameEvent;
use super::ids::SessionId;
use super::metric::Context;
use super::practice::PracticeEntry;
use crate::evaluate::SessionData;
use std::collections::HashSet;

/// Everything loaded from the data directories
#[derive(Debug, Default)]
pub struct SessionSnapshot {
    pub game_events: Vec<GameEvent>,
    pub practice_entries: Vec<PracticeEntry>,
}

impl SessionSnapshot {
    /// Borrow the collection a goal in `context` is measured against
    pub fn data(&self, context: Context) -> SessionData<'_> {
        match context {
            Context::Game => SessionData::Game(&self.game_events),
            Context::Practice => SessionData::Practice(&self.practice_entries),
        }
    }

    pub fn record_count(&self, context: Context) -> usize {
        match context {
            Context::Game => self.game_events.len(),
            Context::Practice => self.practice_entries.len(),
        }
    }

    /// Number of distinct log files the context's records came from
    pub fn session_count(&self, context: Context) -> usize {
        let sessions: HashSet<&SessionId> = match context {
            Context::Game => self.game_events.iter().map(|e| &e.session_id).collect(),
            Context::Practice => self.practice_entries.iter().map(|e| &e.session_id).collect(),
        };
        sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.game_events.is_empty() && self.practice_entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_by_context() {
        let snapshot = SessionSnapshot {
            game_events: vec![GameEvent::shot(true, false)],
            practice_entries: vec![PracticeEntry::new(1.0, 2.0), PracticeEntry::new(2.0, 2.0)],
        };

        assert!(matches!(
            snapshot.data(Context::Game),
            SessionData::Game(events) if events.len() == 1
        ));
        assert_eq!(snapshot.record_count(Context::Practice), 2);
        assert!(!snapshot.is_empty());
        assert!(SessionSnapshot::default().is_empty());
    }

    #[test]
    fn test_session_count() {
        let in_session = |session: &str, entry: PracticeEntry| PracticeEntry {
            session_id: SessionId::from(session),
            ..entry
        };
        let snapshot = SessionSnapshot {
            game_events: Vec::new(),
            practice_entries: vec![
                in_session("monday", PracticeEntry::new(1.0, 2.0)),
                in_session("monday", PracticeEntry::new(2.0, 2.0)),
                in_session("tuesday", PracticeEntry::new(0.0, 1.0)),
            ],
        };

        assert_eq!(snapshot.session_count(Context::Practice), 2);
        assert_eq!(snapshot.session_count(Context::Game), 0);
    }
}
