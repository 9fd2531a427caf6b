//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Serves a cassette's interactions back in recorded order, independently
/// for each port/method pair.
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
    consumed: HashMap<(String, String), usize>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues, consumed: HashMap::new() }
    }

    /// Take the next interaction for the given port and method, or `None`
    /// once the cassette has nothing (more) for that pair.
    pub fn try_next_interaction(&mut self, port: &str, method: &str) -> Option<Interaction> {
        let key = (port.to_string(), method.to_string());
        let interaction = self.queues.get_mut(&key)?.pop_front()?;
        *self.consumed.entry(key).or_insert(0) += 1;
        Some(interaction)
    }

    /// Describes why `port::method` cannot be served: either the cassette
    /// never recorded it (listing the pairs it does contain) or every
    /// recorded interaction has been consumed.
    #[must_use]
    pub fn exhausted_message(&self, port: &str, method: &str) -> String {
        let key = (port.to_string(), method.to_string());
        if !self.queues.contains_key(&key) {
            let mut available: Vec<String> =
                self.queues.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            available.sort();
            return format!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            );
        }
        let consumed = self.consumed.get(&key).copied().unwrap_or(0);
        format!(
            "Cassette exhausted: all {consumed} interactions for port={port:?} \
             method={method:?} have been consumed."
        )
    }

    /// Number of recorded interactions not yet served.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }

    /// Returns `true` once every recorded interaction has been served.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}
