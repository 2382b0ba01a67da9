use std::collections::VecDeque;

use crate::frame::Frame;

/// One recorded pipeline step, e.g. `("markers", "conjunctions: 3 on map")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub frame_index: u64,
    pub kind: &'static str,
    pub message: String,
}

/// Bounded, ordered trace of what the dashboard did and in which order.
///
/// The oldest events are dropped once `capacity` is reached, so a long-running
/// session never grows the trace without bound.
#[derive(Debug)]
pub struct EventBus {
    events: VecDeque<Event>,
    capacity: usize,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl EventBus {
    pub const DEFAULT_CAPACITY: usize = 1024;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity.min(Self::DEFAULT_CAPACITY)),
            capacity,
        }
    }

    pub fn emit(&mut self, frame: Frame, kind: &'static str, message: impl Into<String>) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(Event {
            frame_index: frame.index,
            kind,
            message: message.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter()
    }

    /// Event kinds in emission order.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.events.iter().map(|e| e.kind).collect()
    }

    pub fn last(&self) -> Option<&Event> {
        self.events.back()
    }

    pub fn drain(&mut self) -> Vec<Event> {
        self.events.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::EventBus;
    use crate::frame::Frame;

    #[test]
    fn records_events_with_frame_index() {
        let mut bus = EventBus::new();
        bus.emit(Frame::new(2, 0.1), "stats", "conjunctions");
        assert_eq!(bus.len(), 1);
        assert_eq!(bus.last().map(|e| e.frame_index), Some(2));
    }

    #[test]
    fn preserves_emission_order() {
        let mut bus = EventBus::new();
        let f = Frame::first();
        bus.emit(f, "stats", "");
        bus.emit(f, "list", "");
        bus.emit(f, "markers", "");
        assert_eq!(bus.kinds(), vec!["stats", "list", "markers"]);
    }

    #[test]
    fn drops_oldest_when_full() {
        let mut bus = EventBus::with_capacity(2);
        let f = Frame::first();
        bus.emit(f, "a", "");
        bus.emit(f, "b", "");
        bus.emit(f, "c", "");
        assert_eq!(bus.kinds(), vec!["b", "c"]);
    }

    #[test]
    fn drain_clears_events() {
        let mut bus = EventBus::new();
        bus.emit(Frame::first(), "k", "m");
        let drained = bus.drain();
        assert_eq!(drained.len(), 1);
        assert!(bus.is_empty());
    }
}
