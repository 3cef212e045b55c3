//! Deferred render requests
//!
//! Behaviors run during the update phase and have no drawing context, so
//! they queue a `RenderEvent` instead. The draw-list builder drains the
//! queue once per frame, in FIFO order.

use crate::consts::RENDER_EVENT_CAPACITY;

/// HUD message payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Closed door, shows the key cost
    DoorTakesKeys(u32),
    /// Open door
    PressUseToEnter,
}

impl Message {
    pub fn text(&self) -> String {
        match self {
            Message::DoorTakesKeys(1) => "Door Takes One Key".to_string(),
            Message::DoorTakesKeys(2) => "Door Takes Two Keys".to_string(),
            Message::DoorTakesKeys(3) => "Door Takes Three Keys".to_string(),
            Message::DoorTakesKeys(n) => format!("Door Takes {n} Keys"),
            Message::PressUseToEnter => "Press Use to Enter".to_string(),
        }
    }
}

/// Which draw routine handles an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEventKind {
    /// Floating text above a door
    DoorMessage,
}

/// A draw request queued during the update phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderEvent {
    pub kind: RenderEventKind,
    /// Index of the originating item in the active level
    pub item: usize,
    pub message: Message,
}

impl RenderEvent {
    pub fn door_message(item: usize, message: Message) -> Self {
        Self {
            kind: RenderEventKind::DoorMessage,
            item,
            message,
        }
    }
}

/// Bounded FIFO of render events for the current frame
#[derive(Debug, Clone)]
pub struct RenderEvents {
    events: Vec<RenderEvent>,
    capacity: usize,
    /// Events dropped because the queue was full (lifetime total)
    dropped: u64,
}

impl Default for RenderEvents {
    fn default() -> Self {
        Self::with_capacity(RENDER_EVENT_CAPACITY)
    }
}

impl RenderEvents {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    /// Queue an event; returns false (and drops it) when the queue is full
    pub fn push(&mut self, event: RenderEvent) -> bool {
        if self.events.len() >= self.capacity {
            self.dropped += 1;
            log::trace!("Render event queue full, dropping {:?}", event);
            return false;
        }
        self.events.push(event);
        true
    }

    /// Take every queued event in FIFO order, leaving the queue empty
    pub fn drain(&mut self) -> std::vec::Drain<'_, RenderEvent> {
        self.events.drain(..)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenderEvent> {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_drain_empties_queue() {
        let mut events = RenderEvents::default();
        events.push(RenderEvent::door_message(3, Message::DoorTakesKeys(1)));
        events.push(RenderEvent::door_message(7, Message::PressUseToEnter));

        let drained: Vec<_> = events.drain().collect();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].item, 3);
        assert_eq!(drained[1].item, 7);
        assert!(events.is_empty());
        assert_eq!(events.drain().count(), 0);
    }

    #[test]
    fn test_overflow_drops_newest() {
        let mut events = RenderEvents::with_capacity(2);
        assert!(events.push(RenderEvent::door_message(0, Message::PressUseToEnter)));
        assert!(events.push(RenderEvent::door_message(1, Message::PressUseToEnter)));
        assert!(!events.push(RenderEvent::door_message(2, Message::PressUseToEnter)));

        assert_eq!(events.len(), 2);
        assert_eq!(events.dropped(), 1);
        let items: Vec<_> = events.iter().map(|e| e.item).collect();
        assert_eq!(items, vec![0, 1]);
    }

    #[test]
    fn test_default_capacity() {
        let events = RenderEvents::default();
        assert_eq!(events.capacity(), RENDER_EVENT_CAPACITY);
    }

    #[test]
    fn test_message_text() {
        assert_eq!(Message::DoorTakesKeys(1).text(), "Door Takes One Key");
        assert_eq!(Message::DoorTakesKeys(3).text(), "Door Takes Three Keys");
        assert_eq!(Message::DoorTakesKeys(5).text(), "Door Takes 5 Keys");
        assert_eq!(Message::PressUseToEnter.text(), "Press Use to Enter");
    }
}
