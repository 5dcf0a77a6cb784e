//! Forward cell events to another thread.

use crossbeam_channel::{Receiver, Sender, TrySendError};
use gridwalk_core::{CellEvent, CellState, Coord, SearchObserver};

/// An observer that sends every [`CellEvent`] down a channel.
///
/// Sends never block the search. When the channel is full or the
/// receiver is gone, the event is dropped and counted.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: Sender<CellEvent>,
    dropped: u64,
}

impl ChannelObserver {
    /// Wrap an existing sender.
    pub fn new(tx: Sender<CellEvent>) -> Self {
        Self { tx, dropped: 0 }
    }

    /// Observer backed by a fresh unbounded channel.
    pub fn unbounded() -> (Self, Receiver<CellEvent>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self::new(tx), rx)
    }

    /// Observer backed by a fresh channel holding at most `cap` events.
    pub fn bounded(cap: usize) -> (Self, Receiver<CellEvent>) {
        let (tx, rx) = crossbeam_channel::bounded(cap);
        (Self::new(tx), rx)
    }

    /// Number of events that could not be delivered.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    fn send(&mut self, event: CellEvent) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(_) | TrySendError::Disconnected(_)) => self.dropped += 1,
        }
    }
}

impl SearchObserver for ChannelObserver {
    fn on_cell_state_changed(&mut self, coord: Coord, state: CellState) {
        self.send(CellEvent::StateChanged { coord, state });
    }

    fn on_cell_scored(&mut self, coord: Coord, score: f64) {
        self.send(CellEvent::Scored { coord, score });
    }

    fn on_cell_selected(&mut self, coord: Coord, score: f64) {
        self.send(CellEvent::Selected { coord, score });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn events_arrive_in_order() {
        let (mut obs, rx) = ChannelObserver::unbounded();
        obs.on_cell_state_changed(Coord::new(0, 0), CellState::Visited);
        obs.on_cell_scored(Coord::new(0, 1), 2.5);
        obs.on_cell_selected(Coord::new(0, 1), 2.5);
        drop(obs);

        let got: Vec<CellEvent> = rx.iter().collect();
        assert_eq!(
            got,
            vec![
                CellEvent::StateChanged {
                    coord: Coord::new(0, 0),
                    state: CellState::Visited
                },
                CellEvent::Scored {
                    coord: Coord::new(0, 1),
                    score: 2.5
                },
                CellEvent::Selected {
                    coord: Coord::new(0, 1),
                    score: 2.5
                },
            ]
        );
    }

    #[test]
    fn full_channel_counts_drops() {
        let (mut obs, rx) = ChannelObserver::bounded(1);
        obs.on_cell_state_changed(Coord::new(0, 0), CellState::Visited);
        obs.on_cell_state_changed(Coord::new(0, 1), CellState::Frontier);
        assert_eq!(obs.dropped(), 1);
        assert_eq!(rx.len(), 1);
    }

    #[test]
    fn disconnected_receiver_counts_drops() {
        let (mut obs, rx) = ChannelObserver::unbounded();
        drop(rx);
        obs.on_cell_state_changed(Coord::new(0, 0), CellState::Visited);
        assert_eq!(obs.dropped(), 1);
    }

    #[test]
    fn consumer_on_another_thread() {
        let (mut obs, rx) = ChannelObserver::unbounded();
        let consumer = thread::spawn(move || rx.iter().count());
        for col in 0..10 {
            obs.on_cell_state_changed(Coord::new(0, col), CellState::Frontier);
        }
        drop(obs);
        assert_eq!(consumer.join().unwrap(), 10);
    }
}
