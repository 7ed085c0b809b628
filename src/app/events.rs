use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::{sync::mpsc::Sender, time::interval};

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickFrame,
    CycleWeather,
    Input(Event),
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

pub fn frame_period(fps: u8) -> Duration {
    Duration::from_millis(1000_u64 / u64::from(fps.clamp(15, 60)))
}

pub fn start_frame_task(tx: Sender<AppEvent>, fps: u8) {
    tokio::spawn(async move {
        let mut ticker = interval(frame_period(fps));
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickFrame).await.is_err() {
                break;
            }
        }
    });
}

pub fn start_demo_task(tx: Sender<AppEvent>, interval_secs: u64) {
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(interval_secs.max(1)));
        // First tick completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::CycleWeather).await.is_err() {
                break;
            }
        }
    });
}
