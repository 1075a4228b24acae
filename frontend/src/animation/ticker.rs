use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

use super::AnimationError;

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// Frame clock for looping animations. Runs once per display frame until dropped.
pub struct Ticker {
    frame: FrameSlot,
}

impl Ticker {
    /// Calls `on_frame` with the seconds elapsed since start, once immediately
    /// and then on every animation frame.
    pub fn start<F>(mut on_frame: F) -> Result<Self, AnimationError>
    where
        F: FnMut(f64) + 'static,
    {
        let origin = web_sys::window()
            .ok_or(AnimationError::NoWindow)?
            .performance()
            .ok_or(AnimationError::NoClock)?
            .now();

        on_frame(0.0);
        let frame: FrameSlot = Rc::new(RefCell::new(None));
        schedule(Rc::clone(&frame), origin, on_frame);

        Ok(Self { frame })
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        // dropping the pending request cancels it and releases the callback
        self.frame.borrow_mut().take();
    }
}

fn schedule<F>(slot: FrameSlot, origin: f64, mut on_frame: F)
where
    F: FnMut(f64) + 'static,
{
    let next = Rc::clone(&slot);
    let frame = request_animation_frame(move |timestamp| {
        on_frame(elapsed_seconds(origin, timestamp));
        schedule(next, origin, on_frame);
    });
    *slot.borrow_mut() = Some(frame);
}

/// Frame timestamps share `performance.now()`'s origin but may precede it slightly.
fn elapsed_seconds(origin_ms: f64, now_ms: f64) -> f64 {
    ((now_ms - origin_ms) / 1000.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_in_seconds() {
        assert_eq!(elapsed_seconds(1000.0, 3500.0), 2.5);
    }

    #[test]
    fn elapsed_never_negative() {
        assert_eq!(elapsed_seconds(500.0, 100.0), 0.0);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn counting_ticker() -> (Ticker, Rc<Cell<u32>>) {
        let frames = Rc::new(Cell::new(0));
        let counter = Rc::clone(&frames);
        let ticker = Ticker::start(move |_| counter.set(counter.get() + 1)).unwrap();
        (ticker, frames)
    }

    #[wasm_bindgen_test]
    fn first_frame_runs_immediately() {
        let (_ticker, frames) = counting_ticker();
        assert_eq!(frames.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn ticks_every_frame_while_alive() {
        let (ticker, frames) = counting_ticker();
        TimeoutFuture::new(250).await;
        assert!(frames.get() > 2, "only {} frames", frames.get());
        drop(ticker);
    }

    #[wasm_bindgen_test]
    async fn stops_ticking_once_dropped() {
        let (ticker, frames) = counting_ticker();
        TimeoutFuture::new(100).await;
        drop(ticker);
        let stopped_at = frames.get();

        TimeoutFuture::new(250).await;
        assert_eq!(frames.get(), stopped_at);
    }

    #[wasm_bindgen_test]
    async fn elapsed_time_moves_forward() {
        let samples = Rc::new(RefCell::new(Vec::new()));
        let recorder = Rc::clone(&samples);
        let ticker = Ticker::start(move |elapsed| recorder.borrow_mut().push(elapsed)).unwrap();
        TimeoutFuture::new(150).await;
        drop(ticker);

        let samples = samples.borrow();
        assert_eq!(samples[0], 0.0);
        assert!(samples.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(samples[samples.len() - 1] > 0.0);
    }
}
