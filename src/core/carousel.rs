use crate::core::catalog::{Catalog, Category};
use crate::utils::error::Result;
use crate::utils::validation::validate_range;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3000);
pub const MIN_INTERVAL_MS: u64 = 100;
pub const MAX_INTERVAL_MS: u64 = 60_000;

/// Hero images: the first image of the first three couches and beds,
/// alternating and starting with a couch.
pub fn hero_slides(catalog: &Catalog) -> Vec<String> {
    let couches = catalog.products_in(Category::Couches);
    let beds = catalog.products_in(Category::Beds);

    couches
        .iter()
        .zip(beds.iter())
        .take(3)
        .flat_map(|(couch, bed)| [couch.cover_image(), bed.cover_image()])
        .flatten()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    slides: Vec<String>,
    current: usize,
}

impl Carousel {
    pub fn new(slides: Vec<String>) -> Self {
        Self { slides, current: 0 }
    }

    pub fn hero(catalog: &Catalog) -> Self {
        Self::new(hero_slides(catalog))
    }

    pub fn slides(&self) -> &[String] {
        &self.slides
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> Option<&str> {
        self.slides.get(self.current).map(String::as_str)
    }

    /// Move to the next slide, wrapping to the first.
    pub fn advance(&mut self) -> usize {
        if !self.slides.is_empty() {
            self.current = (self.current + 1) % self.slides.len();
        }
        self.current
    }

    /// Jump to a slide. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.slides.len() {
            self.current = index;
            true
        } else {
            false
        }
    }
}

/// Advances a carousel on a fixed interval until dropped.
pub struct CarouselTimer {
    state: Arc<Mutex<Carousel>>,
    index_rx: watch::Receiver<usize>,
    handle: JoinHandle<()>,
}

impl CarouselTimer {
    /// Must be called from within a tokio runtime. Intervals outside
    /// `MIN_INTERVAL_MS..=MAX_INTERVAL_MS` are rejected before anything is spawned.
    pub fn start(carousel: Carousel, interval: Duration) -> Result<Self> {
        validate_range(
            "carousel.interval_ms",
            interval.as_millis(),
            u128::from(MIN_INTERVAL_MS),
            u128::from(MAX_INTERVAL_MS),
        )?;

        let (index_tx, index_rx) = watch::channel(carousel.current());
        let state = Arc::new(Mutex::new(carousel));
        let task_state = Arc::clone(&state);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let index = lock(&task_state).advance();
                tracing::debug!("Carousel advanced to slide {}", index);
                if index_tx.send(index).is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            state,
            index_rx,
            handle,
        })
    }

    pub fn current(&self) -> usize {
        lock(&self.state).current()
    }

    pub fn current_slide(&self) -> Option<String> {
        lock(&self.state).current_slide().map(str::to_string)
    }

    /// Indicator click. Does not reset the interval.
    pub fn select(&self, index: usize) -> bool {
        lock(&self.state).select(index)
    }

    /// Receives the slide index after every automatic advance.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index_rx.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stop the timer and return the carousel in its current state.
    pub fn stop(self) -> Carousel {
        self.handle.abort();
        let carousel = lock(&self.state).clone();
        carousel
    }
}

impl Drop for CarouselTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn lock(state: &Mutex<Carousel>) -> MutexGuard<'_, Carousel> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
