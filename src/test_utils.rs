#[cfg(test)]
pub mod test_helpers {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use futures::FutureExt;
    use futures::future::BoxFuture;
    use tokio::sync::Notify;
    use tokio_util::sync::CancellationToken;

    use crate::app::App;
    use crate::combobox::{Combobox, ComboboxOptions};
    use crate::query::QueryController;
    use crate::source::{
        DEFAULT_CITIES, MatchMode, SearchResult, SourceError, SuggestionSource, filter_cities,
    };

    pub const DEBOUNCE: Duration = Duration::from_millis(300);

    pub const B_CITIES: [&str; 8] = [
        "Boston",
        "Bogotá",
        "Buenos Aires",
        "Bangalore",
        "Berlin",
        "Barcelona",
        "Beijing",
        "Brisbane",
    ];

    /// How the mock answers a search
    #[derive(Clone)]
    pub enum MockMode {
        /// Resolve immediately with a prefix match over the built-in cities
        Cities,
        /// Resolve immediately with this failure
        Fail(SourceError),
        /// Never resolve until cancelled, then fail with `Cancelled`
        Hang,
        /// Ignore cancellation; resolve with the city match once the gate is notified
        Gated(Arc<Notify>),
    }

    /// Scriptable suggestion source that records every search it receives
    #[derive(Clone)]
    pub struct MockSource {
        mode: Arc<Mutex<MockMode>>,
        calls: Arc<Mutex<Vec<String>>>,
        tokens: Arc<Mutex<Vec<CancellationToken>>>,
    }

    impl MockSource {
        pub fn new(mode: MockMode) -> Self {
            Self {
                mode: Arc::new(Mutex::new(mode)),
                calls: Arc::new(Mutex::new(Vec::new())),
                tokens: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn cities() -> Self {
            Self::new(MockMode::Cities)
        }

        pub fn set_mode(&self, mode: MockMode) {
            *self.mode.lock().unwrap() = mode;
        }

        /// Queries searched so far, in order
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        /// Cancellation tokens handed out so far, in order
        pub fn tokens(&self) -> Vec<CancellationToken> {
            self.tokens.lock().unwrap().clone()
        }
    }

    impl SuggestionSource for MockSource {
        fn search(
            &self,
            query: &str,
            cancel: CancellationToken,
        ) -> BoxFuture<'static, SearchResult> {
            self.calls.lock().unwrap().push(query.to_string());
            self.tokens.lock().unwrap().push(cancel.clone());

            let mode = self.mode.lock().unwrap().clone();
            let cities: Vec<String> = DEFAULT_CITIES.iter().map(|c| c.to_string()).collect();
            let matches = filter_cities(&cities, query, MatchMode::Prefix);

            async move {
                match mode {
                    MockMode::Cities => {
                        if cancel.is_cancelled() {
                            Err(SourceError::Cancelled)
                        } else {
                            Ok(matches)
                        }
                    }
                    MockMode::Fail(error) => Err(error),
                    MockMode::Hang => {
                        cancel.cancelled().await;
                        Err(SourceError::Cancelled)
                    }
                    MockMode::Gated(gate) => {
                        gate.notified().await;
                        Ok(matches)
                    }
                }
            }
            .boxed()
        }
    }

    pub fn controller(source: &MockSource) -> QueryController {
        QueryController::new(Box::new(source.clone()), DEBOUNCE)
    }

    pub fn combobox(source: &MockSource) -> Combobox {
        Combobox::new(Box::new(source.clone()), ComboboxOptions::default())
    }

    /// Let spawned fetch tasks run to their next suspension point
    pub async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    /// Elapse the debounce delay and resolve whatever it fires
    ///
    /// Returns whether either tick replaced the result set.
    pub async fn fire_and_settle(controller: &mut QueryController) -> bool {
        tokio::time::advance(DEBOUNCE).await;
        let fired = controller.tick();
        settle().await;
        let landed = controller.tick();
        fired || landed
    }

    /// Same as [`fire_and_settle`] but through the combobox
    pub async fn fire_and_settle_combobox(combobox: &mut Combobox) -> bool {
        tokio::time::advance(DEBOUNCE).await;
        let fired = combobox.tick();
        settle().await;
        let landed = combobox.tick();
        fired || landed
    }

    pub fn test_app(source: &MockSource) -> App {
        App::new(combobox(source))
    }

    pub fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }
}
