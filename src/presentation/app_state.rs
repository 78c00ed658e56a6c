// Application state for HTTP handlers
use crate::application::event_dispatcher::EventDispatcher;
use crate::application::score_explorer::ScoreExplorer;

#[derive(Clone)]
pub struct AppState {
    pub explorer: ScoreExplorer,
    pub dispatcher: EventDispatcher,
}

impl AppState {
    pub fn new(explorer: ScoreExplorer) -> Self {
        let dispatcher = EventDispatcher::new(explorer.clone());
        Self {
            explorer,
            dispatcher,
        }
    }
}
