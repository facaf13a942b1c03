//! Event layer between the pipeline and the presentation surfaces.
//!
//! The front-end subscribes handlers instead of the pipeline writing to
//! widgets directly; the visible log view is just one handler.

use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Event {
    /// The selection was replaced, extended, or cleared.
    SelectionChanged { files: Vec<String> },

    /// A dropped batch was filtered into the selection.
    FilesDropped { added: usize, discarded: usize },

    /// A conversion run began.
    ProcessingStarted {
        file_count: usize,
        direction: String,
    },

    /// The exact command line handed to the converter.
    CommandIssued { command_line: String },

    /// Captured converter output after a successful run.
    ConverterOutput { stdout: String, stderr: String },

    /// A run finished successfully.
    ProcessingComplete { timestamp: String },

    Warning { message: String },
}

pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &Event);
}

/// Fans events out to every subscribed handler, in subscription order.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn EventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    pub fn emit(&self, event: Event) {
        for handler in &self.handlers {
            handler.handle(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recorder {
        seen: Mutex<Vec<String>>,
    }

    impl EventHandler for Recorder {
        fn handle(&self, event: &Event) {
            let label = match event {
                Event::SelectionChanged { .. } => "selection",
                Event::FilesDropped { .. } => "dropped",
                Event::ProcessingStarted { .. } => "started",
                Event::CommandIssued { .. } => "command",
                Event::ConverterOutput { .. } => "output",
                Event::ProcessingComplete { .. } => "complete",
                Event::Warning { .. } => "warning",
            };
            self.seen.lock().unwrap().push(label.to_string());
        }
    }

    #[test]
    fn test_dispatcher_fans_out_in_order() {
        let recorder = Arc::new(Recorder {
            seen: Mutex::new(Vec::new()),
        });
        let mut dispatcher = EventDispatcher::new();
        dispatcher.add_handler(recorder.clone());

        dispatcher.emit(Event::ProcessingStarted {
            file_count: 2,
            direction: "scml -> kanim".to_string(),
        });
        dispatcher.emit(Event::ProcessingComplete {
            timestamp: "2024-01-01 00:00:00".to_string(),
        });

        assert_eq!(
            recorder.seen.lock().unwrap().as_slice(),
            &["started".to_string(), "complete".to_string()]
        );
    }
}
