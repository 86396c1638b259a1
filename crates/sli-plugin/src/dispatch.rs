use std::sync::Arc;

use sli_cookie::CookieSink;
use sli_core::{EventKind, FinalizeContent, SliResult, ViewStarted};

use crate::plugin::{RequestScope, SliSearchPlugin};

/// A lifecycle event as delivered by the host, one variant per
/// [`EventKind`].
#[derive(Debug)]
pub enum Event {
    ViewStarted(ViewStarted),
    FinalizeContent(FinalizeContent),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::ViewStarted(_) => EventKind::ViewStarted,
            Event::FinalizeContent(_) => EventKind::FinalizeContent,
        }
    }
}

type ViewStartedHandler = Box<dyn Fn(&ViewStarted, &mut RequestScope) -> SliResult<()> + Send + Sync>;
type FinalizeHandler = Box<dyn Fn(String, &RequestScope) -> String + Send + Sync>;

/// Synchronous dispatcher the host owns and drives. Handlers are
/// registered explicitly per event kind and invoked in registration
/// order; finalize handlers thread the content through each other.
#[derive(Default)]
pub struct Dispatcher {
    view_started: Vec<ViewStartedHandler>,
    finalize: Vec<FinalizeHandler>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_view_started<F>(&mut self, handler: F)
    where
        F: Fn(&ViewStarted, &mut RequestScope) -> SliResult<()> + Send + Sync + 'static,
    {
        self.view_started.push(Box::new(handler));
    }

    pub fn on_finalize_content<F>(&mut self, handler: F)
    where
        F: Fn(String, &RequestScope) -> String + Send + Sync + 'static,
    {
        self.finalize.push(Box::new(handler));
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        match kind {
            EventKind::ViewStarted => self.view_started.len(),
            EventKind::FinalizeContent => self.finalize.len(),
        }
    }

    /// Delivers one event. View-started events return `None`; finalize
    /// events return the (possibly rewritten) page content.
    pub fn dispatch(&self, event: Event, scope: &mut RequestScope) -> SliResult<Option<String>> {
        match event {
            Event::ViewStarted(view) => {
                for handler in &self.view_started {
                    handler(&view, scope)?;
                }
                Ok(None)
            }
            Event::FinalizeContent(finalize) => {
                let mut content = finalize.content;
                for handler in &self.finalize {
                    content = handler(content, scope);
                }
                Ok(Some(content))
            }
        }
    }
}

impl SliSearchPlugin {
    /// Registers both plugin handlers on a host dispatcher.
    pub fn register(
        self: &Arc<Self>,
        dispatcher: &mut Dispatcher,
        cookies: Arc<dyn CookieSink + Send + Sync>,
    ) {
        let plugin = Arc::clone(self);
        dispatcher.on_view_started(move |event, scope| {
            plugin.on_view_started(event, scope, cookies.as_ref())
        });

        let plugin = Arc::clone(self);
        dispatcher
            .on_finalize_content(move |content, scope| plugin.on_finalize_content(content, scope));
    }
}
