//! Page-change notification registry.

/// Payload delivered to page-change listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChanged {
    pub page: usize,
    pub max_page: usize,
    /// Whether the refresh animated the content or snapped it
    pub animated: bool,
}

/// Handle returned by registration, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&PageChanged)>;

/// Registered page-change listeners
///
/// Listeners are called synchronously, once each per notification. Callers
/// must not rely on the call order.
#[derive(Default)]
pub struct PageListeners {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl PageListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&PageChanged) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn notify(&mut self, event: &PageChanged) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }
}

impl std::fmt::Debug for PageListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageListeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}
