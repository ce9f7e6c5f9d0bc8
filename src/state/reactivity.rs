// ============================================================================
// REACTIVITY - Notificación de cambios de estado (dispara re-render)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Lista de subscribers compartida entre clones
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify(&self) {
        // Copia para que un callback pueda suscribir sin doble borrow
        let subscribers: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_share_subscribers() {
        let notifier = ChangeNotifier::new();
        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();
        notifier.subscribe(move || hits_clone.set(hits_clone.get() + 1));

        notifier.clone().notify();
        notifier.notify();
        assert_eq!(hits.get(), 2);
    }
}
