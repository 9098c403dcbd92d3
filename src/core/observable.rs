use std::sync::{Arc, Mutex, PoisonError};

type Listener<T> = Box<dyn Fn(&T) + Send + 'static>;

/// A change-notifying cell. `set` stores the new value and then calls every
/// subscriber with it, synchronously, on the caller's thread. Subscribers
/// never fire at registration time. Clones share the value and the
/// subscriber list.
pub struct Observable<T> {
    value: Arc<Mutex<T>>,
    listeners: Arc<Mutex<Vec<Listener<T>>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Observable {
            value: Arc::clone(&self.value),
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<T: Clone + Send + 'static> Observable<T> {
    pub fn new(initial: T) -> Self {
        Observable {
            value: Arc::new(Mutex::new(initial)),
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get(&self) -> T {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set(&self, new_value: T) {
        {
            let mut value = self.value.lock().unwrap_or_else(PoisonError::into_inner);
            *value = new_value.clone();
        }
        // Value lock is released before subscribers run so a listener may
        // read the cell it is subscribed to.
        let listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        for listener in listeners.iter() {
            listener(&new_value);
        }
    }

    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&T) + Send + 'static,
    {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(listener));
    }
}
