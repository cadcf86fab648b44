/// Receives events emitted while a time series is sampled.
///
/// Any `FnMut(&E)` closure is an observer, so ad hoc collection or logging
/// does not need a dedicated type.
pub trait Observer<E> {
    /// Handles a single event.
    fn observe(&mut self, event: &E);
}

impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(usize);

    impl Observer<f64> for Counter {
        fn observe(&mut self, _event: &f64) {
            self.0 += 1;
        }
    }

    fn feed<O: Observer<f64>>(observer: &mut O, events: &[f64]) {
        for event in events {
            observer.observe(event);
        }
    }

    #[test]
    fn closures_are_observers() {
        let mut seen = Vec::new();
        feed(&mut |event: &f64| seen.push(*event), &[1.0, 2.0]);
        assert_eq!(seen, vec![1.0, 2.0]);
    }

    #[test]
    fn structs_are_observers() {
        let mut counter = Counter(0);
        feed(&mut counter, &[1.0, 2.0, 3.0]);
        assert_eq!(counter.0, 3);
    }
}
