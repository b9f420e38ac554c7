//! Change notifications
//!
//! The employee service reports successful create/update/delete through a
//! `Notifier` handed to it at construction time.

/// Title used for personnel record notifications
pub const NOTIFICATION_TITLE: &str = "HR";

/// Receiver of human-readable change summaries
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, message: &str);
}

/// Discards notifications
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _title: &str, _message: &str) {}
}

impl<F> Notifier for F
where
    F: Fn(&str, &str) + Send + Sync,
{
    fn notify(&self, title: &str, message: &str) {
        self(title, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_closure_notifier() {
        let seen = Mutex::new(Vec::new());
        let notifier = |title: &str, message: &str| {
            seen.lock().unwrap().push(format!("{}: {}", title, message));
        };

        notifier.notify(NOTIFICATION_TITLE, "Created employee Ivan Petrov");

        assert_eq!(seen.lock().unwrap().as_slice(), ["HR: Created employee Ivan Petrov"]);
    }

    #[test]
    fn test_boxed_closure_as_notifier() {
        let seen = std::sync::Arc::new(Mutex::new(0));
        let counter = seen.clone();
        let notifier: Box<dyn Notifier> = Box::new(move |_: &str, _: &str| {
            *counter.lock().unwrap() += 1;
        });

        notifier.notify(NOTIFICATION_TITLE, "Deleted employee Ivan Petrov");
        NoopNotifier.notify(NOTIFICATION_TITLE, "Deleted employee Ivan Petrov");

        assert_eq!(*seen.lock().unwrap(), 1);
    }
}
