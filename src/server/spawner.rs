use std::future::Future;

/// Schedules connection tasks.
///
/// The accept loop only hands tasks over; how many run at once is up to the
/// implementation.
pub trait Spawner: Send + Sync + 'static {
    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

/// One tokio task per connection, no cap.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSpawner;

impl Spawner for TokioSpawner {
    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(task);
    }
}
