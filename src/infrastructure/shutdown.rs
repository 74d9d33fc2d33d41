use tokio::sync::broadcast;

pub trait Shutdown {
    fn subscribe(&self) -> broadcast::Receiver<()>;
}

/// Broadcasts the process-wide stop signal to every task that subscribed.
#[derive(Clone)]
pub struct ShutdownChannel {
    shutdown: broadcast::Sender<()>,
}

impl ShutdownChannel {
    pub fn new(shutdown: broadcast::Sender<()>) -> Self {
        Self { shutdown }
    }

    /// Resolves once the stop signal is sent or every sender is gone.
    pub async fn wait(&self) {
        let mut receiver = self.subscribe();
        let _ = receiver.recv().await;
    }
}

impl Shutdown for ShutdownChannel {
    fn subscribe(&self) -> broadcast::Receiver<()> {
        self.shutdown.subscribe()
    }
}
