//! Contact message delivery.
//!
//! Delivery runs on a worker thread so the UI loop never blocks. The result
//! comes back over a channel that the loop drains with [`Courier::poll`].

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use folio_config::ContactConfig;
use folio_core::{ContactMessage, Delivery, DeliveryError};

/// Timeout for HTTP delivery requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Stand-in delivery that waits and then reports success.
#[derive(Debug, Clone)]
pub struct SimulatedDelivery {
    delay: Duration,
}

impl SimulatedDelivery {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Delivery for SimulatedDelivery {
    fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        thread::sleep(self.delay);
        tracing::info!(from = %message.email, "simulated contact delivery");
        Ok(())
    }
}

/// Posts messages as JSON to an HTTP endpoint.
#[derive(Debug)]
pub struct HttpDelivery {
    endpoint: String,
    agent: ureq::Agent,
}

impl HttpDelivery {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build()
            .new_agent();
        Self {
            endpoint: endpoint.into(),
            agent,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Delivery for HttpDelivery {
    fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        let body = request_body(message);
        match self.agent.post(&self.endpoint).send_json(&body) {
            Ok(response) => {
                tracing::info!(status = response.status().as_u16(), "contact message delivered");
                Ok(())
            }
            Err(ureq::Error::StatusCode(status)) => Err(DeliveryError::Rejected { status }),
            Err(e) => Err(DeliveryError::Transport(e.to_string())),
        }
    }
}

/// JSON payload sent to the endpoint.
fn request_body(message: &ContactMessage) -> serde_json::Value {
    serde_json::json!({
        "name": message.name,
        "email": message.email,
        "message": message.message,
    })
}

/// Pick the delivery service for a config.
pub fn delivery_from_config(config: &ContactConfig) -> Arc<dyn Delivery> {
    match config.endpoint.as_deref().map(str::trim) {
        Some(endpoint) if !endpoint.is_empty() => {
            let delivery = HttpDelivery::new(endpoint);
            tracing::info!(endpoint = delivery.endpoint(), "contact form posts to endpoint");
            Arc::new(delivery)
        }
        _ => Arc::new(SimulatedDelivery::new(Duration::from_millis(
            config.simulated_delay_ms,
        ))),
    }
}

/// Runs deliveries off the UI thread, one at a time.
pub struct Courier {
    delivery: Arc<dyn Delivery>,
    pending: Option<Receiver<Result<(), DeliveryError>>>,
}

impl Courier {
    pub fn new(delivery: Arc<dyn Delivery>) -> Self {
        Self {
            delivery,
            pending: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Start delivering `message` on a worker thread. Returns `false` when a
    /// delivery is already in flight.
    pub fn dispatch(&mut self, message: ContactMessage) -> bool {
        if self.is_busy() {
            return false;
        }
        let (tx, rx) = mpsc::channel();
        let delivery = Arc::clone(&self.delivery);
        thread::spawn(move || {
            let result = delivery.deliver(&message);
            // The receiver is gone only if the app quit mid-delivery
            let _ = tx.send(result);
        });
        self.pending = Some(rx);
        true
    }

    /// The finished delivery's result, if one has completed since the last
    /// poll. Never blocks.
    pub fn poll(&mut self) -> Option<Result<(), DeliveryError>> {
        let rx = self.pending.as_ref()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(DeliveryError::Interrupted),
        };
        self.pending = None;
        Some(result)
    }
}
