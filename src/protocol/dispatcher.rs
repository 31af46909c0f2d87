use crate::core::datagram::Datagram;
use crate::error::{constants, ProtocolError, Result};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

type HandlerFn = dyn Fn(&Datagram) -> Result<Option<Datagram>> + Send + Sync + 'static;

/// Routes received frames to handlers keyed on the frame type code.
///
/// A handler may return a reply frame for the connection to send back, or
/// `None` when the frame needs no reply. Registering the same type twice
/// replaces the previous handler.
pub struct Dispatcher {
    handlers: Arc<RwLock<HashMap<u8, Box<HandlerFn>>>>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn register<F>(&self, frame_type: u8, handler: F) -> Result<()>
    where
        F: Fn(&Datagram) -> Result<Option<Datagram>> + Send + Sync + 'static,
    {
        let mut handlers = self
            .handlers
            .write()
            .map_err(|_| ProtocolError::Custom(constants::ERR_DISPATCHER_WRITE_LOCK.to_string()))?;

        handlers.insert(frame_type, Box::new(handler));
        Ok(())
    }

    pub fn dispatch(&self, datagram: &Datagram) -> Result<Option<Datagram>> {
        let handlers = self
            .handlers
            .read()
            .map_err(|_| ProtocolError::Custom(constants::ERR_DISPATCHER_READ_LOCK.to_string()))?;

        handlers
            .get(&datagram.frame_type())
            .ok_or(ProtocolError::UnhandledType(datagram.frame_type()))
            .and_then(|handler| handler(datagram))
    }
}
