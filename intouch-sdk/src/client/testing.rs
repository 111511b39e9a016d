//! Test doubles shared by the facade tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use super::{Intouch, Transport, TransportError};
use super::transport::GatewayRequest;
use crate::config::{Credentials, GatewayUrls};

/// Records every request and answers with a fixed body.
#[derive(Debug)]
pub(crate) struct Recorder {
    reply: Value,
    requests: Mutex<Vec<GatewayRequest>>,
}

impl Recorder {
    pub(crate) fn replying(reply: Value) -> Arc<Self> {
        Arc::new(Self {
            reply,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn requests(&self) -> Vec<GatewayRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last(&self) -> GatewayRequest {
        self.requests().pop().expect("no request recorded")
    }
}

#[async_trait]
impl Transport for Recorder {
    async fn send(&self, request: GatewayRequest) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(request);
        Ok(self.reply.clone())
    }
}

pub(crate) fn credentials() -> Credentials {
    Credentials {
        agent_code: "AGENT1".into(),
        partner_id: "CI8724".into(),
        partner_name: "Hub Social".into(),
        login_api: "0708517414".into(),
        password_api: "XXXX".into(),
        username: "digest-user".into(),
        password: "digest-pass".into(),
    }
}

/// A client whose transport is `recorder`.
pub(crate) fn intouch(recorder: &Arc<Recorder>) -> Intouch {
    Intouch::builder()
        .credentials(credentials())
        .urls(GatewayUrls::default())
        .transport(recorder.clone())
        .build()
        .unwrap()
}

pub(crate) fn successful() -> Value {
    json!({ "status": "SUCCESSFUL" })
}
