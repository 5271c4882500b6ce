use serde::Deserialize;

///
/// Envelope of every event received over the push channel.
/// The payload stays untyped until the event name is known.
///
#[derive(Debug, Deserialize)]
pub struct PushEventFrame {
    pub event: String,
    #[serde(default)]
    pub data: serde_json::Value,
}
