use crate::{ActionReply, Client};

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/");
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8000");
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_action_reply_serializes_acceptance() {
    let reply = ActionReply {
        message: "Server is starting up".to_string(),
        accepted: true,
    };

    let value = serde_json::to_value(&reply).unwrap();

    assert_eq!(value["message"], "Server is starting up");
    assert_eq!(value["accepted"], true);
}
