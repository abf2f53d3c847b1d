#![allow(dead_code)]

use surveymonkey::{Client, Credentials};
use wiremock::MockServer;

pub fn client_for(server: &MockServer) -> Client {
    Client::new(Credentials::new("abc", "shh", "https://x/cb").unwrap())
        .with_base_url(&server.uri())
        .unwrap()
}

pub fn authorized_client_for(server: &MockServer) -> Client {
    let mut client = client_for(server);
    client.set_access_token("tok123").unwrap();
    client
}
