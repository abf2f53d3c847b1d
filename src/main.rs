use std::error::Error;
use std::io::{self, Write};

use surveymonkey::config;
use surveymonkey::models::User;
use surveymonkey::{Client, Reply, TokenGrant};
use url::Url;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Load configuration
    let config = config::load_config().expect("Failed to load configuration");

    let mut client = Client::from_config(&config.surveymonkey).expect("Invalid client configuration");
    if client.access_token().is_none() {
        authorize(&mut client).await.unwrap();
    }

    let user: User = client
        .get_authenticated_user()
        .await
        .and_then(Reply::decode)
        .unwrap();
    println!("Authenticated as {} ({})", user.username, user.id);
}

async fn authorize(client: &mut Client) -> Result<(), Box<dyn Error>> {
    println!("Open this URL in your browser:\n{}", client.authorization_url());
    print!("Enter the URL you were redirected to: ");
    io::stdout().flush()?;
    let mut input_url = String::new();
    io::stdin().read_line(&mut input_url)?;

    let code = code_from_redirect(input_url.trim()).ok_or("No `code` parameter in the redirect URL")?;
    let body = client
        .exchange_code(code)
        .await?
        .ok_or("The token endpoint rejected the authorization code")?;
    client.set_access_token(TokenGrant::from_body(&body)?)?;
    println!("Authorized. Set SURVEYMONKEY_ACCESS_TOKEN to skip this step next time.");
    Ok(())
}

fn code_from_redirect(redirect: &str) -> Option<String> {
    let url = Url::parse(redirect).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "code")
        .map(|(_, value)| value.into_owned())
}
