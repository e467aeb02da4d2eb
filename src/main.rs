#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pacifico_site::run().await
}
