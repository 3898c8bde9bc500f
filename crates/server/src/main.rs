#[tokio::main]
async fn main() -> anyhow::Result<()> {
    retina_edu_server::start().await
}
