#[tokio::main]
async fn main() {
    recipe_backend::start_server().await;
}
