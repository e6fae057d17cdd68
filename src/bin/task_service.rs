use metered_services::{startup, Service};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    startup::run(Service::Task).await
}
