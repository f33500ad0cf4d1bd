use rolo_web::App;

fn configure_logging() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logger: {e}");
    }
}

fn main() {
    configure_logging();
    tracing::info!("Launching rolo");
    dioxus::launch(App);
}
