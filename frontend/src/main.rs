use frontend::App;
use yew::Renderer;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting stars mini-app");

    Renderer::<App>::new().render();
}
