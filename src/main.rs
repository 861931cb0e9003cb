#[cfg(feature = "yew")]
mod app;

#[cfg(feature = "yew")]
fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<app::App>::new().render();
}
#[cfg(not(feature = "yew"))]
fn main() {
    println!("Please enable the 'yew' feature to run the dashboard.");
}
