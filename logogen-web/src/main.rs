mod aistudio;
mod app;
mod components;
mod download;
mod history;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
