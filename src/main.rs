fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("starting campus affairs portal");
        campus_affairs_frontend::router::mount_app();
    }
}
