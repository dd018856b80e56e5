use std::future::Future;

/// Runs `fut` to completion in the background of the event loop.
///
/// In the browser this is the microtask queue. Native builds only export
/// static pages, so there the future simply runs on the calling thread.
pub fn spawn(fut: impl Future<Output = ()> + 'static) {
    #[cfg(target_arch = "wasm32")]
    folio_platform::web::spawn(fut);

    #[cfg(not(target_arch = "wasm32"))]
    pollster::block_on(fut);
}
