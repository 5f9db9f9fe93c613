//! Running fetch futures off the UI thread.
//!
//! Native builds drive futures on a small tokio runtime. The browser has a
//! single thread, so WASM builds hand them to the JS event loop instead.

#[cfg(not(target_arch = "wasm32"))]
use anyhow::Result;

/// A boxed fetch job.
#[cfg(not(target_arch = "wasm32"))]
pub type TaskFuture = futures::future::BoxFuture<'static, ()>;
#[cfg(target_arch = "wasm32")]
pub type TaskFuture = futures::future::LocalBoxFuture<'static, ()>;

/// `Send` natively, nothing on WASM where futures are single-threaded.
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSend: Send {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send> MaybeSend for T {}
#[cfg(target_arch = "wasm32")]
pub trait MaybeSend {}
#[cfg(target_arch = "wasm32")]
impl<T> MaybeSend for T {}

/// `Send + Sync` natively, nothing on WASM.
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSendSync: Send + Sync {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + Sync> MaybeSendSync for T {}
#[cfg(target_arch = "wasm32")]
pub trait MaybeSendSync {}
#[cfg(target_arch = "wasm32")]
impl<T> MaybeSendSync for T {}

pub trait TaskSpawner {
    fn spawn(&self, task: TaskFuture);
}

/// NATIVE ONLY: owns the runtime that performs HTTP requests.
#[cfg(not(target_arch = "wasm32"))]
pub struct TokioSpawner {
    runtime: tokio::runtime::Runtime,
}

#[cfg(not(target_arch = "wasm32"))]
impl TokioSpawner {
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("coin-fetch")
            .enable_all()
            .build()?;
        Ok(Self { runtime })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TaskSpawner for TokioSpawner {
    fn spawn(&self, task: TaskFuture) {
        // Detached: the result travels back over the client's channel.
        drop(self.runtime.spawn(task));
    }
}

/// WASM ONLY: schedules the future on the browser event loop.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub struct LocalSpawner;

#[cfg(target_arch = "wasm32")]
impl TaskSpawner for LocalSpawner {
    fn spawn(&self, task: TaskFuture) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
