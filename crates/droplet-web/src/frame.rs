use droplet_core::SurfaceDeformer;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Milliseconds since `epoch` on the page's monotonic clock.
#[inline]
pub fn elapsed_ms(epoch: Instant) -> f64 {
    epoch.elapsed().as_secs_f64() * 1000.0
}

/// `requestAnimationFrame` loop that advances the deformer and then hands
/// control to the host's render callback. Stops on `stop()` or drop.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start(
        deformer: Rc<RefCell<SurfaceDeformer>>,
        epoch: Instant,
        on_frame: js_sys::Function,
    ) -> anyhow::Result<Self> {
        let running = Rc::new(Cell::new(true));
        let tick: FrameClosure = Rc::new(RefCell::new(None));

        let tick_next = tick.clone();
        let running_frame = running.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !running_frame.get() {
                // Break the closure's self-reference so it can be freed.
                let _ = tick_next.borrow_mut().take();
                return;
            }
            deformer.borrow_mut().advance(elapsed_ms(epoch));
            if let Err(e) = on_frame.call0(&JsValue::NULL) {
                log::error!("frame callback error: {:?}", e);
            }
            if let Err(e) = request_frame(&tick_next) {
                log::error!("{e}");
            }
        }) as Box<dyn FnMut()>));

        request_frame(&tick)?;
        log::info!("frame loop started");
        Ok(Self { running })
    }

    pub fn stop(&self) {
        if self.running.replace(false) {
            log::info!("frame loop stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &FrameClosure) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let slot = tick.borrow();
    let closure = slot
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("frame closure already released"))?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok(())
}
