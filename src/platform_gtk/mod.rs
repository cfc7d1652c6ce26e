use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk::prelude::*;
use tracing::warn;

use crate::api::BarChartEngine;
use crate::core::Viewport;
use crate::render::CairoContextRenderer;
use crate::render::Renderer;

/// Embeds a [`BarChartEngine`] into a GTK `DrawingArea`.
///
/// Draw callbacks run a rebuild pass on the widget's cairo context; a primary
/// click selects the group under the pointer and queues a redraw.
pub struct GtkBarChartAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    engine: Rc<RefCell<BarChartEngine<R>>>,
    area: gtk::DrawingArea,
}

impl<R> GtkBarChartAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    #[must_use]
    pub fn new(engine: BarChartEngine<R>) -> Self {
        let engine = Rc::new(RefCell::new(engine));
        let area = gtk::DrawingArea::new();
        {
            let viewport = engine.borrow().viewport();
            area.set_content_width(viewport.width as i32);
            area.set_content_height(viewport.height as i32);
        }

        let draw_engine = Rc::clone(&engine);
        area.set_draw_func(move |_area, context, width, height| {
            // A draw signal raised while the engine is busy is dropped, the
            // running pass already reflects the latest state.
            let Ok(mut engine) = draw_engine.try_borrow_mut() else {
                return;
            };
            if width > 0 && height > 0 {
                let viewport = Viewport::new(width as u32, height as u32);
                if let Err(err) = engine.set_viewport(viewport) {
                    warn!(error = %err, "ignoring unusable drawing area size");
                    return;
                }
            }
            if let Err(err) = engine.render_on_cairo_context(context) {
                warn!(error = %err, "bar chart draw pass failed");
            }
        });

        let click = gtk::GestureClick::new();
        let click_engine = Rc::clone(&engine);
        let click_area = area.clone();
        click.connect_released(move |_gesture, _n_press, x, y| {
            let changed = match click_engine.try_borrow_mut() {
                Ok(mut engine) => engine.tap(x, y),
                Err(_) => false,
            };
            if changed {
                click_area.queue_draw();
            }
        });
        area.add_controller(click);

        Self { engine, area }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Shared engine handle for host-side data updates.
    ///
    /// Call [`GtkBarChartAdapter::queue_redraw`] after mutating it.
    #[must_use]
    pub fn engine(&self) -> Rc<RefCell<BarChartEngine<R>>> {
        Rc::clone(&self.engine)
    }

    pub fn queue_redraw(&self) {
        self.area.queue_draw();
    }
}
